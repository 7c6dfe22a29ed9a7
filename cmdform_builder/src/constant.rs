// Long form, then an optional single letter short form: `region[r]`.
pub(crate) const NAME_PATTERN: &str = r"^(?P<long>[a-z][a-z0-9-]+)(?:\[(?P<short>[A-Za-z])\])?$";

pub(crate) const OPTION_PREFIX: &str = "--";
pub(crate) const ARGUMENT_PREFIX: &str = "$";
pub(crate) const VARIADIC_PREFIX: &str = "...$";
pub(crate) const WILDCARD_SUFFIX: &str = "*";
pub(crate) const FLAG_SUFFIX: &str = "?";
pub(crate) const DEFAULT_DELIMITER: char = '=';

pub(crate) const TOKEN_SEPARATOR: char = ' ';
pub(crate) const ESCAPE: char = '\\';

pub(crate) const LIST_DELIMITER: char = ',';
pub(crate) const ENABLED: &str = "1";
