mod base;
mod name;

pub(crate) use base::parse;
pub use base::{DefinitionError, DefinitionParseError};
pub use name::{validate_name, NameError};
