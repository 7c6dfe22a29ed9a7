use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::constant::NAME_PATTERN;
use crate::model::Name;

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(NAME_PATTERN).expect("internal error - the name pattern must compile")
});

/// The token does not conform to the identifier pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{token}' does not conform to the name pattern '{}'.", NAME_PATTERN)]
pub struct NameError {
    /// The offending text.
    pub token: String,
}

impl NameError {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

/// Validate `token` as an identifier, with an optional `[x]` short form.
///
/// The long form is a lowercase letter followed by at least one lowercase letter, digit, or hyphen.
/// The whole token must match.
///
/// ### Example
/// ```
/// # use cmdform_builder as cmdform;
/// use cmdform::validate_name;
///
/// let name = validate_name("region[r]").unwrap();
/// assert_eq!(name.long(), "region");
/// assert_eq!(name.short(), Some('r'));
///
/// assert!(validate_name("Region").is_err());
/// ```
pub fn validate_name(token: &str) -> Result<Name, NameError> {
    let captures = NAME_REGEX
        .captures(token)
        .ok_or_else(|| NameError::new(token))?;
    let short = captures
        .name("short")
        .and_then(|short| short.as_str().chars().next());

    Ok(Name::new(&captures["long"], short))
}

/// Validate `token` as a positional identifier: the command name or an argument.
/// A `[x]` short form is accepted, but positions are never looked up by it, so only the long form is kept.
pub(crate) fn validate_long_name(token: &str) -> Result<String, NameError> {
    let (long, _) = validate_name(token)?.into_parts();
    Ok(long)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    const TAIL: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

    fn random_identifier() -> String {
        let mut rng = thread_rng();
        let mut identifier = String::default();
        identifier.push(rng.gen_range(b'a'..=b'z') as char);

        for _ in 0..rng.gen_range(1..12) {
            identifier.push(TAIL[rng.gen_range(0..TAIL.len())] as char);
        }

        identifier
    }

    #[test]
    fn validate_name_random() {
        for _ in 0..100 {
            let identifier = random_identifier();
            let name = validate_name(&identifier).unwrap();
            assert_eq!(name.long(), identifier);
            assert_eq!(name.short(), None);
        }
    }

    #[test]
    fn validate_name_random_short() {
        let mut rng = thread_rng();

        for _ in 0..100 {
            let identifier = random_identifier();
            let short = if rng.gen() {
                rng.gen_range('a'..='z')
            } else {
                rng.gen_range('A'..='Z')
            };
            let name = validate_name(&format!("{identifier}[{short}]")).unwrap();
            assert_eq!(name.long(), identifier);
            assert_eq!(name.short(), Some(short));
        }
    }

    #[rstest]
    #[case("ab", "ab", None)]
    #[case("a-", "a-", None)]
    #[case("x9", "x9", None)]
    #[case("dry-run", "dry-run", None)]
    #[case("dry-run[n]", "dry-run", Some('n'))]
    #[case("dry-run[N]", "dry-run", Some('N'))]
    #[case("a--b", "a--b", None)]
    fn validate_name_ok(
        #[case] token: &str,
        #[case] expected_long: &str,
        #[case] expected_short: Option<char>,
    ) {
        let name = validate_name(token).unwrap();
        assert_eq!(name.long(), expected_long);
        assert_eq!(name.short(), expected_short);
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("Deploy")]
    #[case("dePloy")]
    #[case("9lives")]
    #[case("-deploy")]
    #[case("de_ploy")]
    #[case("deploy ")]
    #[case(" deploy")]
    #[case("deploy[]")]
    #[case("deploy[ab]")]
    #[case("deploy[1]")]
    #[case("deploy[d]x")]
    #[case("deploy [d]")]
    #[case("[d]")]
    #[case("déploy")]
    fn validate_name_invalid(#[case] token: &str) {
        let error = validate_name(token).unwrap_err();
        assert_eq!(error.token, token);
    }

    #[test]
    fn validate_name_message() {
        let error = validate_name("Deploy").unwrap_err();
        crate::test::assert_contains!(error.to_string(), "'Deploy'");
        crate::test::assert_contains!(error.to_string(), NAME_PATTERN);
    }

    #[rstest]
    #[case("deploy", Ok("deploy".to_string()))]
    #[case("deploy[d]", Ok("deploy".to_string()))]
    #[case("deploy[D]", Ok("deploy".to_string()))]
    #[case("Deploy", Err(NameError::new("Deploy")))]
    #[case("deploy[dx]", Err(NameError::new("deploy[dx]")))]
    fn validate_long_name_cases(#[case] token: &str, #[case] expected: Result<String, NameError>) {
        assert_eq!(validate_long_name(token), expected);
    }
}
