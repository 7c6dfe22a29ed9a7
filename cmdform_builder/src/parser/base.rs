use thiserror::Error;

use crate::api::{Argument, Definition, Parameter};
use crate::constant::*;
use crate::parser::name::{validate_long_name, validate_name, NameError};
use crate::tokens::tokenize;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reason a definition failed to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// A token names something with an invalid identifier.
    #[error("Invalid command identifier '{token}': {cause}")]
    InvalidCommandIdentifier {
        /// The offending token, as it appeared in the definition.
        token: String,
        /// The validation failure.
        #[source]
        cause: NameError,
    },

    /// An argument appears after the wildcard argument.
    #[error("Unexpected argument '{token}' after the wildcard argument.")]
    UnexpectedWildcardArgument {
        /// The offending token.
        token: String,
    },

    /// A second bare token appears after the command name.
    #[error("Unexpected value '{token}' after the command name.")]
    UnexpectedCommandParameter {
        /// The offending token.
        token: String,
    },

    /// The definition has no command name.
    #[error("Missing the command name.")]
    MissingCommandName,
}

/// A definition failed to parse.
///
/// Carries the full raw definition alongside the specific [`DefinitionError`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Definition parse error in '{raw}': {kind}")]
pub struct DefinitionParseError {
    pub(crate) raw: String,
    pub(crate) kind: DefinitionError,
}

impl DefinitionParseError {
    pub(crate) fn new(raw: impl Into<String>, kind: DefinitionError) -> Self {
        Self {
            raw: raw.into(),
            kind,
        }
    }

    /// The raw definition which failed to parse.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The specific failure.
    pub fn kind(&self) -> &DefinitionError {
        &self.kind
    }
}

/// Single pass classification of definition tokens.
/// The first error aborts the pass.
#[derive(Debug, Default)]
pub(crate) struct Classifier {
    command: Option<String>,
    arguments: Vec<Argument>,
    parameters: Vec<Parameter>,
    wildcard: bool,
}

impl Classifier {
    pub(crate) fn feed(&mut self, token: &str) -> Result<(), DefinitionError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Classifying '{token}'.");
        }

        // Find a flag or parameter, such as:
        //  --force
        //  --force[f]?
        //  --region[r]=
        //  --region[r]=us-east
        if let Some(option) = token.strip_prefix(OPTION_PREFIX) {
            return match option.split_once(DEFAULT_DELIMITER) {
                Some((name, default)) => self.feed_parameter(token, name, default),
                None => {
                    let name = option.strip_suffix(FLAG_SUFFIX).unwrap_or(option);
                    self.feed_flag(token, name)
                }
            };
        }

        // Find an argument, such as:
        //  $service
        //  $extra*
        //  ...$extra
        if let Some(name) = token.strip_prefix(VARIADIC_PREFIX) {
            let name = name.strip_suffix(WILDCARD_SUFFIX).unwrap_or(name);
            return self.feed_argument(token, name, true);
        }

        if let Some(name) = token.strip_prefix(ARGUMENT_PREFIX) {
            return match name.strip_suffix(WILDCARD_SUFFIX) {
                Some(name) => self.feed_argument(token, name, true),
                None => self.feed_argument(token, name, false),
            };
        }

        // Everything else must be the command name.
        self.feed_command(token)
    }

    fn feed_flag(&mut self, token: &str, name: &str) -> Result<(), DefinitionError> {
        let name = validate_name(name).map_err(|cause| invalid(token, cause))?;
        self.parameters.push(Parameter::flag(name));
        Ok(())
    }

    fn feed_parameter(
        &mut self,
        token: &str,
        name: &str,
        default: &str,
    ) -> Result<(), DefinitionError> {
        let name = validate_name(name).map_err(|cause| invalid(token, cause))?;
        let default = if default.is_empty() {
            None
        } else {
            Some(default.to_string())
        };
        self.parameters.push(Parameter::option(name, default));
        Ok(())
    }

    fn feed_argument(
        &mut self,
        token: &str,
        name: &str,
        wildcard: bool,
    ) -> Result<(), DefinitionError> {
        let name = validate_long_name(name).map_err(|cause| invalid(token, cause))?;

        if self.wildcard {
            return Err(DefinitionError::UnexpectedWildcardArgument {
                token: token.to_string(),
            });
        }

        self.wildcard = wildcard;
        self.arguments.push(Argument::new(name, wildcard));
        Ok(())
    }

    fn feed_command(&mut self, token: &str) -> Result<(), DefinitionError> {
        if self.command.is_some() {
            return Err(DefinitionError::UnexpectedCommandParameter {
                token: token.to_string(),
            });
        }

        let name = validate_long_name(token).map_err(|cause| invalid(token, cause))?;
        self.command.replace(name);
        Ok(())
    }

    pub(crate) fn close(self, raw: &str) -> Result<Definition, DefinitionError> {
        let Classifier {
            command,
            arguments,
            parameters,
            ..
        } = self;
        let command = command.ok_or(DefinitionError::MissingCommandName)?;
        Ok(Definition::new(raw, command, arguments, parameters))
    }
}

fn invalid(token: &str, cause: NameError) -> DefinitionError {
    DefinitionError::InvalidCommandIdentifier {
        token: token.to_string(),
        cause,
    }
}

/// Classify the already tokenized `tokens` of `raw`.
pub(crate) fn classify(raw: &str, tokens: &[String]) -> Result<Definition, DefinitionParseError> {
    let mut classifier = Classifier::default();

    for token in tokens {
        classifier
            .feed(token)
            .map_err(|kind| DefinitionParseError::new(raw, kind))?;
    }

    classifier
        .close(raw)
        .map_err(|kind| DefinitionParseError::new(raw, kind))
}

/// Tokenize then classify `raw`.
pub(crate) fn parse(raw: &str) -> Result<Definition, DefinitionParseError> {
    let result = classify(raw, &tokenize(raw));

    #[cfg(feature = "tracing_debug")]
    {
        if let Err(error) = &result {
            debug!("{error}");
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ParameterKind;
    use rstest::rstest;

    fn name_error(token: &str) -> NameError {
        NameError {
            token: token.to_string(),
        }
    }

    #[test]
    fn classify_empty() {
        let error = classify("", &[]).unwrap_err();
        assert_eq!(error.raw(), "");
        assert_eq!(error.kind(), &DefinitionError::MissingCommandName);
    }

    #[test]
    fn parse_command_only() {
        let definition = parse("deploy").unwrap();
        assert_eq!(definition.command_name(), "deploy");
        assert_eq!(definition.raw(), "deploy");
        assert!(definition.arguments().is_empty());
        assert!(definition.parameters().is_empty());
    }

    #[test]
    fn parse_arguments() {
        let definition = parse("deploy $service $extra*").unwrap();
        assert_eq!(definition.command_name(), "deploy");
        assert_eq!(
            definition.arguments(),
            &[
                Argument::new("service".to_string(), false),
                Argument::new("extra".to_string(), true)
            ]
        );
    }

    #[rstest]
    #[case("deploy ...$extra")]
    #[case("deploy ...$extra*")]
    #[case("deploy $extra*")]
    fn parse_wildcard_spellings(#[case] raw: &str) {
        let definition = parse(raw).unwrap();
        assert_eq!(
            definition.arguments(),
            &[Argument::new("extra".to_string(), true)]
        );
    }

    #[test]
    fn parse_flag_and_parameter() {
        let definition = parse("deploy --force[f]? --region[r]=us-east").unwrap();
        let parameters = definition.parameters();
        assert_eq!(parameters.len(), 2);

        assert_eq!(parameters[0].name(), "force");
        assert_eq!(parameters[0].short(), Some('f'));
        assert_eq!(parameters[0].kind(), ParameterKind::Flag);
        assert_eq!(parameters[0].default(), None);

        assert_eq!(parameters[1].name(), "region");
        assert_eq!(parameters[1].short(), Some('r'));
        assert_eq!(parameters[1].kind(), ParameterKind::Value);
        assert_eq!(parameters[1].default(), Some("us-east"));
    }

    #[rstest]
    #[case("deploy --force", "force", None, ParameterKind::Flag, None)]
    #[case("deploy --force?", "force", None, ParameterKind::Flag, None)]
    #[case("deploy --force[f]", "force", Some('f'), ParameterKind::Flag, None)]
    #[case("deploy --region=", "region", None, ParameterKind::Value, None)]
    #[case("deploy --region[R]=", "region", Some('R'), ParameterKind::Value, None)]
    #[case("deploy --region=a=b", "region", None, ParameterKind::Value, Some("a=b"))]
    #[case(r"deploy --motd=hello\ world", "motd", None, ParameterKind::Value, Some("hello world"))]
    fn parse_option_shapes(
        #[case] raw: &str,
        #[case] expected_name: &str,
        #[case] expected_short: Option<char>,
        #[case] expected_kind: ParameterKind,
        #[case] expected_default: Option<&str>,
    ) {
        let definition = parse(raw).unwrap();
        let parameters = definition.parameters();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters[0].name(), expected_name);
        assert_eq!(parameters[0].short(), expected_short);
        assert_eq!(parameters[0].kind(), expected_kind);
        assert_eq!(parameters[0].default(), expected_default);
    }

    #[test]
    fn parse_interleaved() {
        let definition = parse("--verbose $first deploy --to=prod $rest*").unwrap();
        assert_eq!(definition.command_name(), "deploy");
        assert_eq!(definition.arguments().len(), 2);
        assert_eq!(definition.parameters().len(), 2);
    }

    #[rstest]
    #[case("deploy $alpha* $beta", "$beta")]
    #[case("deploy $alpha* $beta*", "$beta*")]
    #[case("deploy ...$alpha $beta", "$beta")]
    #[case("deploy $alpha* ...$beta", "...$beta")]
    #[case("deploy $first $alpha* $beta", "$beta")]
    fn parse_unexpected_wildcard(#[case] raw: &str, #[case] token: &str) {
        let error = parse(raw).unwrap_err();
        assert_eq!(error.raw(), raw);
        assert_eq!(
            error.kind(),
            &DefinitionError::UnexpectedWildcardArgument {
                token: token.to_string()
            }
        );
    }

    #[test]
    fn parse_wildcard_checks_name_first() {
        let error = parse("deploy $alpha* $B").unwrap_err();
        assert_matches!(
            error.kind(),
            DefinitionError::InvalidCommandIdentifier { token, .. } if token == "$B"
        );
    }

    #[rstest]
    #[case("deploy now", "now")]
    #[case("deploy $service now", "now")]
    #[case("deploy NOW", "NOW")]
    #[case("deploy -f", "-f")]
    fn parse_unexpected_command_parameter(#[case] raw: &str, #[case] token: &str) {
        let error = parse(raw).unwrap_err();
        assert_eq!(
            error.kind(),
            &DefinitionError::UnexpectedCommandParameter {
                token: token.to_string()
            }
        );
    }

    #[rstest]
    #[case("Deploy", "Deploy", "Deploy")]
    #[case("9deploy", "9deploy", "9deploy")]
    #[case("-f", "-f", "-f")]
    #[case("deploy $", "$", "")]
    #[case("deploy $*", "$*", "")]
    #[case("deploy $Service", "$Service", "Service")]
    #[case("deploy $service[st]", "$service[st]", "service[st]")]
    #[case("deploy ...$x", "...$x", "x")]
    #[case("deploy --", "--", "")]
    #[case("deploy --=x", "--=x", "")]
    #[case("deploy --Force", "--Force", "Force")]
    #[case("deploy --force[fg]?", "--force[fg]?", "force[fg]")]
    #[case("deploy --force??", "--force??", "force?")]
    #[case("deploy --r=us", "--r=us", "r")]
    fn parse_invalid_identifier(#[case] raw: &str, #[case] token: &str, #[case] cause: &str) {
        let error = parse(raw).unwrap_err();
        assert_eq!(
            error.kind(),
            &DefinitionError::InvalidCommandIdentifier {
                token: token.to_string(),
                cause: name_error(cause),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("$service")]
    #[case("--force $files*")]
    fn parse_missing_command_name(#[case] raw: &str) {
        let error = parse(raw).unwrap_err();
        assert_eq!(error.kind(), &DefinitionError::MissingCommandName);
    }

    #[test]
    fn parse_error_message() {
        let error = parse("deploy $alpha* $beta").unwrap_err();
        let message = error.to_string();
        crate::test::assert_contains!(message, "Definition parse error");
        crate::test::assert_contains!(message, "'deploy $alpha* $beta'");
        crate::test::assert_contains!(message, "'$beta'");
    }

    #[test]
    fn parse_positional_short_forms() {
        let definition = parse("deploy[d] $service[s] $extra[e]* --force[f]?").unwrap();
        assert_eq!(definition.command_name(), "deploy");
        assert_eq!(
            definition.arguments(),
            &[
                Argument::new("service".to_string(), false),
                Argument::new("extra".to_string(), true)
            ]
        );
        assert_eq!(definition.parameters()[0].short(), Some('f'));
    }

    #[test]
    fn parse_single_letter_names() {
        // Names need at least two characters, so this fails before the wildcard check.
        let error = parse("deploy $a* $b").unwrap_err();
        assert_matches!(
            error.kind(),
            DefinitionError::InvalidCommandIdentifier { token, .. } if token == "$a*"
        );
    }

    #[test]
    fn parse_duplicates_are_kept() {
        let definition = parse("deploy --region=a --region=b").unwrap();
        assert_eq!(definition.parameters().len(), 2);
        assert_eq!(definition.parameters()[0].default(), Some("a"));
        assert_eq!(definition.parameters()[1].default(), Some("b"));
    }
}
