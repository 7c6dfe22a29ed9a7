use std::str::FromStr;

use crate::api::{Argument, Parameter};
use crate::parser::{self, DefinitionParseError};

/// The parsed and validated description of one command: its name, positional arguments, and named parameters.
///
/// Built once from a single line definition, such as:
/// ```text
/// deploy $service $extra* --region[r]=us-east --force[f]?
/// ```
///
/// * `deploy`: the command name.
/// * `$service`: a positional argument.
/// * `$extra*` (or `...$extra`): the wildcard argument, which soaks up all remaining positional values.
/// There may be at most one, and it must be the final argument.
/// * `--region[r]=us-east`: a value parameter with the short form `r` and the default `us-east`.
/// * `--force[f]?`: a flag with the short form `f`.
///
/// Use a backslash to keep a space inside a token: `--motd=hello\ world`.
///
/// ### Example
/// ```
/// # use cmdform_builder as cmdform;
/// use cmdform::Definition;
///
/// let definition = Definition::parse("deploy $service $extra* --region[r]=us-east --force[f]?").unwrap();
///
/// assert_eq!(definition.command_name(), "deploy");
/// assert_eq!(definition.argument_at(0).unwrap().name(), "service");
/// assert_eq!(definition.argument_at(7).unwrap().name(), "extra");
/// assert_eq!(definition.parameter_named("r").unwrap().default(), Some("us-east"));
/// assert!(definition.parameter_named("force").unwrap().is_flag());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    raw: String,
    command: String,
    about: Option<String>,
    arguments: Vec<Argument>,
    parameters: Vec<Parameter>,
}

impl Definition {
    pub(crate) fn new(
        raw: impl Into<String>,
        command: String,
        arguments: Vec<Argument>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            raw: raw.into(),
            command,
            about: None,
            arguments,
            parameters,
        }
    }

    /// Parse a definition.
    ///
    /// Parsing is all or nothing: the first invalid token fails the whole definition.
    ///
    /// ### Example
    /// ```
    /// # use cmdform_builder as cmdform;
    /// use cmdform::{Definition, DefinitionError};
    ///
    /// let error = Definition::parse("deploy $first* $second").unwrap_err();
    ///
    /// assert_eq!(
    ///     error.kind(),
    ///     &DefinitionError::UnexpectedWildcardArgument { token: "$second".to_string() }
    /// );
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DefinitionParseError> {
        parser::parse(raw)
    }

    /// Document the about message for this definition.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// The about message, if documented.
    pub fn description(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// Document the about message for the parameter `name` (short or long form).
    /// Applies to the same parameter [`Definition::parameter_named`] finds, and does nothing if there is none.
    ///
    /// ### Example
    /// ```
    /// # use cmdform_builder as cmdform;
    /// use cmdform::Definition;
    ///
    /// let definition = Definition::parse("deploy --region[r]=us-east")
    ///     .unwrap()
    ///     .describe("r", "The region to deploy into.");
    ///
    /// assert_eq!(
    ///     definition.parameter_named("region").unwrap().description(),
    ///     Some("The region to deploy into.")
    /// );
    /// ```
    pub fn describe(mut self, name: &str, description: impl Into<String>) -> Self {
        if let Some(index) = self.parameters.iter().position(|p| p.matches(name)) {
            let parameter = self.parameters.remove(index).about(description);
            self.parameters.insert(index, parameter);
        }

        self
    }

    /// The raw definition this was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The command name.
    pub fn command_name(&self) -> &str {
        &self.command
    }

    /// The positional arguments, in declaration order.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// The flags and value parameters, in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// The flags only, in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.is_flag())
    }

    /// The value parameters only, in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.is_flag())
    }

    /// The wildcard argument, if declared.
    pub fn wildcard(&self) -> Option<&Argument> {
        self.arguments.last().filter(|a| a.is_wildcard())
    }

    /// The argument which receives the positional value at `position`.
    ///
    /// Positions past the declared arguments go to the wildcard argument, when there is one.
    pub fn argument_at(&self, position: usize) -> Option<&Argument> {
        self.arguments
            .get(position)
            .or_else(|| self.wildcard())
    }

    /// The first parameter, in declaration order, whose short or long form is `name`.
    ///
    /// Duplicate names are allowed in a definition, in which case the earlier declaration wins.
    pub fn parameter_named(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.matches(name))
    }
}

impl FromStr for Definition {
    type Err = DefinitionParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Definition::parse(raw)
    }
}

/// Renders the canonical one line form: command name, then arguments, then parameters.
impl std::fmt::Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command)?;

        for argument in &self.arguments {
            write!(f, " {argument}")?;
        }

        for parameter in &self.parameters {
            write!(f, " {parameter}")?;
        }

        Ok(())
    }
}
