use crate::constant::*;
use crate::model::{Binding, Name};

/// One positional slot in a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    wildcard: bool,
}

impl Argument {
    pub(crate) fn new(name: String, wildcard: bool) -> Self {
        Self { name, wildcard }
    }

    /// The argument name, without the `$` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this argument soaks up all remaining positional values.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{ARGUMENT_PREFIX}{}", self.name)?;

        if self.wildcard {
            write!(f, "{WILDCARD_SUFFIX}")?;
        }

        Ok(())
    }
}

/// The class of a named parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Presence only: `--force`.
    Flag,
    /// Carries a value: `--region=us-east`.
    Value,
}

/// A named flag or value parameter.
///
/// Parameters taken from a [`Definition`](crate::Definition) are unresolved.
/// Once the invocation is matched, [`Parameter::resolve`] binds the actual value and the typed accessors (ex: [`Parameter::as_int`]) read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    short: Option<char>,
    kind: ParameterKind,
    binding: Binding,
    about: Option<String>,
}

impl Parameter {
    pub(crate) fn flag(name: Name) -> Self {
        let (name, short) = name.into_parts();
        Self {
            name,
            short,
            kind: ParameterKind::Flag,
            binding: Binding::Unresolved { default: None },
            about: None,
        }
    }

    pub(crate) fn option(name: Name, default: Option<String>) -> Self {
        let (name, short) = name.into_parts();
        Self {
            name,
            short,
            kind: ParameterKind::Value,
            binding: Binding::Unresolved { default },
            about: None,
        }
    }

    /// The long form name, without the `--` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short form alias, if declared.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// Whether this is a flag or a value parameter.
    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    /// Whether this is a flag.
    pub fn is_flag(&self) -> bool {
        self.kind == ParameterKind::Flag
    }

    /// Document the about message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// The about message, if documented.
    pub fn description(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// The value state of this parameter.
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// The declared default, while unresolved.
    pub fn default(&self) -> Option<&str> {
        match &self.binding {
            Binding::Unresolved { default } => default.as_deref(),
            Binding::Resolved { .. } => None,
        }
    }

    /// Whether a value has been bound.
    pub fn is_resolved(&self) -> bool {
        matches!(self.binding, Binding::Resolved { .. })
    }

    /// Produce a copy of this parameter, bound to the `value` found in an invocation.
    ///
    /// By convention, a flag which is present resolves to `"1"` (see [`Parameter::is_enabled`]).
    ///
    /// ### Example
    /// ```
    /// # use cmdform_builder as cmdform;
    /// use cmdform::Definition;
    ///
    /// let definition = Definition::parse("deploy --replicas[n]=1").unwrap();
    /// let replicas = definition.parameter_named("n").unwrap().resolve("3");
    ///
    /// assert_eq!(replicas.as_int().unwrap(), 3);
    /// ```
    pub fn resolve(&self, value: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            short: self.short,
            kind: self.kind,
            binding: Binding::Resolved {
                value: value.into(),
            },
            about: self.about.clone(),
        }
    }

    pub(crate) fn matches(&self, name: &str) -> bool {
        let short_matches = self
            .short
            .map(|short| name.chars().eq(std::iter::once(short)))
            .unwrap_or(false);

        short_matches || self.name == name
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{OPTION_PREFIX}{}", self.name)?;

        if let Some(short) = &self.short {
            write!(f, "[{short}]")?;
        }

        match self.kind {
            ParameterKind::Flag => write!(f, "{FLAG_SUFFIX}"),
            ParameterKind::Value => {
                let value = self.binding.stored();
                let escaped = value.replace(
                    TOKEN_SEPARATOR,
                    &format!("{ESCAPE}{TOKEN_SEPARATOR}"),
                );
                write!(f, "{DEFAULT_DELIMITER}{escaped}")
            }
        }
    }
}
