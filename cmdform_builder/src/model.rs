/// A validated identifier: the long form, plus an optional single letter short form.
///
/// Written `region[r]` in a definition, which produces the long form `region` and the short form `r`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    long: String,
    short: Option<char>,
}

impl Name {
    pub(crate) fn new(long: impl Into<String>, short: Option<char>) -> Self {
        Self {
            long: long.into(),
            short,
        }
    }

    /// The long form of this name.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// The short form of this name, if one was declared.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn into_parts(self) -> (String, Option<char>) {
        (self.long, self.short)
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.short {
            Some(short) => write!(f, "{}[{short}]", self.long),
            None => write!(f, "{}", self.long),
        }
    }
}

/// The value state of a parameter.
///
/// Parameters come out of a definition `Unresolved`.
/// The invocation matching layer produces `Resolved` copies once it has found the actual value on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Declared, but not yet matched against an invocation.
    Unresolved {
        /// The declared default, if any.
        default: Option<String>,
    },
    /// Matched against an invocation.
    Resolved {
        /// The value found for this parameter.
        value: String,
    },
}

impl Binding {
    /// The text the value accessors read: the resolved value, otherwise the default, otherwise the empty string.
    pub(crate) fn stored(&self) -> &str {
        match self {
            Binding::Resolved { value } => value.as_str(),
            Binding::Unresolved {
                default: Some(default),
            } => default.as_str(),
            Binding::Unresolved { default: None } => "",
        }
    }
}
