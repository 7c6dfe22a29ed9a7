//! `cmdform` is a one line grammar for command definitions.
//!
//! A definition describes the shape of a command: its name, its positional arguments, and its named parameters.
//! `cmdform` parses and validates the definition, producing a [`Definition`].
//! Once an invocation layer has matched an actual command line against the [`Definition`], the typed accessors on [`Parameter`] read the resolved values.
//!
//! `cmdform` deliberately does not match command lines, render help, or dispatch commands.
//! It is the definition layer which those pieces are built upon.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/deploy.rs")]
//! ```
//!
//! # Grammar
//! ```text
//! definition      := command-name (WS argument)* (WS option)*
//! command-name    := identifier
//! argument        := "$" identifier ["*"] | "...$" identifier
//! option          := flag | parameter
//! flag            := "--" name-with-short ["?"]
//! parameter       := "--" name-with-short "=" [default-value]
//! name-with-short := identifier ["[" ALPHA "]"]
//! identifier      := LOWER (LOWER | DIGIT | "-")+
//! ```
//!
//! Tokens are separated by spaces.
//! A backslash at the end of a token keeps the following space: `--motd=hello\ world` is a single token.
//!
//! ### Arguments
//! Arguments are positional: `copy $source $target`.
//! The final argument may be a *wildcard*, written `$targets*` or `...$targets`, which soaks up all remaining positional values.
//! Only one wildcard is allowed, and no argument may follow it.
//!
//! ### Parameters
//! Parameters are named, and may be accessed by either their long form or short form.
//! * A *flag* carries presence only: `--force[f]?`.
//! * A *value parameter* carries a value, with an optional default: `--region[r]=us-east`.
//!
//! # Resolved values
//! [`Parameter::resolve`] binds the value found in an invocation.
//! The following accessors read it:
//!
//! ```text
//! Accessor                  | Produces        | Fails with
//! --------------------------|-----------------|---------------------------------------------
//! as_string                 | String          |
//! as_int / as_float         | i64 / f64       | InvalidConversion
//! as_bool                   | bool            | InvalidConversion
//! as_ranged_int/float       | i64 / f64       | InvalidParameterValue (unconvertible/range)
//! as_string/int/float_list  | Vec<..>         | InvalidListElement
//! as_int/string_enum        | i64 / String    | InvalidParameterValue (unmapped)
//! is_enabled                | bool            | never: only precisely "1" is enabled
//! ```
//!
//! All of the above, except `is_enabled`, fail with [`ValueError::CannotUseFlagAsValue`] on a flag.
//!
//! # Compile time definitions
//! [`definition!`] validates a definition literal at compile time, so an invalid definition never makes it to runtime.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while tokenizing and classifying definitions.

/// Parse a definition literal, validating it at compile time.
///
/// ```
/// use cmdform::definition;
///
/// let deploy = definition!("deploy $service --region[r]=us-east --force[f]?");
/// assert_eq!(deploy.command_name(), "deploy");
/// ```
pub use cmdform_derive::definition;

pub use cmdform_builder::*;
