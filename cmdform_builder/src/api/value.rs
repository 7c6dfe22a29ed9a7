use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

use crate::api::Parameter;
use crate::constant::*;

/// Why a value was rejected by an accessor with constraints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    /// The value does not convert to the requested type.
    #[error("cannot convert to {type_name}")]
    Unconvertible {
        /// The requested type.
        type_name: &'static str,
    },

    /// The value converts, but falls outside the inclusive bounds.
    #[error("outside the range [{min}, {max}]")]
    OutOfRange {
        /// The lower bound.
        min: String,
        /// The upper bound.
        max: String,
    },

    /// The value is not one of the mapped choices.
    #[error("not one of the choices")]
    Unmapped,
}

/// A resolved value could not be read as requested.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    /// A value accessor was used on a flag, which carries presence only.
    #[error("Cannot use the flag '--{name}' as a value.")]
    CannotUseFlagAsValue {
        /// The flag name.
        name: String,
    },

    /// The value does not convert to the requested type.
    #[error("Cannot convert '{value}' to {type_name} for '--{name}'.")]
    InvalidConversion {
        /// The parameter name.
        name: String,
        /// The offending value.
        value: String,
        /// The requested type.
        type_name: &'static str,
    },

    /// The value was rejected by a range or choice constraint.
    #[error("Invalid value '{value}' for '--{name}': {reason}.")]
    InvalidParameterValue {
        /// The parameter name.
        name: String,
        /// The offending value.
        value: String,
        /// The constraint which rejected it.
        #[source]
        reason: Rejection,
    },

    /// One element of a list value does not convert to the requested type.
    #[error("Cannot convert element {index} '{element}' to {type_name} for '--{name}'.")]
    InvalidListElement {
        /// The parameter name.
        name: String,
        /// The zero based position of the element in the list.
        index: usize,
        /// The offending element.
        element: String,
        /// The requested type.
        type_name: &'static str,
    },
}

/// Typed accessors for the value of a resolved parameter.
///
/// Every accessor except [`Parameter::is_enabled`] fails with [`ValueError::CannotUseFlagAsValue`] on a flag.
/// Unresolved parameters read their default, or the empty string when there is none.
impl Parameter {
    fn stored(&self) -> Result<&str, ValueError> {
        if self.is_flag() {
            return Err(ValueError::CannotUseFlagAsValue {
                name: self.name().to_string(),
            });
        }

        Ok(self.binding().stored())
    }

    fn invalid_value(&self, value: &str, reason: Rejection) -> ValueError {
        ValueError::InvalidParameterValue {
            name: self.name().to_string(),
            value: value.to_string(),
            reason,
        }
    }

    /// Read the value as any `T: FromStr`.
    ///
    /// ### Example
    /// ```
    /// # use cmdform_builder as cmdform;
    /// use cmdform::Definition;
    /// use std::net::Ipv4Addr;
    ///
    /// let definition = Definition::parse("serve --bind=127.0.0.1").unwrap();
    /// let bind = definition.parameter_named("bind").unwrap();
    ///
    /// assert_eq!(bind.as_parsed::<Ipv4Addr>().unwrap(), Ipv4Addr::LOCALHOST);
    /// ```
    pub fn as_parsed<T: FromStr>(&self) -> Result<T, ValueError> {
        let value = self.stored()?;
        T::from_str(value).map_err(|_| ValueError::InvalidConversion {
            name: self.name().to_string(),
            value: value.to_string(),
            type_name: std::any::type_name::<T>(),
        })
    }

    /// Read the value as any `T: FromStr`, constrained to the inclusive range `[min, max]`.
    pub fn as_ranged<T>(&self, min: T, max: T) -> Result<T, ValueError>
    where
        T: FromStr + PartialOrd + Display,
    {
        let value = self.as_parsed::<T>().map_err(|error| match error {
            ValueError::InvalidConversion {
                name,
                value,
                type_name,
            } => ValueError::InvalidParameterValue {
                name,
                value,
                reason: Rejection::Unconvertible { type_name },
            },
            error => error,
        })?;

        if min <= value && value <= max {
            Ok(value)
        } else {
            Err(self.invalid_value(
                self.binding().stored(),
                Rejection::OutOfRange {
                    min: min.to_string(),
                    max: max.to_string(),
                },
            ))
        }
    }

    /// Read the value as a `,` delimited list of `T: FromStr`.
    /// The empty value reads as the empty list `[]`, never as `[""]`.
    ///
    /// Fails on the first element which does not convert.
    pub fn as_list<T: FromStr>(&self) -> Result<Vec<T>, ValueError> {
        let value = self.stored()?;

        if value.is_empty() {
            return Ok(Vec::default());
        }

        value
            .split(LIST_DELIMITER)
            .enumerate()
            .map(|(index, element)| {
                T::from_str(element).map_err(|_| ValueError::InvalidListElement {
                    name: self.name().to_string(),
                    index,
                    element: element.to_string(),
                    type_name: std::any::type_name::<T>(),
                })
            })
            .collect()
    }

    /// Read the value as a key into `choices`, producing the mapped value.
    pub fn as_choice<K, V>(&self, choices: &HashMap<K, V>) -> Result<V, ValueError>
    where
        K: Borrow<str> + Eq + Hash,
        V: Clone,
    {
        let value = self.stored()?;

        match choices.get(value) {
            Some(choice) => Ok(choice.clone()),
            None => Err(self.invalid_value(value, Rejection::Unmapped)),
        }
    }

    /// Read the value as is.
    pub fn as_string(&self) -> Result<String, ValueError> {
        self.stored().map(str::to_string)
    }

    /// Read the value as an integer.
    pub fn as_int(&self) -> Result<i64, ValueError> {
        self.as_parsed()
    }

    /// Read the value as a float.
    pub fn as_float(&self) -> Result<f64, ValueError> {
        self.as_parsed()
    }

    /// Read the value as a boolean.
    ///
    /// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`, `false`, and `False`.
    pub fn as_bool(&self) -> Result<bool, ValueError> {
        let value = self.stored()?;

        match value {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ValueError::InvalidConversion {
                name: self.name().to_string(),
                value: value.to_string(),
                type_name: "bool",
            }),
        }
    }

    /// Read the value as an integer within the inclusive range `[min, max]`.
    ///
    /// ### Example
    /// ```
    /// # use cmdform_builder as cmdform;
    /// use cmdform::Definition;
    ///
    /// let definition = Definition::parse("scale --replicas=1").unwrap();
    /// let replicas = definition.parameter_named("replicas").unwrap();
    ///
    /// assert_eq!(replicas.resolve("7").as_ranged_int(0, 10).unwrap(), 7);
    /// assert!(replicas.resolve("42").as_ranged_int(0, 10).is_err());
    /// ```
    pub fn as_ranged_int(&self, min: i64, max: i64) -> Result<i64, ValueError> {
        self.as_ranged(min, max)
    }

    /// Read the value as a float within the inclusive range `[min, max]`.
    pub fn as_ranged_float(&self, min: f64, max: f64) -> Result<f64, ValueError> {
        self.as_ranged(min, max)
    }

    /// Read the value as a `,` delimited list of strings.
    pub fn as_string_list(&self) -> Result<Vec<String>, ValueError> {
        self.as_list()
    }

    /// Read the value as a `,` delimited list of integers.
    pub fn as_int_list(&self) -> Result<Vec<i64>, ValueError> {
        self.as_list()
    }

    /// Read the value as a `,` delimited list of floats.
    pub fn as_float_list(&self) -> Result<Vec<f64>, ValueError> {
        self.as_list()
    }

    /// Read the value as a key into integer `choices`.
    pub fn as_int_enum<K>(&self, choices: &HashMap<K, i64>) -> Result<i64, ValueError>
    where
        K: Borrow<str> + Eq + Hash,
    {
        self.as_choice(choices)
    }

    /// Read the value as a key into string `choices`.
    pub fn as_string_enum<K>(&self, choices: &HashMap<K, String>) -> Result<String, ValueError>
    where
        K: Borrow<str> + Eq + Hash,
    {
        self.as_choice(choices)
    }

    /// Whether the value is precisely `"1"`.
    ///
    /// No other value counts, not even `"true"`.
    pub fn is_enabled(&self) -> bool {
        self.binding().stored() == ENABLED
    }
}
