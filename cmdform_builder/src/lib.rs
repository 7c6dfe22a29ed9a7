//! Builder module for `cmdform`.
//! See [documentation root](https://docs.rs/cmdform/latest/cmdform/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{validate_name, DefinitionError, DefinitionParseError, NameError};
pub use tokens::tokenize;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
