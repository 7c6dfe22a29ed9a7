//! Compile time checked definitions for `cmdform`.
extern crate proc_macro;

mod expand;

use proc_macro::TokenStream;

/// Parse a definition, validating it at compile time.
///
/// An invalid definition is a compile error pointing at the literal.
///
/// ### Example
/// ```ignore
/// use cmdform::definition;
///
/// let deploy = definition!("deploy $service --region[r]=us-east --force[f]?");
/// assert_eq!(deploy.command_name(), "deploy");
/// ```
#[proc_macro]
pub fn definition(input: TokenStream) -> TokenStream {
    let literal = syn::parse_macro_input!(input as syn::LitStr);

    expand::definition(&literal)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
