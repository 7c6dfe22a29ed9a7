use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use cmdform_builder::Definition;

pub(crate) fn definition(literal: &syn::LitStr) -> Result<TokenStream2, syn::Error> {
    let raw = literal.value();

    if let Err(error) = Definition::parse(&raw) {
        return Err(syn::Error::new(literal.span(), error.to_string()));
    }

    Ok(quote! {
        ::cmdform::Definition::parse(#literal)
            .expect("internal error - the definition was validated at compile time")
    })
}
