//! Implementation of `#[derive(TaggedFields)]`.

mod attrs;
mod expand;

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub(crate) use attrs::parse_input;
pub(crate) use expand::generate;

/// Parses the derive input and emits the trait implementation.
pub(crate) fn derive_tagged_fields(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse_input(input)?;
    Ok(generate(&parsed))
}
