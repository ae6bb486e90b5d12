//! Procedural macros for `tag_args`.
//!
//! `#[derive(TaggedFields)]` turns a struct's `#[flag(arg = "...", help =
//! "...")]` attributes into a static field table, so flag binding looks
//! fields up by name without run-time reflection. Every named field is
//! listed; a field without an `arg` attribute gets an empty tag.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for the `tag_args::TaggedFields` trait.
///
/// Field attribute keys: `arg` (the flag tag) and `help` (raw help text).
/// Struct attribute key: `crate` (path to the runtime crate when it is
/// renamed).
#[proc_macro_derive(TaggedFields, attributes(flag))]
pub fn derive_tagged_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::derive_tagged_fields(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
