//! Token generation for `#[derive(TaggedFields)]`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::attrs::TaggedStruct;

/// Emits the `TaggedFields` implementation for a parsed struct.
pub(crate) fn generate(parsed: &TaggedStruct) -> TokenStream {
    let krate = runtime_path(parsed);
    let ident = &parsed.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();
    let entries = parsed.fields.iter().map(|field| {
        let name = &field.name;
        let arg = &field.arg;
        let help = &field.help;
        quote! { #krate::FieldSpec::new(#name, #arg, #help) }
    });
    quote! {
        impl #impl_generics #krate::TaggedFields for #ident #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;

            fn tagged_fields() -> &'static [#krate::FieldSpec] {
                const FIELDS: &[#krate::FieldSpec] = &[#( #entries ),*];
                FIELDS
            }
        }
    }
}

/// `#[flag(crate = "...")]` when present, otherwise `::tag_args`.
fn runtime_path(parsed: &TaggedStruct) -> TokenStream {
    parsed
        .attrs
        .crate_path
        .as_ref()
        .map_or_else(|| quote! { ::tag_args }, ToTokens::to_token_stream)
}
