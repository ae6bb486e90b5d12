//! Attribute parsing for `#[derive(TaggedFields)]`.
//!
//! Field attributes carry the two tags:
//!
//! ```text
//! #[flag(arg = "required=true,shortname=u", help = "account name")]
//! ```
//!
//! The struct attribute `#[flag(crate = "path")]` overrides the runtime crate
//! path. Tag contents are not validated here; they are parsed when the field
//! is bound.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Lit, LitStr};

const ATTR: &str = "flag";

/// Struct-level attributes.
#[derive(Default)]
pub(crate) struct StructAttrs {
    pub crate_path: Option<syn::Path>,
}

/// Tags gathered from one named field.
pub(crate) struct TaggedField {
    pub name: String,
    pub arg: String,
    pub help: String,
}

/// The parsed derive input.
pub(crate) struct TaggedStruct {
    pub ident: Ident,
    pub generics: syn::Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<TaggedField>,
}

/// Collects the struct identifier, its attributes and every named field.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<TaggedStruct> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "TaggedFields requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "TaggedFields can only be derived for structs",
            ));
        }
    };
    let fields = named
        .iter()
        .map(parse_field)
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(TaggedStruct {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}

fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for_each_flag_meta(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            Err(meta.error("unknown struct attribute; expected `crate`"))
        }
    })?;
    Ok(out)
}

fn parse_field(field: &syn::Field) -> syn::Result<TaggedField> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "TaggedFields requires named fields"));
    };
    let mut arg = None;
    let mut help = None;
    for_each_flag_meta(&field.attrs, |meta| {
        if meta.path.is_ident("arg") {
            assign_once(&mut arg, meta, "arg")
        } else if meta.path.is_ident("help") {
            assign_once(&mut help, meta, "help")
        } else {
            Err(meta.error("unknown field attribute; expected `arg` or `help`"))
        }
    })?;
    Ok(TaggedField {
        name: syn::ext::IdentExt::unraw(ident).to_string(),
        arg: arg.unwrap_or_default(),
        help: help.unwrap_or_default(),
    })
}

fn for_each_flag_meta<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn assign_once(target: &mut Option<String>, meta: &ParseNestedMeta, key: &str) -> syn::Result<()> {
    if target.is_some() {
        return Err(meta.error(format!("duplicate `{key}` attribute")));
    }
    *target = Some(lit_str(meta, key)?.value());
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(other.span(), format!("{key} must be a string"))),
    }
}
