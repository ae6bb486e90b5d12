//! Field metadata consumed by the tag parser and the binder.
//!
//! A [`FieldSpec`] pairs a field name with its `arg` and `help` tags. Types
//! expose their table through [`TaggedFields`], normally generated by
//! `#[derive(TaggedFields)]`, so field lookup is a slice search rather than
//! run-time reflection.

/// Metadata for one struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    name: &'static str,
    arg: &'static str,
    help: &'static str,
}

impl FieldSpec {
    /// Declares a field with its `arg` tag and raw help text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tag_args::FieldSpec;
    ///
    /// const PORT: FieldSpec = FieldSpec::new("Port", "defaultvalue=8080", "port to bind");
    /// assert_eq!(PORT.name(), "Port");
    /// ```
    #[must_use]
    pub const fn new(name: &'static str, arg: &'static str, help: &'static str) -> Self {
        Self { name, arg, help }
    }

    /// Field name as declared.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The `arg` tag, in `key=value,key=value` form.
    #[must_use]
    pub const fn arg_tag(&self) -> &'static str {
        self.arg
    }

    /// The `help` tag, used verbatim.
    #[must_use]
    pub const fn help(&self) -> &'static str {
        self.help
    }
}

/// Types whose fields carry flag tags.
///
/// ```
/// use tag_args::{FieldSpec, TaggedFields};
///
/// struct Server;
///
/// impl TaggedFields for Server {
///     const TYPE_NAME: &'static str = "Server";
///
///     fn tagged_fields() -> &'static [FieldSpec] {
///         const FIELDS: &[FieldSpec] = &[FieldSpec::new("Port", "shortname=p", "")];
///         FIELDS
///     }
/// }
///
/// assert!(Server::field_by_name("Port").is_some());
/// assert!(Server::field_by_name("port").is_none());
/// ```
pub trait TaggedFields {
    /// Type name reported in diagnostics.
    const TYPE_NAME: &'static str;

    /// Every field in declaration order.
    fn tagged_fields() -> &'static [FieldSpec];

    /// Looks up a field by its exact name.
    #[must_use]
    fn field_by_name(name: &str) -> Option<&'static FieldSpec> {
        Self::tagged_fields().iter().find(|field| field.name == name)
    }
}
