//! Constructors for [`ConfigError`] used by the binder.

use super::{ConfigError, ConversionError, RegistryError, TagError};

impl ConfigError {
    /// Builds a [`ConfigError::FieldNotFound`].
    #[must_use]
    pub fn field_not_found(type_name: &str, field: &str) -> Self {
        Self::FieldNotFound {
            type_name: type_name.to_owned(),
            field: field.to_owned(),
        }
    }

    /// Wraps a [`TagError`] raised for `type_name.field`.
    #[must_use]
    pub fn invalid_tag(type_name: &str, field: &str, source: TagError) -> Self {
        Self::InvalidTag {
            type_name: type_name.to_owned(),
            field: field.to_owned(),
            source,
        }
    }

    /// Wraps a [`ConversionError`] raised while converting `value`.
    #[must_use]
    pub fn invalid_default(
        type_name: &str,
        field: &str,
        value: &str,
        source: ConversionError,
    ) -> Self {
        Self::InvalidDefault {
            type_name: type_name.to_owned(),
            field: field.to_owned(),
            value: value.to_owned(),
            source,
        }
    }

    /// Wraps a [`RegistryError`] raised while adding `long_name`.
    #[must_use]
    pub fn registration(long_name: &str, source: RegistryError) -> Self {
        Self::Registration {
            long_name: long_name.to_owned(),
            source,
        }
    }

    /// Wraps a [`RegistryError`] raised while marking `long_name` required.
    #[must_use]
    pub fn mark_required(long_name: &str, source: RegistryError) -> Self {
        Self::MarkRequired {
            long_name: long_name.to_owned(),
            source,
        }
    }

    /// Returns the tag error behind an [`ConfigError::InvalidTag`].
    #[must_use]
    pub const fn tag_error(&self) -> Option<&TagError> {
        match self {
            Self::InvalidTag { source, .. } => Some(source),
            _ => None,
        }
    }
}
