//! Tag parsing for flag descriptors.
//!
//! A field's `arg` tag is a comma-separated list of `key=value` items:
//!
//! ```text
//! required=true,longname=user,shortname=u,defaultvalue=guest
//! ```
//!
//! Keys are matched case-insensitively and applied left to right, so a later
//! item overrides an earlier one. Unknown keys are ignored. The tag first
//! becomes an [`ArgOptions`] value, which [`Argument::from_options`] then
//! resolves against the field name.

use crate::convert::parse_bool;
use crate::error::TagError;
use crate::field::FieldSpec;

const KEY_REQUIRED: &str = "required";
const KEY_LONG_NAME: &str = "longname";
const KEY_DEFAULT_VALUE: &str = "defaultvalue";
const KEY_SHORT_NAME: &str = "shortname";

/// Flag descriptor derived from one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    /// Whether the end user must supply the flag.
    pub required: bool,
    /// Long flag name, never empty.
    pub long_name: String,
    /// Single-character alias, lower-cased.
    pub short_name: Option<char>,
    /// Textual default; `Some("")` is a default given as the empty string.
    pub default_value: Option<String>,
}

impl Argument {
    /// Resolves structured options against `field_name`.
    ///
    /// The long name falls back to [`derive_long_name`] when the options carry
    /// none (or an empty one); the short name is lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`TagError::FieldNameTooShort`] if `field_name` has fewer than
    /// two characters.
    pub fn from_options(field_name: &str, options: &ArgOptions) -> Result<Self, TagError> {
        let derived = derive_long_name(field_name)?;
        let long_name = options
            .long_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map_or(derived, str::to_owned);
        Ok(Self {
            required: options.required,
            long_name,
            short_name: options.short_name.map(lower_char),
            default_value: options.default_value.clone(),
        })
    }

    /// Returns `true` when a default-value entry was present, even if empty.
    #[must_use]
    pub const fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }
}

/// Structured flag options, the typed counterpart of an `arg` tag.
///
/// ```
/// use tag_args::{ArgOptions, Argument};
///
/// let options = ArgOptions::new().required(true).short_name('U');
/// let argument = Argument::from_options("UserName", &options)?;
/// assert_eq!(argument.long_name, "userName");
/// assert_eq!(argument.short_name, Some('u'));
/// # Ok::<(), tag_args::TagError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgOptions {
    /// Whether the flag is mandatory.
    pub required: bool,
    /// Long name override; `None` or empty keeps the derived name.
    pub long_name: Option<String>,
    /// Single-character alias.
    pub short_name: Option<char>,
    /// Textual default.
    pub default_value: Option<String>,
}

impl ArgOptions {
    /// Options for an optional flag with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the flag is mandatory.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Overrides the long name.
    #[must_use]
    pub fn long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    /// Sets the short alias.
    #[must_use]
    pub const fn short_name(mut self, short_name: char) -> Self {
        self.short_name = Some(short_name);
        self
    }

    /// Sets the textual default.
    #[must_use]
    pub fn default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Parses an `arg` tag belonging to `field_name`.
    ///
    /// `field_name` only appears in diagnostics; its length is checked by
    /// [`Argument::from_options`].
    ///
    /// # Errors
    ///
    /// Returns [`TagError::MalformedTagItem`] for an item without exactly one
    /// `=`, [`TagError::InvalidBooleanValue`] for a bad `required` value and
    /// [`TagError::ShortNameTooLong`] for a multi-character `shortname`.
    pub fn from_tag(field_name: &str, tag: &str) -> Result<Self, TagError> {
        let mut options = Self::default();
        for (index, item) in tag.split(',').enumerate() {
            let (key, value) =
                split_item(item).ok_or_else(|| TagError::MalformedTagItem {
                    field: field_name.to_owned(),
                    index,
                })?;
            options.apply(field_name, key, value)?;
        }
        Ok(options)
    }

    fn apply(&mut self, field_name: &str, key: &str, value: &str) -> Result<(), TagError> {
        tracing::trace!(field = field_name, key, value, "applying tag item");
        match key.to_lowercase().as_str() {
            KEY_REQUIRED => {
                self.required =
                    parse_bool(value).map_err(|_| TagError::InvalidBooleanValue {
                        field: field_name.to_owned(),
                        key: key.to_owned(),
                        value: value.to_owned(),
                    })?;
            }
            KEY_LONG_NAME => {
                if !value.is_empty() {
                    self.long_name = Some(value.to_owned());
                }
            }
            KEY_DEFAULT_VALUE => self.default_value = Some(value.to_owned()),
            KEY_SHORT_NAME => {
                let mut chars = value.chars();
                let first = chars.next();
                if chars.next().is_some() {
                    return Err(TagError::ShortNameTooLong {
                        field: field_name.to_owned(),
                        key: key.to_owned(),
                        value: value.to_owned(),
                    });
                }
                self.short_name = first;
            }
            _ => {}
        }
        Ok(())
    }
}

/// Derives the default long name: the field name with its first character
/// lower-cased.
///
/// # Errors
///
/// Returns [`TagError::FieldNameTooShort`] for names shorter than two
/// characters.
///
/// # Examples
///
/// ```
/// use tag_args::derive_long_name;
///
/// assert_eq!(derive_long_name("UserName")?, "userName");
/// assert_eq!(derive_long_name("port")?, "port");
/// assert!(derive_long_name("X").is_err());
/// # Ok::<(), tag_args::TagError>(())
/// ```
pub fn derive_long_name(field_name: &str) -> Result<String, TagError> {
    let mut chars = field_name.chars();
    match (chars.next(), chars.as_str()) {
        (Some(first), rest) if !rest.is_empty() => {
            Ok(first.to_lowercase().chain(rest.chars()).collect())
        }
        _ => Err(TagError::FieldNameTooShort {
            field: field_name.to_owned(),
        }),
    }
}

/// Builds the [`Argument`] described by a field's `arg` tag.
///
/// The field name is validated before the tag is read, so a short name is
/// reported even when the tag is also malformed.
///
/// # Errors
///
/// Returns a [`TagError`] describing the first problem found.
///
/// # Examples
///
/// ```
/// use tag_args::{FieldSpec, parse_arg_from_field};
///
/// let field = FieldSpec::new("UserName", "required=true,shortname=u", "");
/// let argument = parse_arg_from_field(&field)?;
/// assert!(argument.required);
/// assert_eq!(argument.long_name, "userName");
/// assert_eq!(argument.short_name, Some('u'));
/// assert!(!argument.has_default_value());
/// # Ok::<(), tag_args::TagError>(())
/// ```
pub fn parse_arg_from_field(field: &FieldSpec) -> Result<Argument, TagError> {
    derive_long_name(field.name())?;
    let options = ArgOptions::from_tag(field.name(), field.arg_tag())?;
    Argument::from_options(field.name(), &options)
}

fn split_item(item: &str) -> Option<(&str, &str)> {
    let (key, value) = item.split_once('=')?;
    (!value.contains('=')).then_some((key, value))
}

fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests;
