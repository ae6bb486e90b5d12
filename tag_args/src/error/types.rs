//! Error enums for tag parsing, value conversion, flag registration and
//! binding.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading a field's `arg` tag.
///
/// These are the only errors an embedding program is expected to branch on;
/// every other failure in this crate is a [`ConfigError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TagError {
    /// The field name is too short to derive a long flag name from.
    #[error("arg item field [{field}] has a name that is less than 2, this is illegal")]
    FieldNameTooShort {
        /// Name of the offending field.
        field: String,
    },

    /// A tag item does not contain exactly one `=`.
    #[error("arg item at {index} index for field '{field}' is not a single '='")]
    MalformedTagItem {
        /// Field whose tag is malformed.
        field: String,
        /// Zero-based position of the offending item within the tag.
        index: usize,
    },

    /// The `required` key carries a value that is not a boolean literal.
    #[error("arg field {field} for 'required' field is not a boolean, it's name/value {key}/[{value}]")]
    InvalidBooleanValue {
        /// Field whose tag is invalid.
        field: String,
        /// Tag key as written.
        key: String,
        /// Rejected value.
        value: String,
    },

    /// The `shortname` key carries more than one character.
    #[error("arg field {field} for 'shortname' field's value is greater than 1 character, it's name/value {key}/[{value}]")]
    ShortNameTooLong {
        /// Field whose tag is invalid.
        field: String,
        /// Tag key as written.
        key: String,
        /// Rejected value.
        value: String,
    },
}

/// Errors raised when textual values cannot become a typed flag value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// The text is not one of the accepted boolean literals.
    #[error("`{value}` is not a boolean")]
    InvalidBool {
        /// Rejected text.
        value: String,
    },

    /// The text is not a decimal integer.
    #[error("`{value}` is not an integer: {source}")]
    InvalidInt {
        /// Rejected text.
        value: String,
        /// Parser diagnostic.
        #[source]
        source: ParseIntError,
    },
}

/// Errors reported by a [`crate::FlagRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A flag with this long name is already registered.
    #[error("flag --{long_name} is already registered")]
    DuplicateLongName {
        /// Conflicting long name.
        long_name: String,
    },

    /// A flag with this short name is already registered.
    #[error("shorthand -{short_name} for flag --{long_name} is already in use")]
    DuplicateShortName {
        /// Flag being registered.
        long_name: String,
        /// Conflicting short name.
        short_name: char,
    },

    /// No flag with this long name exists.
    #[error("no such flag --{long_name}")]
    UnknownFlag {
        /// Long name that was looked up.
        long_name: String,
    },
}

/// Fatal misconfiguration detected while binding flags.
///
/// Each variant points at a defect in the embedding program's struct
/// definitions. Startup code is expected to stop on any of them, usually
/// through [`crate::AbortOnMisconfiguration::or_abort`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The struct has no field with the requested name.
    #[error("Fatal mis-configuration by the variable [{field}] on {type_name}")]
    FieldNotFound {
        /// Struct that was searched.
        type_name: String,
        /// Requested field name.
        field: String,
    },

    /// The field's `arg` tag could not be parsed.
    #[error("Fatal mis-configuration, could not get arguments from field {type_name}.{field}: {source}")]
    InvalidTag {
        /// Struct owning the field.
        type_name: String,
        /// Field whose tag failed to parse.
        field: String,
        /// Parser diagnostic.
        #[source]
        source: TagError,
    },

    /// The tag's default value does not convert to the flag's type.
    #[error("Fatal mis-configuration. Field {type_name}.{field} could not process default value: {value}")]
    InvalidDefault {
        /// Struct owning the field.
        type_name: String,
        /// Field whose default failed to convert.
        field: String,
        /// Raw default text.
        value: String,
        /// Conversion diagnostic.
        #[source]
        source: ConversionError,
    },

    /// The command refused the flag.
    #[error("Fatal mis-configuration, could not register flag --{long_name}: {source}")]
    Registration {
        /// Long name of the rejected flag.
        long_name: String,
        /// Registry diagnostic.
        #[source]
        source: RegistryError,
    },

    /// The flag could not be marked as required.
    #[error("Fatal mis-configuration, could not mark required field: {source}")]
    MarkRequired {
        /// Long name of the flag.
        long_name: String,
        /// Registry diagnostic.
        #[source]
        source: RegistryError,
    },
}
