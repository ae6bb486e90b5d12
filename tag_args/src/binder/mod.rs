//! Binding tagged fields to command-line flags.
//!
//! Each `attach_*` call looks up one field, parses its `arg` tag, converts
//! the tag default into the flag's type, registers the flag and, when the
//! tag says so, marks it required. Any failure is a [`ConfigError`]: the
//! embedding program's struct definitions are wrong and startup should stop.
//!
//! ```
//! use clap::Command;
//! use tag_args::{FieldSpec, TaggedFields, attach_int_arg};
//!
//! struct Server;
//!
//! impl TaggedFields for Server {
//!     const TYPE_NAME: &'static str = "Server";
//!
//!     fn tagged_fields() -> &'static [FieldSpec] {
//!         const FIELDS: &[FieldSpec] =
//!             &[FieldSpec::new("Port", "defaultvalue=8080,shortname=p", "port to listen on")];
//!         FIELDS
//!     }
//! }
//!
//! let mut command = Command::new("server");
//! let port = attach_int_arg::<Server, _>(&mut command, "Port")?;
//! let matches = command.try_get_matches_from(["server", "-p", "9000"])?;
//! assert_eq!(port.value(&matches), 9000);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::argument::{ArgOptions, Argument, parse_arg_from_field};
use crate::convert::FlagValue;
use crate::error::{ConfigError, ConfigResult};
use crate::field::{FieldSpec, TaggedFields};
use crate::registry::{Flag, FlagDefinition, FlagRegistry};

/// Help prefix for mandatory flags.
pub const MANDATORY_PREFIX: &str = "MANDATORY: ";

/// Help prefix for optional flags.
pub const OPTIONAL_PREFIX: &str = "optional: ";

const OPTIONS_SOURCE: &str = "<options>";

/// Binds a string field.
///
/// `default_override`, when given, replaces the tag's `defaultvalue`.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the field is missing, its tag is invalid,
/// or the registry rejects the flag.
pub fn attach_string_arg<S, R>(
    command: &mut R,
    field_name: &str,
    default_override: Option<&str>,
) -> ConfigResult<Flag<String>>
where
    S: TaggedFields + ?Sized,
    R: FlagRegistry + ?Sized,
{
    let field = lookup::<S>(field_name)?;
    attach_arg(command, S::TYPE_NAME, field, default_override.map(str::to_owned))
}

/// Binds a boolean field.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the field is missing, its tag is invalid,
/// its default is not a boolean literal, or the registry rejects the flag.
pub fn attach_bool_arg<S, R>(command: &mut R, field_name: &str) -> ConfigResult<Flag<bool>>
where
    S: TaggedFields + ?Sized,
    R: FlagRegistry + ?Sized,
{
    let field = lookup::<S>(field_name)?;
    attach_arg(command, S::TYPE_NAME, field, None)
}

/// Binds an integer field.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the field is missing, its tag is invalid,
/// its default is not a decimal integer, or the registry rejects the flag.
pub fn attach_int_arg<S, R>(command: &mut R, field_name: &str) -> ConfigResult<Flag<i64>>
where
    S: TaggedFields + ?Sized,
    R: FlagRegistry + ?Sized,
{
    let field = lookup::<S>(field_name)?;
    attach_arg(command, S::TYPE_NAME, field, None)
}

/// Binds an explicitly declared field.
///
/// `type_name` only appears in diagnostics. A `default_override` wins over
/// the tag default.
///
/// # Errors
///
/// See [`attach_string_arg`].
pub fn attach_arg<T, R>(
    command: &mut R,
    type_name: &str,
    field: &FieldSpec,
    default_override: Option<T>,
) -> ConfigResult<Flag<T>>
where
    T: FlagValue,
    R: FlagRegistry + ?Sized,
{
    let argument = parse_arg_from_field(field)
        .map_err(|err| ConfigError::invalid_tag(type_name, field.name(), err))?;
    register(command, type_name, field.name(), &argument, field.help(), default_override)
}

/// Binds a flag described by structured options instead of a tag.
///
/// # Errors
///
/// Returns a [`ConfigError`] when `field_name` is shorter than two
/// characters, the default does not convert, or the registry rejects the
/// flag.
pub fn attach_with_options<T, R>(
    command: &mut R,
    field_name: &str,
    options: &ArgOptions,
    help: &str,
) -> ConfigResult<Flag<T>>
where
    T: FlagValue,
    R: FlagRegistry + ?Sized,
{
    let argument = Argument::from_options(field_name, options)
        .map_err(|err| ConfigError::invalid_tag(OPTIONS_SOURCE, field_name, err))?;
    register(command, OPTIONS_SOURCE, field_name, &argument, help, None)
}

/// Prefixes raw help text with the flag's mandatory/optional marker.
///
/// ```
/// use tag_args::{Argument, decorate_help};
///
/// let argument = Argument { required: true, ..Argument::default() };
/// assert_eq!(decorate_help(&argument, "user"), "MANDATORY: user");
/// ```
#[must_use]
pub fn decorate_help(argument: &Argument, raw_help: &str) -> String {
    let prefix = if argument.required {
        MANDATORY_PREFIX
    } else {
        OPTIONAL_PREFIX
    };
    format!("{prefix}{raw_help}")
}

fn lookup<S>(field_name: &str) -> ConfigResult<&'static FieldSpec>
where
    S: TaggedFields + ?Sized,
{
    S::field_by_name(field_name)
        .ok_or_else(|| ConfigError::field_not_found(S::TYPE_NAME, field_name))
}

fn effective_default<T: FlagValue>(
    type_name: &str,
    field_name: &str,
    argument: &Argument,
    default_override: Option<T>,
) -> ConfigResult<Option<T>> {
    if default_override.is_some() {
        return Ok(default_override);
    }
    argument
        .default_value
        .as_deref()
        .map(|raw| {
            T::parse_default(raw)
                .map_err(|err| ConfigError::invalid_default(type_name, field_name, raw, err))
        })
        .transpose()
}

fn register<T, R>(
    command: &mut R,
    type_name: &str,
    field_name: &str,
    argument: &Argument,
    raw_help: &str,
    default_override: Option<T>,
) -> ConfigResult<Flag<T>>
where
    T: FlagValue,
    R: FlagRegistry + ?Sized,
{
    let default = effective_default(type_name, field_name, argument, default_override)?;
    let definition = FlagDefinition {
        long_name: argument.long_name.clone(),
        short_name: argument.short_name,
        default: default.clone(),
        help: decorate_help(argument, raw_help),
    };
    T::register(command, definition)
        .map_err(|err| ConfigError::registration(&argument.long_name, err))?;
    if argument.required {
        command
            .mark_flag_required(&argument.long_name)
            .map_err(|err| ConfigError::mark_required(&argument.long_name, err))?;
    }
    tracing::debug!(
        type_name,
        field = field_name,
        kind = T::KIND,
        long = %argument.long_name,
        short = ?argument.short_name,
        required = argument.required,
        has_default = default.is_some(),
        "bound flag"
    );
    Ok(Flag::new(
        argument.long_name.clone(),
        argument.short_name,
        argument.required,
        default,
    ))
}
