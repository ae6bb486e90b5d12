//! Typed conversion of textual defaults into flag values.
//!
//! The set of flag types is closed: [`String`], [`bool`] and [`i64`]. Each
//! implements [`FlagValue`], which both converts a tag default and forwards a
//! [`FlagDefinition`] to the matching registry operation, so the binder never
//! inspects types at run time.

use crate::error::{ConversionError, RegistryError};
use crate::registry::{FlagDefinition, FlagRegistry};

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for bool {}
    impl Sealed for i64 {}
}

/// A value type that a tagged field can be bound to.
///
/// This trait is sealed; the supported types are [`String`], [`bool`] and
/// [`i64`].
pub trait FlagValue: sealed::Sealed + Clone + Send + Sync + 'static {
    /// Human-readable type name used in diagnostics.
    const KIND: &'static str;

    /// Converts a tag's `defaultvalue` into this type.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] when `raw` is not a valid literal.
    fn parse_default(raw: &str) -> Result<Self, ConversionError>;

    /// Registers `flag` through the registry operation for this type.
    ///
    /// # Errors
    ///
    /// Propagates the registry's [`RegistryError`].
    fn register<R>(registry: &mut R, flag: FlagDefinition<Self>) -> Result<(), RegistryError>
    where
        R: FlagRegistry + ?Sized;
}

impl FlagValue for String {
    const KIND: &'static str = "string";

    fn parse_default(raw: &str) -> Result<Self, ConversionError> {
        Ok(raw.to_owned())
    }

    fn register<R>(registry: &mut R, flag: FlagDefinition<Self>) -> Result<(), RegistryError>
    where
        R: FlagRegistry + ?Sized,
    {
        registry.add_string_flag(flag)
    }
}

impl FlagValue for bool {
    const KIND: &'static str = "bool";

    fn parse_default(raw: &str) -> Result<Self, ConversionError> {
        parse_bool(raw)
    }

    fn register<R>(registry: &mut R, flag: FlagDefinition<Self>) -> Result<(), RegistryError>
    where
        R: FlagRegistry + ?Sized,
    {
        registry.add_bool_flag(flag)
    }
}

impl FlagValue for i64 {
    const KIND: &'static str = "int";

    fn parse_default(raw: &str) -> Result<Self, ConversionError> {
        raw.parse::<Self>()
            .map_err(|source| ConversionError::InvalidInt {
                value: raw.to_owned(),
                source,
            })
    }

    fn register<R>(registry: &mut R, flag: FlagDefinition<Self>) -> Result<(), RegistryError>
    where
        R: FlagRegistry + ?Sized,
    {
        registry.add_int_flag(flag)
    }
}

/// Parses a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`,
/// `FALSE`, `false`, `False`. Mixed-case spellings such as `tRUE` are
/// rejected.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidBool`] for any other input.
///
/// # Examples
///
/// ```
/// use tag_args::parse_bool;
///
/// assert_eq!(parse_bool("T"), Ok(true));
/// assert_eq!(parse_bool("0"), Ok(false));
/// assert!(parse_bool("yes").is_err());
/// ```
pub fn parse_bool(raw: &str) -> Result<bool, ConversionError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConversionError::InvalidBool {
            value: raw.to_owned(),
        }),
    }
}
