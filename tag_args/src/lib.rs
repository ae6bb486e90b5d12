//! Bind command-line flags to configuration struct fields through field tags.
//!
//! Each field carries an `arg` tag such as `required=true,shortname=u` and a
//! free-form `help` tag. The binder reads the tag, registers a matching flag
//! on a [`clap::Command`] and hands back a typed [`Flag`] that reads the
//! parsed value into the field once the command line has been parsed.
//!
//! ```
//! use clap::Command;
//! use tag_args::{TaggedFields, attach_int_arg, attach_string_arg};
//!
//! #[derive(Default, TaggedFields)]
//! struct Login {
//!     #[flag(arg = "required=true,longname=user,shortname=u", help = "account name")]
//!     user_name: String,
//!     #[flag(arg = "defaultvalue=22", help = "ssh port")]
//!     port: i64,
//! }
//!
//! let mut command = Command::new("login");
//! let user = attach_string_arg::<Login, _>(&mut command, "user_name", None)?;
//! let port = attach_int_arg::<Login, _>(&mut command, "port")?;
//!
//! let matches = command.try_get_matches_from(["login", "-u", "ada"])?;
//! let mut login = Login::default();
//! user.assign(&matches, &mut login.user_name);
//! port.assign(&matches, &mut login.port);
//! assert_eq!((login.user_name.as_str(), login.port), ("ada", 22));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(feature = "derive")]
pub use tag_args_macros::TaggedFields;

mod argument;
mod binder;
mod convert;
mod error;
mod field;
mod registry;
mod result_ext;

pub use argument::{ArgOptions, Argument, derive_long_name, parse_arg_from_field};
pub use binder::{
    MANDATORY_PREFIX, OPTIONAL_PREFIX, attach_arg, attach_bool_arg, attach_int_arg,
    attach_string_arg, attach_with_options, decorate_help,
};
pub use convert::{FlagValue, parse_bool};
pub use error::{ConfigError, ConfigResult, ConversionError, RegistryError, TagError};
pub use field::{FieldSpec, TaggedFields};
pub use registry::{Flag, FlagDefinition, FlagRegistry};
pub use result_ext::{AbortOnMisconfiguration, EXIT_MISCONFIGURED};
