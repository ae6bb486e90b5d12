//! Ending startup on fatal misconfiguration.
//!
//! Binding runs once, before any user input is read, and every
//! [`ConfigError`] points at a defect in the program itself. Startup code can
//! collect the results explicitly or hand them to
//! [`AbortOnMisconfiguration::or_abort`], which logs the error chain and
//! exits.
//!
//! ```no_run
//! use clap::Command;
//! use tag_args::{AbortOnMisconfiguration, FieldSpec, TaggedFields, attach_bool_arg};
//!
//! struct Cli;
//!
//! impl TaggedFields for Cli {
//!     const TYPE_NAME: &'static str = "Cli";
//!
//!     fn tagged_fields() -> &'static [FieldSpec] {
//!         const FIELDS: &[FieldSpec] = &[FieldSpec::new("Verbose", "shortname=v", "")];
//!         FIELDS
//!     }
//! }
//!
//! let mut command = Command::new("cli");
//! let verbose = attach_bool_arg::<Cli, _>(&mut command, "Verbose").or_abort();
//! ```

use std::error::Error as _;

use crate::error::ConfigError;

/// Exit status used for fatal misconfiguration (`EX_CONFIG` from
/// `sysexits.h`).
pub const EXIT_MISCONFIGURED: i32 = 78;

/// Extension for results produced while binding flags.
pub trait AbortOnMisconfiguration<T> {
    /// Returns the value or terminates the process.
    ///
    /// The error and its sources are logged through `tracing` at `error`
    /// level before exiting with [`EXIT_MISCONFIGURED`].
    fn or_abort(self) -> T;
}

impl<T> AbortOnMisconfiguration<T> for Result<T, ConfigError> {
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                let causes = error_chain(&err);
                tracing::error!(error = %err, causes = ?causes, "fatal misconfiguration");
                std::process::exit(EXIT_MISCONFIGURED)
            }
        }
    }
}

fn error_chain(err: &ConfigError) -> Vec<String> {
    std::iter::successors(err.source(), |&source| source.source())
        .map(ToString::to_string)
        .collect()
}
