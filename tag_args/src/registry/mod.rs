//! The command-side seam: where bound flags are registered.
//!
//! [`FlagRegistry`] is the small surface the binder needs from a command
//! framework. It is implemented for [`clap::Command`], which owns parsing;
//! values are read back from [`clap::ArgMatches`] through the typed [`Flag`]
//! handle returned by the binder.

use std::marker::PhantomData;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::convert::{FlagValue, parse_bool};
use crate::error::RegistryError;

/// Everything a registry needs to add one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDefinition<T> {
    /// Long name, also used as the flag's identifier.
    pub long_name: String,
    /// Optional single-character alias.
    pub short_name: Option<char>,
    /// Effective default, if any.
    pub default: Option<T>,
    /// Decorated help text.
    pub help: String,
}

/// Command objects that can hold bound flags.
pub trait FlagRegistry {
    /// Adds a string flag.
    ///
    /// # Errors
    ///
    /// Fails when the long or short name is already taken.
    fn add_string_flag(&mut self, flag: FlagDefinition<String>) -> Result<(), RegistryError>;

    /// Adds a boolean flag.
    ///
    /// # Errors
    ///
    /// Fails when the long or short name is already taken.
    fn add_bool_flag(&mut self, flag: FlagDefinition<bool>) -> Result<(), RegistryError>;

    /// Adds an integer flag.
    ///
    /// # Errors
    ///
    /// Fails when the long or short name is already taken.
    fn add_int_flag(&mut self, flag: FlagDefinition<i64>) -> Result<(), RegistryError>;

    /// Marks a registered flag as mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownFlag`] if no flag has this long name.
    fn mark_flag_required(&mut self, long_name: &str) -> Result<(), RegistryError>;
}

impl FlagRegistry for Command {
    fn add_string_flag(&mut self, flag: FlagDefinition<String>) -> Result<(), RegistryError> {
        let arg = base_arg(&flag, flag.default.clone()).value_parser(clap::value_parser!(String));
        push_arg(self, &flag, arg)
    }

    fn add_bool_flag(&mut self, flag: FlagDefinition<bool>) -> Result<(), RegistryError> {
        let arg = base_arg(&flag, flag.default.map(|value| value.to_string()))
            .value_parser(parse_bool)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true");
        push_arg(self, &flag, arg)
    }

    fn add_int_flag(&mut self, flag: FlagDefinition<i64>) -> Result<(), RegistryError> {
        let arg = base_arg(&flag, flag.default.map(|value| value.to_string()))
            .value_parser(clap::value_parser!(i64))
            .allow_negative_numbers(true);
        push_arg(self, &flag, arg)
    }

    fn mark_flag_required(&mut self, long_name: &str) -> Result<(), RegistryError> {
        if !self
            .get_arguments()
            .any(|arg| arg.get_id().as_str() == long_name)
        {
            return Err(RegistryError::UnknownFlag {
                long_name: long_name.to_owned(),
            });
        }
        // clap rejects defaults on required arguments.
        let command = std::mem::take(self);
        *self = command.mut_arg(long_name, |arg| {
            arg.required(true).default_value(None::<&'static str>)
        });
        Ok(())
    }
}

fn base_arg<T>(flag: &FlagDefinition<T>, default: Option<String>) -> Arg {
    let arg = Arg::new(flag.long_name.clone())
        .long(flag.long_name.clone())
        .help(flag.help.clone())
        .action(ArgAction::Set);
    let arg = match flag.short_name {
        Some(short) => arg.short(short),
        None => arg,
    };
    match default {
        Some(value) => arg.default_value(value),
        None => arg,
    }
}

fn push_arg<T>(
    command: &mut Command,
    flag: &FlagDefinition<T>,
    arg: Arg,
) -> Result<(), RegistryError> {
    let replaced = BuiltIn::ALL
        .into_iter()
        .find(|built_in| built_in.id() == flag.long_name);
    for existing in command.get_arguments() {
        if replaced.is_some_and(|built_in| built_in.is_stand_in(existing)) {
            continue;
        }
        if existing.get_id().as_str() == flag.long_name
            || existing.get_long() == Some(flag.long_name.as_str())
        {
            return Err(RegistryError::DuplicateLongName {
                long_name: flag.long_name.clone(),
            });
        }
        if let Some(short) = flag.short_name
            && existing.get_short() == Some(short)
        {
            return Err(RegistryError::DuplicateShortName {
                long_name: flag.long_name.clone(),
                short_name: short,
            });
        }
    }
    let updated = BuiltIn::ALL
        .into_iter()
        .fold(std::mem::take(command), |taken, built_in| {
            built_in.yield_to(taken, flag)
        });
    *command = match replaced {
        Some(built_in) if updated.get_arguments().any(|a| built_in.is_stand_in(a)) => {
            updated.mut_arg(built_in.id(), |_| arg)
        }
        _ => updated.arg(arg),
    };
    Ok(())
}

/// Flags clap generates on its own when the command is built.
///
/// A bound flag may take over either name. Taking the long name drops the
/// built-in flag; taking only the short name keeps it reachable through a
/// long-only stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuiltIn {
    Help,
    Version,
}

impl BuiltIn {
    const ALL: [Self; 2] = [Self::Help, Self::Version];

    const fn id(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Version => "version",
        }
    }

    const fn short(self) -> char {
        match self {
            Self::Help => 'h',
            Self::Version => 'V',
        }
    }

    fn is_generated(self, command: &Command) -> bool {
        match self {
            Self::Help => !command.is_disable_help_flag_set(),
            Self::Version => !command.is_disable_version_flag_set(),
        }
    }

    fn is_stand_in(self, arg: &Arg) -> bool {
        arg.get_id().as_str() == self.id()
            && match self {
                Self::Help => matches!(arg.get_action(), ArgAction::Help),
                Self::Version => matches!(arg.get_action(), ArgAction::Version),
            }
    }

    fn stand_in(self) -> Arg {
        let arg = Arg::new(self.id()).long(self.id());
        match self {
            Self::Help => arg.action(ArgAction::Help).help("Print help"),
            Self::Version => arg.action(ArgAction::Version).help("Print version"),
        }
    }

    fn yield_to<T>(self, command: Command, flag: &FlagDefinition<T>) -> Command {
        let takes_long = flag.long_name == self.id();
        let takes_short = flag.short_name == Some(self.short());
        if !(takes_long || takes_short) || !self.is_generated(&command) {
            return command;
        }
        tracing::debug!(
            built_in = self.id(),
            long = %flag.long_name,
            "bound flag displaces built-in flag"
        );
        let command = match self {
            Self::Help => command.disable_help_flag(true),
            Self::Version => command.disable_version_flag(true),
        };
        if takes_long {
            command
        } else {
            command.arg(self.stand_in())
        }
    }
}

/// Typed handle to a bound flag.
///
/// The handle does not own storage; after parsing, [`Flag::assign`] writes
/// the parsed value (or the zero value when the flag was absent and had no
/// default) into the destination field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag<T> {
    long_name: String,
    short_name: Option<char>,
    required: bool,
    default: Option<T>,
    marker: PhantomData<fn() -> T>,
}

impl<T: FlagValue> Flag<T> {
    pub(crate) const fn new(
        long_name: String,
        short_name: Option<char>,
        required: bool,
        default: Option<T>,
    ) -> Self {
        Self {
            long_name,
            short_name,
            required,
            default,
            marker: PhantomData,
        }
    }

    /// Long name under which the flag was registered.
    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Short alias, if any.
    #[must_use]
    pub const fn short_name(&self) -> Option<char> {
        self.short_name
    }

    /// Whether the flag was marked as mandatory.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Effective default registered with the flag.
    #[must_use]
    pub const fn default_value(&self) -> Option<&T> {
        self.default.as_ref()
    }

    /// Reads the parsed value, including a registered default.
    ///
    /// Returns `None` when the flag was absent and had no default, or when
    /// `matches` came from a command that does not know this flag.
    #[must_use]
    pub fn get(&self, matches: &ArgMatches) -> Option<T> {
        matches
            .try_get_one::<T>(&self.long_name)
            .ok()
            .flatten()
            .cloned()
    }

    /// Reads the parsed value, falling back to the type's zero value.
    #[must_use]
    pub fn value(&self, matches: &ArgMatches) -> T
    where
        T: Default,
    {
        self.get(matches).unwrap_or_default()
    }

    /// Writes the parsed value into `target`.
    pub fn assign(&self, matches: &ArgMatches, target: &mut T)
    where
        T: Default,
    {
        *target = self.value(matches);
    }
}

#[cfg(test)]
mod tests;
