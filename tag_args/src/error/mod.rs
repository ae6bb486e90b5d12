//! Error types produced by tag parsing and flag binding.

mod constructors;
mod types;

pub use types::{ConfigError, ConversionError, RegistryError, TagError};

/// Result alias for binding operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
