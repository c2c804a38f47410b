//! Switch error types

use sunmoon_core::ColorParseError;
use thiserror::Error;

/// Errors raised by the theme switch
#[derive(Error, Debug)]
pub enum SwitchError {
    /// A mode value outside system/light/dark reached the mode cycle
    #[error("Unsupported theme mode: {0}")]
    UnsupportedThemeMode(String),

    /// A color string could not be parsed
    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),

    /// An svg transform was not of the form `rotate(<n>deg)`
    #[error("Invalid rotation `{0}`: expected rotate(<n>deg)")]
    InvalidRotation(String),

    /// A mask coordinate was not of the form `<n>%`
    #[error("Invalid percentage `{0}`: expected <n>%")]
    InvalidPercent(String),

    /// Failed to parse a TOML switch configuration
    #[error("Failed to parse switch config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize a switch configuration
    #[error("Failed to serialize switch config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Failed to read a configuration file
    #[error("Failed to read switch config: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for switch operations
pub type Result<T> = std::result::Result<T, SwitchError>;
