//! Theme modes and the toggle cycle
//!
//! The switch cycles `System → Dark → Light → System`. With the system mode
//! disabled, `Light` wraps back to `Dark` and `System` is never produced.

use crate::error::{Result, SwitchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display mode selected by the switch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the operating system preference
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// All modes in cycle order, starting from `System`
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Dark, ThemeMode::Light];

    /// The mode a switch shows when the caller does not pick one
    pub fn default_for(system_mode_enabled: bool) -> Self {
        if system_mode_enabled {
            ThemeMode::System
        } else {
            ThemeMode::Light
        }
    }

    /// The mode that follows `self` when the switch is activated
    pub fn next(self, system_mode_enabled: bool) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light if system_mode_enabled => ThemeMode::System,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Cycle a mode that arrives untyped, e.g. from storage or a query string
///
/// Fails with [`SwitchError::UnsupportedThemeMode`] for anything other than
/// `system`, `light` or `dark`.
pub fn next_theme_mode(current: &str, system_mode_enabled: bool) -> Result<ThemeMode> {
    let mode: ThemeMode = current.parse()?;
    Ok(mode.next(system_mode_enabled))
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(ThemeMode::System),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => {
                tracing::warn!(mode = s, "rejected unsupported theme mode");
                Err(SwitchError::UnsupportedThemeMode(s.to_string()))
            }
        }
    }
}

impl TryFrom<&str> for ThemeMode {
    type Error = SwitchError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// Numeric discriminants: 0 = system, 1 = light, 2 = dark
impl TryFrom<u8> for ThemeMode {
    type Error = SwitchError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ThemeMode::System),
            1 => Ok(ThemeMode::Light),
            2 => Ok(ThemeMode::Dark),
            other => {
                tracing::warn!(mode = other, "rejected unsupported theme mode");
                Err(SwitchError::UnsupportedThemeMode(other.to_string()))
            }
        }
    }
}

impl From<ThemeMode> for u8 {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::System => 0,
            ThemeMode::Light => 1,
            ThemeMode::Dark => 2,
        }
    }
}
