//! TOML switch configuration
//!
//! Lets an app keep the switch's look in a file instead of code:
//!
//! ```toml
//! system_mode_enabled = false
//! size = 32
//!
//! [colors]
//! sun_fill = "#ffcc00"
//!
//! [animation_properties.dark.circle]
//! r = 12
//!
//! [animation_properties.spring_config]
//! tension = 300
//!
//! [style]
//! opacity = "0.8"
//! ```

use crate::colors::ColorOverrides;
use crate::error::Result;
use crate::mode::ThemeMode;
use crate::properties::AnimationOverrides;
use crate::style::Style;
use crate::switch::{SwitchProps, DEFAULT_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_system_mode_enabled() -> bool {
    true
}

fn default_size() -> f32 {
    DEFAULT_SIZE
}

/// Serializable subset of [`SwitchProps`]; everything except the callback
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_mode: Option<ThemeMode>,
    #[serde(default = "default_system_mode_enabled")]
    pub system_mode_enabled: bool,
    #[serde(default = "default_size")]
    pub size: f32,
    #[serde(default)]
    pub colors: ColorOverrides,
    #[serde(default)]
    pub animation_properties: AnimationOverrides,
    #[serde(default)]
    pub style: Style,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            theme_mode: None,
            system_mode_enabled: default_system_mode_enabled(),
            size: default_size(),
            colors: ColorOverrides::default(),
            animation_properties: AnimationOverrides::default(),
            style: Style::default(),
        }
    }
}

impl SwitchConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded switch config");
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build render props, attaching the change callback
    pub fn into_props<F>(self, on_change: F) -> SwitchProps
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        let mut props = SwitchProps::new(on_change)
            .system_mode_enabled(self.system_mode_enabled)
            .size(self.size)
            .colors(self.colors)
            .animation_properties(self.animation_properties)
            .style(self.style);
        props.theme_mode = self.theme_mode;
        props
    }
}
