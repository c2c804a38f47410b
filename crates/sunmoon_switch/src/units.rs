//! Typed geometry units: svg rotation and mask percentages

use crate::error::{Result, SwitchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format a number for svg/css output: at most 3 decimals, no trailing zeros
pub fn format_number(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // -0 would otherwise print as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// An svg rotation in degrees, written `rotate(<n>deg)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rotation(pub f32);

impl Rotation {
    pub const fn degrees(deg: f32) -> Self {
        Self(deg)
    }

    pub fn as_degrees(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotate({}deg)", format_number(self.0))
    }
}

impl FromStr for Rotation {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self> {
        let err = || SwitchError::InvalidRotation(s.to_string());
        let inner = s
            .trim()
            .strip_prefix("rotate(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let degrees = inner.trim().strip_suffix("deg").ok_or_else(err)?;
        degrees.trim().parse::<f32>().map(Rotation).map_err(|_| err())
    }
}

impl TryFrom<String> for Rotation {
    type Error = SwitchError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rotation> for String {
    fn from(rotation: Rotation) -> Self {
        rotation.to_string()
    }
}

/// A mask coordinate as a percentage of the icon box, written `<n>%`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Percent(pub f32);

impl Percent {
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", format_number(self.0))
    }
}

impl FromStr for Percent {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self> {
        let err = || SwitchError::InvalidPercent(s.to_string());
        let number = s.trim().strip_suffix('%').ok_or_else(err)?;
        number.trim().parse::<f32>().map(Percent).map_err(|_| err())
    }
}

impl TryFrom<String> for Percent {
    type Error = SwitchError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Percent> for String {
    fn from(percent: Percent) -> Self {
        percent.to_string()
    }
}
