//! Icon color slots

use serde::{Deserialize, Serialize};
use sunmoon_core::Color;

/// Colors for every painted part of the icon
///
/// The `half_sun_*` slots are used in system mode, where the sun is drawn as
/// two halves. The `sun_*` slots are used in light mode and the `moon_*` slots
/// in dark mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorOptions {
    #[serde(alias = "halfSunLeftFill")]
    pub half_sun_left_fill: Color,
    #[serde(alias = "halfSunLeftStroke")]
    pub half_sun_left_stroke: Color,
    #[serde(alias = "halfSunRightFill")]
    pub half_sun_right_fill: Color,
    #[serde(alias = "halfSunRightStroke")]
    pub half_sun_right_stroke: Color,
    #[serde(alias = "halfSunLeftBeamStroke")]
    pub half_sun_left_beam_stroke: Color,
    #[serde(alias = "halfSunRightBeamStroke")]
    pub half_sun_right_beam_stroke: Color,
    #[serde(alias = "sunFill")]
    pub sun_fill: Color,
    #[serde(alias = "sunStroke")]
    pub sun_stroke: Color,
    #[serde(alias = "sunBeamStroke")]
    pub sun_beam_stroke: Color,
    #[serde(alias = "moonFill")]
    pub moon_fill: Color,
    #[serde(alias = "moonStroke")]
    pub moon_stroke: Color,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            half_sun_left_fill: Color::from_hex(0x444444),
            half_sun_left_stroke: Color::from_hex(0x444444),
            half_sun_right_fill: Color::from_hex(0xd4b511),
            half_sun_right_stroke: Color::from_hex(0xd4b511),
            half_sun_left_beam_stroke: Color::from_hex(0xccc160),
            half_sun_right_beam_stroke: Color::from_hex(0x5e5e53),
            sun_fill: Color::from_hex(0xffd700),
            sun_stroke: Color::from_hex(0x444444),
            sun_beam_stroke: Color::from_hex(0x444444),
            moon_fill: Color::from_hex(0xf5f5f5),
            moon_stroke: Color::from_hex(0xbbbbbb),
        }
    }
}

impl ColorOptions {
    /// Defaults with `overrides` applied slot by slot
    pub fn resolve(overrides: &ColorOverrides) -> Self {
        let mut colors = Self::default();
        overrides.apply(&mut colors);
        colors
    }
}

/// Partial color options; unset slots keep their defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    #[serde(alias = "halfSunLeftFill", skip_serializing_if = "Option::is_none")]
    pub half_sun_left_fill: Option<Color>,
    #[serde(alias = "halfSunLeftStroke", skip_serializing_if = "Option::is_none")]
    pub half_sun_left_stroke: Option<Color>,
    #[serde(alias = "halfSunRightFill", skip_serializing_if = "Option::is_none")]
    pub half_sun_right_fill: Option<Color>,
    #[serde(alias = "halfSunRightStroke", skip_serializing_if = "Option::is_none")]
    pub half_sun_right_stroke: Option<Color>,
    #[serde(alias = "halfSunLeftBeamStroke", skip_serializing_if = "Option::is_none")]
    pub half_sun_left_beam_stroke: Option<Color>,
    #[serde(alias = "halfSunRightBeamStroke", skip_serializing_if = "Option::is_none")]
    pub half_sun_right_beam_stroke: Option<Color>,
    #[serde(alias = "sunFill", skip_serializing_if = "Option::is_none")]
    pub sun_fill: Option<Color>,
    #[serde(alias = "sunStroke", skip_serializing_if = "Option::is_none")]
    pub sun_stroke: Option<Color>,
    #[serde(alias = "sunBeamStroke", skip_serializing_if = "Option::is_none")]
    pub sun_beam_stroke: Option<Color>,
    #[serde(alias = "moonFill", skip_serializing_if = "Option::is_none")]
    pub moon_fill: Option<Color>,
    #[serde(alias = "moonStroke", skip_serializing_if = "Option::is_none")]
    pub moon_stroke: Option<Color>,
}

impl ColorOverrides {
    pub fn apply(&self, colors: &mut ColorOptions) {
        macro_rules! merge {
            ($($slot:ident),* $(,)?) => {
                $(if let Some(color) = self.$slot {
                    colors.$slot = color;
                })*
            };
        }

        merge!(
            half_sun_left_fill,
            half_sun_left_stroke,
            half_sun_right_fill,
            half_sun_right_stroke,
            half_sun_left_beam_stroke,
            half_sun_right_beam_stroke,
            sun_fill,
            sun_stroke,
            sun_beam_stroke,
            moon_fill,
            moon_stroke,
        );
    }

    /// Override both sun fill and stroke
    pub fn sun(mut self, fill: Color, stroke: Color) -> Self {
        self.sun_fill = Some(fill);
        self.sun_stroke = Some(stroke);
        self
    }

    /// Override both moon fill and stroke
    pub fn moon(mut self, fill: Color, stroke: Color) -> Self {
        self.moon_fill = Some(fill);
        self.moon_stroke = Some(stroke);
        self
    }

    pub fn sun_beams(mut self, stroke: Color) -> Self {
        self.sun_beam_stroke = Some(stroke);
        self
    }
}
