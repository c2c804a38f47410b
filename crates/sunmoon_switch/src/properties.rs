//! Animation property table
//!
//! Each [`ThemeMode`] maps to a [`ModeGeometry`]: the target values for the
//! four animated groups (svg rotation, circle radius, mask position, beam
//! opacity). One [`SpringConfig`] drives all four groups.
//!
//! Callers customize the table with [`AnimationOverrides`], whose leaves are
//! all optional. Resolution always builds a fresh table: the built-in
//! defaults are constructed per call and never shared or mutated.

use crate::mode::ThemeMode;
use crate::units::{Percent, Rotation};
use serde::{Deserialize, Serialize};
use sunmoon_animation::SpringConfig;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SvgGeometry {
    pub transform: Rotation,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub r: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskGeometry {
    pub cx: Percent,
    pub cy: Percent,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinesGeometry {
    pub opacity: f32,
}

/// Target geometry for one theme mode
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeGeometry {
    pub svg: SvgGeometry,
    pub circle: CircleGeometry,
    pub mask: MaskGeometry,
    pub lines: LinesGeometry,
}

impl ModeGeometry {
    pub const fn new(rotate_deg: f32, r: f32, mask_cx: f32, mask_cy: f32, opacity: f32) -> Self {
        Self {
            svg: SvgGeometry {
                transform: Rotation::degrees(rotate_deg),
            },
            circle: CircleGeometry { r },
            mask: MaskGeometry {
                cx: Percent::new(mask_cx),
                cy: Percent::new(mask_cy),
            },
            lines: LinesGeometry { opacity },
        }
    }

    /// Overwrite every field the override sets
    pub fn apply(&mut self, overrides: &ModeGeometryOverride) {
        if let Some(transform) = overrides.svg.transform {
            self.svg.transform = transform;
        }
        if let Some(r) = overrides.circle.r {
            self.circle.r = r;
        }
        if let Some(cx) = overrides.mask.cx {
            self.mask.cx = cx;
        }
        if let Some(cy) = overrides.mask.cy {
            self.mask.cy = cy;
        }
        if let Some(opacity) = overrides.lines.opacity {
            self.lines.opacity = opacity;
        }
    }
}

/// Full property table: one geometry row per mode plus the shared spring
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationProperties {
    pub system: ModeGeometry,
    pub light: ModeGeometry,
    pub dark: ModeGeometry,
    #[serde(alias = "springConfig")]
    pub spring_config: SpringConfig,
}

impl Default for AnimationProperties {
    fn default() -> Self {
        Self {
            system: ModeGeometry::new(0.0, 5.0, 100.0, 0.0, 1.0),
            light: ModeGeometry::new(90.0, 5.0, 100.0, 0.0, 1.0),
            dark: ModeGeometry::new(40.0, 9.0, 50.0, 23.0, 0.0),
            spring_config: SpringConfig::new(4.0, 250.0, 35.0).clamped(),
        }
    }
}

impl AnimationProperties {
    /// Resolve caller overrides against the built-in defaults
    pub fn resolve(overrides: &AnimationOverrides) -> Self {
        Self::default().merged(overrides)
    }

    /// A copy of `self` with `overrides` merged in, field by field
    pub fn merged(&self, overrides: &AnimationOverrides) -> Self {
        let mut merged = *self;
        if !overrides.is_empty() {
            merged.apply(overrides);
        }
        merged
    }

    /// Merge `overrides` into this table in place
    pub fn apply(&mut self, overrides: &AnimationOverrides) {
        for mode in ThemeMode::ALL {
            self.geometry_mut(mode).apply(overrides.geometry(mode));
        }
        overrides.spring_config.apply(&mut self.spring_config);
        tracing::trace!(?overrides, "merged animation overrides");
    }

    pub fn geometry(&self, mode: ThemeMode) -> &ModeGeometry {
        match mode {
            ThemeMode::System => &self.system,
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn geometry_mut(&mut self, mode: ThemeMode) -> &mut ModeGeometry {
        match mode {
            ThemeMode::System => &mut self.system,
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overrides
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<Rotation>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cx: Option<Percent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cy: Option<Percent>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinesOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

/// Partial geometry for one mode; unset fields keep their defaults
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeGeometryOverride {
    pub svg: SvgOverride,
    pub circle: CircleOverride,
    pub mask: MaskOverride,
    pub lines: LinesOverride,
}

impl ModeGeometryOverride {
    pub fn rotate(mut self, degrees: f32) -> Self {
        self.svg.transform = Some(Rotation::degrees(degrees));
        self
    }

    pub fn radius(mut self, r: f32) -> Self {
        self.circle.r = Some(r);
        self
    }

    pub fn mask(mut self, cx: f32, cy: f32) -> Self {
        self.mask.cx = Some(Percent::new(cx));
        self.mask.cy = Some(Percent::new(cy));
        self
    }

    pub fn line_opacity(mut self, opacity: f32) -> Self {
        self.lines.opacity = Some(opacity);
        self
    }
}

/// Partial spring tuning
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfigOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clamp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f32>,
}

impl SpringConfigOverride {
    pub fn apply(&self, config: &mut SpringConfig) {
        if let Some(mass) = self.mass {
            config.mass = mass;
        }
        if let Some(tension) = self.tension {
            config.tension = tension;
        }
        if let Some(friction) = self.friction {
            config.friction = friction;
        }
        if let Some(clamp) = self.clamp {
            config.clamp = clamp;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
    }
}

impl From<SpringConfig> for SpringConfigOverride {
    fn from(config: SpringConfig) -> Self {
        Self {
            mass: Some(config.mass),
            tension: Some(config.tension),
            friction: Some(config.friction),
            clamp: Some(config.clamp),
            precision: Some(config.precision),
        }
    }
}

/// Caller-supplied changes to the property table
///
/// ```rust
/// use sunmoon_switch::{AnimationOverrides, AnimationProperties, ModeGeometryOverride, ThemeMode};
///
/// let overrides = AnimationOverrides::default()
///     .with_mode(ThemeMode::Dark, ModeGeometryOverride::default().radius(12.0));
/// let table = AnimationProperties::resolve(&overrides);
/// assert_eq!(table.dark.circle.r, 12.0);
/// assert_eq!(table.dark.lines.opacity, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationOverrides {
    pub system: ModeGeometryOverride,
    pub light: ModeGeometryOverride,
    pub dark: ModeGeometryOverride,
    #[serde(alias = "springConfig")]
    pub spring_config: SpringConfigOverride,
}

impl AnimationOverrides {
    /// True when resolving would reproduce the defaults unchanged
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn geometry(&self, mode: ThemeMode) -> &ModeGeometryOverride {
        match mode {
            ThemeMode::System => &self.system,
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    pub fn geometry_mut(&mut self, mode: ThemeMode) -> &mut ModeGeometryOverride {
        match mode {
            ThemeMode::System => &mut self.system,
            ThemeMode::Light => &mut self.light,
            ThemeMode::Dark => &mut self.dark,
        }
    }

    pub fn with_mode(mut self, mode: ThemeMode, geometry: ModeGeometryOverride) -> Self {
        *self.geometry_mut(mode) = geometry;
        self
    }

    pub fn with_spring_config(mut self, spring: impl Into<SpringConfigOverride>) -> Self {
        self.spring_config = spring.into();
        self
    }
}
