//! Spring physics
//!
//! A spring pulls its value toward a target with a restoring force
//! proportional to the distance (`tension`) and a damping force proportional
//! to the velocity (`friction`). Time is measured in seconds.

use serde::{Deserialize, Serialize};

/// Largest integration step; longer frames are split into substeps
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Longest frame simulated in one `step`; longer hitches are truncated
const MAX_FRAME: f32 = 1.0;

/// Mass floor; keeps a zero mass from dividing by zero
const MIN_MASS: f32 = 1e-3;

/// Spring tuning parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    /// Stop at the target on the first crossing instead of oscillating
    #[serde(default)]
    pub clamp: bool,
    /// Distance and speed below which the spring counts as settled
    #[serde(default = "default_precision")]
    pub precision: f32,
}

fn default_precision() -> f32 {
    0.01
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(1.0, 170.0, 26.0)
    }
}

impl SpringConfig {
    pub const fn new(mass: f32, tension: f32, friction: f32) -> Self {
        Self {
            mass,
            tension,
            friction,
            clamp: false,
            precision: 0.01,
        }
    }

    /// Slow and smooth
    pub const fn gentle() -> Self {
        Self::new(1.0, 120.0, 14.0)
    }

    /// Bouncy with visible overshoot
    pub const fn wobbly() -> Self {
        Self::new(1.0, 180.0, 12.0)
    }

    /// Fast with little overshoot
    pub const fn stiff() -> Self {
        Self::new(1.0, 210.0, 20.0)
    }

    pub const fn slow() -> Self {
        Self::new(1.0, 280.0, 60.0)
    }

    pub const fn molasses() -> Self {
        Self::new(1.0, 280.0, 120.0)
    }

    pub const fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    pub const fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }
}

/// A single animated scalar driven by spring physics
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring resting at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Replace the tuning; the current value and velocity are kept
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Retarget the spring; the current velocity carries over
    pub fn set_target(&mut self, target: f32) {
        if target != self.target {
            tracing::trace!(from = self.target, to = target, "spring retargeted");
            self.target = target;
        }
    }

    /// Jump straight to the target and stop
    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        let precision = self.config.precision;
        (self.value - self.target).abs() < precision && self.velocity.abs() < precision
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.snap_to_target();
            return;
        }

        // NaN and negative frames do nothing; infinite ones count as MAX_FRAME
        let dt = if dt.is_nan() { 0.0 } else { dt.clamp(0.0, MAX_FRAME) };
        if dt == 0.0 {
            return;
        }

        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            let before = self.value - self.target;
            self.integrate(h);
            let after = self.value - self.target;

            let crossed = after == 0.0 || after.signum() != before.signum();
            if self.config.clamp && before != 0.0 && crossed {
                self.snap_to_target();
                return;
            }
            if self.is_settled() {
                break;
            }
        }

        if self.is_settled() {
            self.snap_to_target();
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.tension * (x - self.target);
        let damping_force = -self.config.friction * v;
        (spring_force + damping_force) / self.config.mass.max(MIN_MASS)
    }

    /// One RK4 step of size `h`
    fn integrate(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1_x = v;
        let k1_v = self.acceleration(x, v);

        let k2_x = v + 0.5 * h * k1_v;
        let k2_v = self.acceleration(x + 0.5 * h * k1_x, k2_x);

        let k3_x = v + 0.5 * h * k2_v;
        let k3_v = self.acceleration(x + 0.5 * h * k2_x, k3_x);

        let k4_x = v + h * k3_v;
        let k4_v = self.acceleration(x + h * k3_x, k4_x);

        self.value = x + h / 6.0 * (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x);
        self.velocity = v + h / 6.0 * (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v);
    }
}
