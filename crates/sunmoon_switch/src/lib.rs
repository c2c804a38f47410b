//! sunmoon theme switch
//!
//! An animated sun/moon toggle that cycles between system, light and dark
//! display modes.
//!
//! # Overview
//!
//! - **Mode cycle**: `System → Dark → Light → System`, or `Dark ↔ Light` when
//!   the system mode is disabled
//! - **Property table**: per-mode target geometry (rotation, disc radius, mask
//!   position, beam opacity) plus one shared spring configuration
//! - **Rendering**: springs ease the live geometry toward the active mode's
//!   row; each frame renders to SVG markup
//!
//! The switch is a controlled component. The caller owns the current mode,
//! receives the next one through `on_change`, and renders again with it.
//!
//! # Quick Start
//!
//! ```rust
//! use sunmoon_switch::{DarkModeSwitch, SwitchProps, SwitchState, ThemeMode};
//!
//! let props = SwitchProps::new(|next| println!("switch to {next}"))
//!     .theme_mode(ThemeMode::Light)
//!     .size(32.0);
//!
//! let mut state = SwitchState::new(&props);
//! let frame = DarkModeSwitch::render(&props, &mut state);
//! let _markup = frame.to_html();
//!
//! // Each display frame
//! state.update(1.0 / 60.0);
//! ```

pub mod colors;
pub mod config;
pub mod error;
pub mod icon;
pub mod markup;
pub mod mode;
pub mod properties;
pub mod style;
pub mod switch;
pub mod units;

pub use colors::{ColorOptions, ColorOverrides};
pub use config::SwitchConfig;
pub use error::{Result, SwitchError};
pub use icon::{GeometryValues, SunMoonIcon};
pub use mode::{next_theme_mode, ThemeMode};
pub use properties::{
    AnimationOverrides, AnimationProperties, ModeGeometry, ModeGeometryOverride,
    SpringConfigOverride,
};
pub use style::Style;
pub use switch::{ChangeHandler, DarkModeSwitch, SwitchElement, SwitchProps, SwitchState};
pub use units::{Percent, Rotation};

pub use sunmoon_animation::SpringConfig;
pub use sunmoon_core::Color;
