//! sunmoon core types
//!
//! Small primitives shared by the animation and switch crates:
//!
//! - **Color**: RGBA color with `#rgb` / `#rrggbb` / `#rrggbbaa` parsing
//! - **Geometry**: points, sizes and rects for hit testing
//! - **Events**: platform-agnostic pointer and keyboard events

pub mod color;
pub mod events;
pub mod geometry;

pub use color::{Color, ColorParseError};
pub use events::{Event, EventData, EventType, KeyCode};
pub use geometry::{Point, Rect, Size};
