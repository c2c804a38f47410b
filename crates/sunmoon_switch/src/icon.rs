//! Sun/moon icon markup
//!
//! Produces the SVG for one frame from live geometry values. The drawing sits
//! on a 24×24 view box: a disc of animated radius at the center, cut by a
//! black mask circle that slides in to carve the moon's crescent, and eight
//! beams whose group opacity fades out in dark mode.

use crate::colors::ColorOptions;
use crate::markup::escape_attribute;
use crate::mode::ThemeMode;
use crate::style::Style;
use crate::units::{format_number, Percent, Rotation};
use serde::{Deserialize, Serialize};
use std::fmt;
use sunmoon_core::Color;

/// Side length of the icon's view box
pub const VIEW_BOX: f32 = 24.0;

/// Radius of the mask circle that carves the crescent
const MASK_RADIUS: f32 = 9.0;

const CENTER: f32 = VIEW_BOX / 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Beam segments `(x1, y1, x2, y2)` and which half of the sun they belong to.
/// The vertical beams are split: top goes with the left half, bottom with the right.
const BEAMS: [(f32, f32, f32, f32, Side); 8] = [
    (12.0, 1.0, 12.0, 3.0, Side::Left),
    (12.0, 21.0, 12.0, 23.0, Side::Right),
    (4.22, 4.22, 5.64, 5.64, Side::Left),
    (18.36, 18.36, 19.78, 19.78, Side::Right),
    (1.0, 12.0, 3.0, 12.0, Side::Left),
    (21.0, 12.0, 23.0, 12.0, Side::Right),
    (4.22, 19.78, 5.64, 18.36, Side::Left),
    (18.36, 5.64, 19.78, 4.22, Side::Right),
];

/// Live values of the four animated geometry groups for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometryValues {
    /// Whole-icon rotation in degrees
    pub rotate: f32,
    /// Radius of the sun/moon disc
    pub r: f32,
    /// Mask circle center, percent of the view box
    pub mask_cx: f32,
    pub mask_cy: f32,
    /// Beam group opacity
    pub lines_opacity: f32,
}

/// One renderable frame of the icon
#[derive(Clone, Copy, Debug)]
pub struct SunMoonIcon<'a> {
    pub size: f32,
    pub mode: ThemeMode,
    pub values: GeometryValues,
    pub colors: &'a ColorOptions,
    pub style: &'a Style,
    pub mask_id: &'a str,
}

impl SunMoonIcon<'_> {
    /// Inline style of the root `<svg>`: animated rotation, then caller style
    pub fn root_style(&self) -> Style {
        Style::new()
            .set("transform", Rotation::degrees(self.values.rotate).to_string())
            .merged(self.style)
    }

    fn write_disc(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = format_number(self.values.r);
        let mask = escape_attribute(&format!("url(#{})", self.mask_id)).into_owned();

        match self.mode {
            ThemeMode::System => {
                let top = format_number(CENTER - self.values.r);
                let bottom = format_number(CENTER + self.values.r);
                for (sweep, fill, stroke) in [
                    (0, self.colors.half_sun_left_fill, self.colors.half_sun_left_stroke),
                    (1, self.colors.half_sun_right_fill, self.colors.half_sun_right_stroke),
                ] {
                    writeln!(
                        f,
                        r#"  <path d="M12 {top} A{r} {r} 0 0 {sweep} 12 {bottom} Z" fill="{fill}" stroke="{stroke}" mask="{mask}"/>"#
                    )?;
                }
                Ok(())
            }
            ThemeMode::Light | ThemeMode::Dark => {
                let (fill, stroke) = if self.mode == ThemeMode::Dark {
                    (self.colors.moon_fill, self.colors.moon_stroke)
                } else {
                    (self.colors.sun_fill, self.colors.sun_stroke)
                };
                writeln!(
                    f,
                    r#"  <circle cx="12" cy="12" r="{r}" fill="{fill}" stroke="{stroke}" mask="{mask}"/>"#
                )
            }
        }
    }

    fn beam_color(&self, side: Side) -> Color {
        match (self.mode, side) {
            (ThemeMode::System, Side::Left) => self.colors.half_sun_left_beam_stroke,
            (ThemeMode::System, Side::Right) => self.colors.half_sun_right_beam_stroke,
            _ => self.colors.sun_beam_stroke,
        }
    }
}

impl fmt::Display for SunMoonIcon<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = format_number(self.size);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" style="{}">"#,
            escape_attribute(&self.root_style().to_string())
        )?;

        writeln!(f, r#"  <mask id="{}">"#, escape_attribute(self.mask_id))?;
        writeln!(f, r#"    <rect x="0" y="0" width="100%" height="100%" fill="white"/>"#)?;
        writeln!(
            f,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
            Percent::new(self.values.mask_cx),
            Percent::new(self.values.mask_cy),
            format_number(MASK_RADIUS)
        )?;
        writeln!(f, "  </mask>")?;

        self.write_disc(f)?;

        writeln!(
            f,
            r#"  <g opacity="{}">"#,
            format_number(self.values.lines_opacity)
        )?;
        for (x1, y1, x2, y2, side) in BEAMS {
            writeln!(
                f,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                format_number(x1),
                format_number(y1),
                format_number(x2),
                format_number(y2),
                self.beam_color(side)
            )?;
        }
        writeln!(f, "  </g>")?;
        write!(f, "</svg>")
    }
}
