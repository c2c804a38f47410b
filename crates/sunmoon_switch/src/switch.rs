//! Dark mode switch component
//!
//! The switch is controlled: it never stores the current mode. Each frame the
//! caller builds [`SwitchProps`] with its mode and calls
//! [`DarkModeSwitch::render`]. Activating the switch computes the next mode
//! and hands it to `on_change`. The caller then re-renders with that mode and
//! the springs in [`SwitchState`] animate toward the new geometry.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use sunmoon_switch::{DarkModeSwitch, SwitchProps, SwitchState, ThemeMode};
//!
//! let mode = Arc::new(Mutex::new(ThemeMode::Dark));
//! let sink = Arc::clone(&mode);
//! let props = SwitchProps::new(move |next| *sink.lock().unwrap() = next)
//!     .theme_mode(ThemeMode::Dark);
//!
//! let mut state = SwitchState::new(&props);
//! let element = DarkModeSwitch::render(&props, &mut state);
//! assert!(element.to_svg().starts_with("<svg"));
//!
//! DarkModeSwitch::click(&props);
//! assert_eq!(*mode.lock().unwrap(), ThemeMode::Light);
//! ```

use crate::colors::{ColorOptions, ColorOverrides};
use crate::icon::{GeometryValues, SunMoonIcon};
use crate::markup::escape_attribute;
use crate::mode::ThemeMode;
use crate::properties::{AnimationOverrides, AnimationProperties, ModeGeometry};
use crate::style::Style;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use sunmoon_animation::{Spring, SpringConfig};
use sunmoon_core::events::event_types;
use sunmoon_core::{Event, EventData, KeyCode, Point, Rect, Size};

/// Default icon edge length in logical pixels
pub const DEFAULT_SIZE: f32 = 24.0;

static NEXT_MASK_ID: AtomicU64 = AtomicU64::new(1);

/// Callback receiving the next mode
pub type ChangeHandler = Arc<dyn Fn(ThemeMode) + Send + Sync>;

/// Caller configuration, rebuilt on every render
#[derive(Clone)]
pub struct SwitchProps {
    on_change: ChangeHandler,
    /// Current mode; `None` falls back to [`ThemeMode::default_for`]
    pub theme_mode: Option<ThemeMode>,
    /// Whether `System` is part of the cycle
    pub system_mode_enabled: bool,
    /// Icon edge length in logical pixels
    pub size: f32,
    pub colors: ColorOverrides,
    pub animation_properties: AnimationOverrides,
    /// Passed through to the icon's root element
    pub style: Style,
}

impl SwitchProps {
    pub fn new<F>(on_change: F) -> Self
    where
        F: Fn(ThemeMode) + Send + Sync + 'static,
    {
        Self::with_handler(Arc::new(on_change))
    }

    pub fn with_handler(on_change: ChangeHandler) -> Self {
        Self {
            on_change,
            theme_mode: None,
            system_mode_enabled: true,
            size: DEFAULT_SIZE,
            colors: ColorOverrides::default(),
            animation_properties: AnimationOverrides::default(),
            style: Style::default(),
        }
    }

    pub fn theme_mode(mut self, mode: ThemeMode) -> Self {
        self.theme_mode = Some(mode);
        self
    }

    pub fn system_mode_enabled(mut self, enabled: bool) -> Self {
        self.system_mode_enabled = enabled;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }

    pub fn animation_properties(mut self, overrides: AnimationOverrides) -> Self {
        self.animation_properties = overrides;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The mode being displayed
    pub fn current_mode(&self) -> ThemeMode {
        self.theme_mode
            .unwrap_or_else(|| ThemeMode::default_for(self.system_mode_enabled))
    }

    /// The mode an activation would report
    pub fn next_mode(&self) -> ThemeMode {
        self.current_mode().next(self.system_mode_enabled)
    }

    /// Effective property table for these props
    pub fn resolved_properties(&self) -> AnimationProperties {
        AnimationProperties::resolve(&self.animation_properties)
    }
}

impl fmt::Debug for SwitchProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchProps")
            .field("theme_mode", &self.theme_mode)
            .field("system_mode_enabled", &self.system_mode_enabled)
            .field("size", &self.size)
            .field("colors", &self.colors)
            .field("animation_properties", &self.animation_properties)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Animation state owned by the host between renders
///
/// One spring per animated scalar, all sharing the table's spring config.
#[derive(Debug)]
pub struct SwitchState {
    rotate: Spring,
    radius: Spring,
    mask_cx: Spring,
    mask_cy: Spring,
    lines_opacity: Spring,
    mask_id: String,
}

impl SwitchState {
    /// Create state resting at the geometry of the props' current mode
    pub fn new(props: &SwitchProps) -> Self {
        let properties = props.resolved_properties();
        Self::at_rest(
            properties.geometry(props.current_mode()),
            properties.spring_config,
        )
    }

    /// Create state resting at `geometry`; nothing animates until retargeted
    pub fn at_rest(geometry: &ModeGeometry, config: SpringConfig) -> Self {
        let id = NEXT_MASK_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            rotate: Spring::new(config, geometry.svg.transform.as_degrees()),
            radius: Spring::new(config, geometry.circle.r),
            mask_cx: Spring::new(config, geometry.mask.cx.value()),
            mask_cy: Spring::new(config, geometry.mask.cy.value()),
            lines_opacity: Spring::new(config, geometry.lines.opacity),
            mask_id: format!("sunmoon-mask-{id}"),
        }
    }

    fn springs_mut(&mut self) -> [&mut Spring; 5] {
        [
            &mut self.rotate,
            &mut self.radius,
            &mut self.mask_cx,
            &mut self.mask_cy,
            &mut self.lines_opacity,
        ]
    }

    fn springs(&self) -> [&Spring; 5] {
        [
            &self.rotate,
            &self.radius,
            &self.mask_cx,
            &self.mask_cy,
            &self.lines_opacity,
        ]
    }

    /// Point every spring at `geometry` and apply the shared config
    pub fn sync(&mut self, geometry: &ModeGeometry, config: SpringConfig) {
        for spring in self.springs_mut() {
            spring.set_config(config);
        }
        self.rotate.set_target(geometry.svg.transform.as_degrees());
        self.radius.set_target(geometry.circle.r);
        self.mask_cx.set_target(geometry.mask.cx.value());
        self.mask_cy.set_target(geometry.mask.cy.value());
        self.lines_opacity.set_target(geometry.lines.opacity);
    }

    /// Update animations (call each frame)
    pub fn update(&mut self, dt: f32) {
        for spring in self.springs_mut() {
            spring.step(dt);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.springs().iter().any(|spring| !spring.is_settled())
    }

    /// Current interpolated values
    pub fn values(&self) -> GeometryValues {
        GeometryValues {
            rotate: self.rotate.value(),
            r: self.radius.value(),
            mask_cx: self.mask_cx.value(),
            mask_cy: self.mask_cy.value(),
            lines_opacity: self.lines_opacity.value(),
        }
    }

    /// Values the springs are heading toward
    pub fn targets(&self) -> GeometryValues {
        GeometryValues {
            rotate: self.rotate.target(),
            r: self.radius.target(),
            mask_cx: self.mask_cx.target(),
            mask_cy: self.mask_cy.target(),
            lines_opacity: self.lines_opacity.target(),
        }
    }

    /// Unique id for the icon's crescent mask
    pub fn mask_id(&self) -> &str {
        &self.mask_id
    }
}

/// Output of one render pass
#[derive(Clone, Debug)]
pub struct SwitchElement {
    pub mode: ThemeMode,
    pub system_mode_enabled: bool,
    pub size: f32,
    pub values: GeometryValues,
    pub colors: ColorOptions,
    /// Caller passthrough style for the icon
    pub style: Style,
    /// Style of the clickable wrapper
    pub container_style: Style,
    pub mask_id: String,
}

impl SwitchElement {
    pub fn icon(&self) -> SunMoonIcon<'_> {
        SunMoonIcon {
            size: self.size,
            mode: self.mode,
            values: self.values,
            colors: &self.colors,
            style: &self.style,
            mask_id: &self.mask_id,
        }
    }

    /// Icon markup for this frame
    pub fn to_svg(&self) -> String {
        self.icon().to_string()
    }

    /// Icon wrapped in its unstyled `<button>`
    pub fn to_html(&self) -> String {
        let next = self.mode.next(self.system_mode_enabled);
        let label = format!("Switch to {next} mode");
        format!(
            "<button type=\"button\" aria-label=\"{}\" style=\"{}\">\n{}\n</button>",
            escape_attribute(&label),
            escape_attribute(&self.container_style.to_string()),
            self.to_svg()
        )
    }

    /// Clickable region when the element is placed at `origin`
    pub fn bounds(&self, origin: Point) -> Rect {
        Rect::from_origin_size(origin, Size::square(self.size))
    }
}

/// The sun/moon theme switch
pub struct DarkModeSwitch;

impl DarkModeSwitch {
    /// Resolve properties, retarget the springs and snapshot this frame
    pub fn render(props: &SwitchProps, state: &mut SwitchState) -> SwitchElement {
        let mode = props.current_mode();
        let properties = props.resolved_properties();
        state.sync(properties.geometry(mode), properties.spring_config);

        tracing::trace!(%mode, animating = state.is_animating(), "rendering theme switch");

        SwitchElement {
            mode,
            system_mode_enabled: props.system_mode_enabled,
            size: props.size,
            values: state.values(),
            colors: ColorOptions::resolve(&props.colors),
            style: props.style.clone(),
            container_style: Style::button_reset(),
            mask_id: state.mask_id().to_string(),
        }
    }

    /// Activate the switch: report the next mode through `on_change`
    ///
    /// Nothing is updated locally; the new mode takes effect when the caller
    /// renders with it.
    pub fn click(props: &SwitchProps) -> ThemeMode {
        let current = props.current_mode();
        let next = props.next_mode();
        tracing::debug!(from = %current, to = %next, "theme switch activated");
        (props.on_change)(next);
        next
    }

    /// Route an input event; activates on a primary pointer release inside
    /// `bounds` or on Enter/Space
    pub fn handle_event(props: &SwitchProps, bounds: Rect, event: &Event) -> Option<ThemeMode> {
        let activate = match (event.event_type, &event.data) {
            (event_types::POINTER_UP, EventData::Pointer { x, y, button }) => {
                *button == 0 && bounds.contains(Point::new(*x, *y))
            }
            (event_types::KEY_DOWN, EventData::Key { key, repeat }) => {
                !*repeat && (*key == KeyCode::ENTER || *key == KeyCode::SPACE)
            }
            _ => false,
        };

        activate.then(|| Self::click(props))
    }
}
