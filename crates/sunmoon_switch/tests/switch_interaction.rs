//! Switch rendering and activation
//!
//! These tests verify that:
//! - Activation reports the next mode exactly once and changes nothing locally
//! - Pointer and keyboard events route to activation
//! - Rendering with a new mode animates the geometry toward its row

use std::sync::{Arc, Mutex};
use sunmoon_core::events::event_types;
use sunmoon_core::{Event, KeyCode, Point, Rect};
use sunmoon_switch::{
    AnimationOverrides, ColorOverrides, DarkModeSwitch, ModeGeometryOverride, Style, SwitchProps,
    SwitchState, ThemeMode,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn recording_props(mode: ThemeMode) -> (SwitchProps, Arc<Mutex<Vec<ThemeMode>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let props = SwitchProps::new(move |next| sink.lock().unwrap().push(next)).theme_mode(mode);
    (props, calls)
}

fn settle(state: &mut SwitchState) {
    for _ in 0..600 {
        state.update(1.0 / 60.0);
    }
}

#[test]
fn test_click_on_dark_reports_light_once() {
    init_tracing();
    let (props, calls) = recording_props(ThemeMode::Dark);

    let next = DarkModeSwitch::click(&props);

    assert_eq!(next, ThemeMode::Light);
    assert_eq!(*calls.lock().unwrap(), vec![ThemeMode::Light]);
    // Controlled: the props still describe the caller's mode
    assert_eq!(props.current_mode(), ThemeMode::Dark);
}

#[test]
fn test_click_on_light_without_system_reports_dark() {
    let (props, calls) = recording_props(ThemeMode::Light);
    let props = props.system_mode_enabled(false);

    DarkModeSwitch::click(&props);
    assert_eq!(*calls.lock().unwrap(), vec![ThemeMode::Dark]);
}

#[test]
fn test_unset_mode_defaults_from_system_flag() {
    let props = SwitchProps::new(|_| {});
    assert_eq!(props.current_mode(), ThemeMode::System);
    assert_eq!(props.size, 24.0);

    let props = props.system_mode_enabled(false);
    assert_eq!(props.current_mode(), ThemeMode::Light);
    assert_eq!(props.next_mode(), ThemeMode::Dark);
}

#[test]
fn test_pointer_release_inside_bounds_activates() {
    let (props, calls) = recording_props(ThemeMode::System);
    let bounds = Rect::new(100.0, 100.0, 24.0, 24.0);

    let inside = Event::pointer(event_types::POINTER_UP, 110.0, 110.0);
    let outside = Event::pointer(event_types::POINTER_UP, 10.0, 10.0);
    let press = Event::pointer(event_types::POINTER_DOWN, 110.0, 110.0);

    assert_eq!(DarkModeSwitch::handle_event(&props, bounds, &press), None);
    assert_eq!(DarkModeSwitch::handle_event(&props, bounds, &outside), None);
    assert_eq!(
        DarkModeSwitch::handle_event(&props, bounds, &inside),
        Some(ThemeMode::Dark)
    );
    assert_eq!(*calls.lock().unwrap(), vec![ThemeMode::Dark]);
}

#[test]
fn test_enter_and_space_activate() {
    let (props, calls) = recording_props(ThemeMode::Light);
    let bounds = Rect::new(0.0, 0.0, 24.0, 24.0);

    for key in [KeyCode::ENTER, KeyCode::SPACE, KeyCode(0x09)] {
        DarkModeSwitch::handle_event(&props, bounds, &Event::key(event_types::KEY_DOWN, key));
    }

    assert_eq!(
        *calls.lock().unwrap(),
        vec![ThemeMode::System, ThemeMode::System]
    );
}

#[test]
fn test_first_render_does_not_animate() {
    let (props, _) = recording_props(ThemeMode::Dark);
    let mut state = SwitchState::new(&props);

    let element = DarkModeSwitch::render(&props, &mut state);

    assert!(!state.is_animating());
    assert_eq!(element.values.r, 9.0);
    assert_eq!(element.values.lines_opacity, 0.0);
    assert_eq!(element.values.rotate, 40.0);
}

#[test]
fn test_rerender_with_next_mode_animates_to_its_row() {
    init_tracing();
    let (props, calls) = recording_props(ThemeMode::Dark);
    let mut state = SwitchState::new(&props);
    DarkModeSwitch::render(&props, &mut state);

    // Caller receives the next mode and renders with it
    DarkModeSwitch::click(&props);
    let next = calls.lock().unwrap()[0];
    let props = props.theme_mode(next);
    let element = DarkModeSwitch::render(&props, &mut state);

    assert!(state.is_animating());
    assert_eq!(element.values.r, 9.0, "values only move when time advances");
    assert_eq!(state.targets().r, 5.0);

    state.update(1.0 / 60.0);
    let midway = state.values();
    assert!(midway.r < 9.0 && midway.r > 5.0);
    assert!(midway.rotate > 40.0 && midway.rotate < 90.0);

    settle(&mut state);
    assert!(!state.is_animating());
    let element = DarkModeSwitch::render(&props, &mut state);
    assert_eq!(element.values.r, 5.0);
    assert_eq!(element.values.rotate, 90.0);
    assert_eq!(element.values.mask_cx, 100.0);
    assert_eq!(element.values.mask_cy, 0.0);
    assert_eq!(element.values.lines_opacity, 1.0);
}

#[test]
fn test_overrides_flow_into_render() {
    let overrides = AnimationOverrides::default()
        .with_mode(ThemeMode::Dark, ModeGeometryOverride::default().radius(12.0));
    let (props, _) = recording_props(ThemeMode::Dark);
    let props = props
        .animation_properties(overrides)
        .colors(ColorOverrides::default().moon(
            "#101010".parse().unwrap(),
            "#202020".parse().unwrap(),
        ))
        .style(Style::new().set("opacity", "0.8"));

    let mut state = SwitchState::new(&props);
    let element = DarkModeSwitch::render(&props, &mut state);

    assert_eq!(element.values.r, 12.0);
    assert_eq!(element.values.lines_opacity, 0.0);

    let svg = element.to_svg();
    assert!(svg.contains(r##"fill="#101010" stroke="#202020""##));
    assert!(svg.contains(r#"style="transform: rotate(40deg); opacity: 0.8;""#));
}

#[test]
fn test_html_wraps_icon_in_unstyled_button() {
    let (props, _) = recording_props(ThemeMode::System);
    let props = props.size(32.0);
    let mut state = SwitchState::new(&props);
    let element = DarkModeSwitch::render(&props, &mut state);

    let html = element.to_html();
    assert!(html.starts_with("<button type=\"button\" aria-label=\"Switch to dark mode\""));
    assert!(html.contains("background: none; border: none; padding: 0; margin: 0; cursor: pointer;"));
    assert!(html.contains(r#"width="32" height="32""#));
    assert!(html.ends_with("</button>"));

    assert_eq!(
        element.bounds(Point::new(8.0, 8.0)),
        Rect::new(8.0, 8.0, 32.0, 32.0)
    );
}

#[test]
fn test_each_switch_gets_its_own_mask() {
    let (props, _) = recording_props(ThemeMode::Light);
    let a = SwitchState::new(&props);
    let b = SwitchState::new(&props);
    assert_ne!(a.mask_id(), b.mask_id());
}

#[test]
fn test_quoted_style_values_are_escaped_in_markup() {
    let (props, _) = recording_props(ThemeMode::Light);
    let props = props.style(Style::new().set("font-family", r#""Inter", sans & <serif>"#));
    let mut state = SwitchState::new(&props);
    let html = DarkModeSwitch::render(&props, &mut state).to_html();

    assert!(html.contains(
        r#"style="transform: rotate(90deg); font-family: &quot;Inter&quot;, sans &amp; &lt;serif&gt;;">"#
    ));
    assert!(!html.contains(r#""Inter""#));
    assert!(html.contains(r#"aria-label="Switch to system mode""#));
}
