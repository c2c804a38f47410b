//! Integration tests for spring physics
//!
//! These tests verify that:
//! - Springs converge on their target and report settling
//! - Under-damped springs overshoot unless clamped
//! - Retargeting mid-flight keeps momentum

use sunmoon_animation::{Spring, SpringConfig};

const FRAME: f32 = 1.0 / 60.0;

fn run(spring: &mut Spring, frames: usize) -> Vec<f32> {
    (0..frames)
        .map(|_| {
            spring.step(FRAME);
            spring.value()
        })
        .collect()
}

#[test]
fn test_stiff_spring_settles_on_target() {
    let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
    spring.set_target(100.0);
    assert!(!spring.is_settled());

    run(&mut spring, 120);

    assert!(spring.is_settled());
    // Settling snaps exactly onto the target
    assert_eq!(spring.value(), 100.0);
    assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn test_wobbly_spring_overshoots() {
    let mut spring = Spring::new(SpringConfig::wobbly(), 0.0);
    spring.set_target(100.0);

    let peak = run(&mut spring, 60).into_iter().fold(f32::MIN, f32::max);
    assert!(peak > 105.0, "expected overshoot, peak was {peak}");
}

#[test]
fn test_clamped_spring_never_passes_target() {
    let mut spring = Spring::new(SpringConfig::wobbly().clamped(), 0.0);
    spring.set_target(100.0);

    let values = run(&mut spring, 60);
    assert!(values.iter().all(|v| *v <= 100.0));
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 100.0);
}

#[test]
fn test_clamped_spring_moving_downward() {
    let mut spring = Spring::new(SpringConfig::wobbly().clamped(), 9.0);
    spring.set_target(5.0);

    let values = run(&mut spring, 60);
    assert!(values.iter().all(|v| *v >= 5.0));
    assert_eq!(spring.value(), 5.0);
}

#[test]
fn test_heavy_clamped_spring_reaches_target_within_a_second() {
    // mass 4 / tension 250 / friction 35, the toggle's built-in tuning
    let mut spring = Spring::new(SpringConfig::new(4.0, 250.0, 35.0).clamped(), 0.0);
    spring.set_target(90.0);

    run(&mut spring, 60);

    assert!(spring.is_settled());
    assert_eq!(spring.value(), 90.0);
}

#[test]
fn test_retarget_keeps_velocity() {
    let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
    spring.set_target(100.0);
    run(&mut spring, 10);

    let velocity = spring.velocity();
    assert!(velocity > 0.0);

    spring.set_target(0.0);
    assert_eq!(spring.velocity(), velocity);
    assert_eq!(spring.target(), 0.0);

    run(&mut spring, 300);
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 0.0);
}

#[test]
fn test_long_frame_is_substepped() {
    let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
    spring.set_target(1.0);

    // A half-second hitch must not blow up the integration
    spring.step(0.5);
    assert!(spring.value().is_finite());
    assert!((spring.value() - 1.0).abs() < 0.1);
}

#[test]
fn test_huge_and_infinite_frames_terminate() {
    for dt in [1e6, f32::INFINITY] {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1.0);

        // Unclamped, so only the frame cap can end the step
        spring.step(dt);

        assert!(spring.value().is_finite(), "dt={dt}");
        assert!(spring.is_settled(), "dt={dt}");
        assert_eq!(spring.value(), 1.0);
    }
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: SpringConfig =
        serde_json::from_str(r#"{"mass": 4, "tension": 250, "friction": 35}"#).unwrap();
    assert_eq!(config, SpringConfig::new(4.0, 250.0, 35.0));
    assert!(!config.clamp);
    assert_eq!(config.precision, 0.01);
}
