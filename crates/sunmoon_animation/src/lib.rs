//! sunmoon animation
//!
//! Damped spring physics used to move widget geometry toward a target.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with tension, friction, mass
//! - **Clamping**: optionally stop at the target instead of overshooting
//! - **Interruptible**: retargeting keeps the current velocity

pub mod spring;

pub use spring::{Spring, SpringConfig};
