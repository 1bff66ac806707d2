//! Deterministic fixed-point mathematics library.
//!
//! This module provides deterministic math types and operations using fixed-point
//! arithmetic to ensure identical behavior across different platforms and architectures.
//! This is critical for multiplayer lockstep networking where all clients must simulate
//! identically.
//!
//! Every arithmetic path wraps on overflow instead of panicking or saturating, and every
//! division by zero has one defined result (see [`Scalar::wrapping_div`]). Nothing in
//! here ever touches a floating-point value except the explicit `to_f32`/`from_f32`
//! boundary conversions.

use fixed::types::I48F16;

pub use scalar::Scalar;
pub use vec2::{FixedVec2, Vector2};

mod geometry;
mod scalar;
pub mod trig;
mod vec2;

#[cfg(test)]
mod tests;

/// Fixed-point number type used throughout the simulation.
///
/// Uses I48F16 format: 48 bits for the integer part, 16 bits for the fractional part.
/// This provides a range of approximately ±140 trillion with a precision of ~0.000015.
pub type FixedNum = I48F16;
