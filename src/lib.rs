//! Deterministic fixed-point 2D vectors for lockstep simulation.
//!
//! [`fixed_math`] is the deterministic core. [`interop`] converts to and from bevy's
//! float vectors at the rendering/input boundary. [`replay`] and [`config`] back the
//! `lockstep_vec2` binary, which replays operation scenarios and prints a digest peers
//! can compare.

pub mod config;
pub mod fixed_math;
pub mod interop;
pub mod replay;

pub use fixed_math::{FixedNum, FixedVec2, Scalar, Vector2};
