//! Boundary adapters between fixed-point vectors and bevy's float vectors.
//!
//! Only rendering and input code should call these. Nothing in `fixed_math` depends on
//! this module, so the deterministic core never sees a float.

use bevy::math::{Vec2, Vec3};

use crate::fixed_math::{Scalar, Vector2};

/// Truncates each component of `v` into fixed-point.
pub fn from_vec2<S: Scalar>(v: Vec2) -> Vector2<S> {
    Vector2::new(S::from_f32(v.x), S::from_f32(v.y))
}

/// Like [`from_vec2`], dropping `z`.
pub fn from_vec3<S: Scalar>(v: Vec3) -> Vector2<S> {
    Vector2::new(S::from_f32(v.x), S::from_f32(v.y))
}

pub fn to_vec2<S: Scalar>(v: Vector2<S>) -> Vec2 {
    Vec2::new(v.x.to_f32(), v.y.to_f32())
}

/// Widens to 3D on the `z = 0` plane.
pub fn to_vec3<S: Scalar>(v: Vector2<S>) -> Vec3 {
    Vec3::new(v.x.to_f32(), v.y.to_f32(), 0.0)
}

/// Method-call form of the adapters for bevy's vector types.
pub trait FixedVecInterop {
    fn to_fixed<S: Scalar>(self) -> Vector2<S>;
}

impl FixedVecInterop for Vec2 {
    fn to_fixed<S: Scalar>(self) -> Vector2<S> {
        from_vec2(self)
    }
}

impl FixedVecInterop for Vec3 {
    fn to_fixed<S: Scalar>(self) -> Vector2<S> {
        from_vec3(self)
    }
}
