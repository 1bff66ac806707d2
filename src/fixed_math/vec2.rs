use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use fixed::traits::ToFixed;
use serde::{Deserialize, Serialize};

use super::{FixedNum, Scalar};

/// Two-component vector over a deterministic [`Scalar`].
///
/// Equality and hashing are exact and componentwise. The `<`/`>` operators compare the
/// sum of the components of the difference (see [`Vector2::component_sum`]), which is a
/// weak order: `(2, 0)` and `(0, 2)` are neither equal nor ordered. Sort with
/// [`Vector2::compare_component_sum`] when a total order over that key is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2<S> {
    pub x: S,
    pub y: S,
}

/// The simulation's vector type.
pub type FixedVec2 = Vector2<FixedNum>;

impl<S: Scalar> Vector2<S> {
    pub const ZERO: Self = Self { x: S::ZERO, y: S::ZERO };
    pub const IDENTITY: Self = Self { x: S::ONE, y: S::ZERO };

    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// Both components set to `value`.
    #[inline]
    pub const fn splat(value: S) -> Self {
        Self { x: value, y: value }
    }

    /// Broadcast equality: true when both components equal `value`.
    #[inline]
    pub fn is_splat(self, value: S) -> bool {
        self.x == value && self.y == value
    }

    /// Wrapping `x + y`, the key used by the `<`/`>` operators.
    #[inline]
    pub fn component_sum(self) -> S {
        self.x.wrapping_add(self.y)
    }

    /// Orders two vectors by [`component_sum`](Self::component_sum) alone.
    ///
    /// Distinct vectors with the same sum compare `Equal` here, so this is only
    /// suitable as a sort key.
    pub fn compare_component_sum(&self, other: &Self) -> Ordering {
        self.component_sum()
            .partial_cmp(&other.component_sum())
            .unwrap_or(Ordering::Equal)
    }

    #[inline]
    pub fn scale(self, factor: S) -> Self {
        Self {
            x: self.x.wrapping_mul(factor),
            y: self.y.wrapping_mul(factor),
        }
    }

    #[inline]
    pub fn div_scalar(self, divisor: S) -> Self {
        Self {
            x: self.x.wrapping_div(divisor),
            y: self.y.wrapping_div(divisor),
        }
    }

    #[inline]
    pub fn mul_elem(self, rhs: Self) -> Self {
        Self {
            x: self.x.wrapping_mul(rhs.x),
            y: self.y.wrapping_mul(rhs.y),
        }
    }

    /// Componentwise division. A zero divisor component follows the scalar's
    /// division-by-zero rule.
    #[inline]
    pub fn div_elem(self, rhs: Self) -> Self {
        Self {
            x: self.x.wrapping_div(rhs.x),
            y: self.y.wrapping_div(rhs.y),
        }
    }

    /// True when `(self.x - other.x) + (self.y - other.y) > 0`.
    #[inline]
    fn sum_exceeds(self, other: Self) -> bool {
        let dx = self.x.wrapping_sub(other.x);
        let dy = self.y.wrapping_sub(other.y);
        dx.wrapping_add(dy) > S::ZERO
    }
}

impl FixedVec2 {
    /// Builds a vector from anything `fixed` can convert, wrapping out-of-range values.
    ///
    /// Panics on a NaN float, like `fixed`'s own conversions. Float input from the
    /// outside world belongs in [`crate::interop`].
    pub fn from_num<A: ToFixed, B: ToFixed>(x: A, y: B) -> Self {
        Self {
            x: FixedNum::wrapping_from_num(x),
            y: FixedNum::wrapping_from_num(y),
        }
    }
}

impl<S: Scalar> Default for Vector2<S> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<S: Scalar> fmt::Display for Vector2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialEq<FixedNum> for FixedVec2 {
    fn eq(&self, other: &FixedNum) -> bool {
        self.is_splat(*other)
    }
}

impl<S: Scalar> PartialOrd for Vector2<S> {
    /// `Greater`/`Less` follow the component-sum rule; `None` when neither holds and
    /// the vectors differ.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.sum_exceeds(*other) {
            Some(Ordering::Greater)
        } else if other.sum_exceeds(*self) {
            Some(Ordering::Less)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

impl<S: Scalar> Add for Vector2<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x.wrapping_add(rhs.x), y: self.y.wrapping_add(rhs.y) }
    }
}

impl<S: Scalar> Sub for Vector2<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x.wrapping_sub(rhs.x), y: self.y.wrapping_sub(rhs.y) }
    }
}

impl<S: Scalar> Mul for Vector2<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_elem(rhs)
    }
}

impl<S: Scalar> Div for Vector2<S> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        self.div_elem(rhs)
    }
}

impl<S: Scalar> Neg for Vector2<S> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { x: self.x.wrapping_neg(), y: self.y.wrapping_neg() }
    }
}

/// Implements `Vector2<$scalar> * $scalar` and `Vector2<$scalar> / $scalar`.
///
/// These cannot be blanket impls next to the vector-by-vector operators, so each
/// concrete scalar opts in with this macro.
#[macro_export]
macro_rules! impl_vector_scalar_ops {
    ($scalar:ty) => {
        impl ::std::ops::Mul<$scalar> for $crate::fixed_math::Vector2<$scalar> {
            type Output = Self;
            fn mul(self, rhs: $scalar) -> Self::Output {
                self.scale(rhs)
            }
        }

        impl ::std::ops::Div<$scalar> for $crate::fixed_math::Vector2<$scalar> {
            type Output = Self;
            fn div(self, rhs: $scalar) -> Self::Output {
                self.div_scalar(rhs)
            }
        }
    };
}

impl_vector_scalar_ops!(FixedNum);
