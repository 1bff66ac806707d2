use std::fmt;

use super::{trig, FixedNum};

/// Scalar contract the vector types are built on.
///
/// Implementations must be bit-exact across platforms. The arithmetic methods are
/// named `wrapping_*` because that is the overflow rule they must follow: results are
/// reduced modulo the representable range, never trapped and never saturated.
/// Angles are radians.
pub trait Scalar:
    Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Division with a defined result for every input, including a zero divisor.
    fn wrapping_div(self, rhs: Self) -> Self;

    fn wrapping_neg(self) -> Self;

    /// Absolute value. The most negative value maps to itself.
    fn abs(self) -> Self;

    /// Square root. Inputs at or below zero yield zero.
    fn sqrt(self) -> Self;

    fn sin(self) -> Self;
    fn cos(self) -> Self;

    /// Angle of the point `(x, self)` measured from the positive x axis, in `[-π, π]`.
    fn atan2(self, x: Self) -> Self;

    /// Lossy conversion for rendering and diagnostics.
    fn to_f32(self) -> f32;

    /// Truncating conversion from a float. NaN maps to zero, out-of-range values saturate.
    fn from_f32(value: f32) -> Self;
}

impl Scalar for FixedNum {
    const ZERO: Self = FixedNum::ZERO;
    const ONE: Self = FixedNum::ONE;

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        FixedNum::wrapping_add(self, rhs)
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        FixedNum::wrapping_sub(self, rhs)
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        FixedNum::wrapping_mul(self, rhs)
    }

    /// `x / 0` is `MAX` for positive `x`, `MIN` for negative `x` and `0` for `0 / 0`.
    #[inline]
    fn wrapping_div(self, rhs: Self) -> Self {
        if rhs == FixedNum::ZERO {
            return if self > FixedNum::ZERO {
                FixedNum::MAX
            } else if self < FixedNum::ZERO {
                FixedNum::MIN
            } else {
                FixedNum::ZERO
            };
        }
        FixedNum::wrapping_div(self, rhs)
    }

    #[inline]
    fn wrapping_neg(self) -> Self {
        FixedNum::wrapping_neg(self)
    }

    #[inline]
    fn abs(self) -> Self {
        FixedNum::wrapping_abs(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        // Negative values only show up after a wrapped multiply.
        if self <= FixedNum::ZERO {
            return FixedNum::ZERO;
        }
        FixedNum::sqrt(self)
    }

    fn sin(self) -> Self {
        trig::sin(self)
    }

    fn cos(self) -> Self {
        trig::cos(self)
    }

    fn atan2(self, x: Self) -> Self {
        trig::atan2(self, x)
    }

    #[inline]
    fn to_f32(self) -> f32 {
        self.to_num::<f32>()
    }

    fn from_f32(value: f32) -> Self {
        let scale = (1u64 << FixedNum::FRAC_NBITS) as f64;
        // `as` saturates and sends NaN to zero.
        FixedNum::from_bits((f64::from(value) * scale).trunc() as i64)
    }
}
