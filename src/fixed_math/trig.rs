//! Integer-only trigonometry for [`FixedNum`].
//!
//! Everything runs on raw bits widened to `i128` at 30 fractional bits, so results
//! depend only on integer arithmetic and are identical on every target. The extra
//! 14 bits of working precision absorb the rounding of the polynomial steps before
//! the result is rounded back to 16 fractional bits.

use super::FixedNum;

/// π/2 rounded to the nearest representable `FixedNum`.
pub const FRAC_PI_2: FixedNum = FixedNum::from_bits(102_944);
/// π rounded to the nearest representable `FixedNum`.
pub const PI: FixedNum = FixedNum::from_bits(205_887);
/// 2π rounded to the nearest representable `FixedNum`.
pub const TAU: FixedNum = FixedNum::from_bits(411_775);

const WORK_FRAC: u32 = 30;
const SHIFT: u32 = WORK_FRAC - FixedNum::FRAC_NBITS;
const ONE: i128 = 1 << WORK_FRAC;

const HALF_PI_W: i128 = 1_686_629_713;
const PI_W: i128 = 3_373_259_426;
const TWO_PI_W: i128 = 6_746_518_852;
const PI_6_W: i128 = 562_209_904;
const TAN_PI_12_W: i128 = 287_708_255;
const INV_SQRT3_W: i128 = 619_925_131;

#[inline]
fn widen(x: FixedNum) -> i128 {
    (x.to_bits() as i128) << SHIFT
}

#[inline]
fn narrow(w: i128) -> FixedNum {
    // Callers only narrow values bounded by π, so the cast cannot truncate.
    FixedNum::from_bits(((w + (1 << (SHIFT - 1))) >> SHIFT) as i64)
}

#[inline]
fn mul_w(a: i128, b: i128) -> i128 {
    (a * b) >> WORK_FRAC
}

/// Sine of a working-precision angle of any magnitude.
fn sin_w(angle: i128) -> i128 {
    let mut r = angle.rem_euclid(TWO_PI_W);
    if r > PI_W {
        r -= TWO_PI_W;
    }
    // Fold into [-π/2, π/2] where the series converges fastest.
    if r > HALF_PI_W {
        r = PI_W - r;
    } else if r < -HALF_PI_W {
        r = -PI_W - r;
    }

    // x(1 - x²/6(1 - x²/20(1 - x²/42(1 - x²/72(1 - x²/110)))))
    let r2 = mul_w(r, r);
    let mut acc = ONE;
    for divisor in [110, 72, 42, 20, 6] {
        acc = ONE - mul_w(r2, acc) / divisor;
    }
    mul_w(r, acc)
}

/// Arctangent of a working-precision ratio in `[0, 1]`.
fn atan_unit_w(z: i128) -> i128 {
    // atan(z) = π/6 + atan((z - 1/√3) / (1 + z/√3)) keeps the series argument below tan(π/12).
    let (base, t) = if z > TAN_PI_12_W {
        let t = ((z - INV_SQRT3_W) << WORK_FRAC) / (ONE + mul_w(z, INV_SQRT3_W));
        (PI_6_W, t)
    } else {
        (0, z)
    };

    let t2 = mul_w(t, t);
    let mut acc = ONE / 11;
    for divisor in [9, 7, 5, 3] {
        acc = ONE / divisor - mul_w(t2, acc);
    }
    acc = ONE - mul_w(t2, acc);
    base + mul_w(t, acc)
}

pub fn sin(angle: FixedNum) -> FixedNum {
    narrow(sin_w(widen(angle)))
}

pub fn cos(angle: FixedNum) -> FixedNum {
    narrow(sin_w(widen(angle) + HALF_PI_W))
}

/// Four-quadrant arctangent of `y / x`. `atan2(0, 0)` is zero.
pub fn atan2(y: FixedNum, x: FixedNum) -> FixedNum {
    let yb = y.to_bits() as i128;
    let xb = x.to_bits() as i128;
    if xb == 0 && yb == 0 {
        return FixedNum::ZERO;
    }

    let ax = xb.abs();
    let ay = yb.abs();
    let mut angle = if ay <= ax {
        atan_unit_w((ay << WORK_FRAC) / ax)
    } else {
        HALF_PI_W - atan_unit_w((ax << WORK_FRAC) / ay)
    };

    if xb < 0 {
        angle = PI_W - angle;
    }
    if yb < 0 {
        angle = -angle;
    }
    narrow(angle)
}
