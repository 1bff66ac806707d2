use super::*;
use std::cmp::Ordering;

fn num(value: f64) -> FixedNum {
    FixedNum::from_num(value)
}

fn vec(x: f64, y: f64) -> FixedVec2 {
    FixedVec2::from_num(x, y)
}

fn assert_close(actual: FixedNum, expected: FixedNum, tolerance: FixedNum, what: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} but got {} (diff {})",
        what,
        expected,
        actual,
        diff
    );
}

/// Vectors with components in roughly ±1000, drawn from raw bits.
fn random_vec(rng: &mut fastrand::Rng) -> FixedVec2 {
    let range = -(1000i64 << 16)..(1000i64 << 16);
    FixedVec2::new(
        FixedNum::from_bits(rng.i64(range.clone())),
        FixedNum::from_bits(rng.i64(range)),
    )
}

#[test]
fn test_constants() {
    assert_eq!(FixedVec2::ZERO, vec(0.0, 0.0));
    assert_eq!(FixedVec2::IDENTITY, vec(1.0, 0.0));
    assert_eq!(FixedVec2::default(), FixedVec2::ZERO);
}

#[test]
fn test_dot_and_add_are_commutative() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..500 {
        let a = random_vec(&mut rng);
        let b = random_vec(&mut rng);
        assert_eq!(a.dot(b), b.dot(a), "dot should commute for {} and {}", a, b);
        assert_eq!(a + b, b + a, "add should commute for {} and {}", a, b);
        assert_eq!(a.cross(a), FixedNum::ZERO, "cross with self should be zero for {}", a);
    }
}

#[test]
fn test_normalize_zero_stays_zero() {
    assert_eq!(FixedVec2::ZERO.normalize(), FixedVec2::ZERO);

    let mut v = FixedVec2::ZERO;
    v.normalize_in_place();
    assert_eq!(v, FixedVec2::ZERO, "in-place normalize must leave the zero vector alone");
}

#[test]
fn test_normalize_yields_unit_length() {
    let mut rng = fastrand::Rng::with_seed(42);
    let tolerance = num(1.0 / 1024.0);
    for _ in 0..500 {
        let v = random_vec(&mut rng);
        if v.magnitude() < FixedNum::ONE {
            continue;
        }
        assert_close(v.normalize().magnitude(), FixedNum::ONE, tolerance, "normalized magnitude");

        let mut in_place = v;
        in_place.normalize_in_place();
        assert_eq!(in_place, v.normalize(), "in-place and immutable normalize should agree");
    }
}

#[test]
fn test_quarter_turns_compose_to_negation() {
    let mut rng = fastrand::Rng::with_seed(9);
    for _ in 0..500 {
        let v = random_vec(&mut rng);
        assert_eq!(v.rotate_left_90().rotate_left_90(), -v);
        assert_eq!(v.rotate_right_90().rotate_right_90(), -v);
        assert_eq!(v.rotate_left_90().rotate_right_90(), v);
    }

    assert_eq!(vec(1.0, 2.0).rotate_left_90(), vec(-2.0, 1.0));
    assert_eq!(vec(1.0, 2.0).rotate_right_90(), vec(2.0, -1.0));
}

#[test]
fn test_distance_is_symmetric() {
    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..500 {
        let a = random_vec(&mut rng);
        let b = random_vec(&mut rng);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance_squared(b), (a - b).magnitude_squared());
    }
    assert_eq!(vec(1.0, 1.0).distance(vec(4.0, 5.0)), num(5.0));
}

#[test]
fn test_truncate_within_bound_is_identity() {
    let v = vec(3.0, 4.0);
    assert_eq!(v.truncate(num(5.0)), v, "length equal to the bound is not clamped");
    assert_eq!(v.truncate(num(10.0)), v);
    assert_eq!(FixedVec2::ZERO.truncate(FixedNum::ZERO), FixedVec2::ZERO);
}

#[test]
fn test_truncate_clamps_length_and_keeps_direction() {
    let tolerance = num(1.0 / 256.0);
    let mut rng = fastrand::Rng::with_seed(77);
    for _ in 0..200 {
        let v = random_vec(&mut rng);
        if v.magnitude() < num(10.0) {
            continue;
        }
        let max = num(2.5);
        let t = v.truncate(max);
        assert_close(t.magnitude(), max, tolerance, "truncated magnitude");
        assert!(t.dot(v) > FixedNum::ZERO, "truncate must not flip direction of {}", v);
        assert_close(t.normalize().cross(v.normalize()), FixedNum::ZERO, tolerance, "direction");
    }
}

#[test]
fn test_three_four_five() {
    let v = vec(3.0, 4.0);
    assert_eq!(v.magnitude_squared(), num(25.0));
    assert_eq!(v.magnitude(), num(5.0));
    assert_eq!(v.length(), v.magnitude());
    assert_eq!(v.length_squared(), v.magnitude_squared());

    let n = v.normalize();
    let tolerance = FixedNum::DELTA;
    assert_close(n.x, num(0.6), tolerance, "normalized x");
    assert_close(n.y, num(0.8), tolerance, "normalized y");
}

#[test]
fn test_orthogonal_unit_vectors() {
    let a = vec(1.0, 0.0);
    let b = vec(0.0, 1.0);
    assert_eq!(a.dot(b), FixedNum::ZERO);
    assert_eq!(a.cross(b), FixedNum::ONE);
    assert_eq!(b.cross(a), -FixedNum::ONE);
    assert_eq!(a.angle_between(b), trig::FRAC_PI_2);
    assert_eq!(b.angle_between(a), -trig::FRAC_PI_2);
}

#[test]
fn test_fast_in_range_is_axis_aligned() {
    let dist = num(1.5);
    assert!(FixedVec2::ZERO.fast_in_range(vec(1.0, 1.0), dist));
    assert!(!FixedVec2::ZERO.fast_in_range(vec(1.6, 0.0), dist));
    // Outside the circle of radius 1.5 but inside the box.
    assert!(FixedVec2::ZERO.fast_in_range(vec(1.4, 1.4), dist));
    // The bound itself is excluded.
    assert!(!FixedVec2::ZERO.fast_in_range(vec(1.5, 0.0), dist));
}

#[test]
fn test_ordering_is_weak() {
    let a = vec(2.0, 0.0);
    let b = vec(0.0, 2.0);
    assert!(a != b);
    assert!(!(a > b));
    assert!(!(b > a));
    assert!(!(a < b));
    assert_eq!(a.partial_cmp(&b), None);
    assert_eq!(a.compare_component_sum(&b), Ordering::Equal);

    let c = vec(1.0, 2.0);
    assert!(c > a, "sum 3 should exceed sum 2");
    assert!(a < c);
    assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
}

#[test]
fn test_sort_by_component_sum() {
    let mut points = vec![vec(5.0, -1.0), vec(0.0, 0.0), vec(-3.0, 1.0), vec(1.0, 1.0)];
    points.sort_by(FixedVec2::compare_component_sum);
    let sums: Vec<FixedNum> = points.iter().map(|p| p.component_sum()).collect();
    assert_eq!(sums, vec![num(-2.0), num(0.0), num(2.0), num(4.0)]);
}

#[test]
fn test_broadcast_equality() {
    assert!(FixedVec2::splat(num(2.0)) == num(2.0));
    assert!(vec(2.0, 3.0) != num(2.0));
    assert!(FixedVec2::ZERO.is_splat(FixedNum::ZERO));
    assert!(!FixedVec2::IDENTITY.is_splat(FixedNum::ONE));
}

#[test]
fn test_arithmetic_operators() {
    let a = vec(6.0, -4.0);
    let b = vec(2.0, 8.0);
    assert_eq!(a + b, vec(8.0, 4.0));
    assert_eq!(a - b, vec(4.0, -12.0));
    assert_eq!(a * b, vec(12.0, -32.0));
    assert_eq!(a / b, vec(3.0, -0.5));
    assert_eq!(a * num(0.5), vec(3.0, -2.0));
    assert_eq!(a / num(2.0), vec(3.0, -2.0));
    assert_eq!(-a, vec(-6.0, 4.0));
    assert_eq!(a.abs(), vec(6.0, 4.0));
}

#[test]
fn test_overflow_wraps() {
    let edge = FixedVec2::new(FixedNum::MAX, FixedNum::MIN);
    let step = FixedVec2::new(FixedNum::DELTA, FixedNum::DELTA);
    assert_eq!(edge + step, FixedVec2::new(FixedNum::MIN, FixedNum::MIN + FixedNum::DELTA));
    assert_eq!(FixedVec2::new(FixedNum::MIN, FixedNum::ZERO) - step, FixedVec2::new(FixedNum::MAX, -FixedNum::DELTA));
    assert_eq!(-FixedVec2::new(FixedNum::MIN, FixedNum::ZERO), FixedVec2::new(FixedNum::MIN, FixedNum::ZERO));

    // Squaring a huge component wraps instead of panicking.
    let huge = FixedVec2::new(FixedNum::MAX, FixedNum::MAX);
    let _ = huge.magnitude_squared();
    let _ = huge.normalize();
}

#[test]
fn test_division_by_zero_is_defined() {
    let v = vec(3.0, -3.0);
    assert_eq!(v / FixedNum::ZERO, FixedVec2::new(FixedNum::MAX, FixedNum::MIN));
    assert_eq!(FixedVec2::ZERO / FixedNum::ZERO, FixedVec2::ZERO);
    assert_eq!(v / vec(0.0, 1.0), FixedVec2::new(FixedNum::MAX, num(-3.0)));
}

#[test]
fn test_project() {
    assert_eq!(vec(3.0, 4.0).project(vec(1.0, 0.0)), vec(3.0, 0.0));
    assert_eq!(vec(3.0, 4.0).project(vec(0.0, 2.0)), vec(0.0, 4.0));
    assert_eq!(vec(3.0, 4.0).project(FixedVec2::ZERO), FixedVec2::ZERO);
}

#[test]
fn test_rotate() {
    let tolerance = num(1.0 / 4096.0);
    let r = FixedVec2::IDENTITY.rotate(trig::FRAC_PI_2);
    assert_close(r.x, FixedNum::ZERO, tolerance, "rotated x");
    assert_close(r.y, FixedNum::ONE, tolerance, "rotated y");

    let r = vec(2.0, 0.0).rotate(trig::PI);
    assert_close(r.x, num(-2.0), tolerance, "half turn x");
    assert_close(r.y, FixedNum::ZERO, tolerance, "half turn y");

    assert_eq!(vec(3.0, 4.0).rotate(FixedNum::ZERO), vec(3.0, 4.0));
}

#[test]
fn test_trig_values() {
    let tolerance = num(2.0 / 65536.0);
    assert_eq!(FixedNum::ZERO.sin(), FixedNum::ZERO);
    assert_eq!(Scalar::cos(FixedNum::ZERO), FixedNum::ONE);
    assert_eq!(Scalar::sin(trig::FRAC_PI_2), FixedNum::ONE);
    assert_eq!(Scalar::cos(trig::FRAC_PI_2), FixedNum::ZERO);
    assert_close(Scalar::cos(trig::PI), -FixedNum::ONE, tolerance, "cos(pi)");
    assert_close(Scalar::sin(num(0.5)), num(0.479_425_538_6), tolerance, "sin(0.5)");
    assert_close(Scalar::cos(num(-2.0)), num(-0.416_146_836_5), tolerance, "cos(-2)");

    // Large angles reduce to the same value.
    let base = num(0.75);
    let wound = base + num(200.0 * std::f64::consts::PI);
    assert_close(Scalar::sin(wound), Scalar::sin(base), num(1.0 / 512.0), "reduced sin");
}

#[test]
fn test_atan2_quadrants() {
    let tolerance = num(2.0 / 65536.0);
    let one = FixedNum::ONE;
    assert_eq!(Scalar::atan2(FixedNum::ZERO, FixedNum::ZERO), FixedNum::ZERO);
    assert_eq!(Scalar::atan2(FixedNum::ZERO, one), FixedNum::ZERO);
    assert_eq!(Scalar::atan2(FixedNum::ZERO, -one), trig::PI);
    assert_close(Scalar::atan2(one, one), num(std::f64::consts::FRAC_PI_4), tolerance, "q1");
    assert_close(Scalar::atan2(one, -one), num(3.0 * std::f64::consts::FRAC_PI_4), tolerance, "q2");
    assert_close(Scalar::atan2(-one, -one), num(-3.0 * std::f64::consts::FRAC_PI_4), tolerance, "q3");
    assert_close(Scalar::atan2(-one, one), num(-std::f64::consts::FRAC_PI_4), tolerance, "q4");
    assert_close(Scalar::atan2(num(1.0), num(3.0)), num(0.321_750_554_4), tolerance, "shallow");
}

#[test]
fn test_scalar_edge_cases() {
    assert_eq!(Scalar::sqrt(num(-4.0)), FixedNum::ZERO);
    assert_eq!(Scalar::sqrt(num(16.0)), num(4.0));
    assert_eq!(Scalar::abs(FixedNum::MIN), FixedNum::MIN);
    assert_eq!(<FixedNum as Scalar>::from_f32(1.5), num(1.5));
    assert_eq!(<FixedNum as Scalar>::from_f32(f32::NAN), FixedNum::ZERO);
    assert_eq!(<FixedNum as Scalar>::from_f32(-0.000_01), FixedNum::ZERO);
    assert_eq!(<FixedNum as Scalar>::from_f32(f32::INFINITY), FixedNum::MAX);
    assert_eq!(Scalar::to_f32(num(-2.25)), -2.25);
}

#[test]
fn test_display() {
    assert_eq!(vec(3.0, -0.5).to_string(), "(3, -0.5)");
}

#[test]
fn test_serde_preserves_bits() {
    let v = FixedVec2::new(FixedNum::from_bits(123_456_789), FixedNum::MIN);
    let json = serde_json::to_string(&v).expect("serialize");
    let back: FixedVec2 = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, v);
}
