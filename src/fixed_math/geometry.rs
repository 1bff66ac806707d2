use super::{Scalar, Vector2};

impl<S: Scalar> Vector2<S> {
    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x.wrapping_mul(other.x).wrapping_add(self.y.wrapping_mul(other.y))
    }

    /// 2D cross product (z of the 3D cross). Positive when `other` is counter-clockwise
    /// from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> S {
        self.x.wrapping_mul(other.y).wrapping_sub(self.y.wrapping_mul(other.x))
    }

    /// Projection of `self` onto `onto`.
    ///
    /// Projecting onto the zero vector divides by a zero dot product, which the scalar
    /// defines; for `FixedNum` the result is the zero vector again.
    pub fn project(self, onto: Self) -> Self {
        onto.scale(self.dot(onto).wrapping_div(onto.dot(onto)))
    }

    #[inline]
    pub fn magnitude_squared(self) -> S {
        self.dot(self)
    }

    /// Euclidean length. Exactly zero for a zero squared length; `sqrt` is never
    /// evaluated at zero.
    pub fn magnitude(self) -> S {
        let mag_sq = self.magnitude_squared();
        if mag_sq == S::ZERO {
            return S::ZERO;
        }
        mag_sq.sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> S {
        self.magnitude_squared()
    }

    #[inline]
    pub fn length(self) -> S {
        self.magnitude()
    }

    /// Unit vector in the same direction, or `ZERO` for a zero-length vector.
    pub fn normalize(self) -> Self {
        let len = self.magnitude();
        if len == S::ZERO {
            Self::ZERO
        } else {
            self.div_scalar(len)
        }
    }

    /// In-place [`normalize`](Self::normalize). A zero-length vector is left untouched.
    pub fn normalize_in_place(&mut self) {
        let len = self.magnitude();
        if len != S::ZERO {
            self.x = self.x.wrapping_div(len);
            self.y = self.y.wrapping_div(len);
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    pub fn distance(self, other: Self) -> S {
        (self - other).magnitude()
    }

    pub fn distance_squared(self, other: Self) -> S {
        (self - other).magnitude_squared()
    }

    /// Quarter turn counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn rotate_left_90(self) -> Self {
        Self::new(self.y.wrapping_neg(), self.x)
    }

    /// Quarter turn clockwise: `(y, -x)`.
    #[inline]
    pub fn rotate_right_90(self) -> Self {
        Self::new(self.y, self.x.wrapping_neg())
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotate(self, angle: S) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self::new(
            self.x.wrapping_mul(cos).wrapping_sub(self.y.wrapping_mul(sin)),
            self.x.wrapping_mul(sin).wrapping_add(self.y.wrapping_mul(cos)),
        )
    }

    /// Signed angle from `self` to `other` in `[-π, π]`.
    pub fn angle_between(self, other: Self) -> S {
        self.cross(other).atan2(self.dot(other))
    }

    /// Cheap proximity test against an axis-aligned box of half-width `dist`.
    ///
    /// Both axis differences must be strictly below `dist`. This accepts points up to
    /// `dist·√2` away along a diagonal, so it is not a circular range check.
    pub fn fast_in_range(self, other: Self, dist: S) -> bool {
        self.y.wrapping_sub(other.y).abs() < dist && self.x.wrapping_sub(other.x).abs() < dist
    }

    /// Clamps the length to `max_length`, keeping the direction. Vectors already within
    /// the bound are returned unchanged.
    pub fn truncate(self, max_length: S) -> Self {
        if self.magnitude_squared() > max_length.wrapping_mul(max_length) {
            self.normalize().scale(max_length)
        } else {
            self
        }
    }
}
