use std::ops::{Index, IndexMut, Mul, MulAssign, Neg};

use crate::{approx::ApproxEq, Float, Quat};

/// Component access in `(w, x, y, z)` order.
impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vec[index]
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps_tolerance)
    }
}

/// Negates every component.
///
/// `-q` represents the same rotation as `q`.
impl<T: Neg> Neg for Quat<T> {
    type Output = Quat<T::Output>;

    fn neg(self) -> Self::Output {
        Quat {
            vec: self.vec.map(T::neg),
        }
    }
}

/// Hamilton product, normalized.
///
/// `a * b` is the rotation that first applies `b`, then `a`. The product is associative, but not
/// commutative.
///
/// # Examples
///
/// ```
/// # use qmath::*;
/// let eighth = Quatf::from_axis_angle(45.0, Vec3f::Y);
/// let quarter = Quatf::from_axis_angle(90.0, Vec3f::Y);
/// assert_approx_eq!(eighth * eighth, quarter).abs(1e-4);
/// ```
impl<T: Float> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [w1, x1, y1, z1] = self.vec.into_array();
        let [w2, x2, y2, z2] = rhs.vec.into_array();
        Quat::from_components(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
        .normalized()
    }
}

impl<T: Float> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
