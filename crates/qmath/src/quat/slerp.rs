//! Spherical linear interpolation.

use crate::{Float, Quat};

/// When `sin(θ/2)` between the two slerp operands is smaller than this, [`slerp`] blends them
/// linearly instead, since dividing by `sin(θ/2)` becomes ill-conditioned.
pub const SLERP_LINEAR_THRESHOLD: f64 = 1e-3;

/// The way [`slerp`] computed its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlerpPath {
    /// `|cos(θ/2)| >= 1`: the start quaternion was returned unchanged.
    Coincident,
    /// `|sin(θ/2)| < SLERP_LINEAR_THRESHOLD`: component-wise linear blend.
    Linear,
    /// The trigonometric formula.
    Spherical,
}

/// Spherically interpolates from `a` (at `t = 0`) to `b` (at `t = 1`) along the shortest arc.
///
/// If `a` and `b` lie in opposite hemispheres (their dot product is negative), `a` is negated
/// first, so the interpolation never takes the long way around. Values of `t` outside `[0, 1]`
/// extrapolate.
///
/// Nearly identical operands are blended linearly (see [`SLERP_LINEAR_THRESHOLD`]); that result is
/// *not* renormalized. Operands that compare as identical (`|a · b| >= 1`) return `a`, possibly
/// negated.
///
/// # Examples
///
/// ```
/// # use qmath::*;
/// let a = Quatf::IDENTITY;
/// let b = Quatf::from_axis_angle(90.0, Vec3f::Y);
/// let mid = slerp(a, b, 0.5);
/// assert_approx_eq!(mid, Quatf::from_axis_angle(45.0, Vec3f::Y)).abs(1e-6);
/// ```
pub fn slerp<T: Float>(a: Quat<T>, b: Quat<T>, t: T) -> Quat<T> {
    slerp_with_path(a, b, t).0
}

pub(crate) fn slerp_with_path<T: Float>(mut a: Quat<T>, b: Quat<T>, t: T) -> (Quat<T>, SlerpPath) {
    let mut cos = a.dot(b);
    if cos < T::ZERO {
        a = -a;
        cos = a.dot(b);
    }

    if cos.abs() >= T::ONE {
        log::trace!("slerp: operands coincide (cos = {:?}), returning start", cos);
        return (a, SlerpPath::Coincident);
    }

    let sin = (T::ONE - cos * cos).sqrt();
    if sin.abs() < T::from_f64(SLERP_LINEAR_THRESHOLD) {
        log::trace!("slerp: sin = {:?} below threshold, blending linearly", sin);
        let blend = a.vec * (T::ONE - t) + b.vec * t;
        return (Quat::from_vec(blend), SlerpPath::Linear);
    }

    let half = cos.acos();
    let ka = ((T::ONE - t) * half).sin() / sin;
    let kb = (t * half).sin() / sin;
    (Quat::from_vec(a.vec * ka + b.vec * kb), SlerpPath::Spherical)
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Quat, Quatf, Vec3f};

    use super::*;

    fn path(a: Quatf, b: Quatf, t: f32) -> SlerpPath {
        slerp_with_path(a, b, t).1
    }

    #[test]
    fn coincident_returns_start() {
        let q = Quatf::IDENTITY;
        for t in [0.0, 0.3, 1.0, 2.5] {
            assert_eq!(slerp_with_path(q, q, t), (q, SlerpPath::Coincident));
        }
    }

    #[test]
    fn same_rotation_returns_start() {
        let q = Quatf::from_axis_angle(70.0, vec3(0.0, 0.6, 0.8));
        for t in [0.0, 0.25, 0.5, 1.0] {
            // Depending on rounding, `q · q` lands on 1 (early-out) or just below (linear blend).
            // Either way the result is `q`.
            assert_ne!(path(q, q, t), SlerpPath::Spherical);
            assert_approx_eq!(slerp(q, q, t), q).abs(1e-6);
        }
    }

    #[test]
    fn endpoints() {
        let a = Quatf::from_axis_angle(20.0, Vec3f::X);
        let b = Quatf::from_axis_angle(110.0, vec3(0.0, 0.6, 0.8));
        assert_eq!(path(a, b, 0.0), SlerpPath::Spherical);
        assert_approx_eq!(slerp(a, b, 0.0), a).abs(1e-5);
        assert_approx_eq!(slerp(a, b, 1.0), b).abs(1e-5);
        assert_approx_eq!(a.slerp(b, 1.0), b).abs(1e-5);
    }

    #[test]
    fn spherical_midpoint() {
        let a = Quatf::from_axis_angle(10.0, Vec3f::Z);
        let b = Quatf::from_axis_angle(50.0, Vec3f::Z);
        let mid = slerp(a, b, 0.5);
        assert_eq!(path(a, b, 0.5), SlerpPath::Spherical);
        assert_approx_eq!(mid, Quatf::from_axis_angle(30.0, Vec3f::Z)).abs(1e-6);
        assert_approx_eq!(mid.length(), 1.0).abs(1e-6);
    }

    #[test]
    fn constant_angular_velocity() {
        let a = Quatf::IDENTITY;
        let b = Quatf::from_axis_angle(120.0, Vec3f::Y);
        for (t, degrees) in [(0.25, 30.0), (0.5, 60.0), (0.75, 90.0)] {
            let expected = Quatf::from_axis_angle(degrees, Vec3f::Y);
            assert_approx_eq!(slerp(a, b, t), expected).abs(1e-5);
        }
    }

    #[test]
    fn extrapolates() {
        let a = Quatf::IDENTITY;
        let b = Quatf::from_axis_angle(40.0, Vec3f::X);
        let q = slerp(a, b, 1.5);
        assert_approx_eq!(q, Quatf::from_axis_angle(60.0, Vec3f::X)).abs(1e-5);
    }

    #[test]
    fn takes_shortest_path() {
        let a = Quatf::from_axis_angle(30.0, Vec3f::Y);
        // Same rotation as 60 degrees, but in the opposite hemisphere.
        let b = -Quatf::from_axis_angle(60.0, Vec3f::Y);
        assert!(a.dot(b) < 0.0);

        assert_eq!(path(a, b, 0.5), SlerpPath::Spherical);
        assert_approx_eq!(slerp(a, b, 0.0), -a).abs(1e-5);
        assert_approx_eq!(slerp(a, b, 1.0), b).abs(1e-5);
        assert_approx_eq!(slerp(a, b, 0.5), -Quatf::from_axis_angle(45.0, Vec3f::Y)).abs(1e-5);
    }

    #[test]
    fn flipped_coincident_returns_negated_start() {
        let a = Quatf::IDENTITY;
        let b = -Quatf::IDENTITY;
        let (q, path) = slerp_with_path(a, b, 0.5);
        assert_eq!(path, SlerpPath::Coincident);
        assert_eq!(q, b);
        // The caller's value is untouched.
        assert_eq!(a, Quat::IDENTITY);
    }

    #[test]
    fn nearly_coincident_blends_linearly() {
        let a = Quatf::IDENTITY;
        let b = Quatf::from_axis_angle(0.1, Vec3f::Y);
        let t = 0.5;

        let (q, path) = slerp_with_path(a, b, t);
        assert_eq!(path, SlerpPath::Linear);
        let blend = Quat::from_vec(a.into_vec() * (1.0 - t) + b.into_vec() * t);
        assert_eq!(q, blend);
        assert_approx_eq!(q, Quatf::from_axis_angle(0.05, Vec3f::Y)).abs(1e-6);
    }

    #[test]
    fn half_turn_against_identity() {
        // 180 and 0 degrees about the same axis are orthogonal in quaternion space (`cos ≈ 0`,
        // `sin ≈ 1`), so this uses the trigonometric formula. The halfway point is a quarter turn
        // about the same axis, in whichever direction the sign of the rounded dot product picks.
        let a = Quatf::from_axis_angle(180.0, Vec3f::Y);
        let b = Quatf::from_axis_angle(0.0, Vec3f::Y);
        assert_approx_eq!(a.dot(b), 0.0).abs(1e-6);

        let (q, path) = slerp_with_path(a, b, 0.5);
        assert_eq!(path, SlerpPath::Spherical);
        let half = std::f32::consts::FRAC_1_SQRT_2;
        assert_approx_eq!(q.w, half).abs(1e-5);
        assert_approx_eq!(q.y.abs(), half).abs(1e-5);
        assert_approx_eq!(q.length(), 1.0).abs(1e-5);
    }
}
