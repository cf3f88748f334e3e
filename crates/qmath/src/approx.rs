//! Approximate equality for floats and everything built out of them.
//!
//! Almost nothing in this crate can be compared with `==` after a few arithmetic operations. The
//! [`ApproxEq`] trait and the [`assert_approx_eq!`][crate::assert_approx_eq] macro are what the
//! tests (and hopefully downstream code) use instead.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types ([`Vector`][crate::Vector], [`Matrix`][crate::Matrix], [`Quat`][crate::Quat])
/// compare equal if every pair of elements does.
///
/// For background on the different comparison methods, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the tolerance for absolute and relative comparisons (the underlying float type).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns `true` if `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if at most `ulps_tolerance` representable values lie between `self` and
    /// `other` ([*units in the last place*]).
    ///
    /// `NaN` never compares equal. `-0.0` and `+0.0` always compare equal, other values of
    /// differing sign never do.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used by [`assert_approx_eq!`][crate::assert_approx_eq] when no comparison
/// method is configured explicitly.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select the comparison(s) to perform. If several are
/// selected, the values are equal if *any* of them says so.
///
/// Without any explicit selection, an absolute comparison with
/// [`DEFAULT_ABS_TOLERANCE`][DefaultTolerances::DEFAULT_ABS_TOLERANCE] and a relative comparison
/// with [`DEFAULT_REL_TOLERANCE`][DefaultTolerances::DEFAULT_REL_TOLERANCE] are performed.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compare the *absolute difference* of the values against `abs`.
    ///
    /// Use this for values close to zero, or values that may have opposite signs. Most
    /// quaternion and rotation matrix tests use this with a tolerance around `1e-5`.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compare the *relative difference* of the values against `rel`.
    ///
    /// Not useful near zero: any non-zero value only compares equal to `0.0` with `rel >= 1.0`.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compare the values by counting the representable floats between them.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&mut self) -> bool {
        let abs = self
            .abs
            .take()
            .is_some_and(|abs| T::abs_diff_eq(self.left, self.right, abs));
        let rel = self
            .rel
            .take()
            .is_some_and(|rel| T::rel_diff_eq(self.left, self.right, rel));
        let ulps = self
            .ulps
            .take()
            .is_some_and(|ulps| T::ulps_diff_eq(self.left, self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on destructors, so the caller location is captured in `new`.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // The panic location points into `drop_in_place`; the real one is part of the message.
    match args {
        Some(args) => panic!(
            "assertion `left {op} right` failed at {location}: {args}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can be used to pick the comparison
/// method and tolerance.
///
/// # Examples
///
/// ```
/// # use qmath::*;
/// let sum = (0..4).fold(0.0f32, |acc, _| acc + 0.25);
/// assert_approx_eq!(sum, 1.0);
///
/// assert_approx_eq!(10.0, 10.5).abs(0.5);
/// assert_approx_eq!(200.0, 202.0).rel(0.01);
/// assert_approx_eq!(0.5f32, 0.5 + f32::EPSILON / 2.0).ulps(1);
///
/// let q = Quatf::from_axis_angle(90.0, Vec3f::Y);
/// assert_approx_eq!(q.rotate(Vec3f::X), -Vec3f::Z).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// The counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use qmath::*;
/// assert_approx_ne!(Vec3f::X, Vec3f::Y).abs(0.5);
/// assert_approx_ne!(2.0f64, 2.0 + 8.0 * f64::EPSILON).ulps(2);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Quatf};

    use super::ApproxEq;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(0.25, 0.25);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(vec3(0.0, 1.0, 0.0), vec3(0.0, 1.1, 0.0)).abs(0.01);
    }

    #[test]
    #[should_panic(expected = "off by 1 after 3 steps")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "off by {} after {} steps", 1.0, 3);
    }

    #[test]
    fn any_method_suffices() {
        assert_approx_eq!(1.0f32, 1.5).abs(0.1).rel(0.5);
        assert_approx_eq!(1e-9f32, -1e-9).rel(0.0).abs(1e-8);
    }

    #[test]
    fn compound_types() {
        let q = Quatf::from_components(1.0, 0.0, 1e-7, 0.0);
        assert_approx_eq!(q, Quatf::IDENTITY).abs(1e-6);
        assert_approx_ne!(q, -Quatf::IDENTITY).abs(1e-6);
        assert_approx_eq!([1.0f64, 2.0], [1.0, 2.0 + 1e-12]).abs(1e-9);
        // Slices of different length are never equal.
        assert!(![1.0f64].as_slice().abs_diff_eq([1.0, 2.0].as_slice(), 1e9));
    }

    #[test]
    fn nan_never_equal() {
        for tol in [0.0, 1.0, f32::INFINITY] {
            assert_approx_ne!(f32::NAN, f32::NAN).abs(tol).rel(tol);
        }
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(u32::MAX);
        assert_approx_ne!(vec3(0.0, f64::NAN, 0.0), vec3(0.0, f64::NAN, 0.0)).abs(1.0);
    }

    #[test]
    fn infinities() {
        assert_approx_eq!(f64::NEG_INFINITY, f64::NEG_INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(f64::MAX);
        assert_approx_ne!(f32::MAX, f32::INFINITY).rel(1e6);
        // The largest finite float is one ULP away from infinity.
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);
    }

    #[test]
    fn signed_zero() {
        assert_approx_eq!(-0.0f32, 0.0).ulps(0);
        assert_approx_ne!(1e-30f32, -1e-30).ulps(1000);
    }
}
