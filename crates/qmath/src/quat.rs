mod ops;
mod slerp;
mod view;

use std::fmt;

use crate::{vec4, Float, Mat4, Matrix, One, Vec3, Vector, Zero};

pub use slerp::{slerp, SLERP_LINEAR_THRESHOLD};

/// A [`Quat`] with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of a real part `w` and 3 imaginary parts `x`, `y` and `z`.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space. They are created with
/// [`Quat::from_axis_angle`] (or the axis-aligned [`Quat::from_rotation_x`] and friends), composed
/// with `*` (the Hamilton product), interpolated with [`Quat::slerp`], and turned into rotation
/// matrices with [`Quat::to_matrix`].
///
/// Components are stored in `(w, x, y, z)` order, so index 0 is the real part:
///
/// ```
/// # use qmath::*;
/// let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(q[0], 1.0);
/// assert_eq!(q.w, 1.0);
/// assert_eq!(q[3], q.z);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero> Quat<T> {
    /// The quaternion with all components set to zero.
    ///
    /// This is *not* a valid rotation. It is what [`Default`] returns.
    pub const ZERO: Self = Self {
        vec: Vector::ZERO,
    };
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity `(1, 0, 0, 0)`.
    ///
    /// This is a unit quaternion that represents "no rotation".
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and its imaginary parts `x`, `y` and `z`.
    pub const fn from_components(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(w, x, y, z),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] holding `(w, x, y, z)`.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components as a `(w, x, y, z)` [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }
}

impl<T> Quat<T> {
    /// If the squared length of a quaternion differs from 1 by less than this, [`Quat::normalize`]
    /// leaves it alone.
    pub const NORMALIZE_TOLERANCE: f64 = 1e-4;
}

impl<T: Float> Quat<T> {
    /// Creates a quaternion that rotates by `degrees` around `axis`.
    ///
    /// `axis` is *not* normalized. Passing a non-unit axis yields a quaternion that is not a pure
    /// rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let q = Quatf::from_axis_angle(90.0, Vec3f::Y);
    /// assert_approx_eq!(q.length2(), 1.0).abs(1e-5);
    /// assert_approx_eq!(q.rotate(Vec3f::X), -Vec3f::Z).abs(1e-4);
    /// ```
    pub fn from_axis_angle(degrees: T, axis: Vec3<T>) -> Self {
        let half = degrees.to_radians() * T::from_f64(0.5);
        let sin = half.sin();
        Self::from_components(half.cos(), sin * axis[0], sin * axis[1], sin * axis[2])
    }

    /// Creates a quaternion that rotates by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let half = radians * T::from_f64(0.5);
        Self::from_components(half.cos(), half.sin(), T::ZERO, T::ZERO)
    }

    /// Creates a quaternion that rotates by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let half = radians * T::from_f64(0.5);
        Self::from_components(half.cos(), T::ZERO, half.sin(), T::ZERO)
    }

    /// Creates a quaternion that rotates by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let half = radians * T::from_f64(0.5);
        Self::from_components(half.cos(), T::ZERO, T::ZERO, half.sin())
    }

    /// Computes the dot product of `self` and `other` (the cosine of half the angle between two
    /// unit quaternions).
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.vec.length()
    }

    /// Returns `true` if no component is infinite or NaN.
    ///
    /// Normalizing [`Quat::ZERO`] produces NaN components, which this detects.
    pub fn is_finite(&self) -> bool {
        self.vec.is_finite()
    }

    /// Scales this quaternion to unit length, in place, and returns the result.
    ///
    /// Quaternions whose squared length is already within [`Quat::NORMALIZE_TOLERANCE`] of 1 are
    /// left unchanged. A zero quaternion turns into NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let mut q = Quatf::from_components(2.0, 0.0, 0.0, 0.0);
    /// assert_eq!(q.normalize(), Quat::IDENTITY);
    /// assert_eq!(q, Quat::IDENTITY);
    /// ```
    pub fn normalize(&mut self) -> Self {
        let sum = self.length2();
        if (T::ONE - sum).abs() < T::from_f64(Self::NORMALIZE_TOLERANCE) {
            return *self;
        }

        self.vec = self.vec / sum.sqrt();
        *self
    }

    /// Returns a normalized copy of this quaternion.
    ///
    /// See [`Quat::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize()
    }

    /// Converts this quaternion to a 4x4 rotation matrix.
    ///
    /// `self` should be normalized; this is not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// assert_eq!(Quatf::IDENTITY.to_matrix(), Mat4f::identity());
    /// ```
    pub fn to_matrix(&self) -> Mat4<T> {
        let [w, x, y, z] = self.vec.into_array();
        let one = T::ONE;
        let zero = T::ZERO;
        let two = one + one;
        Matrix::from_columns([
            [
                one - two * y * y - two * z * z,
                two * x * y + two * w * z,
                two * x * z - two * w * y,
                zero,
            ],
            [
                two * x * y - two * w * z,
                one - two * x * x - two * z * z,
                two * y * z + two * w * x,
                zero,
            ],
            [
                two * x * z + two * w * y,
                two * y * z - two * w * x,
                one - two * x * x - two * y * y,
                zero,
            ],
            [zero, zero, zero, one],
        ])
    }

    /// Rotates `v` by this quaternion.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        (self.to_matrix() * v.extend(T::ZERO)).truncate()
    }

    /// Spherically interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// See [`slerp`].
    pub fn slerp(self, other: Self, t: T) -> Self {
        slerp(self, other, t)
    }
}

impl<T: Float> From<Quat<T>> for Mat4<T> {
    fn from(q: Quat<T>) -> Self {
        q.to_matrix()
    }
}

impl<T: Zero> Default for Quat<T> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.vec[0])
            .field("x", &self.vec[1])
            .field("y", &self.vec[2])
            .field("z", &self.vec[3])
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}
