//! Affine transforms in homogeneous 4x4 form.
//!
//! All builders produce matrices meant to be applied to column vectors (`m * v`). The chaining
//! methods ([`Matrix::translate`], [`Matrix::scale`], [`Matrix::rotate_y`]) pre-multiply, so the
//! transform added last is applied last.

use crate::{Float, Mat4, Vec3};

impl<T: Float> Mat4<T> {
    /// Returns a matrix that translates points by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let m = Mat4f::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
    /// assert_eq!(&m.as_slice()[12..15], &[1.0, 2.0, 3.0]);
    /// ```
    pub fn translation(offset: Vec3<T>) -> Self {
        let mut m = Self::identity();
        m[(0, 3)] = offset[0];
        m[(1, 3)] = offset[1];
        m[(2, 3)] = offset[2];
        m
    }

    /// Returns a matrix that scales each axis by the matching component of `factors`.
    pub fn scaling(factors: Vec3<T>) -> Self {
        let mut m = Self::identity();
        m[(0, 0)] = factors[0];
        m[(1, 1)] = factors[1];
        m[(2, 2)] = factors[2];
        m
    }

    /// Returns a matrix that rotates by `degrees` around the Y axis.
    ///
    /// Positive angles rotate the X axis towards -Z.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let m = Mat4f::rotation_y(90.0);
    /// assert_approx_eq!(m * Vec4f::X, -Vec4f::Z).abs(1e-6);
    /// ```
    pub fn rotation_y(degrees: T) -> Self {
        let (sin, cos) = {
            let rad = degrees.to_radians();
            (rad.sin(), rad.cos())
        };
        let mut m = Self::identity();
        m[(0, 0)] = cos;
        m[(0, 2)] = sin;
        m[(2, 0)] = -sin;
        m[(2, 2)] = cos;
        m
    }

    /// Applies a translation by `offset` after the transform in `self`.
    pub fn translate(self, offset: Vec3<T>) -> Self {
        Self::translation(offset) * self
    }

    /// Applies a per-axis scaling after the transform in `self`.
    pub fn scale(self, factors: Vec3<T>) -> Self {
        Self::scaling(factors) * self
    }

    /// Applies a rotation by `degrees` around the Y axis after the transform in `self`.
    pub fn rotate_y(self, degrees: T) -> Self {
        Self::rotation_y(degrees) * self
    }
}
