use std::{array, fmt};

use crate::{
    traits::{Float, Number, Sqrt},
    One, Zero,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element column vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from their
///   elements.
/// - [`Vector::splat`] copies a value into every element, [`Vector::from_fn`] invokes a closure
///   with the index of each element.
/// - `From<[T; N]>` converts from arrays, [`Default`] uses the element type's default.
/// - [`Vector::ZERO`] is the all-zero vector; `Vector::X`, `Vector::Y`, `Vector::Z` and
///   `Vector::W` are unit vectors.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z` and `w` (up to the vector's dimension).
/// - [`Index`] and [`IndexMut`] work like they do on arrays, and panic when out of bounds.
///   [`Vector::get`] is the checked alternative.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the underlying
///   storage.
///
/// # Arithmetic
///
/// `+`, `-` and their assigning forms operate element-wise on two vectors. `*` and `/` with a
/// scalar scale every element; for [`f32`], [`f64`] and [`i32`] the scalar may also be the left
/// operand of `*`.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let v = Vector::from_fn(|i| i * 2);
    /// assert_eq!(v, vec4(0, 2, 4, 6));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match iter.next() {
            Some(pair) => pair,
            None => unreachable!("both vectors have `N` elements"),
        })
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let v = vec2(7, 8);
    /// assert_eq!(v.get(1), Some(&8));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// assert_eq!(vec2(4, 3).length2(), 25);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Returns the squared distance between `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (self - other).length2()
    }

    /// Returns the distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).distance(vec3(1.0, 5.0, 7.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Normalizes `self` in place and returns its length *before* normalization.
    ///
    /// A vector of length zero is left unchanged, and `0` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let mut v = vec3(0.0, 3.0, 4.0);
    /// assert_eq!(v.normalize(), 5.0);
    /// assert_eq!(v, vec3(0.0, 0.6, 0.8));
    ///
    /// let mut zero = Vec3f::ZERO;
    /// assert_eq!(zero.normalize(), 0.0);
    /// assert_eq!(zero, Vec3f::ZERO);
    /// ```
    pub fn normalize(&mut self) -> T
    where
        T: Number + Sqrt,
    {
        let length = self.length();
        if length == T::ZERO {
            return T::ZERO;
        }

        for elem in &mut self.0 {
            *elem = *elem / length;
        }
        length
    }

    /// Returns a normalized copy of `self`.
    ///
    /// Zero-length vectors are returned unchanged, like with [`Vector::normalize`].
    pub fn normalized(mut self) -> Self
    where
        T: Number + Sqrt,
    {
        self.normalize();
        self
    }

    /// Returns `true` if every element is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool
    where
        T: Float,
    {
        self.0.iter().all(|elem| elem.is_finite())
    }

    /// Returns `true` if every element of `self` is less than the corresponding element of
    /// `other`.
    ///
    /// Note that this is not a total order: neither `a.all_lt(b)` nor `b.all_le(a)` might hold.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// assert!(vec3(0, 1, 2).all_lt(vec3(1, 2, 3)));
    /// assert!(!vec3(0, 1, 2).all_lt(vec3(1, 1, 3)));
    /// assert!(vec3(0, 1, 2).all_le(vec3(1, 1, 3)));
    /// ```
    pub fn all_lt(&self, other: Self) -> bool
    where
        T: PartialOrd,
    {
        self.0.iter().zip(&other.0).all(|(a, b)| a < b)
    }

    /// Returns `true` if every element of `self` is less than or equal to the corresponding
    /// element of `other`.
    pub fn all_le(&self, other: Self) -> bool
    where
        T: PartialOrd,
    {
        self.0.iter().zip(&other.0).all(|(a, b)| a <= b)
    }

    /// Returns `true` if every element of `self` is greater than the corresponding element of
    /// `other`.
    pub fn all_gt(&self, other: Self) -> bool
    where
        T: PartialOrd,
    {
        self.0.iter().zip(&other.0).all(|(a, b)| a > b)
    }

    /// Returns `true` if every element of `self` is greater than or equal to the corresponding
    /// element of `other`.
    pub fn all_ge(&self, other: Self) -> bool
    where
        T: PartialOrd,
    {
        self.0.iter().zip(&other.0).all(|(a, b)| a >= b)
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.y, 9);
        assert_eq!(v, vec2(777, 9));
        assert_eq!(v.get(2), None);
        if let Some(elem) = v.get_mut(0) {
            *elem = 1;
        }
        assert_eq!(v, [1, 9]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec3(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{}", vec2(1.5, -2.0)), "(1.5, -2)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).dot(Vec4f::W), 4.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
        let a = vec3(1, 2, 3);
        let b = vec3(-4, 0, 5);
        let c = a.cross(b);
        assert_eq!(c.dot(a), 0);
        assert_eq!(c.dot(b), 0);
        assert_eq!(b.cross(a), -c);
    }

    #[test]
    fn length_and_distance() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0, 4.0).length2(), 25.0);
        assert_eq!(vec3(1, 1, 1).distance2(vec3(2, 3, 4)), 1 + 4 + 9);
        assert_approx_eq!(Vec4f::X.distance(Vec4f::Y), 2.0f32.sqrt());
        assert_eq!(vec3(5.0, 5.0, 5.0).distance(vec3(5.0, 5.0, 5.0)), 0.0);
    }

    #[test]
    fn normalize() {
        let mut v = vec2(10.0, 0.0);
        assert_eq!(v.normalize(), 10.0);
        assert_eq!(v, Vec2f::X);

        let mut v = vec4(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.normalize(), 2.0);
        assert_eq!(v, Vector::splat(0.5));

        let v = vec3(0.0, -7.0, 0.0).normalized();
        assert_eq!(v, -Vec3f::Y);
        assert_eq!(Vec3f::ZERO.normalized(), Vec3f::ZERO);
    }

    #[test]
    fn ordering() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(2.0, 3.0, 4.0);
        assert!(a.all_lt(b));
        assert!(a.all_le(b));
        assert!(a.all_le(a));
        assert!(!a.all_lt(a));
        assert!(b.all_gt(a));
        assert!(b.all_ge(b));

        // Mixed relations satisfy neither direction.
        let c = vec3(0.0, 5.0, 3.0);
        assert!(!a.all_lt(c) && !a.all_ge(c));
    }

    #[test]
    fn truncate_extend() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
    }

    #[test]
    fn finite() {
        assert!(Vec3f::X.is_finite());
        assert!(!vec2(f32::NAN, 0.0).is_finite());
        assert!(!vec2(0.0, f64::INFINITY).is_finite());
    }
}
