use std::{array, fmt};

use crate::{One, Vector, Zero};

mod affine;
mod ops;

/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from arrays of rows or
///   columns (or vectors).
/// - [`Matrix::from_column_major`] takes the elements of a 3x3 or 4x4 matrix in storage order.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::zero`] and [`Matrix::identity`] create the all-zero and the identity matrix.
/// - For 4x4 matrices, [`Matrix::translation`], [`Matrix::scaling`] and [`Matrix::rotation_y`]
///   create affine transforms, and [`Quat::to_matrix`][crate::Quat::to_matrix] creates rotations.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use qmath::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(1, 0)] = 4;
/// assert_eq!(mat[(1, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds panics, like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead. [`Matrix::as_slice`] exposes the elements in
/// storage (column-major) order.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

unsafe impl<T, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> where
    T: bytemuck::Zeroable
{
}
unsafe impl<T, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> where
    T: bytemuck::Pod
{
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns column `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Returns row `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns the elements in storage order: column 0 first, then column 1, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.as_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements in storage (column-major) order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` are initialized with [`T::ZERO`][`Zero::ZERO`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self[(row, col)]
            } else {
                T::ZERO
            }
        })
    }

    /// Returns a matrix with every element set to 0.
    pub fn zero() -> Self
    where
        T: Zero + Copy,
    {
        Self([[T::ZERO; R]; C])
    }

    /// Returns the identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Multiplying a vector or matrix with the identity matrix returns it unchanged.
    pub fn identity() -> Self
    where
        T: Zero + One + Copy,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T> Matrix<T, 3, 3> {
    /// Creates a 3x3 matrix from its 9 elements in column-major order.
    pub fn from_column_major(elems: [T; 9]) -> Self {
        let [m0, m1, m2, m3, m4, m5, m6, m7, m8] = elems;
        Self([[m0, m1, m2], [m3, m4, m5], [m6, m7, m8]])
    }
}

impl<T> Matrix<T, 4, 4> {
    /// Creates a 4x4 matrix from its 16 elements in column-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use qmath::*;
    /// #[rustfmt::skip]
    /// let mat = Mat4::from_column_major([
    ///     1, 0, 0, 0,
    ///     0, 1, 0, 0,
    ///     0, 0, 1, 0,
    ///     5, 6, 7, 1,
    /// ]);
    /// assert_eq!(mat.column(3), [5, 6, 7, 1]);
    /// assert_eq!(mat.row(0), [1, 0, 0, 5]);
    /// ```
    #[rustfmt::skip]
    pub fn from_column_major(elems: [T; 16]) -> Self {
        let [
            m0, m1, m2, m3,
            m4, m5, m6, m7,
            m8, m9, m10, m11,
            m12, m13, m14, m15,
        ] = elems;
        Self([
            [m0, m1, m2, m3],
            [m4, m5, m6, m7],
            [m8, m9, m10, m11],
            [m12, m13, m14, m15],
        ])
    }

    /// Returns the upper-left 3x3 part of this matrix (dropping any translation).
    pub fn truncate(self) -> Mat3<T>
    where
        T: Zero + Copy,
    {
        self.resize()
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>, usize);
        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[")?;
                for col in 0..C {
                    if col != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                f.write_str("]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// Renders one bracketed row per line.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..R {
            if row != 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for col in 0..C {
                if col != 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(&self[(row, col)], f)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}
