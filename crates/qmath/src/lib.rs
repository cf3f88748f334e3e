//! Small linear algebra primitives for 3D transforms.
//!
//! This crate provides fixed-size [`Vector`]s and [`Matrix`]es, and [`Quat`]ernions for
//! representing rotations. The quaternion type is the centerpiece: quaternions are built from an
//! axis and an angle, composed with the (normalizing) Hamilton product, interpolated with
//! [`slerp`], and converted to 4x4 rotation matrices that can be combined with the affine
//! builders on [`Mat4`].
//!
//! ```
//! # use qmath::*;
//! let spin = Quatf::from_axis_angle(90.0, Vec3f::Y);
//! let model = Mat4f::from(spin).translate(vec3(0.0, 0.0, -5.0));
//!
//! let p = model * vec4(1.0, 0.0, 0.0, 1.0);
//! assert_approx_eq!(p, vec4(0.0, 0.0, -6.0, 1.0)).abs(1e-5);
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Only fixed-size vectors and matrices. Dimensions are const generics, which keeps the API
//!   small.
//! - A single, column-major, unpadded data layout for matrices. [`Matrix::as_slice`] can be
//!   handed to graphics APIs as-is.
//! - Generic over the element type, but only for [`Copy`] numbers. Rotations, normalization and
//!   everything else that needs trigonometry or square roots require a [`Float`] (`f32` or
//!   `f64`).
//! - No matrix inversion or decomposition, and no rotation matrices around arbitrary axes (build
//!   those from a [`Quat`] instead).
//!
//! # Errors
//!
//! There are none: every operation returns a value. Degenerate input (normalizing a zero
//! quaternion, for example) produces NaN or infinite components, which can be detected with
//! [`Quat::is_finite`] and [`Vector::is_finite`]. Indexing out of bounds panics; [`Vector::get`]
//! and [`Matrix::get`] are the checked alternatives.

pub mod approx;
mod matrix;
mod quat;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use traits::*;
pub use vector::*;
