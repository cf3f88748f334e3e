use std::{fmt, ops};

/// Types that support the trigonometric functions needed by this crate.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the arccosine of `self`, in radians.
    ///
    /// Returns NaN if `self` is outside of `[-1, 1]`.
    fn acos(self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types.
///
/// Quaternions, rotations and the affine matrix builders are only available for element types
/// implementing this trait ([`f32`] and [`f64`]).
pub trait Float: Number + Trig + Sqrt + PartialOrd + fmt::Debug {
    /// Archimedes' constant (π).
    const PI: Self;

    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Returns `true` if `self` is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Converts a numeric literal to `Self`, rounding if necessary.
    fn from_f64(value: f64) -> Self;

    /// Converts `self` from degrees to radians (`self * π / 180`).
    fn to_radians(self) -> Self {
        self * Self::PI / Self::from_f64(180.0)
    }
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn acos(self) -> Self {
                    self.acos()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Float for $types {
                const PI: Self = std::$types::consts::PI;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }

                #[allow(clippy::cast_possible_truncation)]
                fn from_f64(value: f64) -> Self {
                    value as $types
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn degrees() {
        assert_approx_eq!(Float::to_radians(180.0f32), std::f32::consts::PI);
        assert_approx_eq!(Float::to_radians(90.0f64), std::f64::consts::FRAC_PI_2);
        assert_eq!(Float::to_radians(0.0f32), 0.0);
    }

    #[test]
    fn from_literal() {
        assert_eq!(<f32 as Float>::from_f64(0.5), 0.5f32);
        assert_eq!(<f64 as Float>::from_f64(-2.0), -2.0);
    }
}
