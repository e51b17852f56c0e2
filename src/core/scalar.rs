//! # Scalar
//!
//! Numeric inputs accepted by the vector constructors.
//!
//! Every component is converted to `f64` exactly once, when the vector is
//! built. Integers wider than 53 bits round to the nearest double, same as
//! an `as` cast.

use super::error::{VectorError, VectorResult};

/// A value that can become a vector component
pub trait Scalar: Copy {
    /// Convert to the canonical component type
    fn to_component(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn to_component(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<S: Scalar> Scalar for &S {
    #[inline]
    fn to_component(self) -> f64 {
        (*self).to_component()
    }
}

/// Convert and validate one component
pub(crate) fn checked(index: usize, value: impl Scalar) -> VectorResult<f64> {
    let value = value.to_component();
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VectorError::InvalidComponent { index, value })
    }
}

/// Convert and validate a whole component sequence
pub(crate) fn checked_all<I>(components: I) -> VectorResult<Vec<f64>>
where
    I: IntoIterator,
    I::Item: Scalar,
{
    components
        .into_iter()
        .enumerate()
        .map(|(i, c)| checked(i, c))
        .collect()
}
