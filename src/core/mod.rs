//! # Core Domain
//!
//! Pure math, no I/O. The foundation of vectorkit.
//!
//! This module contains the fundamental types and operations:
//! - `Vector2d` - A two-component vector with an angle
//! - `Vector` - A vector of any fixed length
//! - `Components` - The protocol both share
//! - `Scalar` - Numeric inputs accepted by the constructors
//! - `codec` - The tagged little-endian byte encoding
//! - `format` - The runtime format-spec mini-language
//! - `hash` - Component hashing consistent with equality
//!
//! ## Design Principles
//!
//! - All values are immutable once built
//! - All functions are pure (deterministic, no side effects)
//! - No I/O operations
//! - Fully testable in isolation

mod error;
mod protocol;
mod scalar;
mod vector;
mod vector2d;
pub mod codec;
pub mod config;
pub mod format;
pub mod hash;

// Re-exports
pub use config::{CodecConfig, Encoding};
pub use error::{VectorError, VectorResult};
pub use protocol::{Components, Iter};
pub use scalar::Scalar;
pub use vector::Vector;
pub use vector2d::Vector2d;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_is_shared() {
        fn describe<V: Components>(v: &V) -> (usize, f64, i64, String) {
            (v.len(), v.magnitude(), v.hash_value(), v.repr())
        }

        let flat = Vector2d::new(3, 4).unwrap();
        let wide = Vector::new([3, 4]).unwrap();

        let (len_a, mag_a, hash_a, _) = describe(&flat);
        let (len_b, mag_b, hash_b, repr_b) = describe(&wide);

        assert_eq!(len_a, len_b);
        assert_eq!(mag_a, mag_b);
        assert_eq!(hash_a, hash_b);
        assert_eq!(repr_b, "Vector(3.0, 4.0)");
    }

    #[test]
    fn test_values_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vector2d>();
        assert_send_sync::<Vector>();
    }
}
