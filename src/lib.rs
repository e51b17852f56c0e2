//! # vectorkit
//!
//! Immutable numeric vectors that behave like proper values.
//!
//! ## Overview
//!
//! Two vector types share one protocol:
//!
//! - **`Vector2d`**: exactly two components, with an angle and polar formatting
//! - **`Vector`**: any number of components, fixed at construction
//!
//! Both give you:
//!
//! - **Structural equality**: against each other, slices, arrays, or any
//!   ordered numeric sequence
//! - **Consistent hashing**: equal vectors hash equal, so they work as keys
//! - **Repr text that parses back**: `Vector2d(3.0, 4.0)`
//! - **A byte codec**: one tag byte plus little-endian doubles, lossless
//! - **A format mini-language**: `.2f`, `.3e`, `08.1%`, and `p` for polar
//!
//! ## Usage
//!
//! ```rust
//! use vectorkit::{Components, Vector2d};
//!
//! let v = Vector2d::new(3, 4)?;
//! assert_eq!(format!("{:?}", v), "Vector2d(3.0, 4.0)");
//! assert_eq!(v.to_string(), "(3.0, 4.0)");
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!(v.format(".2f")?, "(3.00, 4.00)");
//! assert_eq!(Vector2d::new(1, 1)?.format(".3ep")?, "<1.414e+00, 7.854e-01>");
//!
//! let clone = Vector2d::from_bytes(&v.to_bytes())?;
//! assert_eq!(clone, v);
//! # Ok::<(), vectorkit::VectorError>(())
//! ```
//!
//! ## Collaborators
//!
//! `ports` also defines two unrelated interfaces that ship with small
//! adapters: `Tombola` (random-drawing containers) and `Promotion`
//! (discount strategies over an order).

pub mod core;
pub mod ports;
pub mod adapters;

// Re-exports for convenience
pub use crate::core::{CodecConfig, Components, Encoding, Scalar, Vector, Vector2d, VectorError, VectorResult};
pub use crate::ports::{Promotion, Tombola};
