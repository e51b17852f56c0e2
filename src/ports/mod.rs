//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! These are the collaborators that live next to the vector core without
//! touching it:
//! - `Tombola` - random-drawing containers
//! - `Promotion` - discount strategies over an `Order`
//!
//! The CORE doesn't know about adapters.
//! Adapters implement these port traits.

mod promotion;
mod tombola;

// Re-export traits
pub use promotion::Promotion;
pub use tombola::Tombola;

// Re-export types from promotion
pub use promotion::{Customer, LineItem, Order};

// Re-export types from tombola
pub use tombola::{TombolaError, TombolaResult};
