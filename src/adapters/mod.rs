//! Adapters - Swappable implementations of port interfaces

pub mod promotions;
pub mod tombola;

#[cfg(feature = "python")]
pub mod python;

pub use promotions::{BestPromo, BulkItemPromo, FidelityPromo, LargeOrderPromo};
pub use tombola::{BingoCage, LotteryBlower};
