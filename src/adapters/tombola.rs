//! # Tombola Adapters
//!
//! Two ways to draw at random:
//! - `BingoCage` - shuffles on load, then pops from the end
//! - `LotteryBlower` - picks a random position on every draw
//!
//! Both take any `rand::Rng`, so tests can seed them.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::ports::{Tombola, TombolaError, TombolaResult};

/// Shuffle once, then draw in shuffled order
///
/// Keeps the default `loaded`/`inspect` from the port.
pub struct BingoCage<T, R = StdRng> {
    items: Vec<T>,
    rng: R,
}

impl<T: Ord + Clone> BingoCage<T> {
    /// Create a cage seeded from the OS
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_rng(items, StdRng::from_entropy())
    }
}

impl<T: Ord + Clone, R: Rng> BingoCage<T, R> {
    /// Create a cage drawing with the given generator
    pub fn with_rng(items: impl IntoIterator<Item = T>, rng: R) -> Self {
        let mut cage = Self {
            items: Vec::new(),
            rng,
        };
        cage.load(items.into_iter().collect());
        cage
    }

    /// Number of items left
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Ord + Clone, R: Rng> Tombola for BingoCage<T, R> {
    type Item = T;

    fn load(&mut self, items: Vec<T>) {
        tracing::trace!(count = items.len(), "loading bingo cage");
        self.items.extend(items);
        self.items.shuffle(&mut self.rng);
    }

    fn pick(&mut self) -> TombolaResult<T> {
        self.items.pop().ok_or(TombolaError::Empty("BingoCage"))
    }
}

/// Draw from a random position each time
pub struct LotteryBlower<T, R = StdRng> {
    balls: Vec<T>,
    rng: R,
}

impl<T: Ord + Clone> LotteryBlower<T> {
    /// Create a blower seeded from the OS
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_rng(items, StdRng::from_entropy())
    }
}

impl<T: Ord + Clone, R: Rng> LotteryBlower<T, R> {
    /// Create a blower drawing with the given generator
    pub fn with_rng(items: impl IntoIterator<Item = T>, rng: R) -> Self {
        Self {
            balls: items.into_iter().collect(),
            rng,
        }
    }

    /// Number of balls left
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Check if the blower is empty
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}

impl<T: Ord + Clone, R: Rng> Tombola for LotteryBlower<T, R> {
    type Item = T;

    fn load(&mut self, items: Vec<T>) {
        tracing::trace!(count = items.len(), "loading lottery blower");
        self.balls.extend(items);
    }

    fn pick(&mut self) -> TombolaResult<T> {
        if self.balls.is_empty() {
            return Err(TombolaError::Empty("LotteryBlower"));
        }
        let position = self.rng.gen_range(0..self.balls.len());
        Ok(self.balls.swap_remove(position))
    }

    // No need to drain: the balls are right here
    fn loaded(&mut self) -> bool {
        !self.balls.is_empty()
    }

    fn inspect(&mut self) -> Vec<T> {
        let mut balls = self.balls.clone();
        balls.sort();
        balls
    }
}
