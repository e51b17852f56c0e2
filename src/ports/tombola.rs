//! # Tombola Port
//!
//! Trait for random-drawing containers.
//!
//! Load items, draw them out one at a time in random order. Only `load` and
//! `pick` are required; `loaded` and `inspect` have defaults built on those
//! two, so any container that can load and pick gets them for free.

/// Result type for tombola operations
pub type TombolaResult<T> = Result<T, TombolaError>;

/// Errors that can occur when drawing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TombolaError {
    /// Nothing left to pick
    #[error("pick from empty {0}")]
    Empty(&'static str),
}

/// A container that hands out its items in random order
pub trait Tombola {
    /// Item type held by the container
    type Item: Ord + Clone;

    /// Add items
    fn load(&mut self, items: Vec<Self::Item>);

    /// Remove an item at random and return it
    ///
    /// Fails with `TombolaError::Empty` when no items remain.
    fn pick(&mut self) -> TombolaResult<Self::Item>;

    /// True if at least one item is inside
    fn loaded(&mut self) -> bool {
        !self.inspect().is_empty()
    }

    /// Sorted snapshot of the current items
    ///
    /// The default drains the container through `pick` and loads everything
    /// back, so the draw order afterwards may differ from before.
    fn inspect(&mut self) -> Vec<Self::Item> {
        let mut items = Vec::new();
        while let Ok(item) = self.pick() {
            items.push(item);
        }
        self.load(items.clone());
        items.sort();
        items
    }
}
