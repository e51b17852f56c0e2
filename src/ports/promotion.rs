//! # Promotion Port
//!
//! Trait for discount strategies over an order.
//!
//! The `Order` is the context: it owns the customer and cart, and asks its
//! promotion (if any) how much to take off. Strategies are pure functions
//! of the order and are swappable at runtime.

use std::fmt;
use std::sync::Arc;

/// A customer placing an order
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    /// Loyalty points
    pub fidelity: u32,
}

impl Customer {
    pub fn new(name: impl Into<String>, fidelity: u32) -> Self {
        Self {
            name: name.into(),
            fidelity,
        }
    }
}

/// One line of a cart
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product: String,
    pub quantity: u32,
    pub price: f64,
}

impl LineItem {
    pub fn new(product: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            product: product.into(),
            quantity,
            price,
        }
    }

    /// Price times quantity
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Trait for discount strategies
pub trait Promotion: Send + Sync {
    /// Discount for this order, as a non-negative amount
    fn discount(&self, order: &Order) -> f64;

    /// Name of this promotion (for debugging/config)
    fn name(&self) -> &'static str;
}

/// An order: the context the strategies run against
#[derive(Clone)]
pub struct Order {
    pub customer: Customer,
    pub cart: Vec<LineItem>,
    pub promotion: Option<Arc<dyn Promotion>>,
}

impl Order {
    /// Create an order with no promotion
    pub fn new(customer: Customer, cart: impl IntoIterator<Item = LineItem>) -> Self {
        Self {
            customer,
            cart: cart.into_iter().collect(),
            promotion: None,
        }
    }

    /// Set the promotion
    pub fn with_promotion<P: Promotion + 'static>(mut self, promotion: P) -> Self {
        self.promotion = Some(Arc::new(promotion));
        self
    }

    /// Sum of the line totals
    ///
    /// Recomputed on every call; the cart is public and may change.
    pub fn total(&self) -> f64 {
        self.cart.iter().map(LineItem::total).sum()
    }

    /// Total minus the promotion's discount
    pub fn due(&self) -> f64 {
        let discount = match &self.promotion {
            Some(promotion) => promotion.discount(self).max(0.0),
            None => 0.0,
        };
        self.total() - discount
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Order total: {:.2} due: {:.2}>", self.total(), self.due())
    }
}
