//! # Promotion Adapters
//!
//! Concrete discount strategies:
//! - `FidelityPromo` - 5% off for customers with 1000+ fidelity points
//! - `BulkItemPromo` - 10% off each line item of 20+ units
//! - `LargeOrderPromo` - 7% off orders with 10+ distinct products
//! - `BestPromo` - whichever of a set gives the biggest discount

use std::collections::HashSet;
use std::sync::Arc;

use crate::ports::{Order, Promotion};

const FIDELITY_THRESHOLD: u32 = 1000;
const BULK_QUANTITY: u32 = 20;
const LARGE_ORDER_PRODUCTS: usize = 10;

/// 5% discount for customers with 1000 or more fidelity points
#[derive(Clone, Copy, Debug, Default)]
pub struct FidelityPromo;

impl Promotion for FidelityPromo {
    fn discount(&self, order: &Order) -> f64 {
        if order.customer.fidelity >= FIDELITY_THRESHOLD {
            order.total() * 0.05
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "fidelity"
    }
}

/// 10% discount for each line item with 20 or more units
#[derive(Clone, Copy, Debug, Default)]
pub struct BulkItemPromo;

impl Promotion for BulkItemPromo {
    fn discount(&self, order: &Order) -> f64 {
        order
            .cart
            .iter()
            .filter(|item| item.quantity >= BULK_QUANTITY)
            .map(|item| item.total() * 0.1)
            .sum()
    }

    fn name(&self) -> &'static str {
        "bulk_item"
    }
}

/// 7% discount for orders with 10 or more distinct products
#[derive(Clone, Copy, Debug, Default)]
pub struct LargeOrderPromo;

impl Promotion for LargeOrderPromo {
    fn discount(&self, order: &Order) -> f64 {
        let distinct: HashSet<&str> = order.cart.iter().map(|item| item.product.as_str()).collect();
        if distinct.len() >= LARGE_ORDER_PRODUCTS {
            order.total() * 0.07
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "large_order"
    }
}

/// Applies the largest discount among its candidates
#[derive(Clone)]
pub struct BestPromo {
    candidates: Vec<Arc<dyn Promotion>>,
}

impl BestPromo {
    /// Choose among the given promotions
    pub fn new(candidates: Vec<Arc<dyn Promotion>>) -> Self {
        Self { candidates }
    }

    /// Choose among every built-in promotion
    pub fn all() -> Self {
        let candidates: Vec<Arc<dyn Promotion>> = vec![
            Arc::new(FidelityPromo),
            Arc::new(BulkItemPromo),
            Arc::new(LargeOrderPromo),
        ];
        Self::new(candidates)
    }

    /// The winning promotion and its discount, if there are candidates
    pub fn best(&self, order: &Order) -> Option<(&'static str, f64)> {
        self.candidates
            .iter()
            .map(|promo| (promo.name(), promo.discount(order)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Default for BestPromo {
    fn default() -> Self {
        Self::all()
    }
}

impl Promotion for BestPromo {
    fn discount(&self, order: &Order) -> f64 {
        self.best(order).map_or(0.0, |(_, discount)| discount)
    }

    fn name(&self) -> &'static str {
        "best"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Customer, LineItem};

    fn joe() -> Customer {
        Customer::new("John Doe", 0)
    }

    fn ann() -> Customer {
        Customer::new("Ann Smith", 1100)
    }

    fn fruit_cart() -> Vec<LineItem> {
        vec![
            LineItem::new("banana", 4, 0.5),
            LineItem::new("apple", 10, 1.5),
            LineItem::new("watermelon", 5, 5.0),
        ]
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_fidelity_promo() {
        let order = Order::new(joe(), fruit_cart()).with_promotion(FidelityPromo);
        assert_close(order.total(), 42.0);
        assert_close(order.due(), 42.0);
        assert_eq!(format!("{:?}", order), "<Order total: 42.00 due: 42.00>");

        let order = Order::new(ann(), fruit_cart()).with_promotion(FidelityPromo);
        assert_eq!(format!("{:?}", order), "<Order total: 42.00 due: 39.90>");
    }

    #[test]
    fn test_bulk_item_promo() {
        let cart = vec![LineItem::new("banana", 30, 0.5), LineItem::new("apple", 10, 1.5)];
        let order = Order::new(joe(), cart).with_promotion(BulkItemPromo);
        assert_eq!(format!("{:?}", order), "<Order total: 30.00 due: 28.50>");
    }

    #[test]
    fn test_large_order_promo() {
        let long_cart: Vec<LineItem> = (0..10)
            .map(|i| LineItem::new(format!("item{i}"), 1, 1.0))
            .collect();
        let order = Order::new(joe(), long_cart).with_promotion(LargeOrderPromo);
        assert_eq!(format!("{:?}", order), "<Order total: 10.00 due: 9.30>");

        let order = Order::new(joe(), fruit_cart()).with_promotion(LargeOrderPromo);
        assert_close(order.due(), 42.0);
    }

    #[test]
    fn test_no_promotion() {
        let order = Order::new(joe(), fruit_cart());
        assert_close(order.due(), order.total());
    }

    #[test]
    fn test_total_tracks_cart_changes() {
        let mut order = Order::new(joe(), fruit_cart());
        assert_close(order.total(), 42.0);
        order.cart.push(LineItem::new("cherry", 2, 4.0));
        assert_close(order.total(), 50.0);
    }

    #[test]
    fn test_best_promo() {
        let best = BestPromo::all();

        let bulk = Order::new(joe(), vec![LineItem::new("banana", 30, 0.5)]);
        assert_eq!(best.best(&bulk).map(|(name, _)| name), Some("bulk_item"));
        assert_close(best.discount(&bulk), 1.5);

        let loyal = Order::new(ann(), fruit_cart());
        assert_eq!(best.best(&loyal).map(|(name, _)| name), Some("fidelity"));

        let order = Order::new(ann(), fruit_cart()).with_promotion(BestPromo::default());
        assert_close(order.due(), 39.9);

        assert_eq!(BestPromo::new(vec![]).best(&loyal), None);
    }
}
