//! # Order Types
//!
//! An order ties a customer to a sequence of product references.
//! Items are shared references into the product space: no copy is made,
//! and the same product may appear more than once.

use crate::customer::Customer;
use crate::product::Product;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A customer order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID
    id: String,

    /// Owning customer (shared reference, not ownership)
    customer: Arc<Customer>,

    /// Ordered product references, insertion order preserved
    items: Vec<Arc<Product>>,

    /// Created timestamp
    created_at: DateTime<Utc>,
}

impl Order {
    /// Create an empty order for a customer
    pub fn new(id: impl Into<String>, customer: Arc<Customer>) -> Self {
        Self {
            id: id.into(),
            customer,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Unique order identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The customer this order belongs to
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Append a product reference to the end of the item sequence.
    /// Always succeeds; duplicates are allowed.
    pub fn add_product(&mut self, product: Arc<Product>) {
        self.items.push(product);
    }

    /// The referenced products, in insertion order
    pub fn items(&self) -> &[Arc<Product>] {
        &self.items
    }

    /// Order total, recomputed on demand. 0 for an empty order.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|p| p.price()).sum()
    }

    /// Number of items in the order
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the order has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the order was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Arc<Customer> {
        Arc::new(Customer::new("C1", "Nguyễn Văn A"))
    }

    #[test]
    fn test_empty_order_total_is_zero() {
        let order = Order::new("O1", customer());
        assert!(order.is_empty());
        assert_eq!(order.total(), 0.0);
        assert_eq!(order.customer().id(), "C1");
    }

    #[test]
    fn test_total_is_sum_of_item_prices() {
        let book = Arc::new(Product::book("B1", "Java Programming", 100.0, "James Gosling").unwrap());
        let phone = Arc::new(Product::phone("P1", "iPhone 13", 2000.0, "Apple").unwrap());

        let mut order = Order::new("O1", customer());
        order.add_product(book);
        order.add_product(phone);

        assert_eq!(order.total(), 2100.0);
        assert_eq!(order.item_count(), 2);
    }

    #[test]
    fn test_adding_a_product_raises_total_by_its_price() {
        let laptop = Arc::new(Product::laptop("L1", "Macbook Pro", 3000.0, "Apple").unwrap());

        let mut order = Order::new("O2", customer());
        let before = order.total();
        order.add_product(laptop);
        assert_eq!(order.total(), before + 3000.0);
    }

    #[test]
    fn test_duplicate_references_count_twice() {
        let book = Arc::new(Product::book("B1", "Java Programming", 100.0, "James Gosling").unwrap());

        let mut order = Order::new("O3", customer());
        order.add_product(Arc::clone(&book));
        order.add_product(Arc::clone(&book));

        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total(), 200.0);
    }

    #[test]
    fn test_order_serializes_with_shared_references() {
        let book = Arc::new(Product::book("B1", "Java Programming", 100.0, "James Gosling").unwrap());
        let mut order = Order::new("O1", customer());
        order.add_product(book);

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"O1\""));
        assert!(json.contains("Java Programming"));
    }
}
