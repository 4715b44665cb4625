//! # Generic In-Memory Repository
//!
//! A keyed store for one entity type. The key extractor is supplied at
//! construction, so products, customers, and orders share one container
//! type instead of one subclass each.

use crate::customer::Customer;
use crate::error::{ShopError, ShopResult};
use crate::order::Order;
use crate::product::Product;
use std::collections::HashMap;
use std::sync::Arc;

/// Keyed in-memory store for one entity type.
///
/// Every failing operation leaves the store unchanged.
pub struct Repository<T> {
    entries: HashMap<String, T>,
    key_of: fn(&T) -> String,
}

impl<T> Repository<T> {
    /// Create an empty repository with the given key extractor
    pub fn new(key_of: fn(&T) -> String) -> Self {
        Self {
            entries: HashMap::new(),
            key_of,
        }
    }

    /// Insert a new entity. Fails with `DuplicateId` if its identifier
    /// is already present.
    pub fn add(&mut self, item: T) -> ShopResult<()> {
        let id = (self.key_of)(&item);
        if self.entries.contains_key(&id) {
            return Err(ShopError::DuplicateId { id });
        }
        self.entries.insert(id, item);
        Ok(())
    }

    /// Replace an existing entity. Fails with `NotFound` if its
    /// identifier is absent.
    pub fn update(&mut self, item: T) -> ShopResult<()> {
        let id = (self.key_of)(&item);
        if !self.entries.contains_key(&id) {
            return Err(ShopError::NotFound { id });
        }
        self.entries.insert(id, item);
        Ok(())
    }

    /// Remove an entity by identifier, returning it. Fails with
    /// `NotFound` if absent.
    pub fn delete(&mut self, id: &str) -> ShopResult<T> {
        self.entries
            .remove(id)
            .ok_or_else(|| ShopError::NotFound { id: id.to_string() })
    }

    /// Look up an entity by identifier
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Check if an identifier is present
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the repository is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Repository<T> {
    /// Snapshot of all stored entities.
    ///
    /// The sequence order is unspecified: the store is backed by a hash
    /// map and callers must not rely on any particular ordering.
    pub fn find_all(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }
}

/// Repository of shared product references, keyed by product id
pub type ProductRepository = Repository<Arc<Product>>;

/// Repository of shared customer references, keyed by customer id
pub type CustomerRepository = Repository<Arc<Customer>>;

/// Repository of orders, keyed by order id
pub type OrderRepository = Repository<Order>;

impl ProductRepository {
    /// Product store keyed by `Product::id`
    pub fn products() -> Self {
        Repository::new(|p: &Arc<Product>| p.id().to_string())
    }
}

impl CustomerRepository {
    /// Customer store keyed by `Customer::id`
    pub fn customers() -> Self {
        Repository::new(|c: &Arc<Customer>| c.id().to_string())
    }
}

impl OrderRepository {
    /// Order store keyed by `Order::id`
    pub fn orders() -> Self {
        Repository::new(|o: &Order| o.id().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_products() -> Vec<Arc<Product>> {
        vec![
            Arc::new(Product::book("B1", "Java Programming", 100.0, "James Gosling").unwrap()),
            Arc::new(Product::phone("P1", "iPhone 13", 2000.0, "Apple").unwrap()),
            Arc::new(Product::laptop("L1", "Macbook Pro", 3000.0, "Apple").unwrap()),
        ]
    }

    #[test]
    fn test_add_then_find_all_yields_exactly_the_entity() {
        let mut repo = CustomerRepository::customers();
        let c = Arc::new(Customer::new("C1", "Nguyễn Văn A"));
        repo.add(Arc::clone(&c)).unwrap();

        let all = repo.find_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].as_ref(), c.as_ref());
    }

    #[test]
    fn test_find_all_returns_every_stored_product() {
        let mut repo = ProductRepository::products();
        for p in sample_products() {
            repo.add(p).unwrap();
        }

        let mut ids: Vec<String> = repo
            .find_all()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["B1", "L1", "P1"]);
    }

    #[test]
    fn test_duplicate_add_fails_and_keeps_first_value() {
        let mut repo = ProductRepository::products();
        let first = Arc::new(Product::book("B1", "Java Programming", 100.0, "James Gosling").unwrap());
        let second = Arc::new(Product::book("B1", "Another Book", 50.0, "Someone Else").unwrap());

        repo.add(Arc::clone(&first)).unwrap();
        let err = repo.add(second).unwrap_err();
        assert_eq!(err, ShopError::DuplicateId { id: "B1".into() });

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("B1").unwrap().name(), "Java Programming");
    }

    #[test]
    fn test_update_replaces_present_value() {
        let mut repo = ProductRepository::products();
        repo.add(Arc::new(
            Product::phone("P1", "iPhone 13", 2000.0, "Apple").unwrap(),
        ))
        .unwrap();

        repo.update(Arc::new(
            Product::phone("P1", "iPhone 13 Pro", 2500.0, "Apple").unwrap(),
        ))
        .unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("P1").unwrap().price(), 2500.0);
    }

    #[test]
    fn test_update_absent_id_fails_and_leaves_store_unchanged() {
        let mut repo = ProductRepository::products();
        let err = repo
            .update(Arc::new(
                Product::phone("P9", "Ghost Phone", 1.0, "Nobody").unwrap(),
            ))
            .unwrap_err();
        assert_eq!(err, ShopError::NotFound { id: "P9".into() });
        assert!(repo.is_empty());
    }

    #[test]
    fn test_delete_returns_removed_entity() {
        let mut repo = ProductRepository::products();
        repo.add(Arc::new(
            Product::laptop("L1", "Macbook Pro", 3000.0, "Apple").unwrap(),
        ))
        .unwrap();

        let removed = repo.delete("L1").unwrap();
        assert_eq!(removed.name(), "Macbook Pro");
        assert!(!repo.contains("L1"));
    }

    #[test]
    fn test_delete_absent_id_fails_and_leaves_store_unchanged() {
        let mut repo = ProductRepository::products();
        repo.add(Arc::new(
            Product::book("B1", "Java Programming", 100.0, "James Gosling").unwrap(),
        ))
        .unwrap();

        let err = repo.delete("B9").unwrap_err();
        assert_eq!(err, ShopError::NotFound { id: "B9".into() });
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_order_repository_keys_by_order_id() {
        let mut repo = OrderRepository::orders();
        let customer = Arc::new(Customer::new("C1", "Nguyễn Văn A"));
        repo.add(Order::new("O1", Arc::clone(&customer))).unwrap();

        assert!(repo.contains("O1"));
        let err = repo.add(Order::new("O1", customer)).unwrap_err();
        assert_eq!(err, ShopError::DuplicateId { id: "O1".into() });
    }
}
