//! # shop-core
//!
//! Core domain types for the mini-shop demo.
//!
//! This crate provides:
//! - `Product` and `ProductKind` for the product catalog, with the
//!   `Deliverable` and `Refundable` capabilities
//! - `Customer` and `Order` for the ordering flow
//! - `PaymentStrategy` trait with four interchangeable methods
//! - `Repository<T>` generic in-memory keyed store
//! - `ShopError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use shop_core::{Order, Customer, Product, ProductRepository, Refundable};
//! use std::sync::Arc;
//!
//! let mut products = ProductRepository::products();
//! let book = Arc::new(Product::book("B1", "Java Programming", 100.0, "James Gosling")?);
//! products.add(Arc::clone(&book))?;
//!
//! let customer = Arc::new(Customer::new("C1", "Nguyễn Văn A"));
//! let mut order = Order::new("O1", customer);
//! order.add_product(book);
//! assert_eq!(order.total(), 100.0);
//! # Ok::<(), shop_core::ShopError>(())
//! ```

pub mod customer;
pub mod error;
pub mod order;
pub mod payment;
pub mod product;
pub mod repository;

// Re-exports for convenience
pub use customer::Customer;
pub use error::{ShopError, ShopResult};
pub use order::Order;
pub use payment::{
    BoxedPaymentStrategy, CashPayment, CreditCardPayment, MomoPayment, PaymentStrategy,
    PaymentStrategySelector, PaypalPayment,
};
pub use product::{Deliverable, Product, ProductKind, Refundable};
pub use repository::{CustomerRepository, OrderRepository, ProductRepository, Repository};
