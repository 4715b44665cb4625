//! # Product Types
//!
//! The product catalog for mini-shop: books, phones, and laptops.
//! The variant set is closed, so products are a tagged sum dispatched by
//! pattern matching rather than a trait-object hierarchy.

use crate::error::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};

/// The concrete product category and its variant-specific attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ProductKind {
    /// A book, credited to its author
    Book { author: String },
    /// A phone, sold under a brand
    Phone { brand: String },
    /// A laptop, sold under a brand. Laptops never refund.
    Laptop { brand: String },
}

impl ProductKind {
    /// Category label used in display output
    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Book { .. } => "Book",
            ProductKind::Phone { .. } => "Phone",
            ProductKind::Laptop { .. } => "Laptop",
        }
    }
}

/// A product in the shop.
///
/// Immutable after construction; the price invariant (`price >= 0`) is
/// enforced by the constructors, so a `Product` with a negative price
/// cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        kind: ProductKind,
    ) -> ShopResult<Self> {
        if price < 0.0 {
            return Err(ShopError::InvalidPrice { price });
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
            kind,
        })
    }

    /// Create a book. Fails with `InvalidPrice` when `price < 0`.
    pub fn book(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        author: impl Into<String>,
    ) -> ShopResult<Self> {
        Self::new(id, name, price, ProductKind::Book { author: author.into() })
    }

    /// Create a phone. Fails with `InvalidPrice` when `price < 0`.
    pub fn phone(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        brand: impl Into<String>,
    ) -> ShopResult<Self> {
        Self::new(id, name, price, ProductKind::Phone { brand: brand.into() })
    }

    /// Create a laptop. Fails with `InvalidPrice` when `price < 0`.
    pub fn laptop(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        brand: impl Into<String>,
    ) -> ShopResult<Self> {
        Self::new(id, name, price, ProductKind::Laptop { brand: brand.into() })
    }

    /// Unique product identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price (non-negative)
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Category and variant-specific attribute
    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let attr = match &self.kind {
            ProductKind::Book { author } => format!("author='{author}'"),
            ProductKind::Phone { brand } | ProductKind::Laptop { brand } => {
                format!("brand='{brand}'")
            }
        };
        write!(
            f,
            "{}{{id='{}', name='{}', price={}, {}}}",
            self.kind.label(),
            self.id,
            self.name,
            self.price,
            attr
        )
    }
}

/// Capability: the entity can produce a delivery notice.
///
/// Delivery never fails; it only describes the shipment.
pub trait Deliverable {
    /// Human-readable delivery notice
    fn deliver(&self) -> String;
}

/// Capability: the entity can attempt a refund, which may be rejected.
pub trait Refundable {
    /// Refund notice on success, `NonRefundable` when the category
    /// never refunds.
    fn refund(&self) -> ShopResult<String>;
}

impl Deliverable for Product {
    fn deliver(&self) -> String {
        match &self.kind {
            ProductKind::Book { author } => {
                format!("Giao sách: {} của tác giả {}", self.name, author)
            }
            ProductKind::Phone { brand } => {
                format!("Giao điện thoại: {}, hãng: {}", self.name, brand)
            }
            ProductKind::Laptop { brand } => {
                format!("Giao laptop: {}, hãng: {}", self.name, brand)
            }
        }
    }
}

impl Refundable for Product {
    fn refund(&self) -> ShopResult<String> {
        match &self.kind {
            ProductKind::Book { .. } => Ok(format!("Hoàn tiền sách: {}", self.name)),
            ProductKind::Phone { .. } => Ok(format!("Hoàn tiền điện thoại: {}", self.name)),
            // Laptops are modeled as a category that never refunds,
            // regardless of any other condition.
            ProductKind::Laptop { .. } => Err(ShopError::NonRefundable {
                name: self.name.clone(),
            }),
        }
    }
}
