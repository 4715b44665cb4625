//! # Shop Error Types
//!
//! Typed error handling for the mini-shop domain.
//! All fallible operations return `Result<T, ShopError>`.

use thiserror::Error;

/// Core error type for all shop operations.
///
/// Display messages are the Vietnamese status lines the demo prints,
/// matching the original program's output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShopError {
    /// A product was constructed with a negative price
    #[error("Giá sản phẩm không hợp lệ: {price}")]
    InvalidPrice { price: f64 },

    /// A repository `add` hit an identifier that already exists
    #[error("ID đã tồn tại: {id}")]
    DuplicateId { id: String },

    /// A repository `update`/`delete` named an unknown identifier
    #[error("Không tìm thấy ID: {id}")]
    NotFound { id: String },

    /// A refund was requested for a product category that never refunds
    #[error("Laptop không hỗ trợ hoàn tiền: {name}")]
    NonRefundable { name: String },
}

impl ShopError {
    /// Short label for logging and error routing
    pub fn kind(&self) -> &'static str {
        match self {
            ShopError::InvalidPrice { .. } => "invalid_price",
            ShopError::DuplicateId { .. } => "duplicate_id",
            ShopError::NotFound { .. } => "not_found",
            ShopError::NonRefundable { .. } => "non_refundable",
        }
    }
}

/// Result type alias for shop operations
pub type ShopResult<T> = Result<T, ShopError>;
