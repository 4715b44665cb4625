//! # Customer Types
//!
//! Customers are plain identity records; orders reference them without
//! owning their lifecycle.

use serde::{Deserialize, Serialize};

/// A shop customer. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
}

impl Customer {
    /// Create a new customer
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Unique customer identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Customer{{id='{}', name='{}'}}", self.id, self.name)
    }
}
