//! # Payment Strategies
//!
//! Strategy pattern for payment methods. Each method computes the order
//! total and produces a confirmation notice; none of them validates
//! funds or mutates the order.

use crate::order::Order;
use std::collections::HashMap;
use std::sync::Arc;

/// Core trait for payment method implementations.
///
/// Each method (credit card, PayPal, cash, MoMo) implements this trait,
/// allowing callers to switch methods without knowing the concrete
/// variant.
pub trait PaymentStrategy: Send + Sync {
    /// Charge the order's total and return the confirmation notice
    fn pay(&self, order: &Order) -> String;

    /// Get the method name (for logging and registry lookup)
    fn method_name(&self) -> &'static str;
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;

/// Credit card payment
pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, order: &Order) -> String {
        format!("Thanh toán bằng Credit Card: {}", order.total())
    }

    fn method_name(&self) -> &'static str {
        "credit_card"
    }
}

/// PayPal payment
pub struct PaypalPayment;

impl PaymentStrategy for PaypalPayment {
    fn pay(&self, order: &Order) -> String {
        format!("Thanh toán bằng PayPal: {}", order.total())
    }

    fn method_name(&self) -> &'static str {
        "paypal"
    }
}

/// Cash payment
pub struct CashPayment;

impl PaymentStrategy for CashPayment {
    fn pay(&self, order: &Order) -> String {
        format!("Thanh toán tiền mặt: {}", order.total())
    }

    fn method_name(&self) -> &'static str {
        "cash"
    }
}

/// MoMo mobile-wallet payment
pub struct MomoPayment;

impl PaymentStrategy for MomoPayment {
    fn pay(&self, order: &Order) -> String {
        format!("Thanh toán MoMo: {}", order.total())
    }

    fn method_name(&self) -> &'static str {
        "momo"
    }
}

/// Strategy selector for multiple payment methods
#[derive(Clone)]
pub struct PaymentStrategySelector {
    strategies: HashMap<String, BoxedPaymentStrategy>,
    default_method: String,
}

impl PaymentStrategySelector {
    /// Create an empty selector with a default method
    pub fn new(default_method: impl Into<String>) -> Self {
        Self {
            strategies: HashMap::new(),
            default_method: default_method.into(),
        }
    }

    /// Register a payment strategy under its method name
    pub fn register(&mut self, strategy: BoxedPaymentStrategy) {
        let name = strategy.method_name().to_string();
        self.strategies.insert(name, strategy);
    }

    /// Register with builder pattern
    pub fn with_strategy(mut self, strategy: BoxedPaymentStrategy) -> Self {
        self.register(strategy);
        self
    }

    /// Get the default strategy
    pub fn default_strategy(&self) -> Option<&BoxedPaymentStrategy> {
        self.strategies.get(&self.default_method)
    }

    /// Get a strategy by method name
    pub fn get(&self, method: &str) -> Option<&BoxedPaymentStrategy> {
        self.strategies.get(method)
    }

    /// List all registered method names
    pub fn methods(&self) -> Vec<&str> {
        self.strategies.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a method is registered
    pub fn has_method(&self, method: &str) -> bool {
        self.strategies.contains_key(method)
    }
}

impl Default for PaymentStrategySelector {
    fn default() -> Self {
        Self::new("credit_card")
    }
}
