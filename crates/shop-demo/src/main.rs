//! # Mini-Shop Demo
//!
//! Walks the whole domain once: builds the sample catalog, delivers and
//! refunds every product, pays one order with every registered payment
//! method, and demonstrates the two deliberate error paths
//! (`DuplicateId`, `InvalidPrice`).
//!
//! ## Usage
//!
//! ```bash
//! mini-shop
//! ```
//!
//! Output is a fixed sequence of Vietnamese status lines. The process
//! always exits 0; both deliberate errors are caught at the call site.

use shop_core::{
    CashPayment, CreditCardPayment, Customer, CustomerRepository, Deliverable, MomoPayment,
    Order, OrderRepository, PaymentStrategySelector, PaypalPayment, Product, ProductRepository,
    Refundable, ShopResult,
};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    // Both deliberate errors are handled inside the scenario; anything
    // that still comes out is unforeseen and only reported.
    if let Err(e) = run_scenario() {
        println!("Lỗi ngoài dự kiến: {e}");
    }

    Ok(())
}

/// The fixed demo sequence.
fn run_scenario() -> ShopResult<()> {
    let mut products = ProductRepository::products();
    let mut customers = CustomerRepository::customers();
    let mut orders = OrderRepository::orders();

    let b1 = Arc::new(Product::book("B1", "Java Programming", 100.0, "James Gosling")?);
    let p1 = Arc::new(Product::phone("P1", "iPhone 13", 2000.0, "Apple")?);
    let l1 = Arc::new(Product::laptop("L1", "Macbook Pro", 3000.0, "Apple")?);

    products.add(Arc::clone(&b1))?;
    products.add(Arc::clone(&p1))?;
    products.add(Arc::clone(&l1))?;
    info!(count = products.len(), "Products loaded");

    println!("\n=== DANH SÁCH SẢN PHẨM ===");
    for p in products.find_all() {
        println!("{p}");
    }

    println!("\n=== GIAO HÀNG ===");
    println!("{}", b1.deliver());
    println!("{}", p1.deliver());
    println!("{}", l1.deliver());

    println!("\n=== HOÀN TIỀN ===");
    println!("{}", b1.refund()?);
    println!("{}", p1.refund()?);

    // Laptops never refund; this failure is part of the demo.
    match l1.refund() {
        Ok(notice) => println!("{notice}"),
        Err(e) => println!("Lỗi hoàn tiền: {e}"),
    }

    let c1 = Arc::new(Customer::new("C1", "Nguyễn Văn A"));
    customers.add(Arc::clone(&c1))?;

    let mut order1 = Order::new("O1", c1);
    order1.add_product(Arc::clone(&b1));
    order1.add_product(Arc::clone(&p1));
    orders.add(order1.clone())?;

    println!("\n=== THANH TOÁN ===");
    let selector = PaymentStrategySelector::new("credit_card")
        .with_strategy(Arc::new(CreditCardPayment))
        .with_strategy(Arc::new(PaypalPayment))
        .with_strategy(Arc::new(CashPayment))
        .with_strategy(Arc::new(MomoPayment));
    info!(methods = ?selector.methods(), "Payment methods registered");

    for method in ["credit_card", "paypal", "cash", "momo"] {
        match selector.get(method) {
            Some(strategy) => println!("{}", strategy.pay(&order1)),
            None => warn!(method, "Payment method not registered"),
        }
    }

    println!("\n=== TEST LỖI DuplicateId ===");
    match products.add(Arc::clone(&b1)) {
        Ok(()) => println!("Thêm lại B1 thành công (không mong đợi)"),
        Err(e) => println!("{e}"),
    }

    println!("\n=== TEST LỖI InvalidPrice ===");
    match Product::book("B2", "Sách lỗi", -10.0, "Tác giả ẩn danh") {
        Ok(b2) => println!("Tạo {b2} thành công (không mong đợi)"),
        Err(e) => println!("{e}"),
    }

    match serde_json::to_string_pretty(&order1) {
        Ok(receipt) => info!(order = order1.id(), "Receipt:\n{receipt}"),
        Err(e) => info!(error = %e, "Receipt serialization failed"),
    }

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  🛒 Mini-Shop RS 🛒
  ━━━━━━━━━━━━━━━━━━
  OOP shop demo
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
