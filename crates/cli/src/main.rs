//! Self-check entry point.
//!
//! Thin wrapper around the domain crates: builds a known invoice, verifies
//! the computed amounts, and prints the result as JSON. Exits zero on
//! success; any failed check propagates out of `main` as a non-zero exit.

use std::sync::Arc;

use anyhow::{Context, ensure};

use quickbill_invoicing::{Invoice, InvoiceLine};
use quickbill_products::Product;

fn main() -> anyhow::Result<()> {
    quickbill_observability::init();

    let invoice = selfcheck()?;

    let rendered =
        serde_json::to_string_pretty(&invoice).context("rendering invoice as JSON")?;
    println!("{rendered}");

    tracing::info!("self-check passed");
    Ok(())
}

/// Runs the canonical scenario and checks every derived value.
fn selfcheck() -> anyhow::Result<Invoice> {
    let product = Arc::new(Product::new("iPhone", 1429.0)?);
    ensure!(product.name() == "iPhone");
    ensure!(product.price() == 1429.0);

    let line = InvoiceLine::new(Arc::clone(&product), 10.0)?;
    ensure!(line.quantity() == 10.0);
    ensure!(line.amount() == 10.0 * product.price());
    tracing::info!(amount = line.amount(), "invoice line computed");

    let invoice = Invoice::new("INV-2018/0001", "Stephane", vec![line]);
    ensure!(invoice.name() == "INV-2018/0001");
    ensure!(invoice.amount() == 14290.0);
    ensure!(invoice.total_amount() == invoice.amount() * 1.21);
    tracing::info!(
        total = invoice.total_amount(),
        customer = invoice.customer(),
        "invoice computed"
    );

    Ok(invoice)
}
