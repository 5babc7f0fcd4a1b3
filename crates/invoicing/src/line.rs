use std::sync::Arc;

use serde::{Deserialize, Serialize};

use quickbill_core::{DomainError, DomainResult, ValueObject};
use quickbill_products::Product;

/// A quantity of a given product on an invoice.
///
/// The product is shared read-only; the quantity must stay strictly
/// positive, both at construction and through [`InvoiceLine::set_quantity`].
/// The line amount is derived on every read and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    product: Arc<Product>,
    quantity: f64,
}

impl InvoiceLine {
    pub fn new(product: Arc<Product>, quantity: f64) -> DomainResult<Self> {
        Self::check_quantity(quantity)?;
        Ok(Self { product, quantity })
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Replace the quantity.
    ///
    /// A non-positive (or NaN) value is rejected and the prior quantity is
    /// left untouched, so a failed update never produces partial state.
    pub fn set_quantity(&mut self, quantity: f64) -> DomainResult<()> {
        Self::check_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Derived: `quantity × unit price`, recomputed on every access.
    pub fn amount(&self) -> f64 {
        self.quantity * self.product.price()
    }

    fn check_quantity(quantity: f64) -> DomainResult<()> {
        if quantity.is_nan() || quantity <= 0.0 {
            return Err(DomainError::validation(
                "invoice line quantity must be positive",
            ));
        }
        Ok(())
    }
}

impl ValueObject for InvoiceLine {}
