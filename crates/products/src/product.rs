use serde::{Deserialize, Serialize};

use quickbill_core::{DomainError, DomainResult, ValueObject};

/// A named item with a unit price.
///
/// Immutable once constructed: the only way to obtain a `Product` is the
/// validated [`Product::new`] factory, and there are no mutators. Lines on an
/// invoice share the product read-only, so its price can never drift under
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
}

impl Product {
    /// Validated factory.
    ///
    /// The name is trimmed before it is stored; a name that is empty after
    /// trimming is rejected. The price must be strictly positive (a NaN
    /// price fails the same comparison).
    pub fn new(name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("product name must not be blank"));
        }
        if price.is_nan() || price <= 0.0 {
            return Err(DomainError::validation("product price must be positive"));
        }
        Ok(Self {
            name: trimmed.to_string(),
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl ValueObject for Product {}
