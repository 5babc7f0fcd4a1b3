use serde::{Deserialize, Serialize};

use quickbill_core::ValueObject;

use crate::line::InvoiceLine;

/// VAT multiplier applied when the caller does not supply one (21%).
pub const DEFAULT_VAT: f64 = 1.21;

/// A named bill to a customer aggregating an ordered sequence of lines.
///
/// `name`, `customer`, and `vat` are opaque to the domain: the caller is
/// trusted with them and no validation is applied. The totals are derived
/// from the current line state on every read, so requantifying a line
/// through its validated setter is reflected immediately — there is no
/// cached snapshot to go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    name: String,
    customer: String,
    vat: f64,
    lines: Vec<InvoiceLine>,
}

impl Invoice {
    /// Construct with [`DEFAULT_VAT`]. Never fails; the line list may be
    /// empty, yielding a zero amount.
    pub fn new(
        name: impl Into<String>,
        customer: impl Into<String>,
        lines: Vec<InvoiceLine>,
    ) -> Self {
        Self::with_vat(name, customer, lines, DEFAULT_VAT)
    }

    /// Construct with an explicit VAT multiplier.
    pub fn with_vat(
        name: impl Into<String>,
        customer: impl Into<String>,
        lines: Vec<InvoiceLine>,
        vat: f64,
    ) -> Self {
        Self {
            name: name.into(),
            customer: customer.into(),
            vat,
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn vat(&self) -> f64 {
        self.vat
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Mutable access to the existing lines, e.g. to requantify one through
    /// its validated setter. A slice is handed out rather than the `Vec` so
    /// the line list itself stays fixed.
    pub fn lines_mut(&mut self) -> &mut [InvoiceLine] {
        &mut self.lines
    }

    /// Derived: sum of line amounts, folded left to right in insertion
    /// order for reproducibility.
    pub fn amount(&self) -> f64 {
        self.lines.iter().fold(0.0, |total, line| total + line.amount())
    }

    /// Derived: `amount × vat`.
    pub fn total_amount(&self) -> f64 {
        self.amount() * self.vat
    }
}

impl ValueObject for Invoice {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use quickbill_products::Product;

    fn line(name: &str, price: f64, quantity: f64) -> InvoiceLine {
        let product = Arc::new(Product::new(name, price).unwrap());
        InvoiceLine::new(product, quantity).unwrap()
    }

    #[test]
    fn single_line_invoice_totals() {
        let invoice = Invoice::with_vat(
            "INV-2018/0001",
            "Manfred",
            vec![line("iPhone", 1000.0, 2.0)],
            1.20,
        );

        assert!(invoice.name().starts_with("INV-2018/"));
        assert_eq!(invoice.customer(), "Manfred");
        assert_eq!(invoice.amount(), 2000.0);
        assert_eq!(invoice.total_amount(), 2400.0);
    }

    #[test]
    fn vat_defaults_to_21_percent() {
        let invoice = Invoice::new("INV-2018/0002", "Stephane", vec![]);
        assert_eq!(invoice.vat(), DEFAULT_VAT);
    }

    #[test]
    fn empty_invoice_amounts_to_zero() {
        let invoice = Invoice::new("INV-2018/0003", "Stephane", vec![]);
        assert_eq!(invoice.amount(), 0.0);
        assert_eq!(invoice.total_amount(), 0.0);
    }

    #[test]
    fn amount_sums_lines_in_insertion_order() {
        let invoice = Invoice::new(
            "INV-2018/0004",
            "Stephane",
            vec![
                line("iPhone", 1000.0, 2.0),
                line("Case", 25.0, 4.0),
                line("Cable", 10.0, 1.0),
            ],
        );

        assert_eq!(invoice.lines().len(), 3);
        assert_eq!(invoice.lines()[1].product().name(), "Case");
        assert_eq!(invoice.amount(), 2000.0 + 100.0 + 10.0);
    }

    #[test]
    fn amount_is_live_after_line_mutation() {
        let mut invoice = Invoice::with_vat(
            "INV-2018/0005",
            "Manfred",
            vec![line("iPhone", 1000.0, 2.0)],
            1.20,
        );
        assert_eq!(invoice.amount(), 2000.0);

        invoice.lines_mut()[0].set_quantity(5.0).unwrap();
        assert_eq!(invoice.amount(), 5000.0);
        assert_eq!(invoice.total_amount(), 6000.0);

        // A rejected requantification changes nothing.
        assert!(invoice.lines_mut()[0].set_quantity(-1.0).is_err());
        assert_eq!(invoice.amount(), 5000.0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the invoice amount equals the left-to-right sum of
            /// its line amounts, and the total applies the VAT multiplier to
            /// exactly that sum.
            #[test]
            fn amount_equals_sum_of_line_amounts(
                quantities in proptest::collection::vec(0.01f64..100.0, 0..8),
                vat in 1.0f64..2.0
            ) {
                let lines: Vec<InvoiceLine> = quantities
                    .iter()
                    .map(|&q| line("Widget", 19.99, q))
                    .collect();
                let invoice =
                    Invoice::with_vat("INV-2018/0100", "Stephane", lines, vat);

                let expected = invoice
                    .lines()
                    .iter()
                    .fold(0.0, |total, l| total + l.amount());
                prop_assert_eq!(invoice.amount(), expected);
                prop_assert_eq!(invoice.total_amount(), expected * vat);
            }
        }
    }
}
