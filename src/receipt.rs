//! Receipt

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{items::OrderItem, orders::Order};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Printable receipt for a checked out order.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'o, 'a> {
    order: &'o Order<'a>,
}

impl<'o, 'a> Receipt<'o, 'a> {
    /// Create a receipt for `order`.
    pub fn new(order: &'o Order<'a>) -> Self {
        Self { order }
    }

    /// Subtotal before discounts
    pub fn subtotal(&self) -> Decimal {
        self.order.original_amount()
    }

    /// Total discount
    pub fn savings(&self) -> Decimal {
        self.order.discount()
    }

    /// Amount payable
    pub fn total(&self) -> Decimal {
        self.order.total_amount()
    }

    /// Writes the receipt table and summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record([
            "",
            "Item",
            "Category",
            "Unit Price",
            "Qty",
            "Received",
            "Line Total",
        ]);

        for (idx, item) in self.order.items().iter().enumerate() {
            builder.push_record(self.item_row(idx, item));
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        self.write_summary(&mut out)
    }

    fn item_row(&self, idx: usize, item: &OrderItem<'_>) -> [String; 7] {
        let product = item.product();

        let received = self
            .order
            .received_quantity(product.name())
            .unwrap_or(item.quantity());

        [
            format!("#{:<3}", idx + 1),
            product.name().to_string(),
            product.category().to_string(),
            format!("{:.2}", product.price()),
            item.quantity().to_string(),
            received.to_string(),
            format!("{:.2}", item.line_total()),
        ]
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let lines = [
            (" Subtotal:", format!("{:.2}", self.subtotal())),
            (" Discount:", format!("-{:.2}", self.savings())),
            (" Total:", format!("{:.2}", self.total())),
        ];

        let value_width = lines
            .iter()
            .map(|(_, value)| value.len())
            .max()
            .unwrap_or_default();

        for (label, value) in lines {
            writeln!(out, "{label:<11}{value:>value_width$}").map_err(|_err| ReceiptError::IO)?;
        }

        writeln!(out).map_err(|_err| ReceiptError::IO)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{products::Product, service::OrderService};

    use super::*;

    #[test]
    fn write_to_renders_items_and_summary() -> TestResult {
        let lipstick = Product::with_category("Lipstick", Decimal::from(20), "cosmetics");
        let mug = Product::new("Mug", Decimal::from(100));

        let mut service = OrderService::new();
        service
            .set_buy_one_get_one_cosmetics(true)
            .set_double11_bulk_discount(3, Decimal::from(10));

        let order = service.checkout([OrderItem::new(&lipstick, 1)?, OrderItem::new(&mug, 3)?]);

        let mut out = Vec::new();
        Receipt::new(&order).write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Lipstick"));
        assert!(output.contains("cosmetics"));
        assert!(output.contains("Mug"));
        assert!(output.contains("Subtotal:"));
        assert!(output.contains("320.00"));
        assert!(output.contains("-30.00"));
        assert!(output.contains("290.00"));

        Ok(())
    }

    #[test]
    fn receipt_totals_follow_order() -> TestResult {
        let coat = Product::new("Coat", Decimal::from(600));

        let mut service = OrderService::new();
        service.set_threshold_discount(Decimal::from(500), Decimal::from(50));

        let order = service.checkout([OrderItem::new(&coat, 1)?]);
        let receipt = Receipt::new(&order);

        assert_eq!(receipt.subtotal(), Decimal::from(600));
        assert_eq!(receipt.savings(), Decimal::from(50));
        assert_eq!(receipt.total(), Decimal::from(550));

        Ok(())
    }
}
