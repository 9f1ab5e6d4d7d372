//! Items

use rust_decimal::Decimal;
use thiserror::Error;

use crate::products::Product;

/// Errors raised while building order items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// Quantity was zero or negative.
    #[error("quantity must be greater than 0, got {0}")]
    InvalidQuantity(i64),
}

/// A single line of a purchase request
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrderItem<'a> {
    product: &'a Product,
    quantity: u64,
}

impl<'a> OrderItem<'a> {
    /// Creates a new order item for `quantity` units of `product`.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::InvalidQuantity`] if `quantity` is not strictly positive.
    pub fn new(product: &'a Product, quantity: i64) -> Result<Self, ItemError> {
        match u64::try_from(quantity) {
            Ok(quantity) if quantity > 0 => Ok(Self { product, quantity }),
            _ => Err(ItemError::InvalidQuantity(quantity)),
        }
    }

    /// Returns the product on this line
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Returns the purchased quantity
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the undiscounted price of the line (unit price times quantity)
    pub fn line_total(&self) -> Decimal {
        self.product.price() * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product() -> Product {
        Product::new("Pen", Decimal::new(2_50, 2))
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let product = product();

        assert_eq!(
            OrderItem::new(&product, 0),
            Err(ItemError::InvalidQuantity(0))
        );
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let product = product();

        assert_eq!(
            OrderItem::new(&product, -3),
            Err(ItemError::InvalidQuantity(-3))
        );
    }

    #[test]
    fn positive_quantity_is_accepted() -> TestResult {
        let product = product();
        let item = OrderItem::new(&product, 1)?;

        assert_eq!(item.quantity(), 1);
        assert_eq!(item.product().name(), "Pen");

        Ok(())
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() -> TestResult {
        let product = product();
        let item = OrderItem::new(&product, 4)?;

        assert_eq!(item.line_total(), Decimal::from(10));

        Ok(())
    }

    #[test]
    fn invalid_quantity_message_names_the_value() {
        let message = ItemError::InvalidQuantity(-1).to_string();

        assert_eq!(message, "quantity must be greater than 0, got -1");
    }
}
