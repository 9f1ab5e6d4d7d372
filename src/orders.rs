//! Orders
//!
//! The priced result of a checkout. An [`Order`] starts from the subtotal pass
//! over the submitted items and is then threaded by value through the promotion
//! pipeline; each transition consumes the order and returns the updated one.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{items::OrderItem, pricing::total_price};

/// A priced order
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    items: Vec<OrderItem<'a>>,
    received_items: FxHashMap<String, u64>,
    original_amount: Decimal,
    discount: Decimal,
}

impl<'a> Order<'a> {
    /// Run the subtotal pass over `items`.
    ///
    /// Received quantities are keyed by product name. When the same name
    /// appears on more than one line the later line overwrites the earlier one;
    /// quantities are not merged.
    pub fn from_items(items: impl Into<Vec<OrderItem<'a>>>) -> Self {
        let items = items.into();

        let mut received_items = FxHashMap::default();

        for item in &items {
            received_items.insert(item.product().name().to_string(), item.quantity());
        }

        Self {
            original_amount: total_price(&items),
            discount: Decimal::ZERO,
            received_items,
            items,
        }
    }

    /// Grant `units` free units of the named product.
    #[must_use]
    pub fn with_bonus_units(mut self, name: &str, units: u64) -> Self {
        if let Some(quantity) = self.received_items.get_mut(name) {
            *quantity += units;
        } else {
            self.received_items.insert(name.to_string(), units);
        }

        self
    }

    /// Replace the order discount with `discount`.
    #[must_use]
    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    /// Add `discount` on top of the current order discount.
    #[must_use]
    pub fn with_additional_discount(mut self, discount: Decimal) -> Self {
        self.discount += discount;
        self
    }

    /// Items as submitted, in order
    pub fn items(&self) -> &[OrderItem<'a>] {
        &self.items
    }

    /// Quantity received per product name, including bonus units
    pub fn received_items(&self) -> &FxHashMap<String, u64> {
        &self.received_items
    }

    /// Quantity received of the named product, including bonus units
    pub fn received_quantity(&self, name: &str) -> Option<u64> {
        self.received_items.get(name).copied()
    }

    /// Subtotal before any discount
    pub fn original_amount(&self) -> Decimal {
        self.original_amount
    }

    /// Total discount applied
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Amount payable: the subtotal less the discount
    pub fn total_amount(&self) -> Decimal {
        self.original_amount - self.discount
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    #[test]
    fn from_items_computes_subtotal_and_received_items() -> TestResult {
        let soap = Product::new("Soap", Decimal::from(3));
        let towel = Product::new("Towel", Decimal::from(10));

        let order = Order::from_items([OrderItem::new(&soap, 2)?, OrderItem::new(&towel, 1)?]);

        assert_eq!(order.original_amount(), Decimal::from(16));
        assert_eq!(order.discount(), Decimal::ZERO);
        assert_eq!(order.total_amount(), Decimal::from(16));
        assert_eq!(order.received_quantity("Soap"), Some(2));
        assert_eq!(order.received_quantity("Towel"), Some(1));
        assert_eq!(order.items().len(), 2);

        Ok(())
    }

    #[test]
    fn duplicate_lines_overwrite_received_quantity() -> TestResult {
        let soap = Product::new("Soap", Decimal::from(3));

        let order = Order::from_items([OrderItem::new(&soap, 2)?, OrderItem::new(&soap, 5)?]);

        assert_eq!(order.received_quantity("Soap"), Some(5));
        assert_eq!(order.received_items().len(), 1);
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.original_amount(), Decimal::from(21));

        Ok(())
    }

    #[test]
    fn empty_order_is_free() {
        let order = Order::from_items(Vec::<OrderItem<'_>>::new());

        assert_eq!(order.original_amount(), Decimal::ZERO);
        assert_eq!(order.total_amount(), Decimal::ZERO);
        assert!(order.received_items().is_empty());
    }

    #[test]
    fn with_discount_overwrites_and_additional_discount_adds() -> TestResult {
        let soap = Product::new("Soap", Decimal::from(100));
        let order = Order::from_items([OrderItem::new(&soap, 1)?]);

        let order = order
            .with_additional_discount(Decimal::from(5))
            .with_discount(Decimal::from(20))
            .with_additional_discount(Decimal::from(7));

        assert_eq!(order.discount(), Decimal::from(27));
        assert_eq!(order.total_amount(), Decimal::from(73));

        Ok(())
    }

    #[test]
    fn with_bonus_units_increments_received_quantity() -> TestResult {
        let soap = Product::new("Soap", Decimal::from(3));
        let order = Order::from_items([OrderItem::new(&soap, 4)?]);

        let order = order.with_bonus_units("Soap", 1);

        assert_eq!(order.received_quantity("Soap"), Some(5));
        assert_eq!(order.original_amount(), Decimal::from(12));
        assert_eq!(order.discount(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn with_bonus_units_for_unlisted_product_adds_entry() {
        let order = Order::from_items(Vec::<OrderItem<'_>>::new()).with_bonus_units("Sample", 2);

        assert_eq!(order.received_quantity("Sample"), Some(2));
    }
}
