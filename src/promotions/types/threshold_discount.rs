//! Threshold Discount Promotion
//!
//! A flat amount off once the order subtotal reaches a threshold. The amount is
//! added on top of whatever discount the order already carries.

use rust_decimal::Decimal;

use crate::{orders::Order, promotions::OrderPromotion};

/// Flat discount unlocked by a minimum subtotal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdDiscount {
    threshold: Decimal,
    amount: Decimal,
}

impl ThresholdDiscount {
    /// Create a discount of `amount` for subtotals of at least `threshold`.
    pub fn new(threshold: Decimal, amount: Decimal) -> Self {
        Self { threshold, amount }
    }

    /// Return the subtotal threshold
    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Return the discount amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Return whether `subtotal` unlocks the discount.
    pub fn is_met_by(&self, subtotal: Decimal) -> bool {
        subtotal >= self.threshold
    }
}

impl OrderPromotion for ThresholdDiscount {
    fn name(&self) -> &'static str {
        "threshold_discount"
    }

    fn apply<'a>(&self, order: Order<'a>) -> Order<'a> {
        if self.is_met_by(order.original_amount()) {
            order.with_additional_discount(self.amount)
        } else {
            order
        }
    }
}
