//! Bulk Discount Promotion
//!
//! A percentage discount on every complete group of `group_size` identical units
//! on a line. Units left over below one complete group are charged at full
//! price. The promotion replaces the order discount with its own total.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::{
    discounts::{percent_of, percentage_from_points},
    items::OrderItem,
    orders::Order,
    promotions::OrderPromotion,
};

/// Percentage off complete groups of units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkDiscount {
    group_size: u32,
    rate: Percentage,
}

impl BulkDiscount {
    /// Create a bulk discount of `discount_rate` percent points on complete groups of `group_size`.
    pub fn new(group_size: u32, discount_rate: Decimal) -> Self {
        Self {
            group_size,
            rate: percentage_from_points(discount_rate),
        }
    }

    /// Return the group size
    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// Return the discount rate
    pub fn rate(&self) -> Percentage {
        self.rate
    }

    /// Number of complete groups on a line. A group size of zero never forms a group.
    pub fn complete_groups(&self, item: &OrderItem<'_>) -> u64 {
        item.quantity()
            .checked_div(u64::from(self.group_size))
            .unwrap_or(0)
    }

    /// Discount earned by a single line.
    pub fn line_discount(&self, item: &OrderItem<'_>) -> Decimal {
        let groups = self.complete_groups(item);

        if groups == 0 {
            return Decimal::ZERO;
        }

        let discounted_units = Decimal::from(groups) * Decimal::from(self.group_size);

        percent_of(self.rate, discounted_units * item.product().price())
    }
}

impl OrderPromotion for BulkDiscount {
    fn name(&self) -> &'static str {
        "bulk_discount"
    }

    fn apply<'a>(&self, order: Order<'a>) -> Order<'a> {
        let total_discount: Decimal = order
            .items()
            .iter()
            .map(|item| self.line_discount(item))
            .sum();

        order.with_discount(total_discount)
    }
}
