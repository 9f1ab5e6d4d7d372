//! Prices

use rust_decimal::Decimal;

use crate::items::OrderItem;

/// Calculates the undiscounted total of a list of order items
pub fn total_price(items: &[OrderItem<'_>]) -> Decimal {
    items.iter().map(OrderItem::line_total).sum()
}
