//! Promotions
//!
//! Each promotion is a rule that takes a priced [`Order`] and returns the order
//! with the rule applied. Rules never consult each other directly; they only
//! interact through the order's subtotal and discount.

use std::fmt;

use tracing::debug;

use crate::orders::Order;

pub mod prelude;
pub mod types;

/// A promotion rule applied during checkout.
pub trait OrderPromotion: fmt::Debug {
    /// Stable name used in traces.
    fn name(&self) -> &'static str;

    /// Apply the promotion, returning the updated order.
    #[must_use]
    fn apply<'a>(&self, order: Order<'a>) -> Order<'a>;
}

/// Apply `promotions` to `order` in sequence.
pub fn apply_in_order<'a, 'p>(
    promotions: impl IntoIterator<Item = &'p dyn OrderPromotion>,
    order: Order<'a>,
) -> Order<'a> {
    promotions.into_iter().fold(order, |order, promotion| {
        let order = promotion.apply(order);

        debug!(
            promotion = promotion.name(),
            discount = %order.discount(),
            total_amount = %order.total_amount(),
            "applied promotion"
        );

        order
    })
}
