//! Order Service
//!
//! Holds the configured promotions and runs checkout. Rules are applied in a
//! fixed sequence:
//!
//! 1. [`BuyOneGetOne`] adds bonus units and never touches amounts.
//! 2. [`BulkDiscount`] replaces the order discount with its own total.
//! 3. [`ThresholdDiscount`] adds its amount on top of the discount so far.
//!
//! Configuration needs `&mut self` while checkout only needs `&self`, so a
//! configured service can be shared freely between callers.

use rust_decimal::Decimal;
use tracing::{Span, debug};

use crate::{
    items::OrderItem,
    orders::Order,
    promotions::{
        OrderPromotion, apply_in_order,
        types::{BulkDiscount, BuyOneGetOne, ThresholdDiscount},
    },
};

/// Promotion engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderService {
    threshold_discount: Option<ThresholdDiscount>,
    buy_one_get_one: Option<BuyOneGetOne>,
    bulk_discount: Option<BulkDiscount>,
}

impl OrderService {
    /// Create a service with no promotions configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take `discount` off orders whose subtotal reaches `threshold`.
    pub fn set_threshold_discount(&mut self, threshold: Decimal, discount: Decimal) -> &mut Self {
        debug!(%threshold, %discount, "configured threshold discount");

        self.threshold_discount = Some(ThresholdDiscount::new(threshold, discount));
        self
    }

    /// Enable or disable one free unit per cosmetics line.
    pub fn set_buy_one_get_one_cosmetics(&mut self, enabled: bool) -> &mut Self {
        debug!(enabled, "configured buy one get one cosmetics");

        self.buy_one_get_one = enabled.then(BuyOneGetOne::cosmetics);
        self
    }

    /// Take `discount_rate` percent off every complete group of `group_size` units.
    pub fn set_double11_bulk_discount(
        &mut self,
        group_size: u32,
        discount_rate: Decimal,
    ) -> &mut Self {
        debug!(group_size, %discount_rate, "configured double 11 bulk discount");

        self.bulk_discount = Some(BulkDiscount::new(group_size, discount_rate));
        self
    }

    /// Return the configured threshold discount
    pub fn threshold_discount(&self) -> Option<&ThresholdDiscount> {
        self.threshold_discount.as_ref()
    }

    /// Return the configured buy one get one promotion
    pub fn buy_one_get_one(&self) -> Option<&BuyOneGetOne> {
        self.buy_one_get_one.as_ref()
    }

    /// Return the configured bulk discount
    pub fn bulk_discount(&self) -> Option<&BulkDiscount> {
        self.bulk_discount.as_ref()
    }

    /// Configured promotions, in the order checkout applies them.
    pub fn promotions(&self) -> impl Iterator<Item = &dyn OrderPromotion> {
        let bonus = self
            .buy_one_get_one
            .as_ref()
            .map(|promotion| promotion as &dyn OrderPromotion);

        let bulk = self
            .bulk_discount
            .as_ref()
            .map(|promotion| promotion as &dyn OrderPromotion);

        let threshold = self
            .threshold_discount
            .as_ref()
            .map(|promotion| promotion as &dyn OrderPromotion);

        [bonus, bulk, threshold].into_iter().flatten()
    }

    /// Price `items` and apply every configured promotion.
    #[tracing::instrument(
        name = "orders.service.checkout",
        skip(self, items),
        fields(
            line_count = tracing::field::Empty,
            original_amount = tracing::field::Empty,
            discount = tracing::field::Empty,
            total_amount = tracing::field::Empty
        )
    )]
    pub fn checkout<'a>(&self, items: impl Into<Vec<OrderItem<'a>>>) -> Order<'a> {
        let order = Order::from_items(items);

        let span = Span::current();

        span.record("line_count", order.items().len());
        span.record(
            "original_amount",
            tracing::field::display(order.original_amount()),
        );

        let order = apply_in_order(self.promotions(), order);

        span.record("discount", tracing::field::display(order.discount()));
        span.record(
            "total_amount",
            tracing::field::display(order.total_amount()),
        );

        order
    }
}
