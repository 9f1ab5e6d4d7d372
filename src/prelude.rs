//! Lattice Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    fixtures::{Fixture, FixtureError},
    items::{ItemError, OrderItem},
    orders::Order,
    products::Product,
    promotions::{
        OrderPromotion,
        types::{BulkDiscount, BuyOneGetOne, COSMETICS_CATEGORY, ThresholdDiscount},
    },
    receipt::{Receipt, ReceiptError},
    service::OrderService,
};
