//! Promotion extension prelude.
//!
//! Use this when implementing custom promotion types.

pub use crate::{
    orders::Order,
    promotions::{OrderPromotion, apply_in_order},
};
