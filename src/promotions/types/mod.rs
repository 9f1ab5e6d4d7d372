//! Promotion Types

mod bulk_discount;
mod buy_one_get_one;
mod threshold_discount;

pub use bulk_discount::*;
pub use buy_one_get_one::*;
pub use threshold_discount::*;
