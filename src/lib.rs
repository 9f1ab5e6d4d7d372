//! Lattice Checkout
//!
//! The pricing core of a checkout flow: prices a list of order items and applies
//! the configured promotions in a fixed sequence to produce a priced [`orders::Order`].

pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod promotions;
pub mod receipt;
pub mod service;
pub mod utils;
