//! Order Fixtures

use serde::Deserialize;

/// Wrapper for order lines in YAML
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order lines, in submission order
    pub items: Vec<LineFixture>,
}

/// A single order line
#[derive(Debug, Clone, Deserialize)]
pub struct LineFixture {
    /// Product key reference
    pub product: String,

    /// Purchased quantity; validated when the order item is built
    pub quantity: i64,
}
