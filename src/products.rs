//! Products

use rust_decimal::Decimal;

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Decimal,
    category: String,
}

impl Product {
    /// Create a new uncategorised product.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self::with_category(name, price, "")
    }

    /// Create a new product in the given category.
    pub fn with_category(
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Product name, unique within an order
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Free-text category tag, empty when uncategorised
    pub fn category(&self) -> &str {
        &self.category
    }
}
