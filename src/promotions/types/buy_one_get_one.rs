//! Buy One Get One Promotion
//!
//! Grants a single free unit for every order line in a category. The bonus is
//! per line, not per unit: buying one or fifty units of a product yields the
//! same one extra unit. Amounts are untouched.

use crate::{items::OrderItem, orders::Order, products::Product, promotions::OrderPromotion};

/// Category tag the cosmetics promotion applies to.
pub const COSMETICS_CATEGORY: &str = "cosmetics";

/// One bonus unit per line of a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyOneGetOne {
    category: String,
}

impl BuyOneGetOne {
    /// Create a promotion for products whose category matches `category` exactly.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    /// Create the cosmetics promotion.
    pub fn cosmetics() -> Self {
        Self::new(COSMETICS_CATEGORY)
    }

    /// Return the category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Return whether `product` qualifies. Matching is exact and case-sensitive.
    pub fn is_applicable(&self, product: &Product) -> bool {
        product.category() == self.category
    }
}

impl OrderPromotion for BuyOneGetOne {
    fn name(&self) -> &'static str {
        "buy_one_get_one"
    }

    fn apply<'a>(&self, order: Order<'a>) -> Order<'a> {
        let qualifying: Vec<&'a Product> = order
            .items()
            .iter()
            .map(OrderItem::product)
            .filter(|product| self.is_applicable(product))
            .collect();

        qualifying
            .into_iter()
            .fold(order, |order, product| order.with_bonus_units(product.name(), 1))
    }
}
