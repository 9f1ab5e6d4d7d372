//! Product Fixtures

use std::str::FromStr;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{fixtures::FixtureError, products::Product};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit price (e.g., "19.99")
    pub price: String,

    /// Product category
    #[serde(default)]
    pub category: String,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_amount(&fixture.price)?;

        if price.is_sign_negative() {
            return Err(FixtureError::InvalidAmount(fixture.price));
        }

        Ok(Product::with_category(fixture.name, price, fixture.category))
    }
}

/// Parse an amount string (e.g., "19.99") into a `Decimal`
///
/// # Errors
///
/// Returns an error if the string is not a valid decimal number.
pub fn parse_amount(s: &str) -> Result<Decimal, FixtureError> {
    Decimal::from_str(s.trim()).map_err(|_err| FixtureError::InvalidAmount(s.to_string()))
}

/// Parse a rate string in percent points (e.g., "10" or "10%") into a `Decimal`
///
/// # Errors
///
/// Returns an error if the string cannot be parsed or is negative.
pub fn parse_rate(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();
    let points = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let rate =
        Decimal::from_str(points).map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?;

    if rate.is_sign_negative() {
        return Err(FixtureError::InvalidPercentage(s.to_string()));
    }

    Ok(rate)
}
