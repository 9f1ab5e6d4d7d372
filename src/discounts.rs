//! Discount utilities
//!
//! Shared helpers for percentage-based discount calculations.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

/// Convert a rate expressed in percent points (`10` for 10%) to a [`Percentage`].
pub fn percentage_from_points(points: Decimal) -> Percentage {
    Percentage::from(points / Decimal::ONE_HUNDRED)
}

/// Calculate `percent` of `amount`.
///
/// The result is left unrounded; amounts are plain decimals rather than minor units.
pub fn percent_of(percent: Percentage, amount: Decimal) -> Decimal {
    percent * amount
}
