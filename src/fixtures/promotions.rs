//! Promotion Fixtures

use serde::Deserialize;

use crate::{
    fixtures::{
        FixtureError,
        products::{parse_amount, parse_rate},
    },
    service::OrderService,
};

/// Promotion configuration from YAML
///
/// Every section is optional; missing sections leave the promotion disabled.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromotionsFixture {
    /// Flat discount once the subtotal reaches a threshold
    #[serde(default)]
    pub threshold_discount: Option<ThresholdDiscountFixture>,

    /// One free unit per cosmetics line
    #[serde(default)]
    pub buy_one_get_one_cosmetics: bool,

    /// Percentage off complete groups of units
    #[serde(default)]
    pub double11_bulk_discount: Option<BulkDiscountFixture>,
}

/// Threshold discount configuration
#[derive(Debug, Deserialize)]
pub struct ThresholdDiscountFixture {
    /// Minimum subtotal (e.g., "500")
    pub threshold: String,

    /// Amount taken off (e.g., "50")
    pub discount: String,
}

/// Bulk discount configuration
#[derive(Debug, Deserialize)]
pub struct BulkDiscountFixture {
    /// Units per group
    pub group_size: u32,

    /// Rate in percent points (e.g., "10" or "10%")
    pub discount_rate: String,
}

impl PromotionsFixture {
    /// Configure `service` with every promotion in this fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if an amount or rate cannot be parsed.
    pub fn configure(&self, service: &mut OrderService) -> Result<(), FixtureError> {
        if let Some(threshold) = &self.threshold_discount {
            service.set_threshold_discount(
                parse_amount(&threshold.threshold)?,
                parse_amount(&threshold.discount)?,
            );
        }

        service.set_buy_one_get_one_cosmetics(self.buy_one_get_one_cosmetics);

        if let Some(bulk) = &self.double11_bulk_discount {
            service.set_double11_bulk_discount(bulk.group_size, parse_rate(&bulk.discount_rate)?);
        }

        Ok(())
    }
}
