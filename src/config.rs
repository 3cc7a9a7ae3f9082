//! Pricing configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a pricing configuration update is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A price field was negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativePrice {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// The transfer surcharge percentage was outside `[0, 100]`.
    #[error("transfer fee must be between 0 and 100 percent, got {0}")]
    TransferFeeOutOfRange(i64),
}

/// The four admin-configurable price parameters.
///
/// All amounts are whole pesos. Consumers read these at computation time and
/// never copy them into their own state, so an update is visible on the very
/// next price derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceConfig {
    /// Flat price for a movie.
    pub movie_price: i64,

    /// Price per selected season of a series.
    pub series_price_per_season: i64,

    /// Surcharge percentage applied to bank-transfer payments.
    pub transfer_fee_percent: i64,

    /// Price per chapter of a novel.
    pub novel_price_per_chapter: i64,
}

impl Default for PriceConfig {
    fn default() -> Self {
        PriceConfig {
            movie_price: 80,
            series_price_per_season: 300,
            transfer_fee_percent: 10,
            novel_price_per_chapter: 5,
        }
    }
}

impl PriceConfig {
    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first offending field if any price
    /// is negative or the transfer fee is outside `[0, 100]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prices = [
            ("movie price", self.movie_price),
            ("series price per season", self.series_price_per_season),
            ("novel price per chapter", self.novel_price_per_chapter),
        ];

        for (field, value) in prices {
            if value < 0 {
                return Err(ConfigError::NegativePrice { field, value });
            }
        }

        if !(0..=100).contains(&self.transfer_fee_percent) {
            return Err(ConfigError::TransferFeeOutOfRange(
                self.transfer_fee_percent,
            ));
        }

        Ok(())
    }
}
