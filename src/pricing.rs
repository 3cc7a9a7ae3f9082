//! Price derivation
//!
//! Every function here is a pure read of `(cart state, current config)`.
//! Nothing is cached: a configuration change is reflected by the very next
//! call with no cart mutation in between. Memoizing any of these values
//! without invalidating on config change would be a correctness bug, not an
//! optimisation.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

use crate::{
    cart::{Cart, CartItem, MediaKind, PaymentMethod},
    config::PriceConfig,
};

/// Errors that can occur while deriving a price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A surcharge or total could not be represented in whole pesos.
    #[error("price arithmetic overflowed")]
    AmountOverflow,
}

/// Price of a single cart item under the given configuration.
///
/// Base price is the flat movie price for movies, otherwise the per-season
/// series price times the billable season count (an empty selection bills as
/// one season). Transfer payments add the configured surcharge, rounded
/// half-away-from-zero — the same result the original storefront got from its
/// runtime's default rounding on non-negative amounts.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] when the surcharge arithmetic
/// cannot be represented in whole pesos.
pub fn item_price(item: &CartItem, config: &PriceConfig) -> Result<i64, PricingError> {
    let base = match item.kind {
        MediaKind::Movie => config.movie_price,
        MediaKind::Tv | MediaKind::Anime => i64::from(item.billable_seasons())
            .checked_mul(config.series_price_per_season)
            .ok_or(PricingError::AmountOverflow)?,
    };

    match item.payment {
        PaymentMethod::Cash => Ok(base),
        PaymentMethod::Transfer => {
            let fee = surcharge_on(base, config.transfer_fee_percent)?;

            base.checked_add(fee).ok_or(PricingError::AmountOverflow)
        }
    }
}

/// Sum of [`item_price`] over the whole cart, in insertion order.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] when any item price or the running
/// total overflows.
pub fn cart_total(cart: &Cart, config: &PriceConfig) -> Result<i64, PricingError> {
    cart.items().iter().try_fold(0i64, |acc, item| {
        acc.checked_add(item_price(item, config)?)
            .ok_or(PricingError::AmountOverflow)
    })
}

/// Sum of [`item_price`] over items paying with the given method.
///
/// Together with the other method's total this always reconstructs
/// [`cart_total`], since every item pays with exactly one of the two.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] when any item price or the running
/// total overflows.
pub fn total_by_payment(
    cart: &Cart,
    payment: PaymentMethod,
    config: &PriceConfig,
) -> Result<i64, PricingError> {
    cart.items()
        .iter()
        .filter(|item| item.payment == payment)
        .try_fold(0i64, |acc, item| {
            acc.checked_add(item_price(item, config)?)
                .ok_or(PricingError::AmountOverflow)
        })
}

/// Transfer surcharge on a base amount, in whole pesos.
///
/// `round(base × fee%)` with `MidpointAwayFromZero`. Since the base is an
/// integer, adding this to the base equals rounding `base × (1 + fee%)`
/// directly.
fn surcharge_on(base: i64, fee_percent: i64) -> Result<i64, PricingError> {
    let fee = Percentage::from(Decimal::from(fee_percent) / Decimal::from(100));

    (fee * Decimal::ONE)
        .checked_mul(Decimal::from(base))
        .ok_or(PricingError::AmountOverflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::AmountOverflow)
}
