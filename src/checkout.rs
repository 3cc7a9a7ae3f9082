//! Checkout flow: order assembly, form validation, submission hand-off

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::{Cart, MediaKind},
    config::PriceConfig,
    pricing::{PricingError, item_price},
};

/// Customer-entered delivery details. All four fields are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// Customer name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Street address within the delivery zone.
    pub address: String,

    /// Selected delivery zone name.
    pub delivery_zone: String,
}

/// One line of an assembled order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Item title.
    pub title: String,

    /// Catalog kind.
    #[serde(rename = "type")]
    pub kind: MediaKind,

    /// Derived price at assembly time, in whole pesos.
    pub price: i64,

    /// Always 1; each cart entry is a single copy.
    pub quantity: u32,
}

/// A fully assembled order, ready for an external submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// One line per cart item, in cart order.
    pub lines: Vec<OrderLine>,

    /// Sum of line prices.
    pub subtotal: i64,

    /// Flat delivery fee for the selected zone.
    pub delivery_fee: i64,

    /// `subtotal + delivery_fee`.
    pub total: i64,
}

/// Errors surfaced by the checkout flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// One or more required fields were blank; messages keyed by field name.
    #[error("{} required field(s) missing", .0.len())]
    Validation(FxHashMap<&'static str, String>),

    /// Price derivation failed while assembling the order.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// External submission collaborator.
///
/// The real storefront forwards the order to a messaging channel; from this
/// core's perspective submission is opaque and fire-and-forget.
pub trait OrderSink {
    /// Receive a validated order.
    fn submit(&mut self, customer: &CustomerInfo, order: &Order);
}

/// Build an [`Order`] from the cart under the current configuration.
///
/// Prices are derived here, at assembly time, from the live config; the order
/// is a snapshot only once this function returns.
///
/// # Errors
///
/// Returns [`CheckoutError::Pricing`] when price derivation overflows.
pub fn assemble_order(
    cart: &Cart,
    config: &PriceConfig,
    delivery_fee: i64,
) -> Result<Order, CheckoutError> {
    let mut lines = Vec::with_capacity(cart.len());
    let mut subtotal = 0i64;

    for item in cart.items() {
        let price = item_price(item, config)?;

        subtotal = subtotal
            .checked_add(price)
            .ok_or(PricingError::AmountOverflow)?;

        lines.push(OrderLine {
            title: item.title.clone(),
            kind: item.kind,
            price,
            quantity: 1,
        });
    }

    let total = subtotal
        .checked_add(delivery_fee)
        .ok_or(PricingError::AmountOverflow)?;

    Ok(Order {
        lines,
        subtotal,
        delivery_fee,
        total,
    })
}

/// Check that every required customer field is non-blank after trimming.
///
/// # Errors
///
/// Returns [`CheckoutError::Validation`] carrying one message per blank field,
/// keyed by field name. Nothing is submitted on failure.
pub fn validate(customer: &CustomerInfo) -> Result<(), CheckoutError> {
    let mut errors = FxHashMap::default();

    if customer.name.trim().is_empty() {
        errors.insert("name", "Nombre es requerido".to_string());
    }
    if customer.phone.trim().is_empty() {
        errors.insert("phone", "Teléfono es requerido".to_string());
    }
    if customer.address.trim().is_empty() {
        errors.insert("address", "Dirección es requerida".to_string());
    }
    if customer.delivery_zone.trim().is_empty() {
        errors.insert("deliveryZone", "Zona de entrega es requerida".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CheckoutError::Validation(errors))
    }
}

/// Validate the customer details and hand the order to the sink.
///
/// Single synchronous validate-then-emit step; there is no retry or partial
/// submission.
///
/// # Errors
///
/// Returns [`CheckoutError::Validation`] when any required field is blank; the
/// sink is not called in that case.
pub fn confirm(
    customer: &CustomerInfo,
    order: &Order,
    sink: &mut dyn OrderSink,
) -> Result<(), CheckoutError> {
    validate(customer)?;
    sink.submit(customer, order);

    Ok(())
}
