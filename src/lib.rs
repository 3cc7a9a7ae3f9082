//! Taquilla
//!
//! Taquilla is the core engine of a small video & novel storefront: an
//! admin-editable pricing configuration, catalog side-tables for delivery
//! zones and novels, a cart whose prices are always derived from the live
//! configuration, and a checkout flow that validates customer details and
//! hands assembled orders to an external submission sink.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod session;
pub mod utils;
