//! Taquilla prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    admin::{AdminCommand, AdminState, AdminStore, apply as apply_admin},
    auth::{AuthError, Authenticator, StaticCredentials},
    cart::{
        Cart, CartCommand, CartItem, MediaKind, PaymentMethod, SeasonSelection,
        apply as apply_cart,
    },
    catalog::{DeliveryZone, Novel, NovelStatus},
    checkout::{
        CheckoutError, CustomerInfo, Order, OrderLine, OrderSink, assemble_order, confirm,
        validate,
    },
    config::{ConfigError, PriceConfig},
    fixtures::{FixtureError, Seed},
    pricing::{PricingError, cart_total, item_price, total_by_payment},
    receipt::{ReceiptError, write_to},
    session::{AdminSession, Storefront, SystemPort},
};
