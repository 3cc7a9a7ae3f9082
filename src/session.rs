//! Storefront session: one coordinating service over both stores
//!
//! There are no ambient globals. A [`Storefront`] owns the admin store and the
//! cart for one running session, exposes read-only snapshots for rendering,
//! and funnels every mutation through the command types. Admin mutations
//! additionally require a live [`AdminSession`] obtained via
//! [`AdminSession::login`].

use rustc_hash::FxHashMap;

use crate::{
    admin::{AdminCommand, AdminState, AdminStore},
    auth::{AuthError, Authenticator},
    cart::{Cart, CartCommand, PaymentMethod},
    catalog::{DeliveryZone, Novel},
    checkout::{CheckoutError, CustomerInfo, Order, OrderSink, assemble_order, validate},
    config::{ConfigError, PriceConfig},
    fixtures::Seed,
    pricing::{PricingError, cart_total, total_by_payment},
};

/// Proof of a successful admin login.
///
/// Mutating admin operations require a reference to one of these; dropping it
/// ends the session.
#[derive(Debug)]
pub struct AdminSession {
    username: String,
}

impl AdminSession {
    /// Check credentials against the external authenticator and open an admin
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] when the credentials are not accepted.
    pub fn login(
        auth: &dyn Authenticator,
        username: &str,
        password: &str,
    ) -> Result<Self, AuthError> {
        if auth.authenticate(username, password) {
            Ok(AdminSession {
                username: username.to_string(),
            })
        } else {
            Err(AuthError::Rejected)
        }
    }

    /// Name the operator logged in with.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Opaque export/sync collaborator.
///
/// Both operations are fire-and-forget from the core's perspective; no
/// behavior is defined here.
pub trait SystemPort {
    /// Export the current system configuration.
    fn export_config(&mut self, state: &AdminState);

    /// Synchronize with a remote copy of the configuration.
    fn sync_remote(&mut self, state: &AdminState);
}

/// One storefront session: admin state plus the customer's cart.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    admin: AdminStore,
    cart: Cart,
}

impl Storefront {
    /// Start a session with default prices and empty tables.
    pub fn new() -> Self {
        Storefront::default()
    }

    /// Start a session from seed data.
    pub fn with_seed(seed: Seed) -> Self {
        Storefront {
            admin: AdminStore::with_state(seed.into()),
            cart: Cart::new(),
        }
    }

    /// Reinitialize everything: default prices, empty tables, empty cart.
    pub fn reset(&mut self) {
        self.admin.reset();
        self.cart = Cart::new();
    }

    // ---- admin side ----

    /// Run one admin command. Requires a live admin session.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a price update fails validation; the
    /// prior configuration is retained.
    pub fn admin_dispatch(
        &mut self,
        _session: &AdminSession,
        command: AdminCommand,
    ) -> Result<(), ConfigError> {
        self.admin.dispatch(command)
    }

    /// Hand the current admin state to an export collaborator.
    pub fn export_config(&self, port: &mut dyn SystemPort) {
        port.export_config(self.admin.state());
    }

    /// Hand the current admin state to a sync collaborator.
    pub fn sync_remote(&self, port: &mut dyn SystemPort) {
        port.sync_remote(self.admin.state());
    }

    // ---- read-only snapshots ----

    /// Current price configuration.
    pub fn config(&self) -> PriceConfig {
        self.admin.config()
    }

    /// Delivery zones, in insertion order.
    pub fn zones(&self) -> &[DeliveryZone] {
        self.admin.zones()
    }

    /// Novels, in insertion order.
    pub fn novels(&self) -> &[Novel] {
        self.admin.novels()
    }

    /// The customer's cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // ---- customer side ----

    /// Run one cart command.
    pub fn cart_dispatch(&mut self, command: CartCommand) {
        self.cart.dispatch(command);
    }

    /// Cart total under the current configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] when price arithmetic overflows.
    pub fn cart_total(&self) -> Result<i64, PricingError> {
        cart_total(&self.cart, &self.admin.config())
    }

    /// Cart total restricted to one payment method.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] when price arithmetic overflows.
    pub fn total_by_payment(&self, payment: PaymentMethod) -> Result<i64, PricingError> {
        total_by_payment(&self.cart, payment, &self.admin.config())
    }

    /// Delivery fee for an active zone with this name, if any.
    pub fn delivery_fee(&self, zone_name: &str) -> Option<i64> {
        self.admin
            .zones()
            .iter()
            .find(|zone| zone.active && zone.name == zone_name)
            .map(|zone| zone.cost)
    }

    /// Validate the customer details, assemble the order from the current
    /// cart, and hand it to the sink.
    ///
    /// The delivery fee comes from the zone named in `customer.delivery_zone`;
    /// a name that matches no active zone is reported the same way as a blank
    /// field, since the form only ever offers known zones.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Validation`] when a required field is blank or
    /// the zone is unknown (the sink is not called), or
    /// [`CheckoutError::Pricing`] when price derivation overflows.
    pub fn place_order(
        &self,
        customer: &CustomerInfo,
        sink: &mut dyn OrderSink,
    ) -> Result<Order, CheckoutError> {
        validate(customer)?;

        let Some(fee) = self.delivery_fee(&customer.delivery_zone) else {
            let mut errors = FxHashMap::default();
            errors.insert("deliveryZone", "Zona de entrega es requerida".to_string());

            return Err(CheckoutError::Validation(errors));
        };

        let order = assemble_order(&self.cart, &self.admin.config(), fee)?;

        sink.submit(customer, &order);

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        auth::StaticCredentials,
        cart::{CartItem, MediaKind},
        catalog::DeliveryZone,
    };

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingPort {
        exports: usize,
        syncs: usize,
    }

    impl SystemPort for RecordingPort {
        fn export_config(&mut self, _state: &AdminState) {
            self.exports += 1;
        }

        fn sync_remote(&mut self, _state: &AdminState) {
            self.syncs += 1;
        }
    }

    fn zone(name: &str, cost: i64, active: bool) -> DeliveryZone {
        DeliveryZone {
            id: name.to_string(),
            name: name.to_string(),
            cost,
            active,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn admin_mutation_requires_login() -> TestResult {
        let auth = StaticCredentials::new("admin", "s3cret");
        let mut store = Storefront::new();

        assert!(matches!(
            AdminSession::login(&auth, "admin", "wrong"),
            Err(AuthError::Rejected)
        ));

        let session = AdminSession::login(&auth, "admin", "s3cret")?;

        assert_eq!(session.username(), "admin");

        store.admin_dispatch(
            &session,
            AdminCommand::UpdatePrices(PriceConfig {
                movie_price: 100,
                ..store.config()
            }),
        )?;

        assert_eq!(store.config().movie_price, 100);

        Ok(())
    }

    #[test]
    fn price_update_is_visible_to_cart_totals_immediately() -> TestResult {
        let auth = StaticCredentials::new("admin", "s3cret");
        let mut store = Storefront::new();
        let session = AdminSession::login(&auth, "admin", "s3cret")?;

        store.cart_dispatch(CartCommand::Add(CartItem::new(
            "m1",
            "Some Movie",
            MediaKind::Movie,
        )));
        assert_eq!(store.cart_total()?, 80);

        store.admin_dispatch(
            &session,
            AdminCommand::UpdatePrices(PriceConfig {
                movie_price: 95,
                ..store.config()
            }),
        )?;

        // No cart mutation in between, only the config changed.
        assert_eq!(store.cart_total()?, 95);

        Ok(())
    }

    #[test]
    fn delivery_fee_ignores_inactive_zones() {
        let mut store = Storefront::new();
        store.admin = AdminStore::with_state(AdminState {
            zones: vec![zone("Vista Alegre", 350, false), zone("Centro", 150, true)],
            ..AdminState::default()
        });

        assert_eq!(store.delivery_fee("Vista Alegre"), None);
        assert_eq!(store.delivery_fee("Centro"), Some(150));
    }

    #[test]
    fn place_order_resolves_fee_and_submits() -> TestResult {
        #[derive(Debug, Default)]
        struct CountingSink(usize);

        impl OrderSink for CountingSink {
            fn submit(&mut self, _customer: &CustomerInfo, _order: &Order) {
                self.0 += 1;
            }
        }

        let mut store = Storefront::new();
        store.admin = AdminStore::with_state(AdminState {
            zones: vec![zone("Centro", 150, true)],
            ..AdminState::default()
        });
        store.cart_dispatch(CartCommand::Add(CartItem::new(
            "m1",
            "Some Movie",
            MediaKind::Movie,
        )));

        let customer = CustomerInfo {
            name: "Ana".to_string(),
            phone: "+53 5555 5555".to_string(),
            address: "Calle 4 #123".to_string(),
            delivery_zone: "Centro".to_string(),
        };

        let mut sink = CountingSink::default();
        let order = store.place_order(&customer, &mut sink)?;

        assert_eq!(order.subtotal, 80);
        assert_eq!(order.delivery_fee, 150);
        assert_eq!(order.total, 230);
        assert_eq!(sink.0, 1);

        let unknown_zone = CustomerInfo {
            delivery_zone: "Nowhere".to_string(),
            ..customer
        };

        assert!(matches!(
            store.place_order(&unknown_zone, &mut sink),
            Err(CheckoutError::Validation(_))
        ));
        assert_eq!(sink.0, 1, "sink must not see orders with unknown zones");

        Ok(())
    }

    #[test]
    fn reset_clears_cart_and_admin_state() -> TestResult {
        let auth = StaticCredentials::new("admin", "s3cret");
        let mut store = Storefront::new();
        let session = AdminSession::login(&auth, "admin", "s3cret")?;

        store.admin_dispatch(&session, AdminCommand::AddZone(zone("Centro", 150, true)))?;
        store.cart_dispatch(CartCommand::Add(CartItem::new(
            "m1",
            "Some Movie",
            MediaKind::Movie,
        )));

        store.reset();

        assert!(store.cart().is_empty());
        assert!(store.zones().is_empty());
        assert_eq!(store.config(), PriceConfig::default());

        Ok(())
    }

    #[test]
    fn export_and_sync_are_forwarded() {
        let store = Storefront::new();
        let mut port = RecordingPort::default();

        store.export_config(&mut port);
        store.sync_remote(&mut port);

        assert_eq!((port.exports, port.syncs), (1, 1));
    }
}
