//! Admin state and command processing

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{DeliveryZone, Novel},
    config::{ConfigError, PriceConfig},
};

/// Everything the admin panel can edit: live prices plus the catalog
/// side-tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminState {
    /// Current price parameters.
    pub config: PriceConfig,

    /// Delivery zone table, in insertion order.
    pub zones: Vec<DeliveryZone>,

    /// Novel catalog, in insertion order.
    pub novels: Vec<Novel>,
}

/// A single admin edit, expressed as a tagged command.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminCommand {
    /// Replace the whole price configuration atomically.
    UpdatePrices(PriceConfig),

    /// Append a delivery zone.
    AddZone(DeliveryZone),

    /// Replace the zone with a matching id; no-op when the id is unknown.
    UpdateZone(DeliveryZone),

    /// Remove the zone with the given id; no-op when the id is unknown.
    DeleteZone(String),

    /// Append a novel.
    AddNovel(Novel),

    /// Replace the novel with a matching id; no-op when the id is unknown.
    UpdateNovel(Novel),

    /// Remove the novel with the given id; no-op when the id is unknown.
    DeleteNovel(i64),
}

/// Apply one command to the state, returning the new state.
///
/// Pure transition function: the input state is consumed and a fresh state
/// comes back. Catalog edits targeting an unknown id leave the state unchanged
/// rather than failing; that silent no-op is deliberate policy.
///
/// # Errors
///
/// Only [`AdminCommand::UpdatePrices`] can fail: an invalid configuration is
/// rejected with a [`ConfigError`] and the prior state is returned untouched
/// via the error path (the caller still holds nothing stale, since the
/// function never applies a rejected config).
pub fn apply(mut state: AdminState, command: AdminCommand) -> Result<AdminState, ConfigError> {
    match command {
        AdminCommand::UpdatePrices(config) => {
            config.validate()?;
            state.config = config;
        }
        AdminCommand::AddZone(zone) => state.zones.push(zone),
        AdminCommand::UpdateZone(zone) => {
            if let Some(existing) = state.zones.iter_mut().find(|z| z.id == zone.id) {
                *existing = zone;
            }
        }
        AdminCommand::DeleteZone(id) => state.zones.retain(|z| z.id != id),
        AdminCommand::AddNovel(novel) => state.novels.push(novel),
        AdminCommand::UpdateNovel(novel) => {
            if let Some(existing) = state.novels.iter_mut().find(|n| n.id == novel.id) {
                *existing = novel;
            }
        }
        AdminCommand::DeleteNovel(id) => state.novels.retain(|n| n.id != id),
    }

    Ok(state)
}

/// Owned admin state with convenience methods over [`apply`].
#[derive(Debug, Clone, Default)]
pub struct AdminStore {
    state: AdminState,
}

impl AdminStore {
    /// Create a store with default prices and empty catalog tables.
    pub fn new() -> Self {
        AdminStore::default()
    }

    /// Create a store from pre-built state (seed data, typically).
    pub fn with_state(state: AdminState) -> Self {
        AdminStore { state }
    }

    /// Snapshot of the full admin state.
    pub fn state(&self) -> &AdminState {
        &self.state
    }

    /// Current price configuration. Never fails.
    pub fn config(&self) -> PriceConfig {
        self.state.config
    }

    /// Delivery zones, in insertion order.
    pub fn zones(&self) -> &[DeliveryZone] {
        &self.state.zones
    }

    /// Novels, in insertion order.
    pub fn novels(&self) -> &[Novel] {
        &self.state.novels
    }

    /// Run one command against the owned state.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a price update fails validation; the
    /// prior state is retained in that case.
    pub fn dispatch(&mut self, command: AdminCommand) -> Result<(), ConfigError> {
        // Apply against a copy so a rejected command leaves the owned state
        // untouched.
        self.state = apply(self.state.clone(), command)?;

        Ok(())
    }

    /// Reinitialize to defaults.
    pub fn reset(&mut self) {
        self.state = AdminState::default();
    }
}
