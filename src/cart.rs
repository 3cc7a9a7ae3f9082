//! Cart state

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// What kind of catalog entry a cart item refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A movie, priced flat.
    Movie,

    /// A TV series, priced per selected season.
    Tv,

    /// An anime series, priced like TV.
    Anime,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::Anime => "anime",
        };

        f.write_str(name)
    }
}

/// How an individual item will be paid for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery. The default for every freshly added item.
    #[default]
    Cash,

    /// Bank transfer, which carries a configurable surcharge.
    Transfer,
}

/// Selected season numbers for a series item.
///
/// Kept small and inline; most customers pick a handful of seasons.
pub type SeasonSelection = SmallVec<[u32; 4]>;

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// External catalog id; unique within the cart.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Catalog kind, which picks the pricing rule.
    #[serde(rename = "type")]
    pub kind: MediaKind,

    /// Selected seasons. Only meaningful for non-movie items; an empty
    /// selection prices as one season without being rewritten.
    pub selected_seasons: SeasonSelection,

    /// Per-item payment method.
    pub payment: PaymentMethod,
}

impl CartItem {
    /// Create an item with no season selection, paying cash.
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: MediaKind) -> Self {
        CartItem {
            id: id.into(),
            title: title.into(),
            kind,
            selected_seasons: SeasonSelection::new(),
            payment: PaymentMethod::Cash,
        }
    }

    /// Season count used for pricing: an empty selection counts as one.
    pub fn billable_seasons(&self) -> u32 {
        let selected = u32::try_from(self.selected_seasons.len()).unwrap_or(u32::MAX);

        selected.max(1)
    }
}

/// A cart mutation, expressed as a tagged command.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Insert an item at the end of the cart; no-op when the id is already
    /// present. The payment method is forced back to cash on insertion.
    Add(CartItem),

    /// Remove the item with the given id; no-op when absent.
    Remove(String),

    /// Empty the cart.
    Clear,

    /// Change one item's payment method; no-op when the id is absent.
    SetPayment {
        /// Target item id.
        id: String,
        /// New payment method.
        payment: PaymentMethod,
    },

    /// Replace one item's season selection wholesale; no-op when the id is
    /// absent. Season numbers are not validated against any catalog.
    SetSeasons {
        /// Target item id.
        id: String,
        /// New selection.
        seasons: SeasonSelection,
    },
}

/// Apply one command to the cart, returning the new cart.
///
/// Pure and infallible: commands aimed at unknown ids are silent no-ops.
pub fn apply(mut cart: Cart, command: CartCommand) -> Cart {
    match command {
        CartCommand::Add(mut item) => {
            if !cart.contains(&item.id) {
                // Reset-on-add policy: whatever the caller set, a new item
                // starts out paying cash.
                item.payment = PaymentMethod::Cash;
                cart.items.push(item);
            }
        }
        CartCommand::Remove(id) => cart.items.retain(|item| item.id != id),
        CartCommand::Clear => cart.items.clear(),
        CartCommand::SetPayment { id, payment } => {
            if let Some(item) = cart.items.iter_mut().find(|item| item.id == id) {
                item.payment = payment;
            }
        }
        CartCommand::SetSeasons { id, seasons } => {
            if let Some(item) = cart.items.iter_mut().find(|item| item.id == id) {
                item.selected_seasons = seasons;
            }
        }
    }

    cart
}

/// The customer's cart: an insertion-ordered sequence of items.
///
/// No totals are stored here. Prices are always derived by the pricing module
/// from the current configuration, so nothing in the cart can go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether an item with this id is already in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Season selection for an item, or empty when the id is absent.
    pub fn seasons_of(&self, id: &str) -> SeasonSelection {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.selected_seasons.clone())
            .unwrap_or_default()
    }

    /// Number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run one command against the owned cart.
    pub fn dispatch(&mut self, command: CartCommand) {
        *self = apply(std::mem::take(self), command);
    }
}
