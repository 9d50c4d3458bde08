//! Inventory Page Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the item
//! list, search term and sort state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::inventory::{self, PriceUpdate};
use crate::models::{Item, Role, SortConfig, SortKey};

/// Inventory page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct InventoryState {
    /// Authoritative item list (seed order)
    pub items: Vec<Item>,
    /// Committed (debounced) search term
    pub search_term: String,
    /// Active sort, `None` until a header is clicked
    pub sort_config: Option<SortConfig>,
}

impl InventoryState {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type InventoryStore = Store<InventoryState>;

// ========================
// Store Helper Functions
// ========================

/// Filtered and sorted rows (tracks all three fields)
pub fn store_view(store: &InventoryStore) -> Vec<Item> {
    let term = store.search_term().get();
    let config = store.sort_config().get();
    store.items().with(|items| inventory::derive_view(items, &term, config))
}

pub fn store_search_term(store: &InventoryStore) -> String {
    store.search_term().get()
}

pub fn store_sort_config(store: &InventoryStore) -> Option<SortConfig> {
    store.sort_config().get()
}

pub fn store_set_search(store: &InventoryStore, term: String) {
    if store.search_term().get_untracked() != term {
        store.search_term().set(term);
    }
}

/// Header click
pub fn store_toggle_sort(store: &InventoryStore, key: SortKey) {
    let next = inventory::toggle_sort(store.sort_config().get_untracked(), key);
    store.sort_config().set(Some(next));
}

/// Apply a price edit for `role`; rejected edits leave the list untouched.
pub fn store_update_price(store: &InventoryStore, id: u32, price: f64, role: Role) -> PriceUpdate {
    let mut items = store.items().get_untracked();
    let outcome = inventory::update_price(&mut items, id, price, role);
    if outcome.is_applied() {
        store.items().set(items);
    }
    outcome
}
