//! Inventory List Processing
//!
//! Search, sort and price-edit rules for the item table. Everything here is
//! pure: the authoritative item list is never reordered or filtered in place.

use std::cmp::Ordering;

use crate::models::{Item, Role, SortConfig, SortDirection, SortKey};

/// Keep items whose name contains `term`, ignoring case.
/// An empty term keeps everything.
pub fn filter_items(items: &[Item], term: &str) -> Vec<Item> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn compare_by(key: SortKey, a: &Item, b: &Item) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Stable sort on the configured column. `None` keeps input order.
pub fn sort_items(items: Vec<Item>, config: Option<SortConfig>) -> Vec<Item> {
    let Some(config) = config else {
        return items;
    };
    let mut sorted = items;
    // `sort_by` is stable and reversing an `Equal` stays `Equal`,
    // so ties keep input order in both directions.
    sorted.sort_by(|a, b| {
        let ord = compare_by(config.key, a, b);
        match config.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

/// Displayed rows: `sort(filter(items, term), config)`
pub fn derive_view(items: &[Item], term: &str, config: Option<SortConfig>) -> Vec<Item> {
    sort_items(filter_items(items, term), config)
}

/// Next sort state after clicking a column header.
///
/// asc -> desc on the same column, anything else -> asc on the clicked
/// column. Never returns to unsorted.
pub fn toggle_sort(current: Option<SortConfig>, key: SortKey) -> SortConfig {
    match current {
        Some(SortConfig { key: k, direction: SortDirection::Asc }) if k == key => SortConfig::desc(key),
        _ => SortConfig::asc(key),
    }
}

/// Result of a price edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceUpdate {
    Applied { id: u32, old: f64, new: f64 },
    NotPermitted,
    InvalidPrice,
    NotFound,
}

impl PriceUpdate {
    pub fn is_applied(&self) -> bool {
        matches!(self, PriceUpdate::Applied { .. })
    }
}

/// Set the price of item `id`, editors only.
///
/// Rejected edits leave `items` untouched; other items keep their
/// position and contents either way.
pub fn update_price(items: &mut [Item], id: u32, new_price: f64, role: Role) -> PriceUpdate {
    if !role.can_edit() {
        return PriceUpdate::NotPermitted;
    }
    if !new_price.is_finite() || new_price < 0.0 {
        return PriceUpdate::InvalidPrice;
    }
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            let old = item.price;
            item.price = new_price;
            PriceUpdate::Applied { id, old, new: new_price }
        }
        None => PriceUpdate::NotFound,
    }
}

/// Parse the text of the price editor. Only finite, non-negative numbers pass.
pub fn parse_price(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}
