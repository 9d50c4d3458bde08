//! Seed Data
//!
//! Static credentials and inventory bundled into the binary.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Credential, Item};

const USERS_JSON: &str = include_str!("../data/users.json");
const ITEMS_JSON: &str = include_str!("../data/items.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid {what} seed data: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct UsersFile {
    users: Vec<Credential>,
}

#[derive(Deserialize)]
struct ItemsFile {
    items: Vec<Item>,
}

pub fn parse_credentials(json: &str) -> Result<Vec<Credential>, SeedError> {
    serde_json::from_str::<UsersFile>(json)
        .map(|f| f.users)
        .map_err(|source| SeedError::Parse { what: "users", source })
}

pub fn parse_items(json: &str) -> Result<Vec<Item>, SeedError> {
    serde_json::from_str::<ItemsFile>(json)
        .map(|f| f.items)
        .map_err(|source| SeedError::Parse { what: "items", source })
}

fn or_empty<T>(result: Result<Vec<T>, SeedError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::error!("{}", e);
        Vec::new()
    })
}

/// Bundled credentials; empty (and logged) if the bundle is malformed
pub fn credentials() -> Vec<Credential> {
    or_empty(parse_credentials(USERS_JSON))
}

/// Bundled inventory; empty (and logged) if the bundle is malformed
pub fn items() -> Vec<Item> {
    let items = or_empty(parse_items(ITEMS_JSON));
    log::debug!("loaded {} seed items", items.len());
    items
}
