//! Frontend Models
//!
//! Data structures for inventory items, sorting and the signed-in user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inventory item (matches seed data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub size: String,
    pub price: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "size")]
    Size,
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "createdAt")]
    CreatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Name, SortKey::Size, SortKey::Price, SortKey::CreatedAt];

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Item Name",
            SortKey::Size => "Item Size",
            SortKey::Price => "Item Price",
            SortKey::CreatedAt => "Creation Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Active column and direction. The table state holds `Option<SortConfig>`,
/// where `None` keeps the seed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn asc(key: SortKey) -> Self {
        Self { key, direction: SortDirection::Asc }
    }

    pub fn desc(key: SortKey) -> Self {
        Self { key, direction: SortDirection::Desc }
    }
}

/// User role. Only editors may change prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Editor,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    pub fn can_edit(&self) -> bool {
        matches!(self, Role::Editor)
    }
}

/// Signed-in user, persisted as JSON in browser storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Seed credential record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub id: u32,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl Credential {
    /// Session view of this credential (password dropped)
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}
