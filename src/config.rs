//! Application Configuration
//!
//! Static settings shared through Leptos context.

use log::LevelFilter;

/// Storage key holding the signed-in user
pub const SESSION_STORAGE_KEY: &str = "currentUser";

/// Quiet period before a search term is committed
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `localStorage` key for the persisted session
    pub session_key: String,
    /// Search debounce delay in milliseconds
    pub search_debounce_ms: u32,
    /// Shown in the header
    pub brand_name: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: SESSION_STORAGE_KEY.to_string(),
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            brand_name: "Some Shop".to_string(),
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.session_key, "currentUser");
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.brand_name, "Some Shop");
    }
}
