//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::{Credential, Item, Session};
use crate::seed;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Visible page - read
    pub page: ReadSignal<Page>,
    /// Visible page - write
    set_page: WriteSignal<Page>,
    /// Signed-in user, mirrored from the session service - read
    pub session: ReadSignal<Option<Session>>,
    /// Signed-in user - write
    set_session: WriteSignal<Option<Session>>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            session: session.0,
            set_session: session.1,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate to {:?}", page);
        self.set_page.set(page);
    }

    /// Record the signed-in user and open the inventory
    pub fn sign_in(&self, session: Session) {
        self.set_session.set(Some(session));
        self.navigate(Page::Home);
    }

    /// Mirror a session restored from storage
    pub fn restore(&self, session: Session) {
        self.set_session.set(Some(session));
    }

    /// Forget the signed-in user and return to login
    pub fn sign_out(&self) {
        self.set_session.set(None);
        self.navigate(Page::Login);
    }
}

/// Read-only seed collections, parsed once at startup
#[derive(Clone)]
pub struct SeedData {
    pub credentials: Arc<Vec<Credential>>,
    pub items: Arc<Vec<Item>>,
}

impl SeedData {
    pub fn load() -> Self {
        Self {
            credentials: Arc::new(seed::credentials()),
            items: Arc::new(seed::items()),
        }
    }
}
