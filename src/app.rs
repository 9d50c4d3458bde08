//! Inventory Frontend App
//!
//! Root component: provides shared services and switches between pages.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::{AppContext, Page, SeedData};
use crate::models::Session;
use crate::pages::{HomePage, LoginPage};
use crate::session::SessionService;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();

    // Provide context to all children
    let ctx = AppContext::new(signal(Page::Home), signal::<Option<Session>>(None));
    provide_context(ctx);
    provide_context(SessionService::browser(config.session_key.clone()));
    provide_context(SeedData::load());
    provide_context(config);

    view! {
        {move || match ctx.page.get() {
            Page::Login => view! { <LoginPage /> }.into_any(),
            Page::Home => view! { <HomePage /> }.into_any(),
        }}
    }
}
