//! Header Component

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Session;

fn user_label(session: &Session) -> String {
    format!("{} ({})", session.name, session.role.as_str())
}

/// Brand, signed-in user and logout button
#[component]
pub fn Header(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let brand = use_context::<AppConfig>().unwrap_or_default().brand_name;

    view! {
        <header class="header">
            <div class="header-container">
                <div class="brand">
                    <span class="brand-name">{brand}</span>
                </div>
                <div class="user-section">
                    <span class="user-name">
                        {move || ctx.session.with(|s| s.as_ref().map(user_label).unwrap_or_default())}
                    </span>
                    <button class="btn btn-small" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
