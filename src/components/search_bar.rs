//! Search Bar Component
//!
//! Text input whose value is committed after a quiet period.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::debounce::{debounce_commit, Debouncer};

/// Debounced search input
///
/// Props:
/// - value: committed search term (external resets are mirrored locally)
/// - on_change: called with the term once typing pauses, or immediately on clear
#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, default = "Search by item name...".to_string())] placeholder: String,
) -> impl IntoView {
    let delay_ms = use_context::<AppConfig>().unwrap_or_default().search_debounce_ms;
    let (local_value, set_local_value) = signal(value.get_untracked());
    let pending = StoredValue::new(Debouncer::<String>::new());

    Effect::new(move |_| {
        let committed = value.get();
        if pending.with_value(|d| !d.is_pending()) {
            set_local_value.set(committed);
        }
    });

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_local_value.set(text.clone());
        debounce_commit(pending, text, delay_ms, on_change);
    };

    let on_clear = move |_: web_sys::MouseEvent| {
        pending.update_value(|d| d.cancel());
        set_local_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder=placeholder
                prop:value=move || local_value.get()
                on:input=on_input
            />
            <Show when=move || !local_value.get().is_empty()>
                <button
                    type="button"
                    class="clear-button"
                    aria-label="Clear search"
                    on:click=on_clear
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}
