//! Item Table Component
//!
//! Sortable inventory table with inline price editing for editors.

use leptos::html;
use leptos::prelude::*;

use crate::format::{format_date, format_price};
use crate::inventory::parse_price;
use crate::models::{Item, Role, SortConfig, SortDirection, SortKey};

fn sort_indicator(config: Option<SortConfig>, key: SortKey) -> (&'static str, &'static str) {
    match config {
        Some(c) if c.key == key => match c.direction {
            SortDirection::Asc => ("sort-icon active", "↑"),
            SortDirection::Desc => ("sort-icon active", "↓"),
        },
        _ => ("sort-icon", "↕"),
    }
}

/// Inventory table
///
/// # Arguments
/// * `items` - rows to display, already filtered and sorted
/// * `sort_config` - active sort, drives the header indicators
/// * `on_sort` - header click
/// * `on_price_update` - `(item id, new price)` after a valid edit
/// * `role` - editors get the "Edit Price" control
#[component]
pub fn ItemTable(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] sort_config: Signal<Option<SortConfig>>,
    #[prop(into)] on_sort: Callback<SortKey>,
    #[prop(into)] on_price_update: Callback<(u32, f64)>,
    role: Role,
) -> impl IntoView {
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let (edit_price, set_edit_price) = signal(String::new());

    let start_edit = move |item_id: u32, price: f64| {
        if role.can_edit() {
            set_editing_id.set(Some(item_id));
            set_edit_price.set(price.to_string());
        }
    };

    let cancel_edit = move || {
        set_editing_id.set(None);
        set_edit_price.set(String::new());
    };

    // Invalid input is dropped silently; the cell returns to read view either way.
    let save_edit = move || {
        if let Some(item_id) = editing_id.get_untracked() {
            match parse_price(&edit_price.get_untracked()) {
                Some(price) => on_price_update.run((item_id, price)),
                None => log::debug!("discarding price edit for item {}", item_id),
            }
        }
        cancel_edit();
    };

    let header = move |key: SortKey| {
        view! {
            <th class="th" on:click=move |_| on_sort.run(key)>
                <div class="th-content">
                    {key.label()}
                    {move || {
                        let (class, icon) = sort_indicator(sort_config.get(), key);
                        view! { <span class=class>{icon}</span> }
                    }}
                </div>
            </th>
        }
    };

    view! {
        <div class="table-wrapper">
            <table class="table">
                <thead>
                    <tr>
                        {SortKey::ALL.into_iter().map(header).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || items.with(|rows| rows.is_empty())>
                        <tr>
                            <td colspan="4" class="no-data">"No items found"</td>
                        </tr>
                    </Show>
                    <For
                        each=move || items.get()
                        key=|item| (item.id, item.price.to_bits())
                        children=move |item| {
                            let item_id = item.id;
                            let price = item.price;
                            view! {
                                <tr class="tr">
                                    <td class="td"><span class="item-name">{item.name}</span></td>
                                    <td class="td"><span class="item-size">{item.size}</span></td>
                                    <td class="td">
                                        {move || if editing_id.get() == Some(item_id) {
                                            let input_ref = NodeRef::<html::Input>::new();
                                            Effect::new(move |_| {
                                                if let Some(input) = input_ref.get() {
                                                    let _ = input.focus();
                                                }
                                            });
                                            view! {
                                                <div class="price-edit">
                                                    <input
                                                        type="number"
                                                        class="price-input"
                                                        step="0.01"
                                                        min="0"
                                                        node_ref=input_ref
                                                        prop:value=move || edit_price.get()
                                                        on:input=move |ev| set_edit_price.set(event_target_value(&ev))
                                                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                                                            match ev.key().as_str() {
                                                                "Enter" => save_edit(),
                                                                "Escape" => cancel_edit(),
                                                                _ => {}
                                                            }
                                                        }
                                                    />
                                                    <button class="save-btn" title="Save" on:click=move |_| save_edit()>"✓"</button>
                                                    <button class="cancel-btn" title="Cancel" on:click=move |_| cancel_edit()>"✕"</button>
                                                </div>
                                            }.into_any()
                                        } else {
                                            view! {
                                                <div class="price-display">
                                                    <span>{format_price(price)}</span>
                                                    <Show when=move || role.can_edit()>
                                                        <button
                                                            class="edit-btn"
                                                            title="Edit price"
                                                            on:click=move |_| start_edit(item_id, price)
                                                        >
                                                            "Edit Price"
                                                        </button>
                                                    </Show>
                                                </div>
                                            }.into_any()
                                        }}
                                    </td>
                                    <td class="td"><span class="date">{format_date(&item.created_at)}</span></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(sort_indicator(None, SortKey::Name).1, "↕");
        assert_eq!(sort_indicator(Some(SortConfig::asc(SortKey::Name)), SortKey::Price).1, "↕");
        assert_eq!(sort_indicator(Some(SortConfig::asc(SortKey::Price)), SortKey::Price).1, "↑");
        assert_eq!(sort_indicator(Some(SortConfig::desc(SortKey::Price)), SortKey::Price), ("sort-icon active", "↓"));
    }
}
