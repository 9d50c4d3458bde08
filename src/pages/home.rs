//! Inventory Page
//!
//! Protected page: search, sort and edit the item table.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Header, ItemTable, SearchBar};
use crate::context::{AppContext, SeedData};
use crate::inventory::PriceUpdate;
use crate::models::SortKey;
use crate::session::{guard, Guard, SessionService};
use crate::store::{self, InventoryState};

fn subtitle(count: usize, term: &str) -> String {
    if term.is_empty() {
        format!("{} items found", count)
    } else {
        format!("{} items found for \"{}\"", count, term)
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let service = use_context::<SessionService>().expect("SessionService should be provided");
    let seed = use_context::<SeedData>().expect("SeedData should be provided");

    // Signed-out visitors are sent to login before any item renders.
    let session = match guard(&service) {
        Guard::Allow(session) => session,
        Guard::Redirect(page) => {
            Effect::new(move |_| ctx.navigate(page));
            return view! { <div class="loading">"Loading..."</div> }.into_any();
        }
    };
    let role = session.role;
    ctx.restore(session);

    let state = Store::new(InventoryState::new(seed.items.to_vec()));
    let view_items = Memo::new(move |_| store::store_view(&state));
    let search_term = Signal::derive(move || store::store_search_term(&state));
    let sort_config = Signal::derive(move || store::store_sort_config(&state));

    let on_search = Callback::new(move |term: String| store::store_set_search(&state, term));
    let on_sort = Callback::new(move |key: SortKey| store::store_toggle_sort(&state, key));
    let on_price_update = Callback::new(move |(id, price): (u32, f64)| {
        match store::store_update_price(&state, id, price, role) {
            PriceUpdate::Applied { id, old, new } => log::info!("item {} price {} -> {}", id, old, new),
            rejected => log::warn!("price edit for item {} rejected: {:?}", id, rejected),
        }
    });

    let on_logout = Callback::new(move |_: ()| {
        service.clear();
        ctx.sign_out();
    });

    view! {
        <div class="home-page">
            <Header on_logout=on_logout />

            <div class="container">
                <div class="page-header">
                    <h1 class="page-title">"Inventory Management"</h1>
                    <p class="page-subtitle">
                        {move || subtitle(view_items.with(Vec::len), &search_term.get())}
                    </p>
                </div>

                <div class="controls">
                    <SearchBar
                        value=search_term
                        on_change=on_search
                        placeholder="Search items by name..."
                    />
                </div>

                <div class="table-container">
                    <ItemTable
                        items=view_items
                        sort_config=sort_config
                        on_sort=on_sort
                        on_price_update=on_price_update
                        role=role
                    />
                </div>
            </div>
        </div>
    }
    .into_any()
}
