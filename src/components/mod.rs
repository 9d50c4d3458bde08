//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod item_table;
mod login_form;
mod search_bar;

pub use header::Header;
pub use item_table::ItemTable;
pub use login_form::LoginForm;
pub use search_bar::SearchBar;
