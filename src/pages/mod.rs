//! Pages
//!
//! Top-level screens switched by `App`.

mod home;
mod login;

pub use home::HomePage;
pub use login::LoginPage;
