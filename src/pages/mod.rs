//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod chat;

pub use home::Home;
pub use chat::Chat;
