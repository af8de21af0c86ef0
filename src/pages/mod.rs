//! Pages
//!
//! Top-level page components for each route.

pub mod add_entry;
pub mod entries;
pub mod login;
pub mod register;

pub use add_entry::AddEntry;
pub use entries::Entries;
pub use login::Login;
pub use register::Register;
