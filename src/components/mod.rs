//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod header;
pub mod loading;

pub use header::PageHeader;
pub use loading::{Loading, LoadingOverlay};
