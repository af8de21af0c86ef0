//! Daybook
//!
//! A personal journal built with Leptos (WASM).
//!
//! # Features
//!
//! - Email/password sign-in against the hosted journal service
//! - Journal entries with a date, title, picture, and description
//! - Camera capture inside the packaged mobile shell, file picker elsewhere
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All persistence is delegated to the journal service over
//! HTTP; the app itself holds only per-screen component state.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod picture;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
