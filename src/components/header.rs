//! Page Header Component
//!
//! Toolbar with the page title, an optional back button, and optional
//! right-aligned actions.

use leptos::*;

/// Page toolbar
#[component]
pub fn PageHeader(
    /// Title shown in the toolbar
    #[prop(into)]
    title: String,
    /// Show a back button that pops the history stack
    #[prop(default = false)]
    back: bool,
    /// Right-aligned toolbar actions
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let go_back = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 h-14 flex items-center space-x-3">
                {back.then(|| view! {
                    <button
                        on:click=go_back
                        class="px-2 py-1 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                    >
                        "\u{2039} Back"
                    </button>
                })}
                <h1 class="text-xl font-bold text-white flex-1">{title}</h1>
                {children.map(|children| children())}
            </div>
        </header>
    }
}
