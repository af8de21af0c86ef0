//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::pages::{AddEntry, Entries, Login, Register};
use crate::picture::source::provide_picture_source;
use crate::state::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Session context, restored from the previous visit when present
    provide_session();

    // Capture capability for this environment, selected once at startup
    provide_picture_source();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path="/my/entries" /> } />
                <Route path="/login" view=Login />
                <Route path="/register" view=Register />
                <Route path="/my/entries" view=Entries />
                <Route path="/my/entries/add" view=AddEntry />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/my/entries"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to your journal"
            </A>
        </div>
    }
}
