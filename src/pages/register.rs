//! Register Page
//!
//! Placeholder target for the registration route linked from the login
//! screen.

use leptos::*;
use leptos_router::*;

use crate::components::PageHeader;

/// Registration route placeholder
#[component]
pub fn Register() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <PageHeader title="Register" back=true />

            <main class="flex-1 container mx-auto px-4 py-8 max-w-md w-full text-center">
                <p class="text-gray-400">"Registration is not available yet."</p>
                <A
                    href="/login"
                    class="inline-block mt-4 text-primary-400 hover:text-primary-300 transition-colors"
                >
                    "Back to login"
                </A>
            </main>
        </div>
    }
}
