//! Entries Page
//!
//! The signed-in user's journal. Redirect target after login; entries are
//! fetched once on mount.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::entries::JournalEntry;
use crate::components::{Loading, PageHeader};
use crate::state::use_session;

/// Entries listing page component
#[component]
pub fn Entries() -> impl IntoView {
    let session = use_session();

    let (entries, set_entries) = create_signal(Vec::<JournalEntry>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch the user's entries on mount
    create_effect(move |_| {
        if let Some(user) = session.user() {
            spawn_local(async move {
                set_loading.set(true);
                match api::entries::list_entries(&user).await {
                    Ok(list) => set_entries.set(list),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to fetch entries: {}", err).into(),
                        );
                    }
                }
                set_loading.set(false);
            });
        }
    });

    view! {
        {move || {
            if !session.logged_in() {
                view! { <Redirect path="/login" /> }.into_view()
            } else {
                view! {
                    <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                        <PageHeader title="Journal">
                            <A
                                href="/my/entries/add"
                                class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded-lg
                                       text-sm font-medium transition-colors"
                            >
                                "Add"
                            </A>
                            <button
                                on:click=move |_| session.sign_out()
                                class="px-3 py-1 rounded-lg text-sm text-gray-400 hover:text-white
                                       hover:bg-gray-700 transition-colors"
                            >
                                "Sign out"
                            </button>
                        </PageHeader>

                        <main class="flex-1 container mx-auto px-4 py-8 max-w-md w-full">
                            {move || {
                                if loading.get() {
                                    view! { <Loading /> }.into_view()
                                } else {
                                    let list = entries.get();
                                    if list.is_empty() {
                                        view! {
                                            <p class="text-gray-400 text-sm text-center">
                                                "No entries yet"
                                            </p>
                                        }.into_view()
                                    } else {
                                        list.into_iter().map(|entry| view! {
                                            <div class="flex items-center space-x-4 bg-gray-800 rounded-lg p-4 mb-3">
                                                <img
                                                    src=entry.picture_url
                                                    alt=""
                                                    class="w-16 h-16 rounded-lg object-cover"
                                                />
                                                <div>
                                                    <h2 class="font-semibold">{entry.title}</h2>
                                                    <p class="text-gray-400 text-sm">{entry.date}</p>
                                                </div>
                                            </div>
                                        }).collect_view()
                                    }
                                }
                            }}
                        </main>
                    </div>
                }.into_view()
            }
        }}
    }
}
