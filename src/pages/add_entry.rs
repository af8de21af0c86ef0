//! Add Entry Page
//!
//! Form for creating one journal entry: date, title, picture, and
//! description. Saving uploads a locally-selected picture before the
//! entry document is written, then navigates back.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::entries::EntryDraft;
use crate::components::PageHeader;
use crate::picture::{self, source::use_picture_source, PictureRef};
use crate::state::use_session;

/// Entry creation page component
#[component]
pub fn AddEntry() -> impl IntoView {
    let session = use_session();
    let source = use_picture_source();

    let (date, set_date) = create_signal(String::new());
    let (title, set_title) = create_signal(String::new());
    let (picture, set_picture) = create_signal(PictureRef::Placeholder);
    let (description, set_description) = create_signal(String::new());

    let file_input = create_node_ref::<html::Input>();

    // Release the in-memory object URL when the page is torn down,
    // whatever the outcome of a pending save.
    on_cleanup(move || picture::release(&picture.get_untracked()));

    // Adopt a newly selected picture, releasing the superseded one.
    let adopt_picture = move |next: PictureRef| {
        picture::release(&picture.get_untracked());
        set_picture.set(next);
    };

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                match web_sys::Url::create_object_url_with_blob(&file) {
                    Ok(url) => adopt_picture(PictureRef::ObjectUrl(url)),
                    Err(err) => {
                        // Capture failures are swallowed; the form keeps
                        // its previous picture.
                        web_sys::console::log_1(&format!("picture error: {:?}", err).into());
                    }
                }
            }
        }
    };

    let on_picture_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_save = move |_| {
        let user = match session.user() {
            Some(user) => user,
            None => return,
        };
        let draft = EntryDraft {
            date: date.get(),
            title: title.get(),
            picture_url: picture.get().as_str().to_string(),
            description: description.get(),
        };

        spawn_local(async move {
            match api::entries::save_entry(&user, draft).await {
                Ok(id) => {
                    web_sys::console::log_1(&format!("saved: {}", id).into());
                    if let Some(window) = web_sys::window() {
                        if let Ok(history) = window.history() {
                            let _ = history.back();
                        }
                    }
                }
                Err(err) => {
                    // No user-facing surface for save failures; the form
                    // keeps its state.
                    web_sys::console::error_1(&format!("save error: {}", err).into());
                }
            }
        });
    };

    view! {
        {move || {
            if !session.logged_in() {
                view! { <Redirect path="/login" /> }.into_view()
            } else {
                view! {
                    <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                        <PageHeader title="Add Entry" back=true />

                        <main class="flex-1 container mx-auto px-4 py-8 max-w-md w-full">
                            <div class="space-y-4">
                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Date"</label>
                                    <input
                                        type="date"
                                        prop:value=move || date.get()
                                        on:input=move |ev| set_date.set(event_target_value(&ev))
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Title"</label>
                                    <input
                                        type="text"
                                        prop:value=move || title.get()
                                        on:input=move |ev| set_title.set(event_target_value(&ev))
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Picture"</label>
                                    <input
                                        type="file"
                                        accept="image/*"
                                        capture=source.capture_attr()
                                        class="hidden"
                                        node_ref=file_input
                                        on:change=on_file_change
                                    />
                                    // The preview is the selection control.
                                    <img
                                        src=move || picture.get().as_str().to_string()
                                        alt=""
                                        on:click=on_picture_click
                                        class="w-full rounded-lg cursor-pointer"
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm text-gray-400 mb-2">"Description"</label>
                                    <textarea
                                        prop:value=move || description.get()
                                        on:input=move |ev| set_description.set(event_target_value(&ev))
                                        rows="4"
                                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                                    />
                                </div>

                                <button
                                    on:click=on_save
                                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                                           font-semibold transition-colors"
                                >
                                    "Save"
                                </button>
                            </div>
                        </main>
                    </div>
                }.into_view()
            }
        }}
    }
}
