//! Login Page
//!
//! Email/password sign-in screen. A successful sign-in activates the
//! session, which redirects this page to the entries listing.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{LoadingOverlay, PageHeader};
use crate::state::use_session;

/// UI state of a sign-in attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    /// No attempt in flight
    Idle,
    /// Waiting on the authentication service
    Authenticating,
    /// The last attempt was rejected
    Error,
}

impl LoginStatus {
    /// The busy indicator is shown exactly while authenticating
    pub fn is_busy(&self) -> bool {
        matches!(self, LoginStatus::Authenticating)
    }

    /// A new attempt was submitted
    pub fn on_submit(self) -> Self {
        LoginStatus::Authenticating
    }

    /// The attempt resolved. Success returns to idle; the redirect is
    /// driven by the session becoming active, not by this state.
    pub fn on_result(self, ok: bool) -> Self {
        if ok {
            LoginStatus::Idle
        } else {
            LoginStatus::Error
        }
    }
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (status, set_status) = create_signal(LoginStatus::Idle);

    let on_login = move |_| {
        let email = email.get();
        let password = password.get();

        set_status.set(status.get().on_submit());

        spawn_local(async move {
            match api::auth::sign_in(&email, &password).await {
                Ok(user) => {
                    web_sys::console::log_1(&format!("signed in: {}", user.user_id).into());
                    set_status.set(LoginStatus::Authenticating.on_result(true));
                    // Activating the session redirects the page below.
                    session.sign_in_complete(user);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("sign-in error: {}", err).into());
                    set_status.set(LoginStatus::Authenticating.on_result(false));
                }
            }
        });
    };

    view! {
        {move || {
            if session.logged_in() {
                // Already authenticated: nothing to render but the redirect.
                view! { <Redirect path="/my/entries" /> }.into_view()
            } else {
                view! {
                    <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                        <PageHeader title="Login" />

                        <main class="flex-1 container mx-auto px-4 py-8 max-w-md w-full">
                            <LoadingOverlay loading=Signal::derive(move || status.get().is_busy())>
                                <div class="space-y-4">
                                    <div>
                                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                                        <input
                                            type="email"
                                            prop:value=move || email.get()
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                                        />
                                    </div>

                                    <div>
                                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                                        <input
                                            type="password"
                                            prop:value=move || password.get()
                                            on:input=move |ev| set_password.set(event_target_value(&ev))
                                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                                        />
                                    </div>

                                    // One static message for every rejection cause
                                    {move || {
                                        if status.get() == LoginStatus::Error {
                                            view! {
                                                <p class="text-red-400 text-sm">"Invalid credentials"</p>
                                            }.into_view()
                                        } else {
                                            view! {}.into_view()
                                        }
                                    }}

                                    <button
                                        on:click=on_login
                                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                                               font-semibold transition-colors"
                                    >
                                        "Login"
                                    </button>

                                    <A
                                        href="/register"
                                        class="block text-center text-sm text-gray-400 hover:text-white transition-colors"
                                    >
                                        "Don't have an account?"
                                    </A>
                                </div>
                            </LoadingOverlay>
                        </main>
                    </div>
                }.into_view()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_enters_authenticating() {
        assert_eq!(LoginStatus::Idle.on_submit(), LoginStatus::Authenticating);
        // Resubmitting after a rejection starts a fresh attempt.
        assert_eq!(LoginStatus::Error.on_submit(), LoginStatus::Authenticating);
    }

    #[test]
    fn test_success_returns_to_idle() {
        assert_eq!(
            LoginStatus::Authenticating.on_result(true),
            LoginStatus::Idle
        );
    }

    #[test]
    fn test_rejection_enters_error() {
        assert_eq!(
            LoginStatus::Authenticating.on_result(false),
            LoginStatus::Error
        );
    }

    #[test]
    fn test_busy_only_while_authenticating() {
        assert!(LoginStatus::Authenticating.is_busy());
        assert!(!LoginStatus::Idle.is_busy());
        assert!(!LoginStatus::Error.is_busy());
    }
}
