//! Session Context
//!
//! Explicit authentication session passed through the component tree via
//! context. The "logged in" projection is computed at the call site
//! instead of read from ambient global state.

use leptos::*;
use serde::{Deserialize, Serialize};

/// Storage key for the persisted session
const SESSION_KEY: &str = "daybook_session";

/// The authenticated user, as returned by sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: String,
    pub token: String,
}

/// Reactive session context provided at the app root
#[derive(Clone, Copy)]
pub struct Session {
    user: RwSignal<Option<AuthUser>>,
}

impl Session {
    fn new(user: Option<AuthUser>) -> Self {
        Self {
            user: create_rw_signal(user),
        }
    }

    /// Whether an authenticated user is active. Reactive.
    pub fn logged_in(&self) -> bool {
        self.user.with(|user| user.is_some())
    }

    /// The active user, if any. Reactive.
    pub fn user(&self) -> Option<AuthUser> {
        self.user.get()
    }

    /// Record a successful sign-in and persist it for the next visit
    pub fn sign_in_complete(&self, user: AuthUser) {
        persist_session(Some(&user));
        self.user.set(Some(user));
    }

    /// Drop the active session
    pub fn sign_out(&self) {
        persist_session(None);
        self.user.set(None);
    }
}

/// Decode a previously persisted session record
fn restore_from(raw: Option<String>) -> Option<AuthUser> {
    raw.and_then(|json| serde_json::from_str(&json).ok())
}

fn load_persisted_session() -> Option<AuthUser> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    restore_from(storage.get_item(SESSION_KEY).ok()?)
}

fn persist_session(user: Option<&AuthUser>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            match user.and_then(|user| serde_json::to_string(user).ok()) {
                Some(json) => {
                    let _ = storage.set_item(SESSION_KEY, &json);
                }
                None => {
                    let _ = storage.remove_item(SESSION_KEY);
                }
            }
        }
    }
}

/// Provide the session context to the component tree, restoring any
/// session persisted by a previous visit
pub fn provide_session() {
    provide_context(Session::new(load_persisted_session()));
}

/// The session context provided at the app root
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_wire_shape() {
        let user = AuthUser {
            user_id: "user-1".to_string(),
            token: "tok-1".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["token"], "tok-1");
    }

    #[test]
    fn test_restore_from_round_trips() {
        let user = AuthUser {
            user_id: "user-1".to_string(),
            token: "tok-1".to_string(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(restore_from(Some(raw)), Some(user));
    }

    #[test]
    fn test_restore_from_rejects_garbage() {
        assert_eq!(restore_from(None), None);
        assert_eq!(restore_from(Some("not json".to_string())), None);
        assert_eq!(restore_from(Some("{}".to_string())), None);
    }
}
