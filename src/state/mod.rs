//! State Management
//!
//! Session context shared across pages.

pub mod session;

pub use session::{provide_session, use_session, AuthUser, Session};
