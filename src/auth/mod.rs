//! Authentication system
//!
//! Drives a login attempt against the native backend and tracks the
//! session's authentication state.

pub mod backend;
pub mod session;

pub use backend::NativeAuthenticator;
pub use session::LoginSession;
