//! Native Auth Bridge
//!
//! Translates native authentication backend failures into standardized
//! login errors and drives the login lifecycle around that boundary.

pub mod auth;
pub mod config;
pub mod error;
pub mod login;
pub mod native;

pub use auth::{LoginSession, NativeAuthenticator};
pub use crate::config::BridgeConfig;
pub use error::{AuthError, LoginError, NativeError};
pub use login::native_to_login_error;
