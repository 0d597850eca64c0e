//! Native backend seam
//!
//! The bridge never decides whether credentials are correct; that decision
//! belongs to the native authentication backend behind this trait.

use crate::error::NativeError;

/// Native authentication backend.
///
/// `service` is the backend-side service identity the attempt runs under
/// (see `BridgeConfig::service_name`). A failure carries the backend's
/// native diagnostic, which the caller translates into a login error.
pub trait NativeAuthenticator: Send + Sync {
    fn authenticate(
        &self,
        service: &str,
        username: &str,
        password: &str,
    ) -> Result<(), NativeError>;
}
