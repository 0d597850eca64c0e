//! Native-to-login error translation
//!
//! Composes the standardized login failure message from the native error's
//! diagnostic fields and preserves the native error as the cause.

use log::debug;

use crate::error::{LoginError, NativeError};

/// Translates a native backend failure into a login error.
///
/// The message starts with the native summary; the descriptive string is
/// appended after `": "` when present, and the status code follows either
/// in parentheses (after a descriptive string) or after `": "` on its own.
/// The message text is stable for given inputs so logs can be matched
/// against it.
pub fn native_to_login_error(err: NativeError) -> LoginError {
    let mut message = String::from(err.message());

    if let Some(error_string) = err.error_string() {
        message.push_str(": ");
        message.push_str(error_string);
        if let Some(code) = err.error_code() {
            message.push_str(" (");
            message.push_str(&code.to_string());
            message.push(')');
        }
    } else if let Some(code) = err.error_code() {
        message.push_str(": ");
        message.push_str(&code.to_string());
    }

    debug!("Translated native failure: {}", message);

    LoginError::new(message, err)
}
