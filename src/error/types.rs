//! Error types
//!
//! Defines the error values that flow through the bridge: the native-layer
//! failure, the translated login failure, and the session-level errors.

use std::error::Error;
use std::fmt;

use crate::login::native_to_login_error;

/// Raw wire value standing for "no error code present".
///
/// Only `NativeError::from_raw` interprets it; the typed representation is
/// an explicit `Option`.
pub const RAW_NO_ERROR_CODE: i64 = -1;

/// Failure reported by the native authentication backend.
///
/// Carries the backend's human-readable summary plus whatever diagnostic
/// detail the native layer had available: an optional descriptive string
/// and an optional status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeError {
    message: String,
    error_string: Option<String>,
    error_code: Option<i64>,
}

impl NativeError {
    /// Creates a native error with all fields explicit.
    pub fn new(message: String, error_string: Option<String>, error_code: Option<i64>) -> Self {
        Self {
            message,
            error_string,
            error_code,
        }
    }

    /// Creates a native error from the raw integration boundary, where the
    /// code slot always holds an integer and `-1` means "no code".
    pub fn from_raw(message: String, error_string: Option<String>, raw_code: i64) -> Self {
        let error_code = if raw_code == RAW_NO_ERROR_CODE {
            None
        } else {
            Some(raw_code)
        };
        Self::new(message, error_string, error_code)
    }

    /// Creates a native error for a known status code, filling the
    /// descriptive string from the status table when the code is known.
    pub fn from_code(message: String, code: i64) -> Self {
        let error_string = crate::native::error_string(code).map(str::to_string);
        Self::new(message, error_string, Some(code))
    }

    /// Returns the backend's summary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the additional native diagnostic text, if any.
    pub fn error_string(&self) -> Option<&str> {
        self.error_string.as_deref()
    }

    /// Returns the native status code, if any.
    pub fn error_code(&self) -> Option<i64> {
        self.error_code
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for NativeError {}

/// Standardized login failure handed to the embedding login framework.
///
/// The message is composed from the native diagnostics by the translator;
/// the originating native error is kept whole as the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginError {
    message: String,
    cause: NativeError,
}

impl LoginError {
    pub(crate) fn new(message: String, cause: NativeError) -> Self {
        Self { message, cause }
    }

    /// Returns the composed failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the originating native error.
    pub fn native_cause(&self) -> &NativeError {
        &self.cause
    }

    /// Consumes the login error, yielding the originating native error.
    pub fn into_native_cause(self) -> NativeError {
        self.cause
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for LoginError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

impl From<NativeError> for LoginError {
    fn from(error: NativeError) -> Self {
        native_to_login_error(error)
    }
}

/// Session-level errors raised while driving a login attempt.
#[derive(Debug)]
pub enum AuthError {
    MalformedInput(String),
    InvalidState(String),
    Login(LoginError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            AuthError::InvalidState(s) => write!(f, "Invalid state: {}", s),
            AuthError::Login(e) => write!(f, "{}", e),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AuthError::Login(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LoginError> for AuthError {
    fn from(error: LoginError) -> Self {
        AuthError::Login(error)
    }
}
