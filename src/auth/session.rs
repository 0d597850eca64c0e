//! Login session
//!
//! Tracks the username-then-password lifecycle of a single login attempt:
//! username acceptance, the backend-delegated login, and logout.

use log::{error, info};

use crate::auth::backend::NativeAuthenticator;
use crate::config::BridgeConfig;
use crate::error::AuthError;

/// Performs basic input sanitation to reject malformed usernames.
fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// State of a single login attempt.
#[derive(Default)]
pub struct LoginSession {
    username: Option<String>,
    user_valid: bool,
    logged_in: bool,
}

impl LoginSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the username for this attempt.
    ///
    /// Re-issuing replaces the previous username and clears any prior
    /// login.
    pub fn set_user(&mut self, username: &str, config: &BridgeConfig) -> Result<(), AuthError> {
        if !is_valid_input(username, config.max_username_length) {
            self.username = None;
            self.user_valid = false;
            self.logged_in = false;
            return Err(AuthError::MalformedInput("Invalid username format".into()));
        }

        self.username = Some(username.to_string());
        self.user_valid = true;
        self.logged_in = false;
        Ok(())
    }

    /// Runs the login attempt against the backend.
    ///
    /// On backend failure the native diagnostic is translated into the
    /// standardized login error and returned with the original preserved
    /// as its cause.
    pub fn login(
        &mut self,
        password: &str,
        backend: &dyn NativeAuthenticator,
        config: &BridgeConfig,
    ) -> Result<(), AuthError> {
        if !self.user_valid {
            return Err(AuthError::InvalidState(
                "Username must be accepted before login".into(),
            ));
        }

        let username = self
            .username
            .as_deref()
            .ok_or_else(|| AuthError::InvalidState("Username must be accepted before login".into()))?;

        match backend.authenticate(&config.service_name, username, password) {
            Ok(()) => {
                self.logged_in = true;
                info!("User {} logged in", username);
                Ok(())
            }
            Err(native) => {
                self.logged_in = false;
                let login_error = crate::login::native_to_login_error(native);
                error!("Login failed for {}: {}", username, login_error);
                Err(AuthError::Login(login_error))
            }
        }
    }

    /// Resets the session state, logging out and clearing all stored data.
    pub fn logout(&mut self) {
        if self.logged_in {
            if let Some(username) = &self.username {
                info!("User {} logged out", username);
            }
        }
        self.username = None;
        self.user_valid = false;
        self.logged_in = false;
    }

    /// Returns whether the username for this attempt has been accepted.
    pub fn is_user_valid(&self) -> bool {
        self.user_valid
    }

    /// Returns whether the attempt completed successfully.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Returns the username of the attempt if set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }
}
