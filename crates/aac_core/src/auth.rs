//! Login form submission over an auth collaborator.
//!
//! # Invariants
//! - Blank fields never reach the gateway.
//! - The email is trimmed and lowercased before it is sent.

use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both email and password";
pub const DEFAULT_REJECTION_MESSAGE: &str = "Invalid email or password";

/// Error returned by an auth backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for AuthError {}

/// Authentication backend.
pub trait AuthGateway {
    fn login(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

/// Login form outcome shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Email or password left blank.
    MissingFields,
    /// Gateway refused the credentials.
    Rejected(String),
}

impl Display for LoginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(f, "{MISSING_FIELDS_MESSAGE}"),
            Self::Rejected(message) => write!(f, "{message}"),
        }
    }
}

impl Error for LoginError {}

impl From<AuthError> for LoginError {
    fn from(value: AuthError) -> Self {
        let message = value.message.trim();
        if message.is_empty() {
            Self::Rejected(DEFAULT_REJECTION_MESSAGE.to_string())
        } else {
            Self::Rejected(message.to_string())
        }
    }
}

/// Validates the form and calls the gateway once.
pub fn submit_login(
    gateway: &impl AuthGateway,
    email: &str,
    password: &str,
) -> Result<(), LoginError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingFields);
    }
    match gateway.login(&email, password) {
        Ok(()) => {
            info!("event=login module=auth status=ok");
            Ok(())
        }
        Err(err) => {
            warn!("event=login module=auth status=rejected");
            Err(err.into())
        }
    }
}
