//! Error types shared across the marketplace.

use crate::forms::PasswordCheck;
use crate::models::Role;
use thiserror::Error;

/// Failures surfaced by the authentication service.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Credential matched the demo table but no user record carries the email.
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User with this email already exists: {0}")]
    DuplicateEmail(String),

    #[error("Please sign in to access this page")]
    NotAuthenticated,

    #[error("Access denied: {0} role required")]
    Forbidden(Role),

    #[error("Storage error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Client-side form validation failures, rendered inline by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields ({0} is missing)")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please ensure your password meets all requirements")]
    WeakPassword(PasswordCheck),

    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,

    #[error("Please add at least one image")]
    NoImages,

    #[error("Only client and agent accounts can be registered")]
    InvalidAccountType,

    #[error("Property not found: {0}")]
    NotFound(String),
}

/// Failures of a simulated form submission.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Returned when a textual enum value does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
