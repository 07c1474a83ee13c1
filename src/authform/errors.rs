//! Error types for the form flows. The `Display` text of `ValidationError` and
//! `AuthError` is exactly what the notifier shows to the user.

use std::fmt;
use thiserror::Error;

/// Which form flow produced a server-side rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Login,
    Signup,
}

impl Flow {
    /// Prefix used when the server rejects a request.
    #[must_use]
    pub const fn error_label(self) -> &'static str {
        match self {
            Self::Login => "Error",
            Self::Signup => "Signup Error",
        }
    }

    /// Message used when the server gave no reason.
    #[must_use]
    pub const fn default_failure(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Signup => "Signup failed",
        }
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(formatter, "login"),
            Self::Signup => write!(formatter, "signup"),
        }
    }
}

/// Client-side checks that abort a submission before any request is sent.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Form elements not found!")]
    MissingElements,
    #[error("Please enter both username and password!")]
    MissingLoginFields,
    #[error("Please fill in all fields!")]
    MissingSignupFields,
    #[error("Passwords do not match!")]
    PasswordMismatch,
}

/// Failures after validation passed.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Server returned invalid JSON: {body}")]
    InvalidResponse { status: u16, body: String },
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("{}: {message}", .flow.error_label())]
    Rejected {
        flow: Flow,
        status: u16,
        message: String,
    },
    #[error("Request error: {0}")]
    Request(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl AuthError {
    /// HTTP status attached to the failure, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidResponse { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::InvalidCredentials(_) => Some(401),
            Self::Network(_) | Self::Request(_) | Self::Storage(_) => None,
        }
    }
}

/// Persistence failures of a credential store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode store: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("store lock poisoned")]
    Poisoned,
}
