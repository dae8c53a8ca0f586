//! Core error types for Skillhub

use thiserror::Error;

/// Result type alias for Skillhub operations
pub type HubResult<T> = Result<T, HubError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C: std::fmt::Display>(self, context: C) -> HubResult<T>;

    /// Add context lazily (only evaluated on error)
    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> HubResult<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn context<C: std::fmt::Display>(self, context: C) -> HubResult<T> {
        self.map_err(|e| HubError::other(format!("{}: {}", context, e)))
    }

    fn with_context<C: std::fmt::Display, F: FnOnce() -> C>(self, f: F) -> HubResult<T> {
        self.map_err(|e| HubError::other(format!("{}: {}", f(), e)))
    }
}

/// Extension trait for adding context to Option types
pub trait OptionExt<T> {
    /// Convert Option to Result with a context message
    fn context<C: std::fmt::Display>(self, context: C) -> HubResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn context<C: std::fmt::Display>(self, context: C) -> HubResult<T> {
        self.ok_or_else(|| HubError::other(context.to_string()))
    }
}

/// Main error type for the Skillhub engine
///
/// Each variant includes contextual information where relevant. Registry and
/// configuration failures are fatal at startup; content lookups are
/// recoverable and surfaced per skill.
#[derive(Error, Debug, Clone)]
pub enum HubError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Skill registry errors (scanning, malformed descriptors)
    #[error("Registry error: {message}")]
    Registry {
        message: String,
        context: Option<String>,
    },

    /// Session state errors
    #[error("Session error: {message}")]
    Session {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// Resource not found (skill body, descriptor, session)
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        resource_type: Option<String>,
        context: Option<String>,
    },

    /// Generic error with context
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        HubError::Io {
            message: err.to_string(),
            path: None,
            context: None,
        }
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Json {
            message: err.to_string(),
            context: None,
        }
    }
}
