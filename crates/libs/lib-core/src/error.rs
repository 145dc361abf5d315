//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by the
//! router library and the setup screen. It follows the `thiserror` pattern for
//! ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Caller Errors** - a navigation target that cannot be built
//!    - [`InvalidArgument`](AppError::InvalidArgument) - empty sequence, empty
//!      segment, or a segment carrying the path separator
//!    - [`UnknownAction`](AppError::UnknownAction) - an action with no binding
//!    - [`Decoding`](AppError::Decoding) - a host message that is not valid JSON
//!
//! 2. **Collaborator Errors** - reported by the navigation capability
//!    - [`Navigation`](AppError::Navigation) wraps a [`NavigationFailure`]
//!      unchanged
//!
//! 3. **Startup Errors**
//!    - [`Config`](AppError::Config)
//!
//! Every error is scoped to a single user action; nothing here is fatal to the
//! process.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn check_segment(segment: &str) -> Result<()> {
//!     if segment.is_empty() {
//!         return Err(AppError::InvalidArgument(
//!             "route segment cannot be empty".to_string()
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure reported by a navigation capability.
///
/// Carries the target the navigator was asked to go to and the reason it
/// gave. Callers pass it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Navigation to '{target}' failed: {reason}")]
pub struct NavigationFailure {
    pub target: String,
    pub reason: String,
}

impl NavigationFailure {
    pub fn new(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

/// Application-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// A route sequence or segment that cannot form a navigation target.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The navigation capability refused or failed the transition.
    #[error(transparent)]
    Navigation(#[from] NavigationFailure),

    /// An action was activated that has no navigation binding.
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A host message could not be decoded.
    #[error("Decoding error: {0}")]
    Decoding(String),
}

impl AppError {
    /// Stable error code, suitable for a host to branch on.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "InvalidArgument",
            AppError::Navigation(_) => "NavigationFailure",
            AppError::UnknownAction(_) => "UnknownAction",
            AppError::Config(_) => "Config",
            AppError::Decoding(_) => "Decoding",
        }
    }

    /// Get a user-friendly error message.
    ///
    /// Caller-side problems surface their detail; configuration problems get a
    /// generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidArgument(msg) => msg.clone(),
            AppError::UnknownAction(action) => format!("Nothing is bound to '{}'", action),
            AppError::Navigation(failure) => {
                format!("Could not open '{}'. Please try again.", failure.target)
            }
            AppError::Decoding(_) => "The request could not be understood".to_string(),
            AppError::Config(_) => "An internal error occurred".to_string(),
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}
