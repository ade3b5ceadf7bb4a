//! Error types for the Commentary plugin.
//!
//! This module defines the centralized error type [`CommentaryError`] and a type alias
//! [`Result`] used throughout the plugin. All errors derive their `Error` impl from
//! `thiserror`.

use thiserror::Error;

/// The main error type for Commentary plugin operations.
///
/// Covers the one remote failure path (the startup fetch), local form
/// validation, lookups against the in-memory store and theme loading.
///
/// # Examples
///
/// ```
/// use commentary::CommentaryError;
///
/// let err = CommentaryError::FetchStatus { status: 503, detail: String::new() };
/// assert_eq!(err.to_string(), "Request failed with status 503");
///
/// let err = CommentaryError::FetchStatus { status: 400, detail: "connection refused".into() };
/// assert_eq!(err.to_string(), "Request failed with status 400: connection refused");
/// ```
#[derive(Debug, Error)]
pub enum CommentaryError {
    /// The endpoint answered with a non-success HTTP status, or the host
    /// reported a transport failure in the same shape. `detail` is the
    /// response text, empty when there was none.
    #[error("Request failed with status {status}{}", detail_suffix(.detail))]
    FetchStatus { status: u16, detail: String },

    /// The request never produced a response (host refused it, permission
    /// denied, transport failure).
    #[error("Request error: {0}")]
    Request(String),

    /// The response body was not a JSON array of records.
    ///
    /// Converts automatically from `serde_json::Error`.
    #[error("Could not decode comments: {0}")]
    Decode(#[from] serde_json::Error),

    /// A form submission is missing a required field or carries a malformed one.
    #[error("{0}")]
    Validation(String),

    /// No record with the given identifier exists in the store.
    #[error("No comment with id {0}")]
    NotFound(i64),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {detail}")
    }
}

/// A specialized `Result` type for Commentary operations.
pub type Result<T> = std::result::Result<T, CommentaryError>;
