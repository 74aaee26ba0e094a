//! Error types for sql-drill.
//!
//! Defines the main error enum used throughout the engine.

use thiserror::Error;

/// Main error type for quiz engine operations.
#[derive(Error, Debug)]
pub enum QuizError {
    /// Question catalog errors (missing file, malformed JSON, empty corpus).
    /// Fatal at startup; the engine cannot run without a catalog.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Database connection errors (host unreachable, auth failed, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution errors. The message is the driver's own text,
    /// passed through verbatim so the user sees exactly what the
    /// database said.
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid user input (blank submission, out-of-range jump target).
    /// No query is attempted for these.
    #[error("Input error: {0}")]
    UserInput(String),

    /// Progress/settings store failures. Non-fatal; the session keeps
    /// running on in-memory state.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The reference result for the current question is not cached,
    /// usually because its query failed at load time.
    #[error("Reference result unavailable; reload the question before answering")]
    ReferenceUnavailable,
}

impl QuizError {
    /// Creates a catalog error with the given message.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a user input error with the given message.
    pub fn user_input(msg: impl Into<String>) -> Self {
        Self::UserInput(msg.into())
    }

    /// Creates a persistence error with the given message.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Catalog(_) => "Catalog Error",
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::UserInput(_) => "Input Error",
            Self::Persistence(_) => "Persistence Error",
            Self::ReferenceUnavailable => "Reference Unavailable",
        }
    }

    /// Returns true for failures the session can continue past.
    /// Only catalog errors are fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Catalog(_))
    }
}

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_connection() {
        let err = QuizError::connection("Cannot connect to localhost:5432");
        assert_eq!(
            err.to_string(),
            "Connection error: Cannot connect to localhost:5432"
        );
        assert_eq!(err.category(), "Connection Error");
    }

    #[test]
    fn test_error_display_query_keeps_driver_text() {
        let err = QuizError::query("ERROR: column \"emal\" does not exist");
        assert_eq!(
            err.to_string(),
            "Query error: ERROR: column \"emal\" does not exist"
        );
        assert_eq!(err.category(), "Query Error");
    }

    #[test]
    fn test_error_display_user_input() {
        let err = QuizError::user_input("please write an SQL query");
        assert_eq!(err.to_string(), "Input error: please write an SQL query");
        assert_eq!(err.category(), "Input Error");
    }

    #[test]
    fn test_only_catalog_errors_are_fatal() {
        assert!(!QuizError::catalog("missing questions file").is_recoverable());
        assert!(QuizError::connection("down").is_recoverable());
        assert!(QuizError::query("syntax").is_recoverable());
        assert!(QuizError::user_input("blank").is_recoverable());
        assert!(QuizError::persistence("disk full").is_recoverable());
        assert!(QuizError::ReferenceUnavailable.is_recoverable());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QuizError>();
    }
}
