//! Error types for orientql.

use thiserror::Error;

/// The main error type for statement construction and rendering.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A schema placeholder has no formatter bound to it.
    #[error("Configuration error: no formatter bound to placeholder ':{token}'")]
    Configuration { token: String },

    /// A token holds a value its formatter cannot represent.
    #[error("Value type error in token '{token}': {message}")]
    ValueType { token: String, message: String },

    /// A string that should be a record id (`#cluster:position`) is not one.
    #[error("Invalid record id: '{0}'")]
    InvalidRid(String),

    /// `where_` was called while filter clauses already exist.
    #[error("WHERE already set, cannot add '{condition}'. Use and_where/or_where or reset_where first")]
    WhereAlreadySet { condition: String },

    /// The `?` placeholders in a condition do not match the bound value.
    #[error("Condition '{condition}' expects {expected} value(s) but has {found} placeholder(s)")]
    PlaceholderMismatch {
        condition: String,
        expected: usize,
        found: usize,
    },

    /// Malformed configuration.
    #[error("Configuration file error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QueryError {
    /// Create a value type error for the given token.
    pub fn value_type(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValueType {
            token: token.into(),
            message: message.into(),
        }
    }
}

/// A formatter's refusal to render a value.
///
/// Formatters know nothing about token names; the command that invoked the
/// formatter turns this into [`QueryError::ValueType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Unrepresentable(pub String);

impl Unrepresentable {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Attach the token name.
    pub fn for_token(self, token: &str) -> QueryError {
        QueryError::value_type(token, self.0)
    }
}

/// Result type alias for orientql operations.
pub type QueryResult<T> = Result<T, QueryError>;
