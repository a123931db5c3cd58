//! Unified error handling for the crate.
//!
//! A single error enum covers configuration, persistence, and serialization
//! failures. The HTTP layer maps these onto status codes; everything below it
//! propagates with `?`.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or was invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Details of what went wrong
        message: String,
    },

    /// A row lookup by id came up empty
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Table the lookup ran against
        entity: &'static str,
        /// The id that did not resolve
        id: i64,
    },

    /// Database error from the underlying engine
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The order items blob could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
