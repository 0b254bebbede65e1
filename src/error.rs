//! Error types for the MercadoLibre API boundary.

use thiserror::Error;

/// Error type for fetch and decode operations.
#[derive(Error, Debug)]
pub enum MeliError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected search result shape
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for fetch and decode operations.
pub type Result<T> = std::result::Result<T, MeliError>;
