//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// No provider credential configured. Raised before any network attempt.
    #[error("Advisory provider not configured")]
    ProviderUnavailable,

    /// The provider call was attempted and failed (transport, status, body).
    #[error("Advisory provider failed: {0}")]
    Provider(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("UI error: {0}")]
    Ui(String),
}
