//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, DomainSnapshot};

/// Generative-text provider gateway. One outbound call per invocation, no retries.
///
/// Implementations build the prompt for the snapshot's variant and embed its data verbatim.
#[async_trait::async_trait]
pub trait AdvisoryGateway: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Generate advisory text for `snapshot`.
    ///
    /// # Errors
    /// - `DomainError::ProviderUnavailable` before any network attempt when no credential is set.
    /// - `DomainError::Provider` when the call was attempted and failed.
    async fn invoke(&self, snapshot: &DomainSnapshot) -> Result<String, DomainError>;
}
