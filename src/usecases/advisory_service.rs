//! Advisory service. Orchestrates provider-first advisory generation.
//!
//! Coordinates the provider gateway and the fallback heuristics so that every
//! request ends with displayable text.

use crate::domain::{
    AdvisoryResult, DomainError, DomainSnapshot, ProviderConfig, fallback_advisory,
};
use crate::ports::AdvisoryGateway;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Service producing one advisory per user action.
///
/// Flow:
/// 1. No credential configured: fallback heuristics, gateway untouched
/// 2. Credential configured: single gateway attempt
/// 3. Any gateway failure: fallback heuristics
///
/// Holds no per-request state; concurrent calls share nothing mutable.
pub struct AdvisoryService {
    gateway: Arc<dyn AdvisoryGateway>,
    provider: ProviderConfig,
}

impl AdvisoryService {
    /// Create a new advisory service.
    ///
    /// # Arguments
    /// * `gateway` - Provider gateway implementation (OpenAI, Mock, etc.)
    /// * `provider` - Process-wide credential gate
    pub fn new(gateway: Arc<dyn AdvisoryGateway>, provider: ProviderConfig) -> Self {
        Self { gateway, provider }
    }

    /// Produce an advisory for `snapshot`. Never fails; `text` is never empty.
    pub async fn advise(&self, snapshot: &DomainSnapshot) -> AdvisoryResult {
        let context = snapshot.kind();

        let result = if self.provider.api_key_present {
            self.try_provider(snapshot).await
        } else {
            debug!(context, "provider not configured, using fallback");
            self.fallback(snapshot)
        };

        info!(context, source = %result.source, "advisory ready");
        result
    }

    /// Single gateway attempt; every failure resolves to the fallback text.
    async fn try_provider(&self, snapshot: &DomainSnapshot) -> AdvisoryResult {
        let context = snapshot.kind();
        match self.gateway.invoke(snapshot).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    warn!(
                        context,
                        provider = self.gateway.name(),
                        "provider returned empty advisory, using fallback"
                    );
                    self.fallback(snapshot)
                } else {
                    AdvisoryResult::provider(text)
                }
            }
            Err(DomainError::ProviderUnavailable) => {
                debug!(
                    context,
                    provider = self.gateway.name(),
                    "provider reported unavailable, using fallback"
                );
                self.fallback(snapshot)
            }
            Err(e) => {
                warn!(
                    context,
                    provider = self.gateway.name(),
                    error = %e,
                    "provider failed, using fallback"
                );
                self.fallback(snapshot)
            }
        }
    }

    fn fallback(&self, snapshot: &DomainSnapshot) -> AdvisoryResult {
        AdvisoryResult::fallback(fallback_advisory(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockGateway, MockOutcome};
    use crate::domain::AdvisorySource;

    fn configured() -> ProviderConfig {
        ProviderConfig {
            api_key_present: true,
        }
    }

    fn search() -> DomainSnapshot {
        DomainSnapshot::Search {
            query: "hiking boots".to_string(),
        }
    }

    #[tokio::test]
    async fn test_provider_text_is_trimmed() {
        let gateway = Arc::new(MockGateway::replying("  Hikers want grip.  \n"));
        let service = AdvisoryService::new(gateway, configured());

        let result = service.advise(&search()).await;

        assert_eq!(result, AdvisoryResult::provider("Hikers want grip."));
    }

    #[tokio::test]
    async fn test_blank_provider_text_falls_back() {
        let gateway = Arc::new(MockGateway::replying("   "));
        let service = AdvisoryService::new(gateway.clone(), configured());

        let result = service.advise(&search()).await;

        assert_eq!(result.source, AdvisorySource::Fallback);
        assert_eq!(result.text, fallback_advisory(&search()));
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_despite_key_falls_back() {
        let gateway = Arc::new(MockGateway::new(MockOutcome::Unavailable));
        let service = AdvisoryService::new(gateway, configured());

        let result = service.advise(&search()).await;

        assert_eq!(result.source, AdvisorySource::Fallback);
        assert!(!result.text.is_empty());
    }

    /// Buffer shared with a test-local fmt subscriber.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_offline_advisory_logs_its_source() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let gateway = Arc::new(MockGateway::replying("unused"));
        let service = AdvisoryService::new(gateway.clone(), ProviderConfig::default());

        let result = service.advise(&search()).await;

        assert_eq!(result.source, AdvisorySource::Fallback);
        assert_eq!(gateway.calls(), 0);
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("advisory ready"));
        assert!(output.contains("source=fallback"));
    }
}
