//! Mock gateway for testing without API calls.
//!
//! Returns a scripted outcome and counts invocations.

use crate::domain::{DomainError, DomainSnapshot};
use crate::ports::AdvisoryGateway;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// Scripted outcome of every `invoke` call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Reply(String),
    Fail(String),
    Unavailable,
}

/// Mock advisory gateway.
///
/// Returns the scripted outcome without making API calls and records each
/// snapshot it was asked about. Simulates network latency with a configurable delay.
pub struct MockGateway {
    outcome: MockOutcome,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    calls: AtomicUsize,
    seen: Mutex<Vec<DomainSnapshot>>,
}

impl MockGateway {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(MockOutcome::Reply(text.into()))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::new(MockOutcome::Fail(reason.into()))
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Number of `invoke` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshots received, in call order.
    pub fn seen(&self) -> Vec<DomainSnapshot> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl AdvisoryGateway for MockGateway {
    fn name(&self) -> &str {
        "mock"
    }

    async fn invoke(&self, snapshot: &DomainSnapshot) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(snapshot.clone());
        }
        info!(context = snapshot.kind(), "[MOCK] Simulating advisory call");

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.outcome {
            MockOutcome::Reply(text) => Ok(text.clone()),
            MockOutcome::Fail(reason) => Err(DomainError::Provider(reason.clone())),
            MockOutcome::Unavailable => Err(DomainError::ProviderUnavailable),
        }
    }
}
