//! AI adapter module. Implements AdvisoryGateway for LLM integration.
//!
//! Provides OpenAI-compatible adapter, prompt templates and a mock adapter for testing.

pub mod mock_adapter;
pub mod openai_adapter;
pub mod prompts;

pub use mock_adapter::{MockGateway, MockOutcome};
pub use openai_adapter::OpenAiAdapter;
