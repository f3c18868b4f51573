//! Application use cases. Orchestrate domain logic via ports.

pub mod advisory_service;

pub use advisory_service::AdvisoryService;
