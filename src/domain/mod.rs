//! Core domain layer. No external I/O dependencies.
//!
//! Entities, snapshot builders and the fallback heuristics live here.

pub mod entities;
pub mod errors;
pub mod heuristics;
pub mod snapshots;

pub use entities::{
    AdvisoryResult, AdvisorySource, Demand, DomainSnapshot, InventoryItem, PriceChange,
    PricingItem, Product, ProviderConfig, StockStatus, UserProfile,
};
pub use errors::DomainError;
pub use heuristics::fallback_advisory;
