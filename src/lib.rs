//! storefront-advisor: provider-first storefront insights with a deterministic offline fallback.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
