//! Infrastructure adapters. Implement ports.
//!
//! AI provider, catalog source, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod catalog;
pub mod ui;
