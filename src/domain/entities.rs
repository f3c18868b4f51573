//! Domain entities. Pure data structures for the advisory core.
//!
//! No HTTP/UI types here. Catalog data is mapped into these by adapters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock status label of an inventory row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Critical")]
    Critical,
}

impl StockStatus {
    /// True for rows that belong in a restocking forecast.
    pub fn needs_attention(self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::Critical)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Demand level of a priced product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Demand {
    High,
    Medium,
    Low,
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Demand::High => "High",
            Demand::Medium => "Medium",
            Demand::Low => "Low",
        };
        f.write_str(label)
    }
}

/// A product row of the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub category: String,
    pub current_stock: u32,
    pub reorder_point: u32,
    pub status: StockStatus,
    #[serde(default)]
    pub forecast_demand: Option<u32>,
    #[serde(default)]
    pub supplier: Option<String>,
    /// ISO date of the last restock.
    #[serde(default)]
    pub last_restocked: Option<String>,
}

impl InventoryItem {
    /// Stock is at or below the reorder point.
    pub fn at_reorder_point(&self) -> bool {
        self.current_stock <= self.reorder_point
    }
}

/// Direction of the suggested price relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceChange {
    Up,
    Down,
    Hold,
}

/// A product row of the pricing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingItem {
    pub name: String,
    pub current_price: f64,
    pub suggested_price: f64,
    pub competitor_price: f64,
    pub demand: Demand,
    pub inventory: u32,
}

impl PricingItem {
    pub fn price_change(&self) -> PriceChange {
        if self.suggested_price > self.current_price {
            PriceChange::Up
        } else if self.suggested_price < self.current_price {
            PriceChange::Down
        } else {
            PriceChange::Hold
        }
    }

    /// Priced below the competitor.
    pub fn undercuts_competitor(&self) -> bool {
        self.current_price < self.competitor_price
    }
}

/// A shopper profile used for personalized recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    /// Ordered as entered; duplicates are not expected.
    pub interests: Vec<String>,
    pub recent_views: Vec<String>,
}

/// A searchable catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub rating: f32,
}

/// Minimal structured data needed to produce one advisory.
///
/// Exactly one context per request; the variant selects both the fallback
/// heuristic and the provider prompt template.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainSnapshot {
    Search {
        query: String,
    },
    Inventory {
        low_stock_items: Vec<InventoryItem>,
    },
    Profile {
        profile_id: String,
        name: String,
        interests: Vec<String>,
        recent_views: Vec<String>,
    },
    Pricing {
        items: Vec<PricingItem>,
    },
}

impl DomainSnapshot {
    /// Short context label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainSnapshot::Search { .. } => "search",
            DomainSnapshot::Inventory { .. } => "inventory",
            DomainSnapshot::Profile { .. } => "profile",
            DomainSnapshot::Pricing { .. } => "pricing",
        }
    }
}

/// Where the advisory text came from. Diagnostics only, never shown to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorySource {
    Provider,
    Fallback,
}

impl fmt::Display for AdvisorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisorySource::Provider => f.write_str("provider"),
            AdvisorySource::Fallback => f.write_str("fallback"),
        }
    }
}

/// Outcome of one advisory request. `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryResult {
    pub text: String,
    pub source: AdvisorySource,
}

impl AdvisoryResult {
    pub fn provider(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdvisorySource::Provider,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdvisorySource::Fallback,
        }
    }
}

/// Process-wide provider gate. Read-only after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProviderConfig {
    pub api_key_present: bool,
}
