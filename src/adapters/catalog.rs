//! Storefront catalog source. Built-in demo data or a JSON file.
//!
//! Owned by the presentation side; the advisory core only sees snapshots built from it.

use crate::domain::{
    Demand, DomainError, InventoryItem, PricingItem, Product, StockStatus, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Suggested search queries offered by the search demo.
pub const SEARCH_SUGGESTIONS: &[&str] = &[
    "comfortable running shoes for marathon",
    "wireless headphones with noise cancellation",
    "eco-friendly water bottle for hiking",
    "professional laptop for video editing",
];

/// Everything the storefront demo screens read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub pricing: Vec<PricingItem>,
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
}

impl Catalog {
    /// Load a catalog from a JSON file. Missing sections are empty.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::Catalog(format!("read {}: {}", path.display(), e)))?;
        let catalog: Self = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Catalog(format!("parse {}: {}", path.display(), e)))?;
        info!(
            path = %path.display(),
            products = catalog.products.len(),
            inventory = catalog.inventory.len(),
            pricing = catalog.pricing.len(),
            profiles = catalog.profiles.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Demo storefront data.
    pub fn demo() -> Self {
        Self {
            products: vec![
                product("UltraRun Pro Marathon Shoes", "Athletic Footwear", 159.99, 4.8),
                product("SoundMax Wireless Headphones", "Audio", 249.99, 4.6),
                product("EcoFlow Insulated Water Bottle", "Outdoor Gear", 34.99, 4.9),
            ],
            inventory: vec![
                supplied(
                    stock("Smart Fitness Tracker Pro", "SFT-001", "Wearables", 45, 20, StockStatus::InStock),
                    85,
                    "TechCorp",
                    "2024-01-15",
                ),
                supplied(
                    stock("Wireless Charging Station", "WCS-002", "Electronics", 12, 15, StockStatus::LowStock),
                    35,
                    "ElectroSupply",
                    "2024-01-10",
                ),
                supplied(
                    stock("Ergonomic Office Chair", "EOC-003", "Furniture", 8, 10, StockStatus::Critical),
                    25,
                    "FurniturePlus",
                    "2024-01-05",
                ),
                supplied(
                    stock("Premium Coffee Maker", "PCM-004", "Kitchen", 67, 25, StockStatus::InStock),
                    40,
                    "KitchenPro",
                    "2024-01-18",
                ),
            ],
            pricing: vec![
                priced("Smart Fitness Tracker Pro", 199.99, 189.99, 195.0, Demand::High, 45),
                priced("Wireless Charging Station", 89.99, 94.99, 99.99, Demand::Medium, 12),
                priced("Ergonomic Office Chair", 299.99, 279.99, 320.0, Demand::Low, 8),
            ],
            profiles: vec![
                profile(
                    "fitness-enthusiast",
                    "Fitness Enthusiast",
                    &["workout gear", "nutrition", "wearables"],
                    &["running shoes", "protein powder", "fitness tracker"],
                ),
                profile(
                    "tech-professional",
                    "Tech Professional",
                    &["electronics", "productivity", "workspace"],
                    &["laptop", "wireless mouse", "standing desk"],
                ),
                profile(
                    "home-chef",
                    "Home Chef",
                    &["kitchen appliances", "cooking tools", "ingredients"],
                    &["chef knife", "cast iron pan", "spice rack"],
                ),
            ],
        }
    }
}

fn product(name: &str, category: &str, price: f64, rating: f32) -> Product {
    Product {
        name: name.to_string(),
        category: category.to_string(),
        price,
        rating,
    }
}

fn stock(
    name: &str,
    sku: &str,
    category: &str,
    current_stock: u32,
    reorder_point: u32,
    status: StockStatus,
) -> InventoryItem {
    InventoryItem {
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        current_stock,
        reorder_point,
        status,
        forecast_demand: None,
        supplier: None,
        last_restocked: None,
    }
}

fn supplied(
    mut item: InventoryItem,
    forecast_demand: u32,
    supplier: &str,
    last_restocked: &str,
) -> InventoryItem {
    item.forecast_demand = Some(forecast_demand);
    item.supplier = Some(supplier.to_string());
    item.last_restocked = Some(last_restocked.to_string());
    item
}

fn priced(
    name: &str,
    current_price: f64,
    suggested_price: f64,
    competitor_price: f64,
    demand: Demand,
    inventory: u32,
) -> PricingItem {
    PricingItem {
        name: name.to_string(),
        current_price,
        suggested_price,
        competitor_price,
        demand,
        inventory,
    }
}

fn profile(id: &str, name: &str, interests: &[&str], recent_views: &[&str]) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        recent_views: recent_views.iter().map(|s| s.to_string()).collect(),
    }
}
