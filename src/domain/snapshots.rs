//! Snapshot builders. Select the slice of catalog data one advisory needs.
//!
//! All functions are pure and total; ordering of the input is preserved.

use crate::domain::entities::{
    DomainSnapshot, InventoryItem, PricingItem, Product, StockStatus, UserProfile,
};

/// Number of products shown when a search matches nothing.
const UNMATCHED_SEARCH_RESULTS: usize = 2;

pub fn search_snapshot(query: &str) -> DomainSnapshot {
    DomainSnapshot::Search {
        query: query.to_string(),
    }
}

/// Keeps only `Low Stock` and `Critical` rows, in catalog order.
pub fn inventory_snapshot(items: &[InventoryItem]) -> DomainSnapshot {
    DomainSnapshot::Inventory {
        low_stock_items: items
            .iter()
            .filter(|item| item.status.needs_attention())
            .cloned()
            .collect(),
    }
}

pub fn profile_snapshot(profile: &UserProfile) -> DomainSnapshot {
    DomainSnapshot::Profile {
        profile_id: profile.id.clone(),
        name: profile.name.clone(),
        interests: profile.interests.clone(),
        recent_views: profile.recent_views.clone(),
    }
}

pub fn pricing_snapshot(items: &[PricingItem]) -> DomainSnapshot {
    DomainSnapshot::Pricing {
        items: items.to_vec(),
    }
}

/// Products whose name or category contains `query` (case-insensitive).
/// Falls back to the first two products so a search never renders empty.
pub fn match_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    let matched: Vec<Product> = products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    if matched.is_empty() {
        products
            .iter()
            .take(UNMATCHED_SEARCH_RESULTS)
            .cloned()
            .collect()
    } else {
        matched
    }
}

/// Inventory table filter over name, SKU and category. Empty term keeps everything.
pub fn filter_inventory<'a>(items: &'a [InventoryItem], term: &str) -> Vec<&'a InventoryItem> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.sku.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Per-status row counts shown above the forecast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub in_stock: usize,
    pub low_stock: usize,
    pub critical: usize,
}

impl StockSummary {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            match item.status {
                StockStatus::InStock => acc.in_stock += 1,
                StockStatus::LowStock => acc.low_stock += 1,
                StockStatus::Critical => acc.critical += 1,
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, sku: &str, status: StockStatus) -> InventoryItem {
        InventoryItem {
            name: name.to_string(),
            sku: sku.to_string(),
            category: "Electronics".to_string(),
            current_stock: 5,
            reorder_point: 10,
            status,
            forecast_demand: None,
            supplier: None,
            last_restocked: None,
        }
    }

    fn product(name: &str, category: &str) -> Product {
        Product {
            name: name.to_string(),
            category: category.to_string(),
            price: 10.0,
            rating: 4.5,
        }
    }

    #[test]
    fn test_inventory_snapshot_keeps_order_and_filters() {
        let items = vec![
            item("A", "A-1", StockStatus::Critical),
            item("B", "B-1", StockStatus::InStock),
            item("C", "C-1", StockStatus::LowStock),
        ];

        let DomainSnapshot::Inventory { low_stock_items } = inventory_snapshot(&items) else {
            panic!("expected inventory snapshot");
        };
        let names: Vec<&str> = low_stock_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_match_products_by_category() {
        let products = vec![
            product("UltraRun Pro", "Athletic Footwear"),
            product("SoundMax", "Audio"),
            product("EcoFlow Bottle", "Outdoor Gear"),
        ];
        let hits = match_products(&products, "AUDIO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "SoundMax");
    }

    #[test]
    fn test_match_products_unmatched_returns_first_two() {
        let products = vec![
            product("UltraRun Pro", "Athletic Footwear"),
            product("SoundMax", "Audio"),
            product("EcoFlow Bottle", "Outdoor Gear"),
        ];
        let hits = match_products(&products, "telescope");
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["UltraRun Pro", "SoundMax"]);
    }

    #[test]
    fn test_filter_inventory_by_sku_and_empty_term() {
        let items = vec![
            item("Chair", "EOC-003", StockStatus::Critical),
            item("Coffee Maker", "PCM-004", StockStatus::InStock),
        ];
        let hits = filter_inventory(&items, "pcm");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Coffee Maker");
        assert_eq!(filter_inventory(&items, "").len(), 2);
    }

    #[test]
    fn test_stock_summary_counts() {
        let items = vec![
            item("A", "1", StockStatus::Critical),
            item("B", "2", StockStatus::InStock),
            item("C", "3", StockStatus::InStock),
            item("D", "4", StockStatus::LowStock),
        ];
        assert_eq!(
            StockSummary::from_items(&items),
            StockSummary {
                in_stock: 2,
                low_stock: 1,
                critical: 1
            }
        );
    }
}
