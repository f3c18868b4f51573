//! Fallback heuristics. Deterministic advisory text from a snapshot alone.
//!
//! Never fails and never touches the network. Used whenever the provider is
//! unconfigured or its call fails.

use crate::domain::entities::{Demand, DomainSnapshot, InventoryItem, PricingItem, StockStatus};

/// Search keyword groups, checked in order (case-insensitive substring). First hit wins.
const SEARCH_RULES: &[(&[&str], &str)] = &[
    (
        &["running", "marathon"],
        "Users searching for running gear typically prioritize comfort, durability, and performance features. Consider highlighting cushioning technology, breathability, and long-distance support in product recommendations.",
    ),
    (
        &["wireless", "headphones"],
        "Audio product searches often focus on sound quality, battery life, and noise cancellation. Users may be price-sensitive but willing to pay premium for brand reputation and advanced features.",
    ),
    (
        &["water bottle", "hiking"],
        "Outdoor gear customers value durability, eco-friendliness, and practical features. They often research thoroughly before purchasing and appreciate detailed product specifications.",
    ),
    (
        &["laptop", "professional"],
        "Professional equipment buyers focus on performance specifications, warranty, and long-term value. They typically have higher budgets and prefer established brands with proven reliability.",
    ),
];

pub const INVENTORY_HEALTHY: &str = "Inventory levels are healthy across all products. Continue monitoring demand patterns and maintain current reorder schedules. Consider seasonal adjustments for upcoming quarters.";

const INVENTORY_CLOSING: &str = "Recommend increasing safety stock for high-demand categories and establishing automated reorder triggers to prevent stockouts.";

/// Canned paragraphs keyed by profile id.
const PROFILE_INSIGHTS: &[(&str, &str)] = &[
    (
        "fitness-enthusiast",
        "As a fitness enthusiast, you'll appreciate products that enhance your workout performance and recovery. Our recommendations focus on high-quality gear that supports your active lifestyle, with emphasis on durability and functionality.",
    ),
    (
        "tech-professional",
        "Your tech-focused profile indicates a preference for productivity-enhancing tools and cutting-edge technology. These recommendations prioritize performance, reliability, and features that streamline your professional workflow.",
    ),
    (
        "home-chef",
        "Based on your culinary interests, these products are selected to elevate your cooking experience. We've focused on quality kitchen tools and appliances that combine functionality with professional-grade performance.",
    ),
];

/// Items below this stock level count as low inventory for pricing.
const LOW_INVENTORY_THRESHOLD: u32 = 20;

const PRICING_LOW_INVENTORY: &str =
    "Low inventory items may benefit from strategic price increases to manage demand.";

const PRICING_COMPETITIVE: &str = "Maintain competitive pricing advantage while monitoring market response and profit margins.";

pub const PRICING_BALANCED: &str = "Current pricing strategy appears balanced. Monitor competitor movements and demand patterns for optimization opportunities.";

/// Produce the fallback advisory for any snapshot. Output is never empty.
pub fn fallback_advisory(snapshot: &DomainSnapshot) -> String {
    match snapshot {
        DomainSnapshot::Search { query } => search_insight(query),
        DomainSnapshot::Inventory { low_stock_items } => inventory_insight(low_stock_items),
        DomainSnapshot::Profile {
            profile_id,
            name,
            interests,
            ..
        } => profile_insight(profile_id, name, interests),
        DomainSnapshot::Pricing { items } => pricing_insight(items),
    }
}

fn search_insight(query: &str) -> String {
    let lower = query.to_lowercase();
    SEARCH_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, text)| (*text).to_string())
        .unwrap_or_else(|| {
            format!(
                "Based on your search for \"{}\", we've identified products that match your interests. Our AI considers factors like product popularity, user reviews, and seasonal trends to provide the most relevant recommendations.",
                query
            )
        })
}

fn inventory_insight(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return INVENTORY_HEALTHY.to_string();
    }

    let critical = count_status(items, StockStatus::Critical);
    let low = count_status(items, StockStatus::LowStock);

    let mut clauses = vec![format!(
        "Immediate attention needed: {} critical items require urgent restocking.",
        critical
    )];
    if low > 0 {
        clauses.push(format!("{} items approaching reorder points.", low));
    }
    clauses.push(INVENTORY_CLOSING.to_string());
    clauses.join(" ")
}

fn count_status(items: &[InventoryItem], status: StockStatus) -> usize {
    items.iter().filter(|item| item.status == status).count()
}

fn profile_insight(profile_id: &str, name: &str, interests: &[String]) -> String {
    PROFILE_INSIGHTS
        .iter()
        .find(|(id, _)| *id == profile_id)
        .map(|(_, text)| (*text).to_string())
        .unwrap_or_else(|| {
            format!(
                "Recommendations tailored for {} based on interests in {} and recent browsing behavior.",
                name,
                interests.join(", ")
            )
        })
}

fn pricing_insight(items: &[PricingItem]) -> String {
    let high_demand: Vec<&str> = items
        .iter()
        .filter(|item| item.demand == Demand::High)
        .map(|item| item.name.as_str())
        .collect();
    let low_inventory = items
        .iter()
        .any(|item| item.inventory < LOW_INVENTORY_THRESHOLD);
    let competitive = items.iter().any(PricingItem::undercuts_competitor);

    let mut clauses = Vec::new();
    if !high_demand.is_empty() {
        clauses.push(format!(
            "High-demand products ({}) show potential for price optimization.",
            high_demand.join(", ")
        ));
    }
    if low_inventory {
        clauses.push(PRICING_LOW_INVENTORY.to_string());
    }
    if competitive {
        clauses.push(PRICING_COMPETITIVE.to_string());
    }

    if clauses.is_empty() {
        PRICING_BALANCED.to_string()
    } else {
        clauses.join(" ")
    }
}
