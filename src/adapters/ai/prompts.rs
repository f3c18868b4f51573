//! Prompt templates, one per snapshot variant.
//!
//! Snapshot data is embedded verbatim so the provider sees exactly what the
//! fallback heuristics see.

use crate::domain::DomainSnapshot;

/// System message shared by all advisory prompts.
pub fn system_prompt() -> &'static str {
    "You are a retail analytics assistant for an online storefront. \
     Answer in plain prose without markdown. Be concise and actionable."
}

/// Build the user prompt for a snapshot.
pub fn user_prompt(snapshot: &DomainSnapshot) -> String {
    match snapshot {
        DomainSnapshot::Search { query } => format!(
            "Analyze this e-commerce search query and provide insights about user intent: \"{}\".\n\
             Focus on: 1) What the user is looking for, 2) Key features they might value, 3) Price sensitivity indicators.\n\
             Keep response under 100 words and actionable.",
            query
        ),
        DomainSnapshot::Inventory { low_stock_items } => {
            let items = low_stock_items
                .iter()
                .map(|item| {
                    format!(
                        "{} ({} units, reorder point: {})",
                        item.name, item.current_stock, item.reorder_point
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Analyze this inventory data and provide AI-powered insights:\n\n\
                 Low stock items: {}\n\n\
                 Provide 2-3 actionable recommendations for inventory optimization, considering demand forecasting and reorder strategies. Keep under 100 words.",
                items
            )
        }
        DomainSnapshot::Profile {
            name,
            interests,
            recent_views,
            ..
        } => format!(
            "Generate personalized e-commerce insights for a user profile:\n\
             Name: {}\n\
             Interests: {}\n\
             Recent Views: {}\n\n\
             Provide 2-3 sentences about why these product recommendations would appeal to this user, focusing on their behavior patterns and preferences. Keep it under 80 words.",
            name,
            interests.join(", "),
            recent_views.join(", ")
        ),
        DomainSnapshot::Pricing { items } => {
            let rows = items
                .iter()
                .map(|item| {
                    format!(
                        "{}: Current ${}, Suggested ${}, Competitor ${}, Demand: {}, Inventory: {}",
                        item.name,
                        item.current_price,
                        item.suggested_price,
                        item.competitor_price,
                        item.demand,
                        item.inventory
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "Analyze this pricing data and provide AI-powered pricing recommendations:\n\n\
                 Products with pricing opportunities:\n{}\n\n\
                 Provide 2-3 specific pricing strategy recommendations considering demand, competition, and inventory levels. Keep under 100 words.",
                rows
            )
        }
    }
}
