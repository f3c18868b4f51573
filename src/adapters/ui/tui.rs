//! Implements InputPort. Inquire-based interactive storefront menu.
//!
//! Each menu action builds one snapshot, asks the advisory service, and prints the text.

use crate::adapters::catalog::{Catalog, SEARCH_SUGGESTIONS};
use crate::domain::snapshots::{self, StockSummary};
use crate::domain::{
    AdvisoryResult, DomainError, DomainSnapshot, InventoryItem, PriceChange, PricingItem, Product,
};
use crate::ports::InputPort;
use crate::usecases::AdvisoryService;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{InquireError, Select, Text};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const MENU_SEARCH: &str = "AI Search";
const MENU_INVENTORY: &str = "Inventory Forecast";
const MENU_RECOMMENDATIONS: &str = "Personalized Recommendations";
const MENU_PRICING: &str = "Dynamic Pricing";
const MENU_EXIT: &str = "Exit";

const CUSTOM_QUERY: &str = "Custom query...";

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    catalog: Catalog,
    service: Arc<AdvisoryService>,
}

impl TuiInputPort {
    pub fn new(catalog: Catalog, service: Arc<AdvisoryService>) -> Self {
        Self { catalog, service }
    }

    /// Ask for an advisory with a spinner on screen while the request is pending.
    async fn advise_with_spinner(&self, snapshot: &DomainSnapshot) -> AdvisoryResult {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Generating insights...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.service.advise(snapshot).await;

        spinner.finish_and_clear();
        debug!(source = %result.source, "advisory rendered");
        result
    }

    async fn run_search(&self) -> Result<(), DomainError> {
        let mut options: Vec<&str> = SEARCH_SUGGESTIONS.to_vec();
        options.push(CUSTOM_QUERY);
        let choice = Select::new("Search for:", options)
            .prompt()
            .map_err(ui_error)?;
        let query = if choice == CUSTOM_QUERY {
            Text::new("Query:").prompt().map_err(ui_error)?
        } else {
            choice.to_string()
        };
        if query.trim().is_empty() {
            println!("Enter a query to search.");
            return Ok(());
        }

        let advisory = self
            .advise_with_spinner(&snapshots::search_snapshot(&query))
            .await;
        let results = snapshots::match_products(&self.catalog.products, &query);

        println!("\nAI Search Insights\n  {}\n", advisory.text);
        println!("Results:");
        for product in &results {
            println!("{}", format_product(product));
        }
        println!();
        Ok(())
    }

    async fn run_inventory(&self) -> Result<(), DomainError> {
        let term = Text::new("Filter products (name, SKU, category):")
            .with_default("")
            .prompt()
            .map_err(ui_error)?;

        let summary = StockSummary::from_items(&self.catalog.inventory);
        println!(
            "\nIn Stock: {} | Low Stock: {} | Critical: {}",
            summary.in_stock, summary.low_stock, summary.critical
        );
        for item in snapshots::filter_inventory(&self.catalog.inventory, &term) {
            println!("{}", format_inventory_row(item));
        }

        let advisory = self
            .advise_with_spinner(&snapshots::inventory_snapshot(&self.catalog.inventory))
            .await;
        println!("\nAI Forecast Insights\n  {}\n", advisory.text);
        Ok(())
    }

    async fn run_recommendations(&self) -> Result<(), DomainError> {
        if self.catalog.profiles.is_empty() {
            println!("No user profiles in catalog.");
            return Ok(());
        }
        let names: Vec<&str> = self
            .catalog
            .profiles
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        let choice = Select::new("Select user profile:", names)
            .prompt()
            .map_err(ui_error)?;
        let Some(profile) = self.catalog.profiles.iter().find(|p| p.name == choice) else {
            return Ok(());
        };

        println!(
            "\nInterests: {}\nRecent views: {}",
            profile.interests.join(", "),
            profile.recent_views.join(", ")
        );
        let advisory = self
            .advise_with_spinner(&snapshots::profile_snapshot(profile))
            .await;
        println!("\nAI Insights\n  {}\n", advisory.text);
        Ok(())
    }

    async fn run_pricing(&self) -> Result<(), DomainError> {
        println!();
        for item in &self.catalog.pricing {
            println!("{}", format_pricing_row(item));
        }
        let advisory = self
            .advise_with_spinner(&snapshots::pricing_snapshot(&self.catalog.pricing))
            .await;
        println!("\nAI Pricing Insights\n  {}\n", advisory.text);
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let menu = vec![
            MENU_SEARCH,
            MENU_INVENTORY,
            MENU_RECOMMENDATIONS,
            MENU_PRICING,
            MENU_EXIT,
        ];
        loop {
            let choice = match Select::new("What would you like to do?", menu.clone()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(ui_error(e)),
            };

            let outcome = match choice {
                MENU_SEARCH => self.run_search().await,
                MENU_INVENTORY => self.run_inventory().await,
                MENU_RECOMMENDATIONS => self.run_recommendations().await,
                MENU_PRICING => self.run_pricing().await,
                _ => return Ok(()),
            };

            // Esc inside a sub-prompt returns to the menu
            if let Err(e) = outcome {
                debug!(error = %e, "menu action aborted");
            }
        }
    }
}

fn ui_error(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

fn format_product(product: &Product) -> String {
    format!(
        "  {} [{}] ${:.2} ({:.1}★)",
        product.name, product.category, product.price, product.rating
    )
}

fn format_inventory_row(item: &InventoryItem) -> String {
    let marker = if item.at_reorder_point() { " ⚠" } else { "" };
    let mut supply = Vec::new();
    if let Some(forecast) = item.forecast_demand {
        supply.push(format!("forecast {}", forecast));
    }
    if let Some(supplier) = &item.supplier {
        supply.push(format!("supplier {}", supplier));
    }
    if let Some(date) = &item.last_restocked {
        supply.push(format!("restocked {}", date));
    }
    let supply = if supply.is_empty() {
        String::new()
    } else {
        format!(" {}", supply.join(", "))
    };
    format!(
        "  {:<28} {:<8} stock {:>4}{} (reorder at {}){} [{}]",
        item.name, item.sku, item.current_stock, marker, item.reorder_point, supply, item.status
    )
}

fn format_pricing_row(item: &PricingItem) -> String {
    let arrow = match item.price_change() {
        PriceChange::Up => "↑",
        PriceChange::Down => "↓",
        PriceChange::Hold => "=",
    };
    format!(
        "  {:<28} ${:.2} {} ${:.2} (competitor ${:.2}, demand {}, inventory {})",
        item.name,
        item.current_price,
        arrow,
        item.suggested_price,
        item.competitor_price,
        item.demand,
        item.inventory
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Demand, StockStatus};

    #[test]
    fn test_inventory_row_marks_reorder_point() {
        let item = InventoryItem {
            name: "Ergonomic Office Chair".to_string(),
            sku: "EOC-003".to_string(),
            category: "Furniture".to_string(),
            current_stock: 8,
            reorder_point: 10,
            status: StockStatus::Critical,
            forecast_demand: None,
            supplier: None,
            last_restocked: None,
        };
        let row = format_inventory_row(&item);
        assert!(row.contains("⚠"));
        assert!(row.ends_with("(reorder at 10) [Critical]"));
    }

    #[test]
    fn test_inventory_row_shows_supply_details() {
        let item = InventoryItem {
            name: "Wireless Charging Station".to_string(),
            sku: "WCS-002".to_string(),
            category: "Electronics".to_string(),
            current_stock: 12,
            reorder_point: 15,
            status: StockStatus::LowStock,
            forecast_demand: Some(35),
            supplier: Some("ElectroSupply".to_string()),
            last_restocked: Some("2024-01-10".to_string()),
        };
        let row = format_inventory_row(&item);
        assert!(row.ends_with(
            "(reorder at 15) forecast 35, supplier ElectroSupply, restocked 2024-01-10 [Low Stock]"
        ));
    }

    #[test]
    fn test_pricing_row_shows_direction() {
        let item = PricingItem {
            name: "Wireless Charging Station".to_string(),
            current_price: 89.99,
            suggested_price: 94.99,
            competitor_price: 99.99,
            demand: Demand::Medium,
            inventory: 12,
        };
        let row = format_pricing_row(&item);
        assert!(row.contains("$89.99 ↑ $94.99"));
        assert!(row.contains("demand Medium"));
    }
}
