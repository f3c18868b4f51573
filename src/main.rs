//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into the service, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use storefront_advisor::adapters::ai::OpenAiAdapter;
use storefront_advisor::adapters::catalog::Catalog;
use storefront_advisor::adapters::ui::tui::TuiInputPort;
use storefront_advisor::ports::{AdvisoryGateway, InputPort};
use storefront_advisor::shared::config::AppConfig;
use storefront_advisor::usecases::AdvisoryService;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    let provider = cfg.provider_config();
    storefront_advisor::adapters::ui::init_ui(provider.api_key_present);

    // --- Catalog ---
    let catalog = match cfg.catalog_path.as_deref() {
        Some(path) => Catalog::from_json_file(path)
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        None => Catalog::demo(),
    };

    // --- Provider gateway ---
    if provider.api_key_present {
        info!(
            model = %cfg.ai_model_or_default(),
            url = %cfg.ai_api_url_or_default(),
            "AI advisories enabled with OpenAI adapter"
        );
    } else {
        info!("no AI API key configured, advisories use rule-based fallback");
    }
    let gateway: Arc<dyn AdvisoryGateway> = Arc::new(
        OpenAiAdapter::new(
            cfg.ai_api_url_or_default(),
            cfg.ai_api_key().unwrap_or_default().to_string(),
            cfg.ai_model_or_default(),
            cfg.ai_timeout(),
        )
        .map_err(|e| anyhow::anyhow!("{}", e))?,
    );

    // --- Service ---
    let service = Arc::new(AdvisoryService::new(gateway, provider));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(catalog, service));

    // --- Run (main menu -> Search / Inventory / Recommendations / Pricing) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
