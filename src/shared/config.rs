//! Application configuration. Provider credentials, endpoint, catalog path.

use crate::domain::ProviderConfig;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // AI Provider Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key. Read from ADVISOR_AI_API_KEY, falling back to OPENAI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API URL. Defaults to OpenAI. Read from ADVISOR_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Defaults to "gpt-4o-mini". Read from ADVISOR_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Whole-request timeout in seconds (default 30). Read from ADVISOR_AI_TIMEOUT_SECS.
    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────
    /// JSON catalog file replacing the built-in demo data. Read from ADVISOR_CATALOG_PATH.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut cfg = Self::from_sources(
            std::env::var("ADVISOR_CONFIG").ok(),
            config::Environment::with_prefix("ADVISOR"),
        )?;
        // OPENAI_API_KEY is honoured without prefix so a stock OpenAI .env works as-is
        if cfg.ai_api_key.is_none() {
            cfg.ai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Ok(cfg)
    }

    /// Optional config file overlaid by prefixed environment variables.
    fn from_sources(
        file: Option<String>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(&path));
        }
        c.add_source(env).build()?.try_deserialize()
    }

    /// Returns the AI API key if configured and non-blank.
    pub fn ai_api_key(&self) -> Option<&str> {
        self.ai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Returns the AI API URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    /// Returns the AI model name. Defaults to "gpt-4o-mini".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs.unwrap_or(DEFAULT_AI_TIMEOUT_SECS))
    }

    /// Returns true if AI is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    /// Credential gate handed to the advisory service.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            api_key_present: self.is_ai_configured(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ai_api_url_or_default(), DEFAULT_AI_API_URL);
        assert_eq!(cfg.ai_model_or_default(), "gpt-4o-mini");
        assert_eq!(cfg.ai_timeout(), Duration::from_secs(30));
        assert!(!cfg.provider_config().api_key_present);
    }

    #[test]
    fn test_blank_key_counts_as_absent() {
        let cfg = AppConfig {
            ai_api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.ai_api_key(), None);
        assert!(!cfg.provider_config().api_key_present);
    }

    #[test]
    fn test_present_key_enables_provider() {
        let cfg = AppConfig {
            ai_api_key: Some(" sk-live ".to_string()),
            ai_model: Some("llama3.2".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.ai_api_key(), Some("sk-live"));
        assert_eq!(cfg.ai_model_or_default(), "llama3.2");
        assert!(cfg.provider_config().api_key_present);
    }

    fn env_source(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("ADVISOR").source(Some(map))
    }

    #[test]
    fn test_prefixed_env_maps_to_fields() {
        let cfg = AppConfig::from_sources(
            None,
            env_source(&[
                ("ADVISOR_AI_TIMEOUT_SECS", "45"),
                ("ADVISOR_AI_MODEL", "llama3.2"),
                ("ADVISOR_CATALOG_PATH", "catalog.json"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.ai_timeout(), Duration::from_secs(45));
        assert_eq!(cfg.ai_model_or_default(), "llama3.2");
        assert_eq!(cfg.catalog_path.as_deref(), Some("catalog.json"));
        assert!(!cfg.is_ai_configured());
    }

    #[test]
    fn test_unparsable_timeout_is_config_error() {
        let result =
            AppConfig::from_sources(None, env_source(&[("ADVISOR_AI_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }
}
