//! Shared types used across the chatbot crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Version string reported by `/` and `/health`.
pub const VERSION: &str = "1.0.0";

/// Default provider endpoint (xAI chat completions).
pub const DEFAULT_GROK_API_URL: &str = "https://api.x.ai/v1/chat/completions";

/// Default model identifier sent to the provider.
pub const DEFAULT_GROK_MODEL: &str = "grok-beta";

/// Environment variable holding the provider credential.
pub const ENV_GROK_API_KEY: &str = "GROK_API_KEY";

/// Inbound chat message. `message` must be non-empty after trimming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response envelope for a handled chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResult {
    /// Text shown to the user (model answer or canned block).
    pub response: String,
    /// Instant the request finished, serialized as RFC 3339.
    pub timestamp: DateTime<Utc>,
    /// True when the remote model produced `response`.
    pub using_ai: bool,
}

impl ChatResult {
    pub fn from_model(response: String) -> Self {
        Self {
            response,
            timestamp: Utc::now(),
            using_ai: true,
        }
    }

    pub fn from_fallback(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            timestamp: Utc::now(),
            using_ai: false,
        }
    }
}

/// Provider call parameters. Loaded from the `[grok]` table of the gateway config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrokSettings {
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Upper bound on one outbound call, in seconds.
    pub timeout_secs: u64,
}

impl GrokSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for GrokSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GROK_API_URL.to_string(),
            model: DEFAULT_GROK_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout_secs: 30,
        }
    }
}

/// Gateway configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Service title (used in logs and the `/` directory).
    pub app_name: String,
    /// Bind address for the HTTP listener.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Path of the optional JSON knowledge base.
    pub knowledge_path: String,
    /// Allowed CORS origins. Empty means mirror whatever origin the browser sends.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default)]
    pub grok: GrokSettings,
}

impl GatewayConfig {
    /// Load config from file and environment. Precedence: env `SHYAMPARI_*` > file
    /// (`SHYAMPARI_CONFIG` path, else `config/gateway.toml`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("SHYAMPARI_CONFIG").unwrap_or_else(|_| "config/gateway.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Same as [`GatewayConfig::load`] with an explicit file path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let grok = GrokSettings::default();
        let builder = config::Config::builder()
            .set_default("app_name", "Shyampari Edutech Chatbot")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000_i64)?
            .set_default("knowledge_path", "data.json")?
            .set_default("cors_allowed_origins", Vec::<String>::new())?
            .set_default("grok.api_url", grok.api_url)?
            .set_default("grok.model", grok.model)?
            .set_default("grok.temperature", f64::from(grok.temperature))?
            .set_default("grok.max_tokens", i64::from(grok.max_tokens))?
            .set_default("grok.timeout_secs", grok.timeout_secs as i64)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(
                config::Environment::with_prefix("SHYAMPARI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            )
            .build()?;

        built.try_deserialize()
    }
}

/// Reads the provider credential from the environment. Blank values count as absent.
pub fn grok_api_key_from_env() -> Option<String> {
    std::env::var(ENV_GROK_API_KEY)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}
