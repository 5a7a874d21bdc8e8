//! Configuration loaded from scholar_lens.toml and environment variables.
//! Env wins over file; the API key only ever comes from the environment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub model: String,
    pub max_tokens: u32,
    pub base_url: Option<String>,
    /// Loaded from ANTHROPIC_API_KEY, never from the config file
    #[serde(skip)]
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Bookmark JSON file; empty means in-memory only
    pub bookmarks_path: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-5-haiku-20241022".to_string(),
            max_tokens: 4000,
            base_url: None,
            api_key: String::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bookmarks_path: "bookmarks.json".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the TOML file named by SCHOLAR_LENS_CONFIG
    /// (default "scholar_lens.toml"), then apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("SCHOLAR_LENS_CONFIG")
            .unwrap_or_else(|_| "scholar_lens.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            config.provider.api_key = key;
        }
        if let Ok(model) = std::env::var("SCHOLAR_MODEL") {
            config.provider.model = model;
        }
        if let Ok(base) = std::env::var("SCHOLAR_PROVIDER_BASE_URL") {
            config.provider.base_url = Some(base);
        }
        if let Ok(raw) = std::env::var("SCHOLAR_MAX_TOKENS") {
            match raw.parse::<u32>() {
                Ok(n) => config.provider.max_tokens = n,
                Err(_) => tracing::warn!("Ignoring unparseable SCHOLAR_MAX_TOKENS '{}'", raw),
            }
        }
        if let Ok(bind) = std::env::var("SCHOLAR_HTTP_BIND") {
            config.server.bind = bind;
        }
        if let Ok(path) = std::env::var("SCHOLAR_BOOKMARKS_PATH") {
            config.storage.bookmarks_path = path;
        }

        // Clamp obviously broken values instead of failing startup
        if config.provider.max_tokens == 0 {
            tracing::warn!("max_tokens 0 is unusable, resetting to 4000");
            config.provider.max_tokens = 4000;
        } else if config.provider.max_tokens > 64_000 {
            tracing::warn!(
                "max_tokens {} exceeds provider limits, clamping to 64000",
                config.provider.max_tokens
            );
            config.provider.max_tokens = 64_000;
        }

        if config.provider.api_key.is_empty() {
            tracing::warn!("ANTHROPIC_API_KEY is not set; analysis requests will fail");
        }

        Ok(config)
    }
}
