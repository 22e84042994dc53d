use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::category::{CategoryConfig, CategoryTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    /// Replaces the built-in category table when present
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            feed: FeedConfig::default(),
            categories: default_categories(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Author handle used when none is given on the command line
    #[serde(default)]
    pub default_handle: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_handle: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Feed-to-JSON conversion endpoint
    #[serde(default = "default_converter_url")]
    pub converter_url: String,
    /// Syndication URL template, `{handle}` is replaced with the author handle
    #[serde(default = "default_feed_url_template")]
    pub feed_url_template: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// How long a fetched article list is reused, in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// Maximum number of handles kept in the result cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Thumbnail used when an item carries no image at all
    #[serde(default = "default_placeholder_thumbnail")]
    pub placeholder_thumbnail: String,
    /// HTTP proxy URL (e.g., "http://127.0.0.1:7890" or "socks5://127.0.0.1:1080")
    #[serde(default)]
    pub proxy_url: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            converter_url: default_converter_url(),
            feed_url_template: default_feed_url_template(),
            request_timeout_secs: default_timeout(),
            cache_ttl_secs: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
            placeholder_thumbnail: default_placeholder_thumbnail(),
            proxy_url: None,
        }
    }
}

impl FeedConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_converter_url() -> String {
    "https://api.rss2json.com/v1/api.json".to_string()
}

fn default_feed_url_template() -> String {
    "https://medium.com/feed/@{handle}".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_cache_ttl() -> u64 {
    3600 // 1 hour
}

fn default_cache_capacity() -> u64 {
    64
}

fn default_placeholder_thumbnail() -> String {
    "/images/article-placeholder.jpg".to_string()
}

fn default_categories() -> Vec<CategoryConfig> {
    CategoryTable::builtin().into_categories()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when the file is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Category table handed to the classifier
    pub fn category_table(&self) -> CategoryTable {
        CategoryTable::new(self.categories.clone())
    }
}
