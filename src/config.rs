use crate::api::FeedSource;
use crate::api::feed::{DEFAULT_ENDPOINT, DEFAULT_ITEMS_PER_SOURCE};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_feeds")]
    pub feeds: Vec<FeedSource>,
    /// Feed-to-JSON conversion endpoint, called with `?rss_url=<feed>`
    #[serde(default = "default_proxy_endpoint")]
    pub proxy_endpoint: String,
    #[serde(default = "default_max_items_per_source")]
    pub max_items_per_source: usize,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// 0 disables auto-refresh
    #[serde(default)]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_scroll_tick")]
    pub scroll_tick_ms: u64,
}

fn default_feeds() -> Vec<FeedSource> {
    vec![
        FeedSource::new("https://www.wired.com/feed/tag/ai/latest/rss", "Wired"),
        FeedSource::new(
            "https://techcrunch.com/category/artificial-intelligence/feed/",
            "TechCrunch",
        ),
        FeedSource::new(
            "https://feeds.arstechnica.com/arstechnica/technology-lab",
            "Ars Technica",
        ),
        FeedSource::new(
            "https://www.theverge.com/rss/ai-artificial-intelligence/index.xml",
            "The Verge",
        ),
    ]
}

fn default_proxy_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_items_per_source() -> usize {
    DEFAULT_ITEMS_PER_SOURCE
}

fn default_request_timeout() -> u64 {
    15
}

fn default_scroll_tick() -> u64 {
    150
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            proxy_endpoint: default_proxy_endpoint(),
            max_items_per_source: default_max_items_per_source(),
            request_timeout_secs: default_request_timeout(),
            refresh_interval_secs: 0,
            scroll_tick_ms: default_scroll_tick(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("newsticker");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parse config JSON and repair values that would leave the ticker unusable.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(content)?;
        if config.repair() {
            tracing::warn!("config contained invalid values, defaults restored");
        }
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn scroll_tick(&self) -> Duration {
        Duration::from_millis(self.scroll_tick_ms)
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_secs > 0).then(|| Duration::from_secs(self.refresh_interval_secs))
    }

    /// Returns true if anything was changed.
    fn repair(&mut self) -> bool {
        let mut changed = false;
        if self.feeds.is_empty() {
            self.feeds = default_feeds();
            changed = true;
        }
        if self.proxy_endpoint.trim().is_empty() {
            self.proxy_endpoint = default_proxy_endpoint();
            changed = true;
        }
        if self.max_items_per_source == 0 {
            self.max_items_per_source = default_max_items_per_source();
            changed = true;
        }
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = default_request_timeout();
            changed = true;
        }
        if self.scroll_tick_ms == 0 {
            self.scroll_tick_ms = default_scroll_tick();
            changed = true;
        }
        changed
    }

    /// Config for tests: defaults, never touches disk.
    pub fn test_config() -> Self {
        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.feeds.len(), 4);
        assert_eq!(config.feeds[0].source, "Wired");
        assert_eq!(config.proxy_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.max_items_per_source, 3);
        assert_eq!(config.refresh_interval(), None);
    }

    #[test]
    fn zero_values_are_repaired() {
        let json = r#"{"feeds": [], "max_items_per_source": 0, "scroll_tick_ms": 0, "request_timeout_secs": 0}"#;
        let config = Config::from_json(json).unwrap();
        assert_eq!(config.feeds, default_feeds());
        assert_eq!(config.max_items_per_source, 3);
        assert_eq!(config.scroll_tick(), Duration::from_millis(150));
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn custom_feeds_survive_round_trip() {
        let mut config = Config::test_config();
        config.feeds = vec![FeedSource::new("https://example.com/rss", "Example")];
        config.refresh_interval_secs = 300;
        let json = serde_json::to_string(&config).unwrap();
        let loaded = Config::from_json(&json).unwrap();
        assert_eq!(loaded.feeds, config.feeds);
        assert_eq!(loaded.refresh_interval(), Some(Duration::from_secs(300)));
    }
}
