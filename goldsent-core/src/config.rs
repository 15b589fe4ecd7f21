//! Dashboard configuration loaded from TOML.
//!
//! Only acquisition settings live here. Signal thresholds, sentiment weights
//! and clamp bounds are fixed in `metrics` and cannot be overridden.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::data::{FeedSettings, RecordOrder};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub feed: FeedConfig,
    pub ordering: OrderingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
    pub product_code: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub base_delay_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: "https://example.invalid/volume-oi.json".into(),
            product_code: "GC".into(),
            timeout_secs: 30,
            max_retries: 3,
            base_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    pub sort_by_date: bool,
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            url: self.feed.url.clone(),
            product_code: self.feed.product_code.clone(),
            timeout: Duration::from_secs(self.feed.timeout_secs),
            max_retries: self.feed.max_retries,
            base_delay: Duration::from_millis(self.feed.base_delay_ms),
        }
    }

    pub fn record_order(&self) -> RecordOrder {
        if self.ordering.sort_by_date {
            RecordOrder::ByDateLabel
        } else {
            RecordOrder::AsIngested
        }
    }
}
