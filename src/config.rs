//! Configuration for recordset.
//!
//! Holds the defaults callers reach for repeatedly: the page size used by
//! `paginate_with` and the debounce delay/edge used by
//! `Debounced::from_config`.
use crate::error::{RecordsetError, Result};
use crate::timing::DebounceEdge;
use serde::de::Error;
use std::time::Duration;

/// Library configuration
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "Config::default_page_size")]
    pub page_size: usize,

    /// Debounce defaults
    #[serde(default)]
    pub debounce: DebounceConfig,
}

/// Settings for debounced callables
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebounceConfig {
    /// Quiet period in milliseconds
    #[serde(default = "DebounceConfig::default_delay_ms")]
    pub delay_ms: u64,

    #[serde(default)]
    pub edge: DebounceEdge,
}

impl DebounceConfig {
    const fn default_delay_ms() -> u64 {
        300
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_edge(mut self, edge: DebounceEdge) -> Self {
        self.edge = edge;
        self
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: Self::default_delay_ms(),
            edge: DebounceEdge::default(),
        }
    }
}

impl Config {
    const fn default_page_size() -> usize {
        10
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        assert!(page_size > 0, "Page size must be greater than zero");
        self.page_size = page_size;
        self
    }

    pub fn with_debounce(mut self, debounce: DebounceConfig) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(RecordsetError::InvalidConfig(
                "Page size must be greater than zero".to_string(),
            ));
        }

        if self.debounce.delay_ms > 24 * 60 * 60 * 1000 {
            log::warn!(
                "Debounce delay of {}ms is longer than a day; deferred calls will rarely fire",
                self.debounce.delay_ms
            );
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: Self::default_page_size(),
            debounce: DebounceConfig::default(),
        }
    }
}
