//! Engine configuration.
//!
//! The owning application can build a `Config` in code or load it from TOML:
//!
//! ```toml
//! search_mode = "starts_with"
//! popup_delay = 0.25
//! max_cache_size = 64
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::matcher::SearchMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Default quiet period after a keystroke, in seconds.
pub const DEFAULT_POPUP_DELAY: f32 = 0.3;

/// Accepted popup delay range, in seconds (inclusive).
pub const POPUP_DELAY_RANGE: std::ops::RangeInclusive<f32> = 0.0..=1.0;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Predicate used to match vocabulary entries
    pub search_mode: SearchMode,

    /// Seconds to wait after the last keystroke before showing suggestions.
    /// Out-of-range values in a config file are replaced by the default.
    #[serde(deserialize_with = "deserialize_popup_delay")]
    pub popup_delay: f32,

    /// Maximum number of cached query results (0 disables the cache)
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::Contains,
            popup_delay: DEFAULT_POPUP_DELAY,
            max_cache_size: 128,
        }
    }
}

/// Whether `secs` is an acceptable popup delay. NaN is rejected.
pub fn is_valid_popup_delay(secs: f32) -> bool {
    POPUP_DELAY_RANGE.contains(&secs)
}

fn deserialize_popup_delay<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let secs = f32::deserialize(deserializer)?;
    if is_valid_popup_delay(secs) {
        Ok(secs)
    } else {
        tracing::debug!(secs, "ignoring out-of-range popup_delay in config");
        Ok(DEFAULT_POPUP_DELAY)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Set the popup delay in seconds.
    ///
    /// Values outside `[0.0, 1.0]` are ignored and the previous delay is kept.
    pub fn set_popup_delay(&mut self, secs: f32) {
        if is_valid_popup_delay(secs) {
            self.popup_delay = secs;
        }
    }

    /// The popup delay as a `Duration`. An out-of-range field reads as the default.
    pub fn popup_delay_duration(&self) -> Duration {
        if is_valid_popup_delay(self.popup_delay) {
            Duration::from_secs_f32(self.popup_delay)
        } else {
            Duration::from_secs_f32(DEFAULT_POPUP_DELAY)
        }
    }

    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.search_mode = mode;
    }
}
