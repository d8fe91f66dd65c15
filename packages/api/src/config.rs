//! # Client configuration — `activities.toml`
//!
//! ```toml
//! [api]
//! base_url = ""                 # empty = serve from the page origin
//!
//! [timing]
//! message_dismiss_ms = 5000     # how long a status message stays visible
//! removal_transition_ms = 360   # fade-out window before a row is removed
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is the same as
//! the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the activities server. Empty means "same origin as the page".
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_message_dismiss")]
    pub message_dismiss_ms: u64,
    #[serde(default = "default_removal_transition")]
    pub removal_transition_ms: u64,
}

fn default_message_dismiss() -> u64 {
    5000
}

fn default_removal_transition() -> u64 {
    360
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            message_dismiss_ms: default_message_dismiss(),
            removal_transition_ms: default_removal_transition(),
        }
    }
}

impl TimingConfig {
    pub fn message_dismiss(&self) -> Duration {
        Duration::from_millis(self.message_dismiss_ms)
    }

    pub fn removal_transition(&self) -> Duration {
        Duration::from_millis(self.removal_transition_ms)
    }
}

impl ClientConfig {
    /// Builder method to point the client at a server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "activities.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.timing.message_dismiss(), Duration::from_millis(5000));
        assert_eq!(config.timing.removal_transition(), Duration::from_millis(360));
    }

    #[test]
    fn test_partial_timing_section() {
        let config = ClientConfig::from_toml("[timing]\nmessage_dismiss_ms = 1500\n").unwrap();
        assert_eq!(config.timing.message_dismiss_ms, 1500);
        assert_eq!(config.timing.removal_transition_ms, 360);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://localhost:8000");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(ClientConfig::from_toml("[timing]\nmessage_dismiss_ms = \"soon\"\n").is_err());
    }
}
