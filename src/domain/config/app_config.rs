//! Application configuration value object

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bot name used by the convenience helpers when the caller does not name one
pub const DEFAULT_BOT_NAME: &str = "default";

/// Request timeout applied when the config does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub default_bot: Option<String>,
    pub timeout: Option<u64>,
    pub api_url: Option<String>,
    pub bots: Option<BTreeMap<String, String>>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            default_bot: Some(DEFAULT_BOT_NAME.to_string()),
            timeout: Some(DEFAULT_TIMEOUT_SECS),
            api_url: None,
            bots: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this; the bots
    /// table merges per name.
    pub fn merge(self, other: Self) -> Self {
        Self {
            default_bot: other.default_bot.or(self.default_bot),
            timeout: other.timeout.or(self.timeout),
            api_url: other.api_url.or(self.api_url),
            bots: Self::merge_bots(self.bots, other.bots),
        }
    }

    /// Merge bot tables, names from other winning
    fn merge_bots(
        base: Option<BTreeMap<String, String>>,
        other: Option<BTreeMap<String, String>>,
    ) -> Option<BTreeMap<String, String>> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(mut b), Some(o)) => {
                b.extend(o);
                Some(b)
            }
        }
    }

    /// Get the default bot name, or the built-in default if not set
    pub fn default_bot_or_default(&self) -> &str {
        self.default_bot.as_deref().unwrap_or(DEFAULT_BOT_NAME)
    }

    /// Get the request timeout, or the built-in default if not set
    pub fn timeout_or_default(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Iterate configured bot name/token pairs
    pub fn bot_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bots
            .iter()
            .flat_map(|bots| bots.iter().map(|(name, token)| (name.as_str(), token.as_str())))
    }
}
