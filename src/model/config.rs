use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from an optional config TOML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show a key-hint line in the status row
    #[serde(default)]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme field name (e.g. "background" = "#1A1A1A")
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
