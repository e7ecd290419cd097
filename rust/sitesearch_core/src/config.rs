//! Widget configuration.

use std::time::Duration;

use serde::Deserialize;

/// Default number of suggestions shown per keystroke.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Default delay between losing focus and dismissing suggestions.
pub const DEFAULT_BLUR_GRACE_MS: u64 = 150;

/// Tunables for the search box.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Maximum suggestions rendered per query.
    pub max_suggestions: usize,
    /// Grace window after blur during which a pointer pick still commits.
    pub blur_grace_ms: u64,
    /// Where the record directory is fetched from (URL or file path).
    pub data_url: Option<String>,
}

impl WidgetConfig {
    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            data_url: None,
        }
    }
}

/// Parse a widget config from a JSON string. Missing keys take defaults.
pub fn parse_widget_config(json: &str) -> Result<WidgetConfig, serde_json::Error> {
    serde_json::from_str(json)
}
