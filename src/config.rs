use serde::{Deserialize, Serialize};

use crate::error::RequestError;

pub const DEFAULT_RECORD_SEPARATOR: &str = "\u{0000}";
pub const DEFAULT_LINE_FEED: &str = "\n";

/// Builder settings as supplied by the host, e.g.
/// `{"org_id": "...@AdobeOrg", "ecid": "...", "streaming_enabled": true}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub org_id: Option<String>,
    pub ecid: Option<String>,
    pub record_separator: Option<String>,
    pub line_feed: Option<String>,
    #[serde(default = "default_streaming_enabled")]
    pub streaming_enabled: bool,
}

fn default_streaming_enabled() -> bool {
    false
}

impl EdgeConfig {
    pub fn from_slice(config_bytes: &[u8]) -> Result<EdgeConfig, RequestError> {
        let config = serde_json::from_slice::<EdgeConfig>(config_bytes).map_err(RequestError::Config)?;
        log::debug!(
            "Loaded configuration: org_id={:?} streaming_enabled={}",
            config.org_id,
            config.streaming_enabled
        );
        Ok(config)
    }

    // markers are only sent when streaming is enabled, explicit ones win over the defaults
    pub fn streaming_markers(&self) -> (Option<String>, Option<String>) {
        if !self.streaming_enabled {
            return (None, None);
        }
        (
            Some(
                self.record_separator
                    .clone()
                    .unwrap_or_else(|| DEFAULT_RECORD_SEPARATOR.to_string()),
            ),
            Some(
                self.line_feed
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LINE_FEED.to_string()),
            ),
        )
    }
}
