use serde::{Deserialize, Serialize};

use crate::event::EventData;
use crate::identity::IdentityMap;

/// Response streaming control characters. Streaming is on only when both are known,
/// so the pair lives or dies together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streaming {
    /// Sent before each response fragment.
    pub record_separator: String,
    /// Sent after each response fragment.
    pub line_feed: String,
}

impl Streaming {
    pub fn new(record_separator: Option<String>, line_feed: Option<String>) -> Option<Streaming> {
        match (record_separator, line_feed) {
            (Some(record_separator), Some(line_feed)) => Some(Streaming {
                record_separator,
                line_feed,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KonductorConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ims_org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streaming: Option<Streaming>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetadata {
    pub konductor_config: KonductorConfig,
}

/// Request level xdm, holds the identities of the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_map: Option<IdentityMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeRequest {
    pub meta: RequestMetadata,
    pub events: Vec<EventData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xdm: Option<RequestContext>,
}

impl EdgeRequest {
    pub fn new(meta: RequestMetadata) -> EdgeRequest {
        EdgeRequest {
            meta,
            events: Vec::new(),
            xdm: None,
        }
    }
}
