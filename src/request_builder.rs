use crate::config::EdgeConfig;
use crate::error::RequestError;
use crate::event::{extract_platform_events, Event};
use crate::identity::IdentityMap;
use crate::request::{EdgeRequest, KonductorConfig, RequestContext, RequestMetadata, Streaming};

const TAG: &str = "RequestBuilder";

pub const ECID_NAMESPACE: &str = "ECID";

/// Composes a batch of events into one Edge request body.
///
/// The fields are read on every build call. A builder shared between threads must not be
/// mutated while a build is running; callers serialize such updates themselves.
#[derive(Debug, Default, Clone)]
pub struct RequestBuilder {
    /// Control character used before each response fragment.
    pub record_separator: Option<String>,
    /// Control character used at the end of each response fragment.
    pub line_feed: Option<String>,
    /// The Experience Cloud Organization ID sent with the request.
    pub organization_id: Option<String>,
    /// The Experience Cloud ID sent with the request.
    pub experience_cloud_id: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> RequestBuilder {
        RequestBuilder::default()
    }

    pub fn from_config(config: &EdgeConfig) -> RequestBuilder {
        let (record_separator, line_feed) = config.streaming_markers();
        RequestBuilder {
            record_separator,
            line_feed,
            organization_id: config.org_id.clone(),
            experience_cloud_id: config.ecid.clone(),
        }
    }

    pub fn organization_id(mut self, organization_id: impl Into<String>) -> RequestBuilder {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn experience_cloud_id(mut self, experience_cloud_id: impl Into<String>) -> RequestBuilder {
        self.experience_cloud_id = Some(experience_cloud_id.into());
        self
    }

    pub fn streaming(mut self, record_separator: impl Into<String>, line_feed: impl Into<String>) -> RequestBuilder {
        self.record_separator = Some(record_separator.into());
        self.line_feed = Some(line_feed.into());
        self
    }

    /// Assembles the request document, or None when there are no events to send.
    ///
    /// Events without payload are dropped, so a batch made only of those still yields a
    /// request with an empty `events` list.
    pub fn build_request(&self, events: &[Event]) -> Option<EdgeRequest> {
        if events.is_empty() {
            return None;
        }

        let streaming = Streaming::new(self.record_separator.clone(), self.line_feed.clone());
        let konductor_config = KonductorConfig {
            ims_org_id: self.organization_id.clone(),
            streaming,
        };
        let mut request = EdgeRequest::new(RequestMetadata { konductor_config });
        request.events = extract_platform_events(events);

        if let Some(ecid) = &self.experience_cloud_id {
            let mut identity_map = IdentityMap::new();
            identity_map.add_item(ECID_NAMESPACE, ecid);
            request.xdm = Some(RequestContext {
                identity_map: Some(identity_map),
            });
        }

        log::debug!(
            "Built request with {} of {} events",
            request.events.len(),
            events.len()
        );
        Some(request)
    }

    /// Encoded request body. `Ok(None)` means there is nothing to send.
    pub fn try_payload(&self, events: &[Event]) -> Result<Option<Vec<u8>>, RequestError> {
        match self.build_request(events) {
            Some(request) => encode(&request).map(Some),
            None => Ok(None),
        }
    }

    /// Encoded request body, or None when there is nothing to send or encoding failed.
    /// Failures are logged and the batch should be skipped by the caller.
    pub fn payload(&self, events: &[Event]) -> Option<Vec<u8>> {
        payload_from(self.try_payload(events))
    }
}

fn payload_from(result: Result<Option<Vec<u8>>, RequestError>) -> Option<Vec<u8>> {
    match result {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!(target: TAG, "{}", e);
            None
        }
    }
}

pub fn encode(request: &EdgeRequest) -> Result<Vec<u8>, RequestError> {
    serde_json::to_vec(request).map_err(RequestError::Encode)
}
