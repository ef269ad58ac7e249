//! Builds the JSON body of an Edge network request from a batch of host events.

mod config;
mod error;
mod event;
mod identity;
mod request;
mod request_builder;

pub use config::{EdgeConfig, DEFAULT_LINE_FEED, DEFAULT_RECORD_SEPARATOR};
pub use error::RequestError;
pub use event::{enrich, extract_platform_events, has_payload, iso8601_seconds, Event, EventData};
pub use identity::{AuthenticatedState, IdentityItem, IdentityMap};
pub use request::{EdgeRequest, KonductorConfig, RequestContext, RequestMetadata, Streaming};
pub use request_builder::{encode, RequestBuilder, ECID_NAMESPACE};
