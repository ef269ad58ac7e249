use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const XDM: &str = "xdm";
pub const TIMESTAMP: &str = "timestamp";
pub const EVENT_ID: &str = "eventId";

pub type EventData = Map<String, Value>;

/// An event record as handed over by the host event bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventData", default)]
    pub data: Option<EventData>,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "eventTimestamp")]
    pub timestamp: i64,
    #[serde(rename = "eventUniqueIdentifier")]
    pub unique_id: String,
}

impl Event {
    /// Stamps `data` with the current time and a fresh v4 id, the way the host does when dispatching.
    pub fn new(data: Option<EventData>) -> Event {
        Event {
            data,
            timestamp: Utc::now().timestamp_millis(),
            unique_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn with_identity(data: Option<EventData>, timestamp: i64, unique_id: impl Into<String>) -> Event {
        Event {
            data,
            timestamp,
            unique_id: unique_id.into(),
        }
    }
}

/// Events with no data, or an empty data map, are not sent.
pub fn has_payload(event: &Event) -> bool {
    matches!(&event.data, Some(data) if !data.is_empty())
}

// whole seconds only, milliseconds are truncated
pub fn iso8601_seconds(timestamp_ms: i64) -> String {
    let date: DateTime<Utc> = match DateTime::from_timestamp(timestamp_ms / 1000, 0) {
        Some(date) => date,
        None => {
            log::warn!(
                "Event timestamp {}ms is out of range, sending the Unix epoch instead",
                timestamp_ms
            );
            DateTime::default()
        }
    };
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Returns the event data with `xdm.timestamp` and `xdm.eventId` set, or None when
/// the event carries no payload.
///
/// A missing `xdm` entry is created as an empty object. An `xdm` entry that is not an
/// object is left as it is.
pub fn enrich(event: &Event) -> Option<EventData> {
    match &event.data {
        Some(data) if !data.is_empty() => Some(enrich_payload(event, data.clone())),
        _ => None,
    }
}

fn enrich_payload(event: &Event, mut data: EventData) -> EventData {
    let xdm = data
        .entry(XDM)
        .or_insert_with(|| Value::Object(Map::new()));
    match xdm {
        Value::Object(xdm) => {
            xdm.insert(TIMESTAMP.to_string(), Value::String(iso8601_seconds(event.timestamp)));
            xdm.insert(EVENT_ID.to_string(), Value::String(event.unique_id.clone()));
        }
        other => {
            log::debug!(
                "Event {} has a non-object xdm value ({}), leaving it untouched",
                event.unique_id,
                other
            );
        }
    }
    data
}

// enrich every event with a payload, keeping the input order
pub fn extract_platform_events(events: &[Event]) -> Vec<EventData> {
    events
        .iter()
        .filter(|event| has_payload(event))
        .filter_map(|event| {
            event
                .data
                .clone()
                .map(|data| enrich_payload(event, data))
        })
        .collect()
}
