use edge_request::{Event, RequestBuilder};
use serde_json::{json, Value};

fn host_event(value: Value) -> Event {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_full_request_document() {
    let _ = env_logger::builder().is_test(true).try_init();

    let events = vec![
        host_event(json!({
            "eventData": {"a": 1},
            "eventTimestamp": 1700000000000i64,
            "eventUniqueIdentifier": "ev1"
        })),
        host_event(json!({
            "eventTimestamp": 1700000000500i64,
            "eventUniqueIdentifier": "dropped"
        })),
        host_event(json!({
            "eventData": {"xdm": {"foo": "bar"}, "meta": {"nested": [true, null]}},
            "eventTimestamp": 1700000001234i64,
            "eventUniqueIdentifier": "ev2"
        })),
    ];

    let builder = RequestBuilder::new()
        .organization_id("org@AdobeOrg")
        .experience_cloud_id("abc123")
        .streaming("\u{0}", "\n");
    let bytes = builder.payload(&events).unwrap();
    let document: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        document,
        json!({
            "meta": {"konductorConfig": {
                "imsOrgId": "org@AdobeOrg",
                "streaming": {"recordSeparator": "\u{0}", "lineFeed": "\n"}
            }},
            "events": [
                {"a": 1, "xdm": {"timestamp": "2023-11-14T22:13:20Z", "eventId": "ev1"}},
                {
                    "xdm": {"foo": "bar", "timestamp": "2023-11-14T22:13:21Z", "eventId": "ev2"},
                    "meta": {"nested": [true, null]}
                }
            ],
            "xdm": {"identityMap": {"ECID": [{"id": "abc123"}]}}
        })
    );
}

#[test]
fn test_minimal_request_document_has_no_optional_keys() {
    let events = vec![Event::new(serde_json::from_value(json!({"k": "v"})).unwrap())];
    let bytes = RequestBuilder::new().payload(&events).unwrap();
    let document: Value = serde_json::from_slice(&bytes).unwrap();

    let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["events", "meta"]);
    assert_eq!(document["meta"], json!({"konductorConfig": {}}));
    assert_eq!(document["events"][0]["k"], json!("v"));
    assert!(document["events"][0]["xdm"]["eventId"].is_string());
}

#[test]
fn test_payload_bytes_are_deterministic() {
    let events = vec![Event::with_identity(
        serde_json::from_value(json!({"b": 2, "a": 1})).unwrap(),
        1700000000000,
        "ev1",
    )];
    let builder = RequestBuilder::new().experience_cloud_id("abc123");
    let first = builder.payload(&events).unwrap();
    let second = builder.payload(&events).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        r#"{"meta":{"konductorConfig":{}},"events":[{"a":1,"b":2,"xdm":{"eventId":"ev1","timestamp":"2023-11-14T22:13:20Z"}}],"xdm":{"identityMap":{"ECID":[{"id":"abc123"}]}}}"#
    );
}
