//! Google Analytics 4 parser.
//!
//! Two input shapes:
//! - a dataLayer-style object: the `event` field is the event name, every
//!   other field a parameter;
//! - a URL-encoded body string from a `/g/collect` network hit: `en` is the
//!   event name, `ep.*` keys are string params, `epn.*` keys numeric params.

use serde_json::{Map, Number, Value};

use super::PartialPixelEvent;
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    match args.get(0) {
        Some(Value::String(body)) => from_collect_body(body),
        Some(Value::Object(obj)) => from_data_layer(obj),
        _ => PartialPixelEvent::unknown(Platform::Ga4),
    }
}

/// DataLayer object form: `event` extracted as the name and removed from
/// the params copy.
fn from_data_layer(obj: &Map<String, Value>) -> PartialPixelEvent {
    let event_name = obj
        .get("event")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let mut params = obj.clone();
    params.remove("event");

    PartialPixelEvent {
        platform: Platform::Ga4,
        method: "dataLayer.push".to_string(),
        event_name,
        params,
    }
}

/// URL-encoded `/g/collect` body form.
fn from_collect_body(body: &str) -> PartialPixelEvent {
    let mut event_name = "unknown".to_string();
    let mut params = Map::new();

    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        if key == "en" {
            event_name = value.into_owned();
        } else if let Some(name) = key.strip_prefix("ep.") {
            params.insert(name.to_string(), Value::String(value.into_owned()));
        } else if let Some(name) = key.strip_prefix("epn.") {
            // Numeric param; keep the raw string when it isn't a finite number.
            let parsed = value
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .and_then(Number::from_f64);
            let v = match parsed {
                Some(n) => Value::Number(n),
                None => Value::String(value.into_owned()),
            };
            params.insert(name.to_string(), v);
        }
    }

    PartialPixelEvent {
        platform: Platform::Ga4,
        method: "collect".to_string(),
        event_name,
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_layer_object() {
        let partial = parse(&[json!({
            "event": "purchase",
            "transaction_id": "T123",
            "value": 49.99,
            "currency": "EUR"
        })]);
        assert_eq!(partial.platform, Platform::Ga4);
        assert_eq!(partial.method, "dataLayer.push");
        assert_eq!(partial.event_name, "purchase");
        assert_eq!(partial.params.get("transaction_id"), Some(&json!("T123")));
        // The `event` key must not leak into params.
        assert!(partial.params.get("event").is_none());
    }

    #[test]
    fn test_data_layer_non_string_event() {
        let partial = parse(&[json!({"event": 42})]);
        assert_eq!(partial.event_name, "unknown");
    }

    #[test]
    fn test_collect_body() {
        let partial = parse(&[json!(
            "en=purchase&ep.transaction_id=TXN-001&epn.value=99.90&ep.currency=USD"
        )]);
        assert_eq!(partial.method, "collect");
        assert_eq!(partial.event_name, "purchase");
        assert_eq!(partial.params.get("transaction_id"), Some(&json!("TXN-001")));
        assert_eq!(partial.params.get("currency"), Some(&json!("USD")));
        assert_eq!(partial.params.get("value"), Some(&json!(99.90)));
    }

    #[test]
    fn test_collect_body_non_numeric_epn_keeps_string() {
        let partial = parse(&[json!("en=purchase&epn.value=not-a-number")]);
        assert_eq!(partial.params.get("value"), Some(&json!("not-a-number")));
    }

    #[test]
    fn test_collect_body_event_only() {
        let partial = parse(&[json!("en=page_view")]);
        assert_eq!(partial.event_name, "page_view");
        assert!(partial.params.is_empty());
    }

    #[test]
    fn test_empty_body_and_empty_args() {
        assert_eq!(parse(&[json!("")]).event_name, "unknown");
        let partial = parse(&[]);
        assert_eq!(partial.method, "unknown");
        assert_eq!(partial.event_name, "unknown");
    }
}
