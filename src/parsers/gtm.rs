//! Google Tag Manager (dataLayer) parser.
//!
//! Single object argument: the `event` field is the event name; a string
//! `gtm.uniqueEventId` is copied to `container_id` so installation tracking
//! can pick it up.

use serde_json::Value;

use super::PartialPixelEvent;
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    let obj = match args.get(0).and_then(Value::as_object) {
        Some(obj) => obj,
        None => return PartialPixelEvent::unknown(Platform::Gtm),
    };

    let event_name = obj
        .get("event")
        .and_then(Value::as_str)
        .unwrap_or("gtm_event")
        .to_string();

    let mut params = obj.clone();
    if let Some(id) = obj.get("gtm.uniqueEventId").and_then(Value::as_str) {
        params.insert("container_id".to_string(), Value::String(id.to_string()));
    }

    PartialPixelEvent {
        platform: Platform::Gtm,
        method: "dataLayer.push".to_string(),
        event_name,
        params,
    }
}
