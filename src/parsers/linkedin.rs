//! LinkedIn Insight Tag (`lintrk`) parser.
//!
//! First argument is a config object `{ conversion_id, partner_id? }`.

use serde_json::{Map, Value};

use super::PartialPixelEvent;
use crate::model::platform::Platform;

pub fn parse(args: &[Value]) -> PartialPixelEvent {
    let config = args.get(0).and_then(Value::as_object);

    let conversion_id = config
        .and_then(|c| c.get("conversion_id"))
        .and_then(Value::as_str);
    let partner_id = config
        .and_then(|c| c.get("partner_id"))
        .and_then(Value::as_str);

    let mut params = Map::new();
    if let Some(id) = conversion_id {
        params.insert("conversion_id".to_string(), Value::String(id.to_string()));
    }
    if let Some(id) = partner_id {
        params.insert("partner_id".to_string(), Value::String(id.to_string()));
    }

    PartialPixelEvent {
        platform: Platform::Linkedin,
        method: "track".to_string(),
        event_name: conversion_id.unwrap_or("conversion").to_string(),
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_object() {
        let partial = parse(&[json!({"conversion_id": "1234", "partner_id": "99"})]);
        assert_eq!(partial.platform, Platform::Linkedin);
        assert_eq!(partial.method, "track");
        assert_eq!(partial.event_name, "1234");
        assert_eq!(partial.params.get("conversion_id"), Some(&json!("1234")));
        assert_eq!(partial.params.get("partner_id"), Some(&json!("99")));
    }

    #[test]
    fn test_missing_ids_default_event_name() {
        let partial = parse(&[json!({})]);
        assert_eq!(partial.event_name, "conversion");
        assert!(partial.params.is_empty());
    }

    #[test]
    fn test_non_object_arg_falls_back() {
        let partial = parse(&[json!("nope")]);
        assert_eq!(partial.event_name, "conversion");
        assert!(partial.params.is_empty());
    }
}
