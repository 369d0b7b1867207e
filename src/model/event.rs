//! Canonical pixel events.
//!
//! One `PixelEvent` per parsed SDK call or observed network hit. Field names
//! serialize in the camelCase interchange form used by the export document
//! and presentation layers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::platform::Platform;

/// Derived event status. Total order: `Ok < Warning < Error`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Ok,
    Warning,
    Error,
}

impl EventStatus {
    /// Worst-wins combination of two statuses.
    pub fn worst(self, other: EventStatus) -> EventStatus {
        self.max(other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Ok => "ok",
            EventStatus::Warning => "warning",
            EventStatus::Error => "error",
        }
    }
}

/// Where a capture came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrigin {
    #[default]
    JsHook,
    Network,
    Datalayer,
}

/// Provenance of the script that fired the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptSource {
    Gtm,
    Hardcoded,
    Unknown,
}

/// Installation-identifier candidate keys, checked in order; the first
/// non-empty string value wins.
pub const PIXEL_ID_KEYS: [&str; 7] = [
    "pixel_id",
    "tag_id",
    "conversion_id",
    "partner_id",
    "measurement_id",
    "container_id",
    "id",
];

/// One parsed pixel call or network hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelEvent {
    /// Opaque unique id, assigned at normalization time.
    pub id: String,
    pub platform: Platform,
    /// SDK call verb (`track`, `init`, `collect`, ...) or `network`.
    pub method: String,
    /// Platform-specific casing preserved verbatim.
    pub event_name: String,
    pub params: Map<String, Value>,
    /// Capture-time instant, epoch milliseconds.
    pub timestamp: i64,
    /// Page URL active at capture time.
    pub url: String,
    pub origin: EventOrigin,
    pub status: EventStatus,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    /// Captured raw text (e.g. a request body), length-capped at ingestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_source: Option<ScriptSource>,
}

impl PixelEvent {
    /// Recompute `status` from the warning/error lists, keeping any prior
    /// escalation. Must be called whenever warnings/errors change.
    pub fn recompute_status(&mut self) {
        let derived = if !self.errors.is_empty() {
            EventStatus::Error
        } else if !self.warnings.is_empty() {
            EventStatus::Warning
        } else {
            EventStatus::Ok
        };
        self.status = self.status.worst(derived);
    }

    /// Append a warning and escalate status to at least `Warning`.
    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
        self.recompute_status();
    }

    /// Append an error and escalate status to `Error`.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.recompute_status();
    }

    /// Extract the installation identifier (pixel/tag/conversion id) from
    /// params, if present. First non-empty candidate key wins.
    pub fn pixel_id(&self) -> Option<&str> {
        for key in PIXEL_ID_KEYS {
            if let Some(Value::String(s)) = self.params.get(key) {
                if !s.is_empty() {
                    return Some(s);
                }
            }
        }
        None
    }
}

/// Test fixture shared by unit tests across the crate.
#[cfg(test)]
pub(crate) fn test_event(platform: Platform, event_name: &str) -> PixelEvent {
    PixelEvent {
        id: "test-id".to_string(),
        platform,
        method: "track".to_string(),
        event_name: event_name.to_string(),
        params: Map::new(),
        timestamp: 1_000,
        url: "https://example.com".to_string(),
        origin: EventOrigin::JsHook,
        status: EventStatus::Ok,
        warnings: Vec::new(),
        errors: Vec::new(),
        raw: None,
        script_source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_event(platform: Platform, event_name: &str) -> PixelEvent {
        test_event(platform, event_name)
    }

    #[test]
    fn test_status_order() {
        assert!(EventStatus::Ok < EventStatus::Warning);
        assert!(EventStatus::Warning < EventStatus::Error);
        assert_eq!(EventStatus::Warning.worst(EventStatus::Error), EventStatus::Error);
        assert_eq!(EventStatus::Warning.worst(EventStatus::Ok), EventStatus::Warning);
    }

    #[test]
    fn test_recompute_status_from_lists() {
        let mut ev = make_event(Platform::Meta, "Purchase");
        assert_eq!(ev.status, EventStatus::Ok);

        ev.push_warning("suspicious");
        assert_eq!(ev.status, EventStatus::Warning);

        ev.push_error("missing field");
        assert_eq!(ev.status, EventStatus::Error);

        // Errors dominate; recomputing never downgrades.
        ev.recompute_status();
        assert_eq!(ev.status, EventStatus::Error);
    }

    #[test]
    fn test_pixel_id_candidate_order() {
        let mut ev = make_event(Platform::Meta, "init");
        ev.params.insert("id".to_string(), json!("fallback"));
        ev.params.insert("pixel_id".to_string(), json!("123456"));
        assert_eq!(ev.pixel_id(), Some("123456"));

        let mut ev = make_event(Platform::Gtm, "gtm_event");
        ev.params.insert("container_id".to_string(), json!("GTM-ABC"));
        assert_eq!(ev.pixel_id(), Some("GTM-ABC"));

        // Empty strings and non-strings are skipped.
        let mut ev = make_event(Platform::Meta, "init");
        ev.params.insert("pixel_id".to_string(), json!(""));
        ev.params.insert("tag_id".to_string(), json!(42));
        assert_eq!(ev.pixel_id(), None);
    }

    #[test]
    fn test_serde_camel_case() {
        let ev = make_event(Platform::Ga4, "purchase");
        let v = serde_json::to_value(&ev).unwrap();
        assert!(v.get("eventName").is_some());
        assert!(v.get("event_name").is_none());
        // Optional fields elided when absent.
        assert!(v.get("raw").is_none());
        assert!(v.get("scriptSource").is_none());
    }
}
