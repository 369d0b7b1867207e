//! Export document assembly.
//!
//! Snapshots a page's captured events into a self-contained JSON document
//! for download or hand-off to other tools.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::event::PixelEvent;
use crate::model::platform::Platform;
use crate::model::state::PageState;

/// Roll-up counters over the exported events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub total_events: usize,
    /// Distinct platforms in first-appearance order.
    pub platforms: Vec<Platform>,
    /// Events carrying at least one warning.
    pub warnings: usize,
    /// Events carrying at least one error.
    pub errors: usize,
}

/// Self-contained snapshot of a page's pixel activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub exported_at: DateTime<Utc>,
    pub page_url: String,
    pub summary: ExportSummary,
    pub events: Vec<PixelEvent>,
}

impl ExportDocument {
    /// Build an export for the given page state, stamped with the current
    /// time. Event order is preserved as captured. The document's page URL
    /// is the last event's URL, so it matches the page the events actually
    /// came from even after a navigation updated the live state URL.
    pub fn from_state(state: &PageState) -> Self {
        let page_url = state
            .events
            .last()
            .map(|event| event.url.clone())
            .unwrap_or_default();
        Self::from_events(page_url, state.events.clone())
    }

    fn from_events(page_url: String, events: Vec<PixelEvent>) -> Self {
        let mut platforms: Vec<Platform> = Vec::new();
        let mut warnings = 0;
        let mut errors = 0;
        for event in &events {
            if !platforms.contains(&event.platform) {
                platforms.push(event.platform);
            }
            if !event.warnings.is_empty() {
                warnings += 1;
            }
            if !event.errors.is_empty() {
                errors += 1;
            }
        }

        Self {
            exported_at: Utc::now(),
            page_url,
            summary: ExportSummary {
                total_events: events.len(),
                platforms,
                warnings,
                errors,
            },
            events,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::test_event;

    fn sample_state() -> PageState {
        let mut state = PageState::empty(1);
        state.url = "https://shop.example/checkout".to_string();

        let mut warn = test_event(Platform::Meta, "AddToCart");
        warn.push_warning("dup");
        let mut err = test_event(Platform::Ga4, "purchase");
        err.push_error("missing transaction_id");

        state.events = vec![
            test_event(Platform::Meta, "PageView"),
            warn,
            err,
            test_event(Platform::Ga4, "page_view"),
        ];
        state
    }

    #[test]
    fn test_summary_counts_and_platform_order() {
        let doc = ExportDocument::from_state(&sample_state());
        // Page URL comes from the last event, not the live state URL.
        assert_eq!(doc.page_url, "https://example.com");
        assert_eq!(doc.summary.total_events, 4);
        assert_eq!(doc.summary.platforms, vec![Platform::Meta, Platform::Ga4]);
        assert_eq!(doc.summary.warnings, 1);
        assert_eq!(doc.summary.errors, 1);
        assert_eq!(doc.events.len(), 4);
    }

    #[test]
    fn test_empty_page_export() {
        let doc = ExportDocument::from_state(&PageState::empty(7));
        assert_eq!(doc.page_url, "");
        assert_eq!(doc.summary.total_events, 0);
        assert!(doc.summary.platforms.is_empty());
        assert!(doc.events.is_empty());
    }

    #[test]
    fn test_json_shape_and_round_trip() {
        let doc = ExportDocument::from_state(&sample_state());
        let json = doc.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("exportedAt").is_some());
        assert!(value.get("pageUrl").is_some());
        assert_eq!(value["summary"]["totalEvents"], 4);
        assert_eq!(value["events"][0]["eventName"], "PageView");

        let parsed = ExportDocument::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
