//! Per-page state records.
//!
//! These are the records held by the external per-page store. `PageState` is
//! the single source of truth for events, derived summaries, and consent
//! signals; the dedup caches in `crate::dedup` are process-lifetime working
//! state only.

use serde::{Deserialize, Serialize};

use crate::model::event::{EventStatus, PixelEvent};
use crate::model::platform::Platform;

/// Summary of one platform observed on a page. Fully recomputed from the
/// event list on every mutation, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    pub platform: Platform,
    /// Always true once the platform has a summary entry.
    pub detected: bool,
    pub event_count: usize,
    /// Worst status across all of this platform's events.
    pub status: EventStatus,
    /// First non-empty installation id found in event order; first wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_id: Option<String>,
}

/// Consent Mode signal value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentSignal {
    Granted,
    Denied,
    #[default]
    Unknown,
}

/// Consent Mode version detected on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentVersion {
    V1,
    V2,
}

/// Detected Consent Mode state; last write wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentModeState {
    pub detected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ConsentVersion>,
    pub ad_storage: ConsentSignal,
    pub analytics_storage: ConsentSignal,
    pub ad_user_data: ConsentSignal,
    pub ad_personalization: ConsentSignal,
}

/// Full accumulated record for one page/tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub page_id: u64,
    /// Latest known page URL; updated on every ingestion and navigation.
    pub url: String,
    /// Append-only; insertion order is arrival order.
    pub events: Vec<PixelEvent>,
    /// Derived from `events`; recomputed on every mutation.
    pub platforms: Vec<PlatformSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_mode: Option<ConsentModeState>,
}

impl PageState {
    /// Default empty state for a page id, created on first access.
    pub fn empty(page_id: u64) -> Self {
        Self {
            page_id,
            url: String::new(),
            events: Vec::new(),
            platforms: Vec::new(),
            consent_mode: None,
        }
    }
}
