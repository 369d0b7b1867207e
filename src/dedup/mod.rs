//! Duplicate detection.
//!
//! Two independent per-page checks, both side-effecting on shared working
//! state (they are not idempotent to re-evaluation):
//!
//! - **Duplicate events**: a fingerprint of (platform, event name, params)
//!   seen again within the dedup window gets a warning. The last-seen time
//!   is updated on every check, so windows chain: comparison is always
//!   against the most recent firing, not the first.
//! - **Duplicate installations**: an installation id already recorded for
//!   the page gets a warning; otherwise it is recorded.
//!
//! The state here is a process-lifetime cache, not source of truth. Losing
//! it (process restart, page clear) only weakens duplicate detection; the
//! persisted event record stays correct.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::canonical::fingerprint;
use crate::model::event::{EventStatus, PixelEvent};

/// Inclusive window within which identical-fingerprint events are duplicates.
pub const DEDUP_WINDOW_MS: i64 = 500;

const DUPLICATE_EVENT_WARNING: &str =
    "Potential duplicate event: same event fired within 500ms";
const DUPLICATE_PIXEL_WARNING: &str =
    "Potential duplicate pixel installation: same Pixel ID detected more than once on this page";

/// Per-page duplicate-tracking working state.
#[derive(Debug, Default)]
pub struct DedupState {
    /// fingerprint -> last-seen timestamp (epoch ms), pruned to the window.
    fingerprints: HashMap<String, i64>,
    /// Installation ids already observed on the page.
    pixel_ids: HashSet<String>,
}

impl DedupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window check against the fingerprint map. Appends a warning and
    /// escalates status when a prior identical event was seen within
    /// `window_ms` (inclusive). Always updates the last-seen time, then
    /// prunes entries stale relative to this event's timestamp.
    pub fn check_duplicate_event(&mut self, event: &mut PixelEvent, window_ms: i64) -> bool {
        let ts = event.timestamp;
        let fp = fingerprint(
            event.platform,
            &event.event_name,
            &Value::Object(event.params.clone()),
        );

        let duplicate = self
            .fingerprints
            .get(&fp)
            .is_some_and(|last| ts - last <= window_ms);

        if duplicate {
            event.push_warning(DUPLICATE_EVENT_WARNING);
            debug_assert!(event.status >= EventStatus::Warning);
        }
        self.fingerprints.insert(fp, ts);

        // Opportunistic prune; bounds the map to recently-seen fingerprints.
        self.fingerprints.retain(|_, last| ts - *last <= window_ms);

        duplicate
    }

    /// Installation check against the seen-id set. Independent of and
    /// additional to the window check.
    pub fn check_duplicate_installation(&mut self, event: &mut PixelEvent) -> bool {
        let pixel_id = match event.pixel_id() {
            Some(id) => id.to_string(),
            None => return false,
        };

        if self.pixel_ids.contains(&pixel_id) {
            event.push_warning(DUPLICATE_PIXEL_WARNING);
            true
        } else {
            self.pixel_ids.insert(pixel_id);
            false
        }
    }

    #[cfg(test)]
    fn fingerprint_count(&self) -> usize {
        self.fingerprints.len()
    }
}
