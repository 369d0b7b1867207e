//! Per-platform summary aggregation.
//!
//! Full recomputation from the event list on every call, never incremental
//! patching. Platform order follows first appearance in the event list.

use std::collections::HashMap;

use crate::model::event::{EventStatus, PixelEvent};
use crate::model::platform::Platform;
use crate::model::state::PlatformSummary;

/// Recompute platform summaries from the full event list.
pub fn summarize(events: &[PixelEvent]) -> Vec<PlatformSummary> {
    let mut summaries: Vec<PlatformSummary> = Vec::new();
    let mut index: HashMap<Platform, usize> = HashMap::new();

    for event in events {
        let i = *index.entry(event.platform).or_insert_with(|| {
            summaries.push(PlatformSummary {
                platform: event.platform,
                detected: true,
                event_count: 0,
                status: EventStatus::Ok,
                pixel_id: None,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[i];
        summary.event_count += 1;
        summary.status = summary.status.worst(event.status);
        // First non-empty installation id wins; later values never overwrite.
        if summary.pixel_id.is_none() {
            summary.pixel_id = event.pixel_id().map(str::to_string);
        }
    }

    summaries
}

/// Worst status across all summaries; `Ok` when none exist.
pub fn worst_status(summaries: &[PlatformSummary]) -> EventStatus {
    summaries
        .iter()
        .fold(EventStatus::Ok, |acc, s| acc.worst(s.status))
}
