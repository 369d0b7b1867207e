//! Ingestion pipeline and page state lifecycle.

pub mod badge;
pub mod manager;

use crate::model::event::PixelEvent;
use badge::BadgeSignal;

/// Push-notification boundary toward presentation layers and the badge
/// side-channel. Delivery is best-effort and at-most-once is not
/// guaranteed; consumers deduplicate by event id.
pub trait PageSink: Send + Sync {
    /// A new event was appended to a page's state.
    fn event_captured(&self, _page_id: u64, _event: &PixelEvent) {}

    /// The page's badge signal changed.
    fn badge_changed(&self, _page_id: u64, _signal: &BadgeSignal) {}
}
