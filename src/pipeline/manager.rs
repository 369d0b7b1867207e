//! Page state lifecycle manager.
//!
//! Owns creation, mutation, persistence, and teardown of per-page state,
//! and orchestrates each ingestion as one pass:
//! 1. Load current state from the store
//! 2. Parse the raw capture (platform-specific)
//! 3. Validate against the rules table
//! 4. Duplicate-event and duplicate-installation checks
//! 5. Append to the event list
//! 6. Recompute platform summaries
//! 7. Persist and emit the derived badge signal
//!
//! The load and save are separate store calls with no transaction around
//! them: two concurrent ingestions for the same page can both load the same
//! prior state and the second save overwrites the first's appended event
//! (last write wins). Accepted tradeoff; captures are cheap and realistic
//! bursts rarely collide. The dedup caches are mutated synchronously
//! between the two awaits, so duplicate detection is unaffected by the
//! race; only event-list completeness is.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::dedup::{DedupState, DEDUP_WINDOW_MS};
use crate::logging::structured::LogContext;
use crate::model::event::PixelEvent;
use crate::model::platform::Platform;
use crate::model::state::{ConsentModeState, PageState};
use crate::parsers::{parse_capture, RawCapture};
use crate::pipeline::badge::{badge_signal, BadgeSignal};
use crate::pipeline::PageSink;
use crate::storage::store::{PageStore, StoreError};
use crate::summary::summarize;
use crate::validation::validate;

/// Byte cap applied to captured raw text.
pub const MAX_RAW_LEN: usize = 10_000;

/// Pipeline tunables.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Inclusive duplicate-event window, milliseconds.
    pub dedup_window_ms: i64,
    /// Byte cap for the `raw` capture text.
    pub max_raw_len: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            dedup_window_ms: DEDUP_WINDOW_MS,
            max_raw_len: MAX_RAW_LEN,
        }
    }
}

/// Orchestrates the ingestion pipeline and owns the per-page dedup caches.
pub struct PageStateManager {
    store: Arc<dyn PageStore>,
    sink: Option<Arc<dyn PageSink>>,
    config: PipelineConfig,
    /// Per-page duplicate-tracking working state. Process-lifetime cache,
    /// created on first ingest for a page and dropped on clear/close.
    caches: Mutex<HashMap<u64, DedupState>>,
}

impl PageStateManager {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self {
            store,
            sink: None,
            config: PipelineConfig::default(),
            caches: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn PageSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the full pipeline for one raw capture.
    ///
    /// Unattributable captures (no platform tag and no matching endpoint
    /// pattern) are dropped without error; malformed payload shapes degrade
    /// to `"unknown"` placeholders inside the parsers.
    pub async fn ingest(
        &self,
        page_id: u64,
        capture: RawCapture,
        sender_url: &str,
    ) -> Result<(), StoreError> {
        let ctx = LogContext::new(page_id);

        let platform = match resolve_platform(&capture) {
            Some(platform) => platform,
            None => {
                log::warn!("{} CAPTURE_UNATTRIBUTED url={:?}", ctx, capture.request_url);
                return Ok(());
            }
        };

        // [1] LOAD STATE
        let mut state = self
            .store
            .get(page_id)
            .await?
            .unwrap_or_else(|| PageState::empty(page_id));
        if !sender_url.is_empty() {
            state.url = sender_url.to_string();
        }

        // [2] PARSE
        let mut event = self.build_event(platform, &capture, &state.url, sender_url);
        let ctx = ctx.with_event(&event.id);
        log::debug!(
            "{} EVENT_PARSED platform={} method={} name={}",
            ctx,
            event.platform,
            event.method,
            event.event_name
        );

        // [3] VALIDATE
        let validation = validate(&event);
        if !validation.errors.is_empty() {
            log::warn!(
                "{} VALIDATION_ERRORS platform={} name={} errors={:?}",
                ctx,
                event.platform,
                event.event_name,
                validation.errors
            );
        }
        event.warnings.extend(validation.warnings);
        event.errors.extend(validation.errors);
        event.recompute_status();

        // [4] DEDUP CHECKS
        // Cache mutations happen synchronously here, before the save await:
        // they stick even when the save fails, keeping duplicate detection
        // effective across transient persistence failures.
        {
            let mut caches = self.caches.lock();
            let cache = caches.entry(page_id).or_default();
            if cache.check_duplicate_event(&mut event, self.config.dedup_window_ms) {
                log::info!("{} DUPLICATE_EVENT name={}", ctx, event.event_name);
            }
            if cache.check_duplicate_installation(&mut event) {
                log::info!(
                    "{} DUPLICATE_PIXEL_ID pixel_id={:?}",
                    ctx,
                    event.pixel_id()
                );
            }
        }

        // [5] APPEND + [6] RE-AGGREGATE
        state.events.push(event.clone());
        state.platforms = summarize(&state.events);

        // [7] PERSIST + BADGE
        self.store.set(page_id, state.clone()).await?;

        log::info!(
            "{} EVENT_INGESTED platform={} name={} status={} total={}",
            ctx,
            event.platform,
            event.event_name,
            event.status.as_str(),
            state.events.len()
        );

        if let Some(sink) = &self.sink {
            sink.event_captured(page_id, &event);
            sink.badge_changed(page_id, &badge_signal(&state));
        }
        Ok(())
    }

    /// Last-write-wins update of the consent field only; no validation or
    /// dedup involvement.
    pub async fn ingest_consent(
        &self,
        page_id: u64,
        consent: ConsentModeState,
        sender_url: &str,
    ) -> Result<(), StoreError> {
        let ctx = LogContext::new(page_id);

        let mut state = self
            .store
            .get(page_id)
            .await?
            .unwrap_or_else(|| PageState::empty(page_id));
        if !sender_url.is_empty() {
            state.url = sender_url.to_string();
        }
        state.consent_mode = Some(consent);
        self.store.set(page_id, state).await?;

        log::info!("{} CONSENT_UPDATED", ctx);
        Ok(())
    }

    /// Current state for a page; an empty default when none is persisted.
    pub async fn get_state(&self, page_id: u64) -> Result<PageState, StoreError> {
        Ok(self
            .store
            .get(page_id)
            .await?
            .unwrap_or_else(|| PageState::empty(page_id)))
    }

    /// Empty the page's events/platforms/consent, drop its dedup caches,
    /// and reset the badge. The latest known URL is kept.
    pub async fn clear(&self, page_id: u64) -> Result<(), StoreError> {
        let mut state = self
            .store
            .get(page_id)
            .await?
            .unwrap_or_else(|| PageState::empty(page_id));
        state.events.clear();
        state.platforms.clear();
        state.consent_mode = None;
        self.store.set(page_id, state).await?;

        self.drop_caches(page_id);
        self.reset_badge(page_id);
        log::info!("{} STATE_CLEARED", LogContext::new(page_id));
        Ok(())
    }

    /// Clear, then seed the state with the navigation target URL. Events
    /// stay empty until new captures arrive.
    pub async fn on_navigation_start(
        &self,
        page_id: u64,
        new_url: &str,
    ) -> Result<(), StoreError> {
        let mut state = PageState::empty(page_id);
        state.url = new_url.to_string();
        self.store.set(page_id, state).await?;

        self.drop_caches(page_id);
        self.reset_badge(page_id);
        log::info!("{} NAVIGATION_START url={}", LogContext::new(page_id), new_url);
        Ok(())
    }

    /// Clear plus removal of the persisted record.
    pub async fn on_page_closed(&self, page_id: u64) -> Result<(), StoreError> {
        self.store.remove(page_id).await?;
        self.drop_caches(page_id);
        self.reset_badge(page_id);
        log::info!("{} PAGE_CLOSED", LogContext::new(page_id));
        Ok(())
    }

    /// Assemble the event envelope around the parsed partial event, applying
    /// the conservative defaults for missing capture fields.
    fn build_event(
        &self,
        platform: Platform,
        capture: &RawCapture,
        state_url: &str,
        sender_url: &str,
    ) -> PixelEvent {
        let partial = parse_capture(platform, &capture.args);

        let url = capture
            .url
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| {
                if sender_url.is_empty() {
                    state_url.to_string()
                } else {
                    sender_url.to_string()
                }
            });

        PixelEvent {
            id: Uuid::new_v4().to_string(),
            platform: partial.platform,
            method: partial.method,
            event_name: partial.event_name,
            params: partial.params,
            timestamp: capture
                .timestamp
                .unwrap_or_else(|| Utc::now().timestamp_millis()),
            url,
            origin: capture.origin.unwrap_or_default(),
            status: Default::default(),
            warnings: Vec::new(),
            errors: Vec::new(),
            raw: capture
                .raw
                .as_deref()
                .map(|raw| truncate_utf8(raw, self.config.max_raw_len)),
            script_source: capture.script_source,
        }
    }

    fn drop_caches(&self, page_id: u64) {
        self.caches.lock().remove(&page_id);
    }

    fn reset_badge(&self, page_id: u64) {
        if let Some(sink) = &self.sink {
            sink.badge_changed(page_id, &BadgeSignal::empty());
        }
    }
}

/// Explicit platform tag, else endpoint-pattern attribution of the request
/// URL for network-origin hits.
fn resolve_platform(capture: &RawCapture) -> Option<Platform> {
    capture.platform.or_else(|| {
        capture
            .request_url
            .as_deref()
            .and_then(Platform::from_endpoint_url)
    })
}

/// Truncate to at most `max_len` bytes on a char boundary.
fn truncate_utf8(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}
