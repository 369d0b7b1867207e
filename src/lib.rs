//! PixelScope Core - Event ingestion pipeline for a marketing-pixel inspector
//!
//! This crate normalizes third-party marketing/analytics pixel calls captured
//! on a web page into canonical events, validates them against per-platform
//! required-field rules, flags likely duplicate firings and duplicate pixel
//! installations, and maintains a running per-page summary. The implementation
//! prioritizes:
//!
//! 1. **Robustness** - Malformed capture input is never fatal; parsers degrade
//!    to `"unknown"` placeholders
//! 2. **Logging** - Every decision point logged with page/event context
//! 3. **Determinism** - Canonical fingerprints are stable across key order and
//!    tolerate hostile nesting
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `pipeline` - Page state lifecycle manager and ingestion orchestrator
//! - `parsers` - Nine per-platform parsers for raw capture payloads
//! - `validation` - Required-field rules keyed by (platform, event name)
//! - `dedup` - Time-windowed duplicate-event and duplicate-installation checks
//! - `summary` - Per-platform summary aggregation
//! - `canonical` - Cycle-safe canonical serialization and fingerprinting
//! - `storage` - Async key-value boundary to the persisted per-page store
//! - `export` - JSON interchange document with lossless round-trip
//! - `model` - Domain types shared across the pipeline
//! - `logging` - Structured logging with page/event context

pub mod canonical;
pub mod dedup;
pub mod export;
pub mod logging;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod storage;
pub mod summary;
pub mod validation;

pub use export::{ExportDocument, ExportSummary};
pub use model::event::{EventOrigin, EventStatus, PixelEvent, ScriptSource};
pub use model::platform::Platform;
pub use model::state::{ConsentModeState, ConsentSignal, ConsentVersion, PageState, PlatformSummary};
pub use parsers::RawCapture;
pub use pipeline::badge::{BadgeColor, BadgeSignal};
pub use pipeline::manager::{PageStateManager, PipelineConfig};
pub use pipeline::PageSink;
pub use storage::memory::MemoryStore;
pub use storage::store::{PageStore, StoreError};
