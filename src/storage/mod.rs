//! Persisted per-page state store boundary.
//!
//! The external store is the single source of truth for events, summaries,
//! and consent signals. The core treats it as an asynchronous key-value
//! interface with no transactional guarantees across calls.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{PageStore, StoreError};
