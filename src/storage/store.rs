//! Async key-value store trait for per-page state.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::state::PageState;

/// Failure talking to the persisted store. Propagated to the pipeline
/// caller; the core makes no retry attempt.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("state serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One `PageState` record per page id. Implementations suspend at their own
/// I/O boundaries; `get` followed by `set` is explicitly not atomic.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Current state for a page, or `None` when the page has no record.
    async fn get(&self, page_id: u64) -> Result<Option<PageState>, StoreError>;

    /// Persist the state record for a page, replacing any prior record.
    async fn set(&self, page_id: u64, state: PageState) -> Result<(), StoreError>;

    /// Remove the record for a page.
    async fn remove(&self, page_id: u64) -> Result<(), StoreError>;

    /// Drop every record.
    async fn clear(&self) -> Result<(), StoreError>;
}
