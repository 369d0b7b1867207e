//! In-memory `PageStore`.
//!
//! Session-store stand-in for tests and embedders without a durable
//! backend. Records live for the life of the process.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::model::state::PageState;
use crate::storage::store::{PageStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: Mutex<HashMap<u64, PageState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of page records currently held.
    pub fn len(&self) -> usize {
        self.pages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.lock().is_empty()
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn get(&self, page_id: u64) -> Result<Option<PageState>, StoreError> {
        Ok(self.pages.lock().get(&page_id).cloned())
    }

    async fn set(&self, page_id: u64, state: PageState) -> Result<(), StoreError> {
        self.pages.lock().insert(page_id, state);
        Ok(())
    }

    async fn remove(&self, page_id: u64) -> Result<(), StoreError> {
        self.pages.lock().remove(&page_id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.pages.lock().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_set_remove() {
        let store = MemoryStore::new();
        assert!(store.get(1).await.unwrap().is_none());

        let mut state = PageState::empty(1);
        state.url = "https://example.com".to_string();
        store.set(1, state.clone()).await.unwrap();
        assert_eq!(store.get(1).await.unwrap(), Some(state));
        assert_eq!(store.len(), 1);

        store.remove(1).await.unwrap();
        assert!(store.get(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clear_drops_all_pages() {
        let store = MemoryStore::new();
        store.set(1, PageState::empty(1)).await.unwrap();
        store.set(2, PageState::empty(2)).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.is_empty());
    }
}
