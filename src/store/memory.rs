use crate::core::cache::{CacheEntry, RateStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory store, used in tests and as the degraded fallback when the
/// disk store cannot be opened. Holds the single cache slot behind a mutex.
pub struct MemoryStore {
    inner: Arc<Mutex<Option<CacheEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateStore for MemoryStore {
    async fn load(&self) -> Option<CacheEntry> {
        let entry = *self.inner.lock().await;
        if entry.is_some() {
            debug!("Cache HIT");
        } else {
            debug!("Cache MISS");
        }
        entry
    }

    async fn save(&self, entry: &CacheEntry) {
        debug!("Cache PUT");
        *self.inner.lock().await = Some(*entry);
    }
}
