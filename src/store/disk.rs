use crate::core::cache::{CacheEntry, RateStore};
use anyhow::Result;
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle};
use std::path::Path;
use tracing::debug;

const PARTITION: &str = "rates";
const ENTRY_KEY: &str = "latest";

/// Disk-backed store holding the single cache entry under a fixed key in a
/// fjall partition. Read at startup, written only on successful fetch;
/// entries are never deleted.
pub struct DiskStore {
    // Keeps the keyspace alive for the partition handle.
    _keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        let keyspace = fjall::Config::new(path).open()?;
        let partition = keyspace.open_partition(PARTITION, PartitionCreateOptions::default())?;
        Ok(Self {
            _keyspace: keyspace,
            partition,
        })
    }
}

#[async_trait]
impl RateStore for DiskStore {
    async fn load(&self) -> Option<CacheEntry> {
        let res: Result<Option<CacheEntry>> = (|| {
            match self.partition.get(ENTRY_KEY)? {
                Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
                None => Ok(None),
            }
        })();

        match res {
            Ok(Some(entry)) if entry.rates.is_valid() => {
                debug!("Cache HIT, entry from {}", entry.timestamp);
                Some(entry)
            }
            Ok(Some(entry)) => {
                debug!("Discarding invalid cache entry: {entry:?}");
                None
            }
            Ok(None) => {
                debug!("Cache MISS");
                None
            }
            Err(e) => {
                debug!("DiskStore load error: {}", e);
                None
            }
        }
    }

    async fn save(&self, entry: &CacheEntry) {
        let res: Result<()> = (|| {
            self.partition.insert(ENTRY_KEY, serde_json::to_vec(entry)?)?;
            debug!("Cache PUT, entry from {}", entry.timestamp);
            Ok(())
        })();
        if let Err(e) = res {
            debug!("DiskStore save error: {}", e);
        }
    }
}
