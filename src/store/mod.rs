pub mod disk;
pub mod memory;

use crate::core::cache::RateStore;
use crate::core::config::AppConfig;
use disk::DiskStore;
use memory::MemoryStore;
use std::sync::Arc;
use tracing::warn;

/// Opens the disk store under the platform data directory. If that fails
/// (unwritable home, locked keyspace) the app still runs, with a
/// process-local store that forgets everything on exit.
pub fn open_default() -> Arc<dyn RateStore> {
    let disk = AppConfig::default_data_path()
        .and_then(|path| DiskStore::open(&path.join("cache")));

    match disk {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("Falling back to in-memory rate store: {e:#}");
            Arc::new(MemoryStore::new())
        }
    }
}
