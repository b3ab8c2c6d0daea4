mod etcd;
mod mem;

pub use etcd::EtcdStore;
pub use mem::MemStore;

use std::time::Duration;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store error: {0}")]
    Internal(String),
}

/// A key-value store used by the deployment-locking subsystem.
///
/// `EtcdStore` talks to a real etcd cluster; `MemStore` is an in-memory
/// fake for tests.
#[async_trait]
pub trait LockStore: Send + Sync {
    /// Read a key. Returns `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write (create or overwrite) a key, with an optional expiry.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>)
        -> Result<(), StoreError>;
}
