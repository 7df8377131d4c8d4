use async_trait::async_trait;

/// Persistent key-value storage scoped to a single origin.
///
/// Every entry is read and written atomically, but there is no transaction
/// spanning several keys.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get the value stored under `key`.
    async fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is a no-op.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage quota exceeded: {used} of {quota} bytes in use")]
    QuotaExceeded { used: usize, quota: usize },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
