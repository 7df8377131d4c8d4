//! In-memory storage - used by tests and as a throwaway session store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use portal_core::ports::{Storage, StorageError};

/// In-memory storage using a HashMap with async RwLock.
///
/// An optional quota caps the summed length of keys and values, the way a
/// browser caps local storage. Note: Data is lost on process restart.
pub struct InMemoryStorage {
    store: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            quota: None,
        }
    }

    /// Reject writes that would grow the store past `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    fn used_after(store: &HashMap<String, String>, key: &str, value: &str) -> usize {
        let others: usize = store
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum();
        others + key.len() + value.len()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn get_item(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;
        store.get(key).cloned()
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().await;

        if let Some(quota) = self.quota {
            let used = Self::used_after(&store, key, value);
            if used > quota {
                return Err(StorageError::QuotaExceeded { used, quota });
            }
        }

        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::SessionStore;
    use portal_core::domain::UserProfile;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_set_and_get() {
        let storage = InMemoryStorage::new();
        storage.set_item("key1", "value1").await.unwrap();
        assert_eq!(storage.get_item("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let storage = InMemoryStorage::new();
        storage.set_item("key1", "value1").await.unwrap();
        storage.remove_item("key1").await.unwrap();
        storage.remove_item("key1").await.unwrap();
        assert_eq!(storage.get_item("key1").await, None);
    }

    #[tokio::test]
    async fn test_quota_counts_replaced_value_once() {
        let storage = InMemoryStorage::with_quota(10);
        storage.set_item("k", "123456789").await.unwrap();
        // Replacing the value does not double-count the old one.
        storage.set_item("k", "abcdefghi").await.unwrap();

        let err = storage.set_item("k2", "x").await.unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { used: 13, quota: 10 }));
        assert_eq!(storage.get_item("k").await.as_deref(), Some("abcdefghi"));
    }

    #[tokio::test]
    async fn test_quota_splits_session_pair() {
        // Room for the token entry, not for the profile after it.
        let storage = Arc::new(InMemoryStorage::with_quota(32));
        let session = SessionStore::new(storage);

        let user = UserProfile {
            username: Some("a-rather-long-username".into()),
            ..Default::default()
        };
        session.set_session("tok-123", &user).await;

        assert!(session.is_authenticated().await);
        assert!(session.get_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_writes_never_tear_an_entry() {
        let storage = Arc::new(InMemoryStorage::new());
        let session = SessionStore::new(storage);

        let a = UserProfile {
            username: Some("alice".into()),
            ..Default::default()
        };
        let b = UserProfile {
            username: Some("bob".into()),
            ..Default::default()
        };

        let (s1, s2) = (session.clone(), session.clone());
        let (a2, b2) = (a.clone(), b.clone());
        let t1 = tokio::spawn(async move { s1.set_session("token-alice", &a2).await });
        let t2 = tokio::spawn(async move { s2.set_session("token-bob", &b2).await });
        t1.await.unwrap();
        t2.await.unwrap();

        // Each entry holds one writer's whole value; the pair may mix writers.
        let token = session.get_token().await.unwrap();
        assert!(token == "token-alice" || token == "token-bob");
        let user = session.get_user().await.unwrap().unwrap();
        assert!(user == a || user == b);
    }
}
