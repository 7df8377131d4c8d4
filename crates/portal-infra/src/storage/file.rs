//! File-backed storage - one JSON document per origin, survives restarts.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use portal_core::ports::{Storage, StorageError};

type Entries = BTreeMap<String, String>;

/// Persistent storage scoped to an origin.
///
/// Every origin gets its own `<origin>.json` file under the data directory.
/// Reads go to disk each time so writes made by another process are seen.
/// Writes replace the whole file through a temporary file and a rename, so a
/// reader never observes a half-written entry.
pub struct FileStorage {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStorage {
    /// Open (creating the directory if needed) the store for `origin`.
    pub fn open(dir: impl AsRef<Path>, origin: &str) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        Ok(Self {
            path: dir.join(format!("{}.json", file_stem(origin))),
            lock: RwLock::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or corrupt file is an empty store. Any other read failure is
    /// an error, so a write never replaces contents it could not see.
    async fn load(&self) -> Result<Entries, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Storage file is corrupt, treating as empty");
            Entries::new()
        }))
    }

    async fn save(&self, entries: Entries) -> Result<(), StorageError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &entries))
            .await
            .map_err(|e| StorageError::Io(io::Error::other(e)))?
    }
}

fn write_atomically(path: &Path, entries: &Entries) -> Result<(), StorageError> {
    let body =
        serde_json::to_vec_pretty(entries).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&body)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}

/// Turn an origin such as `http://localhost:5000` into `http_localhost_5000`.
fn file_stem(origin: &str) -> String {
    let stem: String = origin
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();

    let stem = stem.split('_').filter(|s| !s.is_empty()).collect::<Vec<_>>().join("_");
    if stem.is_empty() { "default".to_string() } else { stem }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get_item(&self, key: &str) -> Option<String> {
        let _guard = self.lock.read().await;
        match self.load().await {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read storage file");
                None
            }
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.write().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.save(entries).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.write().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(entries).await
    }
}
