// object_store.rs — ObjectStore trait and local-filesystem implementation.
//
// The original system put attachment bytes in a hosted object store and
// handed out signed URLs with a one-hour expiry. The trait keeps that
// shape — store bytes, resolve a readable URL with a TTL — while the
// local backend writes under a plain directory and resolves file:// URLs
// (which don't expire, so the TTL is accepted and ignored).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::error::FileStoreError;

/// Trait for storing attachment bytes and resolving readable URLs.
///
/// Locators are opaque to callers: produced by `store`, consumed by
/// `resolve_readable_url`, persisted in between as CheckpointFile
/// metadata.
pub trait ObjectStore {
    /// Store the bytes of one attachment, returning its locator.
    fn store(
        &self,
        checkpoint_id: Uuid,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError>;

    /// Resolve a locator to a URL readable for at least `ttl`.
    fn resolve_readable_url(&self, locator: &str, ttl: Duration) -> Result<String, FileStoreError>;
}

/// ObjectStore backed by a local directory.
///
/// Locators follow the `<checkpoint_id>/<unix_millis>_<file_name>`
/// convention, so attachments group by checkpoint on disk.
pub struct LocalObjectStore {
    root: PathBuf,
}

impl LocalObjectStore {
    /// Create a store rooted at the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, FileStoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| FileStoreError::IoError {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }
}

impl ObjectStore for LocalObjectStore {
    fn store(
        &self,
        checkpoint_id: Uuid,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError> {
        // Reject path traversal attempts in the uploaded name.
        if file_name.contains("..") || file_name.contains('/') || file_name.contains('\\') {
            return Err(FileStoreError::PathTraversal {
                path: file_name.to_string(),
            });
        }

        let locator = format!(
            "{}/{}_{}",
            checkpoint_id,
            Utc::now().timestamp_millis(),
            file_name
        );

        let path = self.root.join(&locator);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| FileStoreError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }
        fs::write(&path, bytes).map_err(|source| FileStoreError::IoError {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(%checkpoint_id, file_name, size = bytes.len(), "attachment stored");
        Ok(locator)
    }

    fn resolve_readable_url(&self, locator: &str, _ttl: Duration) -> Result<String, FileStoreError> {
        if locator.contains("..") {
            return Err(FileStoreError::PathTraversal {
                path: locator.to_string(),
            });
        }

        let path = self.root.join(locator);
        if !path.exists() {
            return Err(FileStoreError::UnknownLocator {
                locator: locator.to_string(),
            });
        }

        let absolute = path.canonicalize().map_err(|source| FileStoreError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(format!("file://{}", absolute.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn store_and_resolve_round_trip() {
        let dir = tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().join("files")).unwrap();
        let checkpoint_id = Uuid::new_v4();

        let locator = store
            .store(checkpoint_id, "report.pdf", b"pdf bytes")
            .unwrap();
        assert!(locator.starts_with(&checkpoint_id.to_string()));
        assert!(locator.ends_with("_report.pdf"));

        let url = store
            .resolve_readable_url(&locator, Duration::from_secs(3600))
            .unwrap();
        assert!(url.starts_with("file://"));

        let on_disk = fs::read(dir.path().join("files").join(&locator)).unwrap();
        assert_eq!(on_disk, b"pdf bytes");
    }

    #[test]
    fn resolve_unknown_locator_fails() {
        let dir = tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().join("files")).unwrap();

        let result =
            store.resolve_readable_url("nope/123_missing.pdf", Duration::from_secs(60));
        assert!(matches!(result, Err(FileStoreError::UnknownLocator { .. })));
    }

    #[test]
    fn traversal_in_file_name_is_rejected() {
        let dir = tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().join("files")).unwrap();

        let result = store.store(Uuid::new_v4(), "../../etc/passwd", b"x");
        assert!(matches!(result, Err(FileStoreError::PathTraversal { .. })));

        let result = store.resolve_readable_url("../outside", Duration::from_secs(60));
        assert!(matches!(result, Err(FileStoreError::PathTraversal { .. })));
    }

    #[test]
    fn same_name_stored_twice_gets_distinct_locators() {
        let dir = tempdir().unwrap();
        let store = LocalObjectStore::new(dir.path().join("files")).unwrap();
        let checkpoint_id = Uuid::new_v4();

        let first = store.store(checkpoint_id, "notes.txt", b"v1").unwrap();
        // Millisecond timestamps can collide back-to-back; space the writes.
        std::thread::sleep(Duration::from_millis(2));
        let second = store.store(checkpoint_id, "notes.txt", b"v2").unwrap();
        assert_ne!(first, second);
    }
}
