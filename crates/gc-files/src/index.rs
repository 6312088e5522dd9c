// index.rs — FileIndex: metadata persistence for attachments.
//
// One JSON array file per checkpoint: `<index_dir>/<checkpoint_id>.json`.
// The original kept these rows in a database table; a JSON file per
// checkpoint gives the same read path (fetch all files for a checkpoint)
// and stays inspectable.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::FileStoreError;
use crate::file::CheckpointFile;

/// Persistent index of CheckpointFile metadata records.
pub struct FileIndex {
    index_dir: PathBuf,
}

impl FileIndex {
    /// Create an index backed by the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn new(index_dir: impl AsRef<Path>) -> Result<Self, FileStoreError> {
        let index_dir = index_dir.as_ref().to_path_buf();
        fs::create_dir_all(&index_dir).map_err(|source| FileStoreError::IoError {
            path: index_dir.display().to_string(),
            source,
        })?;
        Ok(Self { index_dir })
    }

    /// Record one attachment's metadata.
    pub fn record(&self, file: &CheckpointFile) -> Result<(), FileStoreError> {
        let mut files = self.list_for_checkpoint(file.checkpoint_id)?;
        files.push(file.clone());

        let path = self.index_file(file.checkpoint_id);
        let json = serde_json::to_string_pretty(&files)?;
        fs::write(&path, json).map_err(|source| FileStoreError::IoError {
            path: path.display().to_string(),
            source,
        })
    }

    /// All attachments for a checkpoint, in upload order.
    pub fn list_for_checkpoint(
        &self,
        checkpoint_id: Uuid,
    ) -> Result<Vec<CheckpointFile>, FileStoreError> {
        let path = self.index_file(checkpoint_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&path).map_err(|source| FileStoreError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let files: Vec<CheckpointFile> = serde_json::from_str(&json)?;
        Ok(files)
    }

    fn index_file(&self, checkpoint_id: Uuid) -> PathBuf {
        self.index_dir.join(format!("{}.json", checkpoint_id))
    }
}
