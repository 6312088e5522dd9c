//! # gc-files
//!
//! Attachment storage and metadata for goal-commitment checkpoints.
//!
//! Attachments are fire-and-forget relative to the checkpoint record:
//! they are created only during goal definition, never mutated, and a
//! failed upload reports its own error without blocking or rolling back
//! the checkpoint's creation.
//!
//! ## Key components
//!
//! - [`CheckpointFile`] — metadata for one attachment
//! - [`ObjectStore`] — collaborator trait for storing bytes and
//!   resolving readable URLs, with a local-directory implementation
//!   ([`LocalObjectStore`])
//! - [`FileIndex`] — JSON file-based metadata persistence
//! - [`attach_file`] — store bytes + record metadata in one call

pub mod error;
pub mod file;
pub mod index;
pub mod object_store;

pub use error::FileStoreError;
pub use file::{mime_for_name, CheckpointFile};
pub use index::FileIndex;
pub use object_store::{LocalObjectStore, ObjectStore};

use uuid::Uuid;

/// Attach one file to a checkpoint: store the bytes, then record the
/// metadata. Returns the metadata record.
///
/// Callers attaching a batch invoke this per file and report failures
/// individually — one bad upload never blocks the rest, or the
/// checkpoint itself.
pub fn attach_file<O: ObjectStore>(
    object_store: &O,
    index: &FileIndex,
    checkpoint_id: Uuid,
    file_name: &str,
    bytes: &[u8],
) -> Result<CheckpointFile, FileStoreError> {
    let locator = object_store.store(checkpoint_id, file_name, bytes)?;
    let record = CheckpointFile::new(
        checkpoint_id,
        file_name,
        bytes.len() as u64,
        mime_for_name(file_name),
        locator,
    );
    index.record(&record)?;
    Ok(record)
}
