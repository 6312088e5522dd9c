// store.rs — CheckpointStore trait and JsonFileStore implementation.
//
// The CheckpointStore trait is the persistence collaborator boundary:
// insert / get / update, nothing more. The engine does not care whether a
// hosted database or a directory of JSON files sits behind it.
//
// The provided implementation (JsonFileStore) writes one pretty-printed
// JSON file per checkpoint: `<store_dir>/<id>.json`. This keeps records
// isolated and easy to inspect manually — no database needed.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::checkpoint::Checkpoint;
use crate::error::CheckpointError;

/// Trait for persisting and retrieving Checkpoint records.
///
/// Implementations maintain `updated_at` on every `update` call; the
/// engine never touches that field itself.
pub trait CheckpointStore {
    /// Persist a newly created checkpoint. The record's id is expected to
    /// be fresh (ids are random v4 UUIDs, allocated once at creation).
    fn insert(&self, checkpoint: &Checkpoint) -> Result<Checkpoint, CheckpointError>;

    /// Fetch a checkpoint by id, or `None` if it doesn't exist.
    fn get(&self, id: Uuid) -> Result<Option<Checkpoint>, CheckpointError>;

    /// Persist an updated checkpoint, bumping `updated_at`. Returns the
    /// record as stored.
    fn update(&self, checkpoint: &Checkpoint) -> Result<Checkpoint, CheckpointError>;
}

/// JSON file-based CheckpointStore implementation.
///
/// Each checkpoint gets a file: `<store_dir>/<id>.json`.
pub struct JsonFileStore {
    store_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a new store backed by the given directory.
    /// Creates the directory if it doesn't exist.
    pub fn new(store_dir: impl AsRef<Path>) -> Result<Self, CheckpointError> {
        let store_dir = store_dir.as_ref().to_path_buf();
        fs::create_dir_all(&store_dir).map_err(|source| CheckpointError::Storage {
            path: store_dir.display().to_string(),
            source,
        })?;
        Ok(Self { store_dir })
    }

    /// List all checkpoints, sorted by creation time (newest first).
    pub fn list(&self) -> Result<Vec<Checkpoint>, CheckpointError> {
        let mut checkpoints = Vec::new();

        let entries = fs::read_dir(&self.store_dir).map_err(|source| CheckpointError::Storage {
            path: self.store_dir.display().to_string(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| CheckpointError::Storage {
                path: self.store_dir.display().to_string(),
                source,
            })?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "json") {
                let json = fs::read_to_string(&path).map_err(|source| CheckpointError::Storage {
                    path: path.display().to_string(),
                    source,
                })?;
                if let Ok(checkpoint) = serde_json::from_str::<Checkpoint>(&json) {
                    checkpoints.push(checkpoint);
                }
            }
        }

        checkpoints.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(checkpoints)
    }

    /// List checkpoints filtered by status name (e.g., "pending_receiver").
    pub fn list_by_status(&self, status_name: &str) -> Result<Vec<Checkpoint>, CheckpointError> {
        let all = self.list()?;
        Ok(all
            .into_iter()
            .filter(|c| c.status.to_string() == status_name)
            .collect())
    }

    fn write(&self, checkpoint: &Checkpoint) -> Result<(), CheckpointError> {
        let path = self.checkpoint_file(checkpoint.id);
        let json = serde_json::to_string_pretty(checkpoint)?;
        fs::write(&path, json).map_err(|source| CheckpointError::Storage {
            path: path.display().to_string(),
            source,
        })
    }

    /// Path to the JSON file for a given checkpoint.
    fn checkpoint_file(&self, id: Uuid) -> PathBuf {
        self.store_dir.join(format!("{}.json", id))
    }
}

impl CheckpointStore for JsonFileStore {
    fn insert(&self, checkpoint: &Checkpoint) -> Result<Checkpoint, CheckpointError> {
        self.write(checkpoint)?;
        Ok(checkpoint.clone())
    }

    fn get(&self, id: Uuid) -> Result<Option<Checkpoint>, CheckpointError> {
        let path = self.checkpoint_file(id);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path).map_err(|source| CheckpointError::Storage {
            path: path.display().to_string(),
            source,
        })?;
        let checkpoint: Checkpoint = serde_json::from_str(&json)?;
        Ok(Some(checkpoint))
    }

    fn update(&self, checkpoint: &Checkpoint) -> Result<Checkpoint, CheckpointError> {
        let mut updated = checkpoint.clone();
        updated.updated_at = Utc::now();
        self.write(&updated)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::{CheckpointStatus, CreateCheckpoint};
    use tempfile::tempdir;

    fn make_checkpoint(goal: &str) -> Checkpoint {
        Checkpoint::new(CreateCheckpoint {
            goal_description: goal.to_string(),
            setter_name: "A".to_string(),
            receiver_name: "B".to_string(),
            setter_q1: true,
            setter_q2: true,
            ..Default::default()
        })
    }

    #[test]
    fn insert_and_get_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("checkpoints")).unwrap();

        let cp = make_checkpoint("Ship Q3 roadmap");
        let id = cp.id;
        store.insert(&cp).unwrap();

        let found = store.get(id).unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.goal_description, "Ship Q3 roadmap");
        assert_eq!(found.status, CheckpointStatus::PendingReceiver);
    }

    #[test]
    fn get_nonexistent_returns_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("checkpoints")).unwrap();

        assert!(store.get(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn update_bumps_updated_at() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("checkpoints")).unwrap();

        let cp = make_checkpoint("Goal");
        store.insert(&cp).unwrap();

        let updated = store.update(&cp).unwrap();
        assert!(updated.updated_at >= cp.updated_at);

        let reloaded = store.get(cp.id).unwrap().unwrap();
        assert_eq!(reloaded.updated_at, updated.updated_at);
    }

    #[test]
    fn list_returns_all_newest_first() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("checkpoints")).unwrap();

        store.insert(&make_checkpoint("First")).unwrap();
        store.insert(&make_checkpoint("Second")).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[test]
    fn list_by_status_filters_correctly() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("checkpoints")).unwrap();

        let pending = make_checkpoint("Pending");
        let mut reviewed = make_checkpoint("Reviewed");
        reviewed
            .apply_receiver_review(crate::checkpoint::ReceiverReview::default())
            .unwrap();

        store.insert(&pending).unwrap();
        store.insert(&reviewed).unwrap();

        let found = store.list_by_status("ready_for_session").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].goal_description, "Reviewed");
    }

    #[test]
    fn store_survives_reopen() {
        let dir = tempdir().unwrap();
        let store_path = dir.path().join("checkpoints");

        let cp = make_checkpoint("Persistent");
        let id = cp.id;

        {
            let store = JsonFileStore::new(&store_path).unwrap();
            store.insert(&cp).unwrap();
        }

        {
            let store = JsonFileStore::new(&store_path).unwrap();
            let found = store.get(id).unwrap().unwrap();
            assert_eq!(found.goal_description, "Persistent");
        }
    }
}
