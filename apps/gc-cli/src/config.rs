// config.rs — CLI configuration.
//
// CheckpointConfig determines where the tool stores its state: the
// checkpoint JSON records, attachment bytes and their metadata index,
// and the event log. The `for_project()` constructor generates sensible
// defaults under a `.goalcheck/` directory in the project root.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the goalcheck CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointConfig {
    /// Root directory the tool was pointed at.
    pub project_root: PathBuf,

    /// Directory for checkpoint records (one JSON file per checkpoint).
    pub checkpoints_dir: PathBuf,

    /// Root directory for attachment bytes.
    pub files_dir: PathBuf,

    /// Directory for attachment metadata (one JSON file per checkpoint).
    pub file_index_dir: PathBuf,

    /// Path to the JSONL event log.
    pub events_log: PathBuf,
}

impl CheckpointConfig {
    /// Create a config with the standard `.goalcheck/` layout for a project.
    pub fn for_project(project_root: impl AsRef<Path>) -> Self {
        let root = project_root.as_ref().to_path_buf();
        let gc_dir = root.join(".goalcheck");
        Self {
            project_root: root,
            checkpoints_dir: gc_dir.join("checkpoints"),
            files_dir: gc_dir.join("files"),
            file_index_dir: gc_dir.join("files").join("index"),
            events_log: gc_dir.join("events.jsonl"),
        }
    }
}
