// events.rs — Event model and notification dispatch.
//
// The engine emits events at key lifecycle points. Notification sinks
// (log files, future webhook/email integrations) subscribe to these.
// The dispatcher is synchronous; sink errors are logged and never fail
// the operation that produced the event.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::checkpoint::{Checkpoint, CheckpointStatus};
use crate::error::CheckpointError;

/// Events emitted at key checkpoint lifecycle points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum CheckpointEvent {
    /// A new checkpoint was created (draft or pending_receiver).
    CheckpointCreated {
        checkpoint_id: Uuid,
        goal_description: String,
        setter_name: String,
        receiver_name: String,
        status: String,
        timestamp: DateTime<Utc>,
    },

    /// A checkpoint changed status.
    StatusChanged {
        checkpoint_id: Uuid,
        from_status: String,
        to_status: String,
        timestamp: DateTime<Utc>,
    },

    /// The receiver submitted their review.
    ReviewSubmitted {
        checkpoint_id: Uuid,
        has_questions: bool,
        has_concerns: bool,
        timestamp: DateTime<Utc>,
    },

    /// The live session completed with a final outcome.
    SessionCompleted {
        checkpoint_id: Uuid,
        accepted: bool,
        timestamp: DateTime<Utc>,
    },

    /// A file was attached during goal definition.
    FileAttached {
        checkpoint_id: Uuid,
        file_name: String,
        file_size: u64,
        timestamp: DateTime<Utc>,
    },
}

impl CheckpointEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            CheckpointEvent::CheckpointCreated { .. } => "checkpoint_created",
            CheckpointEvent::StatusChanged { .. } => "status_changed",
            CheckpointEvent::ReviewSubmitted { .. } => "review_submitted",
            CheckpointEvent::SessionCompleted { .. } => "session_completed",
            CheckpointEvent::FileAttached { .. } => "file_attached",
        }
    }

    /// Helper to create a CheckpointCreated event.
    pub fn created(checkpoint: &Checkpoint) -> Self {
        CheckpointEvent::CheckpointCreated {
            checkpoint_id: checkpoint.id,
            goal_description: checkpoint.goal_description.clone(),
            setter_name: checkpoint.setter_name.clone(),
            receiver_name: checkpoint.receiver_name.clone(),
            status: checkpoint.status.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a StatusChanged event.
    pub fn status_changed(id: Uuid, from: CheckpointStatus, to: CheckpointStatus) -> Self {
        CheckpointEvent::StatusChanged {
            checkpoint_id: id,
            from_status: from.to_string(),
            to_status: to.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a ReviewSubmitted event.
    pub fn review_submitted(checkpoint: &Checkpoint) -> Self {
        CheckpointEvent::ReviewSubmitted {
            checkpoint_id: checkpoint.id,
            has_questions: checkpoint.receiver_questions.is_some(),
            has_concerns: checkpoint.receiver_concerns.is_some(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a SessionCompleted event.
    pub fn session_completed(checkpoint: &Checkpoint) -> Self {
        CheckpointEvent::SessionCompleted {
            checkpoint_id: checkpoint.id,
            accepted: checkpoint.accepted,
            timestamp: Utc::now(),
        }
    }

    /// Helper to create a FileAttached event.
    pub fn file_attached(checkpoint_id: Uuid, file_name: &str, file_size: u64) -> Self {
        CheckpointEvent::FileAttached {
            checkpoint_id,
            file_name: file_name.to_string(),
            file_size,
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving checkpoint events.
///
/// Implementations decide what to do with each event: log to a file,
/// call a webhook, send an email, etc.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the system.
    fn send(&self, event: &CheckpointEvent) -> Result<(), CheckpointError>;
}

/// Logs events as JSONL to a file (always-on sink).
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &CheckpointEvent) -> Result<(), CheckpointError> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CheckpointError::Storage {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| CheckpointError::Storage {
                path: self.path.display().to_string(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| CheckpointError::Storage {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
#[derive(Default)]
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &CheckpointEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_event() -> CheckpointEvent {
        CheckpointEvent::StatusChanged {
            checkpoint_id: Uuid::new_v4(),
            from_status: "pending_receiver".to_string(),
            to_status: "ready_for_session".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn event_serialization_round_trip() {
        let event = sample_event();
        let json = serde_json::to_string(&event).unwrap();
        let restored: CheckpointEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event.event_type(), restored.event_type());
        assert!(json.contains("\"status_changed\""));
    }

    #[test]
    fn log_sink_appends_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let sink = LogSink::new(&path);

        sink.send(&sample_event()).unwrap();
        sink.send(&sample_event()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn dispatcher_sends_to_all_sinks() {
        let dir = tempdir().unwrap();
        let path1 = dir.path().join("sink1.jsonl");
        let path2 = dir.path().join("sink2.jsonl");

        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_sink(Box::new(LogSink::new(&path1)));
        dispatcher.add_sink(Box::new(LogSink::new(&path2)));

        dispatcher.dispatch(&sample_event());

        assert!(fs::read_to_string(&path1).unwrap().contains("status_changed"));
        assert!(fs::read_to_string(&path2).unwrap().contains("status_changed"));
    }

    #[test]
    fn event_type_names() {
        let id = Uuid::new_v4();
        assert_eq!(
            CheckpointEvent::file_attached(id, "report.pdf", 1024).event_type(),
            "file_attached"
        );
        assert_eq!(
            CheckpointEvent::status_changed(
                id,
                CheckpointStatus::PendingReceiver,
                CheckpointStatus::ReadyForSession
            )
            .event_type(),
            "status_changed"
        );
    }
}
