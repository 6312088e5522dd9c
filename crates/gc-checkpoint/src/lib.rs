//! # gc-checkpoint
//!
//! Checkpoint lifecycle engine for goal-commitment checkpoints.
//!
//! A [`Checkpoint`] records one goal assignment — the setter's goal and
//! disclosure material, the receiver's review, and the joint live
//! session's outcome. The state machine enforces a valid lifecycle from
//! creation through review to acceptance or gap identification.
//!
//! ## Key components
//!
//! - [`Checkpoint`] — the record and its status state machine
//!   (Draft → PendingReceiver → ReadyForSession → Accepted | GapsIdentified)
//! - [`LifecycleEngine`] — validates and applies the three workflow
//!   operations, and derives the `accepted` outcome from the live session
//! - [`CheckpointStore`] — persistence collaborator trait, with a JSON
//!   file-based implementation ([`JsonFileStore`])
//! - [`CheckpointEvent`] — events emitted at key lifecycle points
//! - [`EventDispatcher`] / [`NotificationSink`] — synchronous event fan-out

pub mod checkpoint;
pub mod engine;
pub mod error;
pub mod events;
pub mod store;

pub use checkpoint::{
    Checkpoint, CheckpointStatus, CreateCheckpoint, LiveAnswer, LiveSession, ReceiverReview,
    SourceType,
};
pub use engine::LifecycleEngine;
pub use error::CheckpointError;
pub use events::{CheckpointEvent, EventDispatcher, LogSink, NotificationSink};
pub use store::{CheckpointStore, JsonFileStore};
