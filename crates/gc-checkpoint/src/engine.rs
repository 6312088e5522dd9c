// engine.rs — LifecycleEngine: the one place checkpoint state changes.
//
// The engine wraps a CheckpointStore and applies the workflow's three
// operations (create, receiver review, live session) plus the optional
// persisted-draft path. It validates inputs, enforces transition
// legality, derives the acceptance outcome, and emits events. It never
// retries storage failures — those surface to the caller as-is.

use uuid::Uuid;

use crate::checkpoint::{
    Checkpoint, CheckpointStatus, CreateCheckpoint, LiveSession, ReceiverReview,
};
use crate::error::CheckpointError;
use crate::events::{CheckpointEvent, EventDispatcher, NotificationSink};
use crate::store::CheckpointStore;

/// The checkpoint lifecycle engine.
///
/// Generic over `S: CheckpointStore` so the same engine runs against the
/// JSON file store, an in-memory store in tests, or a hosted database
/// behind the same trait.
pub struct LifecycleEngine<S: CheckpointStore> {
    store: S,
    events: EventDispatcher,
}

impl<S: CheckpointStore> LifecycleEngine<S> {
    /// Create an engine over the given store, with no event sinks.
    pub fn new(store: S) -> Self {
        Self {
            store,
            events: EventDispatcher::new(),
        }
    }

    /// Attach a notification sink for lifecycle events.
    pub fn with_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.events.add_sink(sink);
        self
    }

    /// Access the underlying store (for listing, file paths, etc.).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Dispatch an event through the engine's sinks.
    pub fn dispatch(&self, event: &CheckpointEvent) {
        self.events.dispatch(event);
    }

    /// Create a checkpoint with the setter's full material, entering
    /// `pending_receiver`. Fails with a validation error — persisting
    /// nothing — if the goal description or either name is empty.
    pub fn create(&self, input: CreateCheckpoint) -> Result<Checkpoint, CheckpointError> {
        input.validate()?;
        let checkpoint = self.store.insert(&Checkpoint::new(input))?;
        tracing::info!(
            checkpoint_id = %checkpoint.id,
            goal = %checkpoint.goal_description,
            "checkpoint created"
        );
        self.events.dispatch(&CheckpointEvent::created(&checkpoint));
        Ok(checkpoint)
    }

    /// Persist a not-yet-submitted checkpoint in `draft`. The original
    /// system kept drafts client-local; storing them explicitly means a
    /// half-written checkpoint survives a crash.
    pub fn create_draft(&self, input: CreateCheckpoint) -> Result<Checkpoint, CheckpointError> {
        input.validate()?;
        let checkpoint = self.store.insert(&Checkpoint::new_draft(input))?;
        tracing::info!(checkpoint_id = %checkpoint.id, "draft checkpoint saved");
        self.events.dispatch(&CheckpointEvent::created(&checkpoint));
        Ok(checkpoint)
    }

    /// Promote a draft to `pending_receiver`, stamping the setter's
    /// completion time. Only valid from `draft`.
    pub fn complete_setter_stage(&self, id: Uuid) -> Result<Checkpoint, CheckpointError> {
        let mut checkpoint = self.get(id)?;
        let from = checkpoint.status;
        checkpoint.transition(CheckpointStatus::PendingReceiver)?;
        checkpoint.setter_completed_at = Some(chrono::Utc::now());
        let checkpoint = self.store.update(&checkpoint)?;
        self.events
            .dispatch(&CheckpointEvent::status_changed(id, from, checkpoint.status));
        Ok(checkpoint)
    }

    /// Record the receiver's questions/concerns and move to
    /// `ready_for_session`. Valid from any pre-session status; a terminal
    /// record is rejected with a conflict instead of being regressed.
    pub fn submit_receiver_review(
        &self,
        id: Uuid,
        review: ReceiverReview,
    ) -> Result<Checkpoint, CheckpointError> {
        let mut checkpoint = self.get(id)?;
        if checkpoint.status.is_terminal() {
            return Err(CheckpointError::Conflict {
                id,
                status: checkpoint.status.to_string(),
            });
        }
        let from = checkpoint.status;
        checkpoint.apply_receiver_review(review)?;
        let checkpoint = self.store.update(&checkpoint)?;
        tracing::info!(checkpoint_id = %id, "receiver review submitted");
        self.events
            .dispatch(&CheckpointEvent::status_changed(id, from, checkpoint.status));
        self.events
            .dispatch(&CheckpointEvent::review_submitted(&checkpoint));
        Ok(checkpoint)
    }

    /// Record the live session's three answers and derive the outcome:
    /// `accepted` iff the commitment answer is yes (see
    /// [`Checkpoint::apply_live_session`] for why Q1/Q2 don't gate it).
    ///
    /// Terminal and idempotent: re-submitting identical answers on a
    /// completed checkpoint returns the stored record unchanged; different
    /// answers are rejected with a conflict, never silently overwritten.
    pub fn complete_live_session(
        &self,
        id: Uuid,
        session: LiveSession,
    ) -> Result<Checkpoint, CheckpointError> {
        session.validate()?;
        let mut checkpoint = self.get(id)?;

        if checkpoint.status.is_terminal() {
            if session.matches_record(&checkpoint) {
                tracing::debug!(checkpoint_id = %id, "identical session re-submission ignored");
                return Ok(checkpoint);
            }
            return Err(CheckpointError::Conflict {
                id,
                status: checkpoint.status.to_string(),
            });
        }

        let from = checkpoint.status;
        checkpoint.apply_live_session(session)?;
        let checkpoint = self.store.update(&checkpoint)?;
        tracing::info!(
            checkpoint_id = %id,
            accepted = checkpoint.accepted,
            "live session completed"
        );
        self.events
            .dispatch(&CheckpointEvent::status_changed(id, from, checkpoint.status));
        self.events
            .dispatch(&CheckpointEvent::session_completed(&checkpoint));
        Ok(checkpoint)
    }

    /// Fetch a checkpoint, failing if the id resolves to nothing.
    pub fn get(&self, id: Uuid) -> Result<Checkpoint, CheckpointError> {
        self.store.get(id)?.ok_or(CheckpointError::NotFound(id))
    }
}
