// checkpoint.rs — Checkpoint: the persistent goal-commitment record.
//
// A Checkpoint tracks one goal assignment from the moment the setter
// writes it down to the moment both parties finish the live session:
// - Goal facts (description, target, deadline, context, source)
// - Setter disclosure (assumptions, constraints, dependencies, two
//   pre-commitment confirmations)
// - Receiver preparation (questions, concerns)
// - Live-session answers and the derived accepted/gaps outcome
//
// The state machine enforces a valid lifecycle:
//   Draft → PendingReceiver → ReadyForSession → Accepted | GapsIdentified
// (Accepted and GapsIdentified are terminal — no editing or re-opening.)

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CheckpointError;

/// The lifecycle status of a Checkpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointStatus {
    /// Setter has begun but not yet submitted. The web original kept this
    /// state client-local; we persist it so a half-written checkpoint
    /// survives a crash.
    Draft,

    /// Setter finished both stages — waiting for the receiver to review.
    PendingReceiver,

    /// Receiver finished reviewing — the live session can happen.
    ReadyForSession,

    /// Live session completed with commitment affirmed.
    Accepted,

    /// Live session completed with commitment withheld.
    GapsIdentified,
}

impl fmt::Display for CheckpointStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckpointStatus::Draft => write!(f, "draft"),
            CheckpointStatus::PendingReceiver => write!(f, "pending_receiver"),
            CheckpointStatus::ReadyForSession => write!(f, "ready_for_session"),
            CheckpointStatus::Accepted => write!(f, "accepted"),
            CheckpointStatus::GapsIdentified => write!(f, "gaps_identified"),
        }
    }
}

impl CheckpointStatus {
    /// Check whether transitioning from this status to `next` is valid.
    ///
    /// The valid transitions form a short chain:
    ///   Draft → PendingReceiver → ReadyForSession → Accepted | GapsIdentified
    /// A receiver may review a still-draft checkpoint (Draft → ReadyForSession),
    /// matching the lenient "any pre-session status" precondition.
    pub fn can_transition_to(&self, next: &CheckpointStatus) -> bool {
        matches!(
            (self, next),
            (CheckpointStatus::Draft, CheckpointStatus::PendingReceiver)
                | (CheckpointStatus::Draft, CheckpointStatus::ReadyForSession)
                | (CheckpointStatus::PendingReceiver, CheckpointStatus::ReadyForSession)
                | (CheckpointStatus::ReadyForSession, CheckpointStatus::Accepted)
                | (CheckpointStatus::ReadyForSession, CheckpointStatus::GapsIdentified)
        )
    }

    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CheckpointStatus::Accepted | CheckpointStatus::GapsIdentified
        )
    }
}

/// Where the goal came from (BI dashboard, an email from leadership, etc.).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    BiReport,
    LeadershipEmail,
    PlanningDoc,
    Verbal,
    Other,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::BiReport => write!(f, "bi_report"),
            SourceType::LeadershipEmail => write!(f, "leadership_email"),
            SourceType::PlanningDoc => write!(f, "planning_doc"),
            SourceType::Verbal => write!(f, "verbal"),
            SourceType::Other => write!(f, "other"),
        }
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bi_report" => Ok(SourceType::BiReport),
            "leadership_email" => Ok(SourceType::LeadershipEmail),
            "planning_doc" => Ok(SourceType::PlanningDoc),
            "verbal" => Ok(SourceType::Verbal),
            "other" => Ok(SourceType::Other),
            _ => Err(format!(
                "unknown source type '{s}' (expected bi_report, leadership_email, \
                 planning_doc, verbal, or other)"
            )),
        }
    }
}

/// A tri-state answer to a live-session question.
///
/// Modeled as its own enum rather than `Option<bool>` so "not yet answered"
/// is a first-class state — the engine refuses to complete a session with
/// any answer still `Unanswered`, instead of letting a partially-answered
/// record silently default to "not accepted".
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LiveAnswer {
    #[default]
    Unanswered,
    Yes,
    No,
}

impl LiveAnswer {
    pub fn is_answered(&self) -> bool {
        !matches!(self, LiveAnswer::Unanswered)
    }

    /// The definite boolean value, or `None` if unanswered.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LiveAnswer::Unanswered => None,
            LiveAnswer::Yes => Some(true),
            LiveAnswer::No => Some(false),
        }
    }
}

impl fmt::Display for LiveAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveAnswer::Unanswered => write!(f, "unanswered"),
            LiveAnswer::Yes => write!(f, "yes"),
            LiveAnswer::No => write!(f, "no"),
        }
    }
}

impl FromStr for LiveAnswer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(LiveAnswer::Yes),
            "no" | "n" | "false" => Ok(LiveAnswer::No),
            _ => Err(format!("unknown answer '{s}' (expected yes or no)")),
        }
    }
}

/// A Checkpoint — one goal assignment's full paper trail.
///
/// The record is written once per workflow stage: the setter's stage at
/// creation, the receiver's at review, and the joint live session last.
/// Goal and setter fields are immutable after creation — there is no
/// edit operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Unique identifier. Also the external share key: possession of the
    /// id is the only credential needed to reach the record.
    pub id: Uuid,

    /// Current lifecycle status.
    pub status: CheckpointStatus,

    /// The goal itself (e.g., "Raise retention to 90%").
    pub goal_description: String,

    /// Target value, if the goal has a measurable target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<String>,

    /// Deadline, free-form as entered (the original passes the form value
    /// through uninterpreted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,

    /// Free-text background for the goal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Where the goal number came from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_description: Option<String>,

    /// The party assigning the goal.
    pub setter_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter_email: Option<String>,

    /// The party expected to accept and pursue the goal.
    pub receiver_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_email: Option<String>,

    /// Setter disclosure: assumptions behind the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter_assumptions: Option<String>,

    /// Setter disclosure: known constraints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter_constraints: Option<String>,

    /// Setter disclosure: dependencies outside the receiver's control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter_dependencies: Option<String>,

    /// Pre-commitment confirmation: "I explained the context."
    pub setter_q1: bool,

    /// Pre-commitment confirmation: "I invited concerns."
    pub setter_q2: bool,

    /// When the setter finished both stages. `None` while still a draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter_completed_at: Option<DateTime<Utc>>,

    /// Receiver preparation: questions to raise in the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_questions: Option<String>,

    /// Receiver preparation: concerns about the goal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_concerns: Option<String>,

    /// When the receiver finished reviewing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_reviewed_at: Option<DateTime<Utc>>,

    /// Live session: "do you understand what is being asked?"
    #[serde(default)]
    pub live_q1: LiveAnswer,

    /// Live session: "is the target realistic?"
    #[serde(default)]
    pub live_q2: LiveAnswer,

    /// Live session: "do you commit to it?"
    #[serde(default)]
    pub live_q3: LiveAnswer,

    /// What needs to be addressed before acceptance (relevant when
    /// understanding or realism was flagged negative).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_needs: Option<String>,

    /// Derived outcome. Invariant: true iff `live_q3` is `Yes`.
    pub accepted: bool,

    /// Set only on acceptance. Invariant: `Some` iff `accepted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,

    /// When this checkpoint was created.
    pub created_at: DateTime<Utc>,

    /// When this checkpoint was last written. Maintained by the store on
    /// every update.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a checkpoint: all goal facts plus the setter's
/// disclosure material, gathered in one shot.
///
/// The original UI collects this across two form stages; the engine sees
/// a single immutable input struct (no shared mutable form state).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCheckpoint {
    pub goal_description: String,
    pub target_value: Option<String>,
    pub deadline: Option<String>,
    pub context: Option<String>,
    pub source_type: Option<SourceType>,
    pub source_description: Option<String>,
    pub setter_name: String,
    pub setter_email: Option<String>,
    pub receiver_name: String,
    pub receiver_email: Option<String>,
    pub setter_assumptions: Option<String>,
    pub setter_constraints: Option<String>,
    pub setter_dependencies: Option<String>,
    /// "I explained the context behind this goal."
    pub setter_q1: bool,
    /// "I invited the receiver to raise concerns."
    pub setter_q2: bool,
}

impl CreateCheckpoint {
    /// Validate required fields: goal description, setter name, receiver
    /// name must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.goal_description.trim().is_empty() {
            return Err(CheckpointError::missing("goal_description"));
        }
        if self.setter_name.trim().is_empty() {
            return Err(CheckpointError::missing("setter_name"));
        }
        if self.receiver_name.trim().is_empty() {
            return Err(CheckpointError::missing("receiver_name"));
        }
        Ok(())
    }
}

/// Input for the receiver's review stage. Both fields optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiverReview {
    pub questions: Option<String>,
    pub concerns: Option<String>,
}

/// Input for the joint live session: the three answers plus the amber
/// "needs before acceptance" field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveSession {
    /// Q1 — understanding.
    pub understanding: LiveAnswer,
    /// Q2 — realism.
    pub realism: LiveAnswer,
    /// Q3 — commitment. The only answer that gates acceptance.
    pub commitment: LiveAnswer,
    pub needs: Option<String>,
}

impl LiveSession {
    /// All three answers must be definite before the session can complete.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if !self.understanding.is_answered() {
            return Err(CheckpointError::missing("live_q1"));
        }
        if !self.realism.is_answered() {
            return Err(CheckpointError::missing("live_q2"));
        }
        if !self.commitment.is_answered() {
            return Err(CheckpointError::missing("live_q3"));
        }
        Ok(())
    }

    /// Whether this submission matches what a checkpoint already recorded.
    /// Used to accept identical re-submissions idempotently.
    pub fn matches_record(&self, checkpoint: &Checkpoint) -> bool {
        self.understanding == checkpoint.live_q1
            && self.realism == checkpoint.live_q2
            && self.commitment == checkpoint.live_q3
            && normalize_text(self.needs.clone()) == checkpoint.live_needs
    }
}

/// Trim a free-text field and collapse empty submissions to `None`, so
/// "left blank" is represented one way everywhere.
pub(crate) fn normalize_text(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl Checkpoint {
    /// Create a checkpoint in PendingReceiver — the setter has finished
    /// both stages. Callers validate the input first.
    pub fn new(input: CreateCheckpoint) -> Self {
        let mut checkpoint = Self::from_input(input);
        checkpoint.status = CheckpointStatus::PendingReceiver;
        checkpoint.setter_completed_at = Some(checkpoint.created_at);
        checkpoint
    }

    /// Create a checkpoint in Draft — the setter's work is saved but not
    /// yet submitted to the receiver.
    pub fn new_draft(input: CreateCheckpoint) -> Self {
        Self::from_input(input)
    }

    fn from_input(input: CreateCheckpoint) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            status: CheckpointStatus::Draft,
            goal_description: input.goal_description.trim().to_string(),
            target_value: normalize_text(input.target_value),
            deadline: normalize_text(input.deadline),
            context: normalize_text(input.context),
            source_type: input.source_type,
            source_description: normalize_text(input.source_description),
            setter_name: input.setter_name.trim().to_string(),
            setter_email: normalize_text(input.setter_email),
            receiver_name: input.receiver_name.trim().to_string(),
            receiver_email: normalize_text(input.receiver_email),
            setter_assumptions: normalize_text(input.setter_assumptions),
            setter_constraints: normalize_text(input.setter_constraints),
            setter_dependencies: normalize_text(input.setter_dependencies),
            setter_q1: input.setter_q1,
            setter_q2: input.setter_q2,
            setter_completed_at: None,
            receiver_questions: None,
            receiver_concerns: None,
            receiver_reviewed_at: None,
            live_q1: LiveAnswer::Unanswered,
            live_q2: LiveAnswer::Unanswered,
            live_q3: LiveAnswer::Unanswered,
            live_needs: None,
            accepted: false,
            accepted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Transition to a new status. Returns an error if the transition is
    /// invalid; terminal statuses reject everything.
    pub fn transition(&mut self, next: CheckpointStatus) -> Result<(), CheckpointError> {
        if !self.status.can_transition_to(&next) {
            return Err(CheckpointError::InvalidTransition {
                id: self.id,
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// Apply the receiver's review. Transition legality is checked first,
    /// so a terminal record is never regressed.
    pub fn apply_receiver_review(&mut self, review: ReceiverReview) -> Result<(), CheckpointError> {
        self.transition(CheckpointStatus::ReadyForSession)?;
        self.receiver_questions = normalize_text(review.questions);
        self.receiver_concerns = normalize_text(review.concerns);
        self.receiver_reviewed_at = Some(Utc::now());
        Ok(())
    }

    /// Apply the live-session outcome.
    ///
    /// Derivation rule, reproduced exactly from the observed system:
    /// `accepted := (commitment == yes)`. Understanding and realism are
    /// recorded for transparency but do not gate acceptance — a checkpoint
    /// is accepted when commitment is affirmed even if Q1 or Q2 was
    /// answered no. Flagged as a possible design oversight upstream;
    /// preserved as-is rather than widened to an AND over all three.
    pub fn apply_live_session(&mut self, session: LiveSession) -> Result<(), CheckpointError> {
        session.validate()?;
        let accepted = session.commitment == LiveAnswer::Yes;
        self.transition(if accepted {
            CheckpointStatus::Accepted
        } else {
            CheckpointStatus::GapsIdentified
        })?;
        self.live_q1 = session.understanding;
        self.live_q2 = session.realism;
        self.live_q3 = session.commitment;
        self.live_needs = normalize_text(session.needs);
        self.accepted = accepted;
        self.accepted_at = if accepted { Some(Utc::now()) } else { None };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CreateCheckpoint {
        CreateCheckpoint {
            goal_description: "Raise retention to 90%".to_string(),
            target_value: Some("90%".to_string()),
            deadline: Some("2026-12-31".to_string()),
            setter_name: "A".to_string(),
            receiver_name: "B".to_string(),
            setter_q1: true,
            setter_q2: true,
            ..Default::default()
        }
    }

    fn answered(q1: LiveAnswer, q2: LiveAnswer, q3: LiveAnswer) -> LiveSession {
        LiveSession {
            understanding: q1,
            realism: q2,
            commitment: q3,
            needs: None,
        }
    }

    #[test]
    fn new_checkpoint_is_pending_receiver() {
        let cp = Checkpoint::new(valid_input());
        assert_eq!(cp.status, CheckpointStatus::PendingReceiver);
        assert!(!cp.accepted);
        assert!(cp.accepted_at.is_none());
        assert!(cp.setter_completed_at.is_some());
        assert_eq!(cp.live_q1, LiveAnswer::Unanswered);
    }

    #[test]
    fn new_draft_has_no_setter_completed_at() {
        let cp = Checkpoint::new_draft(valid_input());
        assert_eq!(cp.status, CheckpointStatus::Draft);
        assert!(cp.setter_completed_at.is_none());
    }

    #[test]
    fn validate_rejects_empty_goal_description() {
        let mut input = valid_input();
        input.goal_description = "   ".to_string();
        let result = input.validate();
        assert!(matches!(
            result,
            Err(CheckpointError::Validation { ref field }) if field == "goal_description"
        ));
    }

    #[test]
    fn validate_rejects_missing_names() {
        let mut input = valid_input();
        input.setter_name = String::new();
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.receiver_name = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_optional_fields_normalize_to_none() {
        let mut input = valid_input();
        input.context = Some("  ".to_string());
        input.setter_assumptions = Some("".to_string());
        let cp = Checkpoint::new(input);
        assert!(cp.context.is_none());
        assert!(cp.setter_assumptions.is_none());
    }

    #[test]
    fn receiver_review_moves_to_ready_for_session() {
        let mut cp = Checkpoint::new(valid_input());
        cp.apply_receiver_review(ReceiverReview {
            questions: Some("What counts as retained?".to_string()),
            concerns: None,
        })
        .unwrap();
        assert_eq!(cp.status, CheckpointStatus::ReadyForSession);
        assert!(cp.receiver_reviewed_at.is_some());
        assert_eq!(
            cp.receiver_questions.as_deref(),
            Some("What counts as retained?")
        );
    }

    #[test]
    fn receiver_review_allowed_on_draft() {
        let mut cp = Checkpoint::new_draft(valid_input());
        cp.apply_receiver_review(ReceiverReview::default()).unwrap();
        assert_eq!(cp.status, CheckpointStatus::ReadyForSession);
    }

    #[test]
    fn accepted_iff_commitment_yes() {
        // Acceptance tracks Q3 alone — Q1/Q2 negative answers do not block it.
        let mut cp = Checkpoint::new(valid_input());
        cp.apply_receiver_review(ReceiverReview::default()).unwrap();
        cp.apply_live_session(answered(LiveAnswer::No, LiveAnswer::No, LiveAnswer::Yes))
            .unwrap();
        assert!(cp.accepted);
        assert_eq!(cp.status, CheckpointStatus::Accepted);
        assert!(cp.accepted_at.is_some());
    }

    #[test]
    fn commitment_no_yields_gaps_identified() {
        let mut cp = Checkpoint::new(valid_input());
        cp.apply_receiver_review(ReceiverReview::default()).unwrap();
        cp.apply_live_session(LiveSession {
            understanding: LiveAnswer::Yes,
            realism: LiveAnswer::Yes,
            commitment: LiveAnswer::No,
            needs: Some("need clearer metric".to_string()),
        })
        .unwrap();
        assert!(!cp.accepted);
        assert!(cp.accepted_at.is_none());
        assert_eq!(cp.status, CheckpointStatus::GapsIdentified);
        assert_eq!(cp.live_needs.as_deref(), Some("need clearer metric"));
    }

    #[test]
    fn live_session_rejects_unanswered_question() {
        let mut cp = Checkpoint::new(valid_input());
        cp.apply_receiver_review(ReceiverReview::default()).unwrap();
        let result = cp.apply_live_session(answered(
            LiveAnswer::Yes,
            LiveAnswer::Unanswered,
            LiveAnswer::Yes,
        ));
        assert!(matches!(
            result,
            Err(CheckpointError::Validation { ref field }) if field == "live_q2"
        ));
        // Nothing was recorded.
        assert_eq!(cp.status, CheckpointStatus::ReadyForSession);
        assert_eq!(cp.live_q1, LiveAnswer::Unanswered);
    }

    #[test]
    fn live_session_requires_ready_for_session() {
        let mut cp = Checkpoint::new(valid_input());
        // PendingReceiver → Accepted is not a legal move.
        let result =
            cp.apply_live_session(answered(LiveAnswer::Yes, LiveAnswer::Yes, LiveAnswer::Yes));
        assert!(matches!(
            result,
            Err(CheckpointError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn terminal_statuses_reject_all_transitions() {
        for status in [CheckpointStatus::Accepted, CheckpointStatus::GapsIdentified] {
            assert!(status.is_terminal());
            assert!(!status.can_transition_to(&CheckpointStatus::ReadyForSession));
            assert!(!status.can_transition_to(&CheckpointStatus::PendingReceiver));
            assert!(!status.can_transition_to(&CheckpointStatus::Accepted));
        }
    }

    #[test]
    fn status_display_matches_wire_names() {
        assert_eq!(CheckpointStatus::PendingReceiver.to_string(), "pending_receiver");
        assert_eq!(CheckpointStatus::ReadyForSession.to_string(), "ready_for_session");
        assert_eq!(CheckpointStatus::GapsIdentified.to_string(), "gaps_identified");
    }

    #[test]
    fn live_answer_parses_from_cli_spellings() {
        assert_eq!("yes".parse::<LiveAnswer>().unwrap(), LiveAnswer::Yes);
        assert_eq!("N".parse::<LiveAnswer>().unwrap(), LiveAnswer::No);
        assert_eq!("true".parse::<LiveAnswer>().unwrap(), LiveAnswer::Yes);
        assert!("maybe".parse::<LiveAnswer>().is_err());
    }

    #[test]
    fn source_type_round_trips_through_str() {
        for raw in ["bi_report", "leadership_email", "planning_doc", "verbal", "other"] {
            let parsed: SourceType = raw.parse().unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
        assert!("carrier_pigeon".parse::<SourceType>().is_err());
    }

    #[test]
    fn serialization_round_trip() {
        let mut cp = Checkpoint::new(valid_input());
        cp.apply_receiver_review(ReceiverReview {
            questions: Some("none".to_string()),
            concerns: None,
        })
        .unwrap();
        let json = serde_json::to_string_pretty(&cp).unwrap();
        assert!(json.contains("\"ready_for_session\""));
        // Absent optionals are omitted entirely.
        assert!(!json.contains("receiver_concerns"));
        let restored: Checkpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, cp.id);
        assert_eq!(restored.status, cp.status);
        assert_eq!(restored.receiver_questions, cp.receiver_questions);
    }

    #[test]
    fn live_session_matches_record_ignores_whitespace_in_needs() {
        let mut cp = Checkpoint::new(valid_input());
        cp.apply_receiver_review(ReceiverReview::default()).unwrap();
        cp.apply_live_session(LiveSession {
            understanding: LiveAnswer::Yes,
            realism: LiveAnswer::No,
            commitment: LiveAnswer::No,
            needs: Some("tighter scope".to_string()),
        })
        .unwrap();

        let resubmit = LiveSession {
            understanding: LiveAnswer::Yes,
            realism: LiveAnswer::No,
            commitment: LiveAnswer::No,
            needs: Some("  tighter scope  ".to_string()),
        };
        assert!(resubmit.matches_record(&cp));

        let different = LiveSession {
            understanding: LiveAnswer::Yes,
            realism: LiveAnswer::Yes,
            commitment: LiveAnswer::No,
            needs: Some("tighter scope".to_string()),
        };
        assert!(!different.matches_record(&cp));
    }
}
