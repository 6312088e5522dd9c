// create.rs — Create subcommand: the setter's two stages in one shot.
//
// Mirrors the original "new checkpoint" form: goal facts, disclosure
// material, the two pre-commitment confirmations, optional attachments.
// `--draft` saves without submitting; `goalcheck submit <id>` promotes
// the draft later.

use std::fs;
use std::path::PathBuf;

use gc_checkpoint::{CheckpointEvent, CreateCheckpoint, SourceType};
use gc_files::{FileIndex, LocalObjectStore};

use crate::commands::{engine, parse_id};
use crate::config::CheckpointConfig;

#[derive(clap::Args)]
pub struct CreateArgs {
    /// The goal itself (e.g., "Raise retention to 90%").
    pub goal: String,

    /// Setter name (the party assigning the goal).
    #[arg(long)]
    pub setter: String,

    /// Receiver name (the party expected to accept and pursue it).
    #[arg(long)]
    pub receiver: String,

    /// Measurable target value (e.g., "90%").
    #[arg(long)]
    pub target: Option<String>,

    /// Deadline, free-form (e.g., "2026-12-31" or "end of Q2").
    #[arg(long)]
    pub deadline: Option<String>,

    /// Background context for the goal.
    #[arg(long)]
    pub context: Option<String>,

    /// Where the goal came from: bi_report, leadership_email,
    /// planning_doc, verbal, or other.
    #[arg(long)]
    pub source_type: Option<SourceType>,

    /// Description of the source (e.g., "August retention dashboard").
    #[arg(long)]
    pub source_description: Option<String>,

    /// Setter email.
    #[arg(long)]
    pub setter_email: Option<String>,

    /// Receiver email (used by `share` to build a mailto link).
    #[arg(long)]
    pub receiver_email: Option<String>,

    /// Assumptions behind the target.
    #[arg(long)]
    pub assumptions: Option<String>,

    /// Known constraints.
    #[arg(long)]
    pub constraints: Option<String>,

    /// Dependencies outside the receiver's control.
    #[arg(long)]
    pub dependencies: Option<String>,

    /// Confirm: "I explained the context behind this goal."
    #[arg(long)]
    pub explained_context: bool,

    /// Confirm: "I invited the receiver to raise concerns."
    #[arg(long)]
    pub invited_concerns: bool,

    /// Attach a file (repeatable).
    #[arg(long = "attach")]
    pub attach: Vec<PathBuf>,

    /// Save as a draft instead of submitting to the receiver.
    #[arg(long)]
    pub draft: bool,
}

pub fn execute(
    config: &CheckpointConfig,
    base_url: &str,
    args: &CreateArgs,
) -> anyhow::Result<()> {
    let engine = engine(config)?;

    let input = CreateCheckpoint {
        goal_description: args.goal.clone(),
        target_value: args.target.clone(),
        deadline: args.deadline.clone(),
        context: args.context.clone(),
        source_type: args.source_type,
        source_description: args.source_description.clone(),
        setter_name: args.setter.clone(),
        setter_email: args.setter_email.clone(),
        receiver_name: args.receiver.clone(),
        receiver_email: args.receiver_email.clone(),
        setter_assumptions: args.assumptions.clone(),
        setter_constraints: args.constraints.clone(),
        setter_dependencies: args.dependencies.clone(),
        setter_q1: args.explained_context,
        setter_q2: args.invited_concerns,
    };

    let checkpoint = if args.draft {
        engine.create_draft(input)?
    } else {
        engine.create(input)?
    };

    // Attachments are fire-and-forget relative to the record: a failed
    // upload is reported per file and never rolls back the checkpoint.
    if !args.attach.is_empty() {
        let object_store = LocalObjectStore::new(&config.files_dir)?;
        let index = FileIndex::new(&config.file_index_dir)?;
        for path in &args.attach {
            match attach_one(&object_store, &index, &checkpoint.id, path) {
                Ok(record) => {
                    engine.dispatch(&CheckpointEvent::file_attached(
                        checkpoint.id,
                        &record.file_name,
                        record.file_size,
                    ));
                    println!("Attached: {} ({} bytes)", record.file_name, record.file_size);
                }
                Err(e) => eprintln!("Could not attach {}: {}", path.display(), e),
            }
        }
    }

    if args.draft {
        println!("Draft saved: {}", checkpoint.id);
        println!("Submit when ready: goalcheck submit {}", checkpoint.id);
    } else {
        println!("Checkpoint created: {}", checkpoint.id);
        println!("  Goal:     {}", checkpoint.goal_description);
        println!("  Setter:   {}", checkpoint.setter_name);
        println!("  Receiver: {}", checkpoint.receiver_name);
        println!();
        println!("Send this link to the receiver:");
        println!("  {}", super::share::share_url(base_url, checkpoint.id));
    }

    Ok(())
}

fn attach_one(
    object_store: &LocalObjectStore,
    index: &FileIndex,
    checkpoint_id: &uuid::Uuid,
    path: &PathBuf,
) -> anyhow::Result<gc_files::CheckpointFile> {
    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("no usable file name in '{}'", path.display()))?;
    Ok(gc_files::attach_file(
        object_store,
        index,
        *checkpoint_id,
        file_name,
        &bytes,
    )?)
}

/// `goalcheck submit <id>` — promote a draft to pending_receiver.
pub fn submit(config: &CheckpointConfig, id: &str) -> anyhow::Result<()> {
    let engine = engine(config)?;
    let checkpoint = engine.complete_setter_stage(parse_id(id)?)?;
    println!("Checkpoint submitted: {}", checkpoint.id);
    println!("  Status: {}", checkpoint.status);
    Ok(())
}
