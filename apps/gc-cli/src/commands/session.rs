// session.rs — Session subcommand: record the live conversation's outcome.
//
// The three answers jointly document the conversation; only commitment
// decides the outcome (see gc-checkpoint's derivation rule).

use gc_checkpoint::{CheckpointError, LiveAnswer, LiveSession};

use crate::commands::{engine, parse_id};
use crate::config::CheckpointConfig;

#[derive(clap::Args)]
pub struct SessionArgs {
    /// Checkpoint id.
    pub id: String,

    /// Q1 — "do you understand what is being asked?" (yes/no)
    #[arg(long)]
    pub understanding: LiveAnswer,

    /// Q2 — "is the target realistic?" (yes/no)
    #[arg(long)]
    pub realism: LiveAnswer,

    /// Q3 — "do you commit to it?" (yes/no)
    #[arg(long)]
    pub commitment: LiveAnswer,

    /// What needs to be addressed before acceptance (when Q1 or Q2 is no).
    #[arg(long)]
    pub needs: Option<String>,
}

pub fn execute(config: &CheckpointConfig, args: &SessionArgs) -> anyhow::Result<()> {
    let engine = engine(config)?;
    let id = parse_id(&args.id)?;

    let result = engine.complete_live_session(
        id,
        LiveSession {
            understanding: args.understanding,
            realism: args.realism,
            commitment: args.commitment,
            needs: args.needs.clone(),
        },
    );

    match result {
        Ok(checkpoint) => {
            if checkpoint.accepted {
                let date = checkpoint
                    .accepted_at
                    .map(|t| t.format("%B %-d, %Y").to_string())
                    .unwrap_or_default();
                println!("Accepted on {} — commitment affirmed.", date);
            } else {
                println!("Gaps identified — commitment withheld.");
                if let Some(needs) = &checkpoint.live_needs {
                    println!("  Needs before acceptance: {}", needs);
                }
            }
            if args.understanding == LiveAnswer::No || args.realism == LiveAnswer::No {
                println!(
                    "  Note: understanding={} realism={} were recorded but do not gate the outcome.",
                    args.understanding, args.realism
                );
            }
            Ok(())
        }
        Err(CheckpointError::NotFound(id)) => {
            eprintln!("Checkpoint not found: {}", id);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
