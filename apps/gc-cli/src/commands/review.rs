// review.rs — Review subcommand: the receiver's preparation stage.

use gc_checkpoint::{CheckpointError, ReceiverReview};

use crate::commands::{engine, parse_id};
use crate::config::CheckpointConfig;

pub fn execute(
    config: &CheckpointConfig,
    id: &str,
    questions: Option<String>,
    concerns: Option<String>,
) -> anyhow::Result<()> {
    let engine = engine(config)?;
    let id = parse_id(id)?;

    let result = engine.submit_receiver_review(
        id,
        ReceiverReview {
            questions,
            concerns,
        },
    );

    match result {
        Ok(checkpoint) => {
            println!("Review recorded for {}", checkpoint.id);
            println!("  Status: {}", checkpoint.status);
            println!();
            println!("Next: hold the live session, then record it with:");
            println!(
                "  goalcheck session {} --understanding <yes|no> --realism <yes|no> --commitment <yes|no>",
                checkpoint.id
            );
            Ok(())
        }
        Err(CheckpointError::NotFound(id)) => {
            eprintln!("Checkpoint not found: {}", id);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
