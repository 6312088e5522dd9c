//! # gc-cli
//!
//! Command-line interface for goal-commitment checkpoints.
//!
//! Walks both parties through the workflow the tool exists for:
//! - `goalcheck create` — setter records the goal, target, deadline, and
//!   the assumptions/constraints/dependencies behind it
//! - `goalcheck review` — receiver records questions and concerns
//! - `goalcheck session` — both parties record the three live-session
//!   answers; the outcome (accepted or gaps-identified) is derived and
//!   persisted
//! - `goalcheck show/list/share` — inspect records and produce share links

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::CheckpointConfig;

/// goalcheck CLI — turn a goal assignment into a documented commitment.
#[derive(Parser)]
#[command(name = "goalcheck", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    /// Base URL used when printing share links.
    #[arg(long, default_value = "https://goalcheck.local")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a goal and the setter's disclosure material.
    Create(commands::create::CreateArgs),
    /// Promote a saved draft to pending_receiver.
    Submit {
        /// Checkpoint id.
        id: String,
    },
    /// Record the receiver's questions and concerns.
    Review {
        /// Checkpoint id.
        id: String,
        /// Questions to raise in the live session.
        #[arg(long)]
        questions: Option<String>,
        /// Concerns about the goal as assigned.
        #[arg(long)]
        concerns: Option<String>,
    },
    /// Record the live session's three answers and the final outcome.
    Session(commands::session::SessionArgs),
    /// Show a checkpoint's full record and attachments.
    Show {
        /// Checkpoint id.
        id: String,
    },
    /// List checkpoints.
    List {
        /// Filter by status (e.g., "pending_receiver", "accepted").
        #[arg(long)]
        status: Option<String>,
    },
    /// Print the share link (and mailto link, when possible) for a checkpoint.
    Share {
        /// Checkpoint id.
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);
    let config = CheckpointConfig::for_project(&project_root);
    tracing::debug!(project_root = %config.project_root.display(), "config resolved");

    match &cli.command {
        Commands::Create(args) => commands::create::execute(&config, &cli.base_url, args),
        Commands::Submit { id } => commands::create::submit(&config, id),
        Commands::Review {
            id,
            questions,
            concerns,
        } => commands::review::execute(&config, id, questions.clone(), concerns.clone()),
        Commands::Session(args) => commands::session::execute(&config, args),
        Commands::Show { id } => commands::show::execute(&config, id),
        Commands::List { status } => commands::list::execute(&config, status.as_deref()),
        Commands::Share { id } => commands::share::execute(&config, &cli.base_url, id),
    }
}
