// commands/mod.rs — shared wiring for the subcommands.

pub mod create;
pub mod list;
pub mod review;
pub mod session;
pub mod share;
pub mod show;

use anyhow::Context;
use gc_checkpoint::{JsonFileStore, LifecycleEngine, LogSink};
use uuid::Uuid;

use crate::config::CheckpointConfig;

/// Build the engine every command runs against: the JSON file store plus
/// the always-on JSONL event log.
pub fn engine(config: &CheckpointConfig) -> anyhow::Result<LifecycleEngine<JsonFileStore>> {
    let store = JsonFileStore::new(&config.checkpoints_dir)?;
    Ok(LifecycleEngine::new(store).with_sink(Box::new(LogSink::new(&config.events_log))))
}

/// Parse a checkpoint id argument.
pub fn parse_id(raw: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("'{raw}' is not a valid checkpoint id"))
}
