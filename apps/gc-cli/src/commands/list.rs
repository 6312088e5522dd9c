// list.rs — List subcommand: table of checkpoints, newest first.

use crate::commands::engine;
use crate::config::CheckpointConfig;

pub fn execute(config: &CheckpointConfig, status: Option<&str>) -> anyhow::Result<()> {
    let engine = engine(config)?;
    let checkpoints = if let Some(status_filter) = status {
        engine.store().list_by_status(status_filter)?
    } else {
        engine.store().list()?
    };

    if checkpoints.is_empty() {
        println!("No checkpoints found.");
        return Ok(());
    }

    println!(
        "{:<38} {:<32} {:<18} {:<14} {:<14}",
        "ID", "GOAL", "STATUS", "SETTER", "RECEIVER"
    );
    println!("{}", "-".repeat(118));

    for c in &checkpoints {
        println!(
            "{:<38} {:<32} {:<18} {:<14} {:<14}",
            c.id,
            truncate(&c.goal_description, 30),
            c.status.to_string(),
            truncate(&c.setter_name, 12),
            truncate(&c.receiver_name, 12),
        );
    }
    println!("\n{} checkpoint(s) total.", checkpoints.len());

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
