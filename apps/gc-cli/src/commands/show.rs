// show.rs — Show subcommand: a checkpoint's full record plus attachments.

use std::time::Duration;

use gc_checkpoint::{CheckpointStore, LiveAnswer};
use gc_files::{FileIndex, LocalObjectStore, ObjectStore};

use crate::commands::{engine, parse_id};
use crate::config::CheckpointConfig;

// Matches the hosted original's signed-URL expiry.
const READ_URL_TTL: Duration = Duration::from_secs(3600);

pub fn execute(config: &CheckpointConfig, id: &str) -> anyhow::Result<()> {
    let engine = engine(config)?;
    let id = parse_id(id)?;

    let checkpoint = match engine.store().get(id)? {
        Some(c) => c,
        None => {
            eprintln!("Checkpoint not found: {}", id);
            std::process::exit(1);
        }
    };

    println!("Checkpoint: {}", checkpoint.id);
    println!("Status:     {}", checkpoint.status);
    println!("Goal:       {}", checkpoint.goal_description);
    if let Some(ref target) = checkpoint.target_value {
        println!("Target:     {}", target);
    }
    if let Some(ref deadline) = checkpoint.deadline {
        println!("Deadline:   {}", deadline);
    }
    if let Some(ref context) = checkpoint.context {
        println!("Context:    {}", context);
    }
    if let Some(source_type) = checkpoint.source_type {
        let description = checkpoint.source_description.as_deref().unwrap_or("-");
        println!("Source:     {} ({})", source_type, description);
    }
    println!("Setter:     {}", party(&checkpoint.setter_name, &checkpoint.setter_email));
    println!("Receiver:   {}", party(&checkpoint.receiver_name, &checkpoint.receiver_email));
    println!("Created:    {}", checkpoint.created_at.to_rfc3339());
    println!("Updated:    {}", checkpoint.updated_at.to_rfc3339());

    println!();
    println!("Setter disclosure (explained context: {}, invited concerns: {}):",
        yes_no(checkpoint.setter_q1),
        yes_no(checkpoint.setter_q2),
    );
    print_field("Assumptions", &checkpoint.setter_assumptions);
    print_field("Constraints", &checkpoint.setter_constraints);
    print_field("Dependencies", &checkpoint.setter_dependencies);

    if checkpoint.receiver_reviewed_at.is_some() {
        println!();
        println!("Receiver review:");
        print_field("Questions", &checkpoint.receiver_questions);
        print_field("Concerns", &checkpoint.receiver_concerns);
    }

    if checkpoint.live_q3 != LiveAnswer::Unanswered {
        println!();
        println!("Live session:");
        println!("  Understanding: {}", checkpoint.live_q1);
        println!("  Realism:       {}", checkpoint.live_q2);
        println!("  Commitment:    {}", checkpoint.live_q3);
        print_field("Needs", &checkpoint.live_needs);
        if let Some(accepted_at) = checkpoint.accepted_at {
            println!("  Accepted at:   {}", accepted_at.to_rfc3339());
        }
    }

    let index = FileIndex::new(&config.file_index_dir)?;
    let files = index.list_for_checkpoint(checkpoint.id)?;
    if !files.is_empty() {
        let object_store = LocalObjectStore::new(&config.files_dir)?;
        println!();
        println!("Attachments:");
        for file in &files {
            let url = object_store
                .resolve_readable_url(&file.storage_path, READ_URL_TTL)
                .unwrap_or_else(|_| "(unavailable)".to_string());
            println!("  {} ({} bytes, {})", file.file_name, file.file_size, file.file_type);
            println!("    {}", url);
        }
    }

    Ok(())
}

fn party(name: &str, email: &Option<String>) -> String {
    match email {
        Some(email) => format!("{} <{}>", name, email),
        None => name.to_string(),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn print_field(label: &str, value: &Option<String>) {
    if let Some(text) = value {
        println!("  {}: {}", label, text);
    }
}
