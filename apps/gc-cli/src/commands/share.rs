// share.rs — Share subcommand: the checkpoint's link surface.
//
// A checkpoint's id is the sole credential needed to reach it — the link
// is a capability token, shared out of band. Mirrors the original's
// `/c/<id>` path and its pre-filled review-request email.

use uuid::Uuid;

use gc_checkpoint::{Checkpoint, CheckpointStore};

use crate::commands::{engine, parse_id};
use crate::config::CheckpointConfig;

pub fn execute(config: &CheckpointConfig, base_url: &str, id: &str) -> anyhow::Result<()> {
    let engine = engine(config)?;
    let id = parse_id(id)?;

    let checkpoint = match engine.store().get(id)? {
        Some(c) => c,
        None => {
            eprintln!("Checkpoint not found: {}", id);
            std::process::exit(1);
        }
    };

    println!("{}", share_url(base_url, checkpoint.id));
    if let Some(mailto) = mailto_url(base_url, &checkpoint) {
        println!();
        println!("Review-request email:");
        println!("{}", mailto);
    }

    Ok(())
}

/// The share link for a checkpoint: `<base>/c/<id>`.
pub fn share_url(base_url: &str, id: Uuid) -> String {
    format!("{}/c/{}", base_url.trim_end_matches('/'), id)
}

/// A pre-filled mailto link asking the receiver to review, when their
/// email is on record.
fn mailto_url(base_url: &str, checkpoint: &Checkpoint) -> Option<String> {
    let email = checkpoint.receiver_email.as_deref()?;
    let subject = format!("Please review: {}", checkpoint.goal_description);
    let body = format!(
        "Hi {},\n\nPlease review this goal checkpoint before our session:\n{}\n",
        checkpoint.receiver_name,
        share_url(base_url, checkpoint.id)
    );
    Some(format!(
        "mailto:{}?subject={}&body={}",
        email,
        percent_encode(&subject),
        percent_encode(&body)
    ))
}

/// Percent-encode a mailto query component. Everything outside the
/// unreserved set is encoded, byte by byte.
fn percent_encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
