//! Hand a document to the platform print spooler
//!
//! Fire-and-forget: the caller never waits on the child, and nothing computed
//! depends on it succeeding. A detached thread reaps it when it exits.

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;

use crate::error::{RoiError, RoiResult};

/// Spawn `command` (e.g. `lp` or `lp -d office`) with the document path
pub fn send_to_printer(path: &Path, command: &str) -> RoiResult<()> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| RoiError::Print("No print command configured".into()))?;

    match Command::new(program)
        .args(parts)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => {
            tracing::info!(program, pid = child.id(), path = %path.display(), "sent document to printer");
            reap(child);
            Ok(())
        }
        Err(e) => {
            tracing::warn!(program, error = %e, "failed to start print command");
            Err(RoiError::Print(format!("Failed to run '{}': {}", program, e)))
        }
    }
}

/// Wait on the child off-thread so it does not linger as a zombie
fn reap(mut child: Child) -> thread::JoinHandle<()> {
    thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::warn!(pid = child.id(), %status, "print command failed");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(pid = child.id(), error = %e, "failed to wait on print command"),
    })
}
