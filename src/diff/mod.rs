//! Diff text acquisition for the message generation service.
//!
//! Repositories with history get a real `git diff HEAD` from the system git
//! binary, inheriting the user's diff configuration. Repositories with no
//! commits yet get a deterministic synthesized description instead.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::DiffError;

/// Preamble of the synthesized description for repositories with no history.
pub const INITIAL_COMMIT_PREAMBLE: &str = "Initial commit with the following files:\n";

/// Run `git diff HEAD` in the repository workdir and capture its output.
///
/// The output is never empty on success: a clean tree surfaces as
/// `DiffError::Empty` so downstream consumers always see real content.
pub fn working_tree_diff(workdir: &Path) -> Result<String, DiffError> {
    let output = Command::new("git")
        .args(["diff", "HEAD"])
        .current_dir(workdir)
        .output()
        .map_err(DiffError::SpawnFailed)?;

    if !output.status.success() {
        return Err(DiffError::CommandFailed {
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let text = String::from_utf8(output.stdout).map_err(DiffError::InvalidUtf8)?;
    if text.is_empty() {
        return Err(DiffError::Empty);
    }

    debug!("Collected {} bytes of diff text", text.len());
    Ok(text)
}

/// Describe the very first commit when there is no HEAD to diff against.
///
/// Deterministic: the fixed preamble followed by the newline-joined staged
/// paths. No subprocess is involved.
pub fn initial_commit_summary(files: &[String]) -> String {
    format!("{INITIAL_COMMIT_PREAMBLE}{}", files.join("\n"))
}
