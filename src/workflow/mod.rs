//! The add workflow: stage, diff, format, confirm, publish.
//!
//! Strictly linear with no retries. Any failure is terminal to the run and
//! nothing staged beforehand is undone.

use std::io::Write;
use std::path::Path;

use git2::{Oid, Repository};
use tracing::{debug, warn};

use crate::confirm::{confirm, Decision, LineReader};
use crate::diff;
use crate::error::{GitError, WorkflowError};
use crate::format::Formatter;
use crate::git::publish::AuthorIdentity;
use crate::git::{history, publish, staging};

/// Configuration resolved once, at workflow construction time.
///
/// The defaults reproduce the tool's historical hardcoded behavior: a fixed
/// author identity and an unauthenticated push to `origin`.
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    pub author: AuthorIdentity,
    pub remote: String,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            author: AuthorIdentity::default(),
            remote: publish::DEFAULT_REMOTE.to_string(),
        }
    }
}

/// Terminal state of a successful workflow run.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Commit created and pushed.
    Committed(Oid),
    /// Operator rejected the candidate message; nothing was committed.
    Cancelled,
}

/// Run the full add workflow against the repository at `workdir`.
///
/// Steps:
/// 1. open the repository and stage each named file, in order, fail-fast
/// 2. collect diff text: `git diff HEAD` when history exists, a synthesized
///    file list for the very first commit
/// 3. request a commit message from the formatter (aborts before any prompt
///    on failure)
/// 4. confirm with the operator
/// 5. on accept, commit the staged changes and push; on reject, cancel
pub async fn run_add<F, R, W>(
    workdir: &Path,
    files: &[String],
    formatter: &F,
    reader: &mut R,
    out: &mut W,
    opts: &WorkflowOptions,
) -> Result<Outcome, WorkflowError>
where
    F: Formatter + ?Sized,
    R: LineReader + ?Sized,
    W: Write + ?Sized,
{
    let repo = Repository::open(workdir).map_err(GitError::OpenRepository)?;

    staging::stage_paths(&repo, files)?;

    let diff_text = if history::has_commits(&repo)? {
        diff::working_tree_diff(workdir)?
    } else {
        debug!("Repository has no commits; synthesizing initial commit description");
        diff::initial_commit_summary(files)
    };

    let message = formatter.format(&diff_text).await?;
    if message.is_empty() {
        // Soft failure: the operator sees the empty candidate and decides
        warn!("Message service returned an empty commit message");
    }

    match confirm(&message, reader, out)? {
        Decision::Accept => {
            let oid = publish::commit_staged(&repo, &message, &opts.author)?;
            publish::push(&repo, &opts.remote)?;
            writeln!(out, "Commit and push successful.")?;
            Ok(Outcome::Committed(oid))
        }
        Decision::Reject => {
            writeln!(out, "Commit canceled.")?;
            Ok(Outcome::Cancelled)
        }
    }
}
