//! Repository history inspection.

use git2::{ErrorCode, Repository};

use crate::error::GitError;

/// Whether the repository has at least one commit reachable from HEAD.
///
/// Distinguishes the empty-repository case from real lookup failures: an
/// unborn branch or missing HEAD reference returns `Ok(false)`, while any
/// other error (corrupt HEAD, permission issues) propagates as
/// `GitError::HistoryLookup`.
pub fn has_commits(repo: &Repository) -> Result<bool, GitError> {
    let head = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(false);
        }
        Err(e) => return Err(GitError::HistoryLookup(e)),
    };

    // HEAD exists; confirm a commit is actually reachable from it
    head.peel_to_commit()
        .map(|_| true)
        .map_err(GitError::HistoryLookup)
}
