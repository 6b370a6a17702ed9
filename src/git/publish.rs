//! Commit creation and push to a named remote.

use git2::{ErrorCode, Oid, Repository, Signature};
use tracing::debug;

use crate::error::GitError;

/// Remote that confirmed commits are pushed to by default.
pub const DEFAULT_REMOTE: &str = "origin";

/// Commit author identity, resolved once at workflow construction time.
///
/// Deliberately not read from the ambient git config; the defaults match
/// the tool's original hardcoded identity.
#[derive(Debug, Clone)]
pub struct AuthorIdentity {
    pub name: String,
    pub email: String,
}

impl Default for AuthorIdentity {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            email: "your.email@example.com".to_string(),
        }
    }
}

/// Create a commit on HEAD covering all currently staged changes.
///
/// Handles both the root commit (empty repository, zero parents) and the
/// normal single-parent case.
pub fn commit_staged(
    repo: &Repository,
    message: &str,
    author: &AuthorIdentity,
) -> Result<Oid, GitError> {
    let mut index = repo.index().map_err(GitError::IndexAccess)?;
    let tree_id = index.write_tree().map_err(GitError::CommitFailed)?;
    let tree = repo.find_tree(tree_id).map_err(GitError::CommitFailed)?;

    let sig = Signature::now(&author.name, &author.email).map_err(GitError::CommitFailed)?;

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit().map_err(GitError::CommitFailed)?),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => None,
        Err(e) => return Err(GitError::CommitFailed(e)),
    };
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .map_err(GitError::CommitFailed)?;

    debug!("Created commit {oid}");
    Ok(oid)
}

/// Push the current branch to the named remote with no credentials.
///
/// Remotes that require authentication fail hard. A push failure leaves the
/// local commit in place: committed work is not undone because transport to
/// the remote failed.
pub fn push(repo: &Repository, remote_name: &str) -> Result<(), GitError> {
    let mut remote = repo
        .find_remote(remote_name)
        .map_err(|e| GitError::MissingRemote(remote_name.to_string(), e))?;

    let head = repo.head().map_err(|e| GitError::PushFailed {
        remote: remote_name.to_string(),
        source: e,
    })?;
    let branch = head.name().ok_or_else(|| GitError::PushFailed {
        remote: remote_name.to_string(),
        source: git2::Error::from_str("HEAD reference name is not valid UTF-8"),
    })?;

    let refspec = format!("{branch}:{branch}");
    debug!("Pushing {refspec} to {remote_name}");

    remote
        .push(&[refspec.as_str()], None)
        .map_err(|e| GitError::PushFailed {
            remote: remote_name.to_string(),
            source: e,
        })
}
