//! Staging operator-named paths into the index.

use std::path::Path;

use git2::Repository;
use tracing::debug;

use crate::error::GitError;

/// Stage each path in order, failing fast on the first that cannot be added.
///
/// The index is written after every add, so files staged before a failure
/// remain staged. No unstaging is attempted on the way out.
pub fn stage_paths(repo: &Repository, paths: &[String]) -> Result<(), GitError> {
    let mut index = repo.index().map_err(GitError::IndexAccess)?;

    for path in paths {
        debug!("Staging {path}");
        index
            .add_path(Path::new(path))
            .map_err(|e| GitError::StagingFailed {
                path: path.clone(),
                source: e,
            })?;
        index.write().map_err(|e| GitError::StagingFailed {
            path: path.clone(),
            source: e,
        })?;
    }

    Ok(())
}
