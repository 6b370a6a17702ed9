//! Error types for gitgenius modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to access the index: {0}")]
    IndexAccess(#[source] git2::Error),

    #[error("Failed to stage '{path}': {source}")]
    StagingFailed {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to look up repository history: {0}")]
    HistoryLookup(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Remote '{0}' not found: {1}")]
    MissingRemote(String, #[source] git2::Error),

    #[error("Failed to push to '{remote}': {source}")]
    PushFailed {
        remote: String,
        #[source]
        source: git2::Error,
    },
}

/// Errors from diff collection.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("Failed to spawn git diff: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git diff exited with {}: {stderr}",
            exit_code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    CommandFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("git diff produced invalid UTF-8: {0}")]
    InvalidUtf8(#[source] std::string::FromUtf8Error),

    #[error("git diff produced no output; nothing to describe")]
    Empty,
}

/// Errors from the message generation service.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to reach message service: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Message service returned HTTP {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("Message service returned a malformed body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

/// Top-level workflow errors. Every variant is terminal: the workflow stops
/// at the failing stage and nothing staged is undone.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("I/O error during confirmation: {0}")]
    Io(#[from] std::io::Error),
}
