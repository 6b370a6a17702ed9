//! gitgenius - A tool to simplify Git usage with AI-powered commit messages.
//!
//! # Overview
//!
//! gitgenius stages the files named on the command line, sends the pending
//! diff to a local message generation service, shows the returned commit
//! message to the operator, and on approval commits the staged changes and
//! pushes them to the `origin` remote.

pub mod confirm;
pub mod diff;
pub mod error;
pub mod format;
pub mod git;
pub mod workflow;

// Re-export commonly used types
pub use confirm::{Decision, LineReader, StdinReader};
pub use error::{DiffError, FormatError, GitError, WorkflowError};
pub use format::{Formatter, HttpFormatter};
pub use git::AuthorIdentity;
pub use workflow::{run_add, Outcome, WorkflowOptions};
