//! Git operations using git2-rs.

pub mod history;
pub mod publish;
pub mod staging;

pub use history::has_commits;
pub use publish::{commit_staged, push, AuthorIdentity, DEFAULT_REMOTE};
pub use staging::stage_paths;
