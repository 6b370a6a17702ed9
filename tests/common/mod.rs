//! Shared test utilities for integration tests.
//!
//! Not all items are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use git2::Repository;

use gitgenius::confirm::LineReader;
use gitgenius::error::FormatError;
use gitgenius::format::Formatter;

/// A test git repository in a temp directory.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository in a temp directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        Self { dir, repo }
    }

    /// Write a file into the working tree.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Stage a single file by path.
    pub fn stage(&self, name: &str) {
        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_path(std::path::Path::new(name))
            .expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Create a commit from the current index. Returns the commit OID.
    pub fn commit_index(&self, message: &str) -> git2::Oid {
        let sig = git2::Signature::now("Test User", "test@example.com")
            .expect("Failed to create signature");
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Create a bare repository in its own temp dir and register it as `origin`.
    ///
    /// Returns the temp dir so the caller keeps the remote alive.
    pub fn add_bare_origin(&self) -> tempfile::TempDir {
        let remote_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");
        self.repo
            .remote("origin", remote_dir.path().to_str().unwrap())
            .expect("Failed to add origin remote");
        remote_dir
    }

    /// Count commits reachable from HEAD (0 for an unborn branch).
    pub fn commit_count(&self) -> usize {
        let Ok(head) = self.repo.head() else {
            return 0;
        };
        let mut walk = self.repo.revwalk().expect("Failed to create revwalk");
        walk.push(head.target().unwrap()).expect("Failed to push head");
        walk.count()
    }
}

/// Line reader that replays scripted replies, then empty lines.
pub struct ScriptedReader {
    lines: VecDeque<String>,
}

impl ScriptedReader {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self) -> io::Result<String> {
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}

/// Line reader that fails the test if the workflow ever prompts.
pub struct PanicReader;

impl LineReader for PanicReader {
    fn read_line(&mut self) -> io::Result<String> {
        panic!("Workflow prompted the operator when it should have halted earlier");
    }
}

/// Formatter returning a canned message, recording every diff it receives.
pub struct StubFormatter {
    message: String,
    pub calls: AtomicUsize,
    pub seen_diffs: Mutex<Vec<String>>,
}

impl StubFormatter {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            calls: AtomicUsize::new(0),
            seen_diffs: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Formatter for StubFormatter {
    async fn format(&self, diff: &str) -> Result<String, FormatError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_diffs.lock().unwrap().push(diff.to_string());
        Ok(self.message.clone())
    }
}

/// Formatter that always fails, as a 500 from the service would.
pub struct FailingFormatter;

#[async_trait]
impl Formatter for FailingFormatter {
    async fn format(&self, _diff: &str) -> Result<String, FormatError> {
        Err(FormatError::BadStatus(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ))
    }
}
