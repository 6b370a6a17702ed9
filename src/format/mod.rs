//! Commit message generation via the local formatting service.

pub mod client;

pub use client::{Formatter, HttpFormatter, DEFAULT_ENDPOINT};
