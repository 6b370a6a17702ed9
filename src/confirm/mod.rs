//! Operator confirmation of the candidate commit message.

use std::io::{self, BufRead, Write};

/// Outcome of the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

/// Blocking single-line input source, injected so tests can script replies.
pub trait LineReader {
    fn read_line(&mut self) -> io::Result<String>;
}

/// Reads decisions from the process's standard input.
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Show the candidate message and block for a single-line decision.
///
/// Exactly the literal `y`, case-insensitively, accepts; every other reply
/// rejects, including `yes`, `n`, and an empty line. The prompt is written
/// to `out` exactly once per call, before blocking on input.
pub fn confirm<R, W>(message: &str, reader: &mut R, out: &mut W) -> io::Result<Decision>
where
    R: LineReader + ?Sized,
    W: Write + ?Sized,
{
    write!(out, "Commit `{message}` valid Y/N? ")?;
    out.flush()?;

    let line = reader.read_line()?;
    let reply = line.trim_end_matches(['\r', '\n']);

    if reply.eq_ignore_ascii_case("y") {
        Ok(Decision::Accept)
    } else {
        Ok(Decision::Reject)
    }
}
