//! Terminal and scripted line adapters.
//!
//! Implements [`InputPort`] for any buffered reader (stdin in production,
//! a script file or in-memory buffer otherwise) and [`Console`] for any
//! writer.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::{debug, error};

use crate::app::ports::{Console, InputPort};

// ───────────────────────────────────────────────────────────────
// Line input
// ───────────────────────────────────────────────────────────────

/// Reads one line per call from a [`BufRead`].  A read error ends input.
pub struct LineInput<R> {
    reader: R,
}

impl LineInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputPort for LineInput<R> {
    fn next_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                let line = buf.trim_end_matches(['\r', '\n']).to_string();
                debug!("input: {line:?}");
                Some(line)
            }
            Err(e) => {
                error!("input read failed: {e}");
                None
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Scripted input
// ───────────────────────────────────────────────────────────────

/// Fixed list of lines, consumed front to back.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputPort for ScriptedInput {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

// ───────────────────────────────────────────────────────────────
// Console output
// ───────────────────────────────────────────────────────────────

/// Writes each line to the wrapped writer.  Write errors are logged and
/// dropped; a closed stdout must not abort the session.
pub struct WriterConsole<W> {
    writer: W,
}

impl WriterConsole<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Console for WriterConsole<W> {
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            error!("console write failed: {e}");
        }
    }
}
