//! Output sinks for terminal side effects.
//!
//! The drills that "print" something (`if_present`, `for_each`) write lines to an
//! [`OutputSink`] rather than straight to stdout, so callers can redirect or capture output.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Receiver for printed lines.
pub trait OutputSink: Send + Sync {
    fn emit_line(&self, line: &str);
}

/// Writes lines to stdout.
#[derive(Debug, Default)]
pub struct StdOutSink;

impl OutputSink for StdOutSink {
    fn emit_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Writes lines to stderr.
#[derive(Debug, Default)]
pub struct StdErrSink;

impl OutputSink for StdErrSink {
    fn emit_line(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the lines emitted so far, in order.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl OutputSink for MemorySink {
    fn emit_line(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut g) => g.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

/// Fans each line out to a list of sinks.
#[derive(Default)]
pub struct CompositeSink {
    sinks: Vec<Arc<dyn OutputSink>>,
}

impl CompositeSink {
    pub fn new(sinks: Vec<Arc<dyn OutputSink>>) -> Self {
        Self { sinks }
    }
}

impl fmt::Debug for CompositeSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSink")
            .field("sinks_len", &self.sinks.len())
            .finish()
    }
}

impl OutputSink for CompositeSink {
    fn emit_line(&self, line: &str) {
        for s in &self.sinks {
            s.emit_line(line);
        }
    }
}
