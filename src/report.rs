//! Run reporting at `error` and `notice` severities.
//!
//! The reporter is an injected collaborator: core workflows never print
//! directly and no global logging state exists. [`MemoryReporter`] captures
//! output for assertions or library embedding.

use std::fmt;
use std::sync::Mutex;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Notice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Notice => write!(f, "notice"),
        }
    }
}

pub trait Reporter: Sync {
    /// Report a failure for one item or for the run.
    fn error(&self, message: &str);
    /// Report progress or a decision outcome.
    fn notice(&self, message: &str);
}

/// Console reporter: errors to stderr, notices to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".bold().red(), message);
    }

    fn notice(&self, message: &str) {
        println!("{} {}", "notice:".bold().yellow(), message);
    }
}

/// Buffering reporter.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().expect("reporter lock").clone()
    }

    pub fn with_severity(&self, severity: Severity) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(recorded, _)| *recorded == severity)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .expect("reporter lock")
            .push((Severity::Error, message.to_string()));
    }

    fn notice(&self, message: &str) {
        self.messages
            .lock()
            .expect("reporter lock")
            .push((Severity::Notice, message.to_string()));
    }
}
