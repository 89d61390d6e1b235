//! Reporting hooks for the line-oriented parsers.
//!
//! Parsing itself is pure; the reader loop tells a [`LineReporter`] about
//! lines it could not use and, optionally, about every record it accepted.

use tracing::{debug, warn};

use crate::core::types::RegistryEntry;

/// Receives per-line parse events
pub trait LineReporter {
    /// A line (other than line 1) that does not look like a record
    fn unmatched_line(&mut self, line_number: usize, line: &str);

    /// A line that produced a record
    fn parsed_line(&mut self, line_number: usize, entry: &RegistryEntry);
}

/// Reports through `tracing`, gated by the run's verbosity level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter {
    verbosity: u8,
}

impl TracingReporter {
    #[must_use]
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }
}

impl LineReporter for TracingReporter {
    fn unmatched_line(&mut self, line_number: usize, line: &str) {
        warn!("Line#{line_number} does not match the pattern: {line}");
    }

    fn parsed_line(&mut self, line_number: usize, entry: &RegistryEntry) {
        if self.verbosity >= 2 {
            debug!("Line#{line_number}: {} -> {}", entry.identifier, entry.name);
        }
    }
}

/// Keeps every event in memory, for callers that want to inspect them afterwards
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub unmatched: Vec<(usize, String)>,
    pub parsed: Vec<(usize, RegistryEntry)>,
}

impl LineReporter for RecordingReporter {
    fn unmatched_line(&mut self, line_number: usize, line: &str) {
        self.unmatched.push((line_number, line.to_string()));
    }

    fn parsed_line(&mut self, line_number: usize, entry: &RegistryEntry) {
        self.parsed.push((line_number, entry.clone()));
    }
}
