//! Assertion reporting
//!
//! A [`Reporter`] is the single append-only sink for one run. Checks record
//! passed or failed assertions, and diagnostics for anything that could not
//! be evaluated.

use std::fmt::Display;
use std::io::Write;

use tracing::warn;

/// Kind of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Assertion held
    Pass,
    /// Assertion evaluated to false
    Fail,
    /// Informational message; not an assertion
    Diagnostic,
}

/// Append-only sink for check results
pub trait Reporter {
    fn record(&mut self, outcome: Outcome, message: &str);
}

/// Record the result of a check and return whether it passed
///
/// An `Err` means the check could not be evaluated: its reason is recorded
/// as a diagnostic and `false` is returned without recording an assertion.
pub fn report<E: Display>(
    reporter: &mut dyn Reporter,
    result: Result<bool, E>,
    description: &str,
) -> bool {
    match result {
        Ok(condition) => {
            let outcome = if condition {
                Outcome::Pass
            } else {
                Outcome::Fail
            };
            reporter.record(outcome, description);
            condition
        }
        Err(reason) => {
            reporter.record(Outcome::Diagnostic, &reason.to_string());
            false
        }
    }
}

/// Single recorded entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub outcome: Outcome,
    pub message: String,
}

/// Reporter that keeps every entry in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    records: Vec<Record>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Entries with the given outcome
    pub fn with_outcome(&self, outcome: Outcome) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(move |r| r.outcome == outcome)
    }
}

impl Reporter for RecordingReporter {
    fn record(&mut self, outcome: Outcome, message: &str) {
        self.records.push(Record {
            outcome,
            message: message.to_string(),
        });
    }
}

/// Reporter writing the Test Anything Protocol
///
/// Assertions are numbered as they are recorded; the plan line is written by
/// [`TapReporter::finish`].
pub struct TapReporter<W: Write> {
    writer: W,
    tests_run: usize,
    failures: usize,
}

impl<W: Write> TapReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tests_run: 0,
            failures: 0,
        }
    }

    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Write the trailing plan and return the writer
    pub fn finish(mut self) -> W {
        let plan = format!("1..{}", self.tests_run);
        self.write_line(&plan);
        self.writer
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            warn!("Failed to write TAP output: {}", e);
        }
    }
}

impl<W: Write> Reporter for TapReporter<W> {
    fn record(&mut self, outcome: Outcome, message: &str) {
        match outcome {
            Outcome::Pass | Outcome::Fail => {
                self.tests_run += 1;
                let status = if outcome == Outcome::Pass {
                    "ok"
                } else {
                    self.failures += 1;
                    "not ok"
                };
                let line = format!("{} {} - {}", status, self.tests_run, message);
                self.write_line(&line);
            }
            Outcome::Diagnostic => {
                if message.is_empty() {
                    self.write_line("#");
                }
                for line in message.lines() {
                    let line = format!("# {}", line);
                    self.write_line(&line);
                }
            }
        }
    }
}
