pub mod checker;
pub mod cli;
pub mod config;
pub mod error;

pub use checker::dictionary::Dictionary;
pub use checker::{check_line, LineCheck, SpellChecker};
pub use config::Config;
pub use error::CheckError;

use serde::Serialize;

/// A single misspelled occurrence. Identity is the `(word, line)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Finding {
    pub word: String,
    pub line: usize,
}

/// A document line that produced at least one finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    pub number: usize,
    pub text: String,
    pub findings: Vec<Finding>,
}

/// Outcome of checking a whole document. Only lines with findings are kept,
/// ordered by line number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines_checked: usize,
    pub lines: Vec<LineReport>,
}

impl Report {
    pub fn has_errors(&self) -> bool {
        !self.lines.is_empty()
    }

    pub fn error_line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn finding_count(&self) -> usize {
        self.lines.iter().map(|l| l.findings.len()).sum()
    }

    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.lines.iter().flat_map(|l| l.findings.iter())
    }
}

/// Process exit status for a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No misspellings anywhere in the document.
    Clean,
    /// At least one misspelling was found.
    Misspelled,
    /// A file could not be opened or read. Takes precedence over `Misspelled`.
    IoError,
}

impl ExitStatus {
    pub fn from_report(report: &Report) -> Self {
        if report.has_errors() {
            ExitStatus::Misspelled
        } else {
            ExitStatus::Clean
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Clean => 0,
            ExitStatus::Misspelled => 1,
            ExitStatus::IoError => 2,
        }
    }
}
