pub mod dictionary;
pub mod tokenizer;

use crate::error::{CheckError, Result};
use crate::{Finding, LineReport, Report};
use dictionary::Dictionary;
use log::{debug, info, trace};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Findings for one line plus whether the line had any misspelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCheck {
    pub findings: Vec<Finding>,
    pub had_error: bool,
}

/// Check a single line against the dictionary.
///
/// Every token whose lowercase form is missing from `dictionary` becomes a
/// [`Finding`] carrying the token as written. A token repeated on the same
/// line is reported once.
pub fn check_line(line: &str, line_number: usize, dictionary: &Dictionary) -> LineCheck {
    let mut result = LineCheck::default();
    let mut reported = HashSet::new();

    for token in tokenizer::tokenize(line) {
        if token.is_empty() {
            continue;
        }

        let known = dictionary.contains(&token.to_lowercase());
        trace!("line {}: {:?} known={}", line_number, token, known);
        if known {
            continue;
        }

        result.had_error = true;
        if reported.insert(token.clone()) {
            result.findings.push(Finding {
                word: token,
                line: line_number,
            });
        }
    }

    result
}

pub struct SpellChecker {
    dictionary: Dictionary,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Check a document file line by line.
    pub fn check_file(&self, path: &Path, parallel: bool) -> Result<Report> {
        let file = File::open(path).map_err(|e| CheckError::io(path, e))?;
        let reader = BufReader::new(file);

        let report = if parallel {
            let lines = reader
                .lines()
                .collect::<io::Result<Vec<_>>>()
                .map_err(|e| CheckError::io(path, e))?;
            self.check_lines_parallel(&lines)
        } else {
            self.check_reader(reader).map_err(|e| CheckError::io(path, e))?
        };

        info!(
            "Checked {} lines of {}: {} misspellings on {} lines",
            report.lines_checked,
            path.display(),
            report.finding_count(),
            report.error_line_count()
        );

        Ok(report)
    }

    /// Check every line of `reader` in order. Line numbers start at 1.
    pub fn check_reader<R: BufRead>(&self, reader: R) -> io::Result<Report> {
        let mut report = Report::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            self.push_line(&mut report, idx + 1, line);
        }

        Ok(report)
    }

    /// Check an in-memory document.
    pub fn check_str(&self, content: &str) -> Report {
        let mut report = Report::default();

        for (idx, line) in content.lines().enumerate() {
            self.push_line(&mut report, idx + 1, line.to_string());
        }

        report
    }

    /// Check lines on the rayon pool. The result is identical to the
    /// sequential path: reports are merged back in line order.
    pub fn check_lines_parallel<S>(&self, lines: &[S]) -> Report
    where
        S: AsRef<str> + Sync,
    {
        debug!("Checking {} lines in parallel", lines.len());

        let lines_with_errors: Vec<LineReport> = lines
            .par_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let text = line.as_ref();
                let check = check_line(text, idx + 1, &self.dictionary);
                check.had_error.then(|| LineReport {
                    number: idx + 1,
                    text: text.to_string(),
                    findings: check.findings,
                })
            })
            .collect();

        Report {
            lines_checked: lines.len(),
            lines: lines_with_errors,
        }
    }

    fn push_line(&self, report: &mut Report, number: usize, text: String) {
        report.lines_checked += 1;

        let check = check_line(&text, number, &self.dictionary);
        if check.had_error {
            report.lines.push(LineReport {
                number,
                text,
                findings: check.findings,
            });
        }
    }
}
