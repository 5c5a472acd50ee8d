use crate::{Finding, Report};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    document: String,
    lines_checked: usize,
    error_lines: usize,
    total_findings: usize,
    findings: Vec<&'a Finding>,
}

pub fn write_report<W: Write>(
    out: &mut W,
    document: &Path,
    report: &Report,
    colored_output: bool,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text_report(out, report, colored_output),
        OutputFormat::Json => write_json_report(out, document, report),
    }
}

fn write_text_report<W: Write>(out: &mut W, report: &Report, colored_output: bool) -> io::Result<()> {
    for line in &report.lines {
        if colored_output {
            writeln!(
                out,
                "{} {} - {}",
                "Line Number:".bold(),
                line.number.to_string().blue().bold(),
                line.text
            )?;
            for finding in &line.findings {
                writeln!(out, "{}", finding.word.red().bold())?;
            }
        } else {
            writeln!(out, "Line Number: {} - {}", line.number, line.text)?;
            for finding in &line.findings {
                writeln!(out, "{}", finding.word)?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

fn write_json_report<W: Write>(out: &mut W, document: &Path, report: &Report) -> io::Result<()> {
    let output = JsonOutput {
        document: document.display().to_string(),
        lines_checked: report.lines_checked,
        error_lines: report.error_line_count(),
        total_findings: report.finding_count(),
        findings: report.findings().collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}

pub fn summary_line(report: &Report, colored: bool) -> String {
    if !report.has_errors() {
        let msg = "✓ No spelling errors found!";
        return if colored {
            msg.green().bold().to_string()
        } else {
            msg.to_string()
        };
    }

    let total = report.finding_count();
    let lines = report.error_line_count();
    let noun = if total == 1 { "misspelling" } else { "misspellings" };
    let line_noun = if lines == 1 { "line" } else { "lines" };

    if colored {
        format!(
            "{} {} {} on {} {}",
            "✗".red().bold(),
            total.to_string().red().bold(),
            noun,
            lines,
            line_noun
        )
    } else {
        format!("✗ {} {} on {} {}", total, noun, lines, line_noun)
    }
}
