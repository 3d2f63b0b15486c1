use crate::errors::ReportError;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const HEADER: &str = "=== Sales Computation Results ===";
const ERRORS_HEADER: &str = "Errors encountered during execution:";
const NO_ERRORS: &str = "No errors encountered during execution.";

/// The outcome of a run: grand total, wall-clock duration of the run and the
/// advisory errors in the order they were encountered.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub total_cost: f64,
    pub execution_time: Duration,
    pub errors: Vec<String>,
}

impl Report {
    /// The fixed report layout, one entry per output line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            HEADER.to_string(),
            format!("Total Cost: ${:.2}", self.total_cost),
            format!(
                "Execution Time: {:.3} seconds",
                self.execution_time.as_secs_f64()
            ),
            String::new(),
        ];

        if self.errors.is_empty() {
            lines.push(NO_ERRORS.to_string());
        } else {
            lines.push(ERRORS_HEADER.to_string());
            lines.extend(self.errors.iter().cloned());
        }

        lines
    }

    /// Newline-joined report text, without a trailing newline.
    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

/// A destination for a rendered report.
pub trait ReportSink {
    fn write_report(&mut self, text: &str) -> Result<(), ReportError>;
}

/// Prints the report to stdout and persists the same text to a file,
/// replacing whatever the file held before.
pub struct ConsoleFileSink {
    path: PathBuf,
}

impl ConsoleFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for ConsoleFileSink {
    fn write_report(&mut self, text: &str) -> Result<(), ReportError> {
        println!("{}", text);

        fs::write(&self.path, text).map_err(|err| ReportError::WriteFailed(self.path.clone(), err))
    }
}

/// Keeps every report written to it in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: Vec<String>,
}

impl ReportSink for MemorySink {
    fn write_report(&mut self, text: &str) -> Result<(), ReportError> {
        self.reports.push(text.to_string());
        Ok(())
    }
}
