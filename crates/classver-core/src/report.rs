//! Per-item result aggregation and summary formatting.
//!
//! A [`Report`] is owned by a single scan. It consumes one [`ParseResult`]
//! per candidate stream and accumulates the checked count, the lowest and
//! highest major version seen, one stdout line per valid class file, and
//! one failure line per rejected stream.

use crate::scan::ClassHeader;
use crate::version::version_name;

/// Outcome of checking a single candidate stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// The header parsed and the magic matched
    Valid {
        /// Display label (jar entry name or filesystem path)
        label: String,
        /// Extracted version fields
        header: ClassHeader,
    },
    /// The stream did not start with the class file magic
    Invalid {
        /// Display label of the rejected stream
        label: String,
    },
    /// The stream could not be opened or read far enough
    ReadError {
        /// Display label of the failed stream
        label: String,
        /// Human-readable cause
        message: String,
    },
}

/// Accumulated results of one scan run
#[derive(Debug, Default)]
pub struct Report {
    checked: usize,
    min_major: Option<u16>,
    max_major: Option<u16>,
    lines: Vec<String>,
    failures: Vec<String>,
}

impl Report {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one candidate stream.
    ///
    /// Only `Valid` results affect the checked count and the version
    /// extremes; `Invalid` and `ReadError` results become failure lines.
    pub fn record(&mut self, result: ParseResult) {
        match result {
            ParseResult::Valid { label, header } => {
                self.checked += 1;
                self.min_major = Some(match self.min_major {
                    Some(min) => min.min(header.major),
                    None => header.major,
                });
                self.max_major = Some(match self.max_major {
                    Some(max) => max.max(header.major),
                    None => header.major,
                });
                let name = version_name(header.major).unwrap_or("unknown");
                self.lines.push(format!(
                    "{}: {}.{} ({})",
                    label, header.major, header.minor, name
                ));
            }
            ParseResult::Invalid { label } => {
                self.failures.push(format!("{} is not a valid class file!", label));
            }
            ParseResult::ReadError { label, message } => {
                self.failures
                    .push(format!("Unable to check class {}: {}", label, message));
            }
        }
    }

    /// Number of streams that parsed as valid class files
    pub fn checked(&self) -> usize {
        self.checked
    }

    /// Lowest major version seen, if any stream was valid
    pub fn min_major(&self) -> Option<u16> {
        self.min_major
    }

    /// Highest major version seen, if any stream was valid
    pub fn max_major(&self) -> Option<u16> {
        self.max_major
    }

    /// Per-item stdout lines, in the order the streams were checked
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Per-item failure lines for the error channel
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Format the trailing summary block for the given input label.
    ///
    /// When nothing was checked the version extremes are replaced by a
    /// guard line so no sentinel values leak into the output.
    pub fn summary(&self, input: &str) -> String {
        let mut out = format!(
            "Summary for {}\nChecked {} class files",
            input, self.checked
        );
        match (self.max_major, self.min_major) {
            (Some(max), Some(min)) => {
                let max_name = version_name(max).unwrap_or("unknown");
                let min_name = version_name(min).unwrap_or("unknown");
                out.push_str(&format!("\nHighest major version: {} ({})", max, max_name));
                out.push_str(&format!("\nLowest major version: {} ({})", min, min_name));
            }
            _ => out.push_str("\nNo class files checked."),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid(label: &str, major: u16, minor: u16) -> ParseResult {
        ParseResult::Valid {
            label: label.to_string(),
            header: ClassHeader { minor, major },
        }
    }

    #[test]
    fn test_valid_result_updates_extremes() {
        let mut report = Report::new();
        report.record(valid("A.class", 61, 0));
        report.record(valid("B.class", 50, 0));
        report.record(valid("C.class", 55, 0));

        assert_eq!(report.checked(), 3);
        assert_eq!(report.min_major(), Some(50));
        assert_eq!(report.max_major(), Some(61));
    }

    #[test]
    fn test_valid_line_format() {
        let mut report = Report::new();
        report.record(valid("com/example/App.class", 52, 0));

        assert_eq!(report.lines(), ["com/example/App.class: 52.0 (Java 8)"]);
    }

    #[test]
    fn test_unknown_major_prints_unknown() {
        let mut report = Report::new();
        report.record(valid("Future.class", 99, 0));

        assert_eq!(report.lines(), ["Future.class: 99.0 (unknown)"]);
        assert!(report.summary("x").contains("Highest major version: 99 (unknown)"));
    }

    #[test]
    fn test_invalid_does_not_affect_counts() {
        let mut report = Report::new();
        report.record(valid("Good.class", 52, 0));
        report.record(ParseResult::Invalid {
            label: "Bad.class".to_string(),
        });

        assert_eq!(report.checked(), 1);
        assert_eq!(report.min_major(), Some(52));
        assert_eq!(report.failures(), ["Bad.class is not a valid class file!"]);
    }

    #[test]
    fn test_read_error_line_format() {
        let mut report = Report::new();
        report.record(ParseResult::ReadError {
            label: "Gone.class".to_string(),
            message: "permission denied".to_string(),
        });

        assert_eq!(report.checked(), 0);
        assert_eq!(
            report.failures(),
            ["Unable to check class Gone.class: permission denied"]
        );
    }

    #[test]
    fn test_summary_block() {
        let mut report = Report::new();
        report.record(valid("A.class", 61, 0));
        report.record(valid("B.class", 50, 3));

        let summary = report.summary("lib.jar");
        assert_eq!(
            summary,
            "Summary for lib.jar\n\
             Checked 2 class files\n\
             Highest major version: 61 (Java 17)\n\
             Lowest major version: 50 (Java 6)"
        );
    }

    #[test]
    fn test_empty_summary_has_no_sentinels() {
        let report = Report::new();
        let summary = report.summary("empty-dir");

        assert!(summary.contains("Checked 0 class files"));
        assert!(summary.contains("No class files checked."));
        assert!(!summary.contains("Highest"));
        assert!(!summary.contains("Lowest"));
    }
}
