//! Verdict and diagnostic types.

use fifocheck_types::{ProcessId, SeqNum};
use serde::Serialize;
use std::fmt;

/// Which of the two FIFO orderings a log violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The process's own broadcasts were not numbered consecutively.
    Broadcast,
    /// Deliveries from one sender did not follow that sender's order.
    Delivery {
        /// The sender whose delivery order was violated.
        sender: ProcessId,
    },
}

/// The first ordering violation found in one process log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Which ordering was violated.
    pub kind: ViolationKind,
    /// Sequence number the counter expected next.
    pub expected: SeqNum,
    /// Sequence number the log actually recorded.
    pub got: SeqNum,
    /// 1-indexed source line of the offending event.
    pub line: u64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Broadcast => write!(
                f,
                "Messages broadcast out of order: expected {}, got {}, at line {}",
                self.expected, self.got, self.line
            ),
            ViolationKind::Delivery { .. } => write!(
                f,
                "Message delivered out of order: expected {}, got {}, at line {}",
                self.expected, self.got, self.line
            ),
        }
    }
}

/// Outcome of validating one process log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    /// File name the log was read from (diagnostics only).
    pub file: String,
    /// First violation found, or `None` on a clean pass.
    pub violation: Option<Violation>,
}

impl ProcessReport {
    /// Whether this log passed both FIFO checks.
    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }
}

/// Aggregate verdict over all N process logs of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RunReport {
    /// Every log passed both FIFO checks.
    Passed,

    /// Structural precondition failed: the logs disagree on line count,
    /// meaning the run itself did not terminate uniformly. No per-process
    /// validation was attempted.
    LineCountMismatch {
        /// Observed `(file, line count)` pairs, in process order.
        counts: Vec<(String, u64)>,
    },

    /// At least one log failed an ordering check.
    Failed {
        /// Reports for the failing files only, in process order.
        failing: Vec<ProcessReport>,
    },
}

impl RunReport {
    /// Whether the whole run passed.
    pub fn passed(&self) -> bool {
        matches!(self, RunReport::Passed)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunReport::Passed => write!(f, "Validation passed."),
            RunReport::LineCountMismatch { counts } => {
                write!(
                    f,
                    "Validation failed: output files have inconsistent line counts {:?}.",
                    counts.iter().map(|(_, n)| *n).collect::<Vec<_>>()
                )?;
                for (file, count) in counts {
                    write!(f, "\n  {file}: {count} lines")?;
                }
                Ok(())
            }
            RunReport::Failed { failing } => {
                write!(f, "Validation failed.\nFiles that failed validation:")?;
                for report in failing {
                    write!(f, "\n  {}", report.file)?;
                    if let Some(violation) = &report.violation {
                        write!(f, ": {violation}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let violation = Violation {
            kind: ViolationKind::Broadcast,
            expected: SeqNum(2),
            got: SeqNum(3),
            line: 2,
        };
        assert_eq!(
            violation.to_string(),
            "Messages broadcast out of order: expected 2, got 3, at line 2"
        );

        let violation = Violation {
            kind: ViolationKind::Delivery {
                sender: ProcessId(4),
            },
            expected: SeqNum(1),
            got: SeqNum(2),
            line: 10,
        };
        assert_eq!(
            violation.to_string(),
            "Message delivered out of order: expected 1, got 2, at line 10"
        );
    }

    #[test]
    fn test_run_report_display_passed() {
        assert_eq!(RunReport::Passed.to_string(), "Validation passed.");
    }

    #[test]
    fn test_run_report_display_line_count_mismatch() {
        let report = RunReport::LineCountMismatch {
            counts: vec![("1.output".into(), 5), ("2.output".into(), 6)],
        };
        let text = report.to_string();
        assert!(text.contains("[5, 6]"), "got: {text}");
        assert!(text.contains("1.output: 5 lines"), "got: {text}");
        assert!(text.contains("2.output: 6 lines"), "got: {text}");
    }

    #[test]
    fn test_run_report_display_failed() {
        let report = RunReport::Failed {
            failing: vec![ProcessReport {
                file: "1.output".into(),
                violation: Some(Violation {
                    kind: ViolationKind::Broadcast,
                    expected: SeqNum(2),
                    got: SeqNum(3),
                    line: 2,
                }),
            }],
        };
        let text = report.to_string();
        assert!(text.contains("Files that failed validation:"), "got: {text}");
        assert!(text.contains("1.output: Messages broadcast"), "got: {text}");
    }
}
