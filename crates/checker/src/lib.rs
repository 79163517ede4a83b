//! FIFO ordering validation over recorded broadcast traces.
//!
//! After a broadcast run completes, each of the N processes has written a
//! trace of its own actions to `<index>.output`. This crate checks that
//! those recorded histories are consistent with the two ordering guarantees
//! the protocol promises:
//!
//! - **FIFO broadcast order**: a process's own broadcasts are numbered
//!   consecutively from 1, with no gaps or reordering.
//! - **FIFO delivery order**: messages from a given sender are delivered in
//!   the order that sender broadcast them, independently per sender.
//!
//! # Pipeline
//!
//! ```text
//! raw log files
//!     │  fifocheck-trace (per file)
//!     ▼
//! typed event stream
//!     │  check_process (per file, fail-fast on first violation)
//!     ▼
//! ProcessReport
//!     │  check_run (line-count precondition, then per-file fan-out)
//!     ▼
//! RunReport (overall verdict)
//! ```
//!
//! Validation is a finite batch job over static artifacts: nothing is
//! retried, and no state outlives a single [`check_run`] call.

mod aggregator;
mod error;
mod report;
mod validator;

pub use aggregator::{check_run, log_path};
pub use error::CheckError;
pub use report::{ProcessReport, RunReport, Violation, ViolationKind};
pub use validator::{check_events, check_process};
