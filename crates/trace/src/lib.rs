//! Trace log parsing.
//!
//! Converts one process's raw text log into a lazy, ordered stream of typed
//! [`Event`](fifocheck_types::Event)s, preserving source line numbers for
//! diagnostics.
//!
//! # Line format
//!
//! One event per line, whitespace-separated tokens:
//!
//! ```text
//! b <seqNum>
//! d <senderId> <seqNum>
//! ```
//!
//! # Permissive-skip policy
//!
//! Lines whose leading token is neither `b` nor `d`, and lines whose
//! leading token is recognized but lacks the required following tokens,
//! produce no event and are skipped. This mirrors the behavior of the
//! harnesses that already consume these logs, so existing logs keep
//! validating. A required token that is present but not a valid base-10
//! integer is NOT skipped: a recognized event type that fails to parse
//! signals log corruption, and surfaces as [`ParseError::InvalidToken`].

mod parser;

pub use parser::{count_lines, EventReader, ParseError};
