//! Domain-specific identifier types.

use serde::Serialize;
use std::fmt;

/// Identifier of a participating process.
///
/// Processes are numbered 1..N by the run harness; process `k` writes its
/// trace to `k.output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProcessId(pub u32);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Process({})", self.0)
    }
}

/// Broadcast sequence number within one sender's private series.
///
/// Sequence numbers are 1-indexed: the first message a process broadcasts
/// carries [`SeqNum::FIRST`], and every counter in the checker starts there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SeqNum(pub u64);

impl SeqNum {
    /// The first sequence number in any sender's series.
    pub const FIRST: Self = SeqNum(1);

    /// Get the next sequence number.
    pub fn next(self) -> Self {
        SeqNum(self.0 + 1)
    }
}

impl fmt::Display for SeqNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
