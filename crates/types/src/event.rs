//! Typed trace events.

use crate::{ProcessId, SeqNum};

/// One event from a process's trace log.
///
/// Events are immutable once parsed. `line` is the 1-indexed source line
/// the event was parsed from; it exists purely for diagnostics and carries
/// no weight in the ordering checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The logging process originated a broadcast of message `seq`.
    Broadcast {
        /// Sequence number within the process's own series.
        seq: SeqNum,
        /// 1-indexed source line.
        line: u64,
    },

    /// The logging process delivered message `seq`, broadcast by `sender`.
    Deliver {
        /// Originating process.
        sender: ProcessId,
        /// Sequence number within the sender's series.
        seq: SeqNum,
        /// 1-indexed source line.
        line: u64,
    },
}

impl Event {
    /// The 1-indexed source line this event was parsed from.
    pub fn line(&self) -> u64 {
        match self {
            Event::Broadcast { line, .. } | Event::Deliver { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_line() {
        let b = Event::Broadcast {
            seq: SeqNum(1),
            line: 4,
        };
        let d = Event::Deliver {
            sender: ProcessId(2),
            seq: SeqNum(1),
            line: 9,
        };
        assert_eq!(b.line(), 4);
        assert_eq!(d.line(), 9);
    }
}
