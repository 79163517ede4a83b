//! Per-process FIFO validation.

use crate::error::CheckError;
use crate::report::{ProcessReport, Violation, ViolationKind};
use fifocheck_trace::EventReader;
use fifocheck_types::{Event, ProcessId, SeqNum};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Counters tracked across a single pass over one process log.
///
/// Owned exclusively by the validation pass that created it. Per-sender
/// delivery expectations initialize lazily to [`SeqNum::FIRST`] the first
/// time a sender appears, so the first delivery from a previously-unseen
/// sender must carry sequence number 1.
#[derive(Debug)]
struct ValidationState {
    /// Next sequence number this process is expected to broadcast.
    next_broadcast: SeqNum,
    /// Next sequence number expected from each sender.
    next_delivery: HashMap<ProcessId, SeqNum>,
}

impl ValidationState {
    fn new() -> Self {
        Self {
            next_broadcast: SeqNum::FIRST,
            next_delivery: HashMap::new(),
        }
    }

    /// Apply one event, returning the violation it causes, if any.
    fn apply(&mut self, event: Event) -> Option<Violation> {
        match event {
            Event::Broadcast { seq, line } => {
                if seq != self.next_broadcast {
                    return Some(Violation {
                        kind: ViolationKind::Broadcast,
                        expected: self.next_broadcast,
                        got: seq,
                        line,
                    });
                }
                self.next_broadcast = self.next_broadcast.next();
                None
            }
            Event::Deliver { sender, seq, line } => {
                let expected = self.next_delivery.entry(sender).or_insert(SeqNum::FIRST);
                if seq != *expected {
                    return Some(Violation {
                        kind: ViolationKind::Delivery { sender },
                        expected: *expected,
                        got: seq,
                        line,
                    });
                }
                *expected = seq.next();
                None
            }
        }
    }
}

/// Validate an already-parsed event sequence.
///
/// Short-circuits on the first violation; reaching the end of the sequence
/// without one is a pass. `name` identifies the log in the report and is
/// used for diagnostics only.
pub fn check_events(name: &str, events: impl IntoIterator<Item = Event>) -> ProcessReport {
    let mut state = ValidationState::new();
    for event in events {
        if let Some(violation) = state.apply(event) {
            return ProcessReport {
                file: name.to_string(),
                violation: Some(violation),
            };
        }
    }
    ProcessReport {
        file: name.to_string(),
        violation: None,
    }
}

/// Validate one process log file.
///
/// Opens the file fresh (a single forward pass over the trace) and applies
/// both FIFO checks, short-circuiting on the first violation. Re-running on
/// the same file yields the same verdict and diagnostic.
pub fn check_process(path: &Path) -> Result<ProcessReport, CheckError> {
    let name = display_name(path);
    let file = File::open(path).map_err(|e| CheckError::Io {
        file: name.clone(),
        source: e,
    })?;

    let mut state = ValidationState::new();
    for event in EventReader::new(BufReader::new(file)) {
        let event = event.map_err(|e| CheckError::from_parse(name.clone(), e))?;
        if let Some(violation) = state.apply(event) {
            debug!(file = %name, %violation, "ordering violation");
            return Ok(ProcessReport {
                file: name,
                violation: Some(violation),
            });
        }
    }

    Ok(ProcessReport {
        file: name,
        violation: None,
    })
}

/// File name used in diagnostics: the final path component.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
