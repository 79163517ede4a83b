//! Errors that abort a validation run.

use fifocheck_trace::ParseError;
use std::io;
use thiserror::Error;

/// Hard failures distinct from ordering violations.
///
/// An ordering violation is a *result* (recorded in a
/// [`ProcessReport`](crate::ProcessReport) while validation continues with
/// the next file); these errors abort the whole run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A log file was missing or unreadable.
    #[error("Failed to read {file}: {source}")]
    Io {
        /// File the failure occurred on.
        file: String,
        #[source]
        source: io::Error,
    },

    /// A recognized event line carried a token that is not a valid integer.
    ///
    /// This signals log corruption, not absence of an event, so it is never
    /// skipped the way unrecognized lines are.
    #[error("Corrupt trace {file}: {source}")]
    Corrupt {
        /// File the corrupt line was found in.
        file: String,
        #[source]
        source: ParseError,
    },
}

impl CheckError {
    /// Attach a file name to a parse-layer error.
    pub(crate) fn from_parse(file: String, source: ParseError) -> Self {
        match source {
            ParseError::Io(source) => CheckError::Io { file, source },
            source => CheckError::Corrupt { file, source },
        }
    }
}
