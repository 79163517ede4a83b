//! Lazy line-oriented event parsing.

use fifocheck_types::{Event, ProcessId, SeqNum};
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

/// Errors raised while reading a trace log.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("I/O error reading trace: {0}")]
    Io(#[from] io::Error),

    /// A required integer token did not parse as a base-10 integer.
    #[error("Invalid integer token {token:?} at line {line}")]
    InvalidToken {
        /// 1-indexed source line of the offending token.
        line: u64,
        /// The token as it appeared in the log.
        token: String,
    },
}

/// Lazy iterator over the events of one trace log.
///
/// Yields events in file order as `Result<Event, ParseError>`, together
/// with their 1-indexed source lines. Single forward pass over the
/// underlying reader; parsing again requires reopening the source.
///
/// Skipped lines (see the crate docs on the permissive-skip policy) still
/// advance the line counter, so event line numbers always match the raw
/// file.
pub struct EventReader<R> {
    lines: io::Lines<R>,
    line: u64,
}

impl<R: BufRead> EventReader<R> {
    /// Create a reader over a buffered source.
    pub fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            line: 0,
        }
    }

    /// Parse one line into an event, or `None` for a skipped line.
    ///
    /// Extra tokens after the required ones are ignored; only the tokens an
    /// event type needs are inspected.
    fn parse_line(&self, text: &str) -> Result<Option<Event>, ParseError> {
        let mut tokens = text.split_whitespace();

        let event = match tokens.next() {
            Some("b") => match tokens.next() {
                Some(seq) => Some(Event::Broadcast {
                    seq: SeqNum(self.parse_token(seq)?),
                    line: self.line,
                }),
                None => None,
            },
            Some("d") => match (tokens.next(), tokens.next()) {
                (Some(sender), Some(seq)) => Some(Event::Deliver {
                    sender: ProcessId(self.parse_token(sender)?),
                    seq: SeqNum(self.parse_token(seq)?),
                    line: self.line,
                }),
                _ => None,
            },
            _ => None,
        };

        if event.is_none() {
            trace!(line = self.line, "skipping non-event trace line");
        }

        Ok(event)
    }

    fn parse_token<T: FromStr>(&self, token: &str) -> Result<T, ParseError> {
        token.parse().map_err(|_| ParseError::InvalidToken {
            line: self.line,
            token: token.to_string(),
        })
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<Event, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;
            let text = match text {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            match self.parse_line(&text) {
                Ok(Some(event)) => return Some(Ok(event)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Count the raw lines of a trace log.
///
/// Counts lines, not events: skipped non-event lines still participate in
/// the run aggregator's line-count precondition.
pub fn count_lines<R: BufRead>(source: R) -> io::Result<u64> {
    let mut count = 0;
    for line in source.lines() {
        line?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_all(log: &str) -> Vec<Event> {
        EventReader::new(Cursor::new(log.to_string()))
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_parse_broadcast_and_deliver() {
        let events = parse_all("b 1\nd 2 1\nb 2\n");
        assert_eq!(
            events,
            vec![
                Event::Broadcast {
                    seq: SeqNum(1),
                    line: 1
                },
                Event::Deliver {
                    sender: ProcessId(2),
                    seq: SeqNum(1),
                    line: 2
                },
                Event::Broadcast {
                    seq: SeqNum(2),
                    line: 3
                },
            ]
        );
    }

    #[test]
    fn test_unrecognized_leading_token_is_skipped() {
        // `x 1 2` is noise, not an event; counters downstream never see it.
        let events = parse_all("b 1\nx 1 2\nb 2\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].line(), 3);
    }

    #[test]
    fn test_missing_required_tokens_are_skipped() {
        // A recognized token without its required arguments is treated the
        // same as an unrecognized line.
        let events = parse_all("b\nd 1\nb 1\n");
        assert_eq!(
            events,
            vec![Event::Broadcast {
                seq: SeqNum(1),
                line: 3
            }]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let events = parse_all("\n\nb 1\n\n");
        assert_eq!(
            events,
            vec![Event::Broadcast {
                seq: SeqNum(1),
                line: 3
            }]
        );
    }

    #[test]
    fn test_extra_tokens_are_ignored() {
        let events = parse_all("b 1 trailing junk\nd 2 1 junk\n");
        assert_eq!(
            events,
            vec![
                Event::Broadcast {
                    seq: SeqNum(1),
                    line: 1
                },
                Event::Deliver {
                    sender: ProcessId(2),
                    seq: SeqNum(1),
                    line: 2
                },
            ]
        );
    }

    #[test]
    fn test_invalid_integer_is_a_hard_error() {
        let mut reader = EventReader::new(Cursor::new("b 1\nb two\n".to_string()));
        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap() {
            Err(ParseError::InvalidToken { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "two");
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_sender_is_a_hard_error() {
        let mut reader = EventReader::new(Cursor::new("d abc 1\n".to_string()));
        match reader.next().unwrap() {
            Err(ParseError::InvalidToken { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("expected InvalidToken, got {other:?}"),
        }
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(Cursor::new("")).unwrap(), 0);
        assert_eq!(count_lines(Cursor::new("b 1\n")).unwrap(), 1);
        // Non-event lines still count toward the total.
        assert_eq!(count_lines(Cursor::new("b 1\nnoise\n\n")).unwrap(), 3);
    }
}
