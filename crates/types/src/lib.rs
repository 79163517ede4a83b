//! Core types shared across the fifocheck workspace.
//!
//! A trace log is an ordered record of one process's broadcast and delivery
//! actions for one run. This crate holds the identifier newtypes and the
//! typed [`Event`] those logs parse into; the parsing itself lives in
//! `fifocheck-trace` and the ordering checks in `fifocheck-checker`.

mod event;
mod identifiers;

pub use event::Event;
pub use identifiers::{ProcessId, SeqNum};
