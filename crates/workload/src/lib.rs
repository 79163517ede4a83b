//! Randomized workload config generation.
//!
//! Produces the lattice-agreement config files consumed by the
//! protocol-under-test, one `lattice-config<i>.config` per process. Each
//! file is a header line
//!
//! ```text
//! <num_proposals> <max_proposals_per_line> <max_distinct_values>
//! ```
//!
//! followed by `num_proposals` lines, each a random proposal of distinct
//! integers sampled without repetition from `1..=max_distinct_values`.
//!
//! Generation is deterministic per seed: the same [`WorkloadConfig`]
//! reproduces byte-identical files, so a failing run can be replayed.
//!
//! The checker itself never reads these files; they only drive the system
//! whose traces it validates.

mod config;
mod generator;

pub use config::WorkloadConfig;
pub use generator::{generate, WorkloadError};
