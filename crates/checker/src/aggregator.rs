//! Run-level orchestration across all N process logs.

use crate::error::CheckError;
use crate::report::{ProcessReport, RunReport};
use crate::validator::{check_process, display_name};
use fifocheck_trace::count_lines;
use fifocheck_types::ProcessId;
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Expected log file for one process.
///
/// External collaborator contract: process `k` writes its trace to
/// `k.output` in the run directory.
pub fn log_path(dir: &Path, process: ProcessId) -> PathBuf {
    dir.join(format!("{}.output", process.0))
}

/// Validate a whole run of `processes` logs in `dir`.
///
/// Precondition first: every log must exist and all logs must have the same
/// line count. Unequal counts mean the distributed run itself did not
/// terminate uniformly, so the run is rejected before any ordering check.
/// Then each log is validated independently (the validations share no
/// mutable state and run in parallel); the verdict is the union of the
/// per-file results, reported in process order.
pub fn check_run(dir: &Path, processes: u32) -> Result<RunReport, CheckError> {
    let paths: Vec<PathBuf> = (1..=processes)
        .map(|i| log_path(dir, ProcessId(i)))
        .collect();

    let counts = read_line_counts(&paths)?;
    if counts.windows(2).any(|pair| pair[0].1 != pair[1].1) {
        info!("process logs disagree on line count");
        return Ok(RunReport::LineCountMismatch { counts });
    }

    let reports: Vec<ProcessReport> = paths
        .par_iter()
        .map(|path| check_process(path))
        .collect::<Result<_, _>>()?;

    let failing: Vec<ProcessReport> = reports
        .into_iter()
        .filter(|report| !report.passed())
        .collect();

    if failing.is_empty() {
        debug!(processes, "all process logs passed");
        Ok(RunReport::Passed)
    } else {
        Ok(RunReport::Failed { failing })
    }
}

/// Line counts of every log, in process order.
///
/// Fails on the first missing or unreadable file; a run missing a log is a
/// precondition failure before any counting is meaningful.
fn read_line_counts(paths: &[PathBuf]) -> Result<Vec<(String, u64)>, CheckError> {
    let mut counts = Vec::with_capacity(paths.len());
    for path in paths {
        let name = display_name(path);
        let file = File::open(path).map_err(|e| CheckError::Io {
            file: name.clone(),
            source: e,
        })?;
        let count = count_lines(BufReader::new(file)).map_err(|e| CheckError::Io {
            file: name.clone(),
            source: e,
        })?;
        counts.push((name, count));
    }
    Ok(counts)
}
