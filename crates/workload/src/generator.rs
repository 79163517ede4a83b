//! Lattice config file generation.

use crate::config::WorkloadConfig;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised during config generation.
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// Creating or writing an output file failed.
    #[error("Failed to write config file: {0}")]
    Io(#[from] io::Error),

    /// The configuration cannot produce valid proposals.
    #[error("Invalid workload configuration: {0}")]
    InvalidConfig(String),
}

/// Generate all config files for `config` into `output_dir`.
///
/// The directory is created if absent. Returns the written paths in file
/// order. Proposals within one line are distinct (sampled without
/// repetition), matching what the lattice-agreement protocol expects.
pub fn generate(config: &WorkloadConfig, output_dir: &Path) -> Result<Vec<PathBuf>, WorkloadError> {
    validate(config)?;
    fs::create_dir_all(output_dir)?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut written = Vec::with_capacity(config.num_files as usize);

    for i in 1..=config.num_files {
        let path = output_dir.join(format!("lattice-config{i}.config"));
        write_config_file(config, &path, &mut rng)?;
        info!(path = %path.display(), "generated lattice config");
        written.push(path);
    }

    Ok(written)
}

fn validate(config: &WorkloadConfig) -> Result<(), WorkloadError> {
    if config.num_files == 0 || config.num_proposals == 0 || config.max_proposals_per_line == 0 {
        return Err(WorkloadError::InvalidConfig(
            "all counts must be positive".to_string(),
        ));
    }
    if config.max_proposals_per_line > config.max_distinct_values {
        return Err(WorkloadError::InvalidConfig(format!(
            "max_proposals_per_line ({}) exceeds max_distinct_values ({})",
            config.max_proposals_per_line, config.max_distinct_values
        )));
    }
    Ok(())
}

fn write_config_file(
    config: &WorkloadConfig,
    path: &Path,
    rng: &mut ChaCha8Rng,
) -> Result<(), WorkloadError> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(
        out,
        "{} {} {}",
        config.num_proposals, config.max_proposals_per_line, config.max_distinct_values
    )?;

    for _ in 0..config.num_proposals {
        let size = rng.gen_range(1..=config.max_proposals_per_line as usize);
        let proposal: Vec<String> = index::sample(rng, config.max_distinct_values as usize, size)
            .into_iter()
            .map(|v| (v + 1).to_string())
            .collect();
        writeln!(out, "{}", proposal.join(" "))?;
    }

    out.flush()?;
    Ok(())
}
