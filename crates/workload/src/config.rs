//! Configuration for workload generation.

/// Configuration for one batch of lattice config files.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Number of config files to generate (one per process).
    pub num_files: u32,

    /// Number of proposals in each config file.
    pub num_proposals: u32,

    /// Upper bound on the number of values in one proposal.
    pub max_proposals_per_line: u32,

    /// Proposal values are sampled from `1..=max_distinct_values`.
    pub max_distinct_values: u32,

    /// Random seed; the same seed reproduces identical files.
    pub seed: u64,
}

impl WorkloadConfig {
    /// Create a configuration for `num_files` files of `num_proposals`
    /// proposals each.
    pub fn new(num_files: u32, num_proposals: u32) -> Self {
        Self {
            num_files,
            num_proposals,
            max_proposals_per_line: 10,
            max_distinct_values: 100,
            seed: 12345,
        }
    }

    /// Set the maximum number of values per proposal.
    pub fn with_max_proposals_per_line(mut self, max: u32) -> Self {
        self.max_proposals_per_line = max;
        self
    }

    /// Set the maximum distinct proposal value.
    pub fn with_max_distinct_values(mut self, max: u32) -> Self {
        self.max_distinct_values = max;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
