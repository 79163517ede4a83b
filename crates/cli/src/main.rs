//! Fifocheck CLI
//!
//! A command-line tool for validating the recorded traces of a FIFO
//! broadcast run, plus a generator for the lattice workload configs that
//! drive test runs.

use clap::{Parser, Subcommand};
use fifocheck_checker::check_run;
use fifocheck_workload::{generate, WorkloadConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fifocheck")]
#[command(about = "Ordering checker for FIFO broadcast traces")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the recorded traces of a completed run
    Check {
        /// Total number of processes in the run
        #[arg(long, value_parser = parse_positive)]
        processes: u32,

        /// Directory containing the <index>.output logs
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Emit the run report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate lattice workload config files for a test run
    GenConfigs {
        /// Output directory for config files
        #[arg(long)]
        output_dir: PathBuf,

        /// Number of config files to generate
        #[arg(long, value_parser = parse_positive)]
        num_files: u32,

        /// Number of proposals per config file
        #[arg(long, value_parser = parse_positive)]
        num_proposals: u32,

        /// Maximum proposals per line
        #[arg(long, value_parser = parse_positive)]
        max_proposals_per_line: u32,

        /// Maximum distinct proposal value
        #[arg(long, value_parser = parse_positive)]
        max_distinct_values: u32,

        /// RNG seed; the same seed reproduces identical files
        #[arg(long, default_value = "12345")]
        seed: u64,
    },
}

fn parse_positive(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(0) | Err(_) => Err(format!("{s} is not a positive integer")),
        Ok(n) => Ok(n),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            processes,
            dir,
            json,
        } => match check_run(&dir, processes) {
            Ok(report) => {
                if json {
                    match serde_json::to_string_pretty(&report) {
                        Ok(encoded) => println!("{encoded}"),
                        Err(err) => {
                            eprintln!("Failed to encode report: {err}");
                            return ExitCode::FAILURE;
                        }
                    }
                } else {
                    println!("{report}");
                }
                if report.passed() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(err) => {
                println!("Validation failed: {err}");
                ExitCode::FAILURE
            }
        },

        Commands::GenConfigs {
            output_dir,
            num_files,
            num_proposals,
            max_proposals_per_line,
            max_distinct_values,
            seed,
        } => {
            let config = WorkloadConfig::new(num_files, num_proposals)
                .with_max_proposals_per_line(max_proposals_per_line)
                .with_max_distinct_values(max_distinct_values)
                .with_seed(seed);

            match generate(&config, &output_dir) {
                Ok(paths) => {
                    for path in paths {
                        println!("Generated {}", path.display());
                    }
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("Config generation failed: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("3"), Ok(3));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-1").is_err());
        assert!(parse_positive("three").is_err());
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::try_parse_from(["fifocheck", "check", "--processes", "4"]).unwrap();
        match cli.command {
            Commands::Check {
                processes,
                dir,
                json,
            } => {
                assert_eq!(processes, 4);
                assert_eq!(dir, PathBuf::from("."));
                assert!(!json);
            }
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_check_rejects_non_positive_process_count() {
        assert!(Cli::try_parse_from(["fifocheck", "check", "--processes", "0"]).is_err());
        assert!(Cli::try_parse_from(["fifocheck", "check"]).is_err());
    }

    #[test]
    fn test_gen_configs_args() {
        let cli = Cli::try_parse_from([
            "fifocheck",
            "gen-configs",
            "--output-dir",
            "configs",
            "--num-files",
            "3",
            "--num-proposals",
            "10",
            "--max-proposals-per-line",
            "5",
            "--max-distinct-values",
            "50",
        ])
        .unwrap();
        match cli.command {
            Commands::GenConfigs {
                num_files, seed, ..
            } => {
                assert_eq!(num_files, 3);
                assert_eq!(seed, 12345);
            }
            _ => panic!("expected gen-configs subcommand"),
        }
    }
}
