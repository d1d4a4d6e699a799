//! CLI interface for jobfit

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobfit")]
#[command(about = "Resume-to-job matching and ATS compatibility scoring")]
#[command(
    long_about = "Rank job postings by fit to a resume, or analyze a single posting \
                  for ATS keyword compatibility and biased language"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a list of postings by fit to a resume
    Match {
        /// Resume file (JSON profile or plain text)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job list file (JSON array of postings)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Number of matches to show
        #[arg(short, long, default_value_t = 10)]
        top: usize,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Analyze one posting against a resume
    Analyze {
        /// Resume file (JSON profile or plain text)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job posting file (JSON object)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration to a file
    Init {
        /// Destination path
        #[arg(short, long, default_value = "jobfit.toml")]
        path: PathBuf,
    },
}
