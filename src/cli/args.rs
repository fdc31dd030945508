//! Command line argument parsing for the combindex CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::index::config::{DEFAULT_INGEST_BATCH_SIZE, IndexConfig};

/// combindex - find the entries containing every given word
///
/// Entries are read one per line from standard input (or --input). Words
/// prefixed with `-` exclude the entries containing them.
///
/// Options are long-only, so every `-word` stays a negative query word.
#[derive(Parser, Debug, Clone)]
#[command(name = "combindex")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Find the input lines containing all of the given words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "Example: cat tweets.txt | combindex python linux -windows")]
pub struct CombindexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(long)]
    pub quiet: bool,

    /// Output format
    #[arg(long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Read entries from this file instead of standard input
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Enumerate word combinations on all cores while indexing
    #[arg(long, env = "COMBINDEX_PARALLEL")]
    pub parallel: bool,

    /// Entries per parallel indexing batch
    #[arg(long, value_name = "N", env = "COMBINDEX_BATCH_SIZE", default_value_t = DEFAULT_INGEST_BATCH_SIZE)]
    pub batch_size: usize,

    /// Query words; prefix a word with `-` to exclude it
    #[arg(value_name = "WORDS", allow_hyphen_values = true, trailing_var_arg = true)]
    pub words: Vec<String>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,

    /// Print version
    #[arg(long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,
}

impl CombindexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Index configuration selected by the options.
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            parallel_ingest: self.parallel,
            ingest_batch_size: self.batch_size,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Entry found:` line per match
    Human,
    /// JSON document with hits and index statistics
    Json,
}
