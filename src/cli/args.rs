//! Command line argument parsing for the Spellbridge CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Spellbridge - extract checkable words from text
#[derive(Parser, Debug, Clone)]
#[command(name = "spellbridge")]
#[command(about = "Extract spell-checkable words and their offsets from text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellbridgeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Client configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLBRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellbridgeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the words that would be sent for spell checking
    Words(WordsArgs),

    /// Print the text after separator normalization
    Normalize(NormalizeArgs),
}

/// Where the text comes from.
#[derive(Parser, Debug, Clone)]
pub struct InputArgs {
    /// Text to process (reads the input file or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,
}

/// Arguments for word extraction
#[derive(Parser, Debug, Clone)]
pub struct WordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Minimum number of characters of a word
    #[arg(short, long)]
    pub min_word_length: Option<usize>,

    /// Extra characters that separate words
    #[arg(long)]
    pub custom_punctuation: Option<String>,

    /// Language of the text, selects a per-language minimum length
    #[arg(short, long)]
    pub language: Option<String>,

    /// Include the offset of every occurrence
    #[arg(long)]
    pub offsets: bool,
}

/// Arguments for normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Extra characters that separate words
    #[arg(long)]
    pub custom_punctuation: Option<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
