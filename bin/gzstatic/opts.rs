//! Command line argument parsing for the gzstatic utility

use std::path::PathBuf;

use clap::Parser;

use gzstatic::config::{Config, DEFAULT_COMMANDS, DEFAULT_MIN_LENGTH, DEFAULT_TYPES};

/// Pre-compress static files into `.gz` siblings
///
/// Walks a directory tree and keeps a compressed `.gz` sibling next to every
/// file matching the type and size filters, skipping siblings that are
/// already up to date. Designed to be re-run from a scheduler without
/// redoing work.
#[derive(Parser, Debug)]
#[command(
    name = "gzstatic",
    version,
    about = "Pre-compress static files into .gz siblings",
    long_about = "gzstatic walks a directory tree and produces a compressed .gz sibling \
                  for every eligible static file, so a webserver can serve the compressed \
                  variant directly instead of compressing on the fly."
)]
pub struct Opts {
    /// Directory tree to pre-compress
    #[arg(value_name = "DIR")]
    pub root: PathBuf,

    /// Extension patterns to compress (comma separated; `*` and `?` allowed)
    #[arg(
        short = 't',
        long = "types",
        value_name = "LIST",
        value_delimiter = ',',
        default_values_t = DEFAULT_TYPES.iter().map(|s| (*s).to_string())
    )]
    pub types: Vec<String>,

    /// Extension patterns to always exclude (comma separated; `gz` is always excluded)
    #[arg(
        short = 'x',
        long = "exclude-types",
        value_name = "LIST",
        value_delimiter = ','
    )]
    pub exclude_types: Vec<String>,

    /// Skip files of this size in bytes or smaller
    #[arg(
        short = 'm',
        long = "min-length",
        value_name = "BYTES",
        default_value_t = DEFAULT_MIN_LENGTH
    )]
    pub min_length: u64,

    /// Compressor command-line to try, in order (repeatable)
    #[arg(
        short = 'c',
        long = "cmd",
        value_name = "CMDLINE",
        default_values_t = DEFAULT_COMMANDS.iter().map(|s| (*s).to_string())
    )]
    pub commands: Vec<String>,

    /// Print a run summary after the pass
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Opts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the run configuration from the parsed options
    pub fn config(&self) -> Config {
        Config {
            root: self.root.clone(),
            include_types: self.types.clone(),
            exclude_types: self.exclude_types.clone(),
            min_length: self.min_length,
            commands: self.commands.clone(),
        }
    }
}
