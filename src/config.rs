//! Configuration types and constants for the pre-compression pass.

use std::path::PathBuf;

/// File extension for compressed siblings
pub const GZIP_EXTENSION: &str = "gz";

/// Extension patterns compressed by default (textual static web content)
pub const DEFAULT_TYPES: &[&str] = &[
    "html", "htm", "?html", "txt", "css", "js", "xml", "rss", "atom", "svg", "mml", "kml",
];

/// Default minimum file size in bytes; files at or below it are skipped
pub const DEFAULT_MIN_LENGTH: u64 = 50;

/// Compressor command-lines tried in order by default
pub const DEFAULT_COMMANDS: &[&str] = &["zopfli", "gzip -kf9"];

/// Resolved configuration for one pre-compression run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory tree to traverse
    pub root: PathBuf,
    /// Extension patterns eligible for compression; empty means no filter
    pub include_types: Vec<String>,
    /// Extension patterns always excluded, regardless of inclusion
    pub exclude_types: Vec<String>,
    /// Files of this size in bytes or smaller are skipped
    pub min_length: u64,
    /// Candidate compressor command-lines, tried in order
    pub commands: Vec<String>,
}

impl Config {
    /// Creates a configuration for `root` with the default filters and commands.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_types: DEFAULT_TYPES.iter().map(|s| (*s).to_string()).collect(),
            exclude_types: Vec::new(),
            min_length: DEFAULT_MIN_LENGTH,
            commands: DEFAULT_COMMANDS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
