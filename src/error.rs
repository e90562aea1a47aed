//! Error types for the pre-compression pass.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for a pre-compression run.
///
/// Every variant is fatal to the run except where the caller states
/// otherwise; there are no retries, a failed pass is simply re-run later.
#[derive(Debug, Error)]
pub enum Error {
    /// Root path is missing or not a directory
    #[error("{}: Not a directory", path.display())]
    InvalidRoot {
        /// Path given as the traversal root
        path: PathBuf,
    },

    /// An extension pattern failed to compile
    #[error("{pattern}: Invalid type pattern: {source}")]
    InvalidPattern {
        /// The offending pattern as configured
        pattern: String,
        /// Underlying glob error
        #[source]
        source: globset::Error,
    },

    /// None of the candidate commands resolve to an executable
    #[error("No usable compressor, tried: {}", tried.join(", "))]
    NoCompressorFound {
        /// Candidate command-lines in the order they were probed
        tried: Vec<String>,
    },

    /// The directory walk could not start or failed partway
    #[error("Directory walk failed: {source}")]
    Traversal {
        /// Underlying walk error
        #[from]
        source: walkdir::Error,
    },

    /// Failed to read file metadata during the freshness check
    #[error("{}: {source}", path.display())]
    Stat {
        /// Path whose metadata could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to remove a stale compressed sibling
    #[error("{}: Cannot remove: {source}", path.display())]
    RemoveStale {
        /// Path to the stale sibling
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The compressor process could not be launched
    #[error("{program}: Failed to launch: {source}")]
    Spawn {
        /// Command-line whose program failed to start
        program: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The compressor exited with a non-zero status
    #[error("{}: Compressor exited with {status}", path.display())]
    CompressionFailed {
        /// Source file being compressed
        path: PathBuf,
        /// Exit status reported by the compressor process
        status: ExitStatus,
    },
}

/// Specialized `Result` type for pre-compression operations.
pub type Result<T> = std::result::Result<T, Error>;
