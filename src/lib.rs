//! Pre-compresses eligible static files so a webserver can serve the `.gz`
//! sibling directly instead of compressing on the fly.
//!
//! One pass walks a directory tree, and for every regular file that matches
//! the configured extension patterns and exceeds the minimum size it keeps a
//! sibling `<file>.gz` up to date: the first available compressor from an
//! ordered candidate list is invoked for stale or missing siblings, and the
//! sibling's modification time is then aligned with the source so the next
//! pass can skip it. Fresh siblings cost nothing, which makes the pass cheap
//! to re-run from a scheduler.

pub mod command;
pub mod config;
pub mod error;
pub mod operations;
pub mod process;
pub mod selector;


pub use command::{resolve, ResolvedCommand, SearchPath};
pub use config::{Config, DEFAULT_COMMANDS, DEFAULT_MIN_LENGTH, DEFAULT_TYPES, GZIP_EXTENSION};
pub use error::{Error, Result};
pub use operations::{CommandCompressor, Compressor};
pub use process::{compressed_path, process_file, run, run_with, RunStats};
pub use selector::Selector;
