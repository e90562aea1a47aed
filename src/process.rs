//! Freshness checks, per-file processing, and the run driver.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::command::{self, SearchPath};
use crate::config::{Config, GZIP_EXTENSION};
use crate::error::{Error, Result};
use crate::operations::{CommandCompressor, Compressor};
use crate::selector::Selector;

/// Counters for one completed pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Files (re)compressed during this pass
    pub compressed: u64,
    /// Files whose compressed sibling was already fresh
    pub fresh: u64,
}

/// Returns the compressed sibling path: the full file name with `.gz` appended.
pub fn compressed_path(source: &Path) -> PathBuf {
    let mut path = OsString::from(source.as_os_str());
    path.push(".");
    path.push(GZIP_EXTENSION);
    PathBuf::from(path)
}

/// Checks whether `target` is an up-to-date compressed sibling.
///
/// Fresh means the target exists and its modification time is not older than
/// the source's. A missing target is simply not fresh.
fn is_fresh(source_meta: &fs::Metadata, target: &Path) -> Result<bool> {
    let target_meta = match fs::metadata(target) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => {
            return Err(Error::Stat {
                path: target.to_path_buf(),
                source: err,
            })
        }
    };

    let source_time = FileTime::from_last_modification_time(source_meta);
    let target_time = FileTime::from_last_modification_time(&target_meta);
    Ok(target_time >= source_time)
}

/// Processes one selected file, returning `true` if it was (re)compressed.
///
/// A fresh sibling is left untouched. Otherwise any stale sibling is removed
/// first, then the compressor runs with the source path as its final
/// argument. On success one line naming the compressed path goes to stderr
/// and the sibling's modification time is aligned to the source's.
///
/// Alignment failure is logged as a warning; the next pass recompresses the
/// file.
///
/// # Errors
///
/// Returns [`Error::Stat`] if metadata cannot be read, [`Error::RemoveStale`]
/// if a stale sibling cannot be deleted, and the compressor's own
/// [`Error::Spawn`] or [`Error::CompressionFailed`] if the invocation fails.
pub fn process_file(source: &Path, compressor: &dyn Compressor) -> Result<bool> {
    let source_meta = fs::metadata(source).map_err(|err| Error::Stat {
        path: source.to_path_buf(),
        source: err,
    })?;

    let target = compressed_path(source);
    if is_fresh(&source_meta, &target)? {
        log::debug!("{}: already fresh", target.display());
        return Ok(false);
    }

    if target.exists() {
        fs::remove_file(&target).map_err(|err| Error::RemoveStale {
            path: target.clone(),
            source: err,
        })?;
    }

    compressor.compress(source)?;
    eprintln!("{}", target.display());

    let mtime = FileTime::from_last_modification_time(&source_meta);
    if let Err(err) = filetime::set_file_mtime(&target, mtime) {
        log::warn!("{}: cannot set modification time: {err}", target.display());
    }

    Ok(true)
}

/// Runs a full pre-compression pass using the process environment's `PATH`.
///
/// # Errors
///
/// See [`run_with`].
pub fn run(config: &Config) -> Result<RunStats> {
    run_with(config, &SearchPath::from_env())
}

/// Runs a full pre-compression pass against an explicit search path.
///
/// Validates the root, resolves the compressor command before any traversal
/// starts, then streams eligible files and processes them one at a time,
/// stopping at the first failure. The tool's own output suffix is always
/// excluded from selection, so `.gz` files are never themselves compressed.
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if the root is missing or not a directory,
/// [`Error::NoCompressorFound`] if no candidate resolves,
/// [`Error::InvalidPattern`] for a bad extension pattern,
/// [`Error::Traversal`] if the walk fails, and any per-file error from
/// [`process_file`].
pub fn run_with(config: &Config, search: &SearchPath) -> Result<RunStats> {
    if !config.root.is_dir() {
        return Err(Error::InvalidRoot {
            path: config.root.clone(),
        });
    }

    let resolved = command::resolve(&config.commands, search)?;
    log::debug!("using compressor: {}", resolved.line());
    let compressor = CommandCompressor::new(resolved);

    let mut exclude_types = config.exclude_types.clone();
    if !exclude_types.iter().any(|t| t == GZIP_EXTENSION) {
        exclude_types.push(GZIP_EXTENSION.to_string());
    }
    let selector = Selector::new(&config.include_types, &exclude_types, config.min_length)?;

    let mut stats = RunStats::default();
    for path in selector.select(&config.root) {
        if process_file(&path?, &compressor)? {
            stats.compressed += 1;
        } else {
            stats.fresh += 1;
        }
    }

    Ok(stats)
}
