//! Compressor command resolution over an injected search path.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Search context for locating candidate programs.
///
/// Holds the `PATH`-style directory list and the working directory used for
/// relative program references. Injected explicitly so resolution stays a
/// function of its inputs and tests never have to mutate the real
/// environment.
#[derive(Debug, Clone)]
pub struct SearchPath {
    path: OsString,
    cwd: PathBuf,
}

impl SearchPath {
    /// Creates a search path from an explicit directory list and working directory.
    pub fn new(path: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cwd: cwd.into(),
        }
    }

    /// Captures the process environment: `PATH` and the current directory.
    pub fn from_env() -> Self {
        Self {
            path: env::var_os("PATH").unwrap_or_default(),
            cwd: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

/// A compressor command resolved against the search path.
///
/// Immutable for the run; the invoker appends the target filename as the
/// final argument per invocation.
#[derive(Debug, Clone)]
pub struct ResolvedCommand {
    program: PathBuf,
    args: Vec<String>,
    line: String,
}

impl ResolvedCommand {
    /// Resolved path to the program executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Fixed arguments preceding the target filename.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The candidate command-line as originally configured.
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// Resolves the first available candidate command-line.
///
/// Each candidate is whitespace-tokenized: the first token is the program
/// reference, the remaining tokens are fixed arguments. A candidate is
/// available when its program resolves to an executable on `search`: bare
/// names are looked up in the search-path directories, references containing
/// a path separator are checked directly (relative to the search context's
/// working directory). Blank candidates are skipped; candidates after the
/// first match are never probed.
///
/// Resolution has no side effects beyond filesystem existence and permission
/// checks.
///
/// # Errors
///
/// Returns [`Error::NoCompressorFound`] carrying the full candidate list when
/// no program resolves.
pub fn resolve(candidates: &[String], search: &SearchPath) -> Result<ResolvedCommand> {
    for candidate in candidates {
        let mut tokens = candidate.split_whitespace();
        let Some(program) = tokens.next() else {
            continue;
        };

        if let Ok(resolved) = which::which_in(program, Some(&search.path), &search.cwd) {
            return Ok(ResolvedCommand {
                program: resolved,
                args: tokens.map(str::to_string).collect(),
                line: candidate.clone(),
            });
        }
    }

    Err(Error::NoCompressorFound {
        tried: candidates.to_vec(),
    })
}
