//! The compressor capability and its external-process implementation.

use std::path::Path;
use std::process::Command;

use crate::command::ResolvedCommand;
use crate::error::{Error, Result};

/// A compressor produces `<source>.gz` next to the source file.
///
/// Implementations must leave the source untouched. The caller owns the
/// freshness check and timestamp alignment; an implementation only has to
/// write the sibling or fail.
pub trait Compressor {
    /// Compresses `source`, writing the sibling `<source>.gz`.
    ///
    /// # Errors
    ///
    /// Returns an error if the compressor cannot run or reports failure.
    fn compress(&self, source: &Path) -> Result<()>;
}

/// Runs the resolved external command with the source path appended.
///
/// The command is trusted, by external contract, to write its output to
/// exactly `<source>.gz`; operators pick tools like `zopfli` or `gzip -kf9`
/// that behave this way.
#[derive(Debug)]
pub struct CommandCompressor {
    command: ResolvedCommand,
}

impl CommandCompressor {
    /// Wraps a resolved command for per-file invocation.
    pub fn new(command: ResolvedCommand) -> Self {
        Self { command }
    }

    /// The underlying resolved command.
    pub fn command(&self) -> &ResolvedCommand {
        &self.command
    }
}

impl Compressor for CommandCompressor {
    fn compress(&self, source: &Path) -> Result<()> {
        let status = Command::new(self.command.program())
            .args(self.command.args())
            .arg(source)
            .status()
            .map_err(|err| Error::Spawn {
                program: self.command.line().to_string(),
                source: err,
            })?;

        if !status.success() {
            return Err(Error::CompressionFailed {
                path: source.to_path_buf(),
                status,
            });
        }

        Ok(())
    }
}
