//! File selection: tree traversal with extension and size filtering.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Filters a directory tree down to the regular files eligible for compression.
///
/// Extension patterns describe the portion of a file name after the last
/// literal `.` and may themselves contain the wildcards `*` and `?`. They are
/// compiled once, at construction, into case-insensitive `*.{pattern}`
/// filename globs.
#[derive(Debug)]
pub struct Selector {
    include: Option<GlobSet>,
    exclude: GlobSet,
    min_length: u64,
}

impl Selector {
    /// Compiles the extension patterns into a reusable selector.
    ///
    /// An empty `include_types` slice disables the inclusion filter entirely;
    /// exclusion and size constraints still apply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if any pattern fails to compile.
    pub fn new(
        include_types: &[String],
        exclude_types: &[String],
        min_length: u64,
    ) -> Result<Self> {
        let include = if include_types.is_empty() {
            None
        } else {
            Some(build_extension_set(include_types)?)
        };

        Ok(Self {
            include,
            exclude: build_extension_set(exclude_types)?,
            min_length,
        })
    }

    /// Streams the eligible files under `root`.
    ///
    /// Each call starts a fresh traversal. Directory entries are visited in
    /// file-name order, so the sequence is deterministic for a given tree.
    /// Only regular files are yielded; directories never are, and symlinks
    /// are not followed. Exclusion wins over inclusion, and a file must be
    /// strictly larger than the minimum length.
    ///
    /// Traversal failures (unreadable directory, root disappearing mid-walk)
    /// surface as [`Error::Traversal`] items; the caller treats them as fatal.
    pub fn select<'a>(&'a self, root: &Path) -> impl Iterator<Item = Result<PathBuf>> + 'a {
        WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => return Some(Err(Error::from(err))),
                };

                if !entry.file_type().is_file() {
                    return None;
                }

                let name = Path::new(entry.file_name());
                if self.exclude.is_match(name) {
                    return None;
                }
                if let Some(include) = &self.include {
                    if !include.is_match(name) {
                        return None;
                    }
                }

                match entry.metadata() {
                    Ok(meta) if meta.len() > self.min_length => Some(Ok(entry.into_path())),
                    Ok(_) => None,
                    Err(err) => Some(Err(Error::from(err))),
                }
            })
    }
}

/// Builds a case-insensitive glob set matching `*.{pattern}` file names.
fn build_extension_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(&format!("*.{pattern}"))
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }

    builder.build().map_err(|source| Error::InvalidPattern {
        pattern: patterns.join(","),
        source,
    })
}
