//! Project scanning backend
//!
//! Walks the root with walkdir, pruning ignored directories before descending,
//! and collects a FileRecord for every file the filter accepts.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{DumpError, Result};
use crate::core::file_reader::read_text_lossy;
use crate::core::filter::FilterConfig;
use crate::core::model::{FileRecord, ScanResult};
use crate::core::paths::{file_name, make_relative, normalize_path};

/// Per-file progress reported while scanning
#[derive(Debug)]
pub enum ScanEvent<'a> {
    /// A file was read and recorded
    Included { path: &'a str, lossy: bool },

    /// A file or directory entry could not be read and was skipped
    Skipped { path: &'a Path, error: &'a DumpError },
}

/// Scan output plus counters the result document does not carry
#[derive(Debug)]
pub struct ScanOutcome {
    pub result: ScanResult,
    pub skipped: usize,
    pub lossy: usize,
}

/// Scanner bound to one filter configuration
#[derive(Debug, Clone)]
pub struct Scanner {
    filter: FilterConfig,
}

impl Scanner {
    pub fn new(filter: FilterConfig) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    /// Scan a root directory without progress reporting
    #[allow(dead_code)]
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        self.scan_with(root, |_| {})
    }

    /// Scan a root directory, reporting each included or skipped file.
    ///
    /// Only an unusable root is an error; unreadable entries are reported and skipped.
    pub fn scan_with<F>(&self, root: &Path, mut on_event: F) -> Result<ScanOutcome>
    where
        F: FnMut(ScanEvent<'_>),
    {
        let root = resolve_root(root)?;
        debug!(root = %root.display(), "scanning");

        let mut files = Vec::new();
        let mut skipped = 0;
        let mut lossy = 0;

        // a directory's files come before its subdirectories, each group by name
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            })
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    let error = DumpError::from(err);
                    warn!(path = %path.display(), %error, "skipping unreadable entry");
                    on_event(ScanEvent::Skipped {
                        path: &path,
                        error: &error,
                    });
                    skipped += 1;
                    continue;
                }
            };

            if !is_candidate_file(&entry) {
                continue;
            }

            let include = file_name(entry.path())
                .map(|name| self.filter.should_include(&name))
                .unwrap_or(false);
            if !include {
                continue;
            }

            let relative = match make_relative(entry.path(), &root) {
                Some(r) => r,
                None => continue,
            };

            match read_text_lossy(entry.path()) {
                Ok(decoded) => {
                    if decoded.lossy {
                        warn!(path = %relative, "invalid UTF-8 replaced");
                        lossy += 1;
                    }
                    on_event(ScanEvent::Included {
                        path: &relative,
                        lossy: decoded.lossy,
                    });
                    files.push(FileRecord::new(relative, decoded.content));
                }
                Err(error) => {
                    debug!(path = %relative, %error, "skipping file");
                    on_event(ScanEvent::Skipped {
                        path: entry.path(),
                        error: &error,
                    });
                    skipped += 1;
                }
            }
        }

        let project_name = file_name(&root).unwrap_or_else(|| normalize_path(&root));
        let result = ScanResult::new(project_name, root.display().to_string(), files);
        debug!(
            total_files = result.total_files(),
            skipped, lossy, "scan finished"
        );

        Ok(ScanOutcome {
            result,
            skipped,
            lossy,
        })
    }

    /// Prune ignored and hidden directories below the root
    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        let keep = self.filter.should_descend(&name);
        if !keep {
            debug!(dir = %entry.path().display(), "pruned");
        }
        keep
    }
}

/// Canonicalize the root and make sure it is a directory
fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .map_err(|_| DumpError::InvalidRoot(root.to_path_buf()))?;
    if !resolved.is_dir() {
        return Err(DumpError::InvalidRoot(root.to_path_buf()));
    }
    Ok(resolved)
}

/// Regular files and symlinks that do not point at a directory.
///
/// Dangling symlinks are kept so the failed read is reported.
fn is_candidate_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && !entry.path().is_dir()
}
