//! Inclusion rules for the project scan
//!
//! A `FilterConfig` is built once and handed to the scanner; nothing here is
//! mutated during a walk.

use std::collections::BTreeSet;

use crate::core::paths::{extension_of, is_hidden_name};

/// Default output file name, written into the scanned root
pub const DEFAULT_OUTPUT_FILE: &str = "project_dump.json";

/// Environment file that is included even though it is hidden
pub const ENV_FILE: &str = ".env";

/// Extensions of files that are dumped
pub const CODE_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".svelte", ".html", ".css", ".scss", ".json", ".md", ".yml", ".yaml", ".toml",
    ".env", ".sh", ".py",
];

/// Directories that are never descended into
pub const IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".svelte-kit",
    "build",
    "dist",
    ".vscode",
    ".idea",
    "__pycache__",
    ".venv",
    "venv",
];

/// Exact file names that are never dumped
pub const IGNORE_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    ".DS_Store",
    "Thumbs.db",
    DEFAULT_OUTPUT_FILE,
];

/// Extensionless names that are always dumped
pub const EXTENSIONLESS_NAMES: &[&str] = &[ENV_FILE, "Dockerfile"];

/// Immutable filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    ignore_dirs: BTreeSet<String>,
    ignore_files: BTreeSet<String>,
    extensions: BTreeSet<String>,
    extensionless: BTreeSet<String>,
    env_file: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: to_set(IGNORE_DIRS),
            ignore_files: to_set(IGNORE_FILES),
            extensions: to_set(CODE_EXTENSIONS),
            extensionless: to_set(EXTENSIONLESS_NAMES),
            env_file: ENV_FILE.to_string(),
        }
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl FilterConfig {
    /// A configuration that ignores and includes nothing
    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self {
            ignore_dirs: BTreeSet::new(),
            ignore_files: BTreeSet::new(),
            extensions: BTreeSet::new(),
            extensionless: BTreeSet::new(),
            env_file: ENV_FILE.to_string(),
        }
    }

    /// Add a directory name to prune
    #[allow(dead_code)]
    pub fn with_ignored_dir(mut self, name: impl Into<String>) -> Self {
        self.ignore_dirs.insert(name.into());
        self
    }

    /// Add an exact file name to exclude
    pub fn with_ignored_file(mut self, name: impl Into<String>) -> Self {
        self.ignore_files.insert(name.into());
        self
    }

    /// Add an allowed extension (with or without the leading dot)
    #[allow(dead_code)]
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        if ext.starts_with('.') {
            self.extensions.insert(ext);
        } else {
            self.extensions.insert(format!(".{}", ext));
        }
        self
    }

    /// Add an extensionless name that is always included
    #[allow(dead_code)]
    pub fn with_extensionless(mut self, name: impl Into<String>) -> Self {
        self.extensionless.insert(name.into());
        self
    }

    /// Whether a subdirectory with this name should be walked
    pub fn should_descend(&self, dir_name: &str) -> bool {
        !self.ignore_dirs.contains(dir_name) && !is_hidden_name(dir_name)
    }

    /// Whether a regular file with this bare name should be dumped
    pub fn should_include(&self, file_name: &str) -> bool {
        if self.ignore_files.contains(file_name) {
            return false;
        }
        if is_hidden_name(file_name) && file_name != self.env_file {
            return false;
        }
        extension_of(file_name).is_some_and(|ext| self.extensions.contains(ext))
            || self.extensionless.contains(file_name)
    }

    pub fn ignored_files(&self) -> impl Iterator<Item = &str> {
        self.ignore_files.iter().map(String::as_str)
    }
}
