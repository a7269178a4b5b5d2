//! Error types for scanning and dumping

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while scanning a project or writing its dump
#[derive(Error, Debug)]
pub enum DumpError {
    /// A single file could not be read (recoverable, the file is skipped)
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk hit an entry it could not inspect (recoverable)
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output document could not be written (fatal)
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),
}

/// Result type for scan and dump operations
pub type Result<T> = std::result::Result<T, DumpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_names_path() {
        let err = DumpError::Read {
            path: PathBuf::from("src/a.ts"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("src/a.ts"));
    }

    #[test]
    fn test_write_error_message() {
        let err = DumpError::Write {
            path: PathBuf::from("/ro/project_dump.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("cannot write /ro/project_dump.json"));
    }

    #[test]
    fn test_invalid_root_message() {
        let err = DumpError::InvalidRoot(PathBuf::from("/nope"));
        assert_eq!(err.to_string(), "not a directory: /nope");
    }
}
