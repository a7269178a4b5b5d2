//! Dump document model
//!
//! `ScanResult` is the single JSON document written per run. Field order here is
//! the field order in the output.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One included file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to root, using '/' as separator
    pub path: String,

    /// Number of characters in the decoded content
    pub size: usize,

    /// Decoded text content
    pub content: String,
}

impl FileRecord {
    /// Create a record, deriving `size` from the content
    pub fn new(path: impl Into<String>, content: String) -> Self {
        Self {
            path: path.into(),
            size: content.chars().count(),
            content,
        }
    }
}

/// The full dump document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    project_name: String,
    root_path: String,
    total_files: usize,
    files: Vec<FileRecord>,
}

impl ScanResult {
    /// Build the document from records in traversal order
    pub fn new(
        project_name: impl Into<String>,
        root_path: impl Into<String>,
        files: Vec<FileRecord>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            root_path: root_path.into(),
            total_files: files.len(),
            files,
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    #[allow(dead_code)]
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }
}

/// Counters and output details reported after a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub total_files: usize,
    pub skipped_files: usize,
    pub lossy_files: usize,

    /// Where the document was written, `None` for dry runs
    pub output_path: Option<PathBuf>,

    /// Size of the written document in bytes
    pub output_bytes: u64,
}

impl ScanSummary {
    /// Output size in kilobytes
    pub fn output_kb(&self) -> f64 {
        self.output_bytes as f64 / 1024.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_record_counts_chars_not_bytes() {
        let record = FileRecord::new("i18n/ru.json", "привет".to_string());
        assert_eq!(record.size, 6);
        assert_eq!(record.content.len(), 12);
    }

    #[test]
    fn test_file_record_replacement_char_counts_once() {
        let record = FileRecord::new("bad.ts", "a\u{FFFD}b".to_string());
        assert_eq!(record.size, 3);
    }

    #[test]
    fn test_scan_result_total_matches_files() {
        let result = ScanResult::new(
            "weldtrack",
            "/home/dev/weldtrack",
            vec![
                FileRecord::new("a.ts", "x".to_string()),
                FileRecord::new(".env", "K=1".to_string()),
            ],
        );
        assert_eq!(result.total_files(), 2);
        assert_eq!(result.total_files(), result.files().len());
        assert_eq!(result.project_name(), "weldtrack");
        assert_eq!(result.root_path(), "/home/dev/weldtrack");
    }

    #[test]
    fn test_scan_result_field_order() {
        let result = ScanResult::new("p", "/p", vec![FileRecord::new("a.ts", "x".to_string())]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"project_name":"p","root_path":"/p","total_files":1,"files":[{"path":"a.ts","size":1,"content":"x"}]}"#
        );
    }

    #[test]
    fn test_summary_output_kb() {
        let summary = ScanSummary {
            output_bytes: 1536,
            ..Default::default()
        };
        assert!((summary.output_kb() - 1.5).abs() < f64::EPSILON);
    }
}
