//! Dump backend
//!
//! Scans a project, writes the JSON document atomically into the root, and
//! prints per-file progress plus a final summary.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::info;

use crate::backends::scan::{ScanEvent, Scanner};
use crate::core::error::{self, DumpError};
use crate::core::filter::{FilterConfig, DEFAULT_OUTPUT_FILE};
use crate::core::model::{ScanResult, ScanSummary};
use crate::core::paths::tool_file_name;
use crate::core::render::render_json;

/// Options for a dump run
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Output file name, created inside the root
    pub output_name: String,

    /// Scan only, write nothing
    pub dry_run: bool,

    /// Suppress per-file success lines
    pub quiet: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_FILE.to_string(),
            dry_run: false,
            quiet: false,
        }
    }
}

/// Filter with the output file and this executable excluded
pub fn self_excluding_filter(output_name: &str) -> FilterConfig {
    let filter = FilterConfig::default().with_ignored_file(output_name);
    match tool_file_name() {
        Some(name) => filter.with_ignored_file(name),
        None => filter,
    }
}

/// Write the rendered document over `output_path` via a temp file in the same directory.
///
/// A replaced file keeps its permissions; a new one gets the usual umask-based mode.
/// Returns the number of bytes written.
pub fn write_dump(result: &ScanResult, output_path: &Path) -> error::Result<u64> {
    let json = render_json(result)?;
    let write_err = |source: std::io::Error| DumpError::Write {
        path: output_path.to_path_buf(),
        source,
    };

    let dir = output_path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = temp_file_builder().tempfile_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    if let Ok(existing) = fs::metadata(output_path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(output_path).map_err(|e| write_err(e.error))?;

    Ok(json.len() as u64)
}

/// Temp files are created 0600 by default; ask for 0666 so the umask applies
#[cfg(unix)]
fn temp_file_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_file_builder() -> Builder<'static, 'static> {
    Builder::new()
}

/// Scan `root` and write the dump, reporting progress on stdout
pub fn dump_project(root: &Path, options: &DumpOptions) -> Result<ScanSummary> {
    let scanner = Scanner::new(self_excluding_filter(&options.output_name));
    info!(
        root = %root.display(),
        ignored_files = ?scanner.filter().ignored_files().collect::<Vec<_>>(),
        "starting dump"
    );

    let outcome = scanner
        .scan_with(root, |event| print_event(&event, options.quiet))
        .with_context(|| format!("Failed to scan {}", root.display()))?;

    let mut summary = ScanSummary {
        total_files: outcome.result.total_files(),
        skipped_files: outcome.skipped,
        lossy_files: outcome.lossy,
        ..Default::default()
    };

    if options.dry_run {
        return Ok(summary);
    }

    let output_path = PathBuf::from(outcome.result.root_path()).join(&options.output_name);
    summary.output_bytes = write_dump(&outcome.result, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    summary.output_path = Some(output_path);

    info!(
        project = outcome.result.project_name(),
        total_files = summary.total_files,
        output_bytes = summary.output_bytes,
        "dump written"
    );
    Ok(summary)
}

fn print_event(event: &ScanEvent<'_>, quiet: bool) {
    match event {
        ScanEvent::Included { path, lossy } => {
            if quiet {
                return;
            }
            if *lossy {
                println!("{} {} {}", "✓".green(), path, "(lossy)".yellow());
            } else {
                println!("{} {}", "✓".green(), path);
            }
        }
        ScanEvent::Skipped { path, error } => {
            println!("{} {}: {}", "✗".red(), path.display(), error);
        }
    }
}

fn print_summary(summary: &ScanSummary) {
    println!();
    match &summary.output_path {
        Some(path) => {
            println!(
                "{} Saved {} files",
                "Done!".green().bold(),
                summary.total_files
            );
            println!("Output file: {}", path.display());
            println!("Size: {:.1} KB", summary.output_kb());
        }
        None => {
            println!(
                "{} {} files would be saved",
                "Dry run:".yellow().bold(),
                summary.total_files
            );
        }
    }
    if summary.skipped_files > 0 {
        println!("Skipped: {} unreadable", summary.skipped_files);
    }
    if summary.lossy_files > 0 {
        println!("Lossy: {} with invalid UTF-8", summary.lossy_files);
    }
}

/// Run the dump command
pub fn run_dump(root: &Path, options: &DumpOptions) -> Result<()> {
    println!("Scanning {}...", root.display());
    let summary = dump_project(root, options)?;
    print_summary(&summary);
    Ok(())
}
