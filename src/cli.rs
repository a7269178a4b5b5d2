//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::backends::dump::{run_dump, DumpOptions};
use crate::core::filter::DEFAULT_OUTPUT_FILE;
use crate::core::paths::tool_dir;

/// projdump - dump a project's source files into a single JSON document.
#[derive(Parser, Debug)]
#[command(name = "projdump")]
#[command(
    author,
    version,
    about,
    long_about = r#"projdump walks a project directory, keeps source-like files, and writes
their paths, character counts and contents into one indented JSON document.

With no arguments the directory containing the projdump executable is scanned
and project_dump.json is written there.

Skipped directories: node_modules, .git, .svelte-kit, build, dist, .vscode,
.idea, __pycache__, .venv, venv, and any other hidden directory.

Included files: .js .ts .svelte .html .css .scss .json .md .yml .yaml .toml
.env .sh .py, plus .env and Dockerfile.

Examples:
    projdump
    projdump --root ~/src/weldtrack
    projdump --root . --dry-run
"#
)]
pub struct Cli {
    /// Directory to scan (defaults to the executable's directory).
    #[arg(
        long,
        value_name = "ROOT",
        env = "PROJDUMP_ROOT",
        long_help = "Directory to scan. Defaults to the directory containing the projdump\n\
executable.\n\n\
All paths in the dump are relative to this root, and the output file is written into it."
    )]
    pub root: Option<PathBuf>,

    /// Output file name, written inside ROOT.
    #[arg(
        long,
        default_value = DEFAULT_OUTPUT_FILE,
        value_name = "NAME",
        long_help = "Name of the JSON file written inside ROOT.\n\n\
This file is always excluded from the scan, so repeated runs produce the same dump."
    )]
    pub output: String,

    /// Scan and report without writing the output file.
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no per-file progress lines).
    #[arg(
        short,
        long,
        long_help = "Suppress the per-file progress lines. Skipped files and the final summary\n\
are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr, including pruned directories.\n\
RUST_LOG takes precedence when set."
    )]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.output.contains(['/', '\\']) {
        anyhow::bail!("--output must be a file name, got {:?}", cli.output);
    }

    let root = match cli.root {
        Some(root) => root,
        None => tool_dir().context("Failed to locate the executable's directory")?,
    };
    // Get absolute root path
    let root = root.canonicalize().unwrap_or(root);

    let options = DumpOptions {
        output_name: cli.output,
        dry_run: cli.dry_run,
        quiet: cli.quiet,
    };
    run_dump(&root, &options)
}
