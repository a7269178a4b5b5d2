//! Backends module - Scanning and output
//!
//! Provides:
//! - scan: Pruned project walk with walkdir
//! - dump: JSON dump writing and progress reporting

pub mod dump;
pub mod scan;
