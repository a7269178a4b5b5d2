//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Dump document model (ScanResult, FileRecord)
//! - Filter configuration and inclusion rules
//! - Path normalization utilities
//! - Lossy file decoding
//! - JSON rendering
//! - Error types

pub mod error;
pub mod file_reader;
pub mod filter;
pub mod model;
pub mod paths;
pub mod render;
