//! File decoding
//!
//! Files are always decoded as UTF-8. Invalid sequences become U+FFFD so a
//! malformed file never aborts a scan. Line endings are normalized to `\n`.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::error::{DumpError, Result};

/// Text decoded from a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Decoded content
    pub content: String,

    /// Whether any invalid bytes were replaced
    pub lossy: bool,
}

impl DecodedText {
    /// Decode raw bytes, replacing invalid UTF-8 and normalizing line endings
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let (content, lossy) = match String::from_utf8(bytes) {
            Ok(content) => (content, false),
            Err(err) => (String::from_utf8_lossy(err.as_bytes()).into_owned(), true),
        };
        Self {
            content: normalize_newlines(content),
            lossy,
        }
    }
}

/// Turn `\r\n` and lone `\r` into `\n`
fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Read a whole file as lossily decoded UTF-8.
///
/// The handle is closed before this returns.
pub fn read_text_lossy(path: &Path) -> Result<DecodedText> {
    let bytes = read_file_bytes(path).map_err(|source| DumpError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(DecodedText::from_bytes(bytes))
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    let capacity = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut reader = std::io::BufReader::new(file);
    let mut buffer = Vec::with_capacity(capacity);
    reader.read_to_end(&mut buffer)?;

    Ok(buffer)
}
