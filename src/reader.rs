//! Lossy file readers: invalid UTF-8 becomes U+FFFD instead of an error,
//! and any of `\n`, `\r\n` or `\r` ends a line.

use crate::error::{SummarizeError, SummarizeResult};
use std::fs;
use std::path::Path;

pub const DEFAULT_TAIL_LINES: usize = 200;

pub fn read_to_string_lossy(path: &Path) -> SummarizeResult<String> {
    let bytes = fs::read(path).map_err(|e| SummarizeError::read(path, e))?;
    Ok(normalize_newlines(&String::from_utf8_lossy(&bytes)))
}

/// Rewrite `\r\n` and lone `\r` as `\n`, so every reader splits lines the same way.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// All lines of a file, without terminators.
pub fn read_lines_lossy(path: &Path) -> SummarizeResult<Vec<String>> {
    let text = read_to_string_lossy(path)?;
    Ok(text.lines().map(String::from).collect())
}

/// The last `n` lines of a file joined back together, terminators kept.
pub fn read_tail(path: &Path, n: usize) -> SummarizeResult<String> {
    let text = read_to_string_lossy(path)?;
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let start = lines.len().saturating_sub(n);
    Ok(lines[start..].concat())
}

/// Like [`read_tail`] but any failure yields an empty string.
pub fn tail_lines(path: &Path, n: usize) -> String {
    match read_tail(path, n) {
        Ok(tail) => tail,
        Err(e) => {
            tracing::debug!(error = %e, "tail read failed");
            String::new()
        }
    }
}
