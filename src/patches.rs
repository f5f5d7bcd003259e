use crate::reader;
use std::path::Path;

pub const PATCHES_FILE: &str = "PATCHES_APPLIED";

/// Lines of `<dir>/PATCHES_APPLIED`; empty when the file is absent or unreadable.
pub fn load_applied_patches(dir: &Path) -> Vec<String> {
    let rec = dir.join(PATCHES_FILE);
    if !rec.is_file() {
        return Vec::new();
    }
    reader::read_lines_lossy(&rec).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "ignoring unreadable patches file");
        Vec::new()
    })
}
