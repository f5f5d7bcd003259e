//! Locate the DKMS build log left behind by the most recent driver build.
//!
//! DKMS keeps one directory per installed version under its module root,
//! each with `build/make.log` once a build has been attempted:
//!
//! ```text
//! /var/lib/dkms/8821cu/
//!   5.12.0.4/build/make.log
//!   5.13.0.1/build/make.log
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const DEFAULT_DKMS_BASE: &str = "/var/lib/dkms/8821cu";

/// `make.log` inside a version directory.
pub fn make_log_path(version_dir: &Path) -> PathBuf {
    version_dir.join("build").join("make.log")
}

/// Path of the newest `<base>/<version>/build/make.log`, if any.
///
/// Entries that cannot be read or stat'ed are skipped.
pub fn find_make_log(base: &Path) -> Option<PathBuf> {
    if !base.is_dir() {
        tracing::debug!(base = %base.display(), "dkms base directory missing");
        return None;
    }
    let entries = match fs::read_dir(base) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(base = %base.display(), error = %e, "cannot list dkms base directory");
            return None;
        }
    };

    let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in entries.flatten() {
        let log = make_log_path(&entry.path());
        if !log.is_file() {
            continue;
        }
        match fs::metadata(&log).and_then(|m| m.modified()) {
            Ok(mtime) => candidates.push((mtime, log)),
            Err(e) => tracing::debug!(path = %log.display(), error = %e, "skipping make.log"),
        }
    }

    let newest = candidates.into_iter().max().map(|(_, path)| path);
    if let Some(p) = &newest {
        tracing::debug!(path = %p.display(), "selected dkms make.log");
    }
    newest
}
