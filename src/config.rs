//! Runtime settings for a summarize run.
//!
//! Everything comes from command-line flags and one environment variable;
//! there is no config file.

use crate::dkms::DEFAULT_DKMS_BASE;
use crate::error::{SummarizeError, SummarizeResult};
use crate::reader::DEFAULT_TAIL_LINES;
use std::path::{Path, PathBuf};

/// Environment variable naming the directory that holds `PATCHES_APPLIED`.
pub const TARGET_ENV: &str = "RTL8821CU_WSL_TARGET";

#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    /// Directory searched for the sidecar patches file.
    pub target_dir: PathBuf,
    /// DKMS module root holding one directory per installed version.
    pub dkms_base: PathBuf,
    /// How many trailing lines of `make.log` to keep.
    pub tail_lines: usize,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            dkms_base: PathBuf::from(DEFAULT_DKMS_BASE),
            tail_lines: DEFAULT_TAIL_LINES,
        }
    }
}

impl SummarizeConfig {
    pub fn with_target_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_dir = dir.into();
        self
    }

    pub fn with_dkms_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.dkms_base = base.into();
        self
    }

    pub fn with_tail_lines(mut self, n: usize) -> Self {
        self.tail_lines = n;
        self
    }
}

/// Directory of the running executable, symlinks resolved.
pub fn exe_dir() -> SummarizeResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| SummarizeError::TargetDir(e.to_string()))?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| SummarizeError::TargetDir(format!("{} has no parent", exe.display())))
}

/// Pick the target directory: explicit flag, then the environment value,
/// then the executable's own directory, then `.`. Empty strings count as unset.
pub fn resolve_target_dir(flag: Option<&str>, env_value: Option<&str>) -> PathBuf {
    if let Some(dir) = flag.filter(|s| !s.is_empty()) {
        return PathBuf::from(dir);
    }
    if let Some(dir) = env_value.filter(|s| !s.is_empty()) {
        return PathBuf::from(dir);
    }
    exe_dir().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to current directory");
        PathBuf::from(".")
    })
}
