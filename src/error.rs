//! Error types for reading the files a summary is built from.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not resolve target directory: {0}")]
    TargetDir(String),
}

impl SummarizeError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SummarizeError::Read { path: path.into(), source }
    }
}

pub type SummarizeResult<T> = Result<T, SummarizeError>;
