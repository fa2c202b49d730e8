use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading or querying a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is the 1-based line number in the source file.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("unknown field '{0}' (expected one of abs, rel, del, tag)")]
    UnknownField(String),
}

pub type Result<T, E = DatasetError> = std::result::Result<T, E>;
