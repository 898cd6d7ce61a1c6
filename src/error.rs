use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced to the caller while loading tables or configuration.
///
/// Empty filter results, zero baselines and unmatched join keys are not
/// errors; they degrade to empty or zero-valued output instead.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}:{line}: {reason}", path.display())]
    InvalidRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("configuration error: {0}")]
    Config(String),
}

impl DiffError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            return DiffError::MissingInput(format!("{} does not exist", path.display()));
        }
        DiffError::Io { path, source }
    }
}
