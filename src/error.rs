//! Error type shared by every stage of a translation run

use std::path::PathBuf;

use thiserror::Error;

/// Stage of a run that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Resolve,
    Write,
}

#[derive(Debug, Error)]
pub enum Error {
    /// The source document does not exist.
    #[error("load: source document not found at {}", .path.display())]
    NotFound { path: PathBuf },

    /// The source document exists but could not be read.
    #[error("load: failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source document is not valid JSON.
    #[error("load: invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The source document is not a JSON object of flat objects.
    #[error("load: {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    /// The environment variable the destination is rooted at is missing.
    #[error("resolve: environment variable {variable} is not set")]
    ConfigPath { variable: &'static str },

    /// Directory creation or the file write failed.
    #[error("write: failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::NotFound { .. }
            | Error::Read { .. }
            | Error::Json { .. }
            | Error::Parse { .. } => Stage::Load,
            Error::ConfigPath { .. } => Stage::Resolve,
            Error::Write { .. } => Stage::Write,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
