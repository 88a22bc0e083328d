//! Load, render and place the rclone config in one pass

use std::path::PathBuf;
use tracing::info;

use crate::error::Result;
use crate::loader::load_remotes;
use crate::transform::serialize_remotes;
use crate::writer::write_document;

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOutcome {
    pub destination: PathBuf,
    pub remotes: usize,
    pub bytes: usize,
}

pub struct Translator {
    source: PathBuf,
    destination: PathBuf,
}

impl Translator {
    pub fn new(source: PathBuf, destination: PathBuf) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Load the source and return the rendered document without writing it.
    pub fn render(&self) -> Result<String> {
        let remotes = load_remotes(&self.source)?;
        Ok(serialize_remotes(&remotes))
    }

    /// Load the source, render it and replace the destination file.
    pub fn run(&self) -> Result<TranslateOutcome> {
        info!(
            source = %self.source.display(),
            destination = %self.destination.display(),
            "starting translation"
        );

        // Load remotes
        let remotes = load_remotes(&self.source)?;

        // Render and replace the destination
        let document = serialize_remotes(&remotes);
        write_document(&self.destination, &document)?;

        info!(remotes = remotes.len(), "translation completed");
        Ok(TranslateOutcome {
            destination: self.destination.clone(),
            remotes: remotes.len(),
            bytes: document.len(),
        })
    }
}
