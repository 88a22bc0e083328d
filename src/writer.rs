//! Persisting the rendered document

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};

/// Write `document` to `path`, creating parent directories as needed.
///
/// An existing file is replaced in full. The write is not atomic; a failure
/// partway through can leave a truncated file behind.
pub fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, document).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = document.len(), "wrote config");
    Ok(())
}
