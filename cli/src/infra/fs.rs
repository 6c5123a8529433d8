//! Filesystem infrastructure — implements the `LocalFs` port.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::LocalFs;

/// Production filesystem implementation of `LocalFs`.
pub struct HostFs;

impl LocalFs for HostFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("removing directory {}", path.display()))
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).with_context(|| format!("removing file {}", path.display()))
    }
}

/// Remove a file or directory tree if it exists.
///
/// Returns `true` when something was removed.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_if_exists(fs: &impl LocalFs, path: &Path) -> Result<bool> {
    if !fs.exists(path) {
        debug!(path = %path.display(), "already absent");
        return Ok(false);
    }
    if fs.is_dir(path) {
        fs.remove_dir_all(path)?;
    } else {
        fs.remove_file(path)?;
    }
    debug!(path = %path.display(), "removed");
    Ok(true)
}
