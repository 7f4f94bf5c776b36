//! Single file writer shared by every emitter.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{GenerateError, Result};

/// What to do when the destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Replace the existing file.
    Overwrite,
    /// Keep the existing file untouched.
    SkipIfExists,
    /// Treat an existing file as an error.
    FailIfExists,
}

/// Result of one [`write_file`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

/// Writes `contents` to `path` under `policy`, creating parent directories.
///
/// # Errors
///
/// Returns [`GenerateError::AlreadyExists`] for an existing destination under
/// [`WritePolicy::FailIfExists`], or [`GenerateError::Io`] on filesystem
/// failure.
///
/// # Examples
///
/// ```
/// use crudgen_generator::writer::{WriteOutcome, WritePolicy, write_file};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("src/app.js");
///
/// assert_eq!(write_file(&path, "one", WritePolicy::SkipIfExists).unwrap(), WriteOutcome::Written);
/// assert_eq!(write_file(&path, "two", WritePolicy::SkipIfExists).unwrap(), WriteOutcome::Skipped);
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "one");
/// ```
pub fn write_file(path: &Path, contents: &str, policy: WritePolicy) -> Result<WriteOutcome> {
    if path.exists() {
        match policy {
            WritePolicy::Overwrite => {}
            WritePolicy::SkipIfExists => {
                debug!(path = %path.display(), "File exists, skipping");
                return Ok(WriteOutcome::Skipped);
            }
            WritePolicy::FailIfExists => {
                return Err(GenerateError::AlreadyExists(path.to_path_buf()));
            }
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    info!(path = %path.display(), "Wrote file");
    Ok(WriteOutcome::Written)
}
