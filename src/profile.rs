//! Profile output file creation.
//!
//! [`write_cpu_profile`] creates (or truncates) the target file and releases the
//! handle before returning. No samples are collected or written, so a
//! successful call leaves an empty file behind.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to create profile file {}: {source}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn write_cpu_profile(path: impl AsRef<Path>) -> Result<(), ProfileError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ProfileError::CreateFailed {
        path: path.to_path_buf(),
        source,
    })?;
    drop(file);

    tracing::trace!(path = %path.display(), "profile file created and closed");
    Ok(())
}
