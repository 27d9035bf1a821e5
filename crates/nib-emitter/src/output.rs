//! Emitted files and writing them to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Service interface implemented by every generated `ProviderService`.
pub const PROVIDER_SERVICE_CLASS: &str = "org.nibeans.internal.BeanProviderService";

/// Manifest that registers the generated `ProviderService`.
pub const SERVICE_MANIFEST_PATH: &str =
    "META-INF/services/org.nibeans.internal.BeanProviderService";

#[derive(Debug, Error)]
pub enum EmitError {
    /// The OS error is part of the message, not a chained source.
    #[error("failed to write {}: {error}", path.display())]
    Io { path: PathBuf, error: io::Error },

    #[error("beans {first} and {second} would both be implemented by {class}")]
    ImplClassClash {
        first: String,
        second: String,
        class: String,
    },
}

/// Generated container source and service manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOutput {
    /// Relative path of the container source (`org/x/Beans.java`).
    pub source_path: PathBuf,
    pub source: String,
    pub manifest_path: PathBuf,
    pub manifest: String,
}

impl EmitOutput {
    /// Write both files below `dir`, creating directories as needed.
    /// Returns the written paths.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>, EmitError> {
        let files = [
            (&self.source_path, &self.source),
            (&self.manifest_path, &self.manifest),
        ];
        let mut written = Vec::with_capacity(files.len());
        for (relative, contents) in files {
            let path = dir.join(relative);
            write_file(&path, contents)?;
            debug!(path = %path.display(), bytes = contents.len(), "wrote generated file");
            written.push(path);
        }
        Ok(written)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), EmitError> {
    let io_error = |error| EmitError::Io {
        path: path.to_path_buf(),
        error,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, contents).map_err(io_error)
}

#[cfg(test)]
#[path = "../tests/output_tests.rs"]
mod tests;
