use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while registering framework bundles
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to read bundle directory {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read plugin manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write plugin manifest {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
