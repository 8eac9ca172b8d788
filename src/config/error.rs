use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures reading or writing the configuration file, tagged with the path involved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {} is not valid: {message}", path.display())]
    Format { path: PathBuf, message: String },
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, err: serde_json::Error) -> Self {
        ConfigError::Format {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// The file or directory the failed operation touched.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Io { path, .. } | ConfigError::Format { path, .. } => path,
        }
    }
}
