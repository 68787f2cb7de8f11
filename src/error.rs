//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::emit::EmitError;
use crate::syntax::ParseError;

/// Any fatal condition of a conversion run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Emit(#[from] EmitError),

    /// IO error reading the input or writing the output.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
