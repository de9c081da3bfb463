//! Error types for container parsing and extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a `.resources` container
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a resources file (magic 0x{0:08X})")]
    BadMagic(u32),

    #[error("Unsupported resource set version {0}")]
    UnsupportedVersion(i32),

    #[error("Malformed container: {0}")]
    Malformed(String),

    #[error("Resource name at position {0} is not valid UTF-16")]
    InvalidName(u64),

    #[error("Unknown type code 0x{code:X} for resource '{key}'")]
    UnknownTypeCode { key: String, code: i32 },
}

/// Errors raised by an extraction run
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ExtractError {
    /// Process exit code for this error: 2 for user errors, 1 for run errors
    pub fn exit_code(&self) -> u8 {
        match self {
            ExtractError::InputNotFound(_) => 2,
            _ => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
