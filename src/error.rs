//! Error types for the ImageNet to YOLO conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the label table or converting annotations.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An annotation file is not valid XML or lacks a required element.
    #[error("malformed annotation {path}: {source}")]
    MalformedXml {
        path: PathBuf,
        source: quick_xml::DeError,
    },

    /// An annotation declares an image with a zero dimension.
    #[error("invalid image size {width}x{height} in {path}")]
    InvalidImageSize {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    /// A row of the label table could not be parsed.
    #[error("invalid label map {path} at line {line}: {message}")]
    InvalidLabelMap {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The glob pattern built from a class directory is invalid.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error concerns a single annotation file and may be skipped
    /// under [`crate::config::ErrorPolicy::Skip`].
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            ConvertError::MalformedXml { .. } | ConvertError::InvalidImageSize { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
