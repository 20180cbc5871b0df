use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Pixel({col}, {row}) does not exist. The image size is: {width}x{height}")]
    OutOfRange {
        col: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    #[error("Can't open {}: {source}", .path.display())]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported colour space: {0}")]
    UnsupportedColorSpace(String),

    #[error("JPEG codec not supported in this build")]
    CodecUnavailable,

    #[error("Failed to decode JPEG image: {0}")]
    DecodeError(String),

    #[error("Failed to encode JPEG image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={width}, height={height}, pixel count={len}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ImageError {
    pub(crate) fn cannot_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CannotOpen {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;
