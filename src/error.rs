//! Error types for map2svg operations.

use thiserror::Error;

/// Errors that can occur while loading an image map or building its overlay.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File should be .map or .html: {0}")]
    InvalidExtension(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),

    #[error("Ambiguous markup: {0}")]
    AmbiguousMarkup(String),

    #[error(
        "Cannot determine image dimensions. Does <img> have both a width and height?\nImage:\n\t{0}"
    )]
    MissingImageDimensions(String),

    #[error("Unsupported area shape: {0:?}")]
    UnsupportedShape(String),

    #[error("Missing coords on area: {0}")]
    MissingCoordinates(String),

    #[error("Malformed coords {coords:?}: {reason}")]
    MalformedCoordinates { coords: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
