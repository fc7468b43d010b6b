use thiserror::Error;

/// The sampled facial regions contained no pixel that passed the skin filter.
///
/// Recoverable: the caller reports it and lets the user retry with another
/// image. Classification must not run after this outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("could not detect skin in image")]
pub struct NoSkinDetected;

/// Library error type for style-match operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    NoSkin(#[from] NoSkinDetected),

    /// A colour string that is not `#rrggbb`.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// One or more image directories are missing or unreadable.
    #[error("invalid image directory: {0}")]
    BadDir(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Profile store contents could not be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
