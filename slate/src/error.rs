//! Toolkit error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlateError {
    #[error("font parse error: {0}")]
    Font(&'static str),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
