use thiserror::Error;

use crate::image_io::ImageIoError;

#[derive(Debug, Error)]
pub enum VrshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image encode error: {0}")]
    Encode(String),

    #[error("Pixel comparison error: {0}")]
    Comparison(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VrshotError {
    pub fn comparison(message: impl Into<String>) -> Self {
        VrshotError::Comparison(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        VrshotError::Config(message.into())
    }
}

impl From<ImageIoError> for VrshotError {
    fn from(err: ImageIoError) -> Self {
        match err {
            ImageIoError::Decode(e) => VrshotError::Decode(e),
            ImageIoError::NotFound(path) => {
                VrshotError::Config(format!("File not found: {}", path))
            }
            ImageIoError::Encode(msg) => VrshotError::Encode(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, VrshotError>;
