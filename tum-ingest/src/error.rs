//! Errors raised by the frame reader.

use tum_data::DataError;

/// Errors that can occur while opening a dataset or loading a frame
#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("Index {index} out of range for {len} frames")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Unsupported depth image format: {0}")]
    UnsupportedDepth(String),
}
