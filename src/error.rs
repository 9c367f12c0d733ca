//! Error type shared by the buffer views, the fill engine and format dispatch.

use thiserror::Error;

use crate::bitmap::BitmapFormat;

/// Errors that can occur while attaching a buffer or filling it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// Width or height is zero.
    #[error("empty buffer: {width}x{height}")]
    EmptyBuffer { width: u32, height: u32 },

    /// Backing memory is shorter than `width * height * bpp`.
    #[error("buffer too small: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    /// The buffer's pixel size does not match the pixel format.
    #[error("pixel size mismatch: format needs {expected} bytes per pixel, buffer has {actual}")]
    PixelSizeMismatch { expected: usize, actual: usize },

    /// Seed coordinate lies outside the buffer.
    #[error("seed ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// The format is known but cannot be filled (float or GPU-backed storage).
    #[error("unsupported bitmap format: {0:?}")]
    UnsupportedFormat(BitmapFormat),

    /// The connected region grew past `FillOptions::max_pixels`.
    #[error("fill region exceeded the limit of {limit} pixels")]
    RegionLimitExceeded { limit: u64 },
}

pub type Result<T> = std::result::Result<T, FillError>;
