//! Error types for rendering.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    InvalidBuffer {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot create a {width}x{height} canvas")]
    Canvas { width: usize, height: usize },

    #[error("Palette has {colors} colors for {bands} bands")]
    PaletteMismatch { bands: usize, colors: usize },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] std::io::Error),
}
