//! Error types for pixmosaic-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Pixmosaic error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Division count outside the valid range (must be >= 1)
    #[error("invalid division count: {0}")]
    InvalidDivisions(u32),

    /// Division count too large for the image: the cell size rounds to zero
    #[error("division count {divisions} exceeds image dimension {dimension}")]
    DivisionsExceedImage { divisions: u32, dimension: u32 },

    /// Pixel coordinates out of bounds
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixmosaic operations
pub type Result<T> = std::result::Result<T, Error>;
