//! pixmosaic-filter - Deterministic raster effects
//!
//! This crate provides the five pixmosaic effects as free functions over
//! [`pixmosaic_core::Raster`]:
//!
//! - Block pixelation ([`square_mosaic`])
//! - Quadrant-triangle pixelation ([`triangle_mosaic`])
//! - Circular-dot pixelation ([`circle_mosaic`])
//! - Disc-weighted vignette blur ([`blur`])
//! - 2x fractional-neighbor upsampling ([`enhance`])
//!
//! All effects are deterministic: the same input raster and parameters
//! always produce an identical output raster, boundary artifacts included.

pub mod blur;
pub mod circle;
pub mod enhance;
mod error;
pub mod square;
pub mod triangle;

pub use error::{FilterError, FilterResult};

pub use blur::blur;
pub use circle::circle_mosaic;
pub use enhance::enhance;
pub use square::square_mosaic;
pub use triangle::triangle_mosaic;
