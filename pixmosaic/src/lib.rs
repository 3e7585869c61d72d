//! Pixmosaic - deterministic pixel mosaic effects
//!
//! Pixmosaic turns an in-memory RGB raster into stylized variants using a
//! small family of deterministic, integer-truncating effects:
//!
//! - Block pixelation (`square_mosaic`)
//! - Quadrant-triangle pixelation (`triangle_mosaic`)
//! - Circular-dot pixelation (`circle_mosaic`)
//! - Disc-weighted vignette blur (`blur`)
//! - 2x fractional-neighbor upsampling (`enhance`)
//!
//! The library operates purely on the [`Raster`] container; decoding and
//! encoding image files is left to the caller.
//!
//! # Example
//!
//! ```
//! use pixmosaic::{Raster, filter::square_mosaic};
//!
//! let src = Raster::new(8, 8).unwrap();
//! let out = square_mosaic(&src, 2).unwrap();
//! assert_eq!(out.dimensions(), (8, 8));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixmosaic_core::*;

// Re-export the filter crate as a module to avoid name conflicts
pub use pixmosaic_filter as filter;
