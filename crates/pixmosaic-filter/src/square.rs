//! Block ("square") mosaic
//!
//! The simplest of the mosaic renderers: every partition cell is replaced
//! by its own average color.

use crate::FilterResult;
use pixmosaic_core::{ColorAccumulator, PartitionMode, Raster, partition};

/// Render a block-pixelated copy of `src`.
///
/// The raster is split into `divisions` proportional cells per axis (plus
/// remainder cells up to the true edges, so the whole image is covered).
/// Every pixel of a cell is replaced by the cell's truncated average color.
///
/// Output size equals input size. A cell that is already uniform is its own
/// average, so re-applying the operation with the same `divisions` is a
/// fixed point.
///
/// # Errors
///
/// Returns an error if `divisions` is 0 or exceeds an image dimension.
pub fn square_mosaic(src: &Raster, divisions: u32) -> FilterResult<Raster> {
    let (width, height) = src.dimensions();
    let grid = partition(width, height, divisions, PartitionMode::Proportional)?;

    let out = Raster::new(width, height)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for cell in grid.regions() {
        let mut acc = ColorAccumulator::new();
        for x in cell.start_x..=cell.end_x {
            for y in cell.start_y..=cell.end_y {
                acc.accumulate(src.get_rgb_unchecked(x, y), 1.0);
            }
        }
        let avg = acc.average();
        for x in cell.start_x..=cell.end_x {
            for y in cell.start_y..=cell.end_y {
                out_mut.set_rgb_unchecked(x, y, avg);
            }
        }
    }

    Ok(out_mut.into())
}
