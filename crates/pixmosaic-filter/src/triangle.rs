//! Quadrant-triangle mosaic
//!
//! Each partition cell is conceptually split into four triangles (top,
//! left, right, bottom) meeting at the cell's scaled diagonals; each
//! triangle is filled with its own average color.

use crate::FilterResult;
use pixmosaic_core::{ColorAccumulator, PartitionMode, Raster, RasterMut, Region, partition};

/// Render a triangle-pixelated copy of `src`.
///
/// The raster is split into `divisions` proportional cells per axis. Per
/// cell, four accumulators gather the pixels of the four diagonal-bounded
/// triangles, then a second pass assigns every pixel the average of the
/// first triangle it belongs to, in precedence order top, left, right,
/// bottom.
///
/// The membership gates use non-strict inequalities on both passes: a pixel
/// exactly on a diagonal is counted into two adjacent triangle sums, and on
/// the fill pass the precedence order decides its color. Both effects are
/// kept for output compatibility.
///
/// # Errors
///
/// Returns an error if `divisions` is 0 or exceeds an image dimension.
pub fn triangle_mosaic(src: &Raster, divisions: u32) -> FilterResult<Raster> {
    let (width, height) = src.dimensions();
    let grid = partition(width, height, divisions, PartitionMode::Proportional)?;

    let out = Raster::new(width, height)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for cell in grid.regions() {
        render_cell(src, &mut out_mut, cell);
    }

    Ok(out_mut.into())
}

fn render_cell(src: &Raster, out: &mut RasterMut, cell: Region) {
    // The diagonals are scaled by the cell aspect so they meet at the
    // center of non-square cells; a zero-height cell degenerates to 1.
    let ratio = if cell.extent_y() != 0 {
        f64::from(cell.extent_x()) / f64::from(cell.extent_y())
    } else {
        1.0
    };

    let mut top = ColorAccumulator::new();
    let mut left = ColorAccumulator::new();
    let mut right = ColorAccumulator::new();
    let mut bottom = ColorAccumulator::new();

    for x in cell.start_x..=cell.end_x {
        for y in cell.start_y..=cell.end_y {
            let rgb = src.get_rgb_unchecked(x, y);
            let dx = f64::from(x - cell.start_x);
            let dxe = f64::from(cell.end_x - x);
            let dy = f64::from(y - cell.start_y) * ratio;
            top.accumulate_if(rgb, 1.0, (dy, dx, dy, dxe));
            left.accumulate_if(rgb, 1.0, (dx, dy, dy, dxe));
            right.accumulate_if(rgb, 1.0, (dy, dx, dxe, dy));
            bottom.accumulate_if(rgb, 1.0, (dx, dy, dxe, dy));
        }
    }

    let top_avg = top.average();
    let left_avg = left.average();
    let right_avg = right.average();
    let bottom_avg = bottom.average();

    for x in cell.start_x..=cell.end_x {
        for y in cell.start_y..=cell.end_y {
            let dx = f64::from(x - cell.start_x);
            let dxe = f64::from(cell.end_x - x);
            let dy = f64::from(y - cell.start_y) * ratio;
            // First match wins; diagonal pixels resolve by precedence.
            let fill = if dx >= dy && dxe >= dy {
                top_avg
            } else if dx <= dy && dxe >= dy {
                left_avg
            } else if dx >= dy && dxe <= dy {
                right_avg
            } else {
                bottom_avg
            };
            out.set_rgb_unchecked(x, y, fill);
        }
    }
}
