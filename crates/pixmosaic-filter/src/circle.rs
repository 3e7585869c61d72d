//! Circular-dot mosaic
//!
//! Each square partition cell is reduced to its average color and redrawn
//! as an approximate disc around the cell center.

use crate::FilterResult;
use pixmosaic_core::{ColorAccumulator, PartitionMode, Raster, RasterMut, Region, partition};

/// Render a dot-pixelated copy of `src`.
///
/// The raster is split into square cells (`min(W, H) / divisions` per
/// side). Each cell's truncated average color is rasterized as a disc
/// approximated by two families of mirrored point sweeps, one driven by
/// each half-extent of the cell.
///
/// Known artifacts, all kept for output compatibility rather than patched:
/// the sweeps do not cover the cell corners or the exact center, cells
/// smaller than 4 pixels per side plot nothing at all, and when a dimension
/// is not an exact multiple of the cell size the trailing strip is never
/// visited. Unvisited pixels keep the background color of a fresh raster.
///
/// # Errors
///
/// Returns an error if `divisions` is 0 or exceeds `min(W, H)`.
pub fn circle_mosaic(src: &Raster, divisions: u32) -> FilterResult<Raster> {
    let (width, height) = src.dimensions();
    let grid = partition(width, height, divisions, PartitionMode::Square)?;

    let out = Raster::new(width, height)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for cell in grid.regions() {
        render_cell(src, &mut out_mut, cell);
    }

    Ok(out_mut.into())
}

fn render_cell(src: &Raster, out: &mut RasterMut, cell: Region) {
    let mut acc = ColorAccumulator::new();
    for x in cell.start_x..=cell.end_x {
        for y in cell.start_y..=cell.end_y {
            acc.accumulate(src.get_rgb_unchecked(x, y), 1.0);
        }
    }
    let avg = acc.average();

    let half_w = (cell.extent_x() + 1) / 2;
    let half_h = (cell.extent_y() + 1) / 2;
    let cx = cell.start_x + half_w;
    let cy = cell.start_y + half_h;

    // Width-driven family: sweep x offsets, derive y on each arc.
    for extent in 0..half_w {
        for dx in 0..extent {
            let dy = arc_offset(dx, extent);
            plot_mirrored(out, cx, cy, dx, dy, avg);
        }
    }
    // Height-driven family: sweep y offsets, derive x.
    for extent in 0..half_h {
        for dy in 0..extent {
            let dx = arc_offset(dy, extent);
            plot_mirrored(out, cx, cy, dx, dy, avg);
        }
    }
}

/// Conjugate offset on the arc of radius `extent`: `floor(sqrt(1 - (o/e)^2) * e)`.
fn arc_offset(offset: u32, extent: u32) -> u32 {
    let ratio = f64::from(offset) / f64::from(extent);
    ((1.0 - ratio * ratio).sqrt() * f64::from(extent)) as u32
}

/// Plot a point mirrored into all four quadrants around (cx, cy),
/// skipping mirror positions that fall outside the raster.
fn plot_mirrored(out: &mut RasterMut, cx: u32, cy: u32, dx: u32, dy: u32, rgb: (u8, u8, u8)) {
    let (width, height) = out.dimensions();
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let (dx, dy) = (i64::from(dx), i64::from(dy));
    for (x, y) in [
        (cx + dx, cy + dy),
        (cx + dx, cy - dy),
        (cx - dx, cy + dy),
        (cx - dx, cy - dy),
    ] {
        if x >= 0 && x < i64::from(width) && y >= 0 && y < i64::from(height) {
            out.set_rgb_unchecked(x as u32, y as u32, rgb);
        }
    }
}
