//! Disc-weighted vignette blur
//!
//! A per-pixel neighborhood average with a disc-shaped kernel: plain
//! axis-aligned samples at every distance up to the radius, plus
//! distance-weighted samples on the enclosing arc.

use crate::FilterResult;
use pixmosaic_core::{ColorAccumulator, Raster};

/// Blur `src` with a disc-shaped weighted neighborhood.
///
/// For every pixel, the four axis neighbors at each distance `1..=radius`
/// contribute with unit weight. Then for each horizontal offset below
/// `radius`, the conjugate vertical offset on the arc of radius `radius`
/// is derived and the four corner points at that offset pair contribute
/// with a coefficient equal to their distance from the center; for a zero
/// horizontal offset two of the four arms coincide, so the topmost and
/// bottommost arc points are sampled twice. Every sample is bounds-checked
/// and skipped outside the raster.
///
/// The pixel itself is never sampled. With `radius == 0` nothing is
/// accumulated at all and the zero-count average leaves the whole output
/// black; callers get exactly the degenerate result they asked for.
///
/// # Errors
///
/// Returns an error only if the output raster cannot be allocated.
pub fn blur(src: &Raster, radius: u32) -> FilterResult<Raster> {
    let (width, height) = src.dimensions();

    let out = Raster::new(width, height)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for x in 0..width {
        for y in 0..height {
            let mut acc = ColorAccumulator::new();

            for i in 1..=radius {
                if x >= i {
                    acc.accumulate(src.get_rgb_unchecked(x - i, y), 1.0);
                }
                if x + i < width {
                    acc.accumulate(src.get_rgb_unchecked(x + i, y), 1.0);
                }
                if y >= i {
                    acc.accumulate(src.get_rgb_unchecked(x, y - i), 1.0);
                }
                if y + i < height {
                    acc.accumulate(src.get_rgb_unchecked(x, y + i), 1.0);
                }
            }

            for x_ref in 0..radius {
                let ratio = f64::from(x_ref) / f64::from(radius);
                let y_ref = ((1.0 - ratio * ratio).sqrt() * f64::from(radius)) as u32;
                let coef = f64::from(x_ref * x_ref + y_ref * y_ref).sqrt();
                if x >= x_ref && y >= y_ref {
                    acc.accumulate(src.get_rgb_unchecked(x - x_ref, y - y_ref), coef);
                }
                if x + x_ref < width && y + y_ref < height {
                    acc.accumulate(src.get_rgb_unchecked(x + x_ref, y + y_ref), coef);
                }
                if y >= y_ref && x + x_ref < width {
                    acc.accumulate(src.get_rgb_unchecked(x + x_ref, y - y_ref), coef);
                }
                if x >= x_ref && y + y_ref < height {
                    acc.accumulate(src.get_rgb_unchecked(x - x_ref, y + y_ref), coef);
                }
            }

            out_mut.set_rgb_unchecked(x, y, acc.average());
        }
    }

    Ok(out_mut.into())
}
