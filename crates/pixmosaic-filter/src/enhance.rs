//! 2x fractional-neighbor upsampling
//!
//! Doubles a raster by copying source pixels to the even positions and
//! synthesizing every other position from neighbors of the output raster
//! itself, mid-construction.

use crate::{FilterError, FilterResult};
use pixmosaic_core::{Raster, RasterMut};

/// Upscale `src` to a (2W, 2H) raster by neighbor synthesis.
///
/// The output is traversed with x as the outer loop and y as the inner
/// loop, both ascending. Positions with both coordinates even copy the
/// source pixel at the halved coordinates verbatim. All other positions
/// average neighbors read back from the output raster under construction:
/// horizontal neighbors for odd x / even y, vertical neighbors for even
/// x / odd y, and the four diagonals for odd x / odd y.
///
/// The traversal order is load-bearing: neighbors ahead of the cursor are
/// still unwritten and contribute background black to the sums. That is
/// exactly why the average divides by half the neighbor count; for an
/// interior pixel, half of its in-bounds neighbors are always the
/// still-black ones. Two consequences at the trailing edges are part of
/// the contract: a halved count of zero yields black (bottom-row even-x
/// pixels, the far corner), and on the last column the odd/odd sums keep
/// both written diagonals over a halved count of one, so the stored byte
/// can wrap. Kept for output compatibility.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if doubling a dimension
/// overflows.
pub fn enhance(src: &Raster) -> FilterResult<Raster> {
    let (width, height) = src.dimensions();
    let out_w = width
        .checked_mul(2)
        .ok_or_else(|| FilterError::InvalidParameters(format!("doubled width overflows: {width}")))?;
    let out_h = height.checked_mul(2).ok_or_else(|| {
        FilterError::InvalidParameters(format!("doubled height overflows: {height}"))
    })?;

    let out = Raster::new(out_w, out_h)?;
    let mut out_mut = out.try_into_mut().unwrap();

    for x in 0..out_w {
        for y in 0..out_h {
            if x % 2 == 0 && y % 2 == 0 {
                out_mut.set_rgb_unchecked(x, y, src.get_rgb_unchecked(x / 2, y / 2));
            } else {
                let rgb = synthesize(&out_mut, x, y);
                out_mut.set_rgb_unchecked(x, y, rgb);
            }
        }
    }

    Ok(out_mut.into())
}

/// Average the in-bounds neighbors of a non-even output position.
fn synthesize(out: &RasterMut, x: u32, y: u32) -> (u8, u8, u8) {
    let (xi, yi) = (i64::from(x), i64::from(y));
    let x_odd = x % 2 == 1;
    let y_odd = y % 2 == 1;
    let (width, height) = out.dimensions();

    let mut red: u32 = 0;
    let mut green: u32 = 0;
    let mut blue: u32 = 0;
    let mut count: u32 = 0;
    let mut sample = |nx: i64, ny: i64| {
        if nx >= 0 && nx < i64::from(width) && ny >= 0 && ny < i64::from(height) {
            let (r, g, b) = out.get_rgb_unchecked(nx as u32, ny as u32);
            red += u32::from(r);
            green += u32::from(g);
            blue += u32::from(b);
            count += 1;
        }
    };
    if x_odd && !y_odd {
        sample(xi - 1, yi);
        sample(xi + 1, yi);
    } else if !x_odd && y_odd {
        sample(xi, yi - 1);
        sample(xi, yi + 1);
    } else {
        sample(xi - 1, yi - 1);
        sample(xi - 1, yi + 1);
        sample(xi + 1, yi - 1);
        sample(xi + 1, yi + 1);
    }

    // Halved-count normalization; the `as u8` store keeps the low byte
    // when a trailing-column sum passes 255.
    let count = count / 2;
    if count == 0 {
        return (0, 0, 0);
    }
    ((red / count) as u8, (green / count) as u8, (blue / count) as u8)
}
