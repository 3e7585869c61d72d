//! pixmosaic-test - Regression test support
//!
//! This crate backs the `*_reg.rs` integration tests:
//!
//! - [`RegParams`] - indexed value/raster comparisons with failure
//!   accounting and a final pass/fail gate
//! - Synthetic raster constructors - effects are exercised against
//!   in-memory images, since decoding real files is outside the library
//!
//! # Usage
//!
//! ```
//! use pixmosaic_test::{RegParams, uniform_raster};
//!
//! let mut rp = RegParams::new("example");
//! let raster = uniform_raster(4, 4, (255, 0, 0)).unwrap();
//! rp.compare_values(4.0, raster.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to narrate without failing

mod params;

pub use params::{RegParams, RegTestMode};

use pixmosaic_core::{Raster, Result};

/// Build a raster by evaluating `f` at every coordinate.
pub fn raster_from_fn(
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> (u8, u8, u8),
) -> Result<Raster> {
    let raster = Raster::new(width, height)?;
    let mut m = raster.try_into_mut().expect("fresh raster is sole-owned");
    for y in 0..height {
        for x in 0..width {
            m.set_rgb_unchecked(x, y, f(x, y));
        }
    }
    Ok(m.into())
}

/// Build a raster where every pixel has the same color.
pub fn uniform_raster(width: u32, height: u32, rgb: (u8, u8, u8)) -> Result<Raster> {
    raster_from_fn(width, height, |_, _| rgb)
}
