//! The raster image container
//!
//! `Raster` is the image type every pixmosaic operation consumes and
//! produces: a width x height grid of RGB triples.
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, `0xRRGGBBAA`, row-major
//! - Row `y` starts at word index `y * width`
//! - New rasters are zero-filled, so every pixel reads as black until
//!   written; several renderers rely on that background being observable
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership). To modify
//! pixel data, convert to [`RasterMut`] via [`Raster::try_into_mut`] or
//! [`Raster::to_mut`], then convert back with `Into<Raster>`. A renderer
//! mutates only the output raster it is constructing; once converted back,
//! the result is immutable.

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug, Clone)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data, one word per pixel
    data: Vec<u32>,
}

impl RasterData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Immutable RGB raster
///
/// # Examples
///
/// ```
/// use pixmosaic_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// assert_eq!(raster.get_rgb(0, 0), Some((0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions.
    ///
    /// The image data is initialized to zero (black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data = vec![0u32; (width as usize) * (height as usize)];
        let inner = RasterData {
            width,
            height,
            data,
        };

        Ok(Raster {
            inner: Arc::new(inner),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Check whether (x, y) lies inside the raster.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Get RGB values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if !self.contains(x, y) {
            return None;
        }
        Some(color::extract_rgb(self.inner.data[self.inner.index(x, y)]))
    }

    /// Get RGB values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        color::extract_rgb(self.inner.data[self.inner.index(x, y)])
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a new raster with the same dimensions as this one.
    ///
    /// The image data is initialized to zero.
    pub fn create_template(&self) -> Self {
        let data = vec![0u32; (self.inner.width as usize) * (self.inner.height as usize)];
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data,
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable raster
///
/// Allows modification of image data during construction. Convert back to
/// an immutable [`Raster`] using `Into<Raster>`. Exclusive access is
/// enforced at compile time.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Check whether (x, y) lies inside the raster.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.inner.width && y < self.inner.height
    }

    /// Get RGB values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds. Reading back pixels
    /// already written in the current pass is allowed; the enhance renderer
    /// depends on it.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if !self.contains(x, y) {
            return None;
        }
        Some(color::extract_rgb(self.inner.data[self.inner.index(x, y)]))
    }

    /// Get RGB values without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        color::extract_rgb(self.inner.data[self.inner.index(x, y)])
    }

    /// Set an RGB pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: (u8, u8, u8)) -> Result<()> {
        if !self.contains(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_rgb_unchecked(x, y, rgb);
        Ok(())
    }

    /// Set an RGB pixel without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, (r, g, b): (u8, u8, u8)) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = color::compose_rgb(r, g, b);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster.inner),
        }
    }
}
