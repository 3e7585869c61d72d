//! Region partitioning
//!
//! Splits a raster extent into an ordered grid of rectangular cells. The
//! two sizing policies are deliberately asymmetric: proportional
//! partitioning always covers the whole raster (a remainder cell runs to
//! the true edge), while square partitioning leaves a trailing strip
//! unpartitioned when a dimension is not an exact multiple of the cell
//! size. Renderers consume the two policies differently, so they are kept
//! as distinct modes rather than unified.

use crate::error::{Error, Result};

/// Inclusive cell bounds on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First coordinate covered by the cell
    pub start: u32,
    /// Last coordinate covered by the cell
    pub end: u32,
}

/// Inclusive rectangular cell, the cross product of an x-span and a y-span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start_x: u32,
    pub end_x: u32,
    pub start_y: u32,
    pub end_y: u32,
}

impl Region {
    /// Build a region from per-axis spans.
    pub fn from_spans(x: Span, y: Span) -> Self {
        Region {
            start_x: x.start,
            end_x: x.end,
            start_y: y.start,
            end_y: y.end,
        }
    }

    /// Horizontal extent: the distance between the inclusive bounds
    /// (one less than the pixel count).
    #[inline]
    pub fn extent_x(&self) -> u32 {
        self.end_x - self.start_x
    }

    /// Vertical extent: the distance between the inclusive bounds.
    #[inline]
    pub fn extent_y(&self) -> u32 {
        self.end_y - self.start_y
    }
}

/// Cell sizing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionMode {
    /// Per-axis cell size `dim / divisions`. A remainder cell up to the
    /// true edge guarantees full coverage of the raster.
    Proportional,
    /// Square cells sized `min(width, height) / divisions`. When a
    /// dimension is not an exact multiple of the cell size, the trailing
    /// strip is left unpartitioned.
    Square,
}

/// Ordered grid of cells produced by [`partition`].
#[derive(Debug, Clone)]
pub struct Partition {
    x_spans: Vec<Span>,
    y_spans: Vec<Span>,
}

impl Partition {
    /// Cell bounds along the x axis, in ascending order.
    pub fn x_spans(&self) -> &[Span] {
        &self.x_spans
    }

    /// Cell bounds along the y axis, in ascending order.
    pub fn y_spans(&self) -> &[Span] {
        &self.y_spans
    }

    /// Cells in render order: x-major, y-minor.
    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        let y_spans = &self.y_spans;
        self.x_spans.iter().flat_map(move |x| {
            let x = *x;
            y_spans.iter().map(move |y| Region::from_spans(x, *y))
        })
    }
}

/// Split a `width` x `height` extent into a grid of cells.
///
/// Cells are generated greedily along each axis: cell `i` covers
/// `[cell_size * i, cell_size * (i + 1) - 1]` while the next full cell
/// still fits. In proportional mode, if the last full cell stops short of
/// the edge, one remainder cell covering the rest of the axis is appended.
///
/// # Errors
///
/// - [`Error::InvalidDivisions`] if `divisions` is 0.
/// - [`Error::DivisionsExceedImage`] if the computed cell size rounds to
///   zero on either axis (the greedy generation would never terminate).
pub fn partition(width: u32, height: u32, divisions: u32, mode: PartitionMode) -> Result<Partition> {
    if divisions == 0 {
        return Err(Error::InvalidDivisions(divisions));
    }

    let (cell_w, cell_h) = match mode {
        PartitionMode::Proportional => (width / divisions, height / divisions),
        PartitionMode::Square => {
            let cell = width.min(height) / divisions;
            (cell, cell)
        }
    };

    let proportional = mode == PartitionMode::Proportional;
    Ok(Partition {
        x_spans: axis_spans(width, cell_w, divisions, proportional)?,
        y_spans: axis_spans(height, cell_h, divisions, proportional)?,
    })
}

/// Generate the spans for one axis.
fn axis_spans(dim: u32, cell: u32, divisions: u32, proportional: bool) -> Result<Vec<Span>> {
    if cell == 0 {
        return Err(Error::DivisionsExceedImage {
            divisions,
            dimension: dim,
        });
    }

    // u64 arithmetic so `cell * (i + 1)` cannot wrap near u32::MAX.
    let dim64 = u64::from(dim);
    let cell64 = u64::from(cell);
    let mut spans = Vec::new();
    let mut i: u64 = 0;
    while dim64 >= cell64 * (i + 1) {
        spans.push(Span {
            start: (cell64 * i) as u32,
            end: (cell64 * (i + 1) - 1) as u32,
        });
        i += 1;
    }

    if proportional {
        if let Some(last) = spans.last() {
            if last.end < dim - 1 {
                spans.push(Span {
                    start: (cell64 * i) as u32,
                    end: dim - 1,
                });
            }
        }
    }

    Ok(spans)
}
