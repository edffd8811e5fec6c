// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::line::{cell_of, Segment};
use crate::core::config::GridConfig;
use crate::core::error::{RasterError, Result};

/// Largest supported grid edge length
pub const MAX_GRID_SIZE: usize = 4096;

/// Background value used by [`RasterGrid::new`]
const DEFAULT_BACKGROUND: f32 = 0.0;

/// Fill value used by [`RasterGrid::new`]
const DEFAULT_FILL: f32 = 1.0;

/// Fixed-size square coverage grid
///
/// The grid is allocated once, cleared at the start of every frame, drawn
/// into during the frame and then handed to a display as a flat slice.
///
/// # Examples
///
/// ```
/// use rasterlab::core::RasterGrid;
///
/// let mut grid = RasterGrid::new(40).unwrap();
/// grid.set_pixel(3, 4, Some(0.5));
/// assert_eq!(grid.get(3, 4), Some(0.5));
/// assert_eq!(grid.cells()[3 + 40 * 4], 0.5);
///
/// // Out of range writes are ignored
/// grid.set_pixel(-5, 1000, Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGrid {
    /// Edge length in cells
    size: usize,

    /// Row-major cell values (`i + size * j`)
    cells: Vec<f32>,

    /// Value written by `clear`
    background: f32,

    /// Value written when no color is given
    fill: f32,
}

impl RasterGrid {
    /// Create a grid with background 0.0 and fill 1.0
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidGridSize`] if `size` is zero or larger
    /// than [`MAX_GRID_SIZE`].
    pub fn new(size: usize) -> Result<Self> {
        Self::with_colors(size, DEFAULT_BACKGROUND, DEFAULT_FILL)
    }

    /// Create a grid with explicit background and fill values
    ///
    /// The grid starts out cleared to `background`.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidGridSize`] for an unsupported size and
    /// [`RasterError::InvalidColor`] if either value is outside `[0.0, 1.0]`.
    pub fn with_colors(size: usize, background: f32, fill: f32) -> Result<Self> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(RasterError::InvalidGridSize {
                size,
                max: MAX_GRID_SIZE,
            });
        }
        check_color("background", background)?;
        check_color("fill", fill)?;

        log::debug!(
            "Allocating {}x{} grid (background={}, fill={})",
            size,
            size,
            background,
            fill
        );

        Ok(Self {
            size,
            cells: vec![background; size * size],
            background,
            fill,
        })
    }

    /// Create a grid from a loaded configuration
    pub fn from_config(config: &GridConfig) -> Result<Self> {
        Self::with_colors(config.size, config.background, config.fill)
    }

    /// Edge length in cells
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn background(&self) -> f32 {
        self.background
    }

    pub fn fill(&self) -> f32 {
        self.fill
    }

    /// Read-only view of all cells in row-major order
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Iterate over rows, bottom row (`j = 0`) first
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[f32]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Read a single cell
    ///
    /// Returns `None` for coordinates outside the grid.
    pub fn get(&self, i: i64, j: i64) -> Option<f32> {
        self.index(i, j).map(|idx| self.cells[idx])
    }

    /// Number of cells whose value differs from the background
    pub fn covered_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != self.background).count()
    }

    /// Reset every cell to the background value
    pub fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    /// Write `color` (or the fill value) into cell `(i, j)`
    ///
    /// Coordinates outside the grid are ignored. Colors are clamped to
    /// `[0.0, 1.0]`; a NaN color writes nothing.
    #[inline(always)]
    pub fn set_pixel(&mut self, i: i64, j: i64, color: Option<f32>) {
        if let Some(color) = self.resolve(color) {
            self.write_cell(i, j, color);
        }
    }

    /// Write the fill value into cell `(i, j)`
    pub fn fill_pixel(&mut self, i: i64, j: i64) {
        self.write_cell(i, j, self.fill);
    }

    /// Rasterize a point into the cell that contains it
    ///
    /// Both coordinates are floored, so `(2.9, 1.9)` lands in `(2, 1)` and
    /// `(-0.5, 0.0)` lands in `(-1, 0)` (outside the grid). Non-finite
    /// coordinates are ignored.
    pub fn rasterize_point(&mut self, x: f64, y: f64, color: Option<f32>) {
        let (Some(i), Some(j)) = (cell_of(x), cell_of(y)) else {
            log::trace!("Skipping non-finite point ({}, {})", x, y);
            return;
        };
        self.set_pixel(i, j, color);
    }

    /// Rasterize a line segment between two real-valued points
    ///
    /// The end cells are the cells containing each endpoint, and every cell
    /// of the integer walk between them is written, both ends inclusive.
    /// Swapping the endpoints produces the same cells. A zero-length segment
    /// writes exactly one cell.
    ///
    /// # Arguments
    ///
    /// * `x1`, `y1` - First endpoint
    /// * `x2`, `y2` - Second endpoint
    /// * `color` - Cell value, or `None` for the fill value
    pub fn rasterize_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Option<f32>) {
        let Some(segment) = Segment::from_points((x1, y1), (x2, y2)) else {
            log::trace!(
                "Skipping non-finite line ({}, {}) -> ({}, {})",
                x1,
                y1,
                x2,
                y2
            );
            return;
        };
        if let Some(color) = self.resolve(color) {
            self.stroke(&segment, color);
        }
    }

    /// Write every in-bounds cell of a segment
    pub(super) fn stroke(&mut self, segment: &Segment, color: f32) {
        for (i, j) in segment.cells_within(self.size as i64) {
            self.write_cell(i, j, color);
        }
    }

    /// Fill cells `x_start..=x_end` of row `y`, clipped to the grid
    pub(super) fn draw_span(&mut self, y: i64, x_start: i64, x_end: i64, color: f32) {
        let last = self.size as i64 - 1;
        if !(0..=last).contains(&y) {
            return;
        }

        let x_start = x_start.max(0);
        let x_end = x_end.min(last);
        if x_start > x_end {
            return;
        }

        let row = y as usize * self.size;
        self.cells[row + x_start as usize..=row + x_end as usize].fill(color);
    }

    /// Pick the effective color for a write
    ///
    /// Falls back to the fill value, clamps to `[0.0, 1.0]` and rejects NaN.
    pub(super) fn resolve(&self, color: Option<f32>) -> Option<f32> {
        let color = color.unwrap_or(self.fill);
        if color.is_nan() {
            return None;
        }
        Some(color.clamp(0.0, 1.0))
    }

    #[inline(always)]
    fn write_cell(&mut self, i: i64, j: i64, color: f32) {
        if let Some(idx) = self.index(i, j) {
            self.cells[idx] = color;
        }
    }

    #[inline(always)]
    fn index(&self, i: i64, j: i64) -> Option<usize> {
        let size = self.size as i64;
        if !(0..size).contains(&i) || !(0..size).contains(&j) {
            return None;
        }
        Some((i + size * j) as usize)
    }
}

fn check_color(name: &'static str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(RasterError::InvalidColor { name, value });
    }
    Ok(())
}
