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

//! Integer line walker
//!
//! Implements line rasterization in the spirit of Bresenham's algorithm, but
//! in closed form: the minor-axis offset after `k` major-axis steps is
//! `round(k * minor / major)` with ties rounded up, which is exactly what the
//! incremental error-term loop produces. The closed form lets the walker
//! start at any step, so clipping to the grid costs nothing and a segment
//! with far-away endpoints never loops over cells that cannot be written.
//!
//! # Symmetry
//!
//! The walk always starts from the endpoint with the smaller major-axis
//! coordinate. Both orderings of the same two endpoints therefore walk the
//! same cells.

/// Cell coordinates are clamped to this magnitude
///
/// Keeps every intermediate product well inside `i128` while still being far
/// outside any supported grid.
const COORD_LIMIT: i64 = 1 << 40;

/// Map a real coordinate to the index of the cell containing it
///
/// Uses `floor`, so negative coordinates round toward negative infinity.
/// Returns `None` for NaN and infinities.
#[inline]
pub(crate) fn cell_of(v: f64) -> Option<i64> {
    if !v.is_finite() {
        return None;
    }
    Some((v.floor() as i64).clamp(-COORD_LIMIT, COORD_LIMIT))
}

/// A line segment between two cells
///
/// # Examples
///
/// ```
/// use rasterlab::core::Segment;
///
/// let segment = Segment::new((0, 0), (4, 2));
/// let cells: Vec<_> = segment.cells().collect();
/// assert_eq!(cells, vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Walk origin (smaller major-axis coordinate)
    start: (i64, i64),

    /// Walk destination
    end: (i64, i64),
}

impl Segment {
    /// Create a segment between two cells
    ///
    /// The endpoints are reordered so the walk starts at the smaller
    /// major-axis coordinate; `Segment::new(a, b) == Segment::new(b, a)`.
    pub fn new(a: (i64, i64), b: (i64, i64)) -> Self {
        let clamp = |(x, y): (i64, i64)| {
            (
                x.clamp(-COORD_LIMIT, COORD_LIMIT),
                y.clamp(-COORD_LIMIT, COORD_LIMIT),
            )
        };
        let (a, b) = (clamp(a), clamp(b));

        let x_major = (b.0 - a.0).abs() >= (b.1 - a.1).abs();
        let reversed = if x_major {
            (b.0, b.1) < (a.0, a.1)
        } else {
            (b.1, b.0) < (a.1, a.0)
        };

        if reversed {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Create a segment from two real-valued points
    ///
    /// Each endpoint maps to the cell containing it. Returns `None` if any
    /// coordinate is not finite.
    pub fn from_points(a: (f64, f64), b: (f64, f64)) -> Option<Self> {
        Some(Self::new(
            (cell_of(a.0)?, cell_of(a.1)?),
            (cell_of(b.0)?, cell_of(b.1)?),
        ))
    }

    pub fn start(&self) -> (i64, i64) {
        self.start
    }

    pub fn end(&self) -> (i64, i64) {
        self.end
    }

    /// Whether x is the major (stepping) axis
    #[inline]
    pub fn is_x_major(&self) -> bool {
        self.dx().abs() >= self.dy().abs()
    }

    /// Number of major-axis steps; the segment has `steps() + 1` cells
    pub fn steps(&self) -> i64 {
        self.dx().abs().max(self.dy().abs())
    }

    /// Cell reached after `k` major-axis steps (`0 <= k <= steps()`)
    pub fn cell_at(&self, k: i64) -> (i64, i64) {
        let (dx, dy) = (self.dx(), self.dy());
        if self.is_x_major() {
            let y = self.start.1 + dy.signum() * minor_offset(k, dy.abs(), dx.abs());
            (self.start.0 + k, y)
        } else {
            let x = self.start.0 + dx.signum() * minor_offset(k, dx.abs(), dy.abs());
            (x, self.start.1 + k)
        }
    }

    /// Iterate over every cell of the segment, start to end
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (0..=self.steps()).map(move |k| self.cell_at(k))
    }

    /// Iterate over the cells whose major-axis coordinate lies in `0..size`
    ///
    /// Cells may still fall outside the grid on the minor axis; the caller
    /// clips those on write.
    pub fn cells_within(&self, size: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
        // The major axis always advances by +1 per step
        let origin = if self.is_x_major() {
            self.start.0
        } else {
            self.start.1
        };
        let first = (-origin).max(0);
        let last = (size - 1 - origin).min(self.steps());

        (first..=last).map(move |k| self.cell_at(k))
    }

    /// Horizontal extent of the segment's cells on row `y`
    ///
    /// The cells of a segment on any one row are contiguous. Returns the
    /// inclusive `(x_min, x_max)` range, or `None` if the segment has no cell
    /// on that row.
    pub fn row_span(&self, y: i64) -> Option<(i64, i64)> {
        let (dx, dy) = (self.dx(), self.dy());

        if !self.is_x_major() {
            // One cell per row, walking upward (dy > 0)
            let m = y - self.start.1;
            if m < 0 || m > dy {
                return None;
            }
            let (x, _) = self.cell_at(m);
            return Some((x, x));
        }

        let ady = dy.abs();
        let m = (y - self.start.1) * dy.signum();
        if ady == 0 {
            return (y == self.start.1).then_some((self.start.0, self.end.0));
        }
        if m < 0 || m > ady {
            return None;
        }

        // Steps k with round(k * ady / dx) == m satisfy
        // (2m - 1) * dx <= 2k * ady < (2m + 1) * dx
        let (dx, ady, m) = (dx as i128, ady as i128, m as i128);
        let k_lo = div_ceil((2 * m - 1) * dx, 2 * ady).max(0);
        let k_hi = (div_ceil((2 * m + 1) * dx, 2 * ady) - 1).min(dx);
        if k_lo > k_hi {
            return None;
        }

        let x0 = self.start.0;
        Some((x0 + k_lo as i64, x0 + k_hi as i64))
    }

    #[inline]
    fn dx(&self) -> i64 {
        self.end.0 - self.start.0
    }

    #[inline]
    fn dy(&self) -> i64 {
        self.end.1 - self.start.1
    }
}

/// `round(k * minor / major)`, ties rounded up
#[inline]
fn minor_offset(k: i64, minor: i64, major: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let (k, minor, major) = (k as i128, minor as i128, major as i128);
    ((2 * k * minor + major) / (2 * major)) as i64
}

/// Ceiling division for a positive divisor
#[inline]
fn div_ceil(n: i128, d: i128) -> i128 {
    -((-n).div_euclid(d))
}
