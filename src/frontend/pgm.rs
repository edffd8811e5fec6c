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

//! Binary greyscale image display
//!
//! Writes frames as binary PGM (`P5`) images with 8-bit samples. Several
//! frames written to the same stream form a valid multi-image PGM file.
//!
//! # References
//!
//! - [Netpbm PGM format](https://netpbm.sourceforge.net/doc/pgm.html)

use crate::core::error::{RasterError, Result};
use crate::core::frame::{Display, Frame};
use std::io::Write;

/// Maximum sample value written in the header
const MAX_VALUE: u16 = 255;

/// Largest accepted cell enlargement factor
pub const MAX_SCALE: usize = 64;

pub struct PgmDisplay<W: Write> {
    writer: W,

    /// Output pixels per cell along each axis
    scale: usize,
}

impl<W: Write> PgmDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, scale: 1 }
    }

    /// Enlarge every cell to a `scale × scale` block
    ///
    /// The factor is clamped to `1..=MAX_SCALE`.
    pub fn with_scale(mut self, scale: usize) -> Self {
        self.scale = scale.clamp(1, MAX_SCALE);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Convert a coverage value to an 8-bit sample
#[inline]
fn to_sample(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * MAX_VALUE as f32).round() as u8
}

impl<W: Write> Display for PgmDisplay<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        if frame.size == 0 {
            return Ok(());
        }
        let side = frame
            .size
            .checked_mul(self.scale)
            .filter(|&side| side <= crate::core::MAX_GRID_SIZE * MAX_SCALE)
            .ok_or_else(|| {
                RasterError::Display(format!(
                    "{}x{} frame at scale {} is too large",
                    frame.size, frame.size, self.scale
                ))
            })?;
        write!(self.writer, "P5\n{} {}\n{}\n", side, side, MAX_VALUE)?;

        let mut line = Vec::with_capacity(side);
        for row in frame.cells.chunks(frame.size).rev() {
            line.clear();
            for &value in row {
                line.extend(std::iter::repeat_n(to_sample(value), self.scale));
            }
            for _ in 0..self.scale {
                self.writer.write_all(&line)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RasterGrid;

    fn present(grid: &RasterGrid, scale: usize) -> Vec<u8> {
        let mut display = PgmDisplay::new(Vec::new()).with_scale(scale);
        display
            .present(&Frame {
                number: 0,
                size: grid.size(),
                cells: grid.cells(),
            })
            .unwrap();
        display.into_inner()
    }

    #[test]
    fn test_sample_conversion() {
        assert_eq!(to_sample(0.0), 0);
        assert_eq!(to_sample(0.5), 128);
        assert_eq!(to_sample(1.0), 255);
        assert_eq!(to_sample(2.0), 255);
    }

    #[test]
    fn test_header_and_layout() {
        let mut grid = RasterGrid::new(2).unwrap();
        grid.fill_pixel(0, 1);

        let bytes = present(&grid, 1);
        let header = b"P5\n2 2\n255\n";

        assert_eq!(&bytes[..header.len()], header);
        // Top row (j = 1) first
        assert_eq!(&bytes[header.len()..], &[255, 0, 0, 0]);
    }

    #[test]
    fn test_scaled_output_size() {
        let grid = RasterGrid::new(40).unwrap();
        let bytes = present(&grid, 4);
        let header = b"P5\n160 160\n255\n";

        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 160 * 160);
    }

    #[test]
    fn test_scale_replicates_cells() {
        let mut grid = RasterGrid::new(1).unwrap();
        grid.set_pixel(0, 0, Some(0.5));

        let bytes = present(&grid, 2);
        let header = b"P5\n2 2\n255\n";
        assert_eq!(&bytes[header.len()..], &[128, 128, 128, 128]);
    }

    #[test]
    fn test_scale_is_bounded() {
        let grid = RasterGrid::new(1).unwrap();
        let bytes = present(&grid, usize::MAX);
        let header = format!("P5\n{0} {0}\n255\n", MAX_SCALE);

        assert_eq!(&bytes[..header.len()], header.as_bytes());
        assert_eq!(bytes.len(), header.len() + MAX_SCALE * MAX_SCALE);
    }

    #[test]
    fn test_oversized_frame_is_an_error() {
        let cells = [0.0];
        let mut display = PgmDisplay::new(Vec::new()).with_scale(MAX_SCALE);
        let result = display.present(&Frame {
            number: 0,
            size: usize::MAX,
            cells: &cells,
        });

        assert!(matches!(result, Err(RasterError::Display(_))));
        assert!(display.into_inner().is_empty());
    }

    #[test]
    fn test_empty_frame_writes_nothing() {
        let mut display = PgmDisplay::new(Vec::new());
        display
            .present(&Frame {
                number: 0,
                size: 0,
                cells: &[],
            })
            .unwrap();
        assert!(display.into_inner().is_empty());
    }
}
