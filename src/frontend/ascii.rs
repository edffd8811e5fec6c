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

//! Character-art display

use crate::core::error::Result;
use crate::core::frame::{Display, Frame};
use std::io::Write;

/// Characters ordered from lowest to highest coverage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    chars: Vec<char>,
}

impl Gradient {
    /// Build a gradient from at least two characters
    ///
    /// Returns `None` for shorter input.
    pub fn new(chars: impl Into<String>) -> Option<Self> {
        let chars: Vec<char> = chars.into().chars().collect();
        (chars.len() >= 2).then_some(Self { chars })
    }

    pub fn standard() -> Self {
        Self {
            chars: " .:-=+*#%@".chars().collect(),
        }
    }

    pub fn blocks() -> Self {
        Self {
            chars: " ░▒▓█".chars().collect(),
        }
    }

    pub fn binary() -> Self {
        Self {
            chars: vec!['.', '#'],
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character for a coverage value in `[0.0, 1.0]`
    pub fn char_for(&self, value: f32) -> char {
        let levels = (self.chars.len() - 1) as f32;
        let idx = (value * levels).clamp(0.0, levels).round() as usize;
        self.chars[idx]
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::standard()
    }
}

/// Writes each frame as rows of characters
///
/// Terminal glyphs are roughly twice as tall as they are wide, so every cell
/// is repeated `cell_width` times (2 by default) to keep cells square.
pub struct AsciiDisplay<W: Write> {
    writer: W,
    gradient: Gradient,
    cell_width: usize,
}

impl<W: Write> AsciiDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            gradient: Gradient::default(),
            cell_width: 2,
        }
    }

    pub fn with_gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Display for AsciiDisplay<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        if frame.size == 0 {
            return Ok(());
        }
        let mut line = String::with_capacity(frame.size * self.cell_width);

        for row in frame.cells.chunks(frame.size).rev() {
            line.clear();
            for &value in row {
                let ch = self.gradient.char_for(value);
                line.extend(std::iter::repeat_n(ch, self.cell_width));
            }
            writeln!(self.writer, "{}", line.trim_end())?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RasterGrid;

    fn render(grid: &RasterGrid, display: AsciiDisplay<Vec<u8>>) -> String {
        let mut display = display;
        let frame = Frame {
            number: 0,
            size: grid.size(),
            cells: grid.cells(),
        };
        display.present(&frame).unwrap();
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_gradient_extremes() {
        let gradient = Gradient::standard();
        assert_eq!(gradient.char_for(0.0), ' ');
        assert_eq!(gradient.char_for(1.0), '@');
        assert_eq!(gradient.char_for(7.0), '@');
        assert_eq!(gradient.char_for(-1.0), ' ');
    }

    #[test]
    fn test_gradient_requires_two_chars() {
        assert!(Gradient::new("#").is_none());
        assert_eq!(Gradient::new("ab").unwrap().len(), 2);
    }

    #[test]
    fn test_top_row_printed_first() {
        let mut grid = RasterGrid::new(3).unwrap();
        grid.fill_pixel(0, 2);
        grid.fill_pixel(2, 0);

        let display = AsciiDisplay::new(Vec::new())
            .with_gradient(Gradient::binary())
            .with_cell_width(1);
        let text = render(&grid, display);

        assert_eq!(text, "#..\n...\n..#\n\n");
    }

    #[test]
    fn test_cells_doubled_by_default() {
        let mut grid = RasterGrid::new(2).unwrap();
        grid.fill_pixel(1, 0);

        let display = AsciiDisplay::new(Vec::new()).with_gradient(Gradient::binary());
        let text = render(&grid, display);

        assert_eq!(text, "....\n..##\n\n");
    }

    #[test]
    fn test_empty_frame_writes_nothing() {
        let mut display = AsciiDisplay::new(Vec::new());
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
