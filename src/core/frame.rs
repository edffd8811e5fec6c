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

//! Frame loop
//!
//! Every frame follows the same lifecycle:
//!
//! 1. Clear the grid to its background value
//! 2. Draw the scene into the grid
//! 3. Hand a read-only view of the cells to the display
//!
//! The caller owns the [`FrameContext`] and drives it; there is no global
//! state and nothing runs in the background.

use crate::core::error::Result;
use crate::core::raster::RasterGrid;
use crate::core::scene::Scene;

/// Read-only view of a finished frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Frame number, starting at 0
    pub number: u64,

    /// Grid edge length
    pub size: usize,

    /// Row-major cells, bottom row first
    pub cells: &'a [f32],
}

impl Frame<'_> {
    /// Cell value at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside the grid.
    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> f32 {
        self.cells[i + self.size * j]
    }
}

/// Consumer of finished frames
///
/// Implemented by the display back ends in [`crate::frontend`].
pub trait Display {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Caller-owned rendering context
///
/// # Examples
///
/// ```
/// use rasterlab::core::{FrameContext, RasterGrid, Scene};
/// use rasterlab::frontend::AsciiDisplay;
///
/// let grid = RasterGrid::new(20).unwrap();
/// let mut context = FrameContext::new(grid, Scene::lab_demo());
///
/// let mut display = AsciiDisplay::new(Vec::new());
/// context.render_frame(&mut display).unwrap();
/// assert_eq!(context.frame_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct FrameContext {
    grid: RasterGrid,
    scene: Scene,

    /// Frames rendered so far
    frame: u64,
}

impl FrameContext {
    pub fn new(grid: RasterGrid, scene: Scene) -> Self {
        Self {
            grid,
            scene,
            frame: 0,
        }
    }

    pub fn grid(&self) -> &RasterGrid {
        &self.grid
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Replace the scene drawn from the next frame on
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Clear and redraw the grid without presenting it
    pub fn draw(&mut self) {
        self.grid.clear();
        self.scene.draw(&mut self.grid);
    }

    /// Render one frame and present it
    ///
    /// The frame counter only advances if the display accepted the frame.
    pub fn render_frame(&mut self, display: &mut dyn Display) -> Result<()> {
        self.draw();

        let frame = Frame {
            number: self.frame,
            size: self.grid.size(),
            cells: self.grid.cells(),
        };
        display.present(&frame)?;

        log::trace!(
            "Frame {}: {} covered cells",
            self.frame,
            self.grid.covered_count()
        );
        self.frame += 1;
        Ok(())
    }

    /// Render `frames` consecutive frames
    pub fn run(&mut self, frames: u64, display: &mut dyn Display) -> Result<()> {
        let log_interval = (frames / 10).max(1);

        for i in 0..frames {
            if i % log_interval == 0 && i > 0 {
                log::debug!("Progress: {}/{} frames", i, frames);
            }
            self.render_frame(display)?;
        }
        Ok(())
    }

    /// Give the grid back to the caller
    pub fn into_grid(self) -> RasterGrid {
        self.grid
    }
}
