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

//! Test fixtures for common test scenarios

use rasterlab::core::RasterGrid;
use std::collections::BTreeSet;

/// Triangle used throughout the rasterization exercise
#[allow(dead_code)]
pub const LAB_TRIANGLE: [(f64, f64); 3] = [(2.0, 1.0), (18.0, 13.0), (6.0, 16.0)];

/// Create a cleared 40x40 grid with the lab colors
#[allow(dead_code)]
pub fn lab_grid() -> RasterGrid {
    RasterGrid::new(40).expect("Failed to create grid")
}

/// Set of cells that differ from the background
#[allow(dead_code)]
pub fn covered_cells(grid: &RasterGrid) -> BTreeSet<(i64, i64)> {
    let size = grid.size() as i64;
    (0..size)
        .flat_map(|j| (0..size).map(move |i| (i, j)))
        .filter(|&(i, j)| grid.get(i, j) != Some(grid.background()))
        .collect()
}

/// Cells written by a single line on a fresh grid
#[allow(dead_code)]
pub fn line_cells(size: usize, from: (f64, f64), to: (f64, f64)) -> BTreeSet<(i64, i64)> {
    let mut grid = RasterGrid::new(size).expect("Failed to create grid");
    grid.rasterize_line(from.0, from.1, to.0, to.1, None);
    covered_cells(&grid)
}

/// Cells written by a wireframe triangle on a fresh grid
#[allow(dead_code)]
pub fn wireframe_cells(size: usize, p: [(f64, f64); 3]) -> BTreeSet<(i64, i64)> {
    let mut grid = RasterGrid::new(size).expect("Failed to create grid");
    grid.rasterize_wireframe_triangle(p[0], p[1], p[2], None);
    covered_cells(&grid)
}

/// Cells written by a filled triangle on a fresh grid
#[allow(dead_code)]
pub fn filled_cells(size: usize, p: [(f64, f64); 3]) -> BTreeSet<(i64, i64)> {
    let mut grid = RasterGrid::new(size).expect("Failed to create grid");
    grid.rasterize_filled_triangle(p[0], p[1], p[2], None);
    covered_cells(&grid)
}
