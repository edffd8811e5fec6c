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

//! Coverage grid rasterizer
//!
//! A [`RasterGrid`] is a square `size × size` buffer of scalar coverage
//! values in `[0.0, 1.0]`, stored row-major (`i + size * j`). Primitives are
//! given in real-valued grid coordinates and converted to cells by flooring,
//! so the cell `(i, j)` covers `[i, i + 1) × [j, j + 1)`.
//!
//! # Coordinate System
//!
//! - `i` (x) grows to the right, `j` (y) grows upward on display
//! - Row `j = 0` is the bottom row of the picture
//! - Writes outside `0..size` on either axis are silently dropped
//!
//! # Primitives
//!
//! - Points: the containing cell
//! - Lines: integer Bresenham walk between the end cells, inclusive
//! - Wireframe triangles: three lines
//! - Filled triangles: scanline fill whose boundary is the wireframe
//!
//! # References
//!
//! - [Bresenham's line algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm)
//! - [Triangle Rasterization Tutorial](https://www.sunshine2k.de/coding/java/TriangleRasterization/TriangleRasterization.html)

mod grid;
mod line;
mod triangle;

pub use grid::{RasterGrid, MAX_GRID_SIZE};
pub use line::Segment;
