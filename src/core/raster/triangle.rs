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

//! Triangle rasterization
//!
//! Filled triangles use a scanline approach:
//!
//! 1. Map the vertices to cells and sort them by Y
//! 2. Split the triangle at the middle vertex into a long edge (top to
//!    bottom) and two short edges
//! 3. For every scanline, take the outermost cells of the active edges and
//!    fill the span between them
//!
//! Edge cells come from the same walker as [`RasterGrid::rasterize_line`],
//! so the outline of a filled triangle is exactly its wireframe, and two
//! triangles sharing an edge both cover that edge's cells.
//!
//! Shared edge cells are therefore written by both triangles. This overdraw
//! is intended and matches the wireframe outline rule.

use super::grid::RasterGrid;
use super::line::{cell_of, Segment};

type Cell = (i64, i64);

impl RasterGrid {
    /// Rasterize the outline of a triangle
    ///
    /// Draws the three edges with [`RasterGrid::rasterize_line`].
    pub fn rasterize_wireframe_triangle(
        &mut self,
        p1: (f64, f64),
        p2: (f64, f64),
        p3: (f64, f64),
        color: Option<f32>,
    ) {
        self.rasterize_line(p1.0, p1.1, p2.0, p2.1, color);
        self.rasterize_line(p1.0, p1.1, p3.0, p3.1, color);
        self.rasterize_line(p2.0, p2.1, p3.0, p3.1, color);
    }

    /// Rasterize a solid triangle
    ///
    /// Vertex order and winding do not matter. If the three vertex cells are
    /// collinear the triangle has no interior and its wireframe is drawn
    /// instead.
    ///
    /// # Arguments
    ///
    /// * `p1`, `p2`, `p3` - Vertices in grid coordinates
    /// * `color` - Cell value, or `None` for the fill value
    pub fn rasterize_filled_triangle(
        &mut self,
        p1: (f64, f64),
        p2: (f64, f64),
        p3: (f64, f64),
        color: Option<f32>,
    ) {
        let Some(vertices) = [p1, p2, p3]
            .into_iter()
            .map(|(x, y)| Some((cell_of(x)?, cell_of(y)?)))
            .collect::<Option<Vec<Cell>>>()
        else {
            log::trace!("Skipping triangle with non-finite vertex");
            return;
        };
        let Some(color) = self.resolve(color) else {
            return;
        };

        let (v0, v1, v2) = sort_vertices_by_y(vertices[0], vertices[1], vertices[2]);

        let long = Segment::new(v0, v2);
        let upper = Segment::new(v0, v1);
        let lower = Segment::new(v1, v2);

        if is_degenerate(v0, v1, v2) {
            log::trace!(
                "Degenerate triangle {:?} {:?} {:?}, drawing outline",
                v0,
                v1,
                v2
            );
            for edge in [&long, &upper, &lower] {
                self.stroke(edge, color);
            }
            return;
        }

        // Only scanlines inside the grid matter
        let last_row = self.size() as i64 - 1;
        let y_start = v0.1.max(0);
        let y_end = v2.1.min(last_row);

        for y in y_start..=y_end {
            let span = if y < v1.1 {
                merge_spans(&[&long, &upper], y)
            } else if y > v1.1 {
                merge_spans(&[&long, &lower], y)
            } else {
                merge_spans(&[&long, &upper, &lower], y)
            };

            if let Some((x_start, x_end)) = span {
                self.draw_span(y, x_start, x_end, color);
            }
        }
    }
}

/// Sort three vertices by Y coordinate, then X
///
/// Returns vertices in ascending order: (v0.y <= v1.y <= v2.y). The X
/// tie-break makes the result independent of argument order.
fn sort_vertices_by_y(v0: Cell, v1: Cell, v2: Cell) -> (Cell, Cell, Cell) {
    let mut verts = [v0, v1, v2];
    verts.sort_by_key(|v| (v.1, v.0));
    (verts[0], verts[1], verts[2])
}

/// Zero-area check on cell coordinates (cross product)
fn is_degenerate(v0: Cell, v1: Cell, v2: Cell) -> bool {
    let (ax, ay) = ((v1.0 - v0.0) as i128, (v1.1 - v0.1) as i128);
    let (bx, by) = ((v2.0 - v0.0) as i128, (v2.1 - v0.1) as i128);
    ax * by - ay * bx == 0
}

/// Union of the row spans of several edges
fn merge_spans(edges: &[&Segment], y: i64) -> Option<(i64, i64)> {
    edges
        .iter()
        .filter_map(|edge| edge.row_span(y))
        .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
}
