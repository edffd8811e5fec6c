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

//! Scene description
//!
//! A scene is the ordered list of primitives drawn into the grid every
//! frame. Scenes can be built in code or loaded from TOML:
//!
//! ```toml
//! [[primitives]]
//! kind = "point"
//! x = 2.9
//! y = 1.9
//!
//! [[primitives]]
//! kind = "filled_triangle"
//! vertices = [[2.0, 1.0], [18.0, 13.0], [6.0, 16.0]]
//! color = 0.5
//! ```

use crate::core::error::{RasterError, Result};
use crate::core::raster::RasterGrid;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

/// A single drawable primitive
///
/// Coordinates are real-valued grid coordinates. `color` overrides the
/// grid's fill value when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Point {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<f32>,
    },
    Line {
        from: [f64; 2],
        to: [f64; 2],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<f32>,
    },
    WireframeTriangle {
        vertices: [[f64; 2]; 3],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<f32>,
    },
    FilledTriangle {
        vertices: [[f64; 2]; 3],
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<f32>,
    },
    /// Two eyes and a sine-wave mouth scaled to the grid size
    Smiley {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<f32>,
    },
}

impl Primitive {
    /// Rasterize this primitive into the grid
    pub fn draw(&self, grid: &mut RasterGrid) {
        match *self {
            Primitive::Point { x, y, color } => grid.rasterize_point(x, y, color),
            Primitive::Line { from, to, color } => {
                grid.rasterize_line(from[0], from[1], to[0], to[1], color)
            }
            Primitive::WireframeTriangle { vertices: v, color } => grid
                .rasterize_wireframe_triangle(
                    (v[0][0], v[0][1]),
                    (v[1][0], v[1][1]),
                    (v[2][0], v[2][1]),
                    color,
                ),
            Primitive::FilledTriangle { vertices: v, color } => grid.rasterize_filled_triangle(
                (v[0][0], v[0][1]),
                (v[1][0], v[1][1]),
                (v[2][0], v[2][1]),
                color,
            ),
            Primitive::Smiley { color } => draw_smiley(grid, color),
        }
    }
}

/// Ordered list of primitives
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    /// The classic exercise drawing list
    ///
    /// Two points that land in the same cell, a shallow and a steep line, a
    /// wireframe and a filled triangle over the same vertices, and a smiley.
    pub fn lab_demo() -> Self {
        let triangle = [[2.0, 1.0], [18.0, 13.0], [6.0, 16.0]];
        Self::new(vec![
            Primitive::Point {
                x: 2.0,
                y: 1.0,
                color: None,
            },
            Primitive::Point {
                x: 2.9,
                y: 1.9,
                color: None,
            },
            Primitive::Line {
                from: [2.0, 1.0],
                to: [18.0, 13.0],
                color: None,
            },
            Primitive::Line {
                from: [2.0, 1.0],
                to: [13.0, 18.0],
                color: None,
            },
            Primitive::FilledTriangle {
                vertices: triangle,
                color: Some(0.5),
            },
            Primitive::WireframeTriangle {
                vertices: triangle,
                color: None,
            },
            Primitive::Smiley { color: None },
        ])
    }

    /// Parse a scene from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RasterError::Scene(e.to_string()))
    }

    /// Load a scene file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let scene = Self::from_toml_str(&text)?;
        log::debug!("Scene has {} primitives", scene.primitives.len());
        Ok(scene)
    }

    /// Serialize the scene as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| RasterError::Scene(e.to_string()))
    }

    /// Draw every primitive in order
    pub fn draw(&self, grid: &mut RasterGrid) {
        for primitive in &self.primitives {
            primitive.draw(grid);
        }
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Draw the smiley face
///
/// Eyes sit at a quarter and three quarters across, three quarters up. The
/// mouth is half a sine period spanning the middle half of the grid.
fn draw_smiley(grid: &mut RasterGrid, color: Option<f32>) {
    let size = grid.size() as f64;
    let quarter = size / 4.0;

    grid.rasterize_point(quarter, size * 3.0 / 4.0, color);
    grid.rasterize_point(size * 3.0 / 4.0, size * 3.0 / 4.0, color);

    for i in 0..=grid.size() / 2 {
        let i = i as f64;
        let dip = (size / 6.0 * (i * 2.0 * PI / size).sin()).trunc();
        grid.rasterize_point(i + quarter, quarter - dip, color);
    }
}
