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

//! Software rasterizer for a fixed-size coverage grid
//!
//! This library rasterizes points, lines and triangles into a small square
//! grid of scalar coverage values, and hands the finished grid to a display
//! back end once per frame.
//!
//! # Example
//!
//! ```
//! use rasterlab::core::RasterGrid;
//!
//! let mut grid = RasterGrid::new(40).unwrap();
//! grid.clear();
//!
//! grid.rasterize_point(2.9, 1.9, None);
//! assert_eq!(grid.get(2, 1), Some(1.0));
//!
//! grid.rasterize_filled_triangle((2.0, 1.0), (18.0, 13.0), (6.0, 16.0), None);
//! ```

pub mod core;
pub mod frontend;
