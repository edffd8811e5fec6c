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

//! Custom assertions for rasterizer testing

use rasterlab::core::RasterGrid;
use std::collections::BTreeSet;

/// Assert grid cell has expected value
#[allow(dead_code)]
pub fn assert_cell(grid: &RasterGrid, i: i64, j: i64, expected: f32) {
    let actual = grid.get(i, j);
    assert_eq!(
        actual,
        Some(expected),
        "Cell ({}, {}) mismatch: expected {}, got {:?}",
        i,
        j,
        expected,
        actual
    );
}

/// Assert every cell holds the background value
#[allow(dead_code)]
pub fn assert_cleared(grid: &RasterGrid) {
    let dirty = grid
        .cells()
        .iter()
        .filter(|&&c| c != grid.background())
        .count();
    assert_eq!(dirty, 0, "{} cells differ from background", dirty);
}

/// Assert an ordered chain of cells is 8-connected
#[allow(dead_code)]
pub fn assert_connected_chain(cells: &[(i64, i64)]) {
    for pair in cells.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            (a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1,
            "Gap between {:?} and {:?}",
            a,
            b
        );
    }
}

/// Assert each row of a cell set is one contiguous run
#[allow(dead_code)]
pub fn assert_rows_contiguous(cells: &BTreeSet<(i64, i64)>) {
    let rows: BTreeSet<i64> = cells.iter().map(|c| c.1).collect();
    for y in rows {
        let xs: Vec<i64> = cells.iter().filter(|c| c.1 == y).map(|c| c.0).collect();
        let (min, max) = (xs[0], xs[xs.len() - 1]);
        assert_eq!(
            xs.len() as i64,
            max - min + 1,
            "Row {} has a hole: {:?}",
            y,
            xs
        );
    }
}
