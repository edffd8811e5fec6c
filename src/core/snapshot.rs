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

//! Grid snapshots
//!
//! A snapshot captures a finished grid so it can be presented again later
//! without re-running the scene.
//!
//! # Snapshot Format
//!
//! Snapshots are serialized using bincode (standard configuration). The
//! snapshot includes:
//! - Version number
//! - Metadata (timestamp, frame number, description)
//! - Grid size, background and fill values
//! - All cells in row-major order
//!
//! Loading a snapshot with a different version fails with an error.
//!
//! # Example
//!
//! ```no_run
//! use rasterlab::core::{GridSnapshot, RasterGrid};
//!
//! let mut grid = RasterGrid::new(40).unwrap();
//! grid.rasterize_line(2.0, 1.0, 18.0, 13.0, None);
//!
//! let snapshot = GridSnapshot::capture(&grid, 0);
//! snapshot.save_to_file("frame.snap").unwrap();
//!
//! let restored = GridSnapshot::load_from_file("frame.snap").unwrap().restore().unwrap();
//! assert_eq!(restored, grid);
//! ```

use crate::core::error::{RasterError, Result, SnapshotError};
use crate::core::raster::RasterGrid;
use bincode::{config, Decode, Encode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Snapshot version for compatibility checking
///
/// Increment whenever the encoded layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Saved grid contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct GridSnapshot {
    /// Version number for compatibility checking
    pub version: u32,

    pub metadata: SnapshotMetadata,

    /// Grid edge length
    pub size: usize,

    pub background: f32,

    pub fill: f32,

    /// Row-major cells (`size * size` entries)
    pub cells: Vec<f32>,
}

/// Snapshot metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[bincode(encode_bounds = "", decode_bounds = "")]
pub struct SnapshotMetadata {
    /// When the snapshot was taken
    #[bincode(with_serde)]
    pub created_at: DateTime<Utc>,

    /// Frame number the grid belongs to
    pub frame: u64,

    /// Free-form note
    pub description: String,
}

impl GridSnapshot {
    /// Capture the current contents of a grid
    pub fn capture(grid: &RasterGrid, frame: u64) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            metadata: SnapshotMetadata {
                created_at: Utc::now(),
                frame,
                description: String::new(),
            },
            size: grid.size(),
            background: grid.background(),
            fill: grid.fill(),
            cells: grid.cells().to_vec(),
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = description.into();
        self
    }

    /// Rebuild the grid this snapshot was taken from
    ///
    /// # Errors
    ///
    /// Fails if the version does not match, the cell count is not
    /// `size * size`, the size is not a valid grid size, or the background,
    /// fill or any cell lies outside `0.0..=1.0`. Cells are never clamped.
    pub fn restore(&self) -> Result<RasterGrid> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                got: self.version,
            }
            .into());
        }

        let mut grid = RasterGrid::with_colors(self.size, self.background, self.fill)
            .map_err(|e| match e {
                RasterError::InvalidColor { name, value } => {
                    RasterError::Snapshot(SnapshotError::InvalidColor { name, value })
                }
                other => other,
            })?;

        let expected = self.size * self.size;
        if self.cells.len() != expected {
            return Err(SnapshotError::CellCount {
                expected,
                got: self.cells.len(),
            }
            .into());
        }

        if let Some((index, &value)) = self
            .cells
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(SnapshotError::InvalidCell { index, value }.into());
        }

        let size = self.size as i64;
        for (idx, &value) in self.cells.iter().enumerate() {
            let idx = idx as i64;
            grid.set_pixel(idx % size, idx / size, Some(value));
        }
        Ok(grid)
    }

    /// Encode the snapshot to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let encoded =
            bincode::encode_to_vec(self, config::standard()).map_err(SnapshotError::from)?;
        Ok(encoded)
    }

    /// Decode and version-check a snapshot
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (snapshot, _): (GridSnapshot, usize) =
            bincode::decode_from_slice(bytes, config::standard()).map_err(SnapshotError::from)?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                expected: SNAPSHOT_VERSION,
                got: snapshot.version,
            }
            .into());
        }
        Ok(snapshot)
    }

    /// Save snapshot to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let encoded = self.to_bytes()?;
        let mut file = File::create(path.as_ref())?;
        file.write_all(&encoded)?;
        log::debug!(
            "Saved {}x{} snapshot ({} bytes) to {}",
            self.size,
            self.size,
            encoded.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Load snapshot from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Self::from_bytes(&buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawn_grid() -> RasterGrid {
        let mut grid = RasterGrid::with_colors(16, 0.1, 0.8).unwrap();
        grid.rasterize_filled_triangle((1.0, 1.0), (14.0, 3.0), (6.0, 12.0), Some(0.4));
        grid.rasterize_line(0.0, 15.0, 15.0, 0.0, None);
        grid
    }

    #[test]
    fn test_capture_restore() {
        let grid = drawn_grid();
        let snapshot = GridSnapshot::capture(&grid, 7).with_description("triangle");

        assert_eq!(snapshot.metadata.frame, 7);
        assert_eq!(snapshot.metadata.description, "triangle");
        assert_eq!(snapshot.restore().unwrap(), grid);
    }

    #[test]
    fn test_bytes_round_trip() {
        let snapshot = GridSnapshot::capture(&drawn_grid(), 3);
        let bytes = snapshot.to_bytes().unwrap();
        assert!(!bytes.is_empty());

        let decoded = GridSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_save_load_file() {
        let grid = drawn_grid();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("grid.snap");

        GridSnapshot::capture(&grid, 0).save_to_file(&path).unwrap();
        let restored = GridSnapshot::load_from_file(&path)
            .unwrap()
            .restore()
            .unwrap();

        assert_eq!(restored, grid);
    }

    #[test]
    fn test_version_mismatch() {
        let mut snapshot = GridSnapshot::capture(&drawn_grid(), 0);
        snapshot.version = SNAPSHOT_VERSION + 1;

        assert!(matches!(
            snapshot.restore(),
            Err(RasterError::Snapshot(SnapshotError::VersionMismatch { .. }))
        ));

        let bytes = snapshot.to_bytes().unwrap();
        assert!(matches!(
            GridSnapshot::from_bytes(&bytes),
            Err(RasterError::Snapshot(SnapshotError::VersionMismatch { .. }))
        ));
    }

    #[test]
    fn test_cell_count_mismatch() {
        let mut snapshot = GridSnapshot::capture(&drawn_grid(), 0);
        snapshot.cells.pop();

        assert!(matches!(
            snapshot.restore(),
            Err(RasterError::Snapshot(SnapshotError::CellCount {
                expected: 256,
                got: 255
            }))
        ));
    }

    #[test]
    fn test_corrupt_cells_are_rejected() {
        let mut snapshot = GridSnapshot::capture(&drawn_grid(), 0);
        snapshot.cells[0] = f32::NAN;
        snapshot.cells[1] = 7.5;

        // Survives encoding, fails on restore instead of being clamped
        let decoded = GridSnapshot::from_bytes(&snapshot.to_bytes().unwrap()).unwrap();
        match decoded.restore() {
            Err(RasterError::Snapshot(SnapshotError::InvalidCell { index, value })) => {
                assert_eq!(index, 0);
                assert!(value.is_nan());
            }
            other => panic!("expected invalid cell error, got {:?}", other),
        }

        snapshot.cells[0] = 0.0;
        assert!(matches!(
            snapshot.restore(),
            Err(RasterError::Snapshot(SnapshotError::InvalidCell {
                index: 1,
                value
            })) if value == 7.5
        ));

        snapshot.cells[1] = -0.25;
        assert!(matches!(
            snapshot.restore(),
            Err(RasterError::Snapshot(SnapshotError::InvalidCell { index: 1, .. }))
        ));
    }

    #[test]
    fn test_invalid_colors_are_snapshot_errors() {
        let mut snapshot = GridSnapshot::capture(&drawn_grid(), 0);
        snapshot.fill = 3.0;
        assert!(matches!(
            snapshot.restore(),
            Err(RasterError::Snapshot(SnapshotError::InvalidColor {
                name: "fill",
                value
            })) if value == 3.0
        ));

        let mut snapshot = GridSnapshot::capture(&drawn_grid(), 0);
        snapshot.background = f32::NAN;
        assert!(matches!(
            snapshot.restore(),
            Err(RasterError::Snapshot(SnapshotError::InvalidColor {
                name: "background",
                ..
            }))
        ));
    }

    #[test]
    fn test_truncated_bytes() {
        let bytes = GridSnapshot::capture(&drawn_grid(), 0).to_bytes().unwrap();
        assert!(matches!(
            GridSnapshot::from_bytes(&bytes[..bytes.len() / 2]),
            Err(RasterError::Snapshot(SnapshotError::Decode(_)))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GridSnapshot::load_from_file(temp_dir.path().join("missing.snap")),
            Err(RasterError::Io(_))
        ));
    }
}
