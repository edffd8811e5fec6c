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

//! Core rasterization components
//!
//! This module contains everything that does not depend on a display:
//! - Coverage grid and rasterization algorithms
//! - Scene description (what gets drawn every frame)
//! - Frame loop context
//! - Grid snapshots
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod frame;
pub mod raster;
pub mod scene;
pub mod snapshot;

// Re-export commonly used types
pub use config::GridConfig;
pub use error::{RasterError, Result, SnapshotError};
pub use frame::{Display, Frame, FrameContext};
pub use raster::{RasterGrid, Segment, MAX_GRID_SIZE};
pub use scene::{Primitive, Scene};
pub use snapshot::GridSnapshot;
