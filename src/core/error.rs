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

//! Rasterizer error types

use thiserror::Error;

/// Result type for rasterizer operations
pub type Result<T> = std::result::Result<T, RasterError>;

/// Main error type for the rasterizer
///
/// Geometry never produces an error: out-of-range writes are clipped and
/// degenerate primitives have a defined result. Only construction, loading
/// and presenting can fail.
#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Invalid grid size: {size} (valid range: 1-{max})")]
    InvalidGridSize { size: usize, max: usize },

    #[error("Invalid {name} value: {value} (expected 0.0-1.0)")]
    InvalidColor { name: &'static str, value: f32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Display error: {0}")]
    Display(String),
}

/// Snapshot-specific error types
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Incompatible snapshot version: expected {expected}, got {got}")]
    VersionMismatch { expected: u32, got: u32 },

    #[error("Cell count mismatch: expected {expected}, got {got}")]
    CellCount { expected: usize, got: usize },

    #[error("Invalid cell {index}: {value} (expected 0.0-1.0)")]
    InvalidCell { index: usize, value: f32 },

    #[error("Invalid {name} value: {value} (expected 0.0-1.0)")]
    InvalidColor { name: &'static str, value: f32 },
}
