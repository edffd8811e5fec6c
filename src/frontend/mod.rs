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

//! Display back ends
//!
//! Each back end implements [`Display`](crate::core::Display) and turns a
//! finished frame into something a person can look at:
//! - [`AsciiDisplay`]: character art on any writer (usually stdout)
//! - [`PgmDisplay`]: binary greyscale PGM image
//! - [`JsonDisplay`]: machine-readable cell dump
//!
//! All back ends draw the top row (highest `j`) first, so the picture is
//! upright.

mod ascii;
mod json;
mod pgm;

pub use ascii::{AsciiDisplay, Gradient};
pub use json::JsonDisplay;
pub use pgm::{PgmDisplay, MAX_SCALE};

use std::fmt;

/// Selectable back end kind (CLI `--display`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DisplayKind {
    #[default]
    Ascii,
    Pgm,
    Json,
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayKind::Ascii => "ascii",
            DisplayKind::Pgm => "pgm",
            DisplayKind::Json => "json",
        };
        f.write_str(name)
    }
}
