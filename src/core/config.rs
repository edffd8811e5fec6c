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

//! Grid configuration
//!
//! Configuration is read from a TOML file and can be overridden by
//! environment variables (which a `.env` file may provide):
//!
//! ```toml
//! size = 40
//! background = 0.0
//! fill = 1.0
//! ```
//!
//! | Variable | Field |
//! |----------|-------|
//! | `RASTERLAB_GRID_SIZE` | `size` |
//! | `RASTERLAB_BACKGROUND` | `background` |
//! | `RASTERLAB_FILL` | `fill` |

use crate::core::error::{RasterError, Result};
use crate::core::raster::MAX_GRID_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_GRID_SIZE: &str = "RASTERLAB_GRID_SIZE";
const ENV_BACKGROUND: &str = "RASTERLAB_BACKGROUND";
const ENV_FILL: &str = "RASTERLAB_FILL";

/// Grid parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length in cells
    pub size: usize,

    /// Value every cell is cleared to
    pub background: f32,

    /// Value written when a primitive has no color
    pub fill: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 40,
            background: 0.0,
            fill: 1.0,
        }
    }
}

impl GridConfig {
    /// Parse a configuration from TOML text
    ///
    /// Missing fields take their default values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| RasterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_GRID_SIZE) {
            self.size = parse_var(ENV_GRID_SIZE, &value)?;
        }
        if let Some(value) = lookup(ENV_BACKGROUND) {
            self.background = parse_var(ENV_BACKGROUND, &value)?;
        }
        if let Some(value) = lookup(ENV_FILL) {
            self.fill = parse_var(ENV_FILL, &value)?;
        }
        self.validate()
    }

    /// Check the configuration describes a constructible grid
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_GRID_SIZE {
            return Err(RasterError::InvalidGridSize {
                size: self.size,
                max: MAX_GRID_SIZE,
            });
        }
        for (name, value) in [("background", self.background), ("fill", self.fill)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(RasterError::InvalidColor { name, value });
            }
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| RasterError::Config(format!("{}: cannot parse {:?}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_lab() {
        let config = GridConfig::default();
        assert_eq!(config.size, 40);
        assert_eq!(config.background, 0.0);
        assert_eq!(config.fill, 1.0);
    }

    #[test]
    fn test_partial_toml() {
        let config = GridConfig::from_toml_str("size = 16\n").unwrap();
        assert_eq!(config.size, 16);
        assert_eq!(config.fill, 1.0);
    }

    #[test]
    fn test_full_toml() {
        let config = GridConfig::from_toml_str("size = 8\nbackground = 0.25\nfill = 0.75\n").unwrap();
        assert_eq!(
            config,
            GridConfig {
                size: 8,
                background: 0.25,
                fill: 0.75,
            }
        );
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            GridConfig::from_toml_str("size = \"big\""),
            Err(RasterError::Config(_))
        ));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            GridConfig::from_toml_str("size = 0"),
            Err(RasterError::InvalidGridSize { size: 0, .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RASTERLAB_GRID_SIZE", "64"),
            ("RASTERLAB_FILL", " 0.5 "),
        ]
        .into_iter()
        .collect();

        let mut config = GridConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.size, 64);
        assert_eq!(config.background, 0.0);
        assert_eq!(config.fill, 0.5);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = GridConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "RASTERLAB_BACKGROUND").then(|| "dark".to_string())
        });
        assert!(matches!(result, Err(RasterError::Config(_))));
    }

    #[test]
    fn test_env_override_validated() {
        let mut config = GridConfig::default();
        let result = config.apply_overrides(|key| {
            (key == "RASTERLAB_FILL").then(|| "2.0".to_string())
        });
        assert!(matches!(
            result,
            Err(RasterError::InvalidColor { name: "fill", .. })
        ));
    }
}
