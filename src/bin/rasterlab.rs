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

//! Grid rasterizer command line front end
//!
//! Draws a scene into the grid for a number of frames and presents the final
//! frame (or every frame) on the chosen display.

use clap::Parser;
use log::{error, info};
use rasterlab::core::error::Result;
use rasterlab::core::{Display, Frame, FrameContext, GridConfig, GridSnapshot, RasterGrid, Scene};
use rasterlab::frontend::{AsciiDisplay, DisplayKind, JsonDisplay, PgmDisplay, MAX_SCALE};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Software rasterizer for a square coverage grid
#[derive(Parser)]
#[command(name = "rasterlab")]
#[command(about = "Rasterize points, lines and triangles into a coverage grid", long_about = None)]
struct Args {
    /// Grid configuration file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Scene file (TOML); defaults to the lab demo scene
    #[arg(short = 's', long)]
    scene: Option<PathBuf>,

    /// Grid edge length, overrides the config file
    #[arg(long)]
    size: Option<usize>,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value = "1")]
    frames: u64,

    /// Present every frame instead of only the last one
    #[arg(long)]
    every_frame: bool,

    /// Display back end: ascii, pgm or json
    #[arg(short = 'd', long, default_value = "ascii")]
    display: DisplayKind,

    /// PGM pixels per cell (1-64)
    #[arg(
        long,
        default_value = "8",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_SCALE as u64)
    )]
    scale: usize,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Save the last frame as a snapshot
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Present a saved snapshot instead of drawing a scene
    #[arg(long, conflicts_with_all = ["scene", "snapshot"])]
    restore: Option<PathBuf>,
}

/// Swallows frames until the last one is due
struct LastFrameOnly<'a> {
    inner: &'a mut dyn Display,
    remaining: u64,
}

impl Display for LastFrameOnly<'_> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.inner.present(frame)?;
        }
        Ok(())
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Optional .env file with RASTERLAB_* and RUST_LOG settings
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("rasterlab v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        return Err(Box::new(e));
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("Writing {} output to {}", args.display, path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };
    let mut display = make_display(args, writer);

    if let Some(path) = &args.restore {
        info!("Restoring snapshot from {}", path.display());
        let snapshot = GridSnapshot::load_from_file(path)?;
        let grid = snapshot.restore()?;
        return display.present(&Frame {
            number: snapshot.metadata.frame,
            size: grid.size(),
            cells: grid.cells(),
        });
    }

    let mut config = match &args.config {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };
    config.apply_env()?;
    if let Some(size) = args.size {
        config.size = size;
    }
    info!(
        "Grid: {}x{} (background={}, fill={})",
        config.size, config.size, config.background, config.fill
    );

    let scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::lab_demo(),
    };
    info!("Scene: {} primitives", scene.len());

    let mut context = FrameContext::new(RasterGrid::from_config(&config)?, scene);

    if args.every_frame {
        context.run(args.frames, display.as_mut())?;
    } else {
        let mut last = LastFrameOnly {
            inner: display.as_mut(),
            remaining: args.frames,
        };
        context.run(args.frames, &mut last)?;
    }

    info!(
        "Rendered {} frames, {} covered cells",
        context.frame_count(),
        context.grid().covered_count()
    );

    if let Some(path) = &args.snapshot {
        let frame = context.frame_count().saturating_sub(1);
        GridSnapshot::capture(context.grid(), frame).save_to_file(path)?;
        info!("Snapshot saved to {}", path.display());
    }

    Ok(())
}

fn make_display(args: &Args, writer: Box<dyn Write>) -> Box<dyn Display> {
    match args.display {
        DisplayKind::Ascii => Box::new(AsciiDisplay::new(writer)),
        DisplayKind::Pgm => Box::new(PgmDisplay::new(writer).with_scale(args.scale)),
        DisplayKind::Json => Box::new(JsonDisplay::new(writer)),
    }
}
