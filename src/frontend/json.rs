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

//! JSON cell dump display
//!
//! Each frame is written as one JSON object per line:
//!
//! ```json
//! {"frame":0,"size":2,"cells":[0.0,1.0,0.0,0.0]}
//! ```

use crate::core::error::Result;
use crate::core::frame::{Display, Frame};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct FrameRecord<'a> {
    frame: u64,
    size: usize,
    cells: &'a [f32],
}

/// Writes frames as newline-delimited JSON
pub struct JsonDisplay<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Display for JsonDisplay<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        let record = FrameRecord {
            frame: frame.number,
            size: frame.size,
            cells: frame.cells,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &record)?;
        } else {
            serde_json::to_writer(&mut self.writer, &record)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
