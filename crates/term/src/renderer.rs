//! TerminalRenderer: streams a mosaic to stdout.
//!
//! `render_into` writes the same bytes as [`crate::mosaic::Rendering`] without
//! holding every line in memory at once, which matters for large grids.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::Grid;
use crate::mosaic::{line_capacity, push_line};
use crate::style::{queue_foreground, queue_reset};
use crate::types::RenderConfig;

/// Buffered stdout sink.
pub struct TerminalRenderer {
    out: io::BufWriter<io::Stdout>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::BufWriter::with_capacity(64 * 1024, io::stdout()),
        }
    }

    /// Stream the grid straight to stdout.
    pub fn draw(&mut self, grid: &Grid, config: &RenderConfig) -> Result<()> {
        render_into(grid, config, &mut self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream a rendering of `grid` into `out`.
///
/// The color escape is queued once before the first row and the reset once
/// after the last one.
pub fn render_into<W: Write>(grid: &Grid, config: &RenderConfig, out: &mut W) -> io::Result<()> {
    if let Some(rgb) = config.color() {
        queue_foreground(out, rgb)?;
    }

    // One line buffer reused for every row.
    let mut line = String::with_capacity(line_capacity(grid, config) + 1);
    for row in 0..grid.side() {
        line.clear();
        push_line(grid, config, row, &mut line);
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }

    if config.color().is_some() {
        queue_reset(out)?;
    }
    Ok(())
}
