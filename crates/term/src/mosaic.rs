//! Mosaic: maps a `core::Grid` into glyph lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt;
use std::io;

use crate::core::Grid;
use crate::style::{foreground_escape, reset_escape};
use crate::types::RenderConfig;

/// Rendered output: the glyph lines plus an optional color wrap.
///
/// The wrap brackets the whole sequence once; it is never repeated per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    prefix: Option<String>,
    lines: Vec<String>,
    suffix: Option<String>,
}

impl Rendering {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Color escape written before the first line, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Reset escape written after the last line, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Write prefix, every line followed by `\n`, then suffix.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(prefix) = &self.prefix {
            out.write_all(prefix.as_bytes())?;
        }
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        if let Some(suffix) = &self.suffix {
            out.write_all(suffix.as_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            f.write_str(prefix)?;
        }
        for line in &self.lines {
            f.write_str(line)?;
            f.write_str("\n")?;
        }
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

/// Render the whole grid into lines.
///
/// One line per grid row; each line holds `side` tokens, or `2 * side` when
/// the config is doubled.
pub fn render(grid: &Grid, config: &RenderConfig) -> Rendering {
    let lines = (0..grid.side())
        .map(|row| {
            let mut line = String::with_capacity(line_capacity(grid, config));
            push_line(grid, config, row, &mut line);
            line
        })
        .collect();

    let (prefix, suffix) = match config.color() {
        Some(rgb) => (Some(foreground_escape(rgb)), Some(reset_escape())),
        None => (None, None),
    };

    Rendering {
        prefix,
        lines,
        suffix,
    }
}

/// Append output row `row` to `out`, reading the grid through the config's
/// orientation.
pub fn push_line(grid: &Grid, config: &RenderConfig, row: usize, out: &mut String) {
    let side = grid.side();
    if row >= side {
        return;
    }

    let orientation = config.orientation();
    let repeat = config.repeat();
    for col in 0..side {
        let (r, c) = orientation.source(side, row, col);
        let glyph = config.glyph_for(grid.get(r, c).unwrap_or_default());
        for _ in 0..repeat {
            out.push_str(glyph);
        }
    }
}

/// Byte length of the longest possible line.
pub(crate) fn line_capacity(grid: &Grid, config: &RenderConfig) -> usize {
    let widest = config.fill().as_str().len().max(config.empty().as_str().len());
    grid.side() * config.repeat() * widest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generate;
    use crate::types::{Glyph, Orientation, Rgb};

    fn ascii() -> RenderConfig {
        RenderConfig::new(Glyph::new("#").unwrap(), Glyph::new(".").unwrap())
    }

    #[test]
    fn identity_reads_grid_as_is() {
        let r = render(&generate(2), &ascii());
        assert_eq!(r.lines(), &["##", "#."]);
        assert_eq!(r.prefix(), None);
        assert_eq!(r.suffix(), None);
    }

    #[test]
    fn doubled_repeats_tokens_horizontally_only() {
        let r = render(&generate(2), &ascii().with_doubled(true));
        assert_eq!(r.lines(), &["####", "##.."]);
    }

    #[test]
    fn flips_reverse_the_chosen_axes() {
        let grid = generate(2);
        let rows = render(&grid, &ascii().with_orientation(Orientation::FlipRows));
        assert_eq!(rows.lines(), &["#.", "##"]);

        let cols = render(&grid, &ascii().with_orientation(Orientation::FlipCols));
        assert_eq!(cols.lines(), &["##", ".#"]);

        let both = render(&grid, &ascii().with_orientation(Orientation::FlipBoth));
        assert_eq!(both.lines(), &[".#", "##"]);
    }

    #[test]
    fn multibyte_glyphs_are_opaque_tokens() {
        let config = RenderConfig::default();
        let r = render(&generate(2), &config);
        assert_eq!(r.lines(), &["██", "█░"]);
    }

    #[test]
    fn color_wraps_the_whole_output_once() {
        let config = ascii().with_color(Some(Rgb::new(255, 0, 0)));
        let text = render(&generate(4), &config).to_string();

        assert!(text.starts_with("\x1b[38;2;255;0;0m"));
        assert!(text.ends_with("\x1b[0m"));
        assert_eq!(text.matches("\x1b[").count(), 2);
    }

    #[test]
    fn write_to_matches_display() {
        let config = ascii().with_color(Some(Rgb::new(0, 128, 255)));
        let r = render(&generate(8), &config);
        let mut buf = Vec::new();
        r.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), r.to_string());
    }

    #[test]
    fn empty_grid_renders_no_lines() {
        let r = render(&generate(0), &ascii().with_color(Some(Rgb::new(1, 1, 1))));
        assert!(r.lines().is_empty());
        assert_eq!(r.to_string(), "\x1b[38;2;1;1;1m\x1b[0m");
    }

    #[test]
    fn push_line_ignores_rows_past_the_end() {
        let mut line = String::new();
        push_line(&generate(2), &ascii(), 2, &mut line);
        assert!(line.is_empty());
    }
}
