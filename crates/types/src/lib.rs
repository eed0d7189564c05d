//! Core types module - shared data structures and constants
//!
//! This module defines the value types passed between the input layer, the
//! grid generator and the renderer. Everything here is plain data: once a
//! [`RenderConfig`] exists it is valid, because its parts can only be built
//! through validating constructors.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SIZE_EXP` | 4 | Grid side is `2^4 = 16` |
//! | `MAX_SIZE_EXP` | 30 | Largest accepted exponent |
//! | `CONFIRM_SIZE_EXP` | 11 | Exponents above this ask for confirmation |
//! | `DEFAULT_FILL` | `█` | Glyph for true cells |
//! | `DEFAULT_EMPTY` | `░` | Glyph for false cells |
//!
//! # Examples
//!
//! ```
//! use bitmosaic_types::{Glyph, Orientation, RenderConfig, Rgb};
//!
//! let config = RenderConfig::new(Glyph::new("#").unwrap(), Glyph::new(".").unwrap())
//!     .with_orientation(Orientation::FlipRows)
//!     .with_doubled(true)
//!     .with_color(Some(Rgb::new(255, 0, 0)));
//!
//! assert_eq!(config.fill().as_str(), "#");
//! assert!(config.doubled());
//!
//! // Orientation composes from two independent axis flags
//! assert_eq!(Orientation::from_axes(true, true), Orientation::FlipBoth);
//!
//! // Colors decode from a packed 24-bit value
//! assert_eq!(Rgb::from_u24(0xEBBB09), Rgb::new(0xEB, 0xBB, 0x09));
//! ```

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Grid side exponent used when none is given (16x16)
pub const DEFAULT_SIZE_EXP: u32 = 4;

/// Largest accepted side exponent (`2^30` still fits a 32-bit signed index)
pub const MAX_SIZE_EXP: u32 = 30;

/// Exponents above this value need an explicit confirmation
pub const CONFIRM_SIZE_EXP: u32 = 11;

/// Glyph drawn for true cells by default
pub const DEFAULT_FILL: &str = "█";

/// Glyph drawn for false cells by default
pub const DEFAULT_EMPTY: &str = "░";

/// Side length of a grid generated from a side exponent.
///
/// Returns `None` if `2^exp` does not fit in `usize`.
///
/// ```
/// use bitmosaic_types::side_from_exp;
///
/// assert_eq!(side_from_exp(0), Some(1));
/// assert_eq!(side_from_exp(4), Some(16));
/// assert_eq!(side_from_exp(200), None);
/// ```
pub fn side_from_exp(exp: u32) -> Option<usize> {
    1usize.checked_shl(exp)
}

/// Estimated size in MiB of a grid with the given side exponent.
///
/// One byte per cell, `4^exp` cells.
pub fn estimated_mib(exp: u32) -> f64 {
    4f64.powi(exp as i32) / 1_048_576.0
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack the low 24 bits of `value` as `0xRRGGBB`.
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Axis-reversal mode applied when reading the grid for output.
///
/// | Orientation | row read from | col read from |
/// |-------------|---------------|---------------|
/// | `Identity`  | `row`         | `col`         |
/// | `FlipRows`  | `N-1-row`     | `col`         |
/// | `FlipCols`  | `row`         | `N-1-col`     |
/// | `FlipBoth`  | `N-1-row`     | `N-1-col`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Identity,
    FlipRows,
    FlipCols,
    FlipBoth,
}

impl Orientation {
    /// Compose an orientation from independent row/column reversal flags.
    pub const fn from_axes(flip_rows: bool, flip_cols: bool) -> Self {
        match (flip_rows, flip_cols) {
            (false, false) => Orientation::Identity,
            (true, false) => Orientation::FlipRows,
            (false, true) => Orientation::FlipCols,
            (true, true) => Orientation::FlipBoth,
        }
    }

    pub const fn flips_rows(self) -> bool {
        matches!(self, Orientation::FlipRows | Orientation::FlipBoth)
    }

    pub const fn flips_cols(self) -> bool {
        matches!(self, Orientation::FlipCols | Orientation::FlipBoth)
    }

    /// Toggle row reversal
    pub const fn toggle_rows(self) -> Self {
        Self::from_axes(!self.flips_rows(), self.flips_cols())
    }

    /// Toggle column reversal
    pub const fn toggle_cols(self) -> Self {
        Self::from_axes(self.flips_rows(), !self.flips_cols())
    }

    /// Map an output position to the grid position it reads from.
    ///
    /// `row` and `col` must be below `side`.
    ///
    /// ```
    /// use bitmosaic_types::Orientation;
    ///
    /// assert_eq!(Orientation::Identity.source(4, 0, 1), (0, 1));
    /// assert_eq!(Orientation::FlipRows.source(4, 0, 1), (3, 1));
    /// assert_eq!(Orientation::FlipCols.source(4, 0, 1), (0, 2));
    /// assert_eq!(Orientation::FlipBoth.source(4, 0, 1), (3, 2));
    /// ```
    #[inline(always)]
    pub const fn source(self, side: usize, row: usize, col: usize) -> (usize, usize) {
        let r = if self.flips_rows() { side - 1 - row } else { row };
        let c = if self.flips_cols() { side - 1 - col } else { col };
        (r, c)
    }
}

/// Error returned when a glyph string is not exactly one grapheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphError {
    pub value: String,
    pub graphemes: usize,
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "glyph \"{}\" must be exactly one character (found {})",
            self.value, self.graphemes
        )
    }
}

impl std::error::Error for GlyphError {}

/// A single user-perceived character, stored as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph(String);

impl Glyph {
    /// Build a glyph from a string holding exactly one extended grapheme cluster.
    ///
    /// ```
    /// use bitmosaic_types::Glyph;
    ///
    /// assert!(Glyph::new("█").is_ok());
    /// assert!(Glyph::new("e\u{301}").is_ok()); // e + combining acute
    /// assert!(Glyph::new("ab").is_err());
    /// assert!(Glyph::new("").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, GlyphError> {
        let value = value.into();
        let graphemes = value.graphemes(true).count();
        if graphemes != 1 {
            return Err(GlyphError { value, graphemes });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the renderer needs besides the grid itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    fill: Glyph,
    empty: Glyph,
    orientation: Orientation,
    doubled: bool,
    color: Option<Rgb>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(
            Glyph(DEFAULT_FILL.to_string()),
            Glyph(DEFAULT_EMPTY.to_string()),
        )
    }
}

impl RenderConfig {
    pub fn new(fill: Glyph, empty: Glyph) -> Self {
        Self {
            fill,
            empty,
            orientation: Orientation::Identity,
            doubled: false,
            color: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_doubled(mut self, doubled: bool) -> Self {
        self.doubled = doubled;
        self
    }

    pub fn with_color(mut self, color: Option<Rgb>) -> Self {
        self.color = color;
        self
    }

    pub fn fill(&self) -> &Glyph {
        &self.fill
    }

    pub fn empty(&self) -> &Glyph {
        &self.empty
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn doubled(&self) -> bool {
        self.doubled
    }

    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    /// Glyph for a cell value
    #[inline(always)]
    pub fn glyph_for(&self, cell: bool) -> &str {
        if cell {
            self.fill.as_str()
        } else {
            self.empty.as_str()
        }
    }

    /// How many times each token is repeated along a row.
    pub fn repeat(&self) -> usize {
        if self.doubled {
            2
        } else {
            1
        }
    }
}
