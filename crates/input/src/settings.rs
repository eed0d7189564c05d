//! Settings: validated program input.
//!
//! Turns raw flag values into a [`Settings`] the core can consume without any
//! further checks.

use tracing::{debug, info};

use crate::args::Cli;
use crate::confirm::Confirm;
use crate::error::{GlyphRole, InputError};
use crate::types::{
    estimated_mib, side_from_exp, Glyph, Orientation, RenderConfig, Rgb, CONFIRM_SIZE_EXP,
    DEFAULT_EMPTY, DEFAULT_FILL, DEFAULT_SIZE_EXP, MAX_SIZE_EXP,
};

/// Reading order used when neither flip flag is given.
pub const DEFAULT_ORIENTATION: Orientation = Orientation::FlipBoth;

/// Fully validated input for one generate + render run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Side exponent; the grid is `2^size_exp` wide.
    pub size_exp: u32,
    /// Grid side length.
    pub side: usize,
    pub render: RenderConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size_exp: DEFAULT_SIZE_EXP,
            side: 1 << DEFAULT_SIZE_EXP,
            render: RenderConfig::default().with_orientation(DEFAULT_ORIENTATION),
        }
    }
}

impl Settings {
    /// Validate parsed flags.
    ///
    /// `confirm` is only asked when the size exponent is above
    /// [`CONFIRM_SIZE_EXP`] and `--yes` was not given.
    pub fn from_cli<C: Confirm + ?Sized>(cli: &Cli, confirm: &mut C) -> Result<Self, InputError> {
        let size_exp = match cli.size.as_deref() {
            Some(value) => parse_size_exp(value)?,
            None => DEFAULT_SIZE_EXP,
        };
        let side = side_from_exp(size_exp).ok_or_else(|| InputError::SizeOutOfRange {
            value: size_exp.to_string(),
            max: MAX_SIZE_EXP,
        })?;

        // Glyphs and color first so a typo does not cost a prompt.
        let fill = parse_glyph(cli.fill.as_deref().unwrap_or(DEFAULT_FILL), GlyphRole::Fill)?;
        let empty = parse_glyph(
            cli.empty.as_deref().unwrap_or(DEFAULT_EMPTY),
            GlyphRole::Empty,
        )?;
        let color = match cli.color.as_deref() {
            Some(value) => parse_color(value)?,
            None => None,
        };
        let color = if cli.no_color { None } else { color };

        if size_exp > CONFIRM_SIZE_EXP && !cli.yes {
            let prompt = large_size_prompt(size_exp);
            info!(size_exp, side, "asking for large size confirmation");
            if !confirm.confirm(&prompt)? {
                return Err(InputError::Declined { side });
            }
        }

        let render = RenderConfig::new(fill, empty)
            .with_orientation(orientation_from_flags(cli.flip_x, cli.flip_y))
            .with_doubled(cli.doubled)
            .with_color(color);

        let settings = Self {
            size_exp,
            side,
            render,
        };
        debug!(?settings, "input validated");
        Ok(settings)
    }
}

/// Orientation selected by the two flip flags.
///
/// Without flags the grid is read with both axes reversed. `--flipx` toggles
/// column reversal and `--flipy` toggles row reversal; both together give the
/// identity reading.
pub fn orientation_from_flags(flip_x: bool, flip_y: bool) -> Orientation {
    let mut orientation = DEFAULT_ORIENTATION;
    if flip_x {
        orientation = orientation.toggle_cols();
    }
    if flip_y {
        orientation = orientation.toggle_rows();
    }
    orientation
}

/// Parse a size exponent in `0..=MAX_SIZE_EXP`.
pub fn parse_size_exp(value: &str) -> Result<u32, InputError> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| InputError::BadInteger {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

    if !(0..=i64::from(MAX_SIZE_EXP)).contains(&parsed) {
        return Err(InputError::SizeOutOfRange {
            value: value.to_string(),
            max: MAX_SIZE_EXP,
        });
    }
    Ok(parsed as u32)
}

/// Check that `value` is exactly one grapheme.
pub fn parse_glyph(value: &str, role: GlyphRole) -> Result<Glyph, InputError> {
    Glyph::new(value).map_err(|e| InputError::GlyphLength {
        role,
        value: e.value,
        graphemes: e.graphemes,
    })
}

/// Parse a hex color (`RRGGBB`, optional `#` or `0x` prefix), or `none`.
///
/// Up to six hex digits are accepted; shorter values are zero-extended on the
/// left, so `FF` is pure blue.
pub fn parse_color(value: &str) -> Result<Option<Rgb>, InputError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let bad = || InputError::BadColor {
        value: value.to_string(),
    };
    if digits.is_empty() || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }

    let packed = u32::from_str_radix(digits, 16).map_err(|_| bad())?;
    Ok(Some(Rgb::from_u24(packed)))
}

fn large_size_prompt(size_exp: u32) -> String {
    format!(
        "The resulting output could be large enough to exhaust your memory \
         (2^{size_exp} > 2^{CONFIRM_SIZE_EXP}, about {:.0} MiB estimated). Do you want to continue?",
        estimated_mib(size_exp)
    )
}
