//! Input validation errors.
//!
//! Every failure of the input layer ends up here. The binary maps these to a
//! process exit code with [`InputError::exit_code`]; nothing below the input
//! layer can fail.

use std::fmt;
use std::io;

use thiserror::Error;

/// Which glyph a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphRole {
    Fill,
    Empty,
}

impl fmt::Display for GlyphRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphRole::Fill => f.write_str("fill"),
            GlyphRole::Empty => f.write_str("empty"),
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    /// Unknown flag, missing value, `--help` or `--version`.
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("Bad integer: {value} ({reason})")]
    BadInteger { value: String, reason: String },

    #[error("{value} is out of range; size must be within 0 and {max} inclusive")]
    SizeOutOfRange { value: String, max: u32 },

    #[error("The {role} character \"{value}\" must be exactly one character long (found {graphemes})")]
    GlyphLength {
        role: GlyphRole,
        value: String,
        graphemes: usize,
    },

    #[error("Bad color: {value} (expected a hex value such as FF0000, or \"none\")")]
    BadColor { value: String },

    #[error("Aborted: a {side}x{side} image was not confirmed")]
    Declined { side: usize },

    #[error("Failed to read confirmation: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Process exit code for this error.
    ///
    /// Clap decides for usage errors (0 for help/version, 2 otherwise);
    /// every validation failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }

    /// True for `--help`/`--version`, which are not failures.
    pub fn is_informational(&self) -> bool {
        matches!(self, InputError::Usage(e) if e.exit_code() == 0)
    }
}
