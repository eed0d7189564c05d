//! Input layer: program arguments to validated settings.
//!
//! This is the only fallible part of the program. It parses flags with clap,
//! checks sizes, glyphs and colors, and asks before very large images.
//! Whatever it returns can be handed to the core without further checks.

pub mod args;
pub mod confirm;
pub mod error;
pub mod settings;

pub use bitmosaic_types as types;

pub use args::{normalize_args, Cli};
pub use confirm::{Confirm, StdinConfirm};
pub use error::{GlyphRole, InputError};
pub use settings::{orientation_from_flags, parse_color, parse_glyph, parse_size_exp, Settings};

use std::ffi::OsString;

use clap::Parser;

/// Parse and validate program arguments (including the program name).
pub fn parse_settings<I, T, C>(args: I, confirm: &mut C) -> Result<Settings, InputError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    C: Confirm + ?Sized,
{
    let cli = Cli::try_parse_from(normalize_args(args))?;
    Settings::from_cli(&cli, confirm)
}
