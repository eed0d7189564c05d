//! Terminal mosaic renderer.
//!
//! Turns a generated grid into glyph lines. The pure part ([`mosaic`]) builds
//! the lines and the optional color wrap; [`renderer`] streams the same bytes
//! to stdout or any other `io::Write` sink.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Treat glyphs as opaque tokens (any single grapheme, any byte length)
//! - Allow aspect correction (each cell 2 chars wide)

pub mod mosaic;
pub mod renderer;
pub mod style;

pub use bitmosaic_core as core;
pub use bitmosaic_types as types;

pub use mosaic::{push_line, render, Rendering};
pub use renderer::{render_into, TerminalRenderer};
pub use style::{foreground_escape, reset_escape};
