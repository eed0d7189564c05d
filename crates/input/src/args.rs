//! Command-line flags.
//!
//! Flags are case-insensitive and accept the two-letter short forms `-fx` and
//! `-fy`. Clap supports neither, so raw arguments pass through
//! [`normalize_args`] first.

use std::ffi::OsString;

use clap::Parser;

const LONG_ABOUT: &str = r#"Draws the bitwise Sierpinski mosaic: cell (row, col) is filled when
row AND col is zero.

EXAMPLES:
    # 32x32, red, square-ish cells
    bitmosaic -s 5 -c FF0000 -d

    # ASCII output, mirrored along the X axis
    bitmosaic -f '#' -e '.' -fx

All flags are case insensitive: --empty, --Empty and --EMPTY are the same."#;

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "bitmosaic")]
#[command(version)]
#[command(about = "Renders a bitwise Sierpinski mosaic as text")]
#[command(long_about = LONG_ABOUT)]
pub struct Cli {
    /// Size exponent: the image is 2^SIZE cells wide (0 to 30, default: 4)
    #[arg(short, long, value_name = "EXP", allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Character used for filled cells (default: █)
    #[arg(
        short,
        long,
        value_name = "CHAR",
        allow_hyphen_values = true,
        env = "BITMOSAIC_FILL"
    )]
    pub fill: Option<String>,

    /// Character used for empty cells (default: ░)
    #[arg(
        short,
        long,
        value_name = "CHAR",
        allow_hyphen_values = true,
        env = "BITMOSAIC_EMPTY"
    )]
    pub empty: Option<String>,

    /// Flip the image by the X axis (short form: -fx)
    #[arg(long = "flipx")]
    pub flip_x: bool,

    /// Flip the image by the Y axis (short form: -fy)
    #[arg(long = "flipy")]
    pub flip_y: bool,

    /// Double every cell horizontally to approach a 1:1 aspect ratio
    #[arg(short, long)]
    pub doubled: bool,

    /// Color of the output as hex, e.g. FF0000 (red) or EBBB09 (yellow); "none" disables
    #[arg(
        short,
        long,
        value_name = "HEX",
        allow_hyphen_values = true,
        env = "BITMOSAIC_COLOR"
    )]
    pub color: Option<String>,

    /// Skip the confirmation asked for very large images
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(
        long,
        env = "NO_COLOR",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub no_color: bool,
}

/// Spelling of every recognized flag, lowercase, mapped to what clap expects.
const FLAGS: &[(&str, &str)] = &[
    ("-s", "-s"),
    ("--size", "--size"),
    ("-f", "-f"),
    ("--fill", "--fill"),
    ("-e", "-e"),
    ("--empty", "--empty"),
    ("-fx", "--flipx"),
    ("--flipx", "--flipx"),
    ("-fy", "--flipy"),
    ("--flipy", "--flipy"),
    ("-d", "-d"),
    ("--doubled", "--doubled"),
    ("-c", "-c"),
    ("--color", "--color"),
    ("-y", "-y"),
    ("--yes", "--yes"),
    ("--no-color", "--no-color"),
    ("-h", "-h"),
    ("--help", "--help"),
    ("--version", "--version"),
];

fn canonical_flag(arg: &str) -> Option<&'static str> {
    let lower = arg.to_ascii_lowercase();
    FLAGS
        .iter()
        .find(|(spelling, _)| *spelling == lower)
        .map(|(_, canonical)| *canonical)
}

/// Rewrite flag spellings into the form clap understands.
///
/// The first argument is the program name and is kept as is. Only arguments
/// that match a known flag (ignoring case) are touched, so flag values such
/// as glyphs pass through unchanged. `--flag=value` keeps its value as given.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();

    for arg in iter {
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        let normalized = match text.split_once('=') {
            Some((name, value)) if name.starts_with("--") => {
                canonical_flag(name).map(|flag| format!("{flag}={value}"))
            }
            _ if text.starts_with('-') => canonical_flag(text).map(str::to_string),
            _ => None,
        };

        out.push(normalized.map(OsString::from).unwrap_or(arg));
    }

    out
}
