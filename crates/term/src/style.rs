//! Truecolor escape sequences for the color wrap.
//!
//! Sequences come from crossterm commands so the bytes match what the rest of
//! the terminal stack emits: `ESC[38;2;R;G;Bm` to set the foreground and
//! `ESC[0m` to reset.

use std::io;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    Command, QueueableCommand,
};

use crate::types::Rgb;

pub(crate) fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Escape sequence selecting `rgb` as the foreground color.
pub fn foreground_escape(rgb: Rgb) -> String {
    let mut out = String::with_capacity(20);
    // Writing into a String cannot fail.
    let _ = SetForegroundColor(rgb_to_color(rgb)).write_ansi(&mut out);
    out
}

/// Escape sequence restoring the default colors.
pub fn reset_escape() -> String {
    let mut out = String::with_capacity(4);
    let _ = ResetColor.write_ansi(&mut out);
    out
}

pub(crate) fn queue_foreground<W: io::Write>(out: &mut W, rgb: Rgb) -> io::Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(rgb)))?;
    Ok(())
}

pub(crate) fn queue_reset<W: io::Write>(out: &mut W) -> io::Result<()> {
    out.queue(ResetColor)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreground_is_truecolor_sgr() {
        assert_eq!(foreground_escape(Rgb::new(255, 0, 0)), "\x1b[38;2;255;0;0m");
        assert_eq!(foreground_escape(Rgb::new(235, 187, 9)), "\x1b[38;2;235;187;9m");
    }

    #[test]
    fn reset_is_sgr_zero() {
        assert_eq!(reset_escape(), "\x1b[0m");
    }

    #[test]
    fn queued_bytes_match_string_form() {
        let rgb = Rgb::new(1, 2, 3);
        let mut buf: Vec<u8> = Vec::new();
        queue_foreground(&mut buf, rgb).unwrap();
        queue_reset(&mut buf).unwrap();
        let expected = format!("{}{}", foreground_escape(rgb), reset_escape());
        assert_eq!(buf, expected.into_bytes());
    }
}
