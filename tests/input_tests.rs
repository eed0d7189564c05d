//! Input layer tests - raw arguments to settings

use bitmosaic::input::{parse_settings, GlyphRole, InputError, Settings};
use bitmosaic::types::{Orientation, Rgb};

fn parse(args: &[&str]) -> Result<Settings, InputError> {
    let mut argv = vec!["bitmosaic"];
    argv.extend_from_slice(args);
    parse_settings(argv, &mut |_: &str| -> bool { panic!("unexpected confirmation prompt") })
}

#[test]
fn test_full_flag_set() {
    let settings = parse(&[
        "--size", "3", "--fill", "#", "--empty", ".", "--flipx", "--doubled", "--color", "EBBB09",
    ])
    .unwrap();

    assert_eq!(settings.size_exp, 3);
    assert_eq!(settings.side, 8);
    assert_eq!(settings.render.fill().as_str(), "#");
    assert_eq!(settings.render.empty().as_str(), ".");
    assert_eq!(settings.render.orientation(), Orientation::FlipRows);
    assert!(settings.render.doubled());
    assert_eq!(settings.render.color(), Some(Rgb::new(0xEB, 0xBB, 0x09)));
}

#[test]
fn test_both_flip_flags_are_honored() {
    // Long and short forms both reach their own flag.
    for args in [
        &["--flipx", "--flipy"][..],
        &["-fx", "-fy"][..],
        &["--FLIPY", "-FX"][..],
    ] {
        let settings = parse(args).unwrap();
        assert_eq!(settings.render.orientation(), Orientation::Identity, "{args:?}");
    }

    let only_y = parse(&["--flipy"]).unwrap();
    assert_eq!(only_y.render.orientation(), Orientation::FlipCols);
}

#[test]
fn test_case_insensitive_flags() {
    let settings = parse(&["-S", "2", "--DOUBLED", "-C", "none"]).unwrap();
    assert_eq!(settings.side, 4);
    assert!(settings.render.doubled());
    assert_eq!(settings.render.color(), None);
}

#[test]
fn test_bad_size_values() {
    assert!(matches!(parse(&["-s", "abc"]), Err(InputError::BadInteger { .. })));
    assert!(matches!(parse(&["-s", "31"]), Err(InputError::SizeOutOfRange { .. })));
    assert!(matches!(parse(&["-s", "-3"]), Err(InputError::SizeOutOfRange { .. })));
}

#[test]
fn test_bad_glyphs() {
    let err = parse(&["-e", "ab"]).unwrap_err();
    assert!(matches!(
        err,
        InputError::GlyphLength {
            role: GlyphRole::Empty,
            ..
        }
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_missing_value_is_a_usage_error() {
    let err = parse(&["--size"]).unwrap_err();
    assert!(matches!(err, InputError::Usage(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_help_is_informational() {
    let err = parse(&["--HELP"]).unwrap_err();
    assert!(err.is_informational());
    assert_eq!(err.exit_code(), 0);
}

#[test]
fn test_large_size_prompt_answer() {
    let argv = ["bitmosaic", "-s", "13"];

    let accepted = parse_settings(argv, &mut |_: &str| true).unwrap();
    assert_eq!(accepted.side, 8192);

    let declined = parse_settings(argv, &mut |_: &str| false).unwrap_err();
    assert!(matches!(declined, InputError::Declined { side: 8192 }));
    assert_eq!(declined.exit_code(), 1);

    assert!(parse(&["-s", "13", "--yes"]).is_ok());
}
