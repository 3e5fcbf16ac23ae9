use taglog::fmt::{Color, colorize};
use taglog::{ColorMode, Palette, Style};

#[test]
fn from_hex_parses_valid_colors() {
    let color = Color::from_hex("#ff00aa");
    assert_eq!(color, Color::new(255, 0, 170));

    let color = Color::from_hex("01a2ff");
    assert_eq!(color, Color::new(1, 162, 255));
}

#[test]
fn from_hex_invalid_length_defaults_white() {
    let color = Color::from_hex("#fff");
    assert_eq!(color, Color::white());
}

#[test]
fn from_hex_invalid_component_defaults_to_255() {
    let color = Color::from_hex("zz00aa");
    assert_eq!(color, Color::new(255, 0, 170));
}

#[test]
fn ansi_sequence_matches_rgb() {
    let color = Color::new(10, 20, 30);
    assert_eq!(color.fg_ansi(), "\x1b[38;2;10;20;30m");
    assert_eq!(color.to_string(), "#0a141e");
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("hi", Color::new(1, 2, 3)), "\x1b[38;2;1;2;3mhi\x1b[0m");
}

#[test]
fn palette_maps_styles_to_colors() {
    let palette = Palette::default();
    assert_eq!(palette.color(Style::Soft), Color::blue());
    assert_eq!(palette.color(Style::Emphasized), Color::white());
    assert_eq!(palette.color(Style::Error), Color::red());
    assert_eq!(
        palette.render("x", Style::Error),
        colorize("x", Color::red())
    );
}

#[test]
fn color_mode_parses_names() {
    assert_eq!("auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
    assert_eq!("Always".parse::<ColorMode>().unwrap(), ColorMode::Always);
    assert_eq!("off".parse::<ColorMode>().unwrap(), ColorMode::Never);
    assert!(matches!(
        "sometimes".parse::<ColorMode>(),
        Err(taglog::Error::InvalidColorMode(_))
    ));
}

#[test]
fn explicit_color_modes_ignore_environment() {
    assert!(ColorMode::Always.enabled(false));
    assert!(!ColorMode::Never.enabled(true));
}

#[test]
fn auto_mode_needs_a_terminal_sink() {
    assert!(!ColorMode::Auto.enabled(false));
}
