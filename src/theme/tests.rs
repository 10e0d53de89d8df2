use super::theme::{Color, Theme, TOKEN_COLORS};
use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenClass};

#[test]
fn test_default_theme_matches_table() {
    let theme = Theme::default();

    for (class, color) in TOKEN_COLORS {
        assert_eq!(theme.color(class), color, "{}", class);
    }
}

#[test]
fn test_table_covers_every_class_once() {
    for class in TokenClass::ALL {
        let count = TOKEN_COLORS.iter().filter(|(c, _)| *c == class).count();
        assert_eq!(count, 1, "{}", class);
    }
}

#[test]
fn test_default_colors() {
    let theme = Theme::default();

    assert_eq!(theme.color(TokenClass::Comment).unwrap().to_hex(), "#6A9955");
    assert_eq!(theme.color(TokenClass::KeywordDecl).unwrap().to_hex(), "#569CD6");
    assert_eq!(theme.color(TokenClass::Function).unwrap().to_hex(), "#DCDCAA");
    assert_eq!(theme.color(TokenClass::Whitespace), None);
}

#[test]
fn test_parse_color() {
    assert_eq!("#C586C0".parse::<Color>().unwrap(), Color::rgb(0xC5, 0x86, 0xC0));
    assert_eq!("#c586c0".parse::<Color>().unwrap(), Color::rgb(0xC5, 0x86, 0xC0));
    assert_eq!("#abc".parse::<Color>().unwrap(), Color::rgb(0xAA, 0xBB, 0xCC));
    assert_eq!(Color::rgb(1, 2, 255).to_string(), "#0102FF");
}

#[test]
fn test_parse_invalid_color() {
    for value in ["C586C0", "#C586C", "#GG0000", "#", "", "#+1+2+3"] {
        let error = value.parse::<Color>().unwrap_err();
        assert_eq!(
            error.get_kind(),
            &ErrorImpl::InvalidColor {
                value: value.to_string()
            }
        );
    }
}

#[test]
fn test_with_color() {
    let theme = Theme::default()
        .with_color(TokenClass::Keyword, Some(Color::rgb(0xFF, 0, 0)))
        .with_color(TokenClass::Plain, None);

    assert_eq!(theme.color(TokenClass::Keyword), Some(Color::rgb(0xFF, 0, 0)));
    assert_eq!(theme.color(TokenClass::Plain), None);
    assert_eq!(theme.color(TokenClass::String), Theme::default().color(TokenClass::String));
}

#[test]
fn test_parse_theme_overrides() {
    let source = "// warmer keywords\n\nkeyword = #FF8800\n  whitespace=#101010  \nplain =\n";
    let theme = Theme::parse(source, "warm.theme").unwrap();

    assert_eq!(theme.color(TokenClass::Keyword), Some(Color::rgb(0xFF, 0x88, 0x00)));
    assert_eq!(theme.color(TokenClass::Whitespace), Some(Color::rgb(0x10, 0x10, 0x10)));
    assert_eq!(theme.color(TokenClass::Plain), None);
    assert_eq!(theme.color(TokenClass::Number), Theme::default().color(TokenClass::Number));
}

#[test]
fn test_parse_theme_unknown_class() {
    let error = Theme::parse("keyword = #FF8800\nstrings = #CE9178", "warm.theme").unwrap_err();

    assert_eq!(error.get_error_name(), "UnknownTokenClass");
    assert_eq!(error.get_position().0, 2);
    assert_eq!(error.get_position().1.as_str(), "warm.theme");
}

#[test]
fn test_parse_theme_bad_color() {
    let error = Theme::parse("\n\nnumber = blue", "warm.theme").unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::InvalidColor {
            value: "blue".to_string()
        }
    );
    assert_eq!(error.get_position().0, 3);
}

#[test]
fn test_parse_theme_malformed_line() {
    let error = Theme::parse("keyword #FF8800", "warm.theme").unwrap_err();

    assert_eq!(error.get_error_name(), "MalformedThemeEntry");
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_load_missing_theme() {
    let error = Theme::load(std::path::Path::new("does/not/exist.theme")).unwrap_err();

    assert_eq!(error.get_error_name(), "ReadError");
}
