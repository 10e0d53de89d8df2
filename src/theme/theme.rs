use std::{fmt::Display, fs, path::Path, str::FromStr, sync::Arc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenClass,
    Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            Error::new(
                ErrorImpl::InvalidColor {
                    value: value.to_string(),
                },
                Position::null(),
            )
        };

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Color::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #RGB expands each nibble, #abc == #aabbcc
            3 => Ok(Color::rgb(
                channel(&digits[0..1])? * 0x11,
                channel(&digits[1..2])? * 0x11,
                channel(&digits[2..3])? * 0x11,
            )),
            _ => Err(invalid()),
        }
    }
}

/// Default color for every token class. `None` inherits the surrounding
/// text style.
pub const TOKEN_COLORS: [(TokenClass, Option<Color>); 12] = [
    (TokenClass::Comment, Some(Color::rgb(0x6A, 0x99, 0x55))),
    (TokenClass::String, Some(Color::rgb(0xCE, 0x91, 0x78))),
    (TokenClass::Number, Some(Color::rgb(0xB5, 0xCE, 0xA8))),
    (TokenClass::Keyword, Some(Color::rgb(0xC5, 0x86, 0xC0))),
    (TokenClass::KeywordDecl, Some(Color::rgb(0x56, 0x9C, 0xD6))),
    (TokenClass::Constant, Some(Color::rgb(0x56, 0x9C, 0xD6))),
    (TokenClass::Function, Some(Color::rgb(0xDC, 0xDC, 0xAA))),
    (TokenClass::Operator, Some(Color::rgb(0xD4, 0xD4, 0xD4))),
    (TokenClass::Punctuation, Some(Color::rgb(0x80, 0x80, 0x80))),
    (TokenClass::Variable, Some(Color::rgb(0x9C, 0xDC, 0xFE))),
    (TokenClass::Whitespace, None),
    (TokenClass::Plain, Some(Color::rgb(0xD4, 0xD4, 0xD4))),
];

lazy_static! {
    static ref THEME_ENTRY: Regex =
        Regex::new(r"^\s*([A-Za-z][A-Za-z-]*)\s*=\s*(\S*)\s*$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    colors: [Option<Color>; 12],
}

impl Default for Theme {
    fn default() -> Self {
        let mut colors = [None; 12];
        for (class, color) in TOKEN_COLORS {
            colors[class.index()] = color;
        }
        Theme { colors }
    }
}

impl Theme {
    pub fn color(&self, class: TokenClass) -> Option<Color> {
        self.colors[class.index()]
    }

    pub fn with_color(mut self, class: TokenClass, color: Option<Color>) -> Self {
        self.colors[class.index()] = color;
        self
    }

    /// Applies a theme override file on top of the default colors.
    ///
    /// Each non-blank line is `label = #RRGGBB`; an empty value makes the
    /// class inherit the surrounding style. Lines starting with `//` are
    /// ignored.
    pub fn parse(source: &str, name: &str) -> Result<Theme, Error> {
        let file = Arc::new(name.to_string());
        let mut theme = Theme::default();

        for (index, line) in source.lines().enumerate() {
            let position = Position(index as u32 + 1, Arc::clone(&file));
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            let captures = THEME_ENTRY.captures(trimmed).ok_or_else(|| {
                Error::new(
                    ErrorImpl::MalformedThemeEntry {
                        entry: trimmed.to_string(),
                    },
                    position.clone(),
                )
            })?;

            let class = captures[1]
                .parse::<TokenClass>()
                .map_err(|e| e.at(position.clone()))?;

            let color = match &captures[2] {
                "" => None,
                value => Some(value.parse::<Color>().map_err(|e| e.at(position.clone()))?),
            };

            debug!(%class, color = ?color.map(|c| c.to_hex()), "theme override");
            theme = theme.with_color(class, color);
        }

        Ok(theme)
    }

    pub fn load(path: &Path) -> Result<Theme, Error> {
        let name = path.to_string_lossy().to_string();
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(
                ErrorImpl::ReadError {
                    path: name.clone(),
                    message: e.to_string(),
                },
                Position(0, Arc::new(name.clone())),
            )
        })?;

        debug!(path = %name, "loading theme");
        Theme::parse(&source, &name)
    }
}
