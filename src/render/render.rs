use crate::{
    lexer::tokens::Token,
    theme::theme::{Color, Theme},
};

const ANSI_RESET: &str = "\x1b[0m";

fn ansi_foreground(color: Color) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Renders one tokenized line with 24-bit terminal colors.
pub fn render_ansi(tokens: &[Token], theme: &Theme) -> String {
    let mut result = String::new();

    for token in tokens {
        match theme.color(token.class) {
            Some(color) => {
                result.push_str(&ansi_foreground(color));
                result.push_str(&token.text);
                result.push_str(ANSI_RESET);
            }
            None => result.push_str(&token.text),
        }
    }

    result
}

pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Renders one tokenized line as colored `<span>`s.
///
/// An empty line renders as a lone `\n` so an editor overlay keeps its height.
pub fn render_html(tokens: &[Token], theme: &Theme) -> String {
    if tokens.is_empty() {
        return String::from("\n");
    }

    let mut result = String::new();

    for token in tokens {
        let text = escape_html(&token.text);
        match theme.color(token.class) {
            Some(color) => {
                result.push_str(&format!("<span style=\"color: {}\">{}</span>", color, text))
            }
            None => result.push_str(&text),
        }
    }

    result
}

pub fn render_document_ansi(lines: &[Vec<Token>], theme: &Theme) -> String {
    lines
        .iter()
        .map(|line| render_ansi(line, theme))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_document_html(lines: &[Vec<Token>], theme: &Theme) -> String {
    let body = lines
        .iter()
        .map(|line| format!("<div class=\"line\">{}</div>", render_html(line, theme)))
        .collect::<String>();

    // Inside <pre> any text between the line divs would render as an extra row.
    format!("<pre class=\"gomix\">{}</pre>", body)
}
