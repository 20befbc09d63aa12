//! Renderers that map token kinds to display styling.
//!
//! Purely presentational: tokens are rendered as inline spans in
//! their original order, so the visible text always matches the
//! tokenized source.

use crate::token::{Token, TokenKind};

const ANSI_RESET: &str = "\x1b[0m";

/// ANSI color sequence for a token kind, `None` for plain text.
#[must_use]
pub const fn ansi_color(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Keyword => Some("\x1b[35m"),
        TokenKind::String => Some("\x1b[32m"),
        TokenKind::Comment => Some("\x1b[90m"),
        TokenKind::Variable => Some("\x1b[36m"),
        TokenKind::Operator => Some("\x1b[33m"),
        TokenKind::Number => Some("\x1b[31m"),
        TokenKind::Function => Some("\x1b[34m"),
        TokenKind::Text => None,
    }
}

/// CSS class for a token kind, `None` for plain text.
#[must_use]
pub const fn css_class(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Keyword => Some("keyword"),
        TokenKind::String => Some("string"),
        TokenKind::Comment => Some("comment"),
        TokenKind::Variable => Some("variable"),
        TokenKind::Operator => Some("operator"),
        TokenKind::Number => Some("number"),
        TokenKind::Function => Some("function"),
        TokenKind::Text => None,
    }
}

/// Render tokens for a terminal, coloring each styled span and
/// resetting after it.
#[must_use]
pub fn to_ansi(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match ansi_color(token.kind) {
            Some(color) => {
                out.push_str(color);
                out.push_str(&token.value);
                out.push_str(ANSI_RESET);
            }
            None => out.push_str(&token.value),
        }
    }
    out
}

/// Render tokens as inline HTML spans. Token text is escaped; plain
/// text tokens carry no span.
#[must_use]
pub fn to_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match css_class(token.kind) {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                push_escaped(&mut out, &token.value);
                out.push_str("</span>");
            }
            None => push_escaped(&mut out, &token.value),
        }
    }
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
