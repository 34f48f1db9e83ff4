//! Cosmetic line highlighter.
//!
//! Keywords are matched as plain substrings, so `gift` lights up its `if`.
//! String literals stop at the next quote; escaped or nested quotes are not
//! understood.

use crossterm::style::{Stylize, style};
use regex::Regex;
use std::sync::LazyLock;

pub const KEYWORDS: &[&str] = &[
    "public", "class", "void", "static", "if", "else", "import", "try", "catch",
];

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let keywords = KEYWORDS.join("|");
    Regex::new(&format!(
        r#"(?P<str>".*?")|(?P<num>\b[0-9]+\b)|(?P<kw>{keywords})"#
    ))
    .expect("static highlight pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Keyword,
    Str,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Split `line` into spans; joining the texts gives back `line`.
pub fn tokenize(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(line) {
        let (kind, m) = if let Some(m) = caps.name("str") {
            (TokenKind::Str, m)
        } else if let Some(m) = caps.name("num") {
            (TokenKind::Number, m)
        } else if let Some(m) = caps.name("kw") {
            (TokenKind::Keyword, m)
        } else {
            continue;
        };

        if m.start() > last {
            spans.push(Span {
                kind: TokenKind::Plain,
                text: &line[last..m.start()],
            });
        }
        spans.push(Span {
            kind,
            text: m.as_str(),
        });
        last = m.end();
    }

    if last < line.len() {
        spans.push(Span {
            kind: TokenKind::Plain,
            text: &line[last..],
        });
    }
    spans
}

pub fn render(line: &str, enabled: bool) -> String {
    if !enabled {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 16);
    for span in tokenize(line) {
        match span.kind {
            TokenKind::Plain => out.push_str(span.text),
            TokenKind::Keyword => out.push_str(&style(span.text).yellow().to_string()),
            TokenKind::Str => out.push_str(&style(span.text).green().to_string()),
            TokenKind::Number => out.push_str(&style(span.text).blue().to_string()),
        }
    }
    out
}
