//! Pluggable script minification

use crate::error::{Error, Result};
use std::fmt::Debug;

/// Shrinks JavaScript source without changing what it does
pub trait Minifier: Debug + Send + Sync {
    fn minify(&self, source: &str) -> Result<String>;
}

/// Strips `//` and `/* */` comments outside string and regex literals,
/// trims every line and drops the blank ones. Line breaks are kept so
/// automatic semicolon insertion still sees them.
///
/// A `/` opens a regex literal at the start of a line, after one of
/// `( , = : [ ! & | ? { } ;` or after a keyword such as `return`; anywhere
/// else it is division.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentStrippingMinifier;

/// Keywords after which an expression, and so a regex literal, may start
const REGEX_KEYWORDS: &[&str] = &[
    "case", "delete", "do", "else", "in", "instanceof", "new", "of", "return", "throw", "typeof",
    "void", "yield",
];

enum State {
    Normal,
    AfterSlash { regex_allowed: bool },
    InRegex { in_class: bool },
    InRegexEscape { in_class: bool },
    InString(char),
    InStringEscape(char),
    InBlockComment,
    InBlockCommentEnd,
    InLineComment,
}

impl CommentStrippingMinifier {
    fn strip_comments(source: &str) -> Result<String> {
        let mut output = String::with_capacity(source.len());
        let mut state = State::Normal;

        for ch in source.chars() {
            state = match state {
                State::Normal => {
                    output.push(ch);
                    match ch {
                        '"' | '\'' | '`' => State::InString(ch),
                        '/' => State::AfterSlash {
                            regex_allowed: starts_regex(&output[..output.len() - 1]),
                        },
                        _ => State::Normal,
                    }
                }
                State::AfterSlash { regex_allowed } => match ch {
                    '*' => {
                        output.pop();
                        State::InBlockComment
                    }
                    '/' => {
                        output.pop();
                        State::InLineComment
                    }
                    '\n' | '\r' if regex_allowed => return Err(unterminated_regex()),
                    _ if regex_allowed => {
                        output.push(ch);
                        regex_state(ch, false)
                    }
                    '"' | '\'' | '`' => {
                        output.push(ch);
                        State::InString(ch)
                    }
                    _ => {
                        output.push(ch);
                        State::Normal
                    }
                },
                State::InRegex { in_class } => {
                    if ch == '\n' || ch == '\r' {
                        return Err(unterminated_regex());
                    }
                    output.push(ch);
                    if ch == '/' && !in_class {
                        State::Normal
                    } else {
                        regex_state(ch, in_class)
                    }
                }
                State::InRegexEscape { in_class } => {
                    if ch == '\n' || ch == '\r' {
                        return Err(unterminated_regex());
                    }
                    output.push(ch);
                    State::InRegex { in_class }
                }
                State::InString(quote) => {
                    output.push(ch);
                    if ch == '\\' {
                        State::InStringEscape(quote)
                    } else if ch == quote {
                        State::Normal
                    } else {
                        State::InString(quote)
                    }
                }
                State::InStringEscape(quote) => {
                    output.push(ch);
                    State::InString(quote)
                }
                State::InBlockComment => {
                    if ch == '*' {
                        State::InBlockCommentEnd
                    } else {
                        State::InBlockComment
                    }
                }
                State::InBlockCommentEnd => match ch {
                    '/' => {
                        // Keep tokens on either side of the comment apart
                        output.push(' ');
                        State::Normal
                    }
                    '*' => State::InBlockCommentEnd,
                    _ => State::InBlockComment,
                },
                State::InLineComment => {
                    if ch == '\n' || ch == '\r' {
                        output.push(ch);
                        State::Normal
                    } else {
                        State::InLineComment
                    }
                }
            };
        }

        match state {
            State::InBlockComment | State::InBlockCommentEnd => {
                Err(Error::Other("unterminated block comment".to_string()))
            }
            State::InString(quote) | State::InStringEscape(quote) if quote != '`' => {
                Err(Error::Other(format!("unterminated {quote} string literal")))
            }
            State::AfterSlash { regex_allowed: true } | State::InRegex { .. } | State::InRegexEscape { .. } => {
                Err(unterminated_regex())
            }
            _ => Ok(output),
        }
    }
}

/// Whether a `/` following `preceding` starts a regex literal
fn starts_regex(preceding: &str) -> bool {
    let trimmed = preceding.trim_end_matches([' ', '\t']);
    let Some(last) = trimmed.chars().next_back() else {
        return true;
    };
    if matches!(
        last,
        '\n' | '\r' | '(' | ',' | '=' | ':' | '[' | '!' | '&' | '|' | '?' | '{' | '}' | ';'
    ) {
        return true;
    }

    let word_start = trimmed
        .rfind(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .map_or(0, |i| i + 1);
    REGEX_KEYWORDS.contains(&&trimmed[word_start..])
}

/// State after `ch` inside a regex body
fn regex_state(ch: char, in_class: bool) -> State {
    match ch {
        '\\' => State::InRegexEscape { in_class },
        '[' => State::InRegex { in_class: true },
        ']' if in_class => State::InRegex { in_class: false },
        _ => State::InRegex { in_class },
    }
}

fn unterminated_regex() -> Error {
    Error::Other("unterminated regex literal".to_string())
}

impl Minifier for CommentStrippingMinifier {
    fn minify(&self, source: &str) -> Result<String> {
        let stripped = Self::strip_comments(source)?;
        let lines: Vec<&str> = stripped
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Ok(lines.join("\n"))
    }
}
