use std::fmt::{self, Display};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// A 1-based line/column location in the source
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Locate the byte `offset` within `source`.
    ///
    /// Every `\r` and every `\n` starts a new line, so a `\r\n` pair counts twice.
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for (pos, c) in source.char_indices() {
            if pos >= offset {
                break;
            }
            if c == '\r' || c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("Unexpected end tag")]
    UnexpectedEndTag,
    #[error("Couldn't find end tag for \"{tag}\"")]
    MissingEndTag { tag: String },
    #[error("Unmatching start/end tags: \"{start}\"/\"{end}\"")]
    MismatchedEndTag { start: String, end: String },
    #[error("Unfinished {kind}: \"{partial}\"")]
    Unterminated { kind: &'static str, partial: String },
    #[error("Expected \"{expected}\"")]
    ExpectedLiteral { expected: &'static str },
    #[error("Expected = after attribute \"{name}\"")]
    MissingEquals { name: String },
    #[error("Expected \" to open the value of attribute \"{name}\"")]
    MissingQuote { name: String },
}

/// A fatal parse failure together with where it happened
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{kind}, at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: &str, offset: usize) -> Self {
        Self {
            kind,
            position: Position::locate(source, offset),
        }
    }
}

#[cfg(test)]
#[test]
fn test_locate() {
    assert_eq!(Position::locate("abc", 0), Position { line: 1, column: 1 });
    assert_eq!(Position::locate("abc", 2), Position { line: 1, column: 3 });
    assert_eq!(Position::locate("a\nbc", 3), Position { line: 2, column: 2 });
    assert_eq!(Position::locate("a\r\nb", 3), Position { line: 3, column: 1 });
    // Columns count characters, not bytes
    assert_eq!(Position::locate("åäö<", 6), Position { line: 1, column: 4 });
}

#[cfg(test)]
#[test]
fn test_error_display() {
    let err = ParseError::new(ParseErrorKind::UnexpectedEndTag, "x\n</div>", 2);
    assert_eq!(err.to_string(), "Unexpected end tag, at 2:1");
}
