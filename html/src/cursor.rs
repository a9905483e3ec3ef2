use nom::bytes::complete::{tag, take_till, take_until, take_while};
use nom::IResult;
use tracing::trace;

use crate::error::{ParseError, ParseErrorKind, Result};

/// What [`Cursor::scan_until`] stops at
#[derive(Clone, Copy)]
pub enum Delimiter {
    /// Any character matching the predicate
    Class(fn(char) -> bool),
    Char(char),
    /// A multi-character marker such as `-->`
    Marker(&'static str),
}

fn scan(input: &str, delimiter: Delimiter) -> IResult<&str, &str> {
    match delimiter {
        Delimiter::Class(pred) => take_till(pred)(input),
        Delimiter::Char(c) => take_till(|x: char| x == c)(input),
        Delimiter::Marker(marker) => take_until(marker)(input),
    }
}

/// A position within the source being parsed.
///
/// The offset only ever moves forward, and always lands on a character boundary.
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Look `n` characters past the current one without moving
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub fn looking_at(&self, literal: &str) -> bool {
        self.rest().starts_with(literal)
    }

    /// Everything from `start` up to the current offset
    pub fn since(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    fn advance_to(&mut self, rest: &'a str) {
        self.pos = self.source.len() - rest.len();
    }

    /// Consume `c` if it is the next character
    pub fn skip(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        let res: IResult<&str, &str> = take_while(char::is_whitespace)(self.rest());
        if let Ok((rest, _)) = res {
            self.advance_to(rest);
        }
    }

    /// Consume `literal`, failing if the source doesn't continue with it
    pub fn eat(&mut self, literal: &'static str) -> Result<()> {
        let res: IResult<&str, &str> = tag(literal)(self.rest());
        match res {
            Ok((rest, _)) => {
                self.advance_to(rest);
                Ok(())
            }
            Err(_) => Err(self.error(ParseErrorKind::ExpectedLiteral { expected: literal })),
        }
    }

    /// Consume character data up to the next `<` or the end of input
    pub fn take_text(&mut self) -> &'a str {
        let rest = self.rest();
        match scan(rest, Delimiter::Char('<')) {
            Ok((remaining, text)) => {
                self.advance_to(remaining);
                text
            }
            Err(_) => {
                self.pos = self.source.len();
                rest
            }
        }
    }

    /// Advance until `delimiter` matches, returning everything skipped over.
    /// The delimiter itself is left unconsumed.
    ///
    /// Running out of input first is an error naming `kind` and the partial token.
    pub fn scan_until(&mut self, delimiter: Delimiter, kind: &'static str) -> Result<&'a str> {
        let start = self.pos;
        match scan(self.rest(), delimiter) {
            Ok((rest, token)) if !rest.is_empty() => {
                self.advance_to(rest);
                Ok(token)
            }
            _ => {
                trace!(kind, start, "unterminated token");
                Err(self.error_at(
                    ParseErrorKind::Unterminated {
                        kind,
                        partial: self.rest().to_string(),
                    },
                    start,
                ))
            }
        }
    }

    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.pos)
    }

    pub fn error_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, self.source, offset)
    }
}

#[cfg(test)]
#[test]
fn test_scan_until() {
    let mut cursor = Cursor::new("div class=\"a\">");
    let name = cursor.scan_until(Delimiter::Class(char::is_whitespace), "tag");
    assert_eq!(name, Ok("div"));
    assert!(cursor.skip(' '));
    assert_eq!(cursor.scan_until(Delimiter::Char('='), "attribute name"), Ok("class"));
    assert_eq!(cursor.peek(), Some('='));
    assert_eq!(cursor.peek_nth(1), Some('"'));

    let mut cursor = Cursor::new("a comment -->rest");
    assert_eq!(cursor.scan_until(Delimiter::Marker("-->"), "comment"), Ok("a comment "));
    assert!(cursor.looking_at("-->"));
}

#[cfg(test)]
#[test]
fn test_scan_unterminated() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.skip('a');
    let err = cursor.scan_until(Delimiter::Char('>'), "tag").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::Unterminated {
            kind: "tag",
            partial: "b\ncd".to_string()
        }
    );
    assert_eq!(err.position.column, 2);

    let mut cursor = Cursor::new("no marker here");
    assert!(cursor.scan_until(Delimiter::Marker("-->"), "comment").is_err());
}

#[cfg(test)]
#[test]
fn test_take_text() {
    let mut cursor = Cursor::new("Hello <b>");
    assert_eq!(cursor.take_text(), "Hello ");
    assert_eq!(cursor.peek(), Some('<'));
    assert_eq!(cursor.take_text(), "");

    let mut cursor = Cursor::new("no tags");
    assert_eq!(cursor.take_text(), "no tags");
    assert!(cursor.is_eof());
}

#[cfg(test)]
#[test]
fn test_eat() {
    let mut cursor = Cursor::new("<!--x");
    assert!(cursor.eat("<!--").is_ok());
    assert_eq!(cursor.offset(), 4);
    let err = cursor.eat("-->").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedLiteral { expected: "-->" });
}
