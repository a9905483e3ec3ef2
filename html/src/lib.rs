//! A small, strict HTML fragment parser.
//!
//! [`parse_html`] turns markup into a tree of [`DOMNode`]s. Every element other than the
//! void elements (`br`, `img`, ...) must be closed by a matching end tag; anything else is a
//! [`ParseError`] carrying the line and column it was found at.

use tracing::{debug, span, Level};

mod cursor;
mod dom;
mod entities;
mod error;
mod parsing;

pub use dom::{collapse_whitespace, DOMAttributes, DOMElement, DOMNode};
pub use error::{ParseError, ParseErrorKind, Position};
pub use parsing::is_self_closing;

use cursor::Cursor;

/// Parse a complete HTML fragment into its top-level nodes
///
/// Each open element adds a level of recursion, so stack use grows with nesting depth.
pub fn parse_html(input: &str) -> Result<Vec<DOMNode>, ParseError> {
    let span = span!(Level::DEBUG, "Parsing HTML", len = input.len());
    let _enter = span.enter();
    let mut cursor = Cursor::new(input);
    let nodes = parsing::parse_inner_html(&mut cursor, true);
    match &nodes {
        Ok(nodes) => debug!(count = nodes.len(), "parsed top-level nodes"),
        Err(err) => debug!(%err, "parse failed"),
    }
    nodes
}

#[cfg(test)]
mod tests;
