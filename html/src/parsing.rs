use lazy_static::lazy_static;
use std::collections::HashSet;
use tracing::trace;

use crate::cursor::{Cursor, Delimiter};
use crate::dom::{DOMAttributes, DOMElement, DOMNode};
use crate::entities::{decode_attribute, decode_text};
use crate::error::{ParseErrorKind, Result};

lazy_static! {
    /// Elements that never have children or an end tag
    static ref SELF_CLOSING_TAGS: HashSet<&'static str> = [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ]
    .into_iter()
    .collect();
}

pub fn is_self_closing(tag_name: &str) -> bool {
    SELF_CLOSING_TAGS.contains(tag_name)
}

/// Ends a tag name or an unquoted run inside a tag
fn is_tag_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '>' || c == '/'
}

fn is_attribute_name_end(c: char) -> bool {
    c == '=' || is_tag_delimiter(c)
}

/// The name and attributes of a start tag, before its children are known
#[derive(Debug, Eq, PartialEq)]
struct StartTag {
    tag_name: String,
    attributes: DOMAttributes,
}

impl StartTag {
    fn into_element(self, children: Vec<DOMNode>) -> DOMElement {
        DOMElement::new(self.tag_name, Some(self.attributes), children)
    }
}

/// What was found at a `<`
enum Markup {
    Node(DOMNode),
    /// A `</`, left unconsumed for the enclosing element
    EndTag,
}

/// Parse a sequence of sibling nodes, stopping at the end of input or at an end tag.
///
/// At the top level an end tag has nothing to close and is an error.
pub(crate) fn parse_inner_html(cursor: &mut Cursor, top_level: bool) -> Result<Vec<DOMNode>> {
    trace!(offset = cursor.offset(), top_level, "parsing inner html");
    let mut nodes = Vec::new();
    loop {
        let text = cursor.take_text();
        if !text.is_empty() {
            trace!(len = text.len(), "text node");
            nodes.push(DOMNode::text(decode_text(text)));
        }
        if cursor.is_eof() {
            return Ok(nodes);
        }
        match parse_markup(cursor)? {
            Markup::Node(node) => nodes.push(node),
            Markup::EndTag if top_level => {
                return Err(cursor.error(ParseErrorKind::UnexpectedEndTag));
            }
            Markup::EndTag => return Ok(nodes),
        }
    }
}

/// Dispatch on the characters following `<`
fn parse_markup(cursor: &mut Cursor) -> Result<Markup> {
    if cursor.peek_nth(1) == Some('!') {
        match cursor.peek_nth(2) {
            Some('-') => return parse_comment(cursor).map(Markup::Node),
            Some('D') => return parse_doctype(cursor).map(Markup::Node),
            _ => {}
        }
    }
    parse_element(cursor)
}

fn parse_comment(cursor: &mut Cursor) -> Result<DOMNode> {
    cursor.eat("<!--")?;
    let content = cursor.scan_until(Delimiter::Marker("-->"), "comment")?;
    cursor.eat("-->")?;
    trace!("comment node");
    Ok(DOMNode::comment(decode_text(content)))
}

fn parse_doctype(cursor: &mut Cursor) -> Result<DOMNode> {
    cursor.eat("<!DOCTYPE")?;
    let content = cursor.scan_until(Delimiter::Char('>'), "doctype closing bracket")?;
    cursor.eat(">")?;
    trace!(content, "doctype node");
    Ok(DOMNode::doctype(content))
}

fn parse_element(cursor: &mut Cursor) -> Result<Markup> {
    if cursor.looking_at("</") {
        return Ok(Markup::EndTag);
    }
    let start = parse_start_tag(cursor)?;
    if is_self_closing(&start.tag_name) {
        trace!(tag = %start.tag_name, "self-closing element");
        return Ok(Markup::Node(start.into_element(vec![]).into()));
    }

    let children = parse_inner_html(cursor, false)?;
    if !cursor.looking_at("</") {
        return Err(cursor.error(ParseErrorKind::MissingEndTag {
            tag: start.tag_name,
        }));
    }
    cursor.eat("</")?;
    let end = cursor.scan_until(Delimiter::Char('>'), "closing bracket")?;
    if end != start.tag_name {
        return Err(cursor.error(ParseErrorKind::MismatchedEndTag {
            start: start.tag_name,
            end: end.to_string(),
        }));
    }
    cursor.eat(">")?;
    trace!(tag = %start.tag_name, children = children.len(), "element");
    Ok(Markup::Node(start.into_element(children).into()))
}

/// Parse `<name attr="value" ...>` (or `.../>`), leaving the cursor after the `>`
fn parse_start_tag(cursor: &mut Cursor) -> Result<StartTag> {
    cursor.eat("<")?;
    let start = cursor.offset();
    let tag_name = cursor.scan_until(Delimiter::Class(is_tag_delimiter), "tag")?;
    let mut attributes = DOMAttributes::empty();
    loop {
        cursor.skip_whitespace();
        cursor.skip('/');
        cursor.skip_whitespace();
        match cursor.peek() {
            Some('>') => break,
            Some(_) => {
                let (name, value) = parse_attribute(cursor)?;
                attributes.insert(name, value);
                cursor.scan_until(Delimiter::Class(is_tag_delimiter), "tag")?;
            }
            None => {
                let partial = cursor.since(start).to_string();
                let kind = ParseErrorKind::Unterminated { kind: "tag", partial };
                return Err(cursor.error_at(kind, start));
            }
        }
    }
    cursor.eat(">")?;
    Ok(StartTag {
        tag_name: tag_name.to_string(),
        attributes,
    })
}

/// Parse `name="value"`, returning the name and the decoded value
fn parse_attribute(cursor: &mut Cursor) -> Result<(String, String)> {
    let name = cursor.scan_until(Delimiter::Class(is_attribute_name_end), "attribute name")?;
    if !cursor.skip('=') {
        return Err(cursor.error(ParseErrorKind::MissingEquals {
            name: name.to_string(),
        }));
    }
    if !cursor.skip('"') {
        return Err(cursor.error(ParseErrorKind::MissingQuote {
            name: name.to_string(),
        }));
    }
    let value = cursor.scan_until(Delimiter::Char('"'), "attribute value")?;
    cursor.eat("\"")?;
    Ok((name.to_string(), decode_attribute(value)))
}

#[cfg(test)]
fn parse(input: &str) -> Result<Vec<DOMNode>> {
    parse_inner_html(&mut Cursor::new(input), true)
}

#[cfg(test)]
#[test]
fn test_start_tag_parse() {
    let mut cursor = Cursor::new(r#"<div>"#);
    let target = StartTag {
        tag_name: "div".to_string(),
        attributes: DOMAttributes::empty(),
    };
    assert_eq!(parse_start_tag(&mut cursor), Ok(target));
    assert!(cursor.is_eof());

    let mut cursor = Cursor::new(r#"<a  href="/x?a=1&amp;b=2"   title="T&eacute;st" />rest"#);
    let target = StartTag {
        tag_name: "a".to_string(),
        attributes: crate::attributes!("href" => "/x?a=1&b=2", "title" => "Tést"),
    };
    assert_eq!(parse_start_tag(&mut cursor), Ok(target));
    assert_eq!(cursor.rest(), "rest");

    let mut cursor = Cursor::new(r#"<br/>"#);
    assert_eq!(parse_start_tag(&mut cursor).map(|t| t.tag_name), Ok("br".to_string()));
}

#[cfg(test)]
#[test]
fn test_attribute_errors() {
    let err = parse(r#"<input disabled>"#).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MissingEquals {
            name: "disabled".to_string()
        }
    );
    assert_eq!(err.position.column, 16);

    let err = parse(r#"<div class="x" "#).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::Unterminated {
            kind: "tag",
            partial: r#"div class="x" "#.to_string()
        }
    );
    assert_eq!(err.position.column, 2);

    let err = parse(r#"<div class=x></div>"#).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MissingQuote { .. }));

    let err = parse(r#"<div class="x></div>"#).unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::Unterminated {
            kind: "attribute value",
            ..
        }
    ));
}

#[cfg(test)]
#[test]
fn test_node_parse() {
    let data = r#"<ul><li>One</li><li>Two &amp; three</li></ul>"#;
    let target = vec![DOMNode::element(
        "ul",
        DOMAttributes::empty(),
        vec![
            DOMNode::element("li", DOMAttributes::empty(), vec!["One".into()]),
            DOMNode::element("li", DOMAttributes::empty(), vec!["Two & three".into()]),
        ],
    )];
    assert_eq!(parse(data), Ok(target));

    let data = r#"<p>a<img src="x.png">b<hr></p>"#;
    let target = vec![DOMNode::element(
        "p",
        DOMAttributes::empty(),
        vec![
            "a".into(),
            DOMNode::element("img", crate::attributes!("src" => "x.png"), vec![]),
            "b".into(),
            DOMNode::element("hr", DOMAttributes::empty(), vec![]),
        ],
    )];
    assert_eq!(parse(data), Ok(target));
}

#[cfg(test)]
#[test]
fn test_comment_and_doctype() {
    assert_eq!(
        parse("<!DOCTYPE html><!-- a &lt; b -->x"),
        Ok(vec![
            DOMNode::doctype(" html"),
            DOMNode::comment(" a < b "),
            "x".into(),
        ])
    );
    // Doctype content is kept as written
    assert_eq!(parse("<!DOCTYPE &amp;>"), Ok(vec![DOMNode::doctype(" &amp;")]));

    let err = parse("<!-- never closed").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::Unterminated { kind: "comment", .. }));
    let err = parse("<!DOCTYPE html").unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::Unterminated {
            kind: "doctype closing bracket",
            ..
        }
    ));
    let err = parse("<!Doctype html>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedLiteral { expected: "<!DOCTYPE" });
    let err = parse("<!-x->").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedLiteral { expected: "<!--" });
}

#[cfg(test)]
#[test]
fn test_parse_malformed() {
    let err = parse("<html></closing><opening></html>").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MismatchedEndTag {
            start: "html".to_string(),
            end: "closing".to_string()
        }
    );

    let err = parse("<div>unclosed").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MissingEndTag {
            tag: "div".to_string()
        }
    );
    assert_eq!(err.position.column, 14);

    // Tag names are compared as written
    assert!(parse("<DIV></div>").is_err());
    // and only lowercase names are self-closing
    assert!(parse("<BR>").is_err());

    let err = parse("text</p>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndTag);
    assert_eq!(err.position.column, 5);
}
