use indexmap::IndexMap;
use std::fmt::{self, Display};

use crate::entities::{encode_attribute, encode_text};
use crate::parsing::is_self_closing;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DOMNode {
    Element(DOMElement),
    Text(String),
    Comment(String),
    /// Everything between `<!DOCTYPE` and `>`, undecoded
    DocType(String),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DOMElement {
    pub tag_name: String,
    pub attributes: DOMAttributes,
    pub children: Vec<DOMNode>,
}

/// Attribute name to decoded value, in source order
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DOMAttributes(pub IndexMap<String, String>);

/// Build [`DOMAttributes`] from `name => value` pairs
#[macro_export]
macro_rules! attributes {
    ($($name:expr => $value:expr),* $(,)?) => {{
        let mut attrs = $crate::DOMAttributes::empty();
        $(attrs.insert($name, $value);)*
        attrs
    }};
}

impl DOMAttributes {
    pub fn empty() -> Self {
        Self(IndexMap::new())
    }

    /// Set `name`, replacing any earlier value but keeping its original position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Replace every run of `\r`, `\n`, `\t`, space or form feed with a single space.
///
/// Other whitespace, notably U+00A0, is kept as is.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if matches!(c, '\r' | '\n' | '\t' | ' ' | '\u{c}') {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

impl DOMNode {
    pub fn text(data: impl Into<String>) -> Self {
        DOMNode::Text(data.into())
    }

    pub fn comment(data: impl Into<String>) -> Self {
        DOMNode::Comment(data.into())
    }

    pub fn doctype(data: impl Into<String>) -> Self {
        DOMNode::DocType(data.into())
    }

    pub fn element(name: impl Display, attributes: DOMAttributes, children: Vec<DOMNode>) -> Self {
        DOMNode::Element(DOMElement::new(name, Some(attributes), children))
    }

    /// Whether this is a text, comment or doctype leaf
    pub fn is_character_data(&self) -> bool {
        !matches!(self, DOMNode::Element(_))
    }

    pub fn as_element(&self) -> Option<&DOMElement> {
        match self {
            DOMNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// The text as rendered: whitespace runs collapsed and `<br>` as a newline
    pub fn inner_text(&self) -> String {
        match self {
            DOMNode::Element(el) => el.inner_text(),
            DOMNode::Text(data) | DOMNode::Comment(data) | DOMNode::DocType(data) => {
                collapse_whitespace(data)
            }
        }
    }

    /// All character data, concatenated verbatim
    pub fn text_content(&self) -> String {
        match self {
            DOMNode::Element(el) => el.text_content(),
            DOMNode::Text(data) | DOMNode::Comment(data) | DOMNode::DocType(data) => data.clone(),
        }
    }
}

impl From<DOMElement> for DOMNode {
    fn from(el: DOMElement) -> Self {
        DOMNode::Element(el)
    }
}

impl From<&str> for DOMNode {
    fn from(s: &str) -> Self {
        DOMNode::text(s)
    }
}

impl From<String> for DOMNode {
    fn from(s: String) -> Self {
        DOMNode::Text(s)
    }
}

impl DOMElement {
    pub fn new(
        name: impl Display,
        attributes: Option<DOMAttributes>,
        children: Vec<DOMNode>,
    ) -> Self {
        Self {
            tag_name: name.to_string(),
            attributes: attributes.unwrap_or_default(),
            children,
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn is_self_closing(&self) -> bool {
        is_self_closing(&self.tag_name)
    }

    /// Child elements named `name`, searching all descendants in document order if `recursive`
    pub fn get_elements_by_name(&self, name: &str, recursive: bool) -> Vec<&DOMElement> {
        let mut found = Vec::new();
        self.collect_elements(name, recursive, &mut found);
        found
    }

    fn collect_elements<'a>(
        &'a self,
        name: &str,
        recursive: bool,
        found: &mut Vec<&'a DOMElement>,
    ) {
        for el in self.children.iter().filter_map(DOMNode::as_element) {
            if el.tag_name == name {
                found.push(el);
            }
            if recursive {
                el.collect_elements(name, recursive, found);
            }
        }
    }

    pub fn inner_text(&self) -> String {
        if self.tag_name == "br" {
            return "\n".to_string();
        }
        self.children.iter().map(DOMNode::inner_text).collect()
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(DOMNode::text_content).collect()
    }
}

impl Display for DOMAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            write!(f, " {}=\"{}\"", name, encode_attribute(value))?;
        }
        Ok(())
    }
}

impl Display for DOMElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}{}>", self.tag_name, self.attributes)?;
        if self.is_self_closing() {
            return Ok(());
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag_name)
    }
}

/// Writes the node back out as HTML that parses to an equal tree
impl Display for DOMNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DOMNode::Element(el) => write!(f, "{}", el),
            DOMNode::Text(data) => write!(f, "{}", encode_text(data)),
            DOMNode::Comment(data) => write!(f, "<!--{}-->", encode_text(data)),
            DOMNode::DocType(data) => write!(f, "<!DOCTYPE{}>", data),
        }
    }
}

#[cfg(test)]
#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace(" A \n"), " A ");
    assert_eq!(collapse_whitespace("a\r\n\t\u{c}  b"), "a b");
    assert_eq!(collapse_whitespace("a\u{a0}\u{a0}b"), "a\u{a0}\u{a0}b");
    let once = collapse_whitespace("  x \t y  ");
    assert_eq!(collapse_whitespace(&once), once);
}

#[cfg(test)]
#[test]
fn test_text_views() {
    let el = DOMElement::new(
        "p",
        None,
        vec![
            "One\n  two".into(),
            DOMElement::new("br", None, vec![]).into(),
            DOMNode::element("em", DOMAttributes::empty(), vec!["three".into()]),
            DOMNode::comment(" note "),
        ],
    );
    assert_eq!(el.inner_text(), "One two\nthree note ");
    assert_eq!(el.text_content(), "One\n  twothree note ");
    assert_eq!(DOMElement::new("div", None, vec![]).inner_text(), "");

    assert!(DOMNode::text("t").is_character_data());
    assert!(DOMNode::comment("c").is_character_data());
    assert!(DOMNode::doctype(" html").is_character_data());
    assert!(!DOMNode::element("p", DOMAttributes::empty(), vec![]).is_character_data());
}

#[cfg(test)]
#[test]
fn test_attributes_last_write_wins() {
    let attrs = attributes!("id" => "a", "class" => "x", "id" => "b");
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("id"), Some("b"));
    assert_eq!(attrs.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["id", "class"]);
}

#[cfg(test)]
#[test]
fn test_get_elements_by_name() {
    let ul = DOMElement::new(
        "ul",
        None,
        vec![
            DOMNode::element("li", attributes!("id" => "1"), vec![]),
            DOMNode::element(
                "li",
                attributes!("id" => "2"),
                vec![DOMNode::element(
                    "ul",
                    DOMAttributes::empty(),
                    vec![DOMNode::element("li", attributes!("id" => "3"), vec![])],
                )],
            ),
        ],
    );
    let ids = |els: Vec<&DOMElement>| {
        els.iter()
            .filter_map(|el| el.get_attribute("id"))
            .map(str::to_string)
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(ul.get_elements_by_name("li", false)), ["1", "2"]);
    assert_eq!(ids(ul.get_elements_by_name("li", true)), ["1", "2", "3"]);
}

#[cfg(test)]
#[test]
fn test_display() {
    let node = DOMNode::element(
        "a",
        attributes!("href" => "/?q=\"x\"&y"),
        vec!["1 < 2".into(), DOMElement::new("br", None, vec![]).into()],
    );
    assert_eq!(node.to_string(), "<a href=\"/?q=&quot;x&quot;&amp;y\">1 &lt; 2<br></a>");
    assert_eq!(DOMNode::doctype(" html").to_string(), "<!DOCTYPE html>");
}
