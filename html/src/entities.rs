//! Character reference decoding and encoding, backed by [`htmlize`]

/// Decode character references in text or comment content
pub fn decode_text(raw: &str) -> String {
    htmlize::unescape(raw).into_owned()
}

/// Decode character references in a quoted attribute value.
///
/// Ambiguous ampersands such as `&param=1` in a URL are left untouched.
pub fn decode_attribute(raw: &str) -> String {
    htmlize::unescape_attribute(raw).into_owned()
}

pub fn encode_text(text: &str) -> String {
    htmlize::escape_text(text).into_owned()
}

pub fn encode_attribute(value: &str) -> String {
    htmlize::escape_attribute(value).into_owned()
}

#[cfg(test)]
#[test]
fn test_named_entities() {
    assert_eq!(decode_text("&aring;&auml;&ouml;"), "åäö");
    assert_eq!(decode_text("a &amp; b"), "a & b");
}

#[cfg(test)]
#[test]
fn test_numbered_entities() {
    assert_eq!(decode_text("&#229;&#228;&#246;"), "åäö");
    assert_eq!(decode_text("&#xe5;&#xE4;"), "åä");
}

#[cfg(test)]
#[test]
fn test_attribute_ampersand() {
    assert_eq!(decode_attribute("&lt=&ltb&lt"), "&lt=&ltb<");
    assert_eq!(decode_attribute("Tom &amp; Jerry"), "Tom & Jerry");
}
