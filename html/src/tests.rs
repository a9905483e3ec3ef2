use super::*;
use crate::attributes;

#[test]
fn test_document() {
    let i = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"/><title>The minimal, valid HTML5 document</title></head>
<body>
<!-- User-visible content goes in the body -->
<p>Some paragraph</p>
Some untagged text
</body>
</html>"#;
    let target = vec![
        DOMNode::doctype(" html"),
        "\n".into(),
        DOMElement::new(
            "html",
            Some(attributes!("lang" => "en")),
            vec![
                "\n".into(),
                DOMElement::new(
                    "head",
                    None,
                    vec![
                        DOMElement::new("meta", Some(attributes!("charset" => "utf-8")), vec![])
                            .into(),
                        DOMElement::new(
                            "title",
                            None,
                            vec!["The minimal, valid HTML5 document".into()],
                        )
                        .into(),
                    ],
                )
                .into(),
                "\n".into(),
                DOMElement::new(
                    "body",
                    None,
                    vec![
                        "\n".into(),
                        DOMNode::comment(" User-visible content goes in the body "),
                        "\n".into(),
                        DOMElement::new("p", None, vec!["Some paragraph".into()]).into(),
                        "\nSome untagged text\n".into(),
                    ],
                )
                .into(),
                "\n".into(),
            ],
        )
        .into(),
    ];
    assert_eq!(parse_html(i), Ok(target));
}

#[test]
fn test_basic() {
    let dom = parse_html("<b>Hello</b>").unwrap();
    assert_eq!(dom.len(), 1);
    let el = dom[0].as_element().unwrap();
    assert_eq!(el.tag_name, "b");
    assert_eq!(el.inner_text(), "Hello");
}

#[test]
fn test_comment() {
    let dom = parse_html("<!--ABC-->").unwrap();
    assert_eq!(dom, vec![DOMNode::comment("ABC")]);
    assert_eq!(dom[0].inner_text(), "ABC");
}

#[test]
fn test_complex_inner_text() {
    let dom = parse_html("<div> A \n<br>B</div>").unwrap();
    assert!(matches!(dom[0], DOMNode::Element(_)));
    assert_eq!(dom[0].inner_text(), " A \nB");
    assert_eq!(dom[0].text_content(), " A \nB");

    let dom = parse_html("<p>x  \t\n y</p>").unwrap();
    assert_eq!(dom[0].inner_text(), "x y");
    assert_eq!(dom[0].text_content(), "x  \t\n y");
}

#[test]
fn test_parse_attributes() {
    let dom = parse_html(r#"<div style="color: black" id="x"></div>"#).unwrap();
    let el = dom[0].as_element().unwrap();
    assert_eq!(el.attributes, attributes!("style" => "color: black", "id" => "x"));
    assert!(el.children.is_empty());
    assert_eq!(
        el.attributes.iter().collect::<Vec<_>>(),
        [("style", "color: black"), ("id", "x")]
    );
}

#[test]
fn test_duplicate_attribute() {
    let dom = parse_html(r#"<i class="a" id="n" class="b"></i>"#).unwrap();
    let el = dom[0].as_element().unwrap();
    assert_eq!(el.get_attribute("class"), Some("b"));
    assert_eq!(el.attributes.len(), 2);
}

#[test]
fn test_unmatched_tags() {
    let err = parse_html("<div><span></div>").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MismatchedEndTag {
            start: "span".to_string(),
            end: "div".to_string()
        }
    );
}

#[test]
fn test_top_level_end_tag() {
    let err = parse_html("</div>").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEndTag);
    assert_eq!(err.position, Position { line: 1, column: 1 });

    let err = parse_html("<b>x</b>\n\n</b>").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected end tag, at 3:1");
}

#[test]
fn test_error_position() {
    let err = parse_html("<ul>\n  <li>one</li>\n  <li>two</ul>").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::MismatchedEndTag {
            start: "li".to_string(),
            end: "ul".to_string()
        }
    );
    assert_eq!(err.position, Position { line: 3, column: 14 });
}

#[test]
fn test_plain_text() {
    assert_eq!(parse_html(""), Ok(vec![]));
    let dom = parse_html("Fish &amp; chips &#229; caf&eacute;").unwrap();
    assert_eq!(dom, vec![DOMNode::text("Fish & chips å café")]);
}

#[test]
fn test_self_closing() {
    let dom = parse_html("<br>").unwrap();
    assert_eq!(dom[0].inner_text(), "\n");
    assert_eq!(dom[0].text_content(), "");

    let dom = parse_html(r#"<img src="a.png" alt="A"/><input type="text">"#).unwrap();
    assert_eq!(dom.len(), 2);
    for node in &dom {
        let el = node.as_element().unwrap();
        assert!(el.is_self_closing());
        assert!(el.children.is_empty());
    }
}

#[test]
fn test_nbsp_is_not_collapsed() {
    let dom = parse_html("<p>a&nbsp;&nbsp;b  c</p>").unwrap();
    assert_eq!(dom[0].inner_text(), "a\u{a0}\u{a0}b c");
}

#[test]
fn test_inner_text_idempotent() {
    let dom = parse_html("<p>\n  one \t two\r\n</p>").unwrap();
    let text = dom[0].inner_text();
    assert_eq!(text, " one two ");
    assert_eq!(collapse_whitespace(&text), text);

    // Runs are collapsed within each text node, not across siblings
    let dom = parse_html("<div>one <span> two</span></div>").unwrap();
    assert_eq!(dom[0].inner_text(), "one  two");
}

#[test]
fn test_reparse_serialized() {
    let i = concat!(
        r#"<!DOCTYPE html><div class="a &amp; b" data-x="&quot;q&quot;">"#,
        r#"<p>1 &lt; 2 &amp;&amp; 3 &gt; 2</p><br><!-- &lt;note&gt; -->"#,
        r#"<img src="/a?b=1&amp;c=2"></div>"#,
    );
    let dom = parse_html(i).unwrap();
    let html: String = dom.iter().map(ToString::to_string).collect();
    assert_eq!(parse_html(&html), Ok(dom));
}

#[test]
fn test_children_region_reparses() {
    let i = "<section><h1>Title</h1><p>Body <em>text</em></p></section>";
    let dom = parse_html(i).unwrap();
    let section = dom[0].as_element().unwrap();
    let inner = &i["<section>".len()..i.len() - "</section>".len()];
    assert_eq!(parse_html(inner), Ok(section.children.clone()));
}

#[test]
fn test_parallel_parsing() {
    let inputs = ["<b>one</b>", "<i>two</i>", "<u>three</u>", "<s>four</s>"];
    std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|i| s.spawn(move || parse_html(i)))
            .collect();
        for (handle, expected) in handles.into_iter().zip(["one", "two", "three", "four"]) {
            let dom = handle.join().unwrap().unwrap();
            assert_eq!(dom[0].text_content(), expected);
        }
    });
}

#[test]
fn test_unterminated_start_tag() {
    let err = parse_html("<p>a</p><div ").unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::Unterminated {
            kind: "tag",
            partial: "div ".to_string()
        }
    );
    assert_eq!(err.position, Position { line: 1, column: 10 });
}
