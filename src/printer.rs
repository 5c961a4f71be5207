//! Pretty-printing the overlay document.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesEnd, BytesStart, Event};

use crate::error::{Error, Result};
use crate::markup::{Element, Node};

/// Serialize `root` with `indent` spaces per nesting level.
///
/// Elements without children are written self-closing; attribute values are
/// escaped.
pub fn write_to<W: Write>(root: &Element, indent: usize, out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', indent);
    write_element(&mut writer, root)
}

/// Serialize `root` into a string.
pub fn render(root: &Element, indent: usize) -> Result<String> {
    let mut bytes = Vec::new();
    write_to(root, indent, &mut bytes)?;
    into_text(bytes)
}

fn into_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attrs {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(e) => write_element(writer, e)?,
            Node::CData(text) => writer.write_event(Event::CData(BytesCData::new(text.as_str())))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let img = Element::new("img").with_attr("src", "a.png");
        assert_eq!(render(&img, 2).unwrap(), r#"<img src="a.png"/>"#);
    }

    #[test]
    fn test_nested_elements_are_indented() {
        let doc = Element::new("div").with_child(
            Element::new("svg").with_child(Element::new("rect").with_attr("x", "1")),
        );

        assert_eq!(
            render(&doc, 2).unwrap(),
            "<div>\n  <svg>\n    <rect x=\"1\"/>\n  </svg>\n</div>"
        );
    }

    #[test]
    fn test_indent_width() {
        let doc = Element::new("a").with_child(Element::new("b"));
        assert_eq!(render(&doc, 4).unwrap(), "<a>\n    <b/>\n</a>");
    }

    #[test]
    fn test_attribute_values_escaped() {
        let link = Element::new("a").with_attr("href", "/x?a=1&b=2");
        assert!(render(&link, 2).unwrap().contains(r#"href="/x?a=1&amp;b=2""#));
    }

    #[test]
    fn test_cdata_kept_verbatim() {
        let style = Element::new("style").with_child(Node::CData(".a > .b {}".to_string()));
        assert!(
            render(&style, 2)
                .unwrap()
                .contains("<![CDATA[.a > .b {}]]>")
        );
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        match into_text(vec![b'<', 0xff, b'>']) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn test_write_to_writer() {
        let mut out = Vec::new();
        write_to(&Element::new("br"), 2, &mut out).unwrap();
        assert_eq!(out, b"<br/>");
    }
}
