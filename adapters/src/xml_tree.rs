//! Minimal element tree over quick-xml
//!
//! Each node exposes named-attribute lookup (failing when a required
//! attribute is absent) and ordered child iteration filtered by tag name.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{SchemaError, SchemaResult};

/// An XML element with its attributes, text and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    /// Tag name
    pub tag: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Concatenated text content, trimmed
    pub text: String,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self { Self { tag: tag.into(), ..Default::default() } }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Value of the attribute, if present
    pub fn optional_attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Value of the attribute, or `SchemaError::MissingAttribute`
    pub fn required_attr(&self, name: &str) -> SchemaResult<&str> {
        self.optional_attr(name).ok_or_else(|| SchemaError::MissingAttribute {
            element: self.describe(),
            attribute: name.to_string(),
        })
    }

    /// Child elements with the given tag, in document order
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Short description for diagnostics, e.g. `<request name="sync">`
    pub fn describe(&self) -> String {
        match self.optional_attr("name") {
            Some(name) => format!("<{} name=\"{}\">", self.tag, name),
            None => format!("<{}>", self.tag),
        }
    }

    fn from_start(start: &BytesStart<'_>) -> SchemaResult<Self> {
        let mut element = XmlElement::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }
}

/// Parse a whole document into its root element.
pub fn parse_document(xml: &str) -> SchemaResult<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => stack.push(XmlElement::from_start(e)?),
            Event::Empty(ref e) => {
                let element = XmlElement::from_start(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    SchemaError::Malformed(format!(
                        "unexpected closing tag at byte {}",
                        reader.buffer_position()
                    ))
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref t) => {
                if let Some(top) = stack.last_mut() {
                    if !top.text.is_empty() {
                        top.text.push(' ');
                    }
                    top.text.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SchemaError::Malformed(format!("unclosed element {}", open.describe())));
    }
    root.ok_or_else(|| SchemaError::Malformed("document has no root element".to_string()))
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> SchemaResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(SchemaError::Malformed(format!(
                "second root element {} after {}",
                element.describe(),
                root.as_ref().map(XmlElement::describe).unwrap_or_default()
            )))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<protocol name="demo">
  <!-- comment -->
  <interface name="wl_a" version="2">
    <request name="one"/>
    <event name="ev"><arg name="x" type="int"/></event>
    <request name="two"><arg name="s" type="string" summary="a &amp; b"/></request>
  </interface>
</protocol>"#;
        let root = parse_document(xml).expect("document should parse");
        assert_eq!(root.tag, "protocol");
        assert_eq!(root.optional_attr("name"), Some("demo"));

        let iface = root.children_named("interface").next().expect("interface present");
        assert_eq!(iface.required_attr("version").expect("version present"), "2");

        let requests: Vec<&str> =
            iface.children_named("request").map(|r| r.optional_attr("name").unwrap_or("")).collect();
        assert_eq!(requests, vec!["one", "two"]);
        assert_eq!(iface.children_named("event").count(), 1);

        let arg = iface.children_named("request").nth(1).and_then(|r| r.children.first());
        assert_eq!(arg.and_then(|a| a.optional_attr("summary")), Some("a & b"));
    }

    #[test]
    fn test_text_content() {
        let root = parse_document("<a><description summary=\"s\">  hello\n world </description></a>")
            .expect("document should parse");
        assert_eq!(root.children[0].text, "hello\n world");
    }

    #[test]
    fn test_missing_attribute() {
        let el = XmlElement::new("request").with_attr("name", "sync");
        match el.required_attr("type") {
            Err(SchemaError::MissingAttribute { element, attribute }) => {
                assert_eq!(element, "<request name=\"sync\">");
                assert_eq!(attribute, "type");
            }
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_documents() {
        assert!(parse_document("<a><b></a>").is_err());
        assert!(parse_document("<a><b>").is_err());
        assert!(matches!(parse_document(""), Err(SchemaError::Malformed(_))));
        assert!(matches!(parse_document("<a/><b/>"), Err(SchemaError::Malformed(_))));
    }
}
