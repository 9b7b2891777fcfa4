//! Owned element tree built from a reflection document.
//!
//! Only what extraction needs is kept: element names, attributes, child
//! elements and the element's own text. Comments, processing instructions
//! and the XML declaration are dropped.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Deepest element nesting accepted by [`Document::parse`].
pub const MAX_DEPTH: usize = 256;

/// A parsed reflection document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

/// A single XML element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    /// Concatenated text and CDATA directly inside this element
    text: String,
}

impl Document {
    /// Parse XML text into a document tree.
    ///
    /// Nesting deeper than [`MAX_DEPTH`] is rejected, which keeps the
    /// recursive walks over the tree bounded.
    pub fn parse(xml: &str) -> Result<Document> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let element = open_element(&start, reader.buffer_position() as u64)?;
                    if stack.is_empty() && root.is_some() {
                        return Err(Error::MultipleRoots(element.name));
                    }
                    if stack.len() >= MAX_DEPTH {
                        return Err(Error::TooDeep(MAX_DEPTH));
                    }
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = open_element(&start, reader.buffer_position() as u64)?;
                    close_element(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    // quick-xml already verified the end name matches
                    if let Some(element) = stack.pop() {
                        close_element(&mut stack, &mut root, element)?;
                    }
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        let bytes = data.into_inner();
                        let text = std::str::from_utf8(&bytes).map_err(|_| Error::Utf8 {
                            position: reader.buffer_position() as u64,
                        })?;
                        current.text.push_str(text);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = stack.pop() {
            return Err(Error::UnclosedElement(unclosed.name));
        }
        root.map(|root| Document { root }).ok_or(Error::MissingRoot)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn open_element(start: &BytesStart<'_>, position: u64) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|_| Error::Utf8 { position })?
        .to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| Error::Utf8 { position })?
            .to_string();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        ..Default::default()
    })
}

/// Attach a finished element to its parent, or make it the root.
fn close_element(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_some() => return Err(Error::MultipleRoots(element.name)),
        None => *root = Some(element),
    }
    Ok(())
}

impl Element {
    /// Value of the named attribute, if present (possibly empty).
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text of the first child with the given name.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(Element::text)
    }
}
