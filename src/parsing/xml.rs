//! Generic XML element tree.
//!
//! The filing index is built from this tree rather than from raw text, so any
//! XML front end can feed it. Callers holding document text can use
//! [`Document::parse`] (behind the `document` feature), which builds the tree
//! with `quick_xml`'s pull reader.
#[cfg(feature = "document")]
use crate::{Result, XbrlError};
#[cfg(feature = "document")]
use quick_xml::{Reader, events::Event};
use serde::{Deserialize, Serialize};

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// An XML element with its qualified name, attributes in document order and children.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Name without its namespace prefix (`us-gaap:Assets` → `Assets`).
    pub fn local_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Namespace prefix of the name, if it has one.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Looks up an attribute by its exact name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Element children in document order; text and comments are skipped.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// First descendant (depth-first, document order) with the given local name.
    pub fn find(&self, local_name: &str) -> Option<&Element> {
        for child in self.child_elements() {
            if child.local_name() == local_name {
                return Some(child);
            }
            if let Some(found) = child.find(local_name) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
                Node::Comment(_) => {}
            }
        }
    }
}

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn into_root(self) -> Element {
        self.root
    }

    /// Parses XML text into an element tree.
    ///
    /// Whitespace-only text between elements is dropped; any other text node
    /// is kept verbatim, including its surrounding whitespace, so mixed content
    /// reads back as written. CDATA sections become text.
    /// Declarations, processing instructions and doctypes are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`XbrlError::XmlError`] on malformed markup, mismatched or
    /// unclosed elements, or a document without a root element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xbrlkit::parsing::xml::Document;
    ///
    /// let doc = Document::parse(r#"<xbrl><unit id="u-1"><measure>USD</measure></unit></xbrl>"#)?;
    /// assert_eq!(doc.root().find("measure").unwrap().text_content(), "USD");
    /// # Ok::<(), xbrlkit::XbrlError>(())
    /// ```
    #[cfg(feature = "document")]
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = Reader::from_str(content);

        let mut stack: Vec<Element> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    stack.push(Self::open_element(e)?);
                }
                Event::Empty(ref e) => {
                    let element = Self::open_element(e)?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        XbrlError::XmlError("unexpected closing tag".to_string())
                    })?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::Text(text) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = text.unescape()?;
                        // Indentation between elements; mixed content is kept as is.
                        if !text.trim().is_empty() {
                            parent.children.push(Node::Text(text.into_owned()));
                        }
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = stack.last_mut() {
                        let bytes = data.into_inner();
                        let text = std::str::from_utf8(&bytes)
                            .map_err(|e| XbrlError::XmlError(e.to_string()))?;
                        parent.children.push(Node::Text(text.to_string()));
                    }
                }
                Event::Comment(comment) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = std::str::from_utf8(&comment)
                            .map_err(|e| XbrlError::XmlError(e.to_string()))?;
                        parent.children.push(Node::Comment(text.to_string()));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(XbrlError::XmlError(format!(
                "unclosed element <{}>",
                open.name
            )));
        }

        root.map(Self::new)
            .ok_or_else(|| XbrlError::XmlError("document has no root element".to_string()))
    }

    #[cfg(feature = "document")]
    fn open_element(start: &quick_xml::events::BytesStart<'_>) -> Result<Element> {
        let name = std::str::from_utf8(start.name().as_ref())
            .map_err(|e| XbrlError::XmlError(e.to_string()))?
            .to_string();

        let mut element = Element::new(name);
        for attr in start.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| XbrlError::XmlError(e.to_string()))?
                .to_string();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }

    /// Appends a finished element to its parent, or makes it the root.
    /// Only the first top-level element becomes the root.
    #[cfg(feature = "document")]
    fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
        match stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None => {
                if root.is_none() {
                    *root = Some(element);
                }
            }
        }
    }
}
