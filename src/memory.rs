use crate::describe::Attributes;
use crate::document::DocumentModel;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Elements which never take children and render without a closing tag.
static VOID_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
        "track", "wbr",
    ])
});

/// Handle to a node inside a [`MemoryDocument`]. Only meaningful to the
/// document that issued it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Error, Eq, PartialEq)]
pub enum DocumentError {
    #[error("invalid tag name {0:?}")]
    InvalidTagName(String),
    #[error("invalid attribute name {0:?}")]
    InvalidAttributeName(String),
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
}

#[derive(Debug, Eq, PartialEq)]
enum MemoryNode {
    Element {
        tag_name: String,
        attributes: Attributes,
        children: Vec<NodeId>,
    },
    Text(String),
}

/// A self-contained document model backed by a flat node arena. Stands in
/// for a browser DOM in the demo binary and in tests; nodes are created
/// detached and attached by [`DocumentModel::append_child`].
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: Vec<MemoryNode>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, id: NodeId) -> Result<&MemoryNode, DocumentError> {
        self.nodes.get(id.0).ok_or(DocumentError::UnknownNode(id))
    }

    fn element_mut(
        &mut self,
        id: NodeId,
    ) -> Result<(&mut Attributes, &mut Vec<NodeId>), DocumentError> {
        match self.nodes.get_mut(id.0) {
            Some(MemoryNode::Element {
                attributes,
                children,
                ..
            }) => Ok((attributes, children)),
            Some(MemoryNode::Text(_)) => Err(DocumentError::NotAnElement(id)),
            None => Err(DocumentError::UnknownNode(id)),
        }
    }

    fn push(&mut self, node: MemoryNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn tag_name(&self, id: NodeId) -> Result<&str, DocumentError> {
        match self.node(id)? {
            MemoryNode::Element { tag_name, .. } => Ok(tag_name),
            MemoryNode::Text(_) => Err(DocumentError::NotAnElement(id)),
        }
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Result<Option<&str>, DocumentError> {
        match self.node(id)? {
            MemoryNode::Element { attributes, .. } => {
                Ok(attributes.0.get(name).map(String::as_str))
            }
            MemoryNode::Text(_) => Err(DocumentError::NotAnElement(id)),
        }
    }

    pub fn attribute_count(&self, id: NodeId) -> Result<usize, DocumentError> {
        match self.node(id)? {
            MemoryNode::Element { attributes, .. } => Ok(attributes.0.len()),
            MemoryNode::Text(_) => Err(DocumentError::NotAnElement(id)),
        }
    }

    pub fn class_string(&self, id: NodeId) -> Result<Option<&str>, DocumentError> {
        self.attribute(id, "class")
    }

    /// The element children of a node, in attachment order. Text children
    /// are skipped.
    pub fn element_children(&self, id: NodeId) -> Result<Vec<NodeId>, DocumentError> {
        match self.node(id)? {
            MemoryNode::Element { children, .. } => Ok(children
                .iter()
                .copied()
                .filter(|&child| {
                    matches!(self.nodes.get(child.0), Some(MemoryNode::Element { .. }))
                })
                .collect()),
            MemoryNode::Text(_) => Err(DocumentError::NotAnElement(id)),
        }
    }

    /// The concatenated text of a node's descendants, in document order.
    pub fn text_content(&self, id: NodeId) -> Result<String, DocumentError> {
        match self.node(id)? {
            MemoryNode::Text(text) => Ok(text.clone()),
            MemoryNode::Element { children, .. } => {
                let mut out = String::new();
                for &child in children {
                    out.push_str(&self.text_content(child)?);
                }
                Ok(out)
            }
        }
    }

    /// Render the subtree rooted at `id` as HTML text.
    pub fn render(&self, id: NodeId) -> Result<String, DocumentError> {
        let mut out = String::new();
        self.render_into(id, &mut out)?;
        Ok(out)
    }

    fn render_into(&self, id: NodeId, out: &mut String) -> Result<(), DocumentError> {
        match self.node(id)? {
            MemoryNode::Text(text) => out.push_str(text),
            MemoryNode::Element {
                tag_name,
                attributes,
                children,
            } => {
                out.push('<');
                out.push_str(tag_name);
                // Sorted so that rendering is deterministic across runs.
                let mut attrs: Vec<_> = attributes.0.iter().collect();
                attrs.sort();
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(tag_name.as_str()) {
                    return Ok(());
                }
                for &child in children {
                    self.render_into(child, out)?;
                }
                out.push_str("</");
                out.push_str(tag_name);
                out.push('>');
            }
        }
        Ok(())
    }
}

/// Attempt to check a string as a valid tag name: nonempty and alphanumeric.
fn valid_tag_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn valid_attribute_name(name: &str) -> bool {
    !name.is_empty() && !name.contains([' ', '"', '\'', '>', '/', '='])
}

impl DocumentModel for MemoryDocument {
    type Handle = NodeId;
    type Error = DocumentError;

    fn create_element(&mut self, tag_name: &str) -> Result<NodeId, DocumentError> {
        if !valid_tag_name(tag_name) {
            return Err(DocumentError::InvalidTagName(tag_name.to_string()));
        }
        Ok(self.push(MemoryNode::Element {
            tag_name: tag_name.to_string(),
            attributes: Attributes::empty(),
            children: vec![],
        }))
    }

    fn set_attribute(
        &mut self,
        node: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        if !valid_attribute_name(name) {
            return Err(DocumentError::InvalidAttributeName(name.to_string()));
        }
        let (attributes, _) = self.element_mut(node)?;
        attributes.0.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        if child.0 >= self.nodes.len() {
            return Err(DocumentError::UnknownNode(child));
        }
        let (_, children) = self.element_mut(parent)?;
        children.push(child);
        Ok(())
    }

    fn set_class_name(&mut self, node: NodeId, classes: &str) -> Result<(), DocumentError> {
        let (attributes, _) = self.element_mut(node)?;
        attributes.0.insert("class".to_string(), classes.to_string());
        Ok(())
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DocumentError> {
        let text_id = self.push(MemoryNode::Text(text.to_string()));
        let (_, children) = self.element_mut(node)?;
        // DOM semantics: assigning text content drops every existing child.
        children.clear();
        children.push(text_id);
        Ok(())
    }
}

impl fmt::Display for MemoryDocument {
    /// Renders every root (unattached element) in creation order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attached: HashSet<NodeId> = HashSet::new();
        for node in &self.nodes {
            if let MemoryNode::Element { children, .. } = node {
                attached.extend(children.iter().copied());
            }
        }
        for id in (0..self.nodes.len()).map(NodeId) {
            if attached.contains(&id) {
                continue;
            }
            if matches!(self.nodes[id.0], MemoryNode::Text(_)) {
                // Detached text nodes are leftovers of overwritten content.
                continue;
            }
            f.write_str(&self.render(id).map_err(|_| fmt::Error)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[test]
fn test_create_and_render() {
    let mut doc = MemoryDocument::new();
    let ul = doc.create_element("ul").unwrap();
    let li = doc.create_element("li").unwrap();
    doc.set_text_content(li, "one").unwrap();
    doc.set_attribute(li, "id", "first").unwrap();
    doc.append_child(ul, li).unwrap();
    assert_eq!(doc.render(ul).unwrap(), r#"<ul><li id="first">one</li></ul>"#);
}

#[cfg(test)]
#[test]
fn test_invalid_names_rejected() {
    let mut doc = MemoryDocument::new();
    assert_eq!(
        doc.create_element(""),
        Err(DocumentError::InvalidTagName(String::new()))
    );
    assert_eq!(
        doc.create_element("<div>"),
        Err(DocumentError::InvalidTagName("<div>".to_string()))
    );
    let div = doc.create_element("div").unwrap();
    assert_eq!(
        doc.set_attribute(div, "bad name", "x"),
        Err(DocumentError::InvalidAttributeName("bad name".to_string()))
    );
}

#[cfg(test)]
#[test]
fn test_text_content_replaces_children() {
    let mut doc = MemoryDocument::new();
    let div = doc.create_element("div").unwrap();
    let span = doc.create_element("span").unwrap();
    doc.append_child(div, span).unwrap();
    doc.set_text_content(div, "gone").unwrap();
    assert!(doc.element_children(div).unwrap().is_empty());
    assert_eq!(doc.text_content(div).unwrap(), "gone");
}

#[cfg(test)]
#[test]
fn test_display_skips_detached_text() {
    let mut doc = MemoryDocument::new();
    let div = doc.create_element("div").unwrap();
    doc.set_text_content(div, "first").unwrap();
    // Overwriting leaves the old text node detached in the arena.
    doc.set_text_content(div, "second").unwrap();
    assert_eq!(doc.to_string(), "<div>second</div>");
}

#[cfg(test)]
#[test]
fn test_void_elements_render_unclosed() {
    let mut doc = MemoryDocument::new();
    let br = doc.create_element("br").unwrap();
    assert_eq!(doc.render(br).unwrap(), "<br>");
}
