use crate::describe::{Content, ElementDescription};
use crate::document::DocumentModel;
use tracing::{span, Level};

/// The typed result of building one [`Content`] entry: a handle to a
/// constructed element, or the text leaf passed through unchanged.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BuiltNode<H> {
    Element(H),
    Text(String),
}

/// Recursively construct a live element graph for `content` inside `doc`.
///
/// Text leaves are returned as [`BuiltNode::Text`] without touching the
/// document; element descriptions create a fresh, detached element and
/// decorate it in a fixed order: children, then attributes, then class name.
/// Two calls with the same description produce two independent element
/// graphs; nothing is cached or reused.
///
/// All failures come from the document model and propagate untranslated;
/// this function validates nothing, not even the tag name.
pub fn build<D: DocumentModel>(
    doc: &mut D,
    content: &Content,
) -> Result<BuiltNode<D::Handle>, D::Error> {
    let desc = match content {
        Content::Text(text) => return Ok(BuiltNode::Text(text.clone())),
        Content::Element(desc) => desc,
    };
    let span = span!(Level::DEBUG, "Building element", tag = %desc.tag_name);
    let _enter = span.enter();
    let node = doc.create_element(&desc.tag_name)?;
    apply_children(doc, node, desc)?;
    apply_attributes(doc, node, desc)?;
    apply_class_name(doc, node, desc)?;
    Ok(BuiltNode::Element(node))
}

/// Resolve each child in order and attach it. An element result is appended
/// after any existing children; a text result is assigned as the node's text
/// content, which replaces every child attached so far. Mixing the two kinds
/// therefore makes the outcome order-dependent (see the tests pinning this).
fn apply_children<D: DocumentModel>(
    doc: &mut D,
    node: D::Handle,
    desc: &ElementDescription,
) -> Result<(), D::Error> {
    let children = match &desc.children {
        Some(children) => children,
        None => return Ok(()),
    };
    for child in children.iter() {
        match build(doc, child)? {
            BuiltNode::Element(built) => doc.append_child(node, built)?,
            BuiltNode::Text(text) => doc.set_text_content(node, &text)?,
        }
    }
    Ok(())
}

/// Set every attribute pair on the node. Keys are independent, so map
/// iteration order does not matter.
fn apply_attributes<D: DocumentModel>(
    doc: &mut D,
    node: D::Handle,
    desc: &ElementDescription,
) -> Result<(), D::Error> {
    for (name, value) in &desc.attributes.0 {
        doc.set_attribute(node, name, value)?;
    }
    Ok(())
}

fn apply_class_name<D: DocumentModel>(
    doc: &mut D,
    node: D::Handle,
    desc: &ElementDescription,
) -> Result<(), D::Error> {
    match &desc.class_name {
        Some(class_name) => doc.set_class_name(node, &class_name.merged()),
        None => Ok(()),
    }
}
