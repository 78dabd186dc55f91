use std::error::Error;

/// The mutation surface a document environment must offer for trees to be
/// built into it. Implementors own node storage and hand out copyable
/// handles; the builder never inspects a handle, only passes it back.
///
/// `set_text_content` must have DOM semantics: it replaces the node's entire
/// child list with a single text child.
pub trait DocumentModel {
    type Handle: Copy;
    type Error: Error;

    /// Create a detached element for the given tag name. All tag-name
    /// validation lives here; callers pass the name through unchecked.
    fn create_element(&mut self, tag_name: &str) -> Result<Self::Handle, Self::Error>;

    /// Set one attribute name/value pair on an element.
    fn set_attribute(
        &mut self,
        node: Self::Handle,
        name: &str,
        value: &str,
    ) -> Result<(), Self::Error>;

    /// Append an element as the last child of a parent.
    fn append_child(
        &mut self,
        parent: Self::Handle,
        child: Self::Handle,
    ) -> Result<(), Self::Error>;

    /// Assign the element's class list from a space-joined string.
    fn set_class_name(&mut self, node: Self::Handle, classes: &str) -> Result<(), Self::Error>;

    /// Assign the element's text content, replacing any existing children.
    fn set_text_content(&mut self, node: Self::Handle, text: &str) -> Result<(), Self::Error>;
}
