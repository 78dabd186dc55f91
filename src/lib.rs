//! Declarative-to-imperative element tree construction: a plain data
//! description of an element (tag, attributes, class names, children) is
//! recursively built into a live node graph inside a document model.

/// Recursive construction of element graphs from descriptions
pub mod builder;
/// The plain-data description model
pub mod describe;
/// The document-model trait implemented by the environment
pub mod document;
/// An in-memory document model with HTML text rendering
pub mod memory;

pub use builder::{build, BuiltNode};
pub use describe::{Attributes, Children, ClassName, Content, ElementDescription};
pub use document::DocumentModel;
pub use memory::{DocumentError, MemoryDocument, NodeId};

#[cfg(test)]
mod tests;
