use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// One entry in a description tree: either an element to construct,
/// or a plain text leaf passed through the builder unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Element(ElementDescription),
}

/// The caller-supplied recipe for a single element. Field names match the
/// JSON wire shape (`tagName`, `attributes`, `className`, `children`), so a
/// description written as plain JSON deserializes directly.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ElementDescription {
    #[serde(rename = "tagName")]
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(
        rename = "className",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub class_name: Option<ClassName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Attributes(pub HashMap<String, String>);

/// Either one class name or an ordered list; lists are joined with single
/// spaces when applied.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassName {
    Single(String),
    List(Vec<String>),
}

/// Either one child or an ordered sequence of them. Order is significant:
/// children are attached to the parent in sequence order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    One(Box<Content>),
    Many(Vec<Content>),
}

impl Content {
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }
    pub fn element(desc: ElementDescription) -> Self {
        Self::Element(desc)
    }
}

impl From<ElementDescription> for Content {
    fn from(desc: ElementDescription) -> Self {
        Self::Element(desc)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl ElementDescription {
    pub fn new(name: impl Display) -> Self {
        Self {
            tag_name: name.to_string(),
            attributes: Attributes::empty(),
            class_name: None,
            children: None,
        }
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<ClassName>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn children(mut self, children: Vec<Content>) -> Self {
        self.children = Some(Children::Many(children));
        self
    }

    pub fn child(mut self, child: impl Into<Content>) -> Self {
        self.children = Some(Children::One(Box::new(child.into())));
        self
    }
}

impl Attributes {
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<Vec<&str>> for ClassName {
    fn from(names: Vec<&str>) -> Self {
        Self::List(names.into_iter().map(String::from).collect())
    }
}

impl ClassName {
    /// The merged, space-joined class string.
    pub fn merged(&self) -> String {
        match self {
            Self::Single(s) => s.clone(),
            Self::List(names) => names.join(" "),
        }
    }
}

impl Children {
    /// Iterate the children in order, whether one or many.
    pub fn iter(&self) -> impl Iterator<Item = &Content> {
        match self {
            Self::One(child) => std::slice::from_ref(child.as_ref()).iter(),
            Self::Many(children) => children.iter(),
        }
    }
}

/// Build an [`Attributes`] map from `name => value` pairs.
#[macro_export]
macro_rules! attributes {
    ($($name:expr => $value:expr),* $(,)?) => {
        $crate::describe::Attributes(std::collections::HashMap::from([
            $(($name.to_string(), $value.to_string())),*
        ]))
    };
}

#[cfg(test)]
#[test]
fn test_description_from_json() {
    let data = r#"{
        "tagName": "div",
        "attributes": {"id": "a", "data-x": "1"},
        "className": ["card", "wide"],
        "children": ["hello", {"tagName": "span", "className": "badge"}]
    }"#;
    let target = Content::Element(
        ElementDescription::new("div")
            .attributes(attributes!("id" => "a", "data-x" => "1"))
            .class_name(vec!["card", "wide"])
            .children(vec![
                "hello".into(),
                ElementDescription::new("span").class_name("badge").into(),
            ]),
    );
    assert_eq!(serde_json::from_str::<Content>(data).unwrap(), target);
}

#[cfg(test)]
#[test]
fn test_description_scalar_forms() {
    // A bare string is a text leaf, not an element.
    let leaf: Content = serde_json::from_str(r#""just text""#).unwrap();
    assert_eq!(leaf, Content::text("just text"));

    // Single (non-array) child and single class string.
    let single: Content =
        serde_json::from_str(r#"{"tagName": "p", "className": "note", "children": "hi"}"#).unwrap();
    let target = Content::Element(
        ElementDescription::new("p")
            .class_name("note")
            .child("hi"),
    );
    assert_eq!(single, target);
}

#[cfg(test)]
#[test]
fn test_children_iter_order() {
    let children = Children::Many(vec![
        ElementDescription::new("li").into(),
        "text".into(),
        ElementDescription::new("li").into(),
    ]);
    assert_eq!(children.iter().count(), 3);
    let one = Children::One(Box::new("only".into()));
    let collected: Vec<_> = one.iter().collect();
    assert_eq!(collected, vec![&Content::text("only")]);
}
