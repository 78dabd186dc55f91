use super::*;
use crate::attributes;

fn build_element(doc: &mut MemoryDocument, content: &Content) -> NodeId {
    match build(doc, content).unwrap() {
        BuiltNode::Element(id) => id,
        BuiltNode::Text(text) => panic!("expected an element, got text {text:?}"),
    }
}

#[test]
fn test_text_passes_through() {
    let mut doc = MemoryDocument::new();
    let result = build(&mut doc, &Content::text("hello")).unwrap();
    assert_eq!(result, BuiltNode::Text("hello".to_string()));
    // Pass-through creates nothing in the document.
    assert!(doc.is_empty());
}

#[test]
fn test_bare_element() {
    let mut doc = MemoryDocument::new();
    let div = build_element(&mut doc, &ElementDescription::new("div").into());
    assert_eq!(doc.tag_name(div).unwrap(), "div");
    assert_eq!(doc.attribute_count(div).unwrap(), 0);
    assert!(doc.element_children(div).unwrap().is_empty());
}

#[test]
fn test_attributes_applied() {
    let mut doc = MemoryDocument::new();
    let desc = ElementDescription::new("div")
        .attributes(attributes!("id" => "a", "data-x" => "1"));
    let div = build_element(&mut doc, &desc.into());
    assert_eq!(doc.attribute(div, "id").unwrap(), Some("a"));
    assert_eq!(doc.attribute(div, "data-x").unwrap(), Some("1"));
    assert_eq!(doc.attribute_count(div).unwrap(), 2);
}

#[test]
fn test_class_list_joined() {
    let mut doc = MemoryDocument::new();
    let desc = ElementDescription::new("span").class_name(vec!["a", "b", "c"]);
    let span = build_element(&mut doc, &desc.into());
    assert_eq!(doc.class_string(span).unwrap(), Some("a b c"));

    let desc = ElementDescription::new("span").class_name("solo");
    let span = build_element(&mut doc, &desc.into());
    assert_eq!(doc.class_string(span).unwrap(), Some("solo"));
}

#[test]
fn test_children_in_order() {
    let mut doc = MemoryDocument::new();
    let desc = ElementDescription::new("ul").children(vec![
        ElementDescription::new("li").child("one").into(),
        ElementDescription::new("li").child("two").into(),
    ]);
    let ul = build_element(&mut doc, &desc.into());
    let items = doc.element_children(ul).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(doc.tag_name(items[0]).unwrap(), "li");
    assert_eq!(doc.tag_name(items[1]).unwrap(), "li");
    assert_eq!(doc.text_content(items[0]).unwrap(), "one");
    assert_eq!(doc.text_content(items[1]).unwrap(), "two");
}

#[test]
fn test_single_string_child() {
    let mut doc = MemoryDocument::new();
    let desc = ElementDescription::new("p").child("hello");
    let p = build_element(&mut doc, &desc.into());
    assert_eq!(doc.text_content(p).unwrap(), "hello");
    assert!(doc.element_children(p).unwrap().is_empty());
}

#[test]
fn test_rebuild_yields_distinct_nodes() {
    let mut doc = MemoryDocument::new();
    let desc: Content = ElementDescription::new("div")
        .class_name("twin")
        .children(vec![ElementDescription::new("span").into()])
        .into();
    let first = build_element(&mut doc, &desc);
    let second = build_element(&mut doc, &desc);
    assert_ne!(first, second);
    // Equal structure, independent instances.
    assert_eq!(doc.render(first).unwrap(), doc.render(second).unwrap());
    assert_ne!(
        doc.element_children(first).unwrap(),
        doc.element_children(second).unwrap()
    );
}

// Mixed string and element children are order-dependent: assigning text
// content drops every child attached before it. The two tests below pin
// that behavior in both orders.

#[test]
fn test_text_then_element_keeps_both() {
    let mut doc = MemoryDocument::new();
    let desc = ElementDescription::new("div")
        .children(vec!["text".into(), ElementDescription::new("span").into()]);
    let div = build_element(&mut doc, &desc.into());
    assert_eq!(doc.text_content(div).unwrap(), "text");
    let children = doc.element_children(div).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(doc.tag_name(children[0]).unwrap(), "span");
    assert_eq!(doc.render(div).unwrap(), "<div>text<span></span></div>");
}

#[test]
fn test_element_then_text_drops_element() {
    let mut doc = MemoryDocument::new();
    let desc = ElementDescription::new("div")
        .children(vec![ElementDescription::new("span").into(), "text".into()]);
    let div = build_element(&mut doc, &desc.into());
    assert_eq!(doc.text_content(div).unwrap(), "text");
    assert!(doc.element_children(div).unwrap().is_empty());
    assert_eq!(doc.render(div).unwrap(), "<div>text</div>");
}

#[test]
fn test_description_not_mutated() {
    let mut doc = MemoryDocument::new();
    let desc: Content = ElementDescription::new("div")
        .attributes(attributes!("id" => "a"))
        .children(vec!["text".into()])
        .into();
    let snapshot = desc.clone();
    build(&mut doc, &desc).unwrap();
    assert_eq!(desc, snapshot);
}

#[test]
fn test_document_errors_propagate() {
    let mut doc = MemoryDocument::new();
    // A deserialized description can carry an empty tag name; the failure
    // surfaces at the document layer, not in the builder.
    let desc: Content = serde_json::from_str(r#"{"tagName": ""}"#).unwrap();
    assert_eq!(
        build(&mut doc, &desc),
        Err(DocumentError::InvalidTagName(String::new()))
    );

    let desc: Content =
        serde_json::from_str(r#"{"tagName": "div", "attributes": {"bad name": "x"}}"#).unwrap();
    assert_eq!(
        build(&mut doc, &desc),
        Err(DocumentError::InvalidAttributeName("bad name".to_string()))
    );
}

#[test]
fn test_build_from_json_end_to_end() {
    let data = r#"{
        "tagName": "ul",
        "className": ["list", "plain"],
        "children": [
            {"tagName": "li", "attributes": {"id": "first"}, "children": "one"},
            {"tagName": "li", "children": ["two"]}
        ]
    }"#;
    let desc: Content = serde_json::from_str(data).unwrap();
    let mut doc = MemoryDocument::new();
    let ul = build_element(&mut doc, &desc);
    assert_eq!(
        doc.render(ul).unwrap(),
        r#"<ul class="list plain"><li id="first">one</li><li>two</li></ul>"#
    );
}
