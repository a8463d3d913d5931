//! Tests for node construction, mutation and snapshots.

use laxml_dom::{AttributesMap, ElementData, Node, NodeKind};

/// Helper to build an attribute map from pairs.
fn attrs(pairs: &[(&str, &str)]) -> AttributesMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_text_node_accessors() {
    let node = Node::text("hello");
    assert_eq!(node.kind(), NodeKind::Text);
    assert!(node.is_text());
    assert_eq!(node.as_text(), Some("hello"));
    assert_eq!(node.tag_name(), None);
    assert!(node.attributes().is_none());
    assert!(node.children().is_empty());
}

#[test]
fn test_element_node_accessors() {
    let node = Node::element("a", attrs(&[("href", "x")]));
    assert_eq!(node.kind(), NodeKind::Element);
    assert_eq!(node.tag_name(), Some("a"));
    assert_eq!(node.as_element().and_then(|e| e.attr("href")), Some("x"));
    assert!(node.as_text().is_none());
}

#[test]
fn test_append_child_keeps_order() {
    let mut node = Node::element("ul", AttributesMap::new());
    let list = node.as_element_mut().unwrap();
    list.append_child(Node::element("li", AttributesMap::new()));
    list.append_child(Node::text("between"));
    list.append_child(Node::element("li", AttributesMap::new()));

    let kinds: Vec<_> = node.children().iter().map(Node::kind).collect();
    assert_eq!(kinds, [NodeKind::Element, NodeKind::Text, NodeKind::Element]);
}

#[test]
fn test_set_children_replaces_everything() {
    let mut element = ElementData::new("p", AttributesMap::new());
    element.append_child(Node::text("old"));
    element.set_children(vec![Node::text("new"), Node::element("b", AttributesMap::new())]);

    assert_eq!(element.children.len(), 2);
    assert_eq!(element.children[0].as_text(), Some("new"));
    assert!(element.has_element_children());
}

#[test]
fn test_as_element_mut_on_text_is_none() {
    let mut node = Node::text("plain");
    assert!(node.as_element_mut().is_none());
}

#[test]
fn test_attribute_reinsert_keeps_first_position() {
    let mut map = attrs(&[("href", "1"), ("id", "main")]);
    let _ = map.insert("href".to_string(), "2".to_string());

    let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    assert_eq!(entries, [("href", "2"), ("id", "main")]);
}

#[test]
fn test_snapshot_shape() {
    let node = Node::element_with_children(
        "div",
        attrs(&[("id", "main")]),
        vec![Node::text("hi"), Node::element("br", AttributesMap::new())],
    );
    let snapshot = node.snapshot();

    assert_eq!(snapshot.kind, NodeKind::Element);
    assert_eq!(snapshot.tag.as_deref(), Some("div"));
    assert_eq!(snapshot.attributes.get("id").map(String::as_str), Some("main"));
    assert_eq!(snapshot.text, None);
    assert_eq!(snapshot.children.len(), 2);
    assert_eq!(snapshot.children[0].kind, NodeKind::Text);
    assert_eq!(snapshot.children[0].text.as_deref(), Some("hi"));
    assert!(snapshot.children[0].attributes.is_empty());
    assert_eq!(snapshot.children[1].tag.as_deref(), Some("br"));
}

#[test]
fn test_snapshot_json() {
    let node = Node::element_with_children("p", AttributesMap::new(), vec![Node::text("x")]);
    let json = serde_json::to_value(node.snapshot()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "type": "element",
            "tag": "p",
            "attributes": {},
            "children": [
                { "type": "text", "tag": null, "attributes": {}, "children": [], "text": "x" }
            ],
            "text": null
        })
    );
}

#[test]
fn test_deep_tree_walk_and_drop() {
    // Deep enough that a recursive drop would overflow the test thread.
    let mut node = Node::text("leaf");
    for _ in 0..200_000 {
        node = Node::element_with_children("div", AttributesMap::new(), vec![node]);
    }

    let mut depth = 0;
    let mut cursor = &node;
    while let Some(child) = cursor.children().first() {
        depth += 1;
        cursor = child;
    }
    assert_eq!(depth, 200_000);
    assert_eq!(cursor.as_text(), Some("leaf"));

    drop(node);
}

#[test]
fn test_node_kind_display() {
    assert_eq!(NodeKind::Text.to_string(), "text");
    assert_eq!(NodeKind::Element.to_string(), "element");
}
