//! Node tree for the laxml markup parser.
//!
//! # Design
//!
//! The tree is a plain owned structure: every [`Node`] is exclusively owned by
//! its parent's `children` vector, so there are no back references and no
//! sharing. A node is either a text run or an element; consumers match on the
//! two variants exhaustively instead of inspecting a runtime type field.
//!
//! Attribute maps keep the position where a key was first seen. Inserting a key
//! again replaces the value in place, which is exactly [`IndexMap::insert`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Map of attribute names to values for an element, in first-seen order.
///
/// A singleton attribute (a bare word such as `disabled`) is stored with its
/// value equal to its key.
pub type AttributesMap = IndexMap<String, String>;

/// The two kinds of node a tree can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    /// Literal text content.
    Text,
    /// A tagged element with attributes and children.
    Element,
}

/// A node in a markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text. Never has children.
    Text(String),
    /// An element.
    Element(ElementData),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name exactly as written in the source (no case folding).
    pub tag_name: String,
    /// Attributes in first-seen order.
    pub attrs: AttributesMap,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl ElementData {
    /// Create an element with no children.
    #[must_use]
    pub fn new(tag_name: impl Into<String>, attrs: AttributesMap) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs,
            children: Vec::new(),
        }
    }

    /// Replace the entire children sequence.
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    /// Append one child after the existing ones.
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// True if at least one direct child is an element.
    #[must_use]
    pub fn has_element_children(&self) -> bool {
        self.children.iter().any(Node::is_element)
    }
}

// Dropping a deeply nested tree recursively would blow the stack, so detach
// descendants into a flat worklist first.
impl Drop for ElementData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Node::Element(element) = &mut node {
                pending.append(&mut element.children);
            }
        }
    }
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create an element node with no children.
    #[must_use]
    pub fn element(tag_name: impl Into<String>, attrs: AttributesMap) -> Self {
        Self::Element(ElementData::new(tag_name, attrs))
    }

    /// Create an element node with the given children.
    #[must_use]
    pub fn element_with_children(
        tag_name: impl Into<String>,
        attrs: AttributesMap,
        children: Vec<Self>,
    ) -> Self {
        let mut element = ElementData::new(tag_name, attrs);
        element.set_children(children);
        Self::Element(element)
    }

    /// Which variant this node is.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Text(_) => NodeKind::Text,
            Self::Element(_) => NodeKind::Element,
        }
    }

    /// Returns true for element nodes.
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns true for text nodes.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Tag name, if this is an element.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag_name.as_str())
    }

    /// Attributes, if this is an element.
    #[must_use]
    pub fn attributes(&self) -> Option<&AttributesMap> {
        self.as_element().map(|e| &e.attrs)
    }

    /// Children of an element; empty for text.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element(e) => &e.children,
            Self::Text(_) => &[],
        }
    }

    /// Text content, if this is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Element(_) => None,
        }
    }

    /// Element data, if this is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    /// Mutable element data, if this is an element.
    pub const fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    /// Project this node and its descendants into a plain [`NodeSnapshot`].
    #[must_use]
    pub fn snapshot(&self) -> NodeSnapshot {
        // Post-order walk: each frame collects its children's snapshots until
        // it has one per child, then folds into its parent's frame.
        let mut stack: Vec<(&Self, Vec<NodeSnapshot>)> = vec![(self, Vec::new())];
        while let Some((node, built)) = stack.last() {
            let node: &Self = *node;
            if let Some(child) = node.children().get(built.len()) {
                stack.push((child, Vec::new()));
                continue;
            }

            let Some((node, built)) = stack.pop() else {
                break;
            };
            let snapshot = node.shallow_snapshot(built);
            match stack.last_mut() {
                Some((_, siblings)) => siblings.push(snapshot),
                None => return snapshot,
            }
        }
        unreachable!("the root frame always yields a snapshot")
    }

    fn shallow_snapshot(&self, children: Vec<NodeSnapshot>) -> NodeSnapshot {
        match self {
            Self::Text(text) => NodeSnapshot {
                kind: NodeKind::Text,
                tag: None,
                attributes: AttributesMap::new(),
                children,
                text: Some(text.clone()),
            },
            Self::Element(e) => NodeSnapshot {
                kind: NodeKind::Element,
                tag: Some(e.tag_name.clone()),
                attributes: e.attrs.clone(),
                children,
                text: None,
            },
        }
    }
}

/// A plain nested record describing a node, for inspection and tests.
///
/// Text nodes get an empty attribute map and no tag; elements get no text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Node kind, serialized as `"text"` or `"element"`.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Tag name for elements.
    pub tag: Option<String>,
    /// Attributes for elements; always empty for text.
    pub attributes: AttributesMap,
    /// Snapshots of the children, in order.
    pub children: Vec<NodeSnapshot>,
    /// Content for text nodes.
    pub text: Option<String>,
}
