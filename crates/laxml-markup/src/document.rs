//! Document wrapper: picks the declaration, doctype and root out of a parsed
//! forest.

use core::fmt;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use laxml_dom::{AttributesMap, Node, NodeSnapshot};

use crate::issue::{IssueKind, ParseIssue};
use crate::parser::{ParseOptions, TreeAssembler};
use crate::serializer::{LINE_SEPARATOR, render};
use crate::tokenizer::MarkupTokenizer;

/// Text used for the root when the input has no content at all.
pub const PLACEHOLDER_ROOT_TEXT: &str = "No content";

/// A parsed document.
///
/// The declaration, doctype and root are independent trees: the doctype is a
/// sibling of the root, never its ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    declaration: Option<Node>,
    doctype: Node,
    root: Node,
}

impl Document {
    /// Build a document from its parts.
    #[must_use]
    pub const fn new(doctype: Node, root: Node, declaration: Option<Node>) -> Self {
        Self {
            declaration,
            doctype,
            root,
        }
    }

    /// Parse markup with default options.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self::parse_with_options(markup, &ParseOptions::default())
    }

    /// Parse markup with the given options.
    #[must_use]
    pub fn parse_with_options(markup: &str, options: &ParseOptions) -> Self {
        Self::parse_with_issues(markup, options).0
    }

    /// Parse markup and return the document with every issue recorded along
    /// the way.
    #[must_use]
    pub fn parse_with_issues(markup: &str, options: &ParseOptions) -> (Self, Vec<ParseIssue>) {
        let mut tokenizer = MarkupTokenizer::new(markup.to_string());
        tokenizer.run();
        let (tokens, mut issues) = tokenizer.into_parts();
        let token_count = tokens.len();

        let (nodes, assembly_issues) = TreeAssembler::new(tokens)
            .with_nesting(options.nesting)
            .run_with_issues();
        issues.extend(assembly_issues);

        let (document, discarded) = Self::select(nodes);
        for node in discarded {
            let what = node
                .tag_name()
                .map_or_else(|| "text".to_string(), |tag| format!("<{tag}>"));
            issues.push(ParseIssue::new(
                IssueKind::DiscardedTopLevelNode,
                format!("{what} after the document root was ignored"),
                token_count,
            ));
        }

        (document, issues)
    }

    /// Build a document from an already assembled top-level forest.
    ///
    /// Nodes after the root are dropped.
    #[must_use]
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self::select(nodes).0
    }

    fn select(nodes: Vec<Node>) -> (Self, Vec<Node>) {
        let mut nodes = VecDeque::from(nodes);
        let mut declaration = None;
        let mut doctype = default_doctype();

        if front_tag_is(&nodes, "?xml") {
            declaration = nodes.pop_front();
            doctype = xml_doctype();
        }

        if front_tag_is(&nodes, "!doctype")
            && let Some(node) = nodes.pop_front()
        {
            doctype = node;
        }

        let root = nodes
            .pop_front()
            .unwrap_or_else(|| Node::text(PLACEHOLDER_ROOT_TEXT));

        (Self::new(doctype, root, declaration), nodes.into())
    }

    /// The `?xml` declaration, if the input started with one.
    #[must_use]
    pub const fn declaration(&self) -> Option<&Node> {
        self.declaration.as_ref()
    }

    /// The doctype node (a placeholder when the input had none).
    #[must_use]
    pub const fn doctype(&self) -> &Node {
        &self.doctype
    }

    /// The root node (a placeholder text node when the input had none).
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Take the document apart as `(declaration, doctype, root)`.
    #[must_use]
    pub fn into_parts(self) -> (Option<Node>, Node, Node) {
        (self.declaration, self.doctype, self.root)
    }

    /// Project the doctype and root into plain snapshots. The declaration is
    /// not included.
    #[must_use]
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            doctype: self.doctype.snapshot(),
            root: self.root.snapshot(),
        }
    }

    /// Serialize the doctype, a line separator, then the root.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = render(&self.doctype);
        out.push_str(LINE_SEPARATOR);
        out.push_str(&render(&self.root));
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Snapshot of a [`Document`] for inspection and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Snapshot of the doctype.
    pub doctype: NodeSnapshot,
    /// Snapshot of the root.
    pub root: NodeSnapshot,
}

fn front_tag_is(nodes: &VecDeque<Node>, tag: &str) -> bool {
    nodes
        .front()
        .and_then(Node::tag_name)
        .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Doctype used when the input has neither a declaration nor a doctype.
#[must_use]
pub fn default_doctype() -> Node {
    placeholder_doctype("text")
}

/// Doctype used when the input has a `?xml` declaration but no doctype.
#[must_use]
pub fn xml_doctype() -> Node {
    placeholder_doctype("xml")
}

fn placeholder_doctype(keyword: &str) -> Node {
    let mut attrs = AttributesMap::new();
    let _ = attrs.insert(keyword.to_string(), keyword.to_string());
    Node::element("!DOCTYPE", attrs)
}
