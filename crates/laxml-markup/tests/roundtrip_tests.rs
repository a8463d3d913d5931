//! Property tests: rendering then re-parsing well-formed trees is lossless
//! up to formatting.

use laxml_dom::{AttributesMap, Node};
use laxml_markup::{Document, assemble, render, tokenize};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const TAGS: &[&str] = &["div", "p", "span", "section", "ul", "li", "em"];
const KEYS: &[&str] = &["id", "class", "href", "title", "data-x"];
const WORDS: &[&str] = &["alpha", "beta", "gamma", "x", "42", "a-b", "q=1"];

/// A tree that only uses constructs the parser can reproduce exactly: no void
/// tags, no adjacent text nodes, no singleton attributes.
#[derive(Debug, Clone)]
struct WellFormed(Node);

impl Arbitrary for WellFormed {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(element(g, 4))
    }
}

fn pick(g: &mut Gen, options: &'static [&'static str]) -> &'static str {
    g.choose(options).copied().unwrap_or(options[0])
}

fn text(g: &mut Gen) -> String {
    let count = 1 + usize::arbitrary(g) % 3;
    (0..count).map(|_| pick(g, WORDS)).collect::<Vec<_>>().join(" ")
}

fn element(g: &mut Gen, depth: usize) -> Node {
    let tag = pick(g, TAGS);

    let mut attrs = AttributesMap::new();
    for _ in 0..usize::arbitrary(g) % 3 {
        let _ = attrs.insert(pick(g, KEYS).to_string(), text(g));
    }

    let mut children: Vec<Node> = Vec::new();
    if depth > 0 {
        for _ in 0..usize::arbitrary(g) % 4 {
            let after_text = children.last().is_some_and(Node::is_text);
            if !after_text && bool::arbitrary(g) {
                children.push(Node::text(text(g)));
            } else {
                children.push(element(g, depth - 1));
            }
        }
    }

    Node::element_with_children(tag, attrs, children)
}

#[quickcheck]
fn render_then_parse_restores_tree(tree: WellFormed) -> bool {
    let rendered = render(&tree.0);
    assemble(tokenize(&rendered)) == vec![tree.0]
}

#[quickcheck]
fn rendering_is_idempotent(tree: WellFormed) -> bool {
    let once = render(&tree.0);
    let twice: String = assemble(tokenize(&once)).iter().map(render).collect();
    once == twice
}

#[test]
fn test_document_render_is_stable() {
    let source = r#"<!DOCTYPE html>
<html lang="en">
  <head><title>Test</title><meta charset="UTF-8"></head>
  <body class="main">
    <p>Hello <a href="/x">link</a> there.</p>
    <input type="checkbox" checked>
  </body>
</html>"#;

    let first = Document::parse(source);
    let second = Document::parse(&first.render());
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
}
