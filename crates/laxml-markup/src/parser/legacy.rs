//! Single-open-element span matcher.
//!
//! Each level of the tree is scanned with at most one element open. Every
//! token up to the first closing tag with the open element's name is buffered
//! and assembled one level down as that element's children, replacing the
//! element's own text. A closing tag seen with nothing open opens an element
//! of that name, and text after a matched closing tag is dropped. Nested
//! elements with the same name therefore mis-close.
//!
//! Every level rescans its buffer, so the cost grows quadratically with depth.

use std::vec;

use laxml_dom::{ElementData, Node};

use crate::issue::{IssueKind, ParseIssue};
use crate::tokenizer::Token;

type IndexedToken = (usize, Token);

/// A node produced on one level, plus the tokens buffered for its children.
struct Span {
    node: Node,
    children: Vec<IndexedToken>,
}

/// An element whose buffered children are being assembled.
struct Frame {
    parent: Option<ElementData>,
    pending: vec::IntoIter<Span>,
    built: Vec<Node>,
}

/// Assemble `tokens` level by level, recording issues into `issues`.
pub(crate) fn assemble_spans(tokens: Vec<Token>, issues: &mut Vec<ParseIssue>) -> Vec<Node> {
    let top_level = split_level(tokens.into_iter().enumerate().collect(), issues);
    let mut stack = vec![Frame {
        parent: None,
        pending: top_level.into_iter(),
        built: Vec::new(),
    }];

    while let Some(frame) = stack.last_mut() {
        if let Some(Span { node, children }) = frame.pending.next() {
            match node {
                Node::Element(element) if !children.is_empty() => {
                    let level = split_level(children, issues);
                    stack.push(Frame {
                        parent: Some(element),
                        pending: level.into_iter(),
                        built: Vec::new(),
                    });
                }
                node => frame.built.push(node),
            }
            continue;
        }

        let Some(Frame { parent, built, .. }) = stack.pop() else {
            break;
        };
        let Some(mut element) = parent else {
            return built;
        };
        element.set_children(built);
        if let Some(frame) = stack.last_mut() {
            frame.built.push(Node::Element(element));
        }
    }
    unreachable!("the top-level frame always returns its nodes")
}

/// Cut one level of tokens into spans.
fn split_level(tokens: Vec<IndexedToken>, issues: &mut Vec<ParseIssue>) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut open: Option<(usize, ElementData)> = None;
    let mut buffered = Vec::new();

    for (index, token) in tokens {
        let closes_open = matches!(
            (&open, &token),
            (Some((_, element)), Token::Tag(tag)) if tag.closing && tag.name == element.tag_name
        );

        if closes_open {
            if let Some((_, element)) = open.take() {
                spans.push(Span {
                    node: Node::Element(element),
                    children: std::mem::take(&mut buffered),
                });
            }
            continue;
        }

        if open.is_some() {
            buffered.push((index, token));
            continue;
        }

        let tag = match token {
            Token::Text { data } => {
                spans.push(Span {
                    node: Node::Text(data),
                    children: Vec::new(),
                });
                continue;
            }
            Token::Tag(tag) => tag,
        };

        if tag.closing {
            issues.push(ParseIssue::new(
                IssueKind::UnmatchedClosingTag,
                format!("</{}> has no open element and opens one instead", tag.name),
                index,
            ));
        }

        let mut element = ElementData::new(tag.name, tag.attributes);
        if !tag.trailing_text.is_empty() {
            element.append_child(Node::Text(tag.trailing_text));
        }

        if tag.self_closing {
            spans.push(Span {
                node: Node::Element(element),
                children: Vec::new(),
            });
        } else {
            open = Some((index, element));
        }
    }

    if let Some((index, element)) = open {
        issues.push(ParseIssue::new(
            IssueKind::UnterminatedElement,
            format!("<{}> was never closed", element.tag_name),
            index,
        ));
        spans.push(Span {
            node: Node::Element(element),
            children: buffered,
        });
    }

    spans
}
