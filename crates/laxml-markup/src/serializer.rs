//! Pretty-printing serializer.
//!
//! Output is deterministic rather than faithful to the source layout: every
//! element starts on a fresh line, text is emitted verbatim right after its
//! opening tag, and a closing tag goes on its own line only when the element
//! has element children. There is no indentation.

use laxml_dom::{ElementData, Node};

use crate::void_tags::{is_processing_instruction, is_self_terminating};

/// The line separator used for pretty-printing.
pub const LINE_SEPARATOR: &str = "\n";

enum Step<'a> {
    Enter(&'a Node),
    Leave(&'a ElementData),
}

/// Render a node and its descendants as markup.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    let mut stack = vec![Step::Enter(node)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(Node::Text(text)) => out.push_str(text),
            Step::Enter(Node::Element(element)) => {
                write_start_tag(&mut out, element);
                // Children of self-terminating tags are never emitted.
                if is_self_terminating(&element.tag_name) {
                    continue;
                }
                stack.push(Step::Leave(element));
                stack.extend(element.children.iter().rev().map(Step::Enter));
            }
            Step::Leave(element) => {
                if element.has_element_children() {
                    out.push_str(LINE_SEPARATOR);
                }
                out.push_str("</");
                out.push_str(&element.tag_name);
                out.push('>');
            }
        }
    }

    out
}

fn write_start_tag(out: &mut String, element: &ElementData) {
    out.push_str(LINE_SEPARATOR);
    out.push('<');
    out.push_str(&element.tag_name);
    for (key, value) in &element.attrs {
        out.push(' ');
        out.push_str(key);
        if key != value {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
    if is_processing_instruction(&element.tag_name) {
        out.push('?');
    }
    out.push('>');
}
