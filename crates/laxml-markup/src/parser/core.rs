use strum_macros::{Display, EnumString};

use laxml_dom::{ElementData, Node};

use super::legacy::assemble_spans;
use crate::issue::{IssueKind, ParseIssue};
use crate::tokenizer::{TagToken, Token};

/// How a closing tag picks the open element it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum NestingMode {
    /// Close the innermost open element with the same name, like a stack of
    /// open elements. `<div><div></div></div>` nests correctly.
    #[default]
    DepthAware,
    /// Keep at most one element open per level, as the older span matcher
    /// did. The first `</div>` ends the first `<div>`, so nested same-name
    /// elements mis-close; a stray closing tag opens an element, text after a
    /// closing tag is dropped, and buffered children replace an element's own
    /// text.
    Legacy,
}

/// Options that control parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Closing-tag matching strategy.
    pub nesting: NestingMode,
}

impl ParseOptions {
    /// Default options: depth-aware nesting.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nesting: NestingMode::DepthAware,
        }
    }

    /// Select the closing-tag matching strategy.
    #[must_use]
    pub const fn with_nesting(mut self, nesting: NestingMode) -> Self {
        self.nesting = nesting;
        self
    }
}

/// An element waiting for its closing tag.
struct OpenElement {
    element: ElementData,
    /// Index of the token that opened it, for diagnostics.
    token_index: usize,
}

/// Builds a node forest from a token stream.
///
/// Opening tags push onto a stack of open elements; everything that arrives
/// while an element is open becomes its child. A closing tag pops up to and
/// including its match, closing anything above it implicitly. Whatever is
/// still open at the end is closed too, so content is never dropped.
///
/// [`NestingMode::Legacy`] swaps the stack for the older span matcher, which
/// can drop text.
pub struct TreeAssembler {
    tokens: Vec<Token>,
    nesting: NestingMode,
    stack_of_open_elements: Vec<OpenElement>,
    output: Vec<Node>,
    issues: Vec<ParseIssue>,
}

impl TreeAssembler {
    /// Create an assembler over a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            nesting: NestingMode::default(),
            stack_of_open_elements: Vec::new(),
            output: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Select the closing-tag matching strategy.
    #[must_use]
    pub const fn with_nesting(mut self, nesting: NestingMode) -> Self {
        self.nesting = nesting;
        self
    }

    /// Run the assembler and return the top-level nodes.
    #[must_use]
    pub fn run(self) -> Vec<Node> {
        self.run_with_issues().0
    }

    /// Run the assembler and return both the top-level nodes and any issues.
    #[must_use]
    pub fn run_with_issues(mut self) -> (Vec<Node>, Vec<ParseIssue>) {
        let tokens = std::mem::take(&mut self.tokens);
        if self.nesting == NestingMode::Legacy {
            let nodes = assemble_spans(tokens, &mut self.issues);
            return (nodes, self.issues);
        }

        for (index, token) in tokens.into_iter().enumerate() {
            self.process_token(index, token);
        }

        while let Some(open) = self.stack_of_open_elements.pop() {
            self.parse_issue(
                IssueKind::UnterminatedElement,
                format!("<{}> was never closed", open.element.tag_name),
                open.token_index,
            );
            self.insert_node(Node::Element(open.element));
        }

        (self.output, self.issues)
    }

    fn process_token(&mut self, index: usize, token: Token) {
        match token {
            Token::Text { data } => self.insert_text(data),
            Token::Tag(tag) if tag.closing => self.close_element(index, tag),
            Token::Tag(tag) => self.open_element(index, tag),
        }
    }

    fn open_element(&mut self, index: usize, tag: TagToken) {
        let TagToken {
            name,
            self_closing,
            attributes,
            trailing_text,
            ..
        } = tag;
        let mut element = ElementData::new(name, attributes);

        if self_closing {
            // Self-terminating elements never own children; their text
            // follows them as a sibling.
            self.insert_node(Node::Element(element));
            self.insert_text(trailing_text);
            return;
        }

        if !trailing_text.is_empty() {
            element.append_child(Node::Text(trailing_text));
        }
        self.stack_of_open_elements.push(OpenElement {
            element,
            token_index: index,
        });
    }

    fn close_element(&mut self, index: usize, tag: TagToken) {
        let position = self
            .stack_of_open_elements
            .iter()
            .rposition(|open| open.element.tag_name == tag.name);

        let Some(position) = position else {
            self.parse_issue(
                IssueKind::UnmatchedClosingTag,
                format!("</{}> has no open element to close", tag.name),
                index,
            );
            self.insert_text(tag.trailing_text);
            return;
        };

        while self.stack_of_open_elements.len() > position + 1 {
            let Some(inner) = self.stack_of_open_elements.pop() else {
                break;
            };
            self.parse_issue(
                IssueKind::UnterminatedElement,
                format!(
                    "<{}> closed implicitly by </{}>",
                    inner.element.tag_name, tag.name
                ),
                inner.token_index,
            );
            self.insert_node(Node::Element(inner.element));
        }

        if let Some(open) = self.stack_of_open_elements.pop() {
            self.insert_node(Node::Element(open.element));
        }
        self.insert_text(tag.trailing_text);
    }

    /// Append to the current open element, or to the top level.
    fn insert_node(&mut self, node: Node) {
        match self.stack_of_open_elements.last_mut() {
            Some(open) => open.element.append_child(node),
            None => self.output.push(node),
        }
    }

    fn insert_text(&mut self, text: String) {
        if !text.is_empty() {
            self.insert_node(Node::Text(text));
        }
    }

    fn parse_issue(&mut self, kind: IssueKind, message: String, token_index: usize) {
        self.issues.push(ParseIssue::new(kind, message, token_index));
    }
}

/// Assemble a token stream into top-level nodes with depth-aware nesting.
#[must_use]
pub fn assemble(tokens: Vec<Token>) -> Vec<Node> {
    TreeAssembler::new(tokens).run()
}

/// Print a node tree for debugging.
pub fn print_tree(node: &Node, indent: usize) {
    let mut stack = vec![(node, indent)];
    while let Some((node, depth)) = stack.pop() {
        let prefix = "  ".repeat(depth);
        match node {
            Node::Element(data) => {
                if data.attrs.is_empty() {
                    println!("{prefix}<{}>", data.tag_name);
                } else {
                    let attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if k == v {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    println!("{prefix}<{} {}>", data.tag_name, attrs.join(" "));
                }
            }
            Node::Text(data) => {
                let display = data.replace(' ', "\u{00B7}");
                println!("{prefix}\"{display}\"");
            }
        }
        stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
    }
}
