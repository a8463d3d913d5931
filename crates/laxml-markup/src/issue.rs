//! Diagnostics recorded while recovering from malformed markup.
//!
//! Parsing never fails. Whenever the tokenizer or tree assembler has to guess,
//! it records a [`ParseIssue`] alongside the best-effort result so strict
//! callers can see what was inferred rather than written. Issues are only ever
//! returned; printing them is up to the caller.

use core::fmt;

use strum_macros::Display;

/// What kind of recovery happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum IssueKind {
    /// An element was still open when its parent closed or input ended.
    UnterminatedElement,
    /// A closing tag had no open element with the same name.
    UnmatchedClosingTag,
    /// An attribute list was resolved by the quoting heuristic and probably
    /// not the way the author meant.
    AmbiguousAttributes,
    /// A top-level node after the document root was ignored.
    DiscardedTopLevelNode,
}

/// A single recovered problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Category of the issue.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// Index into the token stream where this issue was detected.
    pub token_index: usize,
}

impl ParseIssue {
    /// Create an issue.
    #[must_use]
    pub const fn new(kind: IssueKind, message: String, token_index: usize) -> Self {
        Self {
            kind,
            message,
            token_index,
        }
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at token {}: {}", self.kind, self.token_index, self.message)
    }
}
