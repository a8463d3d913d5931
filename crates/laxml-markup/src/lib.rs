//! Lenient markup parser for the laxml toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - whitespace normalization, `<`/`>` splitting, tag headers
//!   and a quote-style heuristic for attributes
//! - **Tree Assembler** - pairs opening and closing tags with an explicit stack
//!   of open elements, recovering from missing or stray closing tags
//! - **Document Wrapper** - separates an `?xml` declaration and a doctype from
//!   the root element
//! - **Serializer** - deterministic pretty-printed re-emission
//!
//! Parsing never fails. Recovered problems are reported as [`ParseIssue`]s.
//!
//! # Not Implemented
//!
//! - Entity and character reference decoding
//! - CDATA sections and raw-text elements (`script`, `style`)
//! - Namespaces, DTD processing, encoding detection

/// Document wrapper.
pub mod document;
/// Parse diagnostics.
pub mod issue;
/// Tree assembly.
pub mod parser;
/// Markup serializer.
pub mod serializer;
/// Markup tokenizer.
pub mod tokenizer;
/// Void tag registry.
pub mod void_tags;

pub use document::{Document, DocumentSnapshot};
pub use issue::{IssueKind, ParseIssue};
pub use parser::{NestingMode, ParseOptions, TreeAssembler, assemble, print_tree};
pub use serializer::{LINE_SEPARATOR, render};
pub use tokenizer::{MarkupTokenizer, TagToken, Token, tokenize};
pub use void_tags::{is_self_terminating, is_void};
