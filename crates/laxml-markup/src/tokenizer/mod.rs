//! Markup tokenizer module.
//!
//! Turns a markup string into a flat list of tag tokens, each carrying the
//! inline text that follows it.

/// Attribute list parsing.
pub mod attributes;
/// Tokenizer implementation.
pub mod core;
/// Token types produced by the tokenizer.
pub mod token;

pub use attributes::parse_attributes;
pub use self::core::{MarkupTokenizer, normalize_whitespace, tokenize};
pub use token::{TagToken, Token};
