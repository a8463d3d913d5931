//! Registry of tags that never take a closing tag or children.

/// Void tags: `<br>`, `<img>` and friends. Lower-case, matched case-sensitively.
pub const VOID_TAGS: [&str; 17] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr", "command", "keygen", "menuitem",
];

/// Returns true if `tag` is one of [`VOID_TAGS`].
///
/// No case folding happens here: `<BR>` is not void.
#[must_use]
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Returns true for markup declarations such as `!DOCTYPE`.
#[must_use]
pub fn is_declaration(tag: &str) -> bool {
    tag.starts_with('!')
}

/// Returns true for processing instructions such as `?xml`.
#[must_use]
pub fn is_processing_instruction(tag: &str) -> bool {
    tag.starts_with('?')
}

/// Tags that end at their own `>`: void tags, declarations and processing
/// instructions. These never open a span in the tree assembler and never
/// render children or a closing tag.
#[must_use]
pub fn is_self_terminating(tag: &str) -> bool {
    is_void(tag) || is_declaration(tag) || is_processing_instruction(tag)
}
