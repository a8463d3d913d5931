use core::fmt;

use laxml_dom::AttributesMap;

/// One `<...>` fragment of the input plus the text that follows it up to the
/// next `<`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagToken {
    /// Tag name, with any leading `/` or trailing `/` removed.
    pub name: String,
    /// True for `</name>`.
    pub closing: bool,
    /// True for `<name/>`, and forced on for self-terminating tags
    /// (void tags, `!DOCTYPE`, `?xml`).
    pub self_closing: bool,
    /// Parsed attributes. Always empty for closing tags.
    pub attributes: AttributesMap,
    /// Text between this tag's `>` and the next `<`, trimmed.
    pub trailing_text: String,
}

impl TagToken {
    /// Create an opening tag token with no attributes.
    #[must_use]
    pub fn open(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a closing tag token.
    #[must_use]
    pub fn close(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            closing: true,
            ..Self::default()
        }
    }

    /// Attach trailing text.
    #[must_use]
    pub fn with_trailing_text(mut self, text: impl Into<String>) -> Self {
        self.trailing_text = text.into();
        self
    }
}

/// The tokenizer emits tokens of these types to the tree assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// An opening, closing or self-closing tag.
    Tag(TagToken),
    /// Free text that appeared before the first `<` of the input.
    Text {
        /// The text, trimmed.
        data: String,
    },
}

impl Token {
    /// The tag token, if this is one.
    #[must_use]
    pub const fn as_tag(&self) -> Option<&TagToken> {
        match self {
            Self::Tag(tag) => Some(tag),
            Self::Text { .. } => None,
        }
    }

    /// Returns true for a closing tag token.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.as_tag().is_some_and(|tag| tag.closing)
    }
}

impl From<TagToken> for Token {
    fn from(tag: TagToken) -> Self {
        Self::Tag(tag)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(TagToken {
                name,
                closing,
                self_closing,
                attributes,
                trailing_text,
            }) => {
                if *closing {
                    write!(f, "</{name}")?;
                } else {
                    write!(f, "<{name}")?;
                }
                for (key, value) in attributes {
                    if key == value {
                        write!(f, " {key}")?;
                    } else {
                        write!(f, " {key}=\"{value}\"")?;
                    }
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")?;
                if !trailing_text.is_empty() {
                    write!(f, " Text({trailing_text})")?;
                }
                Ok(())
            }
            Self::Text { data } => write!(f, "Text({data})"),
        }
    }
}
