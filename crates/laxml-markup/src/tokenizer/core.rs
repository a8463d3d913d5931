use laxml_dom::AttributesMap;

use super::attributes::parse_attributes_checked;
use super::token::{TagToken, Token};
use crate::issue::{IssueKind, ParseIssue};
use crate::void_tags::{is_processing_instruction, is_self_terminating};

/// Splits markup into [`Token`]s.
///
/// The input is first normalized (every whitespace run becomes one space, ends
/// trimmed), then cut on `<`. Each piece is one tag fragment: the header up to
/// the first `>`, and everything after it as trailing text.
pub struct MarkupTokenizer {
    input: String,
    token_stream: Vec<Token>,
    issues: Vec<ParseIssue>,
}

impl MarkupTokenizer {
    /// Create a tokenizer over the given input.
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            input,
            token_stream: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    pub fn run(&mut self) {
        let normalized = normalize_whitespace(&self.input);
        let mut pieces = normalized.split('<');

        // Text before the first '<' is not part of any tag.
        if let Some(leading) = pieces.next().filter(|text| !text.is_empty()) {
            self.token_stream.push(Token::Text {
                data: leading.trim_ascii().to_string(),
            });
        }

        for fragment in pieces.filter(|piece| !piece.is_empty()) {
            let token = self.tokenize_fragment(fragment);
            self.token_stream.push(Token::Tag(token));
        }
    }

    /// Tokens produced so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.token_stream
    }

    /// Issues recorded so far.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Consume the tokenizer and return its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Consume the tokenizer and return its tokens and issues.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Token>, Vec<ParseIssue>) {
        (self.token_stream, self.issues)
    }

    fn tokenize_fragment(&mut self, fragment: &str) -> TagToken {
        // Only the first '>' ends the header; later ones belong to the text.
        let (header, trailing) = fragment.split_once('>').unwrap_or((fragment, ""));
        let mut header = header.trim_ascii();
        let trailing_text = trailing.trim_ascii().to_string();

        let closing = match header.strip_prefix('/') {
            Some(rest) => {
                header = rest;
                true
            }
            None => false,
        };

        let mut self_closing = false;
        if header.ends_with('/') {
            self_closing = true;
            header = header.trim_end_matches('/');
        }

        if closing {
            return TagToken {
                name: header.trim_ascii().to_string(),
                closing,
                self_closing,
                attributes: AttributesMap::new(),
                trailing_text,
            };
        }

        if is_processing_instruction(header) {
            // A bare `<?>` keeps its `?` so it still terminates itself.
            header = header
                .strip_suffix('?')
                .filter(|rest| !rest.is_empty())
                .unwrap_or(header)
                .trim_ascii_end();
        }

        let (name, attribute_source) = header.split_once(' ').unwrap_or((header, ""));
        let (attributes, ambiguities) = parse_attributes_checked(attribute_source);
        for ambiguity in ambiguities {
            self.issues.push(ParseIssue::new(
                IssueKind::AmbiguousAttributes,
                format!("<{name}>: {ambiguity}"),
                self.token_stream.len(),
            ));
        }

        TagToken {
            name: name.to_string(),
            closing,
            self_closing: self_closing || is_self_terminating(name),
            attributes,
            trailing_text,
        }
    }
}

/// Collapse every ASCII whitespace run to a single space and trim both ends.
///
/// Other whitespace, such as a no-break space, is content and stays as is.
#[must_use]
pub fn normalize_whitespace(input: &str) -> String {
    input
        .split(|c: char| c.is_ascii_whitespace())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenize `markup` in one call.
#[must_use]
pub fn tokenize(markup: &str) -> Vec<Token> {
    let mut tokenizer = MarkupTokenizer::new(markup.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}
