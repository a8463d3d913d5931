//! Attribute list parsing.
//!
//! Attributes are split with a single-delimiter heuristic rather than a state
//! machine: the whole tag is assumed to use one quote style, and pairs are
//! separated by `<quote><space>`. This handles ordinary markup and degrades
//! predictably on unusual input (values that themselves contain
//! `<quote><space>`, bare words followed by valued pairs, unquoted values).

use laxml_dom::AttributesMap;

/// Pick the quote character a tag uses: `"` if present anywhere, else `'`.
#[must_use]
pub fn detect_quote(source: &str) -> char {
    if source.contains('"') { '"' } else { '\'' }
}

/// Parse the part of a tag header after its name into an attribute map.
///
/// Bare words become singleton attributes whose value equals the key. A key
/// given twice keeps its first position and takes the last value.
#[must_use]
pub fn parse_attributes(source: &str) -> AttributesMap {
    parse_attributes_checked(source).0
}

/// Like [`parse_attributes`], but also describes each place where the
/// heuristic probably misread the author's intent.
pub(crate) fn parse_attributes_checked(source: &str) -> (AttributesMap, Vec<String>) {
    let quote = detect_quote(source);
    let other_quote = if quote == '"' { '\'' } else { '"' };
    let delimiter = format!("{quote} ");

    let mut attributes = AttributesMap::new();
    let mut ambiguities = Vec::new();

    for piece in source.split(delimiter.as_str()) {
        let (key, raw_value) = piece.split_once('=').unwrap_or((piece, ""));
        let key = key.trim_ascii();
        if key.is_empty() {
            continue;
        }

        if key.contains(char::is_whitespace) || key.contains(['"', '\'']) {
            ambiguities.push(format!("attribute name '{key}' swallowed neighbouring text"));
        } else if raw_value.starts_with(other_quote) {
            ambiguities.push(format!(
                "attribute '{key}' uses {other_quote} quotes but the tag was split on {quote}"
            ));
        } else if !raw_value.starts_with(quote) && raw_value.contains(char::is_whitespace) {
            ambiguities.push(format!("unquoted value of '{key}' runs into the next attribute"));
        }

        // Singleton attributes: `disabled` is stored as disabled="disabled".
        let value = if raw_value.is_empty() { key } else { raw_value };
        let _ = attributes.insert(key.to_string(), value.replace(quote, ""));
    }

    (attributes, ambiguities)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(map: &AttributesMap) -> Vec<(&str, &str)> {
        map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn test_double_quoted_pairs() {
        let attrs = parse_attributes(r#"href="x" class="a b""#);
        assert_eq!(pairs(&attrs), [("href", "x"), ("class", "a b")]);
    }

    #[test]
    fn test_single_quoted_pairs() {
        let attrs = parse_attributes("href='x' id='y'");
        assert_eq!(pairs(&attrs), [("href", "x"), ("id", "y")]);
    }

    #[test]
    fn test_value_keeps_equals_signs() {
        let attrs = parse_attributes(r#"href="/search?q=a=b""#);
        assert_eq!(pairs(&attrs), [("href", "/search?q=a=b")]);
    }

    #[test]
    fn test_singleton() {
        let attrs = parse_attributes("disabled");
        assert_eq!(pairs(&attrs), [("disabled", "disabled")]);
    }

    #[test]
    fn test_empty_quoted_value_is_not_singleton() {
        let attrs = parse_attributes(r#"alt="""#);
        assert_eq!(pairs(&attrs), [("alt", "")]);
    }

    #[test]
    fn test_duplicate_key_last_wins_first_position() {
        let attrs = parse_attributes(r#"href="1" id="main" href="2""#);
        assert_eq!(pairs(&attrs), [("href", "2"), ("id", "main")]);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse_attributes("").is_empty());
        assert!(parse_attributes("   ").is_empty());
    }

    #[test]
    fn test_clean_input_has_no_ambiguities() {
        let (_, ambiguities) = parse_attributes_checked(r#"type="text" disabled"#);
        assert!(ambiguities.is_empty());
    }

    #[test]
    fn test_bare_word_before_pair_is_ambiguous() {
        let (attrs, ambiguities) = parse_attributes_checked(r#"disabled type="text""#);
        assert_eq!(pairs(&attrs), [("disabled type", "text")]);
        assert_eq!(ambiguities.len(), 1);
    }

    #[test]
    fn test_unquoted_values_are_ambiguous() {
        let (attrs, ambiguities) = parse_attributes_checked("href=x class=y");
        assert_eq!(pairs(&attrs), [("href", "x class=y")]);
        assert_eq!(ambiguities.len(), 1);
    }

    #[test]
    fn test_mixed_quotes_are_ambiguous() {
        let (_, ambiguities) = parse_attributes_checked(r#"a='x' b="y""#);
        assert_eq!(ambiguities.len(), 1);
    }
}
