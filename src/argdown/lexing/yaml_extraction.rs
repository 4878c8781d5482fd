//! Inline data extraction
//!
//! Argdown lines can carry two kinds of trailing data: an inline YAML flow
//! mapping `{k1: v1, k2: v2}` terminating the proposition text, and a comment
//! (`// ...` to end of line, or a single-line `/* ... */`). Both are split off
//! before line classification and stored verbatim so the serializer can put
//! them back byte-for-byte.
//!
//! Extraction order matters and follows the grammar: YAML first (a comment may
//! follow the mapping on the same line), comments second.

use crate::argdown::ast::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Candidate inline YAML mappings, including one level of nested braces.
/// A candidate only counts when it is trailed by nothing or by a comment;
/// the `regex` crate has no lookahead, so that suffix check happens in code.
static YAML_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(?:[^{}]|\{[^}]*\})*\}").expect("yaml pattern"));

/// The parts of one raw line after inline data extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The line with YAML and comment removed, trailing whitespace stripped.
    pub content: String,
    /// The raw YAML mapping, braces included, exactly as written.
    pub yaml: Option<String>,
    /// Inline comments keep only the text after `//`; standalone comment
    /// lines keep the whole raw comment including delimiters.
    pub comment: Option<String>,
}

/// Split a raw source line into content, inline YAML and comment.
///
/// Fails with a [`ParseError`] when the line opens a flow mapping that never
/// closes; a `{` that starts inline data must be closed on the same line.
pub fn extract_yaml_and_comment(raw: &str, line_number: usize) -> Result<Extraction, ParseError> {
    let mut line = raw.to_string();

    // Pull out the inline YAML mapping first, if any.
    let mut yaml = None;
    for candidate in YAML_CANDIDATE.find_iter(raw) {
        let suffix = raw[candidate.end()..].trim_start();
        if suffix.is_empty() || suffix.starts_with("//") {
            yaml = Some(candidate.as_str().to_string());
            line = format!("{}{}", &raw[..candidate.start()], &raw[candidate.end()..]);
            break;
        }
    }

    // Standalone comments: the whole line is the comment.
    let trimmed = line.trim();
    let (content, comment) = if trimmed.starts_with("//")
        || (trimmed.starts_with("/*") && trimmed.ends_with("*/"))
    {
        (String::new(), Some(trimmed.to_string()))
    } else if let Some(slash_pos) = line.find("//") {
        let content = line[..slash_pos].trim_end().to_string();
        let comment = line[slash_pos + 2..].trim().to_string();
        (content, Some(comment))
    } else {
        (line.trim_end().to_string(), None)
    };

    // Whatever is left must be brace-balanced; an unclosed `{` means the
    // inline data never terminated.
    let mut depth: i32 = 0;
    for ch in content.chars() {
        match ch {
            '{' => depth += 1,
            '}' => depth = (depth - 1).max(0),
            _ => {}
        }
    }
    if depth > 0 {
        return Err(ParseError::new(
            line_number,
            "unclosed inline YAML data on this line",
        ));
    }

    Ok(Extraction {
        content,
        yaml,
        comment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_passes_through() {
        let extraction = extract_yaml_and_comment("[A]: A claim.", 1).expect("extract failed");
        assert_eq!(extraction.content, "[A]: A claim.");
        assert_eq!(extraction.yaml, None);
        assert_eq!(extraction.comment, None);
    }

    #[test]
    fn test_yaml_then_comment() {
        let extraction =
            extract_yaml_and_comment("(1) Claim. {certainty: 0.9} // note", 1).expect("extract");
        assert_eq!(extraction.content, "(1) Claim.");
        assert_eq!(extraction.yaml.as_deref(), Some("{certainty: 0.9}"));
        assert_eq!(extraction.comment.as_deref(), Some("note"));
    }

    #[test]
    fn test_yaml_key_order_is_preserved_literally() {
        let extraction =
            extract_yaml_and_comment("<A>: Gist. {b: 2, a: 1}", 1).expect("extract failed");
        assert_eq!(extraction.yaml.as_deref(), Some("{b: 2, a: 1}"));
    }

    #[test]
    fn test_braces_in_the_middle_of_text_are_not_yaml() {
        let extraction =
            extract_yaml_and_comment("[A]: A {braced} aside continues.", 1).expect("extract");
        assert_eq!(extraction.yaml, None);
        assert_eq!(extraction.content, "[A]: A {braced} aside continues.");
    }

    #[test]
    fn test_nested_braces() {
        let extraction =
            extract_yaml_and_comment("(1) P. {meta: {depth: 2}}", 1).expect("extract failed");
        assert_eq!(extraction.yaml.as_deref(), Some("{meta: {depth: 2}}"));
    }

    #[test]
    fn test_block_comment_line() {
        let extraction = extract_yaml_and_comment("/* aside */", 3).expect("extract failed");
        assert_eq!(extraction.content, "");
        assert_eq!(extraction.comment.as_deref(), Some("/* aside */"));
    }

    #[test]
    fn test_unclosed_yaml_errors_with_line_number() {
        let err = extract_yaml_and_comment("(1) P. {certainty: 0.9", 7).expect_err("should fail");
        assert_eq!(err.line, 7);
    }
}
