//! Lexer
//!
//! This module turns Argdown source text into a flat sequence of classified
//! line records. Argdown is a line-oriented notation, so lexing works on
//! whole lines rather than on character tokens: every line is stripped of
//! its inline data (YAML, comments), measured for indentation, and matched
//! against an anchored pattern table.
//!
//! Source Preservation
//!
//! Each [`LineRecord`] keeps the raw source line together with the split-out
//! parts (label, text, raw YAML, comment text). The serializer rebuilds
//! lines from these parts, which is what makes the final reconstruction
//! step byte-exact modulo the documented whitespace normalization.
//!
//! The Lexing Pipeline
//!
//! 1. YAML / comment extraction. See [`yaml_extraction`]. Inline flow
//!    mappings `{k: v}` and `// ...` comments are removed from the line
//!    before classification so that patterns only ever see structural
//!    content.
//!
//! 2. Line classification. See [`line_classification`]. The remaining
//!    content is matched against the pattern table in declaration order;
//!    the first match wins.

pub mod line_classification;
pub mod yaml_extraction;

pub use line_classification::{classify_content, parse_node_spec};

use crate::argdown::ast::error::ParseError;
use yaml_extraction::extract_yaml_and_comment;

/// Dialectical relation of a child node towards its parent.
///
/// The first three are the primary relations of the Argdown surface; the
/// remaining four are accepted on input and classified by the strategies as
/// either objection-like (`><`) or implication-like (the inverse arrows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeKind {
    Supports,
    Attacks,
    Undercuts,
    Contradicts,
    IsSupportedBy,
    IsAttackedBy,
    IsUndercutBy,
}

impl EdgeKind {
    pub fn as_token(&self) -> &'static str {
        match self {
            EdgeKind::Supports => "<+",
            EdgeKind::Attacks => "<-",
            EdgeKind::Undercuts => "<_",
            EdgeKind::Contradicts => "><",
            EdgeKind::IsSupportedBy => "+>",
            EdgeKind::IsAttackedBy => "->",
            EdgeKind::IsUndercutBy => "_>",
        }
    }

    pub fn from_token(token: &str) -> Option<EdgeKind> {
        match token {
            "<+" => Some(EdgeKind::Supports),
            "<-" => Some(EdgeKind::Attacks),
            "<_" => Some(EdgeKind::Undercuts),
            "><" => Some(EdgeKind::Contradicts),
            "+>" => Some(EdgeKind::IsSupportedBy),
            "->" => Some(EdgeKind::IsAttackedBy),
            "_>" => Some(EdgeKind::IsUndercutBy),
            _ => None,
        }
    }

    /// Support-like relations reveal together with the node they back up.
    pub fn is_support_like(&self) -> bool {
        matches!(self, EdgeKind::Supports)
    }

    /// Objection-like relations: attacks, undercuts and contradictions.
    pub fn is_objection_like(&self) -> bool {
        matches!(
            self,
            EdgeKind::Attacks | EdgeKind::Undercuts | EdgeKind::Contradicts
        )
    }

    /// Inverse relations (parent is supported/attacked/undercut by the child).
    pub fn is_inverse(&self) -> bool {
        matches!(
            self,
            EdgeKind::IsSupportedBy | EdgeKind::IsAttackedBy | EdgeKind::IsUndercutBy
        )
    }
}

/// How a proposition is written: bracketed claim, angle-bracketed argument,
/// or bare text (no label at all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Claim,
    Argument,
    Bare,
}

/// A proposition as written on one line: kind, optional label, optional text.
///
/// `[Label]: text` is a claim, `[Label]` a claim reference, `<Label>: text`
/// an argument, `<Label>` an argument reference. Bare text has no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    pub kind: NodeKind,
    pub label: Option<String>,
    pub text: String,
}

impl NodeSpec {
    /// Rebuild the proposition exactly as it is written in Argdown.
    pub fn render(&self) -> String {
        match (&self.kind, &self.label) {
            (NodeKind::Claim, Some(label)) if self.text.is_empty() => format!("[{}]", label),
            (NodeKind::Claim, Some(label)) => format!("[{}]: {}", label, self.text),
            (NodeKind::Argument, Some(label)) if self.text.is_empty() => format!("<{}>", label),
            (NodeKind::Argument, Some(label)) => format!("<{}>: {}", label, self.text),
            _ => self.text.clone(),
        }
    }
}

/// Structural classification of one source line, after YAML and comment
/// extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// Standalone comment line; the raw comment (including its `//` or
    /// `/* .. */` delimiters) is kept in [`LineRecord::comment`].
    Comment,
    /// A dialectical edge to a child node, e.g. `<+ <Label>: text`.
    Edge { edge: EdgeKind, target: NodeSpec },
    /// A proposition without an edge marker: root claim, argument preamble,
    /// or a reference.
    Node { target: NodeSpec },
    /// A numbered statement `(n) text`.
    Numbered { number: u32, text: String },
    /// An inference separator carrying rule text, `-- text --`.
    InferenceInfo { rule_text: String },
    /// A bare inference separator, five or more dashes.
    Separator,
    /// Unclassified content.
    Text { text: String },
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub raw: String,
    /// 1-based source line number, for error reporting.
    pub line_number: usize,
    /// Number of leading spaces.
    pub indent: usize,
    pub kind: LineKind,
    /// Raw inline YAML, key order and spacing preserved literally.
    pub yaml: Option<String>,
    /// Comment attached to this line. For inline comments this is the text
    /// after `//`; for standalone comment lines it is the full raw comment.
    pub comment: Option<String>,
}

/// Classify every line of an Argdown snippet.
///
/// This is a pure function of the source text; records come back in source
/// order with stable line numbers.
pub fn classify_lines(source: &str) -> Result<Vec<LineRecord>, ParseError> {
    let mut records = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line_number = index + 1;
        let indent = raw.chars().take_while(|c| *c == ' ').count();

        if raw.trim().is_empty() {
            records.push(LineRecord {
                raw: raw.to_string(),
                line_number,
                indent: 0,
                kind: LineKind::Blank,
                yaml: None,
                comment: None,
            });
            continue;
        }

        let extraction = extract_yaml_and_comment(raw, line_number)?;
        let kind = if extraction.content.trim().is_empty() {
            match extraction.comment {
                Some(_) => LineKind::Comment,
                None => LineKind::Blank,
            }
        } else {
            classify_content(extraction.content.trim())
        };

        records.push(LineRecord {
            raw: raw.to_string(),
            line_number,
            indent,
            kind,
            yaml: extraction.yaml,
            comment: extraction.comment,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_root_claim_line() {
        let records = classify_lines("[Main]: The main claim.").expect("classify failed");
        assert_eq!(records.len(), 1);
        match &records[0].kind {
            LineKind::Node { target } => {
                assert_eq!(target.kind, NodeKind::Claim);
                assert_eq!(target.label.as_deref(), Some("Main"));
                assert_eq!(target.text, "The main claim.");
            }
            other => panic!("expected a node line, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_edge_line_with_indent() {
        let records = classify_lines("    <+ <Reason>: Because.").expect("classify failed");
        assert_eq!(records[0].indent, 4);
        match &records[0].kind {
            LineKind::Edge { edge, target } => {
                assert_eq!(*edge, EdgeKind::Supports);
                assert_eq!(target.kind, NodeKind::Argument);
                assert_eq!(target.label.as_deref(), Some("Reason"));
            }
            other => panic!("expected an edge line, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_numbered_and_separator_lines() {
        let source = "(1) A premise.\n-----\n(2) A conclusion.";
        let records = classify_lines(source).expect("classify failed");
        assert_eq!(
            records[0].kind,
            LineKind::Numbered {
                number: 1,
                text: "A premise.".to_string()
            }
        );
        assert_eq!(records[1].kind, LineKind::Separator);
        assert_eq!(
            records[2].kind,
            LineKind::Numbered {
                number: 2,
                text: "A conclusion.".to_string()
            }
        );
    }

    #[test]
    fn test_classify_inference_info_line() {
        let records = classify_lines("-- modus ponens --").expect("classify failed");
        assert_eq!(
            records[0].kind,
            LineKind::InferenceInfo {
                rule_text: "modus ponens".to_string()
            }
        );
    }

    #[test]
    fn test_five_dashes_are_a_bare_separator_not_inference_info() {
        let records = classify_lines("-----").expect("classify failed");
        assert_eq!(records[0].kind, LineKind::Separator);
    }

    #[test]
    fn test_yaml_and_comment_are_split_off() {
        let records =
            classify_lines("(1) Claim. {certainty: 0.9} // inline note").expect("classify failed");
        let record = &records[0];
        assert_eq!(record.yaml.as_deref(), Some("{certainty: 0.9}"));
        assert_eq!(record.comment.as_deref(), Some("inline note"));
        assert_eq!(
            record.kind,
            LineKind::Numbered {
                number: 1,
                text: "Claim.".to_string()
            }
        );
    }

    #[test]
    fn test_standalone_comment_line() {
        let records = classify_lines("    // just a note").expect("classify failed");
        assert_eq!(records[0].kind, LineKind::Comment);
        assert_eq!(records[0].comment.as_deref(), Some("// just a note"));
        assert_eq!(records[0].indent, 4);
    }

    #[test]
    fn test_unclosed_yaml_is_rejected() {
        let err = classify_lines("(1) Claim. {certainty: 0.9").expect_err("should fail");
        assert_eq!(err.line, 1);
        assert!(err.reason.contains("unclosed"));
    }
}
