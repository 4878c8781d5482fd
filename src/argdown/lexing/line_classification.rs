//! Line Classification
//!
//! Core classification logic for determining line types based on anchored
//! prefix patterns. Content arrives here already stripped of inline YAML and
//! comments (see [`yaml_extraction`](super::yaml_extraction)).
//!
//! Classification follows this specific order (important for correctness):
//! 1. Bare separators (five or more dashes alone)
//! 2. Inference info lines `-- text --`
//! 3. Dialectical edge lines (`<+ `, `<- `, `<_ `, `>< `, `+> `, `-> `, `_> `)
//! 4. Numbered statements `(n) text`
//! 5. Claims `[Label]: text` and claim references `[Label]`
//! 6. Arguments `<Label>: text` and argument references `<Label>`
//! 7. Default to plain text
//!
//! Edges must be tried before argument patterns: `<+ <A>: text` would
//! otherwise match the argument pattern with a garbled label.

use super::{EdgeKind, LineKind, NodeKind, NodeSpec};
use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{5,}$").expect("separator pattern"));

static INFERENCE_INFO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--\s*(.+?)\s*--$").expect("inference info pattern"));

static EDGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(<\+|<-|<_|><|\+>|->|_>)\s+(.+)$").expect("edge pattern"));

static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\((\d+)\)\s*(.*)$").expect("numbered pattern"));

static CLAIM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]:\s*(.*)$").expect("claim pattern"));

static CLAIM_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]$").expect("claim ref pattern"));

static ARGUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<([^>]+)>:\s*(.*)$").expect("argument pattern"));

static ARGUMENT_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<([^>]+)>$").expect("argument ref pattern"));

/// Parse a proposition as written: claim, argument, reference or bare text.
pub fn parse_node_spec(content: &str) -> NodeSpec {
    if let Some(caps) = CLAIM.captures(content) {
        return NodeSpec {
            kind: NodeKind::Claim,
            label: Some(caps[1].to_string()),
            text: caps[2].trim().to_string(),
        };
    }
    if let Some(caps) = CLAIM_REF.captures(content) {
        return NodeSpec {
            kind: NodeKind::Claim,
            label: Some(caps[1].to_string()),
            text: String::new(),
        };
    }
    if let Some(caps) = ARGUMENT.captures(content) {
        return NodeSpec {
            kind: NodeKind::Argument,
            label: Some(caps[1].to_string()),
            text: caps[2].trim().to_string(),
        };
    }
    if let Some(caps) = ARGUMENT_REF.captures(content) {
        return NodeSpec {
            kind: NodeKind::Argument,
            label: Some(caps[1].to_string()),
            text: String::new(),
        };
    }
    NodeSpec {
        kind: NodeKind::Bare,
        label: None,
        text: content.to_string(),
    }
}

/// Determine the type of a line from its structural content.
pub fn classify_content(content: &str) -> LineKind {
    if SEPARATOR.is_match(content) {
        return LineKind::Separator;
    }
    if let Some(caps) = INFERENCE_INFO.captures(content) {
        return LineKind::InferenceInfo {
            rule_text: caps[1].to_string(),
        };
    }
    if let Some(caps) = EDGE.captures(content) {
        let edge = EdgeKind::from_token(&caps[1]).expect("edge token matched by pattern");
        return LineKind::Edge {
            edge,
            target: parse_node_spec(caps[2].trim()),
        };
    }
    if let Some(caps) = NUMBERED.captures(content) {
        if let Ok(number) = caps[1].parse::<u32>() {
            return LineKind::Numbered {
                number,
                text: caps[2].trim().to_string(),
            };
        }
    }
    let spec = parse_node_spec(content);
    match spec.kind {
        NodeKind::Bare => LineKind::Text {
            text: spec.text,
        },
        _ => LineKind::Node { target: spec },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_before_argument_disambiguation() {
        // `<+ <A>: text` must classify as an edge, not as an argument with a
        // mangled label.
        match classify_content("<+ <A>: text") {
            LineKind::Edge { edge, target } => {
                assert_eq!(edge, EdgeKind::Supports);
                assert_eq!(target.label.as_deref(), Some("A"));
            }
            other => panic!("expected edge, got {:?}", other),
        }
    }

    #[test]
    fn test_all_edge_tokens_round_trip() {
        for token in ["<+", "<-", "<_", "><", "+>", "->", "_>"] {
            let content = format!("{} [C]", token);
            match classify_content(&content) {
                LineKind::Edge { edge, .. } => assert_eq!(edge.as_token(), token),
                other => panic!("expected edge for {:?}, got {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_claim_reference_without_colon() {
        match classify_content("[Main claim]") {
            LineKind::Node { target } => {
                assert_eq!(target.kind, NodeKind::Claim);
                assert_eq!(target.label.as_deref(), Some("Main claim"));
                assert_eq!(target.text, "");
            }
            other => panic!("expected node, got {:?}", other),
        }
    }

    #[test]
    fn test_separator_wins_over_inference_info() {
        assert_eq!(classify_content("-----"), LineKind::Separator);
        assert_eq!(classify_content("---------"), LineKind::Separator);
        assert_eq!(
            classify_content("-- from (1) and (2) --"),
            LineKind::InferenceInfo {
                rule_text: "from (1) and (2)".to_string()
            }
        );
    }

    #[test]
    fn test_four_dashes_are_plain_text() {
        assert_eq!(
            classify_content("----"),
            LineKind::Text {
                text: "----".to_string()
            }
        );
    }

    #[test]
    fn test_node_spec_render_round_trip() {
        for content in ["[A]: Claim.", "[A]", "<B>: Gist.", "<B>", "just text"] {
            assert_eq!(parse_node_spec(content).render(), content);
        }
    }
}
