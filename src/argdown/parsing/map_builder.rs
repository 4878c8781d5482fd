//! Argument map assembly
//!
//! A stack-based indentation parse. The stack holds the most recent node at
//! every depth; an edge line at depth `d` attaches to the stack entry at
//! `d - 1`. Blank lines carry no structure in maps and are dropped here (the
//! documented normalization); standalone comments become document-level
//! decorations anchored to the preceding node.

use crate::argdown::ast::map::{MapNode, MapTree, StrayComment};
use crate::argdown::ast::ParseError;
use crate::argdown::lexing::{LineKind, LineRecord, NodeSpec};

/// Fallback indent unit when the document gives no sample to infer from.
const DEFAULT_INDENT_UNIT: usize = 4;

/// Assemble classified lines into a [`MapTree`].
pub fn build_map(records: &[LineRecord]) -> Result<MapTree, ParseError> {
    let mut tree = MapTree::default();
    let mut stack: Vec<usize> = Vec::new();
    let unit = infer_indent_unit(records);

    for record in records {
        match &record.kind {
            LineKind::Blank => {}
            LineKind::Comment => {
                if let Some(text) = &record.comment {
                    tree.comments.push(StrayComment {
                        after: tree.nodes.last().map(|n| n.id),
                        indent: record.indent,
                        text: text.clone(),
                    });
                }
            }
            LineKind::Node { target } => {
                let depth = depth_of(record, unit)?;
                if depth > 0 {
                    return Err(ParseError::new(
                        record.line_number,
                        "indented proposition is missing its dialectical marker",
                    ));
                }
                push_node(&mut tree, &mut stack, record, target.clone(), None, 0)?;
            }
            LineKind::Edge { edge, target } => {
                let depth = depth_of(record, unit)?;
                if depth == 0 {
                    return Err(ParseError::new(
                        record.line_number,
                        "dialectical edge at depth 0 has no parent",
                    ));
                }
                push_node(
                    &mut tree,
                    &mut stack,
                    record,
                    target.clone(),
                    Some(*edge),
                    depth,
                )?;
            }
            LineKind::Numbered { .. } | LineKind::Separator | LineKind::InferenceInfo { .. } => {
                return Err(ParseError::new(
                    record.line_number,
                    "premise-conclusion line inside an argument map",
                ));
            }
            LineKind::Text { text } => {
                let depth = depth_of(record, unit)?;
                if depth > 0 {
                    return Err(ParseError::new(
                        record.line_number,
                        "indented proposition is missing its dialectical marker",
                    ));
                }
                let spec = NodeSpec {
                    kind: crate::argdown::lexing::NodeKind::Bare,
                    label: None,
                    text: text.clone(),
                };
                push_node(&mut tree, &mut stack, record, spec, None, 0)?;
            }
        }
    }

    Ok(tree)
}

/// The indent unit is the smallest indent the document uses, capped at the
/// canonical 4 spaces. Every other indent must be a whole multiple of it.
fn infer_indent_unit(records: &[LineRecord]) -> usize {
    records
        .iter()
        .filter(|r| {
            r.indent > 0
                && matches!(
                    r.kind,
                    LineKind::Edge { .. } | LineKind::Node { .. } | LineKind::Text { .. }
                )
        })
        .map(|r| r.indent)
        .min()
        .map(|smallest| smallest.min(DEFAULT_INDENT_UNIT))
        .unwrap_or(DEFAULT_INDENT_UNIT)
}

fn depth_of(record: &LineRecord, unit: usize) -> Result<usize, ParseError> {
    if record.indent == 0 {
        return Ok(0);
    }
    if record.indent % unit != 0 {
        return Err(ParseError::new(
            record.line_number,
            format!(
                "indent of {} spaces is not a multiple of the {}-space unit",
                record.indent, unit
            ),
        ));
    }
    Ok(record.indent / unit)
}

fn push_node(
    tree: &mut MapTree,
    stack: &mut Vec<usize>,
    record: &LineRecord,
    spec: NodeSpec,
    edge: Option<crate::argdown::lexing::EdgeKind>,
    depth: usize,
) -> Result<(), ParseError> {
    if depth > stack.len() {
        return Err(ParseError::new(
            record.line_number,
            format!(
                "indent jumps to depth {} with no node at depth {}",
                depth,
                depth - 1
            ),
        ));
    }
    stack.truncate(depth);

    let id = tree.nodes.len();
    let parent = if depth == 0 {
        None
    } else {
        Some(stack[depth - 1])
    };

    tree.nodes.push(MapNode {
        id,
        spec,
        edge,
        depth,
        parent,
        children: Vec::new(),
        yaml: record.yaml.clone(),
        comment: record.comment.clone(),
        line_number: record.line_number,
    });

    match parent {
        Some(parent_id) => tree.nodes[parent_id].children.push(id),
        None => tree.roots.push(id),
    }
    stack.push(id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argdown::lexing::{classify_lines, EdgeKind};
    use crate::argdown::testing::samples;

    fn build(source: &str) -> MapTree {
        build_map(&classify_lines(source).expect("classify failed")).expect("build failed")
    }

    #[test]
    fn test_readme_map_structure() {
        let tree = build(samples::README_MAP);
        assert_eq!(tree.nodes.len(), 5);
        assert_eq!(tree.roots, vec![0]);
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.nodes[0].children, vec![1, 2, 3]);
        assert_eq!(tree.nodes[3].children, vec![4]);
        assert_eq!(tree.nodes[3].edge, Some(EdgeKind::Attacks));
        assert_eq!(tree.nodes[4].parent, Some(3));
        assert_eq!(tree.nodes[4].depth, 2);
    }

    #[test]
    fn test_two_space_indent_is_accepted_and_normalized_later() {
        let tree = build("[A]: Root.\n  <+ <B>: Reason.\n    <+ <C>: Deeper.");
        assert_eq!(tree.nodes[1].depth, 1);
        assert_eq!(tree.nodes[2].depth, 2);
        assert_eq!(tree.nodes[2].parent, Some(1));
    }

    #[test]
    fn test_indent_jump_is_rejected() {
        let source = "[A]: Root.\n        <+ <B>: Too deep.";
        let err = build_map(&classify_lines(source).expect("classify failed"))
            .expect_err("should fail");
        assert_eq!(err.line, 2);
        assert!(err.reason.contains("depth"));
    }

    #[test]
    fn test_edge_at_depth_zero_is_rejected() {
        let source = "<+ <B>: No parent.";
        let err = build_map(&classify_lines(source).expect("classify failed"))
            .expect_err("should fail");
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_stray_comment_is_anchored_to_preceding_node() {
        let source = "[A]: Root.\n    // between\n    <+ <B>: Reason.";
        let tree = build(source);
        assert_eq!(tree.comments.len(), 1);
        assert_eq!(tree.comments[0].after, Some(0));
        assert_eq!(tree.comments[0].text, "// between");
    }
}
