//! Argument map tree
//!
//! The map tree keeps its nodes in a flat table ordered by first appearance
//! in the source. Node identity is the table index, assigned in parse order,
//! so identical inputs always produce identical ids. Parent links are indices
//! back into the table; children are listed in source order.

use crate::argdown::lexing::{EdgeKind, NodeSpec};

/// Stable node identity: index into [`MapTree::nodes`], assigned in parse
/// order.
pub type NodeId = usize;

/// One claim or argument in the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    pub id: NodeId,
    /// How the proposition is written: claim, argument or bare text.
    pub spec: NodeSpec,
    /// Dialectical relation towards the parent; `None` for roots.
    pub edge: Option<EdgeKind>,
    /// Distance from the root; roots have depth 0.
    pub depth: usize,
    pub parent: Option<NodeId>,
    /// Children in source order.
    pub children: Vec<NodeId>,
    /// Raw inline YAML, key order preserved literally.
    pub yaml: Option<String>,
    /// Inline comment text (after `//`).
    pub comment: Option<String>,
    /// 1-based source line.
    pub line_number: usize,
}

impl MapNode {
    /// Short human-readable handle for explanations and placeholders: the
    /// label when there is one, otherwise the first few words of the text.
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.spec.label {
            return label.clone();
        }
        let words: Vec<&str> = self.spec.text.split_whitespace().take(3).collect();
        words.join(" ")
    }
}

/// A standalone comment line and where it sits between the nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrayComment {
    /// The node whose line directly precedes this comment; `None` puts the
    /// comment before the first node.
    pub after: Option<NodeId>,
    pub indent: usize,
    /// The raw comment, delimiters included (`// ...` or `/* ... */`).
    pub text: String,
}

/// An argument map: the node table plus document-level comment decorations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapTree {
    pub nodes: Vec<MapNode>,
    /// Root node ids in source order.
    pub roots: Vec<NodeId>,
    pub comments: Vec<StrayComment>,
}

impl MapTree {
    pub fn node(&self, id: NodeId) -> &MapNode {
        &self.nodes[id]
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// All node ids at the given depth, in source order.
    pub fn nodes_at_depth(&self, depth: usize) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.depth == depth)
            .map(|n| n.id)
            .collect()
    }

    /// Whether any node carries inline YAML.
    pub fn has_yaml(&self) -> bool {
        self.nodes.iter().any(|n| n.yaml.is_some())
    }

    /// Whether any node carries an inline comment, or the document carries
    /// standalone comments.
    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty() || self.nodes.iter().any(|n| n.comment.is_some())
    }

    /// Ids of all descendants of `id`, in source order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[id].children.clone();
        while let Some(child) = stack.pop() {
            out.push(child);
            stack.extend(self.nodes[child].children.iter().copied());
        }
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argdown::lexing::{NodeKind, NodeSpec};

    fn bare_node(id: NodeId, depth: usize, parent: Option<NodeId>) -> MapNode {
        MapNode {
            id,
            spec: NodeSpec {
                kind: NodeKind::Bare,
                label: None,
                text: format!("node {}", id),
            },
            edge: None,
            depth,
            parent,
            children: Vec::new(),
            yaml: None,
            comment: None,
            line_number: id + 1,
        }
    }

    #[test]
    fn test_descendants_are_in_source_order() {
        let mut tree = MapTree::default();
        tree.nodes = vec![
            bare_node(0, 0, None),
            bare_node(1, 1, Some(0)),
            bare_node(2, 2, Some(1)),
            bare_node(3, 1, Some(0)),
        ];
        tree.nodes[0].children = vec![1, 3];
        tree.nodes[1].children = vec![2];
        tree.roots = vec![0];

        assert_eq!(tree.descendants(0), vec![1, 2, 3]);
        assert_eq!(tree.descendants(1), vec![2]);
        assert_eq!(tree.max_depth(), 2);
    }

    #[test]
    fn test_display_label_falls_back_to_leading_words() {
        let node = bare_node(0, 0, None);
        assert_eq!(node.display_label(), "node 0");
    }
}
