//! Read-only views over parsed trees
//!
//! A strategy never mutates the tree it is given; it emits a sequence of
//! views, and the serializer renders each view into one step's snippet. A map
//! view selects node ids and per-view attachment flags; an argument view is
//! an ordered element list, because argument stages renumber statements and
//! interleave synthetic scaffolding.

use crate::argdown::ast::argument::{ArgItem, ArgumentDoc, Role};
use crate::argdown::ast::map::{MapTree, NodeId};
use crate::argdown::lexing::EdgeKind;
use crate::argdown::strategies::phrasings::PlaceholderStage;
use std::collections::{BTreeMap, BTreeSet};

/// A deliberate mis-rendering of one node's edge, used by the diffusion
/// strategies. The optional note is appended to the node's line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeOverride {
    pub edge: EdgeKind,
    pub note: Option<String>,
}

/// Selection over a [`MapTree`] for one step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapView {
    pub visible: BTreeSet<NodeId>,
    pub include_yaml: bool,
    pub include_comments: bool,
    /// Placeholder comments due under specific visible nodes.
    pub placeholders: Vec<(NodeId, PlaceholderStage)>,
    /// Edges rendered other than they are, keyed by child node.
    pub edge_overrides: BTreeMap<NodeId, EdgeOverride>,
    /// Hidden nodes rendered as `?? <label>` stubs at their source position.
    pub pending_markers: BTreeSet<NodeId>,
}

impl MapView {
    /// A bare view of the given nodes, nothing else.
    pub fn of(visible: BTreeSet<NodeId>) -> Self {
        Self {
            visible,
            ..Self::default()
        }
    }

    /// Every node, without attachments.
    pub fn all_nodes(map: &MapTree) -> Self {
        Self::of((0..map.nodes.len()).collect())
    }

    /// The final view: every node, every attachment.
    pub fn full(map: &MapTree) -> Self {
        Self {
            visible: (0..map.nodes.len()).collect(),
            include_yaml: true,
            include_comments: true,
            ..Self::default()
        }
    }
}

/// One rendered element of an argument view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgElement {
    /// The document's preamble line.
    Preamble,
    Blank,
    /// A statement, renumbered for this view. `number` is the source number.
    Statement { display_number: u32, number: u32 },
    /// A synthetic `(n) // ...` placeholder statement.
    Placeholder {
        display_number: u32,
        stage: PlaceholderStage,
    },
    /// A bare `-----` separator.
    Separator,
    /// The separator of `items[item_index]`, rendered with its rule text.
    Inference { item_index: usize },
    /// The standalone comment `comments[comment_index]`.
    Comment { comment_index: usize },
}

/// Selection over an [`ArgumentDoc`] for one step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentView {
    pub elements: Vec<ArgElement>,
    pub include_yaml: bool,
    pub include_comments: bool,
}

impl ArgumentView {
    /// The canonical scaffold: preamble, a placeholder premise region, one
    /// separator, and the final conclusion.
    pub fn scaffold(doc: &ArgumentDoc) -> Self {
        let mut elements = Vec::new();
        if doc.preamble.is_some() {
            elements.push(ArgElement::Preamble);
            elements.push(ArgElement::Blank);
        }
        elements.push(ArgElement::Placeholder {
            display_number: 1,
            stage: PlaceholderStage::ArgumentPremises,
        });
        elements.push(ArgElement::Separator);
        match doc.final_conclusion() {
            Some(conclusion) => elements.push(ArgElement::Statement {
                display_number: 2,
                number: conclusion.number,
            }),
            None => elements.push(ArgElement::Placeholder {
                display_number: 2,
                stage: PlaceholderStage::ArgumentConclusion,
            }),
        }
        Self {
            elements,
            ..Self::default()
        }
    }

    /// A partial reconstruction: statements in `shown` appear in source
    /// order with fresh consecutive numbers; a separator precedes every
    /// shown conclusion whose inference is in `expanded` (keyed by the
    /// conclusion's source number). Conclusions outside `expanded` render in
    /// premise position.
    pub fn selection(doc: &ArgumentDoc, shown: &BTreeSet<u32>, expanded: &BTreeSet<u32>) -> Self {
        let mut elements = Vec::new();
        if doc.preamble.is_some() {
            elements.push(ArgElement::Preamble);
            elements.push(ArgElement::Blank);
        }
        let mut display_number = 0u32;
        for (index, item) in doc.items.iter().enumerate() {
            match item {
                ArgItem::Statement(statement) => {
                    if shown.contains(&statement.number) {
                        display_number += 1;
                        elements.push(ArgElement::Statement {
                            display_number,
                            number: statement.number,
                        });
                    }
                }
                ArgItem::Inference(_) => {
                    if let Some(conclusion) = next_statement_number(doc, index) {
                        if shown.contains(&conclusion) && expanded.contains(&conclusion) {
                            elements.push(ArgElement::Separator);
                        }
                    }
                }
            }
        }
        Self {
            elements,
            ..Self::default()
        }
    }

    /// The complete document. `include_info` renders separators with their
    /// rule text; the flags control YAML, inline comments and standalone
    /// comment decorations.
    pub fn full(
        doc: &ArgumentDoc,
        include_info: bool,
        include_yaml: bool,
        include_comments: bool,
    ) -> Self {
        let mut elements = Vec::new();
        if include_comments {
            push_comments(doc, &mut elements, None);
        }
        if doc.preamble.is_some() {
            elements.push(ArgElement::Preamble);
            elements.push(ArgElement::Blank);
        }
        let mut display_number = 0u32;
        for (index, item) in doc.items.iter().enumerate() {
            match item {
                ArgItem::Statement(statement) => {
                    display_number += 1;
                    elements.push(ArgElement::Statement {
                        display_number,
                        number: statement.number,
                    });
                }
                ArgItem::Inference(_) => {
                    if include_info {
                        elements.push(ArgElement::Inference { item_index: index });
                    } else {
                        elements.push(ArgElement::Separator);
                    }
                }
            }
            if include_comments {
                push_comments(doc, &mut elements, Some(index));
            }
        }
        Self {
            elements,
            include_yaml,
            include_comments,
        }
    }
}

fn push_comments(doc: &ArgumentDoc, elements: &mut Vec<ArgElement>, after: Option<usize>) {
    for (comment_index, comment) in doc.comments.iter().enumerate() {
        if comment.after == after {
            elements.push(ArgElement::Comment { comment_index });
        }
    }
}

/// Source number of the first statement after `items[index]`, if any.
fn next_statement_number(doc: &ArgumentDoc, index: usize) -> Option<u32> {
    doc.items[index + 1..].iter().find_map(|item| match item {
        ArgItem::Statement(s) => Some(s.number),
        ArgItem::Inference(_) => None,
    })
}

/// All conclusions (intermediate and final) of the document, by source
/// number. Convenience for building full-structure selections.
pub fn conclusion_numbers(doc: &ArgumentDoc) -> BTreeSet<u32> {
    doc.statements()
        .filter(|s| s.role != Role::Premise)
        .map(|s| s.number)
        .collect()
}

/// All statement numbers of the document.
pub fn statement_numbers(doc: &ArgumentDoc) -> BTreeSet<u32> {
    doc.statements().map(|s| s.number).collect()
}
