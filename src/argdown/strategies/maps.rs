//! Argument map strategies
//!
//! Six ways of revealing a map step by step. `by_rank`, `breadth_first` and
//! `depth_first` grow the visible node set monotonically and mark hidden
//! children with placeholder comments; `by_objection` reveals by
//! argumentative role; the two diffusion strategies start from a deliberately
//! wrong rendition (flipped edges, or a flat unordered list) and converge on
//! the true map. All of them share the trailing YAML and comments stages.

pub mod breadth_first;
pub mod by_objection;
pub mod by_rank;
pub mod depth_diffusion;
pub mod depth_first;
pub mod random_diffusion;

pub use breadth_first::BreadthFirstStrategy;
pub use by_objection::ByObjectionStrategy;
pub use by_rank::ByRankStrategy;
pub use depth_diffusion::DepthDiffusionStrategy;
pub use depth_first::DepthFirstStrategy;
pub use random_diffusion::RandomDiffusionStrategy;

use crate::argdown::ast::map::{MapTree, NodeId};
use crate::argdown::formats::render_map;
use crate::argdown::strategies::phrasings::{
    pick, PlaceholderStage, COMMENTS_EXPLANATIONS, YAML_EXPLANATIONS,
};
use crate::argdown::strategies::view::MapView;
use crate::argdown::strategies::CotStep;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

pub(crate) use crate::argdown::strategies::next_version;

/// All node ids with depth at most `depth`.
pub(crate) fn visible_up_to_depth(map: &MapTree, depth: usize) -> BTreeSet<NodeId> {
    map.nodes
        .iter()
        .filter(|n| n.depth <= depth)
        .map(|n| n.id)
        .collect()
}

/// Placeholder comments due in a monotone view: one under every visible node
/// that still hides at least one child.
pub(crate) fn placeholders_for(
    map: &MapTree,
    visible: &BTreeSet<NodeId>,
    roots_stage: bool,
) -> Vec<(NodeId, PlaceholderStage)> {
    let stage = if roots_stage {
        PlaceholderStage::MapRoots
    } else {
        PlaceholderStage::MapDeeper
    };
    map.nodes
        .iter()
        .filter(|n| visible.contains(&n.id))
        .filter(|n| n.children.iter().any(|c| !visible.contains(c)))
        .map(|n| (n.id, stage))
        .collect()
}

/// Render one monotone view with its due placeholders.
pub(crate) fn monotone_step_content(
    map: &MapTree,
    visible: BTreeSet<NodeId>,
    roots_stage: bool,
) -> String {
    let placeholders = placeholders_for(map, &visible, roots_stage);
    let mut view = MapView::of(visible);
    view.placeholders = placeholders;
    render_map(map, &view)
}

/// Append the trailing metadata stages: one step revealing the inline YAML
/// (when any exists), one revealing comments and misc material.
pub(crate) fn append_metadata_steps(map: &MapTree, steps: &mut Vec<CotStep>, rng: &mut StdRng) {
    if map.has_yaml() {
        let mut view = MapView::all_nodes(map);
        view.include_yaml = true;
        steps.push(CotStep::new(
            next_version(steps),
            render_map(map, &view),
            pick(rng, YAML_EXPLANATIONS),
        ));
    }
    if map.has_comments() {
        steps.push(CotStep::new(
            next_version(steps),
            render_map(map, &MapView::full(map)),
            pick(rng, COMMENTS_EXPLANATIONS),
        ));
    }
}

/// Explanation pools for strategies that reveal one node per step.
pub(crate) const SUPPORT_NODE_EXPLANATIONS: &[&str] = &[
    "Next, I'll add {label}, which backs up {parent}.",
    "Let me add {label} as a supporting reason for {parent}.",
    "I'll now include {label}, a reason in favour of {parent}.",
    "Now I'll attach {label} in support of {parent}.",
];

pub(crate) const ATTACK_NODE_EXPLANATIONS: &[&str] = &[
    "Next, I'll add {label}, which challenges {parent}.",
    "Let me add {label} as an objection against {parent}.",
    "I'll now include {label}, which speaks against {parent}.",
    "Now I'll attach {label} as a counterargument to {parent}.",
];

pub(crate) const GENERIC_NODE_EXPLANATIONS: &[&str] = &[
    "Next, I'll add {label}, which bears on {parent}.",
    "Let me add {label} and relate it to {parent}.",
    "I'll now include {label} under {parent}.",
];

/// Phrase the addition of a single node, varying by its edge kind.
pub(crate) fn node_explanation(map: &MapTree, id: NodeId, rng: &mut StdRng) -> String {
    let node = map.node(id);
    let parent_label = node
        .parent
        .map(|p| map.node(p).display_label())
        .unwrap_or_default();
    let pool = match node.edge {
        Some(edge) if edge.is_support_like() => SUPPORT_NODE_EXPLANATIONS,
        Some(edge) if edge.is_objection_like() => ATTACK_NODE_EXPLANATIONS,
        _ => GENERIC_NODE_EXPLANATIONS,
    };
    pick(rng, pool)
        .replace("{label}", &format!("'{}'", node.display_label()))
        .replace("{parent}", &format!("'{}'", parent_label))
}
