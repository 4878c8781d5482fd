//! Depth diffusion strategy for argument maps
//!
//! Starts from a flat, shuffled list of every proposition without any
//! structure, then organizes the map one depth level at a time: each view
//! shows the tree down to the current depth with correct edges, while
//! children still pending at the next level appear as `??` stubs under
//! their true parents. The last depth view is the complete structure.

use crate::argdown::ast::map::MapTree;
use crate::argdown::formats::render_map;
use crate::argdown::strategies::maps::{append_metadata_steps, next_version, visible_up_to_depth};
use crate::argdown::strategies::phrasings::{pick, COMPLETION_EXPLANATIONS};
use crate::argdown::strategies::view::MapView;
use crate::argdown::strategies::{CotStep, MapStrategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

const INITIAL_EXPLANATIONS: &[&str] = &[
    "Let me start by laying out all the arguments and claims in a flat list.",
    "I'll begin with an unstructured list of all the components.",
    "First, let me list all the arguments and propositions without structure.",
    "I'll start by gathering all the elements in a simple list.",
];

const DEPTH_EXPLANATIONS: &[&str] = &[
    "Now I'll organize the arguments by adding the next level of structure.",
    "Let me add the next layer of hierarchical organization.",
    "I'll now organize arguments at the next depth level.",
    "Next, I'll organize arguments into the next level of the hierarchy.",
];

#[derive(Debug, Default)]
pub struct DepthDiffusionStrategy;

impl MapStrategy for DepthDiffusionStrategy {
    fn name(&self) -> &'static str {
        "depth_diffusion"
    }

    fn generate(&self, map: &MapTree, rng: &mut StdRng) -> Vec<CotStep> {
        let mut steps = Vec::new();
        let max_depth = map.max_depth();

        // Single-node maps skip the flat stage; one line cannot be
        // unscrambled.
        if map.nodes.len() > 1 {
            let mut bodies: Vec<String> = map.nodes.iter().map(|n| n.spec.render()).collect();
            bodies.shuffle(rng);
            steps.push(CotStep::new(
                next_version(&steps),
                bodies.join("\n"),
                pick(rng, INITIAL_EXPLANATIONS),
            ));
        }

        for depth in 0..=max_depth {
            let mut view = MapView::of(visible_up_to_depth(map, depth));
            view.pending_markers = map
                .nodes
                .iter()
                .filter(|n| n.depth == depth + 1)
                .map(|n| n.id)
                .collect();
            steps.push(CotStep::new(
                next_version(&steps),
                render_map(map, &view),
                pick(rng, DEPTH_EXPLANATIONS),
            ));
        }

        append_metadata_steps(map, &mut steps, rng);

        if steps.len() == 1 {
            steps[0].explanation = pick(rng, COMPLETION_EXPLANATIONS).to_string();
        }
        steps
    }
}
