//! Depth-first strategy for argument maps
//!
//! Starts from all roots, then reveals one node per step in preorder,
//! following each branch to its full depth before moving to the next
//! sibling. Ties are broken by original source order.

use crate::argdown::ast::map::{MapTree, NodeId};
use crate::argdown::strategies::maps::{
    append_metadata_steps, monotone_step_content, next_version, node_explanation,
};
use crate::argdown::strategies::phrasings::{pick, COMPLETION_EXPLANATIONS};
use crate::argdown::strategies::{CotStep, MapStrategy};
use rand::rngs::StdRng;
use std::collections::BTreeSet;

const ROOT_EXPLANATIONS: &[&str] = &[
    "Let me start with the central claims.",
    "I'll begin with the main claims of the map.",
    "First, I'll put down the root claims.",
    "I'll lay out the top-level claims first.",
];

#[derive(Debug, Default)]
pub struct DepthFirstStrategy;

impl MapStrategy for DepthFirstStrategy {
    fn name(&self) -> &'static str {
        "depth_first"
    }

    fn generate(&self, map: &MapTree, rng: &mut StdRng) -> Vec<CotStep> {
        let mut steps = Vec::new();
        let mut visible: BTreeSet<NodeId> = map.roots.iter().copied().collect();

        steps.push(CotStep::new(
            next_version(&steps),
            monotone_step_content(map, visible.clone(), true),
            pick(rng, ROOT_EXPLANATIONS),
        ));

        for root in &map.roots {
            let mut stack: Vec<NodeId> = map.node(*root).children.iter().rev().copied().collect();
            while let Some(id) = stack.pop() {
                visible.insert(id);
                steps.push(CotStep::new(
                    next_version(&steps),
                    monotone_step_content(map, visible.clone(), false),
                    node_explanation(map, id, rng),
                ));
                for child in map.node(id).children.iter().rev() {
                    stack.push(*child);
                }
            }
        }

        append_metadata_steps(map, &mut steps, rng);

        if steps.len() == 1 {
            steps[0].explanation = pick(rng, COMPLETION_EXPLANATIONS).to_string();
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argdown::testing::samples;
    use rand::SeedableRng;

    #[test]
    fn test_branches_complete_before_siblings() {
        let map = samples::parse_map(samples::MULTIROOT_MAP);
        let mut rng = StdRng::seed_from_u64(0);
        let steps = DepthFirstStrategy.generate(&map, &mut rng);

        assert_eq!(steps.len(), 9);

        // Sub A1 (grandchild of Main-1) must appear before Attack B
        // (second child of Main-1), and everything under Main-1 before
        // Support C (child of Main-2).
        let position = |needle: &str| {
            steps
                .iter()
                .position(|s| s.content.contains(needle))
                .unwrap_or(usize::MAX)
        };
        assert!(position("<Sub A1>") < position("<Attack B>"));
        assert!(position("<Sub B1>") < position("<Support C>"));

        assert_eq!(steps.last().map(|s| s.content.as_str()), Some(samples::MULTIROOT_MAP));
    }

    #[test]
    fn test_versions_are_gapless() {
        let map = samples::parse_map(samples::MULTIROOT_MAP);
        let mut rng = StdRng::seed_from_u64(2);
        let steps = DepthFirstStrategy.generate(&map, &mut rng);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.version, format!("v{}", index + 1));
        }
    }
}
