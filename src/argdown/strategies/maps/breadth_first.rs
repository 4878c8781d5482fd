//! Breadth-first strategy for argument maps
//!
//! Starts from all roots, then reveals one node per step in breadth-first
//! order, ties within a level broken by original source order. All nodes at
//! depth n are added before any node at depth n+1; this differs from
//! depth-first, which completes entire branches first.

use crate::argdown::ast::map::{MapTree, NodeId};
use crate::argdown::strategies::maps::{
    append_metadata_steps, monotone_step_content, next_version, node_explanation,
};
use crate::argdown::strategies::phrasings::{pick, COMPLETION_EXPLANATIONS};
use crate::argdown::strategies::{CotStep, MapStrategy};
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::collections::VecDeque;

const ROOT_EXPLANATIONS: &[&str] = &[
    "Let me start with the central claims.",
    "I'll begin with the main claims of the map.",
    "First, I'll put down the root claims.",
    "I'll lay out the top-level claims first.",
];

#[derive(Debug, Default)]
pub struct BreadthFirstStrategy;

impl MapStrategy for BreadthFirstStrategy {
    fn name(&self) -> &'static str {
        "breadth_first"
    }

    fn generate(&self, map: &MapTree, rng: &mut StdRng) -> Vec<CotStep> {
        let mut steps = Vec::new();
        let mut visible: BTreeSet<NodeId> = map.roots.iter().copied().collect();

        steps.push(CotStep::new(
            next_version(&steps),
            monotone_step_content(map, visible.clone(), true),
            pick(rng, ROOT_EXPLANATIONS),
        ));

        let mut queue: VecDeque<NodeId> = map.roots.iter().copied().collect();
        while let Some(id) = queue.pop_front() {
            for child in &map.node(id).children {
                visible.insert(*child);
                queue.push_back(*child);
                steps.push(CotStep::new(
                    next_version(&steps),
                    monotone_step_content(map, visible.clone(), false),
                    node_explanation(map, *child, rng),
                ));
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
    fn test_level_order_across_two_roots() {
        let map = samples::parse_map(samples::MULTIROOT_MAP);
        let mut rng = StdRng::seed_from_u64(0);
        let steps = BreadthFirstStrategy.generate(&map, &mut rng);

        // 1 roots step + 8 non-root nodes, no YAML or comments in the sample.
        assert_eq!(steps.len(), 9);

        // Both depth-1 children of Main-2 appear before any depth-2 node.
        let support_c_step = steps
            .iter()
            .position(|s| s.content.contains("<Support C>"))
            .expect("Support C never appears");
        let sub_a1_step = steps
            .iter()
            .position(|s| s.content.contains("<Sub A1>"))
            .expect("Sub A1 never appears");
        assert!(support_c_step < sub_a1_step);

        assert_eq!(steps.last().map(|s| s.content.as_str()), Some(samples::MULTIROOT_MAP));
    }

    #[test]
    fn test_growth_is_monotone() {
        let map = samples::parse_map(samples::MULTIROOT_MAP);
        let mut rng = StdRng::seed_from_u64(5);
        let steps = BreadthFirstStrategy.generate(&map, &mut rng);

        for pair in steps.windows(2) {
            for line in pair[0].content.lines().filter(|l| !l.trim_start().starts_with("//")) {
                assert!(
                    pair[1].content.lines().any(|other| other == line),
                    "line {:?} vanished between steps",
                    line
                );
            }
        }
    }
}
