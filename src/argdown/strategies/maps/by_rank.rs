//! Rank-based strategy for argument maps
//!
//! Builds the map level by level:
//! 1. Roots: show all root nodes
//! 2. First order reasons: add direct children
//! 3. Higher order reasons: iteratively add deeper levels
//! 4. Add YAML and comments
//!
//! Every step shows all nodes up to the current rank; any visible node whose
//! children are still hidden gets a placeholder comment underneath.

use crate::argdown::ast::map::MapTree;
use crate::argdown::strategies::maps::{
    append_metadata_steps, monotone_step_content, next_version, visible_up_to_depth,
};
use crate::argdown::strategies::phrasings::{pick, COMPLETION_EXPLANATIONS};
use crate::argdown::strategies::{CotStep, MapStrategy};
use rand::rngs::StdRng;

const ROOT_EXPLANATIONS: &[&str] = &[
    "Let me start by identifying the main claims.",
    "I'll begin by finding the primary claims.",
    "First, I need to identify the core claims.",
    "Let me first locate the main arguments.",
    "I'll start with the root-level claims.",
];

const FIRST_ORDER_EXPLANATIONS: &[&str] = &[
    "I'll add all first-order reasons and arguments.",
    "Now I'll include the direct supporting and opposing arguments.",
    "Next, I'll add the immediate reasons for each claim.",
    "Let me include all level 1 arguments.",
    "I'll now add the first-tier supporting evidence.",
];

const INTERMEDIATE_EXPLANATIONS: &[&str] = &[
    "Next, I'll add all level {depth} arguments.",
    "Now I'll include the level {depth} supporting details.",
    "Let me add the {depth}-tier arguments.",
    "I'll continue with level {depth} reasoning.",
];

const FINAL_DEPTH_EXPLANATIONS: &[&str] = &[
    "Finally, I'll add the deepest level arguments (level {depth}).",
    "Lastly, I'll include the most detailed arguments (level {depth}).",
    "To complete the structure, I'll add the final level {depth} arguments.",
    "Let me finish by adding the deepest reasoning (level {depth}).",
];

#[derive(Debug, Default)]
pub struct ByRankStrategy;

impl MapStrategy for ByRankStrategy {
    fn name(&self) -> &'static str {
        "by_rank"
    }

    fn generate(&self, map: &MapTree, rng: &mut StdRng) -> Vec<CotStep> {
        let mut steps = Vec::new();
        let max_depth = map.max_depth();

        for depth in 0..=max_depth {
            let content = monotone_step_content(map, visible_up_to_depth(map, depth), depth == 0);
            let explanation = explanation_for_depth(depth, max_depth, rng);
            steps.push(CotStep::new(next_version(&steps), content, explanation));
        }

        append_metadata_steps(map, &mut steps, rng);

        // A single-step trace is already the whole snippet; say so.
        if steps.len() == 1 {
            steps[0].explanation = pick(rng, COMPLETION_EXPLANATIONS).to_string();
        }
        steps
    }
}

fn explanation_for_depth(depth: usize, max_depth: usize, rng: &mut StdRng) -> String {
    if depth == 0 {
        pick(rng, ROOT_EXPLANATIONS).to_string()
    } else if depth == 1 {
        pick(rng, FIRST_ORDER_EXPLANATIONS).to_string()
    } else if depth == max_depth {
        pick(rng, FINAL_DEPTH_EXPLANATIONS).replace("{depth}", &depth.to_string())
    } else {
        pick(rng, INTERMEDIATE_EXPLANATIONS).replace("{depth}", &depth.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argdown::testing::samples;
    use rand::SeedableRng;

    #[test]
    fn test_readme_map_yields_three_steps_with_placeholders() {
        let map = samples::parse_map(samples::README_MAP);
        let mut rng = StdRng::seed_from_u64(0);
        let steps = ByRankStrategy.generate(&map, &mut rng);

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].version, "v1");
        assert!(steps[0]
            .content
            .ends_with("    // Arguments need to be added here."));
        assert!(steps[1]
            .content
            .contains("// More arguments might need to be added here."));
        assert_eq!(steps[2].content, samples::README_MAP);
    }

    #[test]
    fn test_single_claim_is_one_completed_step() {
        let map = samples::parse_map(samples::SINGLE_CLAIM);
        let mut rng = StdRng::seed_from_u64(3);
        let steps = ByRankStrategy.generate(&map, &mut rng);

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].content, samples::SINGLE_CLAIM);
        assert!(COMPLETION_EXPLANATIONS.contains(&steps[0].explanation.as_str()));
    }

    #[test]
    fn test_yaml_and_comment_stages_come_last() {
        let map = samples::parse_map(samples::CLIMATE_MAP);
        let mut rng = StdRng::seed_from_u64(1);
        let steps = ByRankStrategy.generate(&map, &mut rng);

        // Depths 0..=3 plus YAML plus comments.
        assert_eq!(steps.len(), 6);
        let yaml_step = &steps[4];
        assert!(yaml_step.content.contains("{confidence: 0.95}"));
        assert!(!yaml_step.content.contains("// Common objection"));
        assert_eq!(steps[5].content, samples::CLIMATE_MAP);
    }
}
