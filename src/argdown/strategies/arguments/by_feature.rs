//! Feature-based strategy for individual arguments
//!
//! Builds the argument feature by feature:
//! 1. Title and gist
//! 2. Premise-conclusion scaffold with the final conclusion
//! 3. All premises as a flat list above a single separator
//! 4. Intermediate conclusions inserted with their separators
//! 5. Inference information
//! 6. YAML inline data
//! 7. Comments and misc material
//!
//! Stages for data the document does not carry are skipped, so the version
//! sequence stays gapless. Propositions are renumbered consecutively in
//! every step.

use crate::argdown::ast::argument::{ArgumentDoc, Role};
use crate::argdown::formats::render_argument;
use crate::argdown::strategies::arguments::{
    append_tail_steps, next_version, push_opening_steps,
};
use crate::argdown::strategies::phrasings::pick;
use crate::argdown::strategies::view::ArgumentView;
use crate::argdown::strategies::{ArgumentStrategy, CotStep};
use rand::rngs::StdRng;
use std::collections::BTreeSet;

const PREMISES_EXPLANATIONS: &[&str] = &[
    "Now I'll gather all the premises above the final conclusion.",
    "Let me list every premise the argument draws on.",
    "Next, I'll add the premises as a flat list.",
    "I'll now collect the premises in one block.",
];

const INTERMEDIATE_EXPLANATIONS: &[&str] = &[
    "Now I'll insert the intermediate conclusions with their inference steps.",
    "Let me break the argument into its sub-inferences.",
    "Next, I'll place the intermediate conclusions where they belong.",
    "I'll now add the intermediary conclusions and separators.",
];

#[derive(Debug, Default)]
pub struct ByFeatureStrategy;

impl ArgumentStrategy for ByFeatureStrategy {
    fn name(&self) -> &'static str {
        "by_feature"
    }

    fn generate(&self, doc: &ArgumentDoc, rng: &mut StdRng) -> Vec<CotStep> {
        let mut steps = Vec::new();

        push_opening_steps(doc, &mut steps, rng);

        // Stage 3: premises flat, final conclusion below one separator.
        if let Some(final_conclusion) = doc.final_conclusion() {
            let mut shown: BTreeSet<u32> =
                doc.premises().iter().map(|s| s.number).collect();
            shown.insert(final_conclusion.number);
            let expanded: BTreeSet<u32> = [final_conclusion.number].into_iter().collect();
            steps.push(CotStep::new(
                next_version(&steps),
                render_argument(doc, &ArgumentView::selection(doc, &shown, &expanded)),
                pick(rng, PREMISES_EXPLANATIONS),
            ));
        }

        // Stage 4: the full structure with intermediate conclusions.
        if doc.statements().any(|s| s.role == Role::Intermediate) {
            steps.push(CotStep::new(
                next_version(&steps),
                render_argument(doc, &ArgumentView::full(doc, false, false, false)),
                pick(rng, INTERMEDIATE_EXPLANATIONS),
            ));
        }

        append_tail_steps(doc, &mut steps, rng);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argdown::testing::samples;
    use rand::SeedableRng;

    #[test]
    fn test_moral_argument_runs_all_seven_stages() {
        let doc = samples::parse_argument(samples::MORAL_ARGUMENT);
        let mut rng = StdRng::seed_from_u64(0);
        let steps = ByFeatureStrategy.generate(&doc, &mut rng);

        assert_eq!(steps.len(), 7);

        // v1: title and gist only.
        assert_eq!(
            steps[0].content,
            "<Moral Argument>: We should protect the environment."
        );

        // v2: scaffold with placeholder premise region and final conclusion.
        assert!(steps[1]
            .content
            .contains("(1) // ... premises to be added here"));
        assert!(steps[1].content.contains("(2) We should protect the environment."));

        // v3: premises flat above a single separator.
        let v3 = &steps[2].content;
        assert!(v3.contains("(1) Climate change causes suffering."));
        assert!(v3.contains("(3) Environmental protection reduces climate change."));
        assert_eq!(v3.matches("-----").count(), 1);
        assert!(!v3.contains("We should act against climate change."));

        // v4: intermediate conclusion inserted, two separators.
        let v4 = &steps[3].content;
        assert!(v4.contains("(3) We should act against climate change."));
        assert_eq!(v4.matches("-----").count(), 2);

        // v5: inference information, still no YAML.
        let v5 = &steps[4].content;
        assert!(v5.contains("-- modus ponens --"));
        assert!(!v5.contains("{certainty: 0.9}"));

        // v6: YAML, no comments yet.
        let v6 = &steps[5].content;
        assert!(v6.contains("{certainty: 0.9}"));
        assert!(!v6.contains("// Kantian principle"));

        // v7: byte-exact reconstruction.
        assert_eq!(steps[6].content, samples::MORAL_ARGUMENT);
    }

    #[test]
    fn test_stages_without_data_are_skipped() {
        let doc = samples::parse_argument("(1) Only premise.\n-----\n(2) Conclusion.");
        let mut rng = StdRng::seed_from_u64(1);
        let steps = ByFeatureStrategy.generate(&doc, &mut rng);

        // No preamble, no intermediates, no info, no YAML, no comments:
        // scaffold + premises only.
        assert_eq!(steps.len(), 2);
        assert_eq!(steps.last().map(|s| s.content.as_str()), Some("(1) Only premise.\n-----\n(2) Conclusion."));
    }
}
