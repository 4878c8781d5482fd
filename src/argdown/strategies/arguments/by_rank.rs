//! Rank-based strategy for individual arguments
//!
//! Builds the argument from its final inference outwards:
//! 1. Title and gist
//! 2. Premise-conclusion scaffold with the final conclusion
//! 3. The direct premises of the final conclusion
//! 4. Iteratively expand sub-arguments: a shown premise that is really the
//!    intermediate conclusion of a sub-inference gets unpacked into that
//!    sub-inference's premises, one expansion per step
//! 5. Inference information
//! 6. YAML inline data
//! 7. Comments and misc material
//!
//! Propositions shown as premises in earlier steps become conclusions once
//! their sub-argument is expanded; numbers are recomputed per step.

use crate::argdown::ast::argument::{ArgumentDoc, Role};
use crate::argdown::formats::render_argument;
use crate::argdown::strategies::arguments::{
    append_tail_steps, next_version, push_opening_steps,
};
use crate::argdown::strategies::phrasings::pick;
use crate::argdown::strategies::view::{conclusion_numbers, statement_numbers, ArgumentView};
use crate::argdown::strategies::{ArgumentStrategy, CotStep};
use rand::rngs::StdRng;
use std::collections::BTreeSet;

const MAIN_INFERENCE_EXPLANATIONS: &[&str] = &[
    "Now I'll add the premises the final conclusion directly rests on.",
    "Let me spell out the main inference step first.",
    "Next, I'll add the propositions used to infer the final conclusion.",
    "I'll start the body with the final inference's premises.",
];

const EXPANSION_EXPLANATIONS: &[&str] = &[
    "One of these premises is itself the conclusion of a sub-argument, let me unpack it.",
    "A premise shown above actually follows from further premises; I'll expand that sub-argument.",
    "Let me expand a premise into the sub-inference it rests on.",
    "Next, I'll unfold the sub-argument behind one of the premises.",
];

const REMAINING_EXPLANATIONS: &[&str] = &[
    "Let me add the remaining propositions to complete the argument.",
    "I'll fill in the statements that are still missing.",
    "Finally, let me complete the argument's body.",
];

#[derive(Debug, Default)]
pub struct ByRankStrategy;

impl ArgumentStrategy for ByRankStrategy {
    fn name(&self) -> &'static str {
        "by_rank"
    }

    fn generate(&self, doc: &ArgumentDoc, rng: &mut StdRng) -> Vec<CotStep> {
        let mut steps = Vec::new();

        push_opening_steps(doc, &mut steps, rng);

        let inputs = doc.inference_inputs();
        let all_statements = statement_numbers(doc);
        let all_conclusions = conclusion_numbers(doc);

        let mut shown: BTreeSet<u32> = BTreeSet::new();
        let mut expanded: BTreeSet<u32> = BTreeSet::new();

        // Stage 3: the final conclusion and its direct premises.
        if let Some(final_conclusion) = doc.final_conclusion() {
            shown.insert(final_conclusion.number);
            expanded.insert(final_conclusion.number);
            match inputs.get(&final_conclusion.number) {
                Some(direct) => shown.extend(direct.iter().copied()),
                // Without any inference structure, every premise is direct.
                None => shown.extend(doc.premises().iter().map(|s| s.number)),
            }
            steps.push(CotStep::new(
                next_version(&steps),
                render_argument(doc, &ArgumentView::selection(doc, &shown, &expanded)),
                pick(rng, MAIN_INFERENCE_EXPLANATIONS),
            ));
        }

        // Stage 4: expand sub-arguments one at a time, in source order.
        loop {
            let next_expansion = doc.statements().find(|s| {
                s.role == Role::Intermediate
                    && shown.contains(&s.number)
                    && !expanded.contains(&s.number)
                    && inputs.contains_key(&s.number)
            });
            let Some(conclusion) = next_expansion else {
                break;
            };
            expanded.insert(conclusion.number);
            if let Some(premises) = inputs.get(&conclusion.number) {
                shown.extend(premises.iter().copied());
            }
            steps.push(CotStep::new(
                next_version(&steps),
                render_argument(doc, &ArgumentView::selection(doc, &shown, &expanded)),
                pick(rng, EXPANSION_EXPLANATIONS),
            ));
        }

        // Anything the inference structure never reached is added in one
        // closing sweep, so the body is complete before the tail stages.
        if shown != all_statements || expanded != all_conclusions {
            steps.push(CotStep::new(
                next_version(&steps),
                render_argument(doc, &ArgumentView::full(doc, false, false, false)),
                pick(rng, REMAINING_EXPLANATIONS),
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
    fn test_democracy_argument_expands_outwards() {
        let doc = samples::parse_argument(samples::DEMOCRACY_ARGUMENT);
        let mut rng = StdRng::seed_from_u64(0);
        let steps = ByRankStrategy.generate(&doc, &mut rng);

        assert_eq!(steps.len(), 7);

        // v1 title, v2 scaffold.
        assert_eq!(
            steps[0].content,
            "<Democracy Argument>: Democracy is the best system."
        );
        assert!(steps[1].content.contains("(1) // ... premises to be added here"));

        // v3: the main inference only, renumbered 1..3.
        let v3 = &steps[2].content;
        assert!(v3.contains("(1) Democracy respects individual rights."));
        assert!(v3.contains("(2) Democracy respects fundamental values."));
        assert!(v3.contains("(3) Democracy is the best system."));
        assert_eq!(v3.matches("-----").count(), 1);
        assert!(!v3.contains("Individual rights are fundamental."));

        // v4: the sub-argument for the intermediate conclusion unfolds.
        let v4 = &steps[3].content;
        assert!(v4.contains("(2) Individual rights are fundamental."));
        assert!(v4.contains("(4) Democracy respects fundamental values."));
        assert_eq!(v4.matches("-----").count(), 2);

        // v5 inference info, v6 YAML, v7 full reconstruction.
        assert!(steps[4].content.contains("-- from (2) and (3) --"));
        assert!(steps[5].content.contains("{strength: 0.8}"));
        assert_eq!(steps[6].content, samples::DEMOCRACY_ARGUMENT);
    }

    #[test]
    fn test_chain_argument_matches_the_five_version_sequence() {
        let doc = samples::parse_argument(samples::CHAIN_ARGUMENT);
        let mut rng = StdRng::seed_from_u64(0);
        let steps = ByRankStrategy.generate(&doc, &mut rng);

        // Title, scaffold, main inference, one expansion, inference info.
        assert_eq!(steps.len(), 5);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.version, format!("v{}", index + 1));
        }
        assert_eq!(
            steps.last().map(|s| s.content.as_str()),
            Some(samples::CHAIN_ARGUMENT)
        );
    }
}
