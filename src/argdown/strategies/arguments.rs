//! Individual argument strategies
//!
//! Two ways of rebuilding a premise-conclusion argument. Both share the
//! canonical opening (title and gist, then the premise-conclusion scaffold)
//! and the trailing stages that populate inference information, inline YAML
//! and comments; they differ in how the statements in between are revealed.
//! Statement numbers are recomputed per step so every snippet counts
//! consecutively from (1).

pub mod by_feature;
pub mod by_rank;

pub use by_feature::ByFeatureStrategy;
pub use by_rank::ByRankStrategy;

use crate::argdown::ast::argument::ArgumentDoc;
use crate::argdown::formats::render_argument;
use crate::argdown::strategies::phrasings::{pick, COMMENTS_EXPLANATIONS, YAML_EXPLANATIONS};
use crate::argdown::strategies::view::ArgumentView;
use crate::argdown::strategies::CotStep;
use rand::rngs::StdRng;

pub(crate) use crate::argdown::strategies::next_version;

pub(crate) const TITLE_EXPLANATIONS: &[&str] = &[
    "I'll start by identifying the title and gist of the argument.",
    "Let me begin with the argument's title and gist.",
    "First, I'll write down the title and a one-line gist.",
    "To start, let me state what the argument is about.",
];

pub(crate) const SCAFFOLD_EXPLANATIONS: &[&str] = &[
    "Next, I'll set up the basic premise-conclusion scaffold with the final conclusion.",
    "Let me sketch the overall structure: premises above, final conclusion below.",
    "I'll lay down the scaffold, ending with the final conclusion.",
    "Now for the skeleton of the argument, with its final conclusion in place.",
];

pub(crate) const INFERENCE_EXPLANATIONS: &[&str] = &[
    "Now I'll spell out the inference information.",
    "Let me fill in the inference rules between the steps.",
    "Next, I'll add the information on how the conclusions are inferred.",
    "I'll now annotate the inference steps.",
];

/// Append the trailing stages: inference information, inline YAML, comments
/// and misc material. Each stage is emitted only when the document actually
/// carries such data, so the version sequence stays gapless.
pub(crate) fn append_tail_steps(doc: &ArgumentDoc, steps: &mut Vec<CotStep>, rng: &mut StdRng) {
    if doc.has_inference_info() {
        steps.push(CotStep::new(
            next_version(steps),
            render_argument(doc, &ArgumentView::full(doc, true, false, false)),
            pick(rng, INFERENCE_EXPLANATIONS),
        ));
    }
    if doc.has_yaml() {
        steps.push(CotStep::new(
            next_version(steps),
            render_argument(doc, &ArgumentView::full(doc, true, true, false)),
            pick(rng, YAML_EXPLANATIONS),
        ));
    }
    if doc.has_comments() {
        steps.push(CotStep::new(
            next_version(steps),
            render_argument(doc, &ArgumentView::full(doc, true, true, true)),
            pick(rng, COMMENTS_EXPLANATIONS),
        ));
    }
}

/// Push the title step (when a preamble exists) and the scaffold step.
pub(crate) fn push_opening_steps(doc: &ArgumentDoc, steps: &mut Vec<CotStep>, rng: &mut StdRng) {
    if doc.preamble.is_some() {
        let title_view = ArgumentView {
            elements: vec![crate::argdown::strategies::view::ArgElement::Preamble],
            ..ArgumentView::default()
        };
        steps.push(CotStep::new(
            next_version(steps),
            render_argument(doc, &title_view),
            pick(rng, TITLE_EXPLANATIONS),
        ));
    }
    steps.push(CotStep::new(
        next_version(steps),
        render_argument(doc, &ArgumentView::scaffold(doc)),
        pick(rng, SCAFFOLD_EXPLANATIONS),
    ));
}
