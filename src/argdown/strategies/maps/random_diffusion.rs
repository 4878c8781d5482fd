//! Random diffusion strategy for argument maps
//!
//! Starts from a distorted rendition in which dialectical relations have
//! been flipped with probability `p_noise`, then fixes one error per step
//! until the true map is reached. Corrupted lines occasionally carry a
//! doubting note, which disappears together with the error.

use crate::argdown::ast::map::{MapTree, NodeId};
use crate::argdown::formats::render_map;
use crate::argdown::lexing::EdgeKind;
use crate::argdown::strategies::maps::{append_metadata_steps, next_version};
use crate::argdown::strategies::phrasings::{pick, COMPLETION_EXPLANATIONS};
use crate::argdown::strategies::view::{EdgeOverride, MapView};
use crate::argdown::strategies::{CotStep, MapStrategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

const DEFAULT_NOISE: f64 = 0.4;

/// Probability of annotating a corrupted line with a doubting note.
const ADD_NOTE_PROBABILITY: f64 = 0.1;

const INITIAL_EXPLANATIONS: &[&str] = &[
    "Let me sketch the full map in one go; some relations may still be wrong.",
    "I'll write down the whole map at once and review the relations afterwards.",
    "Here is a first complete draft of the map, to be checked for mistakes.",
    "Let me put down a draft of the entire map, errors included.",
];

const DIALECTICAL_ERROR_EXPLANATIONS: &[&str] = &[
    "I notice the dialectical relation for {label} is incorrect, let me fix it.",
    "The support/attack relation for {label} seems wrong, let me correct it.",
    "The logical relationship for {label} is off, let me adjust it.",
    "Not sure the relation type for {label} is correct, let me try to fix it.",
];

const NOTES: &[&str] = &[
    "// Note: relation seems off",
    "// Not sure here",
    "// NOTE: Is this correct?",
    "// needs to be revisited",
    "// might need to fix this later",
];

#[derive(Debug)]
pub struct RandomDiffusionStrategy {
    pub p_noise: f64,
}

impl Default for RandomDiffusionStrategy {
    fn default() -> Self {
        Self {
            p_noise: DEFAULT_NOISE,
        }
    }
}

fn flipped(edge: EdgeKind) -> EdgeKind {
    match edge {
        EdgeKind::Supports => EdgeKind::Attacks,
        EdgeKind::Attacks => EdgeKind::Supports,
        EdgeKind::Undercuts => EdgeKind::Attacks,
        EdgeKind::Contradicts => EdgeKind::Supports,
        // Inverse arrows never pass the candidate filter.
        other => other,
    }
}

impl MapStrategy for RandomDiffusionStrategy {
    fn name(&self) -> &'static str {
        "random_diffusion"
    }

    fn generate(&self, map: &MapTree, rng: &mut StdRng) -> Vec<CotStep> {
        let mut steps = Vec::new();

        // Decide which polar edges get corrupted. When the map has edges
        // but none got flipped, one flip is forced.
        let candidates: Vec<NodeId> = map
            .nodes
            .iter()
            .filter(|n| {
                n.edge
                    .map_or(false, |e| e.is_support_like() || e.is_objection_like())
            })
            .map(|n| n.id)
            .collect();

        let mut corrupted: Vec<NodeId> = candidates
            .iter()
            .copied()
            .filter(|_| rng.gen::<f64>() < self.p_noise)
            .collect();
        if corrupted.is_empty() && !candidates.is_empty() {
            if let Some(forced) = candidates.as_slice().choose(rng) {
                corrupted.push(*forced);
            }
        }

        let mut overrides: BTreeMap<NodeId, EdgeOverride> = BTreeMap::new();
        for id in &corrupted {
            let edge = match map.node(*id).edge {
                Some(edge) => flipped(edge),
                None => continue,
            };
            let note = if rng.gen::<f64>() < ADD_NOTE_PROBABILITY {
                Some(pick(rng, NOTES).to_string())
            } else {
                None
            };
            overrides.insert(*id, EdgeOverride { edge, note });
        }

        // The first view shows everything, errors included.
        let mut view = MapView::all_nodes(map);
        view.edge_overrides = overrides.clone();
        steps.push(CotStep::new(
            next_version(&steps),
            render_map(map, &view),
            pick(rng, INITIAL_EXPLANATIONS),
        ));

        // Fix one error per step, in random order.
        let mut fix_order: Vec<NodeId> = overrides.keys().copied().collect();
        fix_order.shuffle(rng);
        for id in fix_order {
            overrides.remove(&id);
            let mut view = MapView::all_nodes(map);
            view.edge_overrides = overrides.clone();
            let explanation = pick(rng, DIALECTICAL_ERROR_EXPLANATIONS)
                .replace("{label}", &format!("'{}'", map.node(id).display_label()));
            steps.push(CotStep::new(
                next_version(&steps),
                render_map(map, &view),
                explanation,
            ));
        }

        append_metadata_steps(map, &mut steps, rng);

        if steps.len() == 1 {
            steps[0].explanation = pick(rng, COMPLETION_EXPLANATIONS).to_string();
        }
        steps
    }
}
