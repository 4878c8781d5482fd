//! By-objection strategy for argument maps
//!
//! Builds the map by argumentative role rather than structural position:
//! 1. Roots: reveal each main claim
//! 2. Main case: the support-only scaffold below the revealed claims
//! 3. Objections: all objection-like arguments against revealed nodes,
//!    together with their own supporting evidence
//! 4. Iterate step 3: objections draw rebuttals, rebuttals draw
//!    counter-rebuttals, until a fixed point is reached
//! 5. Implications: children attached through inverse relations
//! 6. YAML and comments
//!
//! Support-like means `<+`; objection-like groups `<-`, `<_` and `><`
//! together (undercuts and contradictions count as attacks for staging);
//! the inverse arrows `+>`, `->`, `_>` form the implication category.

use crate::argdown::ast::map::{MapTree, NodeId};
use crate::argdown::formats::render_map;
use crate::argdown::strategies::maps::{append_metadata_steps, next_version};
use crate::argdown::strategies::phrasings::{pick, COMPLETION_EXPLANATIONS};
use crate::argdown::strategies::view::MapView;
use crate::argdown::strategies::{CotStep, MapStrategy};
use rand::rngs::StdRng;
use std::collections::BTreeSet;

const INITIAL_ROOT_EXPLANATIONS: &[&str] = &[
    "Let me begin with adding a main claim.",
    "I'll first try to identify a central proposition.",
    "First, let me establish a core claim.",
    "I'll start with a root node.",
    "Let me begin by identifying a key claim.",
];

const ROOT_EXPLANATIONS: &[&str] = &[
    "Let me add another main claim.",
    "I'll try to identify a further central proposition.",
    "Let me establish another core claim.",
    "I'll continue with another root node.",
];

const MAIN_CASE_EXPLANATIONS: &[&str] = &[
    "Now I'll build the main supporting case.",
    "Let me add the primary argumentation.",
    "I'll establish the main argumentative support.",
    "How is the main claim supported? Let me sketch the central line of argumentation.",
    "Let me add the main arguments supporting the root claim.",
];

const OBJECTION_EXPLANATIONS: &[&str] = &[
    "Now let me add objections against the arguments and claims sketched so far.",
    "I shall next add objections and their respective supporting arguments.",
    "Are there any objections challenging the key claims directly or indirectly?",
    "Now I'll present further critical arguments opposing the key claims.",
    "Let me consider and add objections.",
];

const REBUTTAL_EXPLANATIONS: &[&str] = &[
    "Now I'll address rebuttals to these objections.",
    "Let me see whether I can add any counterarguments to these objections.",
    "I should consider arguments that defend the key claims against these objections.",
    "Now I'll present counter-responses to the previously added objections.",
];

const IMPLICATION_EXPLANATIONS: &[&str] = &[
    "Let me now consider what follows from the arguments presented in the Argdown map.",
    "I should add what these arguments imply or entail.",
    "Let me now reveal the implications of the arguments sketched so far.",
    "What follows from the arguments? Let me show the implications.",
];

const REMAINING_EXPLANATIONS: &[&str] = &[
    "Let me complete the remaining argumentation.",
    "I should add any remaining arguments.",
    "Let me fill in the remaining parts of the argument map.",
    "Finally, let me add the remaining argumentative content.",
];

#[derive(Debug, Default)]
pub struct ByObjectionStrategy;

impl MapStrategy for ByObjectionStrategy {
    fn name(&self) -> &'static str {
        "by_objection"
    }

    fn generate(&self, map: &MapTree, rng: &mut StdRng) -> Vec<CotStep> {
        let mut steps = Vec::new();
        let mut revealed: BTreeSet<NodeId> = BTreeSet::new();
        let total = map.nodes.len();

        for (root_counter, root) in map.roots.iter().enumerate() {
            revealed.insert(*root);
            let pool = if root_counter == 0 {
                INITIAL_ROOT_EXPLANATIONS
            } else {
                ROOT_EXPLANATIONS
            };
            push_step(map, &revealed, &mut steps, pick(rng, pool).to_string());

            // The main supporting case below everything revealed so far.
            let supports = support_group(map, &revealed);
            if !supports.is_empty() {
                revealed.extend(supports);
                push_step(
                    map,
                    &revealed,
                    &mut steps,
                    pick(rng, MAIN_CASE_EXPLANATIONS).to_string(),
                );
            }

            // Objections, then rebuttals against those, and so on until no
            // objection-like child of a revealed node remains hidden.
            let mut revealing_rebuttals = false;
            while revealed.len() < total {
                let objections = objection_group(map, &revealed);
                if objections.is_empty() {
                    break;
                }
                revealed.extend(objections);
                let pool = if revealing_rebuttals {
                    REBUTTAL_EXPLANATIONS
                } else {
                    OBJECTION_EXPLANATIONS
                };
                push_step(map, &revealed, &mut steps, pick(rng, pool).to_string());
                revealing_rebuttals = !revealing_rebuttals;
            }

            // Implications attached through inverse relations.
            while revealed.len() < total {
                let implications = implication_group(map, &revealed);
                if implications.is_empty() {
                    break;
                }
                revealed.extend(implications);
                push_step(
                    map,
                    &revealed,
                    &mut steps,
                    pick(rng, IMPLICATION_EXPLANATIONS).to_string(),
                );
            }
        }

        // Anything still hidden is revealed one node at a time.
        while revealed.len() < total {
            if let Some(next) = (0..total).find(|id| !revealed.contains(id)) {
                revealed.insert(next);
                push_step(
                    map,
                    &revealed,
                    &mut steps,
                    pick(rng, REMAINING_EXPLANATIONS).to_string(),
                );
            }
        }

        append_metadata_steps(map, &mut steps, rng);

        if steps.len() == 1 {
            steps[0].explanation = pick(rng, COMPLETION_EXPLANATIONS).to_string();
        }
        steps
    }
}

fn push_step(map: &MapTree, revealed: &BTreeSet<NodeId>, steps: &mut Vec<CotStep>, explanation: String) {
    steps.push(CotStep::new(
        next_version(steps),
        render_map(map, &MapView::of(revealed.clone())),
        explanation,
    ));
}

/// All hidden support-like children of revealed nodes, each with its own
/// support-only downward closure.
fn support_group(map: &MapTree, revealed: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
    let mut group = BTreeSet::new();
    for id in revealed {
        for child in &map.node(*id).children {
            if revealed.contains(child) {
                continue;
            }
            if map.node(*child).edge.map_or(false, |e| e.is_support_like()) {
                group.insert(*child);
                group.extend(support_closure(map, *child, revealed));
            }
        }
    }
    group
}

/// All hidden objection-like children of revealed nodes, each bundled with
/// its supporting evidence.
fn objection_group(map: &MapTree, revealed: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
    let mut group = BTreeSet::new();
    for id in revealed {
        for child in &map.node(*id).children {
            if revealed.contains(child) {
                continue;
            }
            if map
                .node(*child)
                .edge
                .map_or(false, |e| e.is_objection_like())
            {
                group.insert(*child);
                group.extend(support_closure(map, *child, revealed));
            }
        }
    }
    group
}

/// All hidden inverse-relation children of revealed nodes.
fn implication_group(map: &MapTree, revealed: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
    let mut group = BTreeSet::new();
    for id in revealed {
        for child in &map.node(*id).children {
            if !revealed.contains(child)
                && map.node(*child).edge.map_or(false, |e| e.is_inverse())
            {
                group.insert(*child);
            }
        }
    }
    group
}

/// Descendants reachable from `start` through support edges only.
fn support_closure(map: &MapTree, start: NodeId, revealed: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
    let mut closure = BTreeSet::new();
    let mut queue = vec![start];
    while let Some(id) = queue.pop() {
        for child in &map.node(id).children {
            if revealed.contains(child) || closure.contains(child) {
                continue;
            }
            if map.node(*child).edge.map_or(false, |e| e.is_support_like()) {
                closure.insert(*child);
                queue.push(*child);
            }
        }
    }
    closure
}
