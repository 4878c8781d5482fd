//! Strategy framework
//!
//! A strategy consumes a parsed tree and produces the ordered list of
//! [`CotStep`]s that make up one reconstruction trace. Strategies never
//! mutate the tree: each step is rendered from a read-only view (see
//! [`view`]), versions `v1..vN` are assigned by emission order, and the
//! last emitted step always reconstructs the input.
//!
//! Randomness
//!
//! All nondeterminism flows through the single seeded generator the
//! dispatcher hands in: explanation phrasing, diffusion shuffles and
//! abortion injection. With a fixed seed a trace is bit-exact
//! reproducible. Placeholder comments are deliberately *not* randomized;
//! they come from the table in [`phrasings`].
//!
//! Abortion
//!
//! The abortion perturbation is strictly post-hoc: it operates on the
//! already-rendered step texts (see [`abortion`]), so the tree model and
//! the views stay pure.

pub mod abortion;
pub mod arguments;
pub mod maps;
pub mod phrasings;
pub mod step;
pub mod view;

pub use step::CotStep;

use crate::argdown::ast::argument::ArgumentDoc;
use crate::argdown::ast::map::MapTree;
use rand::rngs::StdRng;

/// Version label for the next step to be pushed.
pub(crate) fn next_version(steps: &[CotStep]) -> String {
    format!("v{}", steps.len() + 1)
}

/// A reconstruction strategy over argument maps.
pub trait MapStrategy {
    fn name(&self) -> &'static str;
    fn generate(&self, map: &MapTree, rng: &mut StdRng) -> Vec<CotStep>;
}

/// A reconstruction strategy over individual arguments.
pub trait ArgumentStrategy {
    fn name(&self) -> &'static str;
    fn generate(&self, doc: &ArgumentDoc, rng: &mut StdRng) -> Vec<CotStep>;
}
