//! Dispatcher
//!
//! The single entry point of the crate. A [`CotGenerator`] owns a
//! validated configuration; each call parses the input, routes it to the
//! strategy registered for the configured pipe type and snippet kind,
//! runs the abortion post-pass, checks the reconstruction post-condition
//! and formats the trace.
//!
//! Every invocation is a pure function of `(input, config)`: one seeded
//! generator drives all randomness, nothing is cached between calls and
//! no I/O happens anywhere below this module.

pub mod config;

pub use config::{CotConfig, PipeType};

use crate::argdown::ast::{
    ArgdownTree, CotError, InputKindError, SnippetKind, StrategyError,
};
use crate::argdown::formats::{format_trace, normalize_snippet};
use crate::argdown::parsing::parse;
use crate::argdown::strategies::abortion::inject_abortions;
use crate::argdown::strategies::arguments as argument_strategies;
use crate::argdown::strategies::maps as map_strategies;
use crate::argdown::strategies::{ArgumentStrategy, CotStep, MapStrategy};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed used when the configuration leaves `seed` unset; output is
/// reproducible either way.
const DEFAULT_SEED: u64 = 0;

/// A finished trace: the steps plus what they were generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct CotTrace {
    pub steps: Vec<CotStep>,
    pub input_kind: SnippetKind,
    pub strategy: PipeType,
}

impl CotTrace {
    /// Render the trace into its final textual form.
    pub fn render(&self) -> String {
        format_trace(&self.steps)
    }
}

/// Generator of chain-of-thought reconstruction traces.
pub struct CotGenerator {
    config: CotConfig,
}

impl CotGenerator {
    pub fn new(config: CotConfig) -> Result<Self, CotError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse the snippet, run the configured strategy, and return the steps.
    pub fn generate(&self, source: &str) -> Result<CotTrace, CotError> {
        let tree = parse(source)?;
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or(DEFAULT_SEED));

        let (steps, strategy_name) = match &tree {
            ArgdownTree::Map(map) => {
                let strategy = map_strategy(self.config.pipe_type).ok_or_else(|| {
                    InputKindError::Mismatch {
                        pipe_type: self.config.pipe_type.as_str().to_string(),
                        found: SnippetKind::ArgumentMap,
                    }
                })?;
                (strategy.generate(map, &mut rng), strategy.name())
            }
            ArgdownTree::Argument(doc) => {
                let strategy = argument_strategy(self.config.pipe_type).ok_or_else(|| {
                    InputKindError::Mismatch {
                        pipe_type: self.config.pipe_type.as_str().to_string(),
                        found: SnippetKind::Argument,
                    }
                })?;
                (strategy.generate(doc, &mut rng), strategy.name())
            }
        };

        check_postcondition(source, &steps, strategy_name)?;

        let steps = inject_abortions(
            steps,
            self.config.p_abort,
            self.config.abortion_pool,
            &mut rng,
        );

        Ok(CotTrace {
            steps,
            input_kind: tree.kind(),
            strategy: self.config.pipe_type,
        })
    }

    /// Generate and render in one go.
    pub fn call(&self, source: &str) -> Result<String, CotError> {
        Ok(self.generate(source)?.render())
    }
}

/// One-shot convenience over [`CotGenerator`].
pub fn generate_cot_trace(source: &str, config: &CotConfig) -> Result<String, CotError> {
    CotGenerator::new(config.clone())?.call(source)
}

/// The last step of every trace must reconstruct the normalized input.
/// Failing this is a bug in the strategy, not in the input.
fn check_postcondition(
    source: &str,
    steps: &[CotStep],
    strategy: &'static str,
) -> Result<(), CotError> {
    let expected = normalize_snippet(source)?;
    let actual = steps.last().map(|s| s.content.as_str()).unwrap_or_default();
    if actual != expected {
        return Err(StrategyError {
            strategy: strategy.to_string(),
            detail: "final step does not reconstruct the input".to_string(),
        }
        .into());
    }
    Ok(())
}

fn map_strategy(pipe_type: PipeType) -> Option<Box<dyn MapStrategy>> {
    match pipe_type {
        PipeType::ByRank => Some(Box::new(map_strategies::ByRankStrategy)),
        PipeType::BreadthFirst => Some(Box::new(map_strategies::BreadthFirstStrategy)),
        PipeType::DepthFirst => Some(Box::new(map_strategies::DepthFirstStrategy)),
        PipeType::ByObjection => Some(Box::new(map_strategies::ByObjectionStrategy)),
        PipeType::RandomDiffusion => {
            Some(Box::new(map_strategies::RandomDiffusionStrategy::default()))
        }
        PipeType::DepthDiffusion => Some(Box::new(map_strategies::DepthDiffusionStrategy)),
        PipeType::ByFeature => None,
    }
}

fn argument_strategy(pipe_type: PipeType) -> Option<Box<dyn ArgumentStrategy>> {
    match pipe_type {
        PipeType::ByRank => Some(Box::new(argument_strategies::ByRankStrategy)),
        PipeType::ByFeature => Some(Box::new(argument_strategies::ByFeatureStrategy)),
        _ => None,
    }
}
