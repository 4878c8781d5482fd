//! Abortion injection
//!
//! A stochastic perturbation that simulates a reasoner noticing a
//! repetition: an eligible step is replaced by an aborted attempt (the step's
//! opening lines, a duplicated block of one content line, and an abort
//! comment) followed by a clean re-emission of the same step under the same
//! version. The first step of a trace is never perturbed, so the final step
//! still reconstructs the input whenever the last step is left clean or
//! retried.

use crate::argdown::ast::ConfigError;
use crate::argdown::strategies::phrasings::pick;
use crate::argdown::strategies::CotStep;
use rand::rngs::StdRng;
use rand::Rng;
use serde::Deserialize;

/// Which abort-comment pool to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortionPool {
    #[default]
    Default,
    /// Emoji-free phrasings only.
    Plain,
}

impl AbortionPool {
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(AbortionPool::Default),
            "plain" => Ok(AbortionPool::Plain),
            other => Err(ConfigError::UnknownAbortionPool(other.to_string())),
        }
    }

    fn comments(&self) -> &'static [&'static str] {
        match self {
            AbortionPool::Default => ABORTION_COMMENTS,
            AbortionPool::Plain => ABORTION_COMMENTS_PLAIN,
        }
    }
}

pub const ABORTION_COMMENTS: &[&str] = &[
    "Oh no! This is just exactly what I've written before. Better ABORT and DISCARD this, and start anew.",
    "Oops! I just repeated myself. Let me discard this and try again.",
    "Fatal block repetition detected! Aborting this version and starting over.",
    "Detected fatal repetitions. Let me abort this step now and start afresh.",
    "Wait, I'm repeating content! Let me abort and redo this step.",
    "Error: Duplicate content found. Discarding this attempt and trying again.",
    "🚨 ABORT! I'm duplicating content here. Let me start over.",
    "❌ Fatal repetition error! Discarding this attempt and trying again.",
    "🛑 Wait, this is exactly what I wrote before! Better abort and restart.",
];

pub const ABORTION_COMMENTS_PLAIN: &[&str] = &[
    "Oh no! This is just exactly what I've written before. Better ABORT and DISCARD this, and start anew.",
    "Oops! I just repeated myself. Let me discard this and try again.",
    "Fatal block repetition detected! Aborting this version and starting over.",
    "Detected fatal repetitions. Let me abort this step now and start afresh.",
    "Wait, I'm repeating content! Let me abort and redo this step.",
    "Error: Duplicate content found. Discarding this attempt and trying again.",
];

pub const RETRY_COMMENTS: &[&str] = &[
    "I ignore the above Argdown snippet and will try again.",
    "Let me start over with this step.",
    "I'll discard the previous attempt and redo this step.",
    "Starting fresh with this reconstruction step.",
    "Let me try this step again without the repetitions.",
];

/// Minimum number of content lines a step needs to be worth perturbing.
const MIN_LINES: usize = 3;

/// Post-process rendered steps, perturbing each eligible step with
/// probability `p_abort`.
pub fn inject_abortions(
    steps: Vec<CotStep>,
    p_abort: f64,
    pool: AbortionPool,
    rng: &mut StdRng,
) -> Vec<CotStep> {
    if p_abort <= 0.0 {
        return steps;
    }

    let mut out = Vec::with_capacity(steps.len());
    for (index, step) in steps.into_iter().enumerate() {
        let eligible = index > 0 && step.content.lines().count() >= MIN_LINES;
        if eligible && rng.gen::<f64>() < p_abort {
            if let Some(aborted) = aborted_version(&step, pool, rng) {
                let retry_explanation = pick(rng, RETRY_COMMENTS).to_string();
                let retry = CotStep::new(step.version.clone(), step.content.clone(), retry_explanation);
                out.push(aborted);
                out.push(retry);
                continue;
            }
        }
        out.push(step);
    }
    out
}

/// Build the aborted attempt: keep the content up to a line chosen in the
/// first half, repeat that line so it occurs 2 to 4 times in total, and
/// append the abort comment.
fn aborted_version(step: &CotStep, pool: AbortionPool, rng: &mut StdRng) -> Option<CotStep> {
    let lines: Vec<&str> = step.content.lines().collect();
    let candidates: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.trim().starts_with("//"))
        .map(|(i, _)| i)
        .collect();
    if candidates.len() < 2 {
        return None;
    }

    let upper = (candidates.len() / 2).max(1);
    let chosen = candidates[rng.gen_range(0..upper)];
    let copies = rng.gen_range(1..=3);

    let mut distorted: Vec<&str> = lines[..=chosen].to_vec();
    for _ in 0..copies {
        distorted.push(lines[chosen]);
    }
    let abort_comment = format!("// {}", pick(rng, pool.comments()));

    let mut content: Vec<String> = distorted.iter().map(|s| s.to_string()).collect();
    content.push(abort_comment);

    Some(CotStep::new(
        step.version.clone(),
        content.join("\n"),
        step.explanation.clone(),
    ))
}
