//! Abortion injection through the public pipeline.

use argdown_cotgen::argdown::formats::normalize_snippet;
use argdown_cotgen::argdown::pipeline::{CotConfig, CotGenerator, PipeType};
use argdown_cotgen::argdown::strategies::abortion::RETRY_COMMENTS;
use argdown_cotgen::argdown::testing::samples;

fn config(p_abort: f64, seed: u64) -> CotConfig {
    CotConfig {
        pipe_type: PipeType::ByRank,
        p_abort,
        seed: Some(seed),
        ..CotConfig::default()
    }
}

#[test]
fn test_certain_abortion_duplicates_and_recovers() {
    let generator = CotGenerator::new(config(1.0, 42)).expect("config is valid");
    let trace = generator
        .generate(samples::README_MAP)
        .expect("generate failed");

    // At least one aborted attempt: a step ending in an abort comment,
    // immediately followed by a clean step of the same version.
    let aborted_at = trace
        .steps
        .iter()
        .position(|s| s.content.lines().last().map_or(false, |l| l.starts_with("//")))
        .expect("no aborted step found at p_abort = 1.0");
    assert!(aborted_at > 0, "the first step must stay clean");

    let retry = &trace.steps[aborted_at + 1];
    assert_eq!(retry.version, trace.steps[aborted_at].version);
    assert!(RETRY_COMMENTS.contains(&retry.explanation.as_str()));

    // The aborted attempt really repeats a line.
    let lines: Vec<&str> = trace.steps[aborted_at].content.lines().collect();
    let has_duplicate = lines
        .iter()
        .filter(|l| !l.trim().is_empty() && !l.trim_start().starts_with("//"))
        .any(|line| lines.iter().filter(|other| *other == line).count() >= 2);
    assert!(has_duplicate);

    // The final step still reconstructs the input.
    let expected = normalize_snippet(samples::README_MAP).expect("normalize failed");
    assert_eq!(
        trace.steps.last().map(|s| s.content.as_str()),
        Some(expected.as_str())
    );
}

#[test]
fn test_first_step_is_clean_regardless_of_rate() {
    let generator = CotGenerator::new(config(1.0, 7)).expect("config is valid");
    let trace = generator
        .generate(samples::CLIMATE_MAP)
        .expect("generate failed");

    let first = &trace.steps[0];
    assert_eq!(first.version, "v1");
    assert!(first.content.lines().all(|l| !l.trim_start().starts_with("// Oh no!")));
    let lines: Vec<&str> = first.content.lines().collect();
    for line in &lines {
        assert_eq!(
            lines.iter().filter(|other| *other == line).count(),
            1,
            "first step contains a duplicated line"
        );
    }
}

#[test]
fn test_fixed_seed_is_bit_exact_reproducible() {
    let first = CotGenerator::new(config(0.8, 1234))
        .expect("config is valid")
        .call(samples::VEGETARIANISM_MAP)
        .expect("call failed");
    let second = CotGenerator::new(config(0.8, 1234))
        .expect("config is valid")
        .call(samples::VEGETARIANISM_MAP)
        .expect("call failed");
    assert_eq!(first, second);
}

#[test]
fn test_unset_seed_is_still_reproducible() {
    let config = CotConfig {
        p_abort: 0.5,
        ..CotConfig::default()
    };
    let first = CotGenerator::new(config.clone())
        .expect("config is valid")
        .call(samples::README_MAP)
        .expect("call failed");
    let second = CotGenerator::new(config)
        .expect("config is valid")
        .call(samples::README_MAP)
        .expect("call failed");
    assert_eq!(first, second);
}
