//! Universal strategy properties: round-trip reconstruction, gapless
//! versions, non-empty explanations, monotone growth.

use argdown_cotgen::argdown::formats::normalize_snippet;
use argdown_cotgen::argdown::pipeline::{CotConfig, CotGenerator, PipeType};
use argdown_cotgen::argdown::testing::samples;
use rstest::rstest;

fn generator(pipe_type: PipeType, seed: u64) -> CotGenerator {
    CotGenerator::new(CotConfig {
        pipe_type,
        seed: Some(seed),
        ..CotConfig::default()
    })
    .expect("config is valid")
}

#[rstest]
fn test_map_round_trip(
    #[values(
        PipeType::ByRank,
        PipeType::BreadthFirst,
        PipeType::DepthFirst,
        PipeType::ByObjection,
        PipeType::RandomDiffusion,
        PipeType::DepthDiffusion
    )]
    pipe_type: PipeType,
    #[values(
        samples::README_MAP,
        samples::CLIMATE_MAP,
        samples::MULTIROOT_MAP,
        samples::VEGETARIANISM_MAP,
        samples::SINGLE_CLAIM
    )]
    source: &str,
) {
    let trace = generator(pipe_type, 17).generate(source).expect("generate failed");
    let expected = normalize_snippet(source).expect("normalize failed");
    assert_eq!(
        trace.steps.last().map(|s| s.content.as_str()),
        Some(expected.as_str())
    );
}

#[rstest]
fn test_argument_round_trip(
    #[values(PipeType::ByRank, PipeType::ByFeature)] pipe_type: PipeType,
    #[values(
        samples::README_ARGUMENT,
        samples::MORAL_ARGUMENT,
        samples::DEMOCRACY_ARGUMENT,
        samples::CHAIN_ARGUMENT,
        samples::YAML_COMMENT_ARGUMENT
    )]
    source: &str,
) {
    let trace = generator(pipe_type, 17).generate(source).expect("generate failed");
    let expected = normalize_snippet(source).expect("normalize failed");
    assert_eq!(
        trace.steps.last().map(|s| s.content.as_str()),
        Some(expected.as_str())
    );
}

#[rstest]
fn test_versions_are_gapless_and_explanations_non_empty(
    #[values(
        PipeType::ByRank,
        PipeType::BreadthFirst,
        PipeType::DepthFirst,
        PipeType::ByObjection,
        PipeType::RandomDiffusion,
        PipeType::DepthDiffusion
    )]
    pipe_type: PipeType,
) {
    let trace = generator(pipe_type, 3)
        .generate(samples::VEGETARIANISM_MAP)
        .expect("generate failed");

    for (index, step) in trace.steps.iter().enumerate() {
        assert_eq!(step.version, format!("v{}", index + 1));
        assert!(
            !step.explanation.trim().is_empty(),
            "step {} has an empty explanation",
            step.version
        );
    }
}

/// Monotone growth: for the non-diffusion map strategies, every line of a
/// step (placeholder comments aside) survives into the next step.
#[rstest]
fn test_monotone_growth(
    #[values(PipeType::ByRank, PipeType::BreadthFirst, PipeType::DepthFirst, PipeType::ByObjection)]
    pipe_type: PipeType,
    #[values(samples::README_MAP, samples::MULTIROOT_MAP, samples::VEGETARIANISM_MAP)]
    source: &str,
) {
    let trace = generator(pipe_type, 23).generate(source).expect("generate failed");

    for pair in trace.steps.windows(2) {
        for line in pair[0]
            .content
            .lines()
            .filter(|l| !l.trim_start().starts_with("//"))
        {
            assert!(
                pair[1].content.lines().any(|other| other == line),
                "{}: line {:?} vanished between consecutive steps",
                pair[0].version,
                line
            );
        }
    }
}
