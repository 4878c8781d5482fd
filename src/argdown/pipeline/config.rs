//! Generator configuration
//!
//! A plain record, deserializable so batch drivers can load it from their
//! own configuration surfaces. The core itself never reads files; validation
//! happens when a generator is constructed.

use crate::argdown::ast::ConfigError;
use crate::argdown::strategies::abortion::AbortionPool;
use serde::Deserialize;

/// Which reconstruction strategy drives the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeType {
    ByRank,
    ByFeature,
    BreadthFirst,
    DepthFirst,
    ByObjection,
    RandomDiffusion,
    DepthDiffusion,
}

impl PipeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipeType::ByRank => "by_rank",
            PipeType::ByFeature => "by_feature",
            PipeType::BreadthFirst => "breadth_first",
            PipeType::DepthFirst => "depth_first",
            PipeType::ByObjection => "by_objection",
            PipeType::RandomDiffusion => "random_diffusion",
            PipeType::DepthDiffusion => "depth_diffusion",
        }
    }

    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "by_rank" => Ok(PipeType::ByRank),
            "by_feature" => Ok(PipeType::ByFeature),
            "breadth_first" => Ok(PipeType::BreadthFirst),
            "depth_first" => Ok(PipeType::DepthFirst),
            "by_objection" => Ok(PipeType::ByObjection),
            "random_diffusion" => Ok(PipeType::RandomDiffusion),
            "depth_diffusion" => Ok(PipeType::DepthDiffusion),
            other => Err(ConfigError::UnknownPipeType(other.to_string())),
        }
    }
}

/// Configuration record for one generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CotConfig {
    pub pipe_type: PipeType,
    /// Probability of perturbing an eligible step with an abortion, in
    /// `[0, 1]`.
    pub p_abort: f64,
    /// Seed for the generator's randomness. `None` falls back to a fixed
    /// default seed, so output is reproducible either way.
    pub seed: Option<u64>,
    pub abortion_pool: AbortionPool,
}

impl Default for CotConfig {
    fn default() -> Self {
        Self {
            pipe_type: PipeType::ByRank,
            p_abort: 0.0,
            seed: None,
            abortion_pool: AbortionPool::Default,
        }
    }
}

impl CotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.p_abort) || self.p_abort.is_nan() {
            return Err(ConfigError::AbortionRate(self.p_abort));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_type_round_trip() {
        for name in [
            "by_rank",
            "by_feature",
            "breadth_first",
            "depth_first",
            "by_objection",
            "random_diffusion",
            "depth_diffusion",
        ] {
            let pipe = PipeType::parse(name).expect("should parse");
            assert_eq!(pipe.as_str(), name);
        }
        assert!(PipeType::parse("by_magic").is_err());
    }

    #[test]
    fn test_out_of_range_abortion_rate_is_rejected() {
        let mut config = CotConfig::default();
        config.p_abort = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AbortionRate(_))
        ));
        config.p_abort = -0.1;
        assert!(config.validate().is_err());
        config.p_abort = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserializes_from_yaml() {
        let config: CotConfig =
            serde_yaml::from_str("{pipe_type: by_objection, p_abort: 0.2, seed: 42}")
                .expect("deserialize failed");
        assert_eq!(config.pipe_type, PipeType::ByObjection);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.abortion_pool, AbortionPool::Default);
    }
}
