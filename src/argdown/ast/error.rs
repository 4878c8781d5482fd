//! Error types for parsing, configuration and strategy execution

use crate::argdown::ast::SnippetKind;
use std::fmt;

/// A structural error in the input snippet, with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at line {}: {}", self.line, self.reason)
    }
}

impl std::error::Error for ParseError {}

/// The input could not be routed to a parser branch, or was routed to a
/// strategy for the other branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKindError {
    /// Neither dialectical edges nor numbered statements were found.
    Unknown,
    /// The configured strategy handles the other snippet kind.
    Mismatch {
        pipe_type: String,
        found: SnippetKind,
    },
}

impl fmt::Display for InputKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKindError::Unknown => {
                write!(
                    f,
                    "input is neither an argument map nor an individual argument"
                )
            }
            InputKindError::Mismatch { pipe_type, found } => {
                write!(
                    f,
                    "strategy '{}' does not handle {} inputs",
                    pipe_type,
                    found.as_str()
                )
            }
        }
    }
}

impl std::error::Error for InputKindError {}

/// Invalid generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownPipeType(String),
    /// `p_abort` must lie in `[0, 1]`.
    AbortionRate(f64),
    UnknownAbortionPool(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownPipeType(name) => write!(f, "unknown pipe_type '{}'", name),
            ConfigError::AbortionRate(rate) => {
                write!(f, "p_abort must be within [0, 1], got {}", rate)
            }
            ConfigError::UnknownAbortionPool(name) => {
                write!(f, "unknown abortion pool '{}'", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A strategy failed its post-condition. This is an internal assertion
/// failure: the final step of every trace must reconstruct the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyError {
    pub strategy: String,
    pub detail: String,
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "strategy '{}' violated its post-condition: {}",
            self.strategy, self.detail
        )
    }
}

impl std::error::Error for StrategyError {}

/// Umbrella error for the whole pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum CotError {
    Parse(ParseError),
    InputKind(InputKindError),
    Config(ConfigError),
    Strategy(StrategyError),
}

impl fmt::Display for CotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CotError::Parse(e) => e.fmt(f),
            CotError::InputKind(e) => e.fmt(f),
            CotError::Config(e) => e.fmt(f),
            CotError::Strategy(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CotError {}

impl From<ParseError> for CotError {
    fn from(e: ParseError) -> Self {
        CotError::Parse(e)
    }
}

impl From<InputKindError> for CotError {
    fn from(e: InputKindError) -> Self {
        CotError::InputKind(e)
    }
}

impl From<ConfigError> for CotError {
    fn from(e: ConfigError) -> Self {
        CotError::Config(e)
    }
}

impl From<StrategyError> for CotError {
    fn from(e: StrategyError) -> Self {
        CotError::Strategy(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_carries_line_number() {
        let err = ParseError::new(12, "bad indent step");
        assert_eq!(err.to_string(), "parse error at line 12: bad indent step");
    }

    #[test]
    fn test_mismatch_display_names_both_sides() {
        let err = InputKindError::Mismatch {
            pipe_type: "by_objection".to_string(),
            found: SnippetKind::Argument,
        };
        let text = err.to_string();
        assert!(text.contains("by_objection"));
        assert!(text.contains("argument"));
    }
}
