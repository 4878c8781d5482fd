//! Tree model for parsed Argdown snippets
//!
//! Two tree shapes exist, one per snippet kind:
//!
//! - [`map::MapTree`]: the dialectical tree of an argument map, claims and
//!   argument references joined by support/attack/undercut edges.
//! - [`argument::ArgumentDoc`]: an individual premise-conclusion argument,
//!   numbered statements with inference separators between them.
//!
//! Trees are built once per invocation and never mutated afterwards; the
//! strategies only ever produce read-only views over them. Parent links are
//! indices into the node table, not owning pointers, so the tree has no
//! ownership cycles.

pub mod argument;
pub mod error;
pub mod map;

pub use argument::{ArgItem, ArgumentDoc, Inference, InferenceData, Preamble, Role, Statement};
pub use error::{ConfigError, CotError, InputKindError, ParseError, StrategyError};
pub use map::{MapNode, MapTree, NodeId, StrayComment};

/// Which of the two tree shapes an input snippet parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    ArgumentMap,
    Argument,
}

impl SnippetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnippetKind::ArgumentMap => "argument_map",
            SnippetKind::Argument => "argument",
        }
    }
}

/// A parsed Argdown snippet: either a map tree or an argument document.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgdownTree {
    Map(MapTree),
    Argument(ArgumentDoc),
}

impl ArgdownTree {
    pub fn kind(&self) -> SnippetKind {
        match self {
            ArgdownTree::Map(_) => SnippetKind::ArgumentMap,
            ArgdownTree::Argument(_) => SnippetKind::Argument,
        }
    }
}
