//! Parser
//!
//! Two-phase assembly of classified lines into a typed tree.
//!
//! Phase 1, mode detection. Numbered statements or inference separators
//! route the document to the argument branch; dialectical edges or titled
//! proposition lines route it to the map branch; anything else is an
//! unknown input kind. See [`detect`].
//!
//! Phase 2, tree assembly. The map branch runs a stack-based indentation
//! parse: each edge line's indent picks its parent (the most recent node
//! one level up). The argument branch is a left-to-right scan producing
//! statements and inference separators, followed by a role post-pass.
//!
//! Indentation
//!
//! The indent unit is inferred from the first indented line (falling back
//! to 4 spaces) and every indent must be a whole multiple of it. A line
//! that jumps more than one level deeper than its predecessor is a
//! structural error, as is a dialectical edge at depth 0. Output is
//! always re-indented at 4 spaces per level.

pub mod argument_builder;
pub mod detect;
pub mod map_builder;

pub use detect::detect;

use crate::argdown::ast::{ArgdownTree, CotError, SnippetKind};
use crate::argdown::lexing::classify_lines;

/// Parse an Argdown snippet into the tree shape its structure calls for.
pub fn parse(source: &str) -> Result<ArgdownTree, CotError> {
    let records = classify_lines(source)?;
    match detect(&records)? {
        SnippetKind::ArgumentMap => Ok(ArgdownTree::Map(map_builder::build_map(&records)?)),
        SnippetKind::Argument => Ok(ArgdownTree::Argument(argument_builder::build_argument(
            &records,
        )?)),
    }
}
