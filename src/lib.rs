//! # argdown-cotgen
//!
//! A generator of chain-of-thought reconstruction traces for Argdown snippets.
//!
//! The crate parses an Argdown snippet (an argument map or an individual
//! premise-conclusion argument) into a typed tree, runs an incremental
//! reconstruction strategy over it, and renders the resulting sequence of
//! versioned snippets as a single textual trace. The last version always
//! reconstructs the input, modulo a documented blank-line normalization.
//!
//! The public entry points live in [`argdown::pipeline`]:
//!
//! ```rust,ignore
//! use argdown_cotgen::argdown::pipeline::{generate_cot_trace, CotConfig};
//!
//! let trace = generate_cot_trace(snippet, &CotConfig::default())?;
//! ```

pub mod argdown;
