//! Output formats
//!
//! Two renderers live here. The [`serializer`] turns a parsed tree plus a
//! strategy view back into Argdown text, rebuilding every line from its
//! stored parts; it is the single place that knows how a line is spelled, so
//! the final reconstruction step and all partial steps stay consistent. The
//! [`trace`] module wraps finished steps into the user-facing
//! chain-of-thought output with versioned code fences.

pub mod serializer;
pub mod trace;

pub use serializer::{normalize_snippet, render_argument, render_map};
pub use trace::format_trace;
