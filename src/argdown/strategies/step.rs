//! A single step of a chain-of-thought trace

/// One versioned snippet with its natural-language explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CotStep {
    /// `v1`, `v2`, ... An aborted attempt and its clean retry share one
    /// version.
    pub version: String,
    /// The Argdown snippet of this stage.
    pub content: String,
    pub explanation: String,
}

impl CotStep {
    pub fn new(
        version: impl Into<String>,
        content: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            content: content.into(),
            explanation: explanation.into(),
        }
    }
}
