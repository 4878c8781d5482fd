//! Mode detection
//!
//! Decides whether a classified line sequence is an argument map or an
//! individual argument. Numbered statements and inference separators are the
//! strongest signal and win over dialectical edges, so documents mixing both
//! surfaces parse as arguments (matching the premise-conclusion reading).

use crate::argdown::ast::{InputKindError, SnippetKind};
use crate::argdown::lexing::{LineKind, LineRecord};

/// Classify the document's shape, or fail with [`InputKindError::Unknown`].
pub fn detect(records: &[LineRecord]) -> Result<SnippetKind, InputKindError> {
    let mut has_argument_lines = false;
    let mut has_map_lines = false;

    for record in records {
        match &record.kind {
            LineKind::Numbered { .. } | LineKind::Separator | LineKind::InferenceInfo { .. } => {
                has_argument_lines = true;
            }
            LineKind::Edge { .. } | LineKind::Node { .. } => {
                has_map_lines = true;
            }
            LineKind::Blank | LineKind::Comment | LineKind::Text { .. } => {}
        }
    }

    if has_argument_lines {
        Ok(SnippetKind::Argument)
    } else if has_map_lines {
        Ok(SnippetKind::ArgumentMap)
    } else {
        Err(InputKindError::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argdown::lexing::classify_lines;

    fn detect_source(source: &str) -> Result<SnippetKind, InputKindError> {
        detect(&classify_lines(source).expect("classify failed"))
    }

    #[test]
    fn test_numbered_statements_win_over_edges() {
        let kind = detect_source("<T>: Gist.\n(1) P.\n-----\n(2) C.").expect("detect failed");
        assert_eq!(kind, SnippetKind::Argument);
    }

    #[test]
    fn test_single_root_claim_is_a_map() {
        let kind = detect_source("[Root]: Only claim.").expect("detect failed");
        assert_eq!(kind, SnippetKind::ArgumentMap);
    }

    #[test]
    fn test_plain_prose_is_unknown() {
        let err = detect_source("Just some prose.\nNothing else.").expect_err("should fail");
        assert_eq!(err, InputKindError::Unknown);
    }
}
