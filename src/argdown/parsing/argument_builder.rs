//! Individual argument assembly
//!
//! Left-to-right scan producing the document body, followed by a role
//! post-pass: every statement directly after an inference separator is a
//! conclusion, the document's last statement is the final conclusion, and all
//! other conclusions are intermediate. Structured YAML on separators is
//! decoded here so strategies can read `uses`/`from` lists without touching
//! raw text again.

use crate::argdown::ast::argument::{ArgItem, ArgumentDoc, Inference, Preamble, Role, Statement};
use crate::argdown::ast::map::StrayComment;
use crate::argdown::ast::ParseError;
use crate::argdown::lexing::{LineKind, LineRecord, NodeKind};

/// Assemble classified lines into an [`ArgumentDoc`].
pub fn build_argument(records: &[LineRecord]) -> Result<ArgumentDoc, ParseError> {
    let mut doc = ArgumentDoc::default();

    for record in records {
        match &record.kind {
            LineKind::Blank => {}
            LineKind::Comment => {
                if let Some(text) = &record.comment {
                    doc.comments.push(StrayComment {
                        after: doc.items.len().checked_sub(1),
                        indent: record.indent,
                        text: text.clone(),
                    });
                }
            }
            LineKind::Node { target } => {
                if target.kind == NodeKind::Claim {
                    return Err(ParseError::new(
                        record.line_number,
                        "a bracketed claim cannot open an individual argument",
                    ));
                }
                if doc.preamble.is_some() || !doc.items.is_empty() {
                    return Err(ParseError::new(
                        record.line_number,
                        "unexpected titled line inside the argument body",
                    ));
                }
                doc.preamble = Some(Preamble {
                    label: target.label.clone().unwrap_or_default(),
                    text: target.text.clone(),
                    yaml: record.yaml.clone(),
                    comment: record.comment.clone(),
                });
            }
            LineKind::Numbered { number, text } => {
                doc.items.push(ArgItem::Statement(Statement {
                    number: *number,
                    text: text.clone(),
                    yaml: record.yaml.clone(),
                    comment: record.comment.clone(),
                    // Refined by the role post-pass below.
                    role: Role::Premise,
                    line_number: record.line_number,
                }));
            }
            LineKind::Separator => {
                doc.items.push(ArgItem::Inference(make_inference(None, record)));
            }
            LineKind::InferenceInfo { rule_text } => {
                doc.items.push(ArgItem::Inference(make_inference(
                    Some(rule_text.clone()),
                    record,
                )));
            }
            LineKind::Edge { .. } => {
                return Err(ParseError::new(
                    record.line_number,
                    "dialectical edge inside an individual argument",
                ));
            }
            LineKind::Text { .. } => {
                return Err(ParseError::new(
                    record.line_number,
                    "unrecognized line inside an individual argument",
                ));
            }
        }
    }

    if doc.statements().count() == 0 {
        let line = records.last().map(|r| r.line_number).unwrap_or(1);
        return Err(ParseError::new(
            line,
            "argument contains no numbered statements",
        ));
    }

    assign_roles(&mut doc);
    Ok(doc)
}

fn make_inference(rule_text: Option<String>, record: &LineRecord) -> Inference {
    // Structured data may trail the separator (`----- {from: [1]}`) or sit
    // inside the rule text (`-- {uses: [1], from: [2]} --`).
    let embedded = rule_text.as_deref().and_then(braced_block);
    let data = record
        .yaml
        .as_deref()
        .or(embedded)
        .and_then(|yaml| serde_yaml::from_str(yaml).ok());
    Inference {
        rule_text,
        yaml: record.yaml.clone(),
        data,
        line_number: record.line_number,
    }
}

/// The first brace-balanced `{...}` block in a string, if any.
fn braced_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

fn assign_roles(doc: &mut ArgumentDoc) {
    // Statements directly after a separator are conclusions.
    let mut after_separator = false;
    for item in doc.items.iter_mut() {
        match item {
            ArgItem::Inference(_) => after_separator = true,
            ArgItem::Statement(statement) => {
                if after_separator {
                    statement.role = Role::Intermediate;
                }
                after_separator = false;
            }
        }
    }
    // The last statement is the final conclusion.
    for item in doc.items.iter_mut().rev() {
        if let ArgItem::Statement(statement) = item {
            statement.role = Role::Final;
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argdown::lexing::classify_lines;
    use crate::argdown::testing::samples;

    fn build(source: &str) -> ArgumentDoc {
        build_argument(&classify_lines(source).expect("classify failed")).expect("build failed")
    }

    #[test]
    fn test_readme_argument_structure() {
        let doc = build(samples::README_ARGUMENT);
        let preamble = doc.preamble.as_ref().expect("missing preamble");
        assert_eq!(preamble.label, "Argument title");
        assert_eq!(doc.statements().count(), 5);
        assert_eq!(doc.inferences().count(), 2);

        let roles: Vec<Role> = doc.statements().map(|s| s.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::Premise,
                Role::Premise,
                Role::Intermediate,
                Role::Premise,
                Role::Final
            ]
        );
    }

    #[test]
    fn test_last_statement_is_final_even_without_separator() {
        let doc = build("(1) First premise.\n(2) Second premise.");
        let roles: Vec<Role> = doc.statements().map(|s| s.role).collect();
        assert_eq!(roles, vec![Role::Premise, Role::Final]);
    }

    #[test]
    fn test_structured_separator_yaml_is_decoded() {
        let doc = build("(1) P.\n-- {uses: [1], from: [1]} --\n(2) C.");
        let inference = doc.inferences().next().expect("missing inference");
        let data = inference.data.as_ref().expect("missing data");
        assert_eq!(data.from, vec![1]);
    }

    #[test]
    fn test_edge_line_is_rejected_in_argument() {
        let source = "(1) P.\n    <+ <A>: Not allowed.\n-----\n(2) C.";
        let err = build_argument(&classify_lines(source).expect("classify failed"))
            .expect_err("should fail");
        assert_eq!(err.line, 2);
    }
}
