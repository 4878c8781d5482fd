//! View serializer
//!
//! Converts a tree plus a view into Argdown text. Lines are rebuilt from
//! their stored parts (edge token, proposition, raw YAML, comment text), so
//! output spacing is always canonical: four spaces per depth level, one space
//! before inline YAML, ` // ` before inline comments. Together with the
//! blank-line normalization performed at parse time this is what makes the
//! final step of every trace reproduce the input byte-for-byte.

use crate::argdown::ast::argument::{ArgItem, ArgumentDoc, Inference, Statement};
use crate::argdown::ast::map::{MapNode, MapTree};
use crate::argdown::ast::{ArgdownTree, CotError};
use crate::argdown::lexing::EdgeKind;
use crate::argdown::parsing::parse;
use crate::argdown::strategies::phrasings::placeholder_text;
use crate::argdown::strategies::view::{ArgElement, ArgumentView, MapView};

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Render a map view into Argdown text.
pub fn render_map(map: &MapTree, view: &MapView) -> String {
    let mut lines: Vec<String> = Vec::new();

    if view.include_comments {
        push_map_comments(map, &mut lines, None);
    }

    for node in &map.nodes {
        if view.pending_markers.contains(&node.id) {
            lines.push(format!(
                "{}?? {}",
                indent(node.depth),
                node.display_label()
            ));
            continue;
        }
        if !view.visible.contains(&node.id) {
            continue;
        }
        lines.push(render_node_line(node, view));
        if view.include_comments {
            push_map_comments(map, &mut lines, Some(node.id));
        }
        if let Some((_, stage)) = view
            .placeholders
            .iter()
            .find(|(id, _)| *id == node.id)
        {
            lines.push(format!(
                "{}// {}",
                indent(node.depth + 1),
                placeholder_text(*stage)
            ));
        }
    }

    lines.join("\n")
}

fn push_map_comments(map: &MapTree, lines: &mut Vec<String>, after: Option<usize>) {
    for comment in map.comments.iter().filter(|c| c.after == after) {
        lines.push(format!("{}{}", " ".repeat(comment.indent), comment.text));
    }
}

fn render_node_line(node: &MapNode, view: &MapView) -> String {
    let override_entry = view.edge_overrides.get(&node.id);
    let edge: Option<EdgeKind> = override_entry.map(|o| o.edge).or(node.edge);

    let mut line = indent(node.depth);
    if node.depth > 0 {
        if let Some(edge) = edge {
            line.push_str(edge.as_token());
            line.push(' ');
        }
    }
    line.push_str(&node.spec.render());
    if let Some(note) = override_entry.and_then(|o| o.note.as_deref()) {
        line.push(' ');
        line.push_str(note);
    }
    if view.include_yaml {
        if let Some(yaml) = &node.yaml {
            line.push(' ');
            line.push_str(yaml);
        }
    }
    if view.include_comments {
        if let Some(comment) = &node.comment {
            line.push_str(" // ");
            line.push_str(comment);
        }
    }
    line
}

/// Render an argument view into Argdown text.
pub fn render_argument(doc: &ArgumentDoc, view: &ArgumentView) -> String {
    let mut lines: Vec<String> = Vec::new();

    for element in &view.elements {
        match element {
            ArgElement::Preamble => {
                if let Some(preamble) = &doc.preamble {
                    let mut line = preamble.render_body();
                    if view.include_yaml {
                        if let Some(yaml) = &preamble.yaml {
                            line.push(' ');
                            line.push_str(yaml);
                        }
                    }
                    if view.include_comments {
                        if let Some(comment) = &preamble.comment {
                            line.push_str(" // ");
                            line.push_str(comment);
                        }
                    }
                    lines.push(line);
                }
            }
            ArgElement::Blank => lines.push(String::new()),
            ArgElement::Statement {
                display_number,
                number,
            } => {
                if let Some(statement) = doc.statement_by_number(*number) {
                    lines.push(render_statement(statement, *display_number, view));
                }
            }
            ArgElement::Placeholder {
                display_number,
                stage,
            } => {
                lines.push(format!(
                    "({}) // {}",
                    display_number,
                    placeholder_text(*stage)
                ));
            }
            ArgElement::Separator => lines.push("-----".to_string()),
            ArgElement::Inference { item_index } => {
                if let Some(ArgItem::Inference(inference)) = doc.items.get(*item_index) {
                    lines.push(render_inference(inference, view));
                }
            }
            ArgElement::Comment { comment_index } => {
                if let Some(comment) = doc.comments.get(*comment_index) {
                    lines.push(format!("{}{}", " ".repeat(comment.indent), comment.text));
                }
            }
        }
    }

    lines.join("\n")
}

fn render_statement(statement: &Statement, display_number: u32, view: &ArgumentView) -> String {
    let mut line = format!("({}) {}", display_number, statement.text);
    if view.include_yaml {
        if let Some(yaml) = &statement.yaml {
            line.push(' ');
            line.push_str(yaml);
        }
    }
    if view.include_comments {
        if let Some(comment) = &statement.comment {
            line.push_str(" // ");
            line.push_str(comment);
        }
    }
    line
}

fn render_inference(inference: &Inference, view: &ArgumentView) -> String {
    let mut line = match &inference.rule_text {
        Some(rule_text) => format!("-- {} --", rule_text),
        None => "-----".to_string(),
    };
    if view.include_yaml {
        if let Some(yaml) = &inference.yaml {
            line.push(' ');
            line.push_str(yaml);
        }
    }
    line
}

/// The documented normalization of an Argdown snippet: parse it and render
/// the full view. Outer blank lines are trimmed, interior blank runs
/// collapse (maps drop them entirely, arguments keep the single structural
/// blank after the preamble), trailing whitespace goes away, and map indents
/// are rewritten at four spaces per level. The final step of every trace
/// equals this form of the input.
pub fn normalize_snippet(source: &str) -> Result<String, CotError> {
    match parse(source)? {
        ArgdownTree::Map(map) => Ok(render_map(&map, &MapView::full(&map))),
        ArgdownTree::Argument(doc) => {
            Ok(render_argument(&doc, &ArgumentView::full(&doc, true, true, true)))
        }
    }
}
