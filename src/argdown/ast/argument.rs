//! Individual argument document
//!
//! A premise-conclusion argument is a linear document: an optional preamble
//! (`<Title>: gist`), then numbered statements with inference separators
//! between premise runs and their conclusions.
//!
//! Role assignment and the premise-set heuristic live here rather than in the
//! parser so that strategies can ask structural questions (`which statements
//! feed the final conclusion?`) without re-deriving them.

use crate::argdown::ast::map::StrayComment;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;

/// `(n)` references inside inference rule text, e.g. `-- from (1) and (4) --`.
static NUM_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+)\)").expect("num ref pattern"));

/// The argument's title and gist line, `<Title>: gist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preamble {
    pub label: String,
    pub text: String,
    pub yaml: Option<String>,
    pub comment: Option<String>,
}

impl Preamble {
    pub fn render_body(&self) -> String {
        if self.text.is_empty() {
            format!("<{}>", self.label)
        } else {
            format!("<{}>: {}", self.label, self.text)
        }
    }
}

/// Role of a numbered statement in the argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Premise,
    Intermediate,
    Final,
}

/// A numbered statement `(n) text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The number as written in the source.
    pub number: u32,
    pub text: String,
    pub yaml: Option<String>,
    pub comment: Option<String>,
    pub role: Role,
    pub line_number: usize,
}

/// Structured inference data carried as inline YAML on a separator line,
/// `{uses: [1, 2], with: "modus ponens", from: [3]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct InferenceData {
    #[serde(default)]
    pub uses: Vec<u32>,
    #[serde(rename = "with", default)]
    pub with_rule: Option<String>,
    #[serde(default)]
    pub from: Vec<u32>,
}

/// An inference separator: either a bare `-----` or `-- rule text --`,
/// optionally carrying structured YAML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    pub rule_text: Option<String>,
    pub yaml: Option<String>,
    pub data: Option<InferenceData>,
    pub line_number: usize,
}

impl Inference {
    /// Whether this separator carries any human-readable rule information.
    pub fn has_info(&self) -> bool {
        self.rule_text.is_some()
    }
}

/// One item of the document body, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgItem {
    Statement(Statement),
    Inference(Inference),
}

/// A parsed premise-conclusion argument.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArgumentDoc {
    pub preamble: Option<Preamble>,
    pub items: Vec<ArgItem>,
    /// Standalone comments, anchored to the body item they follow (`after`
    /// is an index into [`ArgumentDoc::items`]; `None` puts the comment at
    /// the top of the document).
    pub comments: Vec<StrayComment>,
}

impl ArgumentDoc {
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.items.iter().filter_map(|item| match item {
            ArgItem::Statement(s) => Some(s),
            ArgItem::Inference(_) => None,
        })
    }

    pub fn inferences(&self) -> impl Iterator<Item = &Inference> {
        self.items.iter().filter_map(|item| match item {
            ArgItem::Inference(i) => Some(i),
            ArgItem::Statement(_) => None,
        })
    }

    pub fn statement_by_number(&self, number: u32) -> Option<&Statement> {
        self.statements().find(|s| s.number == number)
    }

    pub fn final_conclusion(&self) -> Option<&Statement> {
        self.statements().find(|s| s.role == Role::Final)
    }

    pub fn premises(&self) -> Vec<&Statement> {
        self.statements().filter(|s| s.role == Role::Premise).collect()
    }

    pub fn has_intermediate_conclusions(&self) -> bool {
        self.statements().any(|s| s.role == Role::Intermediate)
    }

    pub fn has_inference_info(&self) -> bool {
        self.inferences().any(|i| i.has_info())
    }

    pub fn has_yaml(&self) -> bool {
        self.preamble.as_ref().map_or(false, |p| p.yaml.is_some())
            || self.items.iter().any(|item| match item {
                ArgItem::Statement(s) => s.yaml.is_some(),
                ArgItem::Inference(i) => i.yaml.is_some(),
            })
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
            || self.preamble.as_ref().map_or(false, |p| p.comment.is_some())
            || self.items.iter().any(|item| match item {
                ArgItem::Statement(s) => s.comment.is_some(),
                ArgItem::Inference(_) => false,
            })
    }

    /// Map each conclusion's number to the numbers of the statements its
    /// inference draws on.
    ///
    /// Sources, in order of preference: the separator's structured YAML
    /// (`from` and `uses` lists), `(n)` references in the rule text, and
    /// finally the contiguous run of statements between the previous
    /// separator (or document start) and this one. The fallback is a
    /// documented heuristic; inputs with inline separators but neither YAML
    /// nor rule-text references may attribute premises too narrowly.
    pub fn inference_inputs(&self) -> BTreeMap<u32, Vec<u32>> {
        let mut inputs = BTreeMap::new();
        let mut run: Vec<u32> = Vec::new();
        let mut pending: Option<Vec<u32>> = None;

        for item in &self.items {
            match item {
                ArgItem::Statement(statement) => {
                    if let Some(numbers) = pending.take() {
                        inputs.insert(statement.number, numbers);
                        run.clear();
                    }
                    run.push(statement.number);
                }
                ArgItem::Inference(inference) => {
                    let mut numbers: Vec<u32> = Vec::new();
                    if let Some(data) = &inference.data {
                        numbers.extend(data.from.iter().copied());
                        numbers.extend(data.uses.iter().copied());
                        numbers.sort_unstable();
                        numbers.dedup();
                    }
                    if numbers.is_empty() {
                        if let Some(rule_text) = &inference.rule_text {
                            for caps in NUM_REF.captures_iter(rule_text) {
                                if let Ok(n) = caps[1].parse::<u32>() {
                                    numbers.push(n);
                                }
                            }
                            numbers.sort_unstable();
                            numbers.dedup();
                        }
                    }
                    if numbers.is_empty() {
                        numbers = run.clone();
                    }
                    pending = Some(numbers);
                }
            }
        }
        inputs
    }
}
