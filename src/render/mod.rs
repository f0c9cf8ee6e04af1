//! Formatters that turn a parse tree into textual pseudocode.
//!
//! A formatter implements one rendering rule per [`NodeKind`](crate::tree::NodeKind);
//! the tree contract is shared, so multiple output styles can coexist. Rendering
//! is presentation only and never fails: unrecognized shapes degrade to a bare
//! name statement.

pub mod js;
pub mod pseudocode;

pub use js::JsFormatter;
pub use pseudocode::PseudocodeFormatter;

use crate::flow::{AssignmentItem, ComparisonOperator, Condition, Flow, Rule, Variable};
use crate::tree::ParseTreeNode;
use itertools::Itertools;

/// The render contract: one conforming entry point per formatter.
pub trait Formatter {
    fn render(&self, flow: &Flow, root: &ParseTreeNode<'_>) -> String;
}

pub(crate) fn input_variables(flow: &Flow) -> Vec<&Variable> {
    flow.variables.as_slice().iter().filter(|v| v.is_input).collect()
}

pub(crate) fn output_variables(flow: &Flow) -> Vec<&Variable> {
    flow.variables.as_slice().iter().filter(|v| v.is_output).collect()
}

pub(crate) fn local_variables(flow: &Flow) -> Vec<&Variable> {
    flow.variables
        .as_slice()
        .iter()
        .filter(|v| !v.is_input)
        .collect()
}

/// One assignment item as a statement: `reference <op> value;`.
pub(crate) fn assignment_statement(item: &AssignmentItem) -> String {
    let value = item
        .value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "null".to_string());
    match item.operator.symbol() {
        Some(symbol) => format!("{} {} {};", item.assign_to_reference, symbol, value),
        None => format!("{} {} {};", item.assign_to_reference, item.operator, value),
    }
}

/// A rule's whole condition as one boolean expression, honoring the rule's
/// `and`/`or`/custom condition logic.
pub(crate) fn condition_expr(rule: &Rule) -> String {
    let conditions: Vec<String> = rule
        .conditions
        .as_slice()
        .iter()
        .map(condition_text)
        .collect();
    if conditions.is_empty() {
        return "true".to_string();
    }
    let logic = rule.condition_logic.as_deref().unwrap_or("and");
    match logic.to_ascii_lowercase().as_str() {
        "and" => conditions.iter().join(" && "),
        "or" => conditions.iter().join(" || "),
        _ => substitute_positions(logic, &conditions),
    }
}

fn condition_text(condition: &Condition) -> String {
    let left = &condition.left_value_reference;
    if let Some(symbol) = condition.operator.symbol() {
        let right = condition
            .right_value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "null".to_string());
        return format!("{} {} {}", left, symbol, right);
    }
    if condition.operator == ComparisonOperator::IsNull {
        let negated = matches!(
            &condition.right_value,
            Some(v) if v.boolean_value == Some(false)
        );
        return if negated {
            format!("{} != null", left)
        } else {
            format!("{} == null", left)
        };
    }
    match &condition.right_value {
        Some(right) => format!("{}({}, {})", condition.operator, left, right),
        None => format!("{}({})", condition.operator, left),
    }
}

/// Expands a custom condition-logic expression (`"1 AND (2 OR 3)"`) by
/// substituting 1-based positions with the formatted conditions and mapping
/// the boolean keywords to their symbolic form.
fn substitute_positions(logic: &str, conditions: &[String]) -> String {
    let mut out = String::new();
    let mut chars = logic.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            let mut digits = String::new();
            digits.push(c);
            while let Some(d) = chars.peek().copied().filter(|d| d.is_ascii_digit()) {
                digits.push(d);
                chars.next();
            }
            match digits.parse::<usize>() {
                Ok(position) if (1..=conditions.len()).contains(&position) => {
                    out.push_str(&conditions[position - 1]);
                }
                _ => out.push_str(&digits),
            }
        } else if c.is_ascii_alphabetic() {
            let mut word = String::new();
            word.push(c);
            while let Some(d) = chars.peek().copied().filter(|d| d.is_ascii_alphabetic()) {
                word.push(d);
                chars.next();
            }
            match word.to_ascii_uppercase().as_str() {
                "AND" => out.push_str("&&"),
                "OR" => out.push_str("||"),
                "NOT" => out.push('!'),
                _ => out.push_str(&word),
            }
        } else {
            out.push(c);
        }
    }
    out
}
