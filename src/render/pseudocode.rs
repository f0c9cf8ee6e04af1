use super::{
    assignment_statement, condition_expr, input_variables, output_variables, Formatter,
};
use crate::flow::Flow;
use crate::index::ElementRef;
use crate::tree::{NodeKind, ParseTreeNode};
use itertools::Itertools;

/// Renders a parse tree as plain, indentation-structured pseudocode with
/// kind-prefixed statements.
pub struct PseudocodeFormatter;

impl Formatter for PseudocodeFormatter {
    fn render(&self, flow: &Flow, root: &ParseTreeNode<'_>) -> String {
        let mut out = String::new();

        let name = flow.label.as_deref().unwrap_or("main");
        let inputs = input_variables(flow)
            .iter()
            .map(|v| v.name.as_str())
            .join(", ");
        if inputs.is_empty() {
            out.push_str(&format!("FLOW: {}\n", name));
        } else {
            out.push_str(&format!("FLOW: {} (in: {})\n", name, inputs));
        }

        for child in &root.children {
            write_node(child, 1, &mut out);
        }

        let outputs = output_variables(flow)
            .iter()
            .map(|v| v.name.as_str())
            .join(", ");
        out.push_str(&format!("RETURN [{}]\n", outputs));
        out
    }
}

fn pad(depth: usize) -> String {
    "  ".repeat(depth)
}

fn write_node(node: &ParseTreeNode<'_>, depth: usize, out: &mut String) {
    match (node.kind, node.element) {
        (NodeKind::ActionCall, Some(ElementRef::ActionCall(call))) => {
            let parameters = call
                .input_parameters
                .as_slice()
                .iter()
                .map(|p| {
                    let value = p
                        .value
                        .as_ref()
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "null".to_string());
                    format!("{}={}", p.name, value)
                })
                .join(", ");
            if parameters.is_empty() {
                out.push_str(&format!("{}APEX CALL: {}\n", pad(depth), call.name));
            } else {
                out.push_str(&format!(
                    "{}APEX CALL: {}({})\n",
                    pad(depth),
                    call.name,
                    parameters
                ));
            }
        }
        (NodeKind::Screen, _) => {
            out.push_str(&format!(
                "{}SCREEN: {}\n",
                pad(depth),
                node.element_name().unwrap_or("unknown")
            ));
        }
        (NodeKind::Assignment, Some(ElementRef::Assignment(assignment))) => {
            out.push_str(&format!("{}ASSIGNMENT: {}\n", pad(depth), assignment.name));
            for item in assignment.assignment_items.as_slice() {
                out.push_str(&format!("{}{}\n", pad(depth + 1), assignment_statement(item)));
            }
        }
        (NodeKind::Subflow, Some(ElementRef::Subflow(subflow))) => {
            match subflow.flow_name.as_deref() {
                Some(flow_name) => out.push_str(&format!(
                    "{}SUBFLOW: {} -> {}\n",
                    pad(depth),
                    subflow.name,
                    flow_name
                )),
                None => out.push_str(&format!("{}SUBFLOW: {}\n", pad(depth), subflow.name)),
            }
        }
        (NodeKind::Loop, Some(ElementRef::Loop(l))) => {
            let collection = l.collection_reference.as_deref().unwrap_or("[]");
            out.push_str(&format!(
                "{}for {} in {}:  # {}\n",
                pad(depth),
                l.name,
                collection,
                l.iteration_order
            ));
            for child in &node.children {
                write_node(child, depth + 1, out);
            }
        }
        (NodeKind::Decision, _) => {
            let mut opened = false;
            for child in &node.children {
                match (child.kind, child.element) {
                    (NodeKind::Case, Some(ElementRef::Rule(rule))) => {
                        let keyword = if opened { "elif" } else { "if" };
                        let comment = rule
                            .label
                            .as_deref()
                            .map(|l| format!("  # {}", l))
                            .unwrap_or_default();
                        out.push_str(&format!(
                            "{}{} ({}):{}\n",
                            pad(depth),
                            keyword,
                            condition_expr(rule),
                            comment
                        ));
                        for grandchild in &child.children {
                            write_node(grandchild, depth + 1, out);
                        }
                        opened = true;
                    }
                    (NodeKind::DefaultOutcome, _) => {
                        out.push_str(&format!("{}else:\n", pad(depth)));
                        for grandchild in &child.children {
                            write_node(grandchild, depth + 1, out);
                        }
                    }
                    _ => write_node(child, depth, out),
                }
            }
        }
        (NodeKind::Try, _) => {
            out.push_str(&format!("{}try:\n", pad(depth)));
            for child in &node.children {
                write_node(child, depth + 1, out);
            }
        }
        (NodeKind::Except, _) => {
            out.push_str(&format!("{}except:\n", pad(depth)));
            for child in &node.children {
                write_node(child, depth + 1, out);
            }
        }
        (NodeKind::AlreadyVisited, _) => {
            out.push_str(&format!(
                "{}CALL: {}\n",
                pad(depth),
                node.element_name().unwrap_or("unknown")
            ));
        }
        (NodeKind::Other, Some(ElementRef::Other { element, kind })) => {
            out.push_str(&format!("{}{}: {}\n", pad(depth), kind, element.name));
        }
        _ => {
            out.push_str(&format!(
                "{}{}\n",
                pad(depth),
                node.element_name().unwrap_or("unknown")
            ));
        }
    }
}
