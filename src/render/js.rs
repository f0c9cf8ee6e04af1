use super::{
    assignment_statement, condition_expr, input_variables, local_variables, output_variables,
    Formatter,
};
use crate::flow::{ActionCall, Assignment, Decision, Flow, Loop, Screen, Subflow, Variable};
use crate::index::ElementRef;
use crate::tree::{NodeKind, ParseTreeNode};
use ahash::AHashSet;
use itertools::Itertools;

/// Renders a parse tree as JS-like pseudocode.
///
/// Every element that produced an `AlreadyVisited` marker anywhere in the
/// tree is hoisted into a named function emitted ahead of the main body, and
/// every occurrence (the first real one included) becomes a call to it. The
/// structurer is unaware of this; it is purely a rendering optimization.
pub struct JsFormatter;

impl Formatter for JsFormatter {
    fn render(&self, flow: &Flow, root: &ParseTreeNode<'_>) -> String {
        let mut hoisted = AHashSet::new();
        root.walk(&mut |node| {
            if node.kind == NodeKind::AlreadyVisited {
                if let Some(name) = node.element_name() {
                    hoisted.insert(name.to_string());
                }
            }
        });

        let mut renderer = JsRenderer {
            hoisted,
            functions: Vec::new(),
        };
        let body = renderer.render_children(&root.children, 1);

        let mut out = String::new();
        if flow.label.is_some() || flow.description.is_some() {
            out.push_str("/**\n");
            if let Some(label) = &flow.label {
                out.push_str(&format!("  {}\n", label));
            }
            if let Some(description) = &flow.description {
                out.push_str(&format!("  {}\n", description));
            }
            out.push_str(" **/\n");
        }

        let inputs = input_variables(flow)
            .iter()
            .map(|v| typed_name(v))
            .join(", ");
        out.push_str(&format!("function main({}) {{\n", inputs));

        let locals = local_variables(flow);
        for variable in &locals {
            out.push_str(&format!("  let {} = null;\n", typed_name(variable)));
        }
        if !locals.is_empty() {
            out.push('\n');
        }

        for (name, function_body) in &renderer.functions {
            out.push_str(&format!("  function {}() {{\n", name));
            out.push_str(function_body);
            out.push_str("\n  }\n\n");
        }

        if !body.is_empty() {
            out.push_str(&body);
            out.push('\n');
        }

        let outputs = output_variables(flow)
            .iter()
            .map(|v| v.name.as_str())
            .join(", ");
        out.push_str(&format!("  return [{}];\n}}\n", outputs));
        out
    }
}

fn typed_name(variable: &Variable) -> String {
    match &variable.data_type {
        Some(data_type) => format!("{}: {}", variable.name, data_type),
        None => variable.name.clone(),
    }
}

fn pad(depth: usize) -> String {
    "  ".repeat(depth)
}

struct JsRenderer {
    hoisted: AHashSet<String>,
    functions: Vec<(String, String)>,
}

impl JsRenderer {
    fn render_children(&mut self, children: &[ParseTreeNode<'_>], depth: usize) -> String {
        let mut chunks = Vec::new();
        let mut i = 0;
        while i < children.len() {
            let child = &children[i];
            let next_is_except = children
                .get(i + 1)
                .is_some_and(|n| n.kind == NodeKind::Except);
            if child.kind == NodeKind::Try && next_is_except {
                let try_body = self.render_children(&child.children, depth + 1);
                let catch_body = self.render_children(&children[i + 1].children, depth + 1);
                let mut chunk = format!("{}try {{\n", pad(depth));
                if !try_body.is_empty() {
                    chunk.push_str(&try_body);
                    chunk.push('\n');
                }
                chunk.push_str(&format!("{}}} catch (e) {{\n", pad(depth)));
                if !catch_body.is_empty() {
                    chunk.push_str(&catch_body);
                    chunk.push('\n');
                }
                chunk.push_str(&format!("{}}}", pad(depth)));
                chunks.push(chunk);
                i += 2;
                continue;
            }
            chunks.push(self.render_node(child, depth));
            i += 1;
        }
        chunks.join("\n")
    }

    fn render_node(&mut self, node: &ParseTreeNode<'_>, depth: usize) -> String {
        if hoistable(node.kind) {
            if let Some(name) = node.element_name() {
                if self.hoisted.contains(name) {
                    if !self.functions.iter().any(|(n, _)| n == name) {
                        let function_body = self.render_statement(node, 2);
                        self.functions.push((name.to_string(), function_body));
                    }
                    return format!("{}{}();", pad(depth), name);
                }
            }
        }
        self.render_statement(node, depth)
    }

    fn render_statement(&mut self, node: &ParseTreeNode<'_>, depth: usize) -> String {
        match (node.kind, node.element) {
            (NodeKind::ActionCall, Some(ElementRef::ActionCall(call))) => {
                self.action_call_statement(call, depth)
            }
            (NodeKind::Screen, Some(ElementRef::Screen(screen))) => {
                self.screen_statement(screen, depth)
            }
            (NodeKind::Assignment, Some(ElementRef::Assignment(assignment))) => {
                self.assignment_statement_block(assignment, depth)
            }
            (NodeKind::Subflow, Some(ElementRef::Subflow(subflow))) => {
                self.subflow_statement(subflow, depth)
            }
            (NodeKind::Loop, Some(ElementRef::Loop(l))) => self.loop_block(node, l, depth),
            (NodeKind::Decision, Some(ElementRef::Decision(decision))) => {
                self.decision_block(node, decision, depth)
            }
            (NodeKind::Try, _) => {
                // A lone try without its except sibling; render_children
                // normally pairs them.
                let body = self.render_children(&node.children, depth + 1);
                format!("{}try {{\n{}\n{}}}", pad(depth), body, pad(depth))
            }
            (NodeKind::Except, _) => {
                let body = self.render_children(&node.children, depth + 1);
                format!("{}catch (e) {{\n{}\n{}}}", pad(depth), body, pad(depth))
            }
            (NodeKind::AlreadyVisited, _) => {
                format!("{}{}();", pad(depth), node.element_name().unwrap_or("unknown"))
            }
            (NodeKind::Other, Some(ElementRef::Other { element, kind })) => {
                let label = element.label.as_deref().unwrap_or(&element.name);
                format!("{}{}(); // {}: {}", pad(depth), element.name, kind, label)
            }
            _ => format!("{}{}();", pad(depth), node.element_name().unwrap_or("unknown")),
        }
    }

    fn action_call_statement(&mut self, call: &ActionCall, depth: usize) -> String {
        let action = call.action_name.as_deref().unwrap_or(&call.name);
        let qualified = match &call.action_type {
            Some(action_type) => format!("{}.{}", action_type, action),
            None => action.to_string(),
        };
        let parameters = call.input_parameters.as_slice();
        if parameters.is_empty() {
            return format!("{}{}();", pad(depth), qualified);
        }
        let mut stmt = format!("{}{}({{\n", pad(depth), qualified);
        for parameter in parameters {
            let value = parameter
                .value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "null".to_string());
            stmt.push_str(&format!("{}  {}: {},\n", pad(depth), parameter.name, value));
        }
        stmt.push_str(&format!("{}}});", pad(depth)));
        stmt
    }

    fn screen_statement(&mut self, screen: &Screen, depth: usize) -> String {
        let label = screen.label.as_deref().unwrap_or(&screen.name);
        format!("{}{}.show(); // Show {}", pad(depth), screen.name, label)
    }

    fn assignment_statement_block(&mut self, assignment: &Assignment, depth: usize) -> String {
        let mut lines = Vec::new();
        if let Some(label) = &assignment.label {
            lines.push(format!("{}// {}", pad(depth), label));
        }
        let items = assignment.assignment_items.as_slice();
        if items.is_empty() {
            lines.push(format!("{}{}();", pad(depth), assignment.name));
        }
        for item in items {
            lines.push(format!("{}{}", pad(depth), assignment_statement(item)));
        }
        lines.join("\n")
    }

    fn subflow_statement(&mut self, subflow: &Subflow, depth: usize) -> String {
        let flow_name = subflow.flow_name.as_deref().unwrap_or(&subflow.name);
        format!("{}call_{}(); // {}", pad(depth), subflow.name, flow_name)
    }

    fn loop_block(&mut self, node: &ParseTreeNode<'_>, l: &Loop, depth: usize) -> String {
        let mut out = String::new();
        if let Some(label) = &l.label {
            out.push_str(&format!("{}// {}\n", pad(depth), label));
        }
        let item = l.assign_next_value_to_reference.as_deref().unwrap_or(&l.name);
        let collection = l.collection_reference.as_deref().unwrap_or("[]");
        out.push_str(&format!(
            "{}for (let {} of {} /*{}*/) {{\n",
            pad(depth),
            item,
            collection,
            l.iteration_order
        ));
        let body = self.render_children(&node.children, depth + 1);
        if !body.is_empty() {
            out.push_str(&body);
            out.push('\n');
        }
        out.push_str(&format!("{}}}", pad(depth)));
        out
    }

    fn decision_block(
        &mut self,
        node: &ParseTreeNode<'_>,
        decision: &Decision,
        depth: usize,
    ) -> String {
        let mut out = String::new();
        if let Some(label) = &decision.label {
            match &decision.description {
                Some(description) => {
                    out.push_str(&format!("{}// {}. {}\n", pad(depth), label, description));
                }
                None => out.push_str(&format!("{}// {}\n", pad(depth), label)),
            }
        }

        let mut opened = false;
        for child in &node.children {
            match (child.kind, child.element) {
                (NodeKind::Case, Some(ElementRef::Rule(rule))) => {
                    let keyword = if opened { "} else if" } else { "if" };
                    let comment = rule
                        .label
                        .as_deref()
                        .map(|l| format!(" // {}", l))
                        .unwrap_or_default();
                    out.push_str(&format!(
                        "{}{} ({}) {{{}\n",
                        pad(depth),
                        keyword,
                        condition_expr(rule),
                        comment
                    ));
                    let body = self.render_children(&child.children, depth + 1);
                    if !body.is_empty() {
                        out.push_str(&body);
                        out.push('\n');
                    }
                    opened = true;
                }
                (NodeKind::DefaultOutcome, _) => {
                    let keyword = if opened { "} else" } else { "else" };
                    let comment = decision
                        .default_connector_label
                        .as_deref()
                        .map(|l| format!(" // {}", l))
                        .unwrap_or_default();
                    out.push_str(&format!("{}{} {{{}\n", pad(depth), keyword, comment));
                    let body = self.render_children(&child.children, depth + 1);
                    if !body.is_empty() {
                        out.push_str(&body);
                        out.push('\n');
                    }
                    opened = true;
                }
                _ => {
                    out.push_str(&self.render_node(child, depth));
                    out.push('\n');
                }
            }
        }
        if opened {
            out.push_str(&format!("{}}}", pad(depth)));
        }
        out
    }
}

fn hoistable(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::ActionCall
            | NodeKind::Assignment
            | NodeKind::Screen
            | NodeKind::Subflow
            | NodeKind::Loop
            | NodeKind::Decision
            | NodeKind::Other
    )
}
