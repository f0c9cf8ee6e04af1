//! Common test utilities for building decoded flow definitions.
use kaidoku::prelude::*;

#[allow(dead_code)]
pub fn connector(target: &str) -> Connector {
    Connector {
        target_reference: target.to_string(),
        is_go_to: false,
    }
}

/// A flow whose start connector targets `entry`, with no other entry points.
#[allow(dead_code)]
pub fn flow_starting_at(entry: &str) -> Flow {
    Flow {
        start: Some(Start {
            connector: Some(connector(entry)),
            scheduled_paths: OneOrMany::default(),
        }),
        ..Flow::default()
    }
}

#[allow(dead_code)]
pub fn screen(name: &str, next: Option<&str>) -> Screen {
    Screen {
        name: name.to_string(),
        label: Some(name.replace('_', " ")),
        description: None,
        connector: next.map(connector),
    }
}

#[allow(dead_code)]
pub fn action_call(name: &str, next: Option<&str>, fault: Option<&str>) -> ActionCall {
    ActionCall {
        name: name.to_string(),
        label: None,
        description: None,
        action_name: Some(name.to_string()),
        action_type: Some("apex".to_string()),
        input_parameters: OneOrMany::default(),
        connector: next.map(connector),
        fault_connector: fault.map(connector),
    }
}

#[allow(dead_code)]
pub fn assignment(name: &str, items: Vec<AssignmentItem>, next: Option<&str>) -> Assignment {
    Assignment {
        name: name.to_string(),
        label: None,
        description: None,
        assignment_items: OneOrMany::Many(items),
        connector: next.map(connector),
    }
}

#[allow(dead_code)]
pub fn assign_item(lhs: &str, operator: AssignmentOperator, value: ValueSpec) -> AssignmentItem {
    AssignmentItem {
        assign_to_reference: lhs.to_string(),
        operator,
        value: Some(value),
    }
}

#[allow(dead_code)]
pub fn number(value: f64) -> ValueSpec {
    ValueSpec {
        number_value: Some(value),
        ..ValueSpec::default()
    }
}

#[allow(dead_code)]
pub fn string(value: &str) -> ValueSpec {
    ValueSpec {
        string_value: Some(value.to_string()),
        ..ValueSpec::default()
    }
}

#[allow(dead_code)]
pub fn reference(value: &str) -> ValueSpec {
    ValueSpec {
        element_reference: Some(value.to_string()),
        ..ValueSpec::default()
    }
}

/// A rule with a single `left <op> right` condition.
#[allow(dead_code)]
pub fn rule(
    name: &str,
    left: &str,
    operator: ComparisonOperator,
    right: ValueSpec,
    next: Option<&str>,
) -> Rule {
    Rule {
        name: name.to_string(),
        label: Some(name.replace('_', " ")),
        description: None,
        condition_logic: Some("and".to_string()),
        conditions: OneOrMany::Many(vec![Condition {
            left_value_reference: left.to_string(),
            operator,
            right_value: Some(right),
        }]),
        connector: next.map(connector),
    }
}

#[allow(dead_code)]
pub fn decision(name: &str, rules: Vec<Rule>, default: Option<&str>) -> Decision {
    Decision {
        name: name.to_string(),
        label: Some(name.replace('_', " ")),
        description: None,
        rules: OneOrMany::Many(rules),
        default_connector: default.map(connector),
        default_connector_label: default.map(|_| "Default Outcome".to_string()),
    }
}

#[allow(dead_code)]
pub fn flow_loop(name: &str, collection: &str, body: Option<&str>, done: Option<&str>) -> Loop {
    Loop {
        name: name.to_string(),
        label: Some(name.replace('_', " ")),
        description: None,
        collection_reference: Some(collection.to_string()),
        iteration_order: IterationOrder::Asc,
        assign_next_value_to_reference: None,
        next_value_connector: body.map(connector),
        no_more_values_connector: done.map(connector),
    }
}

#[allow(dead_code)]
pub fn variable(name: &str, data_type: &str, is_input: bool, is_output: bool) -> Variable {
    Variable {
        name: name.to_string(),
        data_type: Some(data_type.to_string()),
        object_type: None,
        is_collection: false,
        is_input,
        is_output,
    }
}

/// The kinds of a node's children, for order assertions.
#[allow(dead_code)]
pub fn child_kinds(node: &ParseTreeNode<'_>) -> Vec<NodeKind> {
    node.children.iter().map(|c| c.kind).collect()
}

/// Counts nodes of `kind` referencing `name` anywhere in the tree.
#[allow(dead_code)]
pub fn count_nodes(root: &ParseTreeNode<'_>, kind: NodeKind, name: &str) -> usize {
    let mut count = 0;
    root.walk(&mut |node| {
        if node.kind == kind && node.element_name() == Some(name) {
            count += 1;
        }
    });
    count
}
