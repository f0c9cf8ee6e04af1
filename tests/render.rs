//! Tests for the formatters: statement shapes, branch ordering, and the
//! hoisting of revisited blocks.
mod common;
use common::*;
use kaidoku::prelude::*;

fn render_js(flow: &Flow) -> String {
    let root = structure(flow).expect("Failed to structure");
    JsFormatter.render(flow, &root)
}

fn render_plain(flow: &Flow) -> String {
    let root = structure(flow).expect("Failed to structure");
    PseudocodeFormatter.render(flow, &root)
}

#[test]
fn test_assignment_renders_with_symbolic_operator() {
    let mut flow = flow_starting_at("Bump");
    flow.assignments = OneOrMany::One(assignment(
        "Bump",
        vec![assign_item("x", AssignmentOperator::Add, number(5.0))],
        None,
    ));

    let output = render_js(&flow);
    assert!(
        output.contains("x += 5;"),
        "expected `x += 5;` in:\n{}",
        output
    );
}

#[test]
fn test_assignment_operator_fallback_renders_by_name() {
    let mut flow = flow_starting_at("Clear");
    flow.assignments = OneOrMany::One(assignment(
        "Clear",
        vec![assign_item("Items", AssignmentOperator::RemoveAll, reference("Item"))],
        None,
    ));

    let output = render_js(&flow);
    assert!(output.contains("Items RemoveAll Item;"), "got:\n{}", output);
}

#[test]
fn test_decision_renders_as_if_elseif_else_in_rule_order() {
    let mut flow = flow_starting_at("Route");
    flow.decisions = OneOrMany::One(decision(
        "Route",
        vec![
            rule(
                "Is_High",
                "Amount",
                ComparisonOperator::GreaterThan,
                number(100.0),
                Some("High_Screen"),
            ),
            rule(
                "Is_Low",
                "Amount",
                ComparisonOperator::LessThan,
                number(10.0),
                Some("Low_Screen"),
            ),
        ],
        Some("Mid_Screen"),
    ));
    flow.screens = OneOrMany::Many(vec![
        screen("High_Screen", None),
        screen("Low_Screen", None),
        screen("Mid_Screen", None),
    ]);

    let output = render_js(&flow);
    let if_pos = output.find("if (Amount > 100)").expect("missing if");
    let elseif_pos = output
        .find("} else if (Amount < 10)")
        .expect("missing else if");
    let else_pos = output.find("} else {").expect("missing else");
    assert!(if_pos < elseif_pos && elseif_pos < else_pos);

    let high = output.find("High_Screen.show").expect("missing high branch");
    let low = output.find("Low_Screen.show").expect("missing low branch");
    let mid = output.find("Mid_Screen.show").expect("missing default branch");
    assert!(if_pos < high && high < elseif_pos);
    assert!(elseif_pos < low && low < else_pos);
    assert!(else_pos < mid);
}

#[test]
fn test_fault_renders_as_try_catch_without_crossover() {
    let mut flow = flow_starting_at("Do_Work");
    flow.action_calls = OneOrMany::One(action_call(
        "Do_Work",
        Some("Ok_Screen"),
        Some("Fault_Screen"),
    ));
    flow.screens = OneOrMany::Many(vec![
        screen("Ok_Screen", None),
        screen("Fault_Screen", None),
    ]);

    let output = render_js(&flow);
    let try_pos = output.find("try {").expect("missing try");
    let catch_pos = output.find("} catch (e) {").expect("missing catch");
    let ok_pos = output.find("Ok_Screen.show").expect("missing normal path");
    let fault_pos = output.find("Fault_Screen.show").expect("missing fault path");
    assert!(try_pos < ok_pos && ok_pos < catch_pos);
    assert!(catch_pos < fault_pos);
}

#[test]
fn test_revisited_screen_hoists_into_one_function() {
    let mut flow = flow_starting_at("Route");
    flow.decisions = OneOrMany::One(decision(
        "Route",
        vec![
            rule(
                "Is_High",
                "Amount",
                ComparisonOperator::GreaterThan,
                number(100.0),
                Some("Final_Screen"),
            ),
            rule(
                "Is_Low",
                "Amount",
                ComparisonOperator::LessThan,
                number(10.0),
                Some("Final_Screen"),
            ),
        ],
        None,
    ));
    flow.screens = OneOrMany::One(screen("Final_Screen", None));

    let output = render_js(&flow);
    assert_eq!(
        output.matches("function Final_Screen()").count(),
        1,
        "the revisited screen must be hoisted exactly once:\n{}",
        output
    );
    assert_eq!(
        output.matches("Final_Screen();").count(),
        2,
        "both branches must reference the hoisted block:\n{}",
        output
    );
    assert_eq!(output.matches("Final_Screen.show").count(), 1);
}

#[test]
fn test_action_call_renders_input_parameters() {
    let mut flow = flow_starting_at("Query");
    let mut call = action_call("Query", None, None);
    call.input_parameters = OneOrMany::One(InputParameter {
        name: "accountIds".to_string(),
        value: Some(reference("RecordId")),
    });
    flow.action_calls = OneOrMany::One(call);

    let output = render_js(&flow);
    assert!(output.contains("apex.Query({"), "got:\n{}", output);
    assert!(output.contains("accountIds: RecordId,"), "got:\n{}", output);
}

#[test]
fn test_root_renders_header_locals_and_return() {
    let mut flow = flow_starting_at("Done_Screen");
    flow.label = Some("Order Flow".to_string());
    flow.description = Some("Processes one order.".to_string());
    flow.variables = OneOrMany::Many(vec![
        variable("RecordId", "String", true, false),
        variable("Total", "Number", false, true),
        variable("Scratch", "String", false, false),
    ]);
    flow.screens = OneOrMany::One(screen("Done_Screen", None));

    let output = render_js(&flow);
    assert!(output.contains("Order Flow"), "got:\n{}", output);
    assert!(
        output.contains("function main(RecordId: String)"),
        "got:\n{}",
        output
    );
    assert!(output.contains("let Total: Number = null;"), "got:\n{}", output);
    assert!(output.contains("let Scratch: String = null;"), "got:\n{}", output);
    assert!(output.contains("return [Total];"), "got:\n{}", output);
}

#[test]
fn test_loop_renders_collection_and_iteration_order() {
    let mut flow = flow_starting_at("Item_Loop");
    flow.loops = OneOrMany::One(flow_loop(
        "Item_Loop",
        "Selected.rows",
        Some("Add_Item"),
        None,
    ));
    flow.assignments = OneOrMany::One(assignment(
        "Add_Item",
        vec![assign_item("Total", AssignmentOperator::Add, number(1.0))],
        Some("Item_Loop"),
    ));

    let output = render_js(&flow);
    assert!(
        output.contains("for (let Item_Loop of Selected.rows /*Asc*/) {"),
        "got:\n{}",
        output
    );
    assert!(output.contains("Total += 1;"), "got:\n{}", output);
}

#[test]
fn test_custom_condition_logic_substitutes_positions() {
    let mut flow = flow_starting_at("Route");
    let mut branch = rule(
        "Either",
        "A",
        ComparisonOperator::EqualTo,
        number(1.0),
        Some("Done_Screen"),
    );
    branch.condition_logic = Some("1 OR 2".to_string());
    branch.conditions = OneOrMany::Many(vec![
        Condition {
            left_value_reference: "A".to_string(),
            operator: ComparisonOperator::EqualTo,
            right_value: Some(number(1.0)),
        },
        Condition {
            left_value_reference: "B".to_string(),
            operator: ComparisonOperator::EqualTo,
            right_value: Some(number(2.0)),
        },
    ]);
    flow.decisions = OneOrMany::One(decision("Route", vec![branch], None));
    flow.screens = OneOrMany::One(screen("Done_Screen", None));

    let output = render_js(&flow);
    assert!(
        output.contains("if (A == 1 || B == 2)"),
        "got:\n{}",
        output
    );
}

#[test]
fn test_predicate_operator_renders_as_call() {
    let mut flow = flow_starting_at("Route");
    flow.decisions = OneOrMany::One(decision(
        "Route",
        vec![rule(
            "Has_Inc",
            "AccountName",
            ComparisonOperator::Contains,
            string("Inc"),
            Some("Done_Screen"),
        )],
        None,
    ));
    flow.screens = OneOrMany::One(screen("Done_Screen", None));

    let output = render_js(&flow);
    assert!(
        output.contains("if (Contains(AccountName, \"Inc\"))"),
        "got:\n{}",
        output
    );
}

#[test]
fn test_pseudocode_formatter_register() {
    let mut flow = flow_starting_at("Do_Work");
    flow.label = Some("Order Flow".to_string());
    flow.action_calls = OneOrMany::One(action_call(
        "Do_Work",
        Some("Route"),
        None,
    ));
    flow.decisions = OneOrMany::One(decision(
        "Route",
        vec![rule(
            "Is_High",
            "Amount",
            ComparisonOperator::GreaterThan,
            number(100.0),
            Some("High_Screen"),
        )],
        Some("Low_Screen"),
    ));
    flow.screens = OneOrMany::Many(vec![
        screen("High_Screen", None),
        screen("Low_Screen", None),
    ]);

    let output = render_plain(&flow);
    assert!(output.starts_with("FLOW: Order Flow\n"), "got:\n{}", output);
    assert!(output.contains("APEX CALL: Do_Work"), "got:\n{}", output);
    assert!(output.contains("if (Amount > 100):"), "got:\n{}", output);
    assert!(output.contains("else:"), "got:\n{}", output);
    assert!(output.contains("SCREEN: High_Screen"), "got:\n{}", output);
    assert!(output.ends_with("RETURN []\n"), "got:\n{}", output);
}

#[test]
fn test_pseudocode_try_except_register() {
    let mut flow = flow_starting_at("Do_Work");
    flow.action_calls = OneOrMany::One(action_call(
        "Do_Work",
        Some("Ok_Screen"),
        Some("Fault_Screen"),
    ));
    flow.screens = OneOrMany::Many(vec![
        screen("Ok_Screen", None),
        screen("Fault_Screen", None),
    ]);

    let output = render_plain(&flow);
    let try_pos = output.find("try:").expect("missing try");
    let except_pos = output.find("except:").expect("missing except");
    let ok_pos = output.find("SCREEN: Ok_Screen").expect("missing normal path");
    let fault_pos = output
        .find("SCREEN: Fault_Screen")
        .expect("missing fault path");
    assert!(try_pos < ok_pos && ok_pos < except_pos);
    assert!(except_pos < fault_pos);
}
