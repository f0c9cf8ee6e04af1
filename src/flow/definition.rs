use super::values::{AssignmentOperator, ComparisonOperator, IterationOrder, ValueSpec};
use serde::Deserialize;

/// A collection attribute as the document decoder hands it over: absent, a
/// single object, or a sequence. Every consumer goes through `as_slice`, so
/// the shape inconsistency never leaks past the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// A directed reference to the next element to execute. `is_go_to` marks an
/// explicit cross-jump as opposed to a normal fall-through edge.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub target_reference: String,
    #[serde(default)]
    pub is_go_to: bool,
}

/// The envelope the decoder produces around the flow proper.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowDocument {
    #[serde(rename = "Flow")]
    pub flow: Flow,
}

/// The complete, canonical decoded flow definition, ready for structuring.
/// Collections tolerate the decoder's single-vs-sequence inconsistency.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start: Option<Start>,
    /// Legacy entry declaration naming the start element directly.
    #[serde(default)]
    pub start_element_reference: Option<String>,
    #[serde(default)]
    pub variables: OneOrMany<Variable>,
    #[serde(default)]
    pub action_calls: OneOrMany<ActionCall>,
    #[serde(default)]
    pub assignments: OneOrMany<Assignment>,
    #[serde(default)]
    pub decisions: OneOrMany<Decision>,
    #[serde(default)]
    pub loops: OneOrMany<Loop>,
    #[serde(default)]
    pub screens: OneOrMany<Screen>,
    #[serde(default)]
    pub subflows: OneOrMany<Subflow>,
    #[serde(default)]
    pub record_creates: OneOrMany<OtherElement>,
    #[serde(default)]
    pub record_updates: OneOrMany<OtherElement>,
    #[serde(default)]
    pub record_deletes: OneOrMany<OtherElement>,
    #[serde(default)]
    pub record_lookups: OneOrMany<OtherElement>,
    #[serde(default)]
    pub record_rollbacks: OneOrMany<OtherElement>,
    #[serde(default)]
    pub transforms: OneOrMany<OtherElement>,
    #[serde(default)]
    pub apex_plugin_calls: OneOrMany<OtherElement>,
    #[serde(default)]
    pub collection_processors: OneOrMany<OtherElement>,
    #[serde(default)]
    pub custom_errors: OneOrMany<OtherElement>,
    #[serde(default)]
    pub steps: OneOrMany<OtherElement>,
}

/// The declared entry points of a flow: one primary connector and any number
/// of scheduled paths, each with its own connector.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Start {
    #[serde(default)]
    pub connector: Option<Connector>,
    #[serde(default)]
    pub scheduled_paths: OneOrMany<ScheduledPath>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPath {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub connector: Option<Connector>,
}

/// A flow variable declaration. Only renderers look at these, for the
/// procedure header, local declarations and the trailing return.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub data_type: Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub is_collection: bool,
    #[serde(default)]
    pub is_input: bool,
    #[serde(default)]
    pub is_output: bool,
}

/// An invocation of a named action (apex method, send email, ...), with an
/// optional fault connector taken when the action fails at runtime.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCall {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub action_name: Option<String>,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub input_parameters: OneOrMany<InputParameter>,
    #[serde(default)]
    pub connector: Option<Connector>,
    #[serde(default)]
    pub fault_connector: Option<Connector>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputParameter {
    pub name: String,
    #[serde(default)]
    pub value: Option<ValueSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub connector: Option<Connector>,
}

/// A for-each over a collection. The two connectors are the loop body entry
/// ("next value") and the continuation after exhaustion ("no more values").
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loop {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub collection_reference: Option<String>,
    #[serde(default)]
    pub iteration_order: IterationOrder,
    #[serde(default)]
    pub assign_next_value_to_reference: Option<String>,
    #[serde(default)]
    pub next_value_connector: Option<Connector>,
    #[serde(default)]
    pub no_more_values_connector: Option<Connector>,
}

/// A multi-way branch: one connector per rule plus an optional default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: OneOrMany<Rule>,
    #[serde(default)]
    pub default_connector: Option<Connector>,
    #[serde(default)]
    pub default_connector_label: Option<String>,
}

/// One outcome of a decision. `condition_logic` is `and`, `or`, or a custom
/// boolean expression referencing conditions by 1-based position.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub condition_logic: Option<String>,
    #[serde(default)]
    pub conditions: OneOrMany<Condition>,
    #[serde(default)]
    pub connector: Option<Connector>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub left_value_reference: String,
    pub operator: ComparisonOperator,
    #[serde(default)]
    pub right_value: Option<ValueSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignment_items: OneOrMany<AssignmentItem>,
    #[serde(default)]
    pub connector: Option<Connector>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentItem {
    pub assign_to_reference: String,
    pub operator: AssignmentOperator,
    #[serde(default)]
    pub value: Option<ValueSpec>,
}

/// An invocation of another flow by name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subflow {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub flow_name: Option<String>,
    #[serde(default)]
    pub connector: Option<Connector>,
}

/// Every remaining connector-bearing element kind (record operations,
/// transforms, apex plugin calls, ...). These structure generically: one
/// statement, then the fall-through connector.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherElement {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub connector: Option<Connector>,
}
