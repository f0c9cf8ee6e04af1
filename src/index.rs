use crate::flow::{
    ActionCall, Assignment, Decision, Flow, Loop, OneOrMany, OtherElement, Rule, Screen, Subflow,
};
use ahash::AHashMap;
use std::fmt;

/// The specific kind of a generically-structured element. Carried alongside
/// the borrow because the element struct itself is shared across collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherKind {
    RecordCreate,
    RecordUpdate,
    RecordDelete,
    RecordLookup,
    RecordRollback,
    Transform,
    ApexPluginCall,
    CollectionProcessor,
    CustomError,
    Step,
}

impl fmt::Display for OtherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OtherKind::RecordCreate => "RECORD CREATE",
            OtherKind::RecordUpdate => "RECORD UPDATE",
            OtherKind::RecordDelete => "RECORD DELETE",
            OtherKind::RecordLookup => "RECORD LOOKUP",
            OtherKind::RecordRollback => "RECORD ROLLBACK",
            OtherKind::Transform => "TRANSFORM",
            OtherKind::ApexPluginCall => "APEX PLUGIN CALL",
            OtherKind::CollectionProcessor => "COLLECTION PROCESSOR",
            OtherKind::CustomError => "CUSTOM ERROR",
            OtherKind::Step => "STEP",
        };
        write!(f, "{}", text)
    }
}

/// A typed borrow of one element in the decoded document. Structuring
/// dispatches by matching on this, so every kind carries exactly the fields
/// that kind declares.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'f> {
    ActionCall(&'f ActionCall),
    Assignment(&'f Assignment),
    Decision(&'f Decision),
    /// One decision rule; reachable only through its decision, never indexed.
    Rule(&'f Rule),
    Loop(&'f Loop),
    Screen(&'f Screen),
    Subflow(&'f Subflow),
    Other { element: &'f OtherElement, kind: OtherKind },
}

impl<'f> ElementRef<'f> {
    pub fn name(&self) -> &'f str {
        match self {
            ElementRef::ActionCall(e) => &e.name,
            ElementRef::Assignment(e) => &e.name,
            ElementRef::Decision(e) => &e.name,
            ElementRef::Rule(e) => &e.name,
            ElementRef::Loop(e) => &e.name,
            ElementRef::Screen(e) => &e.name,
            ElementRef::Subflow(e) => &e.name,
            ElementRef::Other { element, .. } => &element.name,
        }
    }

    pub fn label(&self) -> Option<&'f str> {
        let label = match self {
            ElementRef::ActionCall(e) => &e.label,
            ElementRef::Assignment(e) => &e.label,
            ElementRef::Decision(e) => &e.label,
            ElementRef::Rule(e) => &e.label,
            ElementRef::Loop(e) => &e.label,
            ElementRef::Screen(e) => &e.label,
            ElementRef::Subflow(e) => &e.label,
            ElementRef::Other { element, .. } => &element.label,
        };
        label.as_deref()
    }

    pub fn description(&self) -> Option<&'f str> {
        let description = match self {
            ElementRef::ActionCall(e) => &e.description,
            ElementRef::Assignment(e) => &e.description,
            ElementRef::Decision(e) => &e.description,
            ElementRef::Rule(e) => &e.description,
            ElementRef::Loop(e) => &e.description,
            ElementRef::Screen(e) => &e.description,
            ElementRef::Subflow(e) => &e.description,
            ElementRef::Other { element, .. } => &element.description,
        };
        description.as_deref()
    }
}

/// A name-keyed lookup over every element collection of a decoded flow,
/// built once per structuring run.
///
/// Duplicate names silently overwrite earlier entries; unique element names
/// are a documented precondition of well-formed documents, not a fault this
/// crate recovers from.
pub struct ElementIndex<'f> {
    by_name: AHashMap<&'f str, ElementRef<'f>>,
}

impl<'f> ElementIndex<'f> {
    pub fn build(flow: &'f Flow) -> Self {
        let mut by_name: AHashMap<&'f str, ElementRef<'f>> = AHashMap::new();

        for e in &flow.action_calls {
            by_name.insert(&e.name, ElementRef::ActionCall(e));
        }
        for e in &flow.assignments {
            by_name.insert(&e.name, ElementRef::Assignment(e));
        }
        for e in &flow.decisions {
            by_name.insert(&e.name, ElementRef::Decision(e));
        }
        for e in &flow.loops {
            by_name.insert(&e.name, ElementRef::Loop(e));
        }
        for e in &flow.screens {
            by_name.insert(&e.name, ElementRef::Screen(e));
        }
        for e in &flow.subflows {
            by_name.insert(&e.name, ElementRef::Subflow(e));
        }

        let generic_groups: [(&'f OneOrMany<OtherElement>, OtherKind); 10] = [
            (&flow.record_creates, OtherKind::RecordCreate),
            (&flow.record_updates, OtherKind::RecordUpdate),
            (&flow.record_deletes, OtherKind::RecordDelete),
            (&flow.record_lookups, OtherKind::RecordLookup),
            (&flow.record_rollbacks, OtherKind::RecordRollback),
            (&flow.transforms, OtherKind::Transform),
            (&flow.apex_plugin_calls, OtherKind::ApexPluginCall),
            (&flow.collection_processors, OtherKind::CollectionProcessor),
            (&flow.custom_errors, OtherKind::CustomError),
            (&flow.steps, OtherKind::Step),
        ];
        for (group, kind) in generic_groups {
            for element in group {
                by_name.insert(&element.name, ElementRef::Other { element, kind });
            }
        }

        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<ElementRef<'f>> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
