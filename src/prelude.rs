//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits from the kaidoku
//! crate, so the whole pipeline (decode, structure, render) is available
//! from one `use`.

// Structuring
pub use crate::structurer::{structure, Structurer};

// Decoded document model
pub use crate::flow::{
    ActionCall, Assignment, AssignmentItem, AssignmentOperator, ComparisonOperator, Condition,
    Connector, Decision, Flow, FlowDocument, InputParameter, IntoFlow, IterationOrder, Loop,
    OneOrMany, OtherElement, Rule, ScheduledPath, Screen, Start, Subflow, ValueSpec, Variable,
};

// Element lookup and parse tree
pub use crate::index::{ElementIndex, ElementRef, OtherKind};
pub use crate::tree::{DisplayParseTree, NodeKind, ParseTreeNode};

// Rendering
pub use crate::render::{Formatter, JsFormatter, PseudocodeFormatter};

// Error types
pub use crate::error::{FlowConversionError, StructureError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
