use thiserror::Error;

/// Errors that can occur while structuring a flow graph into a parse tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("Flow declares no resolvable start connector")]
    MissingStartElement,

    #[error("Element '{target}' not found, which is required by a connector from '{source}'")]
    MissingElement { target: String, source: String },

    #[error("Element '{name}' is malformed: {message}")]
    MalformedElement { name: String, message: String },

    #[error("Flow contains no elements")]
    EmptyFlow,
}

/// Errors that can occur when converting a custom decoded format into a `Flow`.
#[derive(Error, Debug, Clone)]
pub enum FlowConversionError {
    #[error("Invalid flow document: {0}")]
    ValidationError(String),
}
