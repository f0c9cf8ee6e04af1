use super::definition::{Flow, FlowDocument};
use crate::error::FlowConversionError;

/// A trait for custom decoded data models that can be converted into a
/// canonical [`Flow`].
///
/// This is the extension point that keeps the structurer format-agnostic: the
/// on-disk document format (and its decoder) stay outside the crate, and any
/// decoded representation that can be mapped onto `Flow` can be structured.
///
/// # Example
///
/// ```rust,no_run
/// use kaidoku::flow::{Flow, IntoFlow};
/// use kaidoku::error::FlowConversionError;
///
/// struct MyDecodedWorkflow {
///     // fields produced by your own decoder
/// }
///
/// impl IntoFlow for MyDecodedWorkflow {
///     fn into_flow(self) -> Result<Flow, FlowConversionError> {
///         // Map your elements and connectors onto the canonical model here.
///         Ok(Flow::default())
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a canonical flow definition.
    fn into_flow(self) -> Result<Flow, FlowConversionError>;
}

impl IntoFlow for FlowDocument {
    fn into_flow(self) -> Result<Flow, FlowConversionError> {
        Ok(self.flow)
    }
}
