//! The graph-to-tree structuring engine.
//!
//! Starting from the declared entry connector(s), the structurer walks
//! `targetReference` edges through the element index, breaking cycles with a
//! per-run revisit guard and turning branching connectors (decision rules,
//! loop exits, fault paths) into nested control constructs. The result is an
//! ordered [`ParseTreeNode`] tree ready for a formatter.

mod walker;

use crate::error::StructureError;
use crate::flow::Flow;
use crate::index::ElementIndex;
use crate::tree::{NodeKind, ParseTreeNode};
use walker::GraphWalker;

/// Structures one decoded flow document into a parse tree.
///
/// All walk state (element index, visit counters, loop stack) lives in the
/// single [`structure`](Structurer::structure) call, so one instance can
/// structure repeatedly and instances on different documents are fully
/// isolated.
pub struct Structurer<'f> {
    flow: &'f Flow,
}

impl<'f> Structurer<'f> {
    pub fn new(flow: &'f Flow) -> Self {
        Self { flow }
    }

    /// Builds the parse tree, one child subtree per entry point in document
    /// order.
    ///
    /// Fails with [`StructureError::EmptyFlow`] on an element-free document,
    /// [`StructureError::MissingStartElement`] when no entry connector is
    /// declared, and [`StructureError::MissingElement`] when any connector
    /// targets a name absent from the index. There is no partial tree: a
    /// document structures fully or not at all.
    pub fn structure(&self) -> Result<ParseTreeNode<'f>, StructureError> {
        let index = ElementIndex::build(self.flow);
        if index.is_empty() {
            return Err(StructureError::EmptyFlow);
        }

        let entries = self.entry_points();
        if entries.is_empty() {
            return Err(StructureError::MissingStartElement);
        }

        let mut walker = GraphWalker::new(&index);
        let mut root = ParseTreeNode::new(NodeKind::Root, None);
        for (target, source) in entries {
            let element =
                index
                    .get(target)
                    .ok_or_else(|| StructureError::MissingElement {
                        target: target.to_string(),
                        source: source.to_string(),
                    })?;
            walker.visit(&mut root, element)?;
        }
        Ok(root)
    }

    /// Resolves the declared entry points to `(target name, source label)`
    /// pairs: the primary start connector, then every scheduled path in
    /// document order. A legacy `startElementReference` substitutes when no
    /// start block is present.
    fn entry_points(&self) -> Vec<(&'f str, &'f str)> {
        let mut entries = Vec::new();
        if let Some(start) = &self.flow.start {
            if let Some(connector) = &start.connector {
                entries.push((connector.target_reference.as_str(), "start"));
            }
            for path in &start.scheduled_paths {
                if let Some(connector) = &path.connector {
                    let source = path.name.as_deref().unwrap_or("scheduledPath");
                    entries.push((connector.target_reference.as_str(), source));
                }
            }
        } else if let Some(reference) = &self.flow.start_element_reference {
            entries.push((reference.as_str(), "start"));
        }
        entries
    }
}

/// Convenience entry point: `structure(flow)` is
/// `Structurer::new(flow).structure()`.
pub fn structure(flow: &Flow) -> Result<ParseTreeNode<'_>, StructureError> {
    Structurer::new(flow).structure()
}
