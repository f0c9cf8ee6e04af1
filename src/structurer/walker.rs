use crate::error::StructureError;
use crate::flow::{ActionCall, Connector, Decision, Loop};
use crate::index::{ElementIndex, ElementRef};
use crate::tree::{NodeKind, ParseTreeNode};
use ahash::AHashMap;

/// Performs the recursive connector walk for one structuring run.
///
/// Carries the run-scoped state the walk needs: how often each element name
/// has been dispatched, and which loop headers the walk is currently inside.
/// Instances are built fresh per run and never reused.
pub(super) struct GraphWalker<'i, 'f> {
    index: &'i ElementIndex<'f>,
    visit_counts: AHashMap<&'f str, u32>,
    loop_stack: Vec<&'f str>,
}

impl<'i, 'f> GraphWalker<'i, 'f> {
    pub(super) fn new(index: &'i ElementIndex<'f>) -> Self {
        Self {
            index,
            visit_counts: AHashMap::new(),
            loop_stack: Vec::new(),
        }
    }

    /// Structures `element` (and everything reachable from it) under
    /// `parent`.
    ///
    /// Chained elements become siblings at the same depth; nesting only
    /// happens for loop bodies, case/default bodies and try/except bodies.
    pub(super) fn visit(
        &mut self,
        parent: &mut ParseTreeNode<'f>,
        element: ElementRef<'f>,
    ) -> Result<(), StructureError> {
        let name = element.name();
        let visits = {
            let count = self.visit_counts.entry(name).or_insert(0);
            *count += 1;
            *count
        };

        // Re-entering a loop header from inside its own body is the loop's
        // structural back edge, not a revisit to render.
        if self.loop_stack.contains(&name) {
            return Ok(());
        }

        if visits > 1 {
            parent.add_child(ParseTreeNode::new(NodeKind::AlreadyVisited, Some(element)));
            return Ok(());
        }

        match element {
            ElementRef::ActionCall(call) => self.visit_action_call(parent, call),
            ElementRef::Screen(screen) => {
                parent.add_child(ParseTreeNode::new(NodeKind::Screen, Some(element)));
                self.follow(parent, screen.connector.as_ref(), name)
            }
            ElementRef::Assignment(assignment) => {
                parent.add_child(ParseTreeNode::new(NodeKind::Assignment, Some(element)));
                self.follow(parent, assignment.connector.as_ref(), name)
            }
            ElementRef::Subflow(subflow) => {
                parent.add_child(ParseTreeNode::new(NodeKind::Subflow, Some(element)));
                self.follow(parent, subflow.connector.as_ref(), name)
            }
            ElementRef::Loop(l) => self.visit_loop(parent, l),
            ElementRef::Decision(decision) => self.visit_decision(parent, decision),
            // Rules are never dispatched directly; their decision structures
            // them as cases.
            ElementRef::Rule(_) | ElementRef::Other { .. } => {
                parent.add_child(ParseTreeNode::new(NodeKind::Other, Some(element)));
                let connector = match element {
                    ElementRef::Other { element, .. } => element.connector.as_ref(),
                    _ => None,
                };
                self.follow(parent, connector, name)
            }
        }
    }

    /// An action call with a fault connector splits into `try`/`except`. The
    /// call itself is structured a second time inside its own try body, so
    /// the visit recorded for this dispatch is handed back first; without
    /// that, the revisit guard swallows the try path.
    fn visit_action_call(
        &mut self,
        parent: &mut ParseTreeNode<'f>,
        call: &'f ActionCall,
    ) -> Result<(), StructureError> {
        match &call.fault_connector {
            Some(fault) if !Self::is_own_try(parent, call) => {
                let mut try_node =
                    ParseTreeNode::new(NodeKind::Try, Some(ElementRef::ActionCall(call)));
                if let Some(count) = self.visit_counts.get_mut(call.name.as_str()) {
                    *count -= 1;
                }
                self.visit(&mut try_node, ElementRef::ActionCall(call))?;
                parent.add_child(try_node);

                let mut except_node = ParseTreeNode::new(NodeKind::Except, None);
                let handler = self.resolve(fault, &call.name)?;
                self.visit(&mut except_node, handler)?;
                parent.add_child(except_node);
                Ok(())
            }
            _ => {
                parent.add_child(ParseTreeNode::new(
                    NodeKind::ActionCall,
                    Some(ElementRef::ActionCall(call)),
                ));
                self.follow(parent, call.connector.as_ref(), &call.name)
            }
        }
    }

    fn is_own_try(parent: &ParseTreeNode<'f>, call: &ActionCall) -> bool {
        parent.kind == NodeKind::Try && parent.element_name() == Some(call.name.as_str())
    }

    /// The next-value continuation nests inside the loop node as its body;
    /// the no-more-values continuation resumes under the original parent.
    fn visit_loop(
        &mut self,
        parent: &mut ParseTreeNode<'f>,
        l: &'f Loop,
    ) -> Result<(), StructureError> {
        self.loop_stack.push(&l.name);
        let mut loop_node = ParseTreeNode::new(NodeKind::Loop, Some(ElementRef::Loop(l)));
        let body = self.follow(&mut loop_node, l.next_value_connector.as_ref(), &l.name);
        self.loop_stack.pop();
        body?;
        parent.add_child(loop_node);

        self.follow(parent, l.no_more_values_connector.as_ref(), &l.name)
    }

    fn visit_decision(
        &mut self,
        parent: &mut ParseTreeNode<'f>,
        decision: &'f Decision,
    ) -> Result<(), StructureError> {
        let rules = decision.rules.as_slice();
        if rules.is_empty() {
            return Err(StructureError::MalformedElement {
                name: decision.name.clone(),
                message: "decision declares no rules".to_string(),
            });
        }

        let mut decision_node =
            ParseTreeNode::new(NodeKind::Decision, Some(ElementRef::Decision(decision)));
        for rule in rules {
            let mut case_node = ParseTreeNode::new(NodeKind::Case, Some(ElementRef::Rule(rule)));
            self.follow(&mut case_node, rule.connector.as_ref(), &rule.name)?;
            decision_node.add_child(case_node);
        }
        // No implicit empty else: the default branch exists only when the
        // document declares a default connector.
        if let Some(default) = &decision.default_connector {
            let mut default_node = ParseTreeNode::new(
                NodeKind::DefaultOutcome,
                Some(ElementRef::Decision(decision)),
            );
            let target = self.resolve(default, &decision.name)?;
            self.visit(&mut default_node, target)?;
            decision_node.add_child(default_node);
        }
        parent.add_child(decision_node);
        Ok(())
    }

    pub(super) fn follow(
        &mut self,
        parent: &mut ParseTreeNode<'f>,
        connector: Option<&'f Connector>,
        source: &str,
    ) -> Result<(), StructureError> {
        match connector {
            Some(connector) => {
                let target = self.resolve(connector, source)?;
                self.visit(parent, target)
            }
            None => Ok(()),
        }
    }

    fn resolve(
        &self,
        connector: &Connector,
        source: &str,
    ) -> Result<ElementRef<'f>, StructureError> {
        self.index
            .get(&connector.target_reference)
            .ok_or_else(|| StructureError::MissingElement {
                target: connector.target_reference.clone(),
                source: source.to_string(),
            })
    }
}
