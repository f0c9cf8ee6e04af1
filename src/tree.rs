use crate::index::ElementRef;
use std::fmt;

/// The kind tag of a parse tree node. One variant per structuring construct;
/// renderers implement one rule per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    ActionCall,
    Assignment,
    Screen,
    Subflow,
    Loop,
    Decision,
    /// One decision rule, rendered as an `if` / `else if` branch.
    Case,
    /// A decision's default branch, rendered as the trailing `else`.
    DefaultOutcome,
    Try,
    /// A fault handler, rendered as the `catch` of the preceding `Try`.
    Except,
    /// The referenced element was already structured elsewhere in the tree;
    /// renderers reference that emission instead of duplicating it.
    AlreadyVisited,
    /// An element kind with no dedicated structuring rule, rendered
    /// generically.
    Other,
}

/// One node of the structured output tree. Children are ordered exactly as
/// control flow executes them; the tree has a single `Root` and no sharing.
#[derive(Debug, Clone)]
pub struct ParseTreeNode<'f> {
    pub kind: NodeKind,
    pub element: Option<ElementRef<'f>>,
    pub children: Vec<ParseTreeNode<'f>>,
}

impl<'f> ParseTreeNode<'f> {
    pub fn new(kind: NodeKind, element: Option<ElementRef<'f>>) -> Self {
        Self {
            kind,
            element,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: ParseTreeNode<'f>) {
        self.children.push(child);
    }

    /// The name of the referenced element, if the node references one.
    pub fn element_name(&self) -> Option<&'f str> {
        self.element.as_ref().map(|e| e.name())
    }

    /// Calls `f` on this node and every descendant, in pre-order.
    pub fn walk(&self, f: &mut impl FnMut(&ParseTreeNode<'f>)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}

/// A wrapper to display a parse tree as an indented tree diagram, for
/// debugging the structurer's output.
pub struct DisplayParseTree<'a, 'f> {
    pub root: &'a ParseTreeNode<'f>,
}

impl fmt::Display for DisplayParseTree<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_as_tree(self.root, f, "", true)
    }
}

impl DisplayParseTree<'_, '_> {
    fn fmt_as_tree(
        &self,
        node: &ParseTreeNode<'_>,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}", prefix, node_marker)?;

        match node.element_name() {
            Some(name) => writeln!(f, "{:?}: {}", node.kind, name)?,
            None => writeln!(f, "{:?}", node.kind)?,
        }

        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            self.fmt_as_tree(child, f, &child_prefix, i + 1 == count)?;
        }
        Ok(())
    }
}
