use serde::Deserialize;
use std::fmt;

/// A literal value or a reference to another flow resource, as produced by the
/// document decoder. At most one field is populated; display shows the first.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueSpec {
    #[serde(default)]
    pub string_value: Option<String>,
    #[serde(default)]
    pub number_value: Option<f64>,
    #[serde(default)]
    pub boolean_value: Option<bool>,
    #[serde(default)]
    pub date_value: Option<String>,
    #[serde(default)]
    pub date_time_value: Option<String>,
    #[serde(default)]
    pub element_reference: Option<String>,
    #[serde(default)]
    pub formula_expression: Option<String>,
    #[serde(default)]
    pub sobject_value: Option<String>,
    #[serde(default)]
    pub apex_value: Option<String>,
}

impl fmt::Display for ValueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = &self.string_value {
            write!(f, "\"{}\"", s)
        } else if let Some(n) = &self.number_value {
            if n.fract() == 0.0 {
                write!(f, "{}", *n as i64)
            } else {
                write!(f, "{}", n)
            }
        } else if let Some(b) = &self.boolean_value {
            write!(f, "{}", b)
        } else if let Some(d) = &self.date_value {
            write!(f, "\"{}\"", d)
        } else if let Some(d) = &self.date_time_value {
            write!(f, "\"{}\"", d)
        } else if let Some(r) = &self.element_reference {
            write!(f, "{}", r)
        } else if let Some(e) = &self.formula_expression {
            write!(f, "{}", e)
        } else if let Some(s) = &self.sobject_value {
            write!(f, "{}", s)
        } else if let Some(a) = &self.apex_value {
            write!(f, "{}", a)
        } else {
            write!(f, "null")
        }
    }
}

/// Operators a flow assignment item can apply to its left-hand reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AssignmentOperator {
    Add,
    AddAtStart,
    AddItem,
    Assign,
    AssignCount,
    RemoveAfterFirst,
    RemoveAll,
    RemoveBeforeFirst,
    RemoveFirst,
    RemovePosition,
    RemoveUncommon,
    Subtract,
}

impl AssignmentOperator {
    /// The symbolic spelling used in rendered statements, for the operators
    /// that have one. The rest render by name.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            AssignmentOperator::Assign => Some("="),
            AssignmentOperator::Add => Some("+="),
            AssignmentOperator::Subtract => Some("-="),
            AssignmentOperator::AddItem => Some("[]="),
            _ => None,
        }
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Comparison operators a decision rule condition can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ComparisonOperator {
    Contains,
    EndsWith,
    EqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    In,
    IsChanged,
    IsNull,
    LessThan,
    LessThanOrEqualTo,
    None,
    NotEqualTo,
    NotIn,
    StartsWith,
    WasSelected,
    WasSet,
    WasVisited,
}

impl ComparisonOperator {
    /// The infix symbol for operators that have one; predicate-style
    /// operators (Contains, IsNull, ...) have none and render as calls.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            ComparisonOperator::EqualTo => Some("=="),
            ComparisonOperator::NotEqualTo => Some("!="),
            ComparisonOperator::GreaterThan => Some(">"),
            ComparisonOperator::GreaterThanOrEqualTo => Some(">="),
            ComparisonOperator::LessThan => Some("<"),
            ComparisonOperator::LessThanOrEqualTo => Some("<="),
            _ => None,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Declared iteration order of a loop element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum IterationOrder {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for IterationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
