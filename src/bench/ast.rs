//! Statement types for parsed bench lines.

use crate::circuit::GateKind;

/// One parsed bench line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Source line number for error reporting
    pub line: usize,
    /// What the line declares
    pub kind: StatementKind,
}

impl Statement {
    /// Name of the node this statement declares or assigns.
    pub fn target(&self) -> &str {
        match &self.kind {
            StatementKind::Input(name) | StatementKind::Output(name) => name,
            StatementKind::Assign { target, .. } => target,
        }
    }
}

/// Statement variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementKind {
    /// `INPUT(name)`
    Input(String),
    /// `OUTPUT(name)`
    Output(String),
    /// `target = KIND(a, b, ...)`
    Assign { target: String, expr: GateExpr },
}

/// Right-hand side of an assignment, operands not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateExpr {
    /// Gate kind
    pub kind: GateKind,
    /// Operand node names, in positional order
    pub operands: Vec<String>,
}
