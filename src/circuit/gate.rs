//! Gate model.

use std::fmt;
use std::ops::RangeInclusive;

use super::types::NodeId;

/// Combinational gate kinds supported by the bench format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl GateKind {
    /// All kinds, in keyword-table order.
    pub const ALL: [GateKind; 7] = [
        Self::And,
        Self::Or,
        Self::Not,
        Self::Nand,
        Self::Nor,
        Self::Xor,
        Self::Xnor,
    ];

    /// Parse a gate kind from its bench keyword.
    ///
    /// Matching is case-sensitive: only the uppercase keywords are accepted.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "NAND" => Some(Self::Nand),
            "NOR" => Some(Self::Nor),
            "XOR" => Some(Self::Xor),
            "XNOR" => Some(Self::Xnor),
            _ => None,
        }
    }

    /// The bench keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::Xnor => "XNOR",
        }
    }

    /// Range of operand counts accepted under strict arity checking.
    pub fn arity(&self) -> RangeInclusive<usize> {
        match self {
            Self::Not => 1..=1,
            _ => 2..=usize::MAX,
        }
    }

    /// Human-readable form of [`GateKind::arity`] for error messages.
    pub fn arity_description(&self) -> String {
        let range = self.arity();
        if range.start() == range.end() {
            format!("exactly {}", range.start())
        } else {
            format!("at least {}", range.start())
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A resolved gate instance.
///
/// `inputs` keeps operand order exactly as written in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    /// Gate kind
    pub kind: GateKind,
    /// Operand nodes, in positional order
    pub inputs: Vec<NodeId>,
    /// The node this gate drives
    pub output: NodeId,
    /// Source line of the defining assignment
    pub line: usize,
}

impl Gate {
    /// Create a new gate.
    pub fn new(kind: GateKind, inputs: Vec<NodeId>, output: NodeId, line: usize) -> Self {
        Self {
            kind,
            inputs,
            output,
            line,
        }
    }

    /// Number of operands.
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }
}
