//! Core types for circuit representation.

use std::fmt;

/// A unique identifier for a node in the circuit.
/// Ids are assigned in first-appearance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A unique identifier for a gate in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GateId(pub usize);

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

/// Classification of a circuit signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Primary input
    Input,
    /// Primary output
    Output,
    /// Internal wire driven by a gate
    InternalWire,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeKind::Input => "input",
            NodeKind::Output => "output",
            NodeKind::InternalWire => "wire",
        };
        f.write_str(s)
    }
}

/// Logic value carried by a node.
///
/// Nothing in this crate simulates the circuit, so every node starts and
/// stays [`ValueTag::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueTag {
    High,
    Low,
    #[default]
    Undefined,
}
