//! Node model.

use super::types::{GateId, NodeKind, ValueTag};

/// A named circuit signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique node name
    pub name: String,
    /// Input, output or internal wire
    pub kind: NodeKind,
    /// Current logic value (always undefined here)
    pub value: ValueTag,
    /// Gate computing this node's value
    pub driver: Option<GateId>,
    /// Logic depth, `None` until levelized
    pub level: Option<usize>,
}

impl Node {
    /// Create a primary input. Inputs sit at level 0 from the start.
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Input,
            value: ValueTag::Undefined,
            driver: None,
            level: Some(0),
        }
    }

    /// Create a primary output with no driver yet.
    pub fn output(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Output,
            value: ValueTag::Undefined,
            driver: None,
            level: None,
        }
    }

    /// Create an internal wire driven by `driver`.
    pub fn wire(name: impl Into<String>, driver: GateId) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::InternalWire,
            value: ValueTag::Undefined,
            driver: Some(driver),
            level: None,
        }
    }

    pub fn is_input(&self) -> bool {
        self.kind == NodeKind::Input
    }

    pub fn is_output(&self) -> bool {
        self.kind == NodeKind::Output
    }

    /// Mark this node as a primary output, keeping any driver it has.
    pub fn promote_to_output(&mut self) {
        self.kind = NodeKind::Output;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_starts_at_level_zero() {
        let n = Node::input("a");
        assert_eq!(n.level, Some(0));
        assert_eq!(n.value, ValueTag::Undefined);
        assert!(n.driver.is_none());
    }

    #[test]
    fn test_promotion_keeps_driver() {
        let mut n = Node::wire("c", GateId(4));
        n.promote_to_output();
        assert!(n.is_output());
        assert_eq!(n.driver, Some(GateId(4)));
        assert_eq!(n.level, None);
    }
}
