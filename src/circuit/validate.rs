//! Circuit validation.

use crate::error::{BenchError, Result};

use super::node::Node;
use super::types::NodeKind;
use super::Circuit;

/// Every output node must have a driver gate.
pub(crate) fn check_output_drivers(nodes: &[Node]) -> Result<()> {
    match nodes.iter().find(|n| n.is_output() && n.driver.is_none()) {
        Some(node) => Err(BenchError::floating_output(&node.name)),
        None => Ok(()),
    }
}

/// Validate the structure of a built circuit.
///
/// Checks:
/// - No output node is floating
/// - Name lookup and node arena agree
/// - Input and output lists hold nodes of the matching kind
/// - Drivers exist exactly on non-input nodes and point back at them
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    check_output_drivers(circuit.nodes())?;

    if circuit.node_map().len() != circuit.nodes().len() {
        return Err(BenchError::topology(format!(
            "{} names map onto {} nodes",
            circuit.node_map().len(),
            circuit.nodes().len()
        )));
    }
    for (name, &id) in circuit.node_map() {
        if circuit.node_name(id) != name {
            return Err(BenchError::topology(format!(
                "name '{}' maps to node '{}'",
                name,
                circuit.node_name(id)
            )));
        }
    }

    for &id in circuit.inputs() {
        if circuit.node(id).kind != NodeKind::Input {
            let name = circuit.node_name(id);
            return Err(BenchError::topology(format!("'{}' listed as input", name)));
        }
    }
    for &id in circuit.outputs() {
        if circuit.node(id).kind != NodeKind::Output {
            let name = circuit.node_name(id);
            return Err(BenchError::topology(format!("'{}' listed as output", name)));
        }
    }

    for (idx, node) in circuit.nodes().iter().enumerate() {
        match (node.kind, node.driver) {
            (NodeKind::Input, Some(_)) => {
                let message = format!("input '{}' has a driver gate", node.name);
                return Err(BenchError::topology(message));
            }
            (NodeKind::InternalWire, None) => {
                return Err(BenchError::UndrivenNode {
                    node: node.name.clone(),
                });
            }
            (_, Some(gate)) if circuit.gate(gate).output.0 != idx => {
                let message = format!("driver of '{}' drives another node", node.name);
                return Err(BenchError::topology(message));
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_circuit_is_valid() {
        let circuit = Circuit::from_lines([
            "OUTPUT(s)",
            "INPUT(a)",
            "INPUT(b)",
            "s = XNOR(a, b)",
        ])
        .unwrap();
        assert!(validate_circuit(&circuit).is_ok());
    }

    #[test]
    fn test_floating_output_detected() {
        let nodes = vec![Node::input("a"), Node::output("z")];
        assert!(matches!(
            check_output_drivers(&nodes),
            Err(BenchError::FloatingOutput { ref node }) if node == "z"
        ));
    }
}
