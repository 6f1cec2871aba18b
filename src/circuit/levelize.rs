//! Logic-depth computation.
//!
//! Primary inputs sit at level 0; every other node is one above the
//! deepest operand of its driver gate. Evaluation is a depth-first walk
//! over driver edges using an explicit stack, so deep netlists cannot
//! exhaust the call stack, and a node seen again while still on the stack
//! is reported as a combinational loop.

use std::collections::BTreeMap;

use tracing::trace;

use super::gate::Gate;
use super::node::Node;
use super::types::NodeId;
use crate::error::{BenchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Done,
}

/// Fill in `level` on every node that does not have one yet.
///
/// Levels already present are trusted and never recomputed.
pub(crate) fn compute_levels(nodes: &mut [Node], gates: &[Gate]) -> Result<()> {
    let mut marks = vec![Mark::Unvisited; nodes.len()];
    let mut stack = Vec::new();

    for root in 0..nodes.len() {
        if nodes[root].level.is_some() {
            continue;
        }
        stack.push(NodeId(root));

        while let Some(&id) = stack.last() {
            if nodes[id.0].level.is_some() {
                marks[id.0] = Mark::Done;
                stack.pop();
                continue;
            }

            let gate = match nodes[id.0].driver {
                Some(g) if !gates[g.0].inputs.is_empty() => &gates[g.0],
                _ => {
                    return Err(BenchError::UndrivenNode {
                        node: nodes[id.0].name.clone(),
                    })
                }
            };
            marks[id.0] = Mark::Visiting;

            let mut next = None;
            for &input in &gate.inputs {
                if nodes[input.0].level.is_none() {
                    if marks[input.0] == Mark::Visiting {
                        return Err(BenchError::CombinationalLoop {
                            node: nodes[input.0].name.clone(),
                        });
                    }
                    next = Some(input);
                    break;
                }
            }

            match next {
                Some(input) => stack.push(input),
                None => {
                    let deepest = gate
                        .inputs
                        .iter()
                        .filter_map(|i| nodes[i.0].level)
                        .max()
                        .unwrap_or(0);
                    nodes[id.0].level = Some(deepest + 1);
                    marks[id.0] = Mark::Done;
                    trace!(node = %nodes[id.0].name, level = deepest + 1, "assigned level");
                    stack.pop();
                }
            }
        }
    }

    Ok(())
}

/// Group nodes by level, keeping declaration order inside each level.
pub(crate) fn bucket_levels(nodes: &[Node]) -> BTreeMap<usize, Vec<NodeId>> {
    let mut levels: BTreeMap<usize, Vec<NodeId>> = BTreeMap::new();
    for (idx, node) in nodes.iter().enumerate() {
        if let Some(level) = node.level {
            levels.entry(level).or_default().push(NodeId(idx));
        }
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Circuit, GateId, GateKind};

    #[test]
    fn test_shared_fanin_computed_once() {
        // d feeds both e and f; e also feeds f
        let mut circuit = Circuit::from_lines([
            "INPUT(a)",
            "INPUT(b)",
            "d = AND(a, b)",
            "e = NOT(d)",
            "f = OR(d, e)",
            "OUTPUT(f)",
        ])
        .unwrap();
        circuit.levelize().unwrap();
        let f = circuit.node_by_name("f").unwrap();
        assert_eq!(f.level, Some(3));
    }

    #[test]
    fn test_self_loop() {
        let mut circuit = Circuit::from_lines(["INPUT(b)", "a = AND(a, b)", "OUTPUT(a)"]).unwrap();
        let err = circuit.levelize().unwrap_err();
        assert!(matches!(err, BenchError::CombinationalLoop { ref node } if node == "a"));
        assert!(!circuit.is_levelized());
    }

    #[test]
    fn test_longer_loop() {
        let mut circuit = Circuit::from_lines([
            "INPUT(i)",
            "x = NAND(i, z)",
            "y = NOT(x)",
            "z = NOT(y)",
            "OUTPUT(z)",
        ])
        .unwrap();
        assert!(matches!(
            circuit.levelize(),
            Err(BenchError::CombinationalLoop { .. })
        ));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut lines = vec!["INPUT(n0)".to_string()];
        for i in 1..=50_000 {
            lines.push(format!("n{} = NOT(n{})", i, i - 1));
        }
        lines.push("OUTPUT(n50000)".to_string());

        let mut circuit = Circuit::from_lines(&lines).unwrap();
        circuit.levelize().unwrap();
        assert_eq!(circuit.depth(), Some(50_000));
    }

    #[test]
    fn test_undriven_node() {
        let mut nodes = vec![Node::input("a"), Node::output("z")];
        let err = compute_levels(&mut nodes, &[]).unwrap_err();
        assert!(matches!(err, BenchError::UndrivenNode { ref node } if node == "z"));
    }

    #[test]
    fn test_bucket_levels_order() {
        let mut nodes = vec![
            Node::input("a"),
            Node::wire("x", GateId(0)),
            Node::input("b"),
        ];
        let gates = vec![Gate::new(GateKind::Not, vec![NodeId(2)], NodeId(1), 2)];
        compute_levels(&mut nodes, &gates).unwrap();
        let levels = bucket_levels(&nodes);
        assert_eq!(levels[&0], vec![NodeId(0), NodeId(2)]);
        assert_eq!(levels[&1], vec![NodeId(1)]);
    }
}
