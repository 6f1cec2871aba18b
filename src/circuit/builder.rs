//! Two-pass circuit construction.
//!
//! The first pass registers every node and records gate operands by name.
//! Bench files need not declare nodes before use, so operands are resolved
//! to [`NodeId`]s only once all statements have been seen.

use std::collections::HashMap;

use tracing::debug;

use super::gate::Gate;
use super::graph::Circuit;
use super::node::Node;
use super::types::{GateId, NodeId, NodeKind};
use super::validate::check_output_drivers;
use crate::bench::{GateExpr, Statement, StatementKind};
use crate::error::{BenchError, Result};

/// Gate whose operands are still names.
#[derive(Debug, Clone)]
struct PendingGate {
    expr: GateExpr,
    output: NodeId,
    line: usize,
}

/// Accumulates statements into a circuit.
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    nodes: Vec<Node>,
    node_map: HashMap<String, NodeId>,
    inputs: Vec<NodeId>,
    outputs: Vec<NodeId>,
    /// Indexed by `GateId`
    pending: Vec<PendingGate>,
}

impl CircuitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes registered so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add one statement, creating or updating its node.
    pub fn add_statement(&mut self, stmt: Statement) -> Result<()> {
        match self.node_map.get(stmt.target()).copied() {
            Some(id) => self.update_node(id, stmt),
            None => {
                self.insert_node(stmt);
                Ok(())
            }
        }
    }

    /// Add every statement in order.
    pub fn add_statements(&mut self, stmts: impl IntoIterator<Item = Statement>) -> Result<()> {
        stmts.into_iter().try_for_each(|stmt| self.add_statement(stmt))
    }

    fn insert_node(&mut self, stmt: Statement) {
        let id = NodeId(self.nodes.len());
        let node = match stmt.kind {
            StatementKind::Input(name) => {
                self.inputs.push(id);
                Node::input(name)
            }
            StatementKind::Output(name) => {
                self.outputs.push(id);
                Node::output(name)
            }
            StatementKind::Assign { target, expr } => {
                let gate = self.push_gate(expr, id, stmt.line);
                Node::wire(target, gate)
            }
        };
        debug!(line = stmt.line, node = %node.name, kind = %node.kind, "declared node");
        self.node_map.insert(node.name.clone(), id);
        self.nodes.push(node);
    }

    fn update_node(&mut self, id: NodeId, stmt: Statement) -> Result<()> {
        let line = stmt.line;
        let kind = self.nodes[id.0].kind;
        match stmt.kind {
            StatementKind::Input(name) => {
                if kind != NodeKind::Input {
                    return Err(BenchError::malformed(
                        line,
                        format!(
                            "'{}' is already declared as a {} and cannot become an input",
                            name, kind
                        ),
                    ));
                }
                debug!(line, node = %name, "repeated input declaration");
            }
            StatementKind::Output(name) => match kind {
                NodeKind::Input => {
                    return Err(BenchError::malformed(
                        line,
                        format!("'{}' is a primary input and cannot be an output", name),
                    ));
                }
                NodeKind::Output => debug!(line, node = %name, "repeated output declaration"),
                NodeKind::InternalWire => {
                    self.nodes[id.0].promote_to_output();
                    self.outputs.push(id);
                    debug!(line, node = %name, "promoted wire to output");
                }
            },
            StatementKind::Assign { target, expr } => {
                if kind == NodeKind::Input {
                    return Err(BenchError::malformed(
                        line,
                        format!("'{}' is a primary input and cannot be driven by a gate", target),
                    ));
                }
                match self.nodes[id.0].driver {
                    Some(gate) => {
                        self.pending[gate.0] = PendingGate { expr, output: id, line };
                        debug!(line, node = %target, "replaced driver gate");
                    }
                    None => {
                        let gate = self.push_gate(expr, id, line);
                        self.nodes[id.0].driver = Some(gate);
                        debug!(line, node = %target, "attached driver gate");
                    }
                }
            }
        }
        Ok(())
    }

    fn push_gate(&mut self, expr: GateExpr, output: NodeId, line: usize) -> GateId {
        let id = GateId(self.pending.len());
        self.pending.push(PendingGate { expr, output, line });
        id
    }

    /// Resolve gate operands, check outputs are driven, and build the circuit.
    pub fn finish(self) -> Result<Circuit> {
        let CircuitBuilder {
            nodes,
            node_map,
            inputs,
            outputs,
            pending,
        } = self;

        let gates = pending
            .into_iter()
            .map(|p| -> Result<Gate> {
                let inputs = p
                    .expr
                    .operands
                    .iter()
                    .map(|name| {
                        node_map.get(name).copied().ok_or_else(|| {
                            BenchError::UnresolvedNodeReference {
                                node: name.clone(),
                                gate_output: nodes[p.output.0].name.clone(),
                                line: p.line,
                            }
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Gate::new(p.expr.kind, inputs, p.output, p.line))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(nodes = nodes.len(), gates = gates.len(), "resolved gate operands");

        check_output_drivers(&nodes)?;

        Ok(Circuit::from_parts(nodes, gates, node_map, inputs, outputs))
    }
}
