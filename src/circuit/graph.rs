//! Circuit graph structure.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use super::builder::CircuitBuilder;
use super::gate::Gate;
use super::levelize;
use super::node::Node;
use super::types::{GateId, NodeId};
use crate::bench::{self, ParseConfig, Statement};
use crate::error::Result;

/// A parsed gate-level circuit.
///
/// Nodes live in an arena addressed by [`NodeId`], in first-appearance
/// order. Gates refer to nodes by id, and nodes refer to their driver by
/// [`GateId`].
#[derive(Debug, Clone)]
pub struct Circuit {
    /// All nodes, in declaration order
    nodes: Vec<Node>,

    /// All driver gates
    gates: Vec<Gate>,

    /// Mapping from node names to node IDs
    node_map: HashMap<String, NodeId>,

    /// Primary inputs, in declaration order
    inputs: Vec<NodeId>,

    /// Primary outputs, in order of their first OUTPUT line
    outputs: Vec<NodeId>,

    /// Level buckets, filled in by [`Circuit::levelize`]
    levels: Option<BTreeMap<usize, Vec<NodeId>>>,
}

impl Circuit {
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        gates: Vec<Gate>,
        node_map: HashMap<String, NodeId>,
        inputs: Vec<NodeId>,
        outputs: Vec<NodeId>,
    ) -> Self {
        Self {
            nodes,
            gates,
            node_map,
            inputs,
            outputs,
            levels: None,
        }
    }

    /// Build a circuit from parsed statements.
    pub fn from_statements(statements: Vec<Statement>) -> Result<Self> {
        let mut builder = CircuitBuilder::new();
        builder.add_statements(statements)?;
        builder.finish()
    }

    /// Build a circuit from non-empty bench lines.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lines_with_config(lines, &ParseConfig::default())
    }

    /// Build a circuit from non-empty bench lines with custom options.
    pub fn from_lines_with_config<I, S>(lines: I, config: &ParseConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_statements(bench::parse_lines(lines, config)?)
    }

    /// Build a circuit from bench text.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_config(input, &ParseConfig::default())
    }

    /// Build a circuit from bench text with custom options.
    pub fn parse_with_config(input: &str, config: &ParseConfig) -> Result<Self> {
        Self::from_statements(bench::parse(input, config)?)
    }

    /// Build a circuit from a bench file.
    pub fn from_file(path: &Path, config: &ParseConfig) -> Result<Self> {
        Self::from_statements(bench::parse_file(path, config)?)
    }

    /// Compute the level of every node.
    ///
    /// Calling this again on a levelized circuit does nothing.
    pub fn levelize(&mut self) -> Result<()> {
        if self.levels.is_some() {
            return Ok(());
        }
        levelize::compute_levels(&mut self.nodes, &self.gates)?;
        let levels = levelize::bucket_levels(&self.nodes);
        tracing::info!(
            nodes = self.nodes.len(),
            depth = levels.keys().next_back().copied().unwrap_or(0),
            "levelized circuit"
        );
        self.levels = Some(levels);
        Ok(())
    }

    /// Whether [`Circuit::levelize`] has completed.
    pub fn is_levelized(&self) -> bool {
        self.levels.is_some()
    }

    /// Level buckets, `None` until levelized.
    pub fn levels(&self) -> Option<&BTreeMap<usize, Vec<NodeId>>> {
        self.levels.as_ref()
    }

    /// Nodes at `level`, in declaration order.
    pub fn nodes_at_level(&self, level: usize) -> &[NodeId] {
        self.levels
            .as_ref()
            .and_then(|levels| levels.get(&level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Largest level in the circuit, `None` until levelized.
    pub fn depth(&self) -> Option<usize> {
        self.levels
            .as_ref()
            .map(|levels| levels.keys().next_back().copied().unwrap_or(0))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn gate(&self, id: GateId) -> &Gate {
        &self.gates[id.0]
    }

    /// Find a node ID by name.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.node_map.get(name).copied()
    }

    /// Find a node by name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.find_node(name).map(|id| self.node(id))
    }

    /// Get the name of a node.
    pub fn node_name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// The gate driving a node, if any.
    pub fn driver_of(&self, id: NodeId) -> Option<&Gate> {
        self.nodes[id.0].driver.map(|g| self.gate(g))
    }

    /// Gates that read `id` as an operand.
    pub fn fanout(&self, id: NodeId) -> Vec<GateId> {
        self.gates
            .iter()
            .enumerate()
            .filter(|(_, gate)| gate.inputs.contains(&id))
            .map(|(idx, _)| GateId(idx))
            .collect()
    }

    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    pub fn input_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inputs.iter().map(|&id| self.node_name(id))
    }

    pub fn output_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.outputs.iter().map(|&id| self.node_name(id))
    }

    pub(crate) fn node_map(&self) -> &HashMap<String, NodeId> {
        &self.node_map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::NodeKind;
    use crate::error::BenchError;

    const AND_GATE: &[&str] = &["INPUT(a)", "INPUT(b)", "c = AND(a, b)", "OUTPUT(c)"];

    const FULL_ADDER_SUM: &[&str] = &[
        "INPUT(a)",
        "INPUT(b)",
        "INPUT(cin)",
        "s1 = XOR(a,b)",
        "s = XOR(s1,cin)",
        "OUTPUT(s)",
    ];

    const C17: &str = "\
# c17
INPUT(G1gat)
INPUT(G2gat)
INPUT(G3gat)
INPUT(G6gat)
INPUT(G7gat)

OUTPUT(G22gat)
OUTPUT(G23gat)

G10gat = NAND(G1gat, G3gat)
G11gat = NAND(G3gat, G6gat)
G16gat = NAND(G2gat, G11gat)
G19gat = NAND(G11gat, G7gat)
G22gat = NAND(G10gat, G16gat)
G23gat = NAND(G16gat, G19gat)
";

    fn level(circuit: &Circuit, name: &str) -> Option<usize> {
        circuit.node_by_name(name).and_then(|n| n.level)
    }

    #[test]
    fn test_single_and_gate() {
        let mut circuit = Circuit::from_lines(AND_GATE).unwrap();
        circuit.levelize().unwrap();
        assert_eq!(level(&circuit, "a"), Some(0));
        assert_eq!(level(&circuit, "b"), Some(0));
        assert_eq!(level(&circuit, "c"), Some(1));
        assert_eq!(circuit.input_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(circuit.output_names().collect::<Vec<_>>(), vec!["c"]);
    }

    #[test]
    fn test_full_adder_sum_levels() {
        let mut circuit = Circuit::from_lines(FULL_ADDER_SUM).unwrap();
        circuit.levelize().unwrap();
        assert_eq!(level(&circuit, "s1"), Some(1));
        assert_eq!(level(&circuit, "s"), Some(2));
        assert_eq!(circuit.depth(), Some(2));
    }

    #[test]
    fn test_c17_levels() {
        let mut circuit = Circuit::parse(C17).unwrap();
        circuit.levelize().unwrap();

        assert_eq!(circuit.inputs().len(), 5);
        assert_eq!(
            circuit.output_names().collect::<Vec<_>>(),
            vec!["G22gat", "G23gat"]
        );
        assert_eq!(level(&circuit, "G10gat"), Some(1));
        assert_eq!(level(&circuit, "G11gat"), Some(1));
        assert_eq!(level(&circuit, "G16gat"), Some(2));
        assert_eq!(level(&circuit, "G19gat"), Some(2));
        assert_eq!(level(&circuit, "G22gat"), Some(3));
        assert_eq!(level(&circuit, "G23gat"), Some(3));

        let names = |lvl| {
            circuit
                .nodes_at_level(lvl)
                .iter()
                .map(|&id| circuit.node_name(id))
                .collect::<Vec<_>>()
        };
        assert_eq!(names(3), vec!["G22gat", "G23gat"]);
        assert_eq!(names(1), vec!["G10gat", "G11gat"]);
    }

    #[test]
    fn test_every_gate_is_one_above_its_deepest_input() {
        let mut circuit = Circuit::parse(C17).unwrap();
        circuit.levelize().unwrap();
        for gate in circuit.gates() {
            let max_in = gate
                .inputs
                .iter()
                .map(|&id| circuit.node(id).level.unwrap())
                .max()
                .unwrap();
            assert_eq!(circuit.node(gate.output).level, Some(max_in + 1));
        }
        for &id in circuit.inputs() {
            assert_eq!(circuit.node(id).level, Some(0));
        }
        assert!(circuit.nodes().iter().all(|n| n.level.is_some()));
    }

    #[test]
    fn test_output_order_independence() {
        let before =
            Circuit::from_lines(["INPUT(a)", "INPUT(b)", "OUTPUT(x)", "x = AND(a,b)"]).unwrap();
        let after =
            Circuit::from_lines(["INPUT(a)", "INPUT(b)", "x = AND(a,b)", "OUTPUT(x)"]).unwrap();

        let x_before = before.node_by_name("x").unwrap();
        let x_after = after.node_by_name("x").unwrap();
        assert_eq!(x_before, x_after);
        assert_eq!(x_before.kind, NodeKind::Output);

        let x = before.find_node("x").unwrap();
        let gate_before = before.driver_of(x).unwrap();
        let gate_after = after.driver_of(x).unwrap();
        assert_eq!(gate_before.kind, gate_after.kind);
        assert_eq!(gate_before.inputs, gate_after.inputs);
        assert_eq!(before.output_names().collect::<Vec<_>>(), vec!["x"]);
        assert_eq!(after.output_names().collect::<Vec<_>>(), vec!["x"]);
    }

    #[test]
    fn test_output_set_matches_output_lines() {
        let circuit = Circuit::parse(C17).unwrap();
        let mut from_kinds: Vec<&str> = circuit
            .nodes()
            .iter()
            .filter(|n| n.is_output())
            .map(|n| n.name.as_str())
            .collect();
        from_kinds.sort();
        assert_eq!(from_kinds, vec!["G22gat", "G23gat"]);
    }

    #[test]
    fn test_floating_output() {
        let err = Circuit::from_lines(["INPUT(a)", "b = NOT(a)", "OUTPUT(z)"]).unwrap_err();
        match err {
            BenchError::FloatingOutput { node } => assert_eq!(node, "z"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_gate_kind() {
        let err = Circuit::from_lines(["INPUT(a)", "INPUT(b)", "z = FOO(a,b)"]).unwrap_err();
        assert!(matches!(err, BenchError::UnknownGateKind { ref kind, .. } if kind == "FOO"));
    }

    #[test]
    fn test_levelize_is_idempotent() {
        let mut circuit = Circuit::parse(C17).unwrap();
        assert!(!circuit.is_levelized());
        assert_eq!(circuit.depth(), None);
        circuit.levelize().unwrap();
        let levels = circuit.levels().cloned();
        let node_levels: Vec<_> = circuit.nodes().iter().map(|n| n.level).collect();

        circuit.levelize().unwrap();
        assert_eq!(circuit.levels().cloned(), levels);
        assert_eq!(
            circuit.nodes().iter().map(|n| n.level).collect::<Vec<_>>(),
            node_levels
        );
    }

    #[test]
    fn test_fanout() {
        let circuit = Circuit::parse(C17).unwrap();
        let g11 = circuit.find_node("G11gat").unwrap();
        let fanout: Vec<&str> = circuit
            .fanout(g11)
            .into_iter()
            .map(|g| circuit.node_name(circuit.gate(g).output))
            .collect();
        assert_eq!(fanout, vec!["G16gat", "G19gat"]);
        assert!(circuit.fanout(circuit.find_node("G22gat").unwrap()).is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = Circuit::from_file(Path::new("/nonexistent/p1.txt"), &ParseConfig::default())
            .unwrap_err();
        assert!(matches!(err, BenchError::FileReadError { .. }));
    }
}
