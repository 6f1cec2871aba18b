//! Textual circuit report.

use std::fmt;

use super::gate::Gate;
use super::graph::Circuit;
use super::types::NodeId;

const RULE: &str = "-------------------------------------------";

impl Circuit {
    /// Display adapter for one gate, resolving node names.
    pub fn display_gate<'a>(&'a self, gate: &'a Gate) -> GateDisplay<'a> {
        GateDisplay {
            circuit: self,
            gate,
        }
    }

    fn write_names(&self, f: &mut fmt::Formatter<'_>, ids: &[NodeId]) -> fmt::Result {
        f.write_str("[")?;
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(self.node_name(id))?;
        }
        f.write_str("]")
    }
}

/// Renders a gate as `2-input AND gate | Input nodes: a,b | Output node: c`.
pub struct GateDisplay<'a> {
    circuit: &'a Circuit,
    gate: &'a Gate,
}

impl fmt::Display for GateDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-input {} gate | Input nodes: ", self.gate.arity(), self.gate.kind)?;
        for (i, &id) in self.gate.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(self.circuit.node_name(id))?;
        }
        write!(f, " | Output node: {}", self.circuit.node_name(self.gate.output))
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "--------------Input Nodes------------------")?;
        self.write_names(f, self.inputs())?;
        writeln!(f)?;
        writeln!(f, "-------------Output Nodes------------------")?;
        self.write_names(f, self.outputs())?;
        writeln!(f)?;

        writeln!(f, "---------------Gate list-------------------")?;
        for node in self.nodes() {
            if let Some(gate) = node.driver {
                writeln!(f, "{}", self.display_gate(self.gate(gate)))?;
            }
        }

        if let Some(levels) = self.levels() {
            writeln!(f, "-------------Levelized circuit-------------")?;
            for (level, ids) in levels {
                write!(f, "Level {}: ", level)?;
                self.write_names(f, ids)?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}
