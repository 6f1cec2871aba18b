//! Circuit graph representation, validation and levelization.
//!
//! This module provides the in-memory form of a bench netlist after
//! parsing. The [`Circuit`] struct owns every node and gate and answers
//! lookups by name; [`Circuit::levelize`] assigns each node its logic
//! depth.

mod builder;
mod gate;
mod graph;
mod levelize;
mod node;
mod report;
mod types;
mod validate;

pub use builder::CircuitBuilder;
pub use gate::{Gate, GateKind};
pub use graph::Circuit;
pub use node::Node;
pub use report::GateDisplay;
pub use types::*;
pub use validate::validate_circuit;
