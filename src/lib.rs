//! # Bench Levelizer
//!
//! Parser and levelizer for gate-level `.bench` netlists.
//!
//! This library provides:
//! - A reader and parser for the line-oriented bench netlist format
//! - An arena-backed circuit graph of nodes and their driver gates
//! - Structural validation (undeclared operands, floating outputs)
//! - Levelization: the logic depth of every node from the primary inputs
//!
//! ## Architecture
//!
//! - [`bench`] - Line reader and statement parser for bench text
//! - [`circuit`] - Circuit graph, builder, validation, levelizer and report
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! benchlev -v p1.bench p2.bench
//! ```
//!
//! ### Library
//!
//! ```
//! use bench_levelizer::Circuit;
//!
//! let mut circuit = Circuit::from_lines(["INPUT(a)", "INPUT(b)", "c = AND(a, b)", "OUTPUT(c)"])?;
//! circuit.levelize()?;
//! assert_eq!(circuit.node_by_name("c").and_then(|n| n.level), Some(1));
//! # Ok::<(), bench_levelizer::BenchError>(())
//! ```
//!
//! ## Levelization
//!
//! Primary inputs are level 0. Every other node is one more than the
//! largest level among the operands of the gate driving it. The circuit
//! must be acyclic; a combinational loop is reported as
//! [`BenchError::CombinationalLoop`].

pub mod bench;
pub mod circuit;
pub mod error;

// Re-export main types for convenience
pub use bench::ParseConfig;
pub use circuit::Circuit;
pub use error::{BenchError, Result};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmBenchCircuit;
