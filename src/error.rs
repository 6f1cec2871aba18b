//! Error types for the bench netlist levelizer.
//!
//! This module provides a unified error type [`BenchError`] that covers
//! all error conditions that can occur while reading a bench file, building
//! the circuit graph, and levelizing it.

use thiserror::Error;

/// Result type alias using [`BenchError`].
pub type Result<T> = std::result::Result<T, BenchError>;

/// Unified error type for all bench operations.
#[derive(Error, Debug)]
pub enum BenchError {
    // ============ Statement Parsing Errors ============
    /// A line is neither a declaration nor an assignment
    #[error("Malformed statement at line {line}: {message}")]
    MalformedStatement { line: usize, message: String },

    /// Gate right-hand side lacks a `KIND(...)` shape
    #[error("Malformed gate expression '{expr}' at line {line}")]
    MalformedGateExpression { expr: String, line: usize },

    /// Gate keyword is not one of the supported kinds
    #[error("Unknown gate kind '{kind}' at line {line}")]
    UnknownGateKind { kind: String, line: usize },

    /// Operand count outside the range accepted by the gate kind
    #[error("{kind} gate driving '{node}' at line {line} expects {expected} inputs, got {found}")]
    ArityMismatch {
        node: String,
        kind: String,
        expected: String,
        found: usize,
        line: usize,
    },

    // ============ Circuit Validation Errors ============
    /// Gate operand refers to a node never declared
    #[error("Gate driving '{gate_output}' at line {line} references undeclared node '{node}'")]
    UnresolvedNodeReference {
        node: String,
        gate_output: String,
        line: usize,
    },

    /// Inconsistent circuit structure
    #[error("Invalid circuit topology: {message}")]
    InvalidTopology { message: String },

    /// Output node without a driver gate
    #[error("{node} is floating, no driver for output node is defined")]
    FloatingOutput { node: String },

    // ============ Levelization Errors ============
    /// Node depends on itself through its driver chain
    #[error("Combinational loop detected through node '{node}'")]
    CombinationalLoop { node: String },

    /// Non-input node without a driver gate reached during levelization
    #[error("Node '{node}' has no driver and is not a primary input")]
    UndrivenNode { node: String },

    // ============ I/O Errors ============
    /// Error reading the bench file
    #[error("Failed to read bench file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// Create a malformed statement error
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedStatement {
            line,
            message: message.into(),
        }
    }

    /// Create a malformed gate expression error
    pub fn malformed_gate(expr: impl Into<String>, line: usize) -> Self {
        Self::MalformedGateExpression {
            expr: expr.into(),
            line,
        }
    }

    /// Create an unknown gate kind error
    pub fn unknown_gate(kind: impl Into<String>, line: usize) -> Self {
        Self::UnknownGateKind {
            kind: kind.into(),
            line,
        }
    }

    /// Create an invalid topology error
    pub fn topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Create a floating output error
    pub fn floating_output(node: impl Into<String>) -> Self {
        Self::FloatingOutput { node: node.into() }
    }
}
