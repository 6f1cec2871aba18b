//! Front end for the ISCAS-style `.bench` netlist format.
//!
//! The format is line-oriented, one statement per non-empty line, in any
//! order.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { line }
//! line        = declaration | assignment | comment | empty
//! declaration = ("INPUT" | "OUTPUT") '(' name ')'
//! assignment  = name '=' kind '(' name { ',' name } ')'
//! comment     = '#' { any_char }
//!
//! kind        = "AND" | "OR" | "NOT" | "NAND" | "NOR" | "XOR" | "XNOR"
//! ```
//!
//! Declaration keywords are matched case-insensitively, gate kinds are
//! not. Whitespace around operands and around `=` is insignificant.
//! Comment lines are dropped by the line reader when
//! [`ParseConfig::allow_comments`] is set.
//!
//! # Example
//!
//! ```text
//! # full adder sum bit
//! INPUT(a)
//! INPUT(b)
//! INPUT(cin)
//! OUTPUT(s)
//! s1 = XOR(a, b)
//! s = XOR(s1, cin)
//! ```

mod ast;
mod parser;
mod reader;

pub use ast::*;
pub use parser::{parse_gate_expr, parse_statement};
pub use reader::{lines_from_str, read_lines, SourceLine};

use crate::error::Result;

/// Options controlling how bench text is read and parsed.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Reject gates whose operand count does not fit their kind.
    pub strict_arity: bool,
    /// Drop `#` comment lines while reading.
    pub allow_comments: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            strict_arity: false,
            allow_comments: true,
        }
    }
}

impl ParseConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable per-kind arity checking.
    ///
    /// With checking on, `NOT` takes exactly one operand and every other
    /// kind at least two.
    pub fn with_strict_arity(mut self, strict_arity: bool) -> Self {
        self.strict_arity = strict_arity;
        self
    }

    /// Enable or disable `#` comment handling in the line reader.
    pub fn with_comments(mut self, allow_comments: bool) -> Self {
        self.allow_comments = allow_comments;
        self
    }
}

/// Parse bench text into statements.
pub fn parse(input: &str, config: &ParseConfig) -> Result<Vec<Statement>> {
    parse_source_lines(&lines_from_str(input, config), config)
}

/// Parse already-split, non-empty lines into statements.
///
/// Line numbers are the 1-based positions within `lines`.
pub fn parse_lines<I, S>(lines: I, config: &ParseConfig) -> Result<Vec<Statement>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, text)| parse_statement(idx + 1, text.as_ref(), config))
        .collect()
}

/// Parse lines produced by the reader, keeping their original numbers.
pub fn parse_source_lines(lines: &[SourceLine], config: &ParseConfig) -> Result<Vec<Statement>> {
    lines
        .iter()
        .map(|l| parse_statement(l.number, &l.text, config))
        .collect()
}

/// Parse a bench file.
pub fn parse_file(path: &std::path::Path, config: &ParseConfig) -> Result<Vec<Statement>> {
    let lines = read_lines(path, config)?;
    parse_source_lines(&lines, config)
}
