//! Parser for bench statements.

use super::ast::*;
use super::ParseConfig;
use crate::circuit::GateKind;
use crate::error::{BenchError, Result};

/// Parse a single non-empty bench line.
///
/// A line containing `=` is an assignment; anything else must be an
/// `INPUT(name)` or `OUTPUT(name)` declaration.
pub fn parse_statement(line: usize, text: &str, config: &ParseConfig) -> Result<Statement> {
    let kind = if let Some((lhs, rhs)) = text.split_once('=') {
        let target = lhs.trim();
        if target.is_empty() {
            return Err(BenchError::malformed(line, "assignment has no target name"));
        }
        let expr = parse_gate_expr(rhs.trim(), line)?;
        if config.strict_arity && !expr.kind.arity().contains(&expr.operands.len()) {
            return Err(BenchError::ArityMismatch {
                node: target.to_string(),
                kind: expr.kind.to_string(),
                expected: expr.kind.arity_description(),
                found: expr.operands.len(),
                line,
            });
        }
        StatementKind::Assign {
            target: target.to_string(),
            expr,
        }
    } else {
        let (keyword, name) = split_call(text).ok_or_else(|| {
            BenchError::malformed(
                line,
                format!(
                    "expected INPUT(name), OUTPUT(name) or an assignment, got '{}'",
                    text.trim()
                ),
            )
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(BenchError::malformed(line, "declaration has an empty node name"));
        }
        let keyword = keyword.trim();
        if keyword.eq_ignore_ascii_case("INPUT") {
            StatementKind::Input(name.to_string())
        } else if keyword.eq_ignore_ascii_case("OUTPUT") {
            StatementKind::Output(name.to_string())
        } else {
            return Err(BenchError::malformed(
                line,
                format!("unknown declaration keyword '{}'", keyword),
            ));
        }
    };

    Ok(Statement { line, kind })
}

/// Parse a gate expression of the form `KIND(a, b, ...)`.
///
/// Operands are split on `,` and trimmed; their order is kept. Anything
/// after the first closing parenthesis is ignored.
pub fn parse_gate_expr(text: &str, line: usize) -> Result<GateExpr> {
    let (keyword, args) = split_call(text).ok_or_else(|| BenchError::malformed_gate(text, line))?;
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(BenchError::malformed_gate(text, line));
    }

    let kind = GateKind::from_keyword(keyword).ok_or_else(|| BenchError::unknown_gate(keyword, line))?;

    let operands: Vec<String> = args.split(',').map(|s| s.trim().to_string()).collect();
    if operands.iter().any(String::is_empty) {
        return Err(BenchError::malformed_gate(text, line));
    }

    Ok(GateExpr { kind, operands })
}

/// Split `head(inner)tail` into `(head, inner)` at the first parenthesis pair.
fn split_call(text: &str) -> Option<(&str, &str)> {
    let open = text.find('(')?;
    let rest = &text[open + 1..];
    let close = rest.find(')')?;
    Some((&text[..open], &rest[..close]))
}
