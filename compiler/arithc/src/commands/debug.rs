//! `arith tokens` and `arith ast`: dumps of the intermediate artifacts.

use std::io::{self, Write};

use arith_ir::{Expr, ExprKind};
use arith_stack::ensure_sufficient_stack;

use super::{report, write_json, Options};

pub fn dump_tokens<O: Write, E: Write>(
    expression: &str,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let tokens = match arith_lexer::tokenize(expression) {
        Ok(tokens) => tokens,
        Err(e) => {
            report(&e.to_diagnostic(), expression, options, err);
            return Ok(false);
        }
    };

    if options.json {
        write_json(out, &tokens)?;
        return Ok(true);
    }
    for token in &tokens {
        let position = format!("{}:{}", token.location.line, token.location.column);
        writeln!(
            out,
            "{position:<7} {:<9} {:<10} {}",
            token.span.to_string(),
            token.kind.display_name(),
            token.kind
        )?;
    }
    Ok(true)
}

pub fn dump_ast<O: Write, E: Write>(
    expression: &str,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let parsed = arith_lexer::tokenize(expression)
        .map_err(|e| e.to_diagnostic())
        .and_then(|tokens| arith_parse::parse(&tokens).map_err(|e| e.to_diagnostic()));
    let ast = match parsed {
        Ok(ast) => ast,
        Err(diagnostic) => {
            report(&diagnostic, expression, options, err);
            return Ok(false);
        }
    };

    if options.json {
        write_json(out, &ast)?;
        return Ok(true);
    }
    writeln!(out, "{ast}")?;
    render_tree(&ast, 0, out)?;
    Ok(true)
}

/// One node per line, children indented under their parent.
fn render_tree<O: Write>(expr: &Expr, depth: usize, out: &mut O) -> io::Result<()> {
    ensure_sufficient_stack(|| render_node(expr, depth, out))
}

fn render_node<O: Write>(expr: &Expr, depth: usize, out: &mut O) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    let span = expr.span;
    match &expr.kind {
        ExprKind::Number(value) => writeln!(out, "{indent}Number {value} @ {span}"),
        ExprKind::Constant { name, value } => {
            writeln!(out, "{indent}Constant {name} = {value} @ {span}")
        }
        ExprKind::Unary { op, operand } => {
            writeln!(out, "{indent}Unary {op} @ {span}")?;
            render_tree(operand, depth + 1, out)
        }
        ExprKind::Binary { op, left, right } => {
            writeln!(out, "{indent}Binary {op} @ {span}")?;
            render_tree(left, depth + 1, out)?;
            render_tree(right, depth + 1, out)
        }
        ExprKind::Call { name, args } => {
            writeln!(out, "{indent}Call {name}/{} @ {span}", args.len())?;
            args.iter()
                .try_for_each(|arg| render_tree(arg, depth + 1, out))
        }
    }
}
