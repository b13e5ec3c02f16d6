//! Shunting-yard conversion and postfix evaluation.

use arith_ir::{BinaryOp, BuiltinFunction, Builtins};
use tracing::trace;

use crate::{LegacyError, LegacyToken};

/// Postfix program item.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Item<'a> {
    Number(f64),
    Operator(BinaryOp),
    Function(&'a BuiltinFunction),
}

/// Operator-stack entry.
#[derive(Clone, Copy)]
enum Pending<'a> {
    LParen,
    Operator(BinaryOp),
    Function(&'a BuiltinFunction),
}

/// Legacy binding power: `+ -` 1, `* /` 2, `^` 3. No `%`.
fn legacy_operator(symbol: &str) -> Option<(BinaryOp, u8)> {
    match symbol {
        "+" => Some((BinaryOp::Add, 1)),
        "-" => Some((BinaryOp::Sub, 1)),
        "*" => Some((BinaryOp::Mul, 2)),
        "/" => Some((BinaryOp::Div, 2)),
        "^" => Some((BinaryOp::Pow, 3)),
        _ => None,
    }
}

fn legacy_precedence(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Add | BinaryOp::Sub => 1,
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 2,
        BinaryOp::Pow => 3,
    }
}

/// Convert infix tokens to postfix order.
///
/// Functions wait on the operator stack and are emitted right after their
/// closing parenthesis. Unknown identifiers are dropped.
pub(crate) fn to_postfix<'a>(
    tokens: &[LegacyToken],
    builtins: &'a Builtins,
) -> Result<Vec<Item<'a>>, LegacyError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending<'a>> = Vec::new();

    for token in tokens {
        let symbol = match token {
            LegacyToken::Number(v) => {
                output.push(Item::Number(*v));
                continue;
            }
            LegacyToken::Symbol(s) => s.as_str(),
        };

        if let Some(function) = builtins.function(symbol) {
            stack.push(Pending::Function(function));
        } else if let Some((op, prec)) = legacy_operator(symbol) {
            while let Some(&top) = stack.last() {
                let top_op = match top {
                    Pending::LParen => break,
                    Pending::Operator(top_op) => top_op,
                    Pending::Function(f) => {
                        return Err(LegacyError::FunctionWithoutArgument { name: f.name })
                    }
                };
                let top_prec = legacy_precedence(top_op);
                let pops = if op.is_right_assoc() {
                    prec < top_prec
                } else {
                    prec <= top_prec
                };
                if !pops {
                    break;
                }
                output.push(Item::Operator(top_op));
                stack.pop();
            }
            stack.push(Pending::Operator(op));
        } else if symbol == "(" {
            stack.push(Pending::LParen);
        } else if symbol == ")" {
            while let Some(top) = stack.pop() {
                match top {
                    Pending::LParen => break,
                    Pending::Operator(op) => output.push(Item::Operator(op)),
                    Pending::Function(f) => output.push(Item::Function(f)),
                }
            }
            if let Some(&Pending::Function(f)) = stack.last() {
                output.push(Item::Function(f));
                stack.pop();
            }
        }
    }

    while let Some(top) = stack.pop() {
        match top {
            Pending::LParen => {}
            Pending::Operator(op) => output.push(Item::Operator(op)),
            Pending::Function(f) => output.push(Item::Function(f)),
        }
    }

    Ok(output)
}

/// Evaluate a postfix program.
///
/// Operators pop two operands and functions pop one, so optional
/// parameters always take their defaults. A missing operand reads as NaN,
/// and so does the result of an empty program.
pub(crate) fn evaluate(program: &[Item<'_>]) -> f64 {
    let mut stack: Vec<f64> = Vec::new();
    for item in program {
        match *item {
            Item::Number(v) => stack.push(v),
            Item::Operator(op) => {
                let b = stack.pop().unwrap_or(f64::NAN);
                let a = stack.pop().unwrap_or(f64::NAN);
                stack.push(op.apply(a, b));
            }
            Item::Function(function) => {
                let a = stack.pop().unwrap_or(f64::NAN);
                let mut args = vec![a];
                args.extend(
                    function
                        .params
                        .iter()
                        .skip(1)
                        .map(|p| p.default.unwrap_or(f64::NAN)),
                );
                let result = function.invoke(&args);
                trace!(function = function.name, ?args, result, "legacy call");
                stack.push(result);
            }
        }
    }
    stack.pop().unwrap_or(f64::NAN)
}
