//! Tree-walking evaluator for arith expressions.
//!
//! Arithmetic follows IEEE-754 doubles throughout: division by zero gives an
//! infinity or NaN and is not an error. A call that omits a parameter without
//! a default passes NaN for it. The only evaluation error is a call to a
//! function the registry lacks, which happens when a tree is evaluated
//! against a different registry than the one it was lexed with.

pub mod errors;
mod evaluator;

use arith_ir::Expr;

pub use errors::{EvalError, EvalErrorKind};
pub use evaluator::Evaluator;

/// Evaluate `expr` against the process-wide registry.
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    Evaluator::new().eval(expr)
}
