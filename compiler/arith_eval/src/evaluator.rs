//! Tree-walking evaluator.

use arith_ir::{BuiltinFunction, Builtins, Expr, ExprKind};
use arith_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::{undefined_function, EvalError};

/// Evaluates expression trees against a builtin registry.
///
/// Holds no state besides the registry reference, so one evaluator can be
/// reused for any number of trees.
#[derive(Clone, Copy)]
pub struct Evaluator<'a> {
    builtins: &'a Builtins,
}

impl Evaluator<'static> {
    /// Evaluator over the process-wide registry.
    pub fn new() -> Self {
        Evaluator {
            builtins: Builtins::global(),
        }
    }
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Evaluator<'a> {
    pub fn with_builtins(builtins: &'a Builtins) -> Self {
        Evaluator { builtins }
    }

    /// Evaluate `expr` post-order.
    pub fn eval(&self, expr: &Expr) -> Result<f64, EvalError> {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&self, expr: &Expr) -> Result<f64, EvalError> {
        match &expr.kind {
            ExprKind::Number(value) => Ok(*value),
            // The captured value covers registries that lack the name.
            ExprKind::Constant { name, value } => Ok(self
                .builtins
                .constant(name)
                .map_or(*value, |(_, registered)| registered)),
            ExprKind::Unary { op, operand } => Ok(op.apply(self.eval(operand)?)),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(op.apply(left, right))
            }
            ExprKind::Call { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.eval(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                let function = self
                    .builtins
                    .function(name)
                    .ok_or_else(|| undefined_function(name, expr.span))?;
                Ok(call_function(function, values))
            }
        }
    }
}

/// Invoke `function` positionally.
///
/// Omitted parameters take their default when they have one and read as NaN
/// otherwise, so `sin()` is NaN and `log(100)` uses base 10. Extra arguments
/// are passed through; the native function ignores them.
#[tracing::instrument(level = "debug", skip(function, args), fields(function = function.name))]
fn call_function(function: &BuiltinFunction, mut args: Vec<f64>) -> f64 {
    let supplied = args.len();
    args.extend(
        function
            .params
            .iter()
            .skip(supplied)
            .map(|param| param.default.unwrap_or(f64::NAN)),
    );
    let result = function.invoke(&args);
    trace!(?args, result, "call");
    result
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
