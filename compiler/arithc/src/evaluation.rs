//! The facade: lex, parse and evaluate behind a single panic boundary.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

use arith_eval::Evaluator;
use arith_ir::{Builtins, Expr, Token};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Fault};

/// Outcome of evaluating one expression.
///
/// `Success` carries every artifact. `Failure` carries whatever the stages
/// produced before the error: no tokens after a lex error, tokens but no tree
/// after a parse error, both after an evaluation error.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Evaluation {
    Success {
        expression: String,
        tokens: Vec<Token>,
        ast: Expr,
        value: f64,
    },
    Failure {
        expression: String,
        tokens: Option<Vec<Token>>,
        ast: Option<Expr>,
        error: Error,
        /// Raw causes; never empty.
        causes: Vec<Error>,
    },
}

impl Evaluation {
    pub fn is_success(&self) -> bool {
        matches!(self, Evaluation::Success { .. })
    }

    pub fn expression(&self) -> &str {
        match self {
            Evaluation::Success { expression, .. } | Evaluation::Failure { expression, .. } => {
                expression
            }
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Evaluation::Success { value, .. } => Some(*value),
            Evaluation::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Evaluation::Success { .. } => None,
            Evaluation::Failure { error, .. } => Some(error),
        }
    }

    pub fn causes(&self) -> &[Error] {
        match self {
            Evaluation::Success { .. } => &[],
            Evaluation::Failure { causes, .. } => causes,
        }
    }

    pub fn tokens(&self) -> Option<&[Token]> {
        match self {
            Evaluation::Success { tokens, .. } => Some(tokens),
            Evaluation::Failure { tokens, .. } => tokens.as_deref(),
        }
    }

    pub fn ast(&self) -> Option<&Expr> {
        match self {
            Evaluation::Success { ast, .. } => Some(ast),
            Evaluation::Failure { ast, .. } => ast.as_ref(),
        }
    }
}

/// Evaluate `expression` against the process-wide registry.
pub fn evaluate(expression: &str) -> Evaluation {
    evaluate_with(expression, Builtins::global())
}

/// Evaluate `expression` against `builtins`.
///
/// Never panics: stage errors and panics escaping a stage both come back as
/// [`Evaluation::Failure`].
#[tracing::instrument(level = "debug", skip(builtins))]
pub fn evaluate_with(expression: &str, builtins: &Builtins) -> Evaluation {
    let tokens = match settle(guarded("lex", || {
        arith_lexer::tokenize_with(expression, builtins)
    })) {
        Ok(tokens) => tokens,
        Err(err) => return failure(expression, None, None, err),
    };

    let ast = match settle(guarded("parse", || arith_parse::parse(&tokens))) {
        Ok(ast) => ast,
        Err(err) => return failure(expression, Some(tokens), None, err),
    };

    let evaluator = Evaluator::with_builtins(builtins);
    match settle(guarded("eval", || evaluator.eval(&ast))) {
        Ok(value) => {
            debug!(value, "evaluated");
            Evaluation::Success {
                expression: expression.to_string(),
                tokens,
                ast,
                value,
            }
        }
        Err(err) => failure(expression, Some(tokens), Some(ast), err),
    }
}

/// A stage error or a caught panic, before normalization.
enum StageFailure {
    Stage(Error),
    Fault(Caught),
}

struct Caught {
    fault: Fault,
    raw: String,
}

fn settle<T, E: Into<Error>>(
    result: Result<Result<T, E>, StageFailure>,
) -> Result<T, StageFailure> {
    result.and_then(|inner| inner.map_err(|e| StageFailure::Stage(e.into())))
}

/// Run one stage, turning a panic into a [`StageFailure::Fault`].
fn guarded<T>(stage: &'static str, f: impl FnOnce() -> T) -> Result<T, StageFailure> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let (message, payload_type) = panic_message(payload.as_ref());
        debug!(stage, %message, "panic caught");
        StageFailure::Fault(fault(message, stage, payload_type))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> (String, &'static str) {
    if let Some(s) = payload.downcast_ref::<&str>() {
        ((*s).to_string(), "&str")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        (s.clone(), "String")
    } else {
        ("panic with a non-string payload".to_string(), "unknown")
    }
}

fn fault(message: String, stage: &'static str, payload: &'static str) -> Caught {
    let mut properties = BTreeMap::new();
    properties.insert("stage".to_string(), stage.to_string());
    properties.insert("payload".to_string(), payload.to_string());
    let backtrace = Backtrace::capture();
    let stack = match backtrace.status() {
        BacktraceStatus::Captured => Some(backtrace.to_string()),
        _ => None,
    };
    Caught {
        fault: Fault {
            message: message.clone(),
            properties,
            stack,
        },
        raw: message,
    }
}

fn failure(
    expression: &str,
    tokens: Option<Vec<Token>>,
    ast: Option<Expr>,
    err: StageFailure,
) -> Evaluation {
    let (error, cause) = match err {
        StageFailure::Stage(error) => (error.clone(), error),
        StageFailure::Fault(caught) => (Error::Fault(caught.fault), Error::Panic(caught.raw)),
    };
    debug!(%error, code = %error.code(), "evaluation failed");
    Evaluation::Failure {
        expression: expression.to_string(),
        tokens,
        ast,
        error,
        causes: vec![cause],
    }
}
