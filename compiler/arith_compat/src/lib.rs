//! Legacy evaluation path.
//!
//! An older pipeline kept for callers that depend on its behavior:
//!
//! 1. validate parenthesis balance and allowed characters
//! 2. tokenize with constants substituted
//! 3. convert to postfix with the shunting-yard algorithm
//! 4. evaluate the postfix program on a value stack
//!
//! It differs from the main pipeline in several ways: no `%`, no unary
//! minus, commas are ignored so functions only ever see one argument, and
//! malformed programs evaluate to NaN instead of failing.

mod error;
mod functions;
mod postfix;
mod tokenize;
mod validate;

use serde::Serialize;
use tracing::debug;

pub use error::LegacyError;
pub use functions::{legacy_builtins, LEGACY_FUNCTION_NAMES};
pub use tokenize::LegacyToken;

/// Outcome of [`evaluate_expression`].
///
/// Serializes with the historical shape: `status` is `"sucessful"` (sic) or
/// `"failed"`, and the failure carries its error as `errorObject`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum LegacyEvaluation {
    #[serde(rename = "sucessful")]
    Success {
        expression: String,
        result: f64,
        tokens: Vec<LegacyToken>,
    },
    #[serde(rename = "failed")]
    Failure {
        expression: String,
        /// `None` when validation failed before tokenizing.
        tokens: Option<Vec<LegacyToken>>,
        #[serde(rename = "errorObject")]
        error: LegacyError,
        /// The raw causes; always exactly one.
        errors: Vec<LegacyError>,
    },
}

impl LegacyEvaluation {
    pub fn is_success(&self) -> bool {
        matches!(self, LegacyEvaluation::Success { .. })
    }

    pub fn result(&self) -> Option<f64> {
        match self {
            LegacyEvaluation::Success { result, .. } => Some(*result),
            LegacyEvaluation::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&LegacyError> {
        match self {
            LegacyEvaluation::Success { .. } => None,
            LegacyEvaluation::Failure { error, .. } => Some(error),
        }
    }

    pub fn expression(&self) -> &str {
        match self {
            LegacyEvaluation::Success { expression, .. }
            | LegacyEvaluation::Failure { expression, .. } => expression,
        }
    }

    pub fn tokens(&self) -> Option<&[LegacyToken]> {
        match self {
            LegacyEvaluation::Success { tokens, .. } => Some(tokens),
            LegacyEvaluation::Failure { tokens, .. } => tokens.as_deref(),
        }
    }
}

/// Evaluate `expression` with the legacy pipeline.
#[tracing::instrument(level = "debug")]
pub fn evaluate_expression(expression: &str) -> LegacyEvaluation {
    let builtins = legacy_builtins();
    let fail = |tokens, error: LegacyError| LegacyEvaluation::Failure {
        expression: expression.to_string(),
        tokens,
        errors: vec![error.clone()],
        error,
    };

    if let Err(error) = validate::validate(expression, builtins) {
        debug!(%error, "rejected by validation");
        return fail(None, error);
    }

    let tokens = tokenize::tokenize(expression, builtins);
    let program = match postfix::to_postfix(&tokens, builtins) {
        Ok(program) => program,
        Err(error) => return fail(Some(tokens), error),
    };
    debug!(tokens = tokens.len(), program = program.len(), "postfix");

    LegacyEvaluation::Success {
        expression: expression.to_string(),
        result: postfix::evaluate(&program),
        tokens,
    }
}
