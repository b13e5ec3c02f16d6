use std::io::{self, Write};

use super::{report, write_json, Options};
use crate::{evaluate, Evaluation};

/// `arith eval`: print the value or the rendered diagnostic.
pub fn eval_expression<O: Write, E: Write>(
    expression: &str,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let evaluation = evaluate(expression);
    if options.json {
        write_json(out, &evaluation)?;
        return Ok(evaluation.is_success());
    }

    match &evaluation {
        Evaluation::Success { value, .. } => {
            writeln!(out, "{value}")?;
            Ok(true)
        }
        Evaluation::Failure { error, .. } => {
            report(&error.to_diagnostic(), expression, options, err);
            Ok(false)
        }
    }
}
