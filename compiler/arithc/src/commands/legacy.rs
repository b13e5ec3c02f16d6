use std::io::{self, Write};

use arith_compat::{evaluate_expression, LegacyEvaluation};

use super::{write_json, Options};

/// `arith legacy`: run the shunting-yard compatibility path.
///
/// Its errors carry no source positions, so failures print as a single line.
pub fn eval_legacy<O: Write, E: Write>(
    expression: &str,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let evaluation = evaluate_expression(expression);
    if options.json {
        write_json(out, &evaluation)?;
        return Ok(evaluation.is_success());
    }

    match &evaluation {
        LegacyEvaluation::Success { result, .. } => {
            writeln!(out, "{result}")?;
            Ok(true)
        }
        LegacyEvaluation::Failure { error, .. } => {
            writeln!(err, "error: {error}")?;
            Ok(false)
        }
    }
}
