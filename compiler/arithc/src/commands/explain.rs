//! The `explain` command: describe a diagnostic code.

use std::io::{self, Write};

use arith_diagnostic::ErrorCode;

pub fn explain_error<O: Write, E: Write>(
    code_str: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let Some(code) = ErrorCode::from_str_opt(code_str.trim()) else {
        writeln!(err, "Unknown error code: {code_str}")?;
        writeln!(err)?;
        let known: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        writeln!(err, "Known codes: {}", known.join(", "))?;
        return Ok(false);
    };

    writeln!(out, "{code}: {}", code.description())?;
    Ok(true)
}
