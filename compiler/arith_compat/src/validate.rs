//! Up-front validation: parenthesis balance, then a character whitelist
//! applied after removing every known name.

use arith_ir::Builtins;

use crate::LegacyError;

/// Check `expression` before tokenizing.
pub fn validate(expression: &str, builtins: &Builtins) -> Result<(), LegacyError> {
    check_balance(expression)?;

    let sanitized = strip_names(expression, builtins);
    if sanitized.is_empty() || !sanitized.chars().all(is_allowed) {
        return Err(LegacyError::InvalidCharacters { sanitized });
    }
    Ok(())
}

/// A running count below zero fails immediately; a positive final count fails at the end.
fn check_balance(expression: &str) -> Result<(), LegacyError> {
    let mut open = 0i64;
    for c in expression.chars() {
        match c {
            '(' => open += 1,
            ')' => open -= 1,
            _ => {}
        }
        if open < 0 {
            return Err(LegacyError::TooManyClosing);
        }
    }
    if open > 0 {
        return Err(LegacyError::TooManyOpening);
    }
    Ok(())
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || "+-*/^(),.".contains(c) || c.is_whitespace()
}

/// Remove each function or constant name that stands as a whole word.
///
/// At each word start, names are tried in registry order (functions, then
/// constants) and the first one that ends on a word boundary is removed.
/// So `logn` survives the attempt to remove `log` and is removed itself.
pub(crate) fn strip_names(expression: &str, builtins: &Builtins) -> String {
    let bytes = expression.as_bytes();
    let mut out = String::with_capacity(expression.len());
    let mut rest = expression.char_indices().peekable();

    while let Some((i, c)) = rest.next() {
        let word_start = i == 0 || !is_word(bytes[i - 1]);
        let matched = word_start
            .then(|| {
                builtins.names().find(|name| {
                    expression[i..].starts_with(name)
                        && !bytes.get(i + name.len()).copied().is_some_and(is_word)
                })
            })
            .flatten();

        match matched {
            Some(name) => {
                let end = i + name.len();
                while rest.next_if(|&(j, _)| j < end).is_some() {}
            }
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
