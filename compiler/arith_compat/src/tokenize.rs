//! Legacy tokenizer.
//!
//! Recognizes operators and parentheses, unsigned numbers, and identifiers
//! (which may contain `_`). Anything else, commas included, is skipped.
//! Constants are replaced by their values here.

use std::fmt;

use arith_ir::Builtins;
use logos::Logos;
use serde::Serialize;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"[()^*/+\-]")]
    Symbol,

    #[regex(r"[0-9]+\.?[0-9]*|\.[0-9]+")]
    Number,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// A legacy token: a number, or the text of any other token.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LegacyToken {
    Number(f64),
    Symbol(String),
}

impl fmt::Display for LegacyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyToken::Number(v) => write!(f, "{v}"),
            LegacyToken::Symbol(s) => f.write_str(s),
        }
    }
}

/// Split `expression` into legacy tokens.
pub fn tokenize(expression: &str, builtins: &Builtins) -> Vec<LegacyToken> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(expression);

    while let Some(result) = logos.next() {
        let Ok(raw) = result else {
            continue;
        };
        let slice = logos.slice();
        let token = match raw {
            RawToken::Number => match slice.parse::<f64>() {
                Ok(v) => LegacyToken::Number(v),
                Err(_) => LegacyToken::Symbol(slice.to_string()),
            },
            RawToken::Ident => match builtins.constant(slice) {
                Some((_, value)) => LegacyToken::Number(value),
                None => LegacyToken::Symbol(slice.to_string()),
            },
            RawToken::Symbol => LegacyToken::Symbol(slice.to_string()),
        };
        tokens.push(token);
    }
    tokens
}
