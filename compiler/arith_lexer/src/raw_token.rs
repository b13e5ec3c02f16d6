//! Raw Token Definition
//!
//! The logos-derived scanner output, before literal parsing and identifier
//! resolution.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,

    #[regex(r"[0-9]+")]
    Integer,

    // `1.5`, `2.`, `.5`
    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+")]
    Decimal,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Ident,
}
