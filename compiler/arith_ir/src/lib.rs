//! Core data types for the arith expression pipeline.
//!
//! - [`Span`] and [`Location`]: where a token or node came from
//! - [`Token`] and [`TokenKind`]: lexer output
//! - [`Expr`] and [`ExprKind`]: the expression tree
//! - [`BinaryOp`] and [`UnaryOp`]: operators with precedence and semantics
//! - [`Builtins`]: the function and constant registry

mod ast;
pub mod builtins;
mod operators;
mod span;
mod token;

pub use ast::{Expr, ExprKind};
pub use builtins::{BuiltinFunction, Builtins, DuplicateName, NativeFn, Param};
pub use operators::{BinaryOp, UnaryOp};
pub use span::{Location, Span};
pub use token::{Token, TokenKind};
