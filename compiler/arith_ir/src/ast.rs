//! Expression tree.
//!
//! Each node exclusively owns its children. Trees are built bottom-up by the
//! parser and never mutated afterwards.
//!
//! A left-associative chain such as `1 + 1 + ... + 1` nests one level per
//! operator, so every traversal either runs under
//! [`ensure_sufficient_stack`] or walks an explicit worklist. Dropping is
//! iterative.

use std::{fmt, mem};

use arith_stack::ensure_sufficient_stack;

use crate::{BinaryOp, Span, UnaryOp};

/// Expression node with its source span.
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExprKind {
    /// Numeric literal.
    Number(f64),
    /// Named constant with the value captured at lex time.
    Constant { name: &'static str, value: f64 },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Function call. Arity is not checked: missing arguments read as NaN.
    Call { name: &'static str, args: Vec<Expr> },
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn number(value: f64, span: Span) -> Self {
        Expr::new(ExprKind::Number(value), span)
    }

    pub fn constant(name: &'static str, value: f64, span: Span) -> Self {
        Expr::new(ExprKind::Constant { name, value }, span)
    }

    /// Unary node spanning from the operator to the end of its operand.
    pub fn unary(op: UnaryOp, operand: Expr, op_span: Span) -> Self {
        let span = op_span.merge(operand.span);
        Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        )
    }

    /// Binary node spanning both operands.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let span = left.span.merge(right.span);
        Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    pub fn call(name: &'static str, args: Vec<Expr>, span: Span) -> Self {
        Expr::new(ExprKind::Call { name, args }, span)
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            match &expr.kind {
                ExprKind::Number(_) | ExprKind::Constant { .. } => {}
                ExprKind::Unary { operand, .. } => pending.push(operand),
                ExprKind::Binary { left, right, .. } => {
                    pending.push(left);
                    pending.push(right);
                }
                ExprKind::Call { args, .. } => pending.extend(args),
            }
        }
        count
    }

    /// Move the children out of this node, leaving it a leaf.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        if matches!(self.kind, ExprKind::Number(_) | ExprKind::Constant { .. }) {
            return;
        }
        match mem::replace(&mut self.kind, ExprKind::Number(0.0)) {
            ExprKind::Unary { operand, .. } => out.push(*operand),
            ExprKind::Binary { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            ExprKind::Call { args, .. } => out.extend(args),
            ExprKind::Number(_) | ExprKind::Constant { .. } => {}
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Expr {
            kind: self.kind.clone(),
            span: self.span,
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.span == other.span && self.kind == other.kind)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Expr")
                .field("kind", &self.kind)
                .field("span", &self.span)
                .finish()
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Expr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        ensure_sufficient_stack(|| {
            let mut s = serializer.serialize_struct("Expr", 2)?;
            s.serialize_field("kind", &self.kind)?;
            s.serialize_field("span", &self.span)?;
            s.end()
        })
    }
}

/// Fully parenthesized rendering: every unary and binary node is wrapped,
/// so the output shows exactly how the parser grouped the input.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_node(f))
    }
}

impl Expr {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(v) => write!(f, "{v}"),
            ExprKind::Constant { name, .. } => f.write_str(name),
            ExprKind::Unary { op, operand } => write!(f, "({op}{operand})"),
            ExprKind::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            ExprKind::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
