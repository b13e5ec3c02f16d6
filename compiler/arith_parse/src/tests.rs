use super::*;
use arith_ir::{BinaryOp, ExprKind, Span, TokenKind};
use arith_lexer::tokenize;
use pretty_assertions::assert_eq;

fn parse_str(source: &str) -> Result<Expr, ParseError> {
    parse(&tokenize(source).unwrap())
}

/// Fully parenthesized rendering of the parse.
fn show(source: &str) -> String {
    parse_str(source).unwrap().to_string()
}

fn err(source: &str) -> ParseError {
    parse_str(source).unwrap_err()
}

#[test]
fn test_precedence() {
    assert_eq!(show("3 + 4 * 2"), "(3 + (4 * 2))");
    assert_eq!(show("3 * 4 + 2"), "((3 * 4) + 2)");
    assert_eq!(show("(3 + 4) * 2"), "((3 + 4) * 2)");
    assert_eq!(show("2 * 3 ^ 2"), "(2 * (3 ^ 2))");
    assert_eq!(show("1 + 6 % 4"), "(1 + (6 % 4))");
}

#[test]
fn test_left_associativity() {
    assert_eq!(show("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(show("8 / 4 / 2"), "((8 / 4) / 2)");
    assert_eq!(show("7 % 3 * 2"), "((7 % 3) * 2)");
}

#[test]
fn test_pow_is_right_associative() {
    assert_eq!(show("2^3^2"), "(2 ^ (3 ^ 2))");
    assert_eq!(show("2 ** 3 ** 2"), "(2 ^ (3 ^ 2))");
}

#[test]
fn test_unary_minus_binds_tightest() {
    assert_eq!(show("-2^2"), "((-2) ^ 2)");
    assert_eq!(show("2^-1"), "(2 ^ (-1))");
    assert_eq!(show("1 - -2"), "(1 - (-2))");
    assert_eq!(show("--3"), "(-(-3))");
    assert_eq!(show("-(1 + 2)"), "(-(1 + 2))");
    assert_eq!(show("-PI"), "(-PI)");
}

#[test]
fn test_calls() {
    assert_eq!(show("log(8, 2)"), "log(8, 2)");
    assert_eq!(show("sin(PI / 2) + cos(0)"), "(sin((PI / 2)) + cos(0))");
    assert_eq!(show("sqrt(sqrt(16))"), "sqrt(sqrt(16))");
    assert_eq!(show("-abs(-1)"), "(-abs((-1)))");
}

#[test]
fn test_call_arity_is_not_checked() {
    let expr = parse_str("sin(1, 2, 3)").unwrap();
    let ExprKind::Call { name, args } = &expr.kind else {
        panic!("expected a call, got {expr}");
    };
    assert_eq!(*name, "sin");
    assert_eq!(args.len(), 3);
    assert_eq!(show("sin()"), "sin()");
}

#[test]
fn test_spans() {
    assert_eq!(parse_str("(1 + 2)").unwrap().span, Span::new(0, 7));
    assert_eq!(parse_str("sqrt(16)").unwrap().span, Span::new(0, 8));
    assert_eq!(parse_str("-3").unwrap().span, Span::new(0, 2));
    assert_eq!(parse_str("1 + 2 * 3").unwrap().span, Span::new(0, 9));
}

#[test]
fn test_constant_keeps_value() {
    let expr = parse_str("E").unwrap();
    assert_eq!(
        expr.kind,
        ExprKind::Constant {
            name: "E",
            value: std::f64::consts::E
        }
    );
}

#[test]
fn test_empty_input() {
    let e = err("");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(e.span, Span::point(0));
}

#[test]
fn test_missing_right_operand() {
    assert_eq!(err("1 +").kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(err("2 ^ (").kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn test_unclosed_paren() {
    let e = err("(3 + 5");
    assert_eq!(
        e.kind,
        ParseErrorKind::UnclosedDelimiter {
            open: Span::new(0, 1),
            found: TokenKind::Eof
        }
    );
    assert_eq!(e.span, Span::point(6));
}

#[test]
fn test_unmatched_close_paren_is_trailing_input() {
    let e = err("3 + 5)");
    assert_eq!(
        e.kind,
        ParseErrorKind::TrailingInput {
            found: TokenKind::RParen
        }
    );
    assert_eq!(e.span, Span::new(5, 6));
    assert_eq!(e.to_string(), "Unmatched `)` at line 1, column 6");
}

#[test]
fn test_trailing_operand_rejected() {
    let e = err("1 2");
    assert_eq!(
        e.kind,
        ParseErrorKind::TrailingInput {
            found: TokenKind::Integer(2.0)
        }
    );
    assert!(matches!(
        err("(1)(2)").kind,
        ParseErrorKind::TrailingInput {
            found: TokenKind::LParen
        }
    ));
}

#[test]
fn test_operator_in_operand_position() {
    let e = err("* 2");
    assert_eq!(e.kind, ParseErrorKind::UnexpectedOperator { op: BinaryOp::Mul });
    assert_eq!(
        err("1 + ^ 2").kind,
        ParseErrorKind::UnexpectedOperator { op: BinaryOp::Pow }
    );
    assert_eq!(
        err("+1").kind,
        ParseErrorKind::UnexpectedOperator { op: BinaryOp::Add }
    );
}

#[test]
fn test_function_requires_parens() {
    assert_eq!(
        err("sin 1").kind,
        ParseErrorKind::ExpectedToken {
            expected: "(",
            found: TokenKind::Integer(1.0)
        }
    );
    assert_eq!(
        err("sin").kind,
        ParseErrorKind::ExpectedToken {
            expected: "(",
            found: TokenKind::Eof
        }
    );
}

#[test]
fn test_malformed_argument_lists() {
    assert_eq!(
        err("sin(1,)").kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::RParen
        }
    );
    assert_eq!(
        err("log(8 2)").kind,
        ParseErrorKind::UnclosedDelimiter {
            open: Span::new(3, 4),
            found: TokenKind::Integer(2.0)
        }
    );
    assert_eq!(
        err("log(, 2)").kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Comma
        }
    );
}

#[test]
fn test_empty_group() {
    assert_eq!(
        err("()").kind,
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::RParen
        }
    );
}

#[test]
fn test_error_location_on_second_line() {
    let e = err("1 +\n  * 2");
    assert_eq!(e.location.line, 2);
    assert_eq!(e.location.column, 3);
}

#[test]
fn test_stream_without_eof() {
    let tokens = [arith_ir::Token::dummy(TokenKind::Integer(1.0))];
    assert_eq!(parse(&tokens).unwrap().kind, ExprKind::Number(1.0));
    assert_eq!(parse(&[]).unwrap_err().kind, ParseErrorKind::UnexpectedEof);
}

#[test]
fn test_deeply_nested_parens() {
    let depth = 50_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let expr = parse_str(&source).unwrap();
    assert_eq!(expr.kind, ExprKind::Number(1.0));
    assert_eq!(expr.span, Span::new(0, source.len() as u32));
}

#[test]
fn test_long_unary_chain() {
    let source = format!("{}1", "-".repeat(100_000));
    assert_eq!(parse_str(&source).unwrap().node_count(), 100_001);
}

#[test]
fn test_long_sum_is_left_deep() {
    let source = format!("1{}", " + 1".repeat(100_000));
    let expr = parse_str(&source).unwrap();
    assert_eq!(expr.node_count(), 200_001);
    let ExprKind::Binary { left, .. } = &expr.kind else {
        panic!("expected a binary node");
    };
    assert!(matches!(left.kind, ExprKind::Binary { .. }));
}
