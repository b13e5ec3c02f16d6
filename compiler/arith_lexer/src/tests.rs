use super::*;
use arith_ir::{BuiltinFunction, Location, Param};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn err(source: &str) -> LexError {
    tokenize(source).unwrap_err()
}

#[test]
fn test_simple_expression() {
    assert_eq!(
        kinds("3 + 4 * 2"),
        vec![
            TokenKind::Integer(3.0),
            TokenKind::Operator(BinaryOp::Add),
            TokenKind::Integer(4.0),
            TokenKind::Operator(BinaryOp::Mul),
            TokenKind::Integer(2.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_every_operator() {
    assert_eq!(
        kinds("+-*/%^"),
        vec![
            TokenKind::Operator(BinaryOp::Add),
            TokenKind::Operator(BinaryOp::Sub),
            TokenKind::Operator(BinaryOp::Mul),
            TokenKind::Operator(BinaryOp::Div),
            TokenKind::Operator(BinaryOp::Rem),
            TokenKind::Operator(BinaryOp::Pow),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_double_star_is_pow() {
    let tokens = tokenize("2**3").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Operator(BinaryOp::Pow));
    assert_eq!(tokens[1].span, Span::new(1, 3));
    assert_eq!(
        kinds("2***3")[1..3],
        [
            TokenKind::Operator(BinaryOp::Pow),
            TokenKind::Operator(BinaryOp::Mul)
        ]
    );
}

#[test]
fn test_number_literals() {
    assert_eq!(
        kinds("42 2.75 .5 2."),
        vec![
            TokenKind::Integer(42.0),
            TokenKind::Decimal(2.75),
            TokenKind::Decimal(0.5),
            TokenKind::Decimal(2.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_overlong_literal_is_infinite() {
    let digits = "9".repeat(400);
    assert_eq!(
        kinds(&digits),
        vec![TokenKind::Integer(f64::INFINITY), TokenKind::Eof]
    );
}

#[test]
fn test_second_dot_ends_literal() {
    assert_eq!(
        kinds("1.2.3"),
        vec![
            TokenKind::Decimal(1.2),
            TokenKind::Decimal(0.3),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_lone_dot_is_unrecognized() {
    let e = err("1 + .");
    assert_eq!(e.kind, LexErrorKind::UnrecognizedCharacter('.'));
    assert_eq!(e.span, Span::new(4, 5));
}

#[test]
fn test_constants_and_functions() {
    assert_eq!(
        kinds("sin(PI, E)"),
        vec![
            TokenKind::Function("sin"),
            TokenKind::LParen,
            TokenKind::Constant {
                name: "PI",
                value: std::f64::consts::PI
            },
            TokenKind::Comma,
            TokenKind::Constant {
                name: "E",
                value: std::f64::consts::E
            },
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifier_with_digits() {
    assert_eq!(kinds("log10(1)")[0], TokenKind::Function("log10"));
    assert_eq!(kinds("log2(1)")[0], TokenKind::Function("log2"));
}

#[test]
fn test_unknown_identifier() {
    let e = err("10 * X - 5");
    assert_eq!(e.kind, LexErrorKind::UnknownIdentifier("X".into()));
    assert_eq!(e.span, Span::new(5, 6));
    assert_eq!(e.location, Location::new(1, 6, 5));
    assert_eq!(e.to_string(), "Unknown identifier `X` at line 1, column 6");
}

#[test]
fn test_identifiers_are_case_sensitive() {
    assert_eq!(
        err("pi").kind,
        LexErrorKind::UnknownIdentifier("pi".into())
    );
    assert_eq!(
        err("SIN(1)").kind,
        LexErrorKind::UnknownIdentifier("SIN".into())
    );
}

#[test]
fn test_underscore_is_unrecognized() {
    // `log_two` is a legacy name: `log` lexes, then `_` is rejected.
    let e = err("log_two(8)");
    assert_eq!(e.kind, LexErrorKind::UnrecognizedCharacter('_'));
    assert_eq!(e.location.column, 4);
}

#[test]
fn test_unrecognized_character_location() {
    let e = err("1 +\n  2 $ 3");
    assert_eq!(e.kind, LexErrorKind::UnrecognizedCharacter('$'));
    assert_eq!(e.location, Location::new(2, 5, 8));
    assert_eq!(e.span, Span::new(8, 9));
}

#[test]
fn test_multibyte_unrecognized_character() {
    let e = err("2 × 3");
    assert_eq!(e.kind, LexErrorKind::UnrecognizedCharacter('×'));
    assert_eq!(e.span, Span::new(2, 4));
}

#[test]
fn test_locations_track_lines_and_tabs() {
    let tokens = tokenize("1 +\n\t2").unwrap();
    let locs: Vec<_> = tokens.iter().map(|t| (t.location.line, t.location.column)).collect();
    assert_eq!(locs, [(1, 1), (1, 3), (2, 5), (2, 6)]);
}

#[test]
fn test_crlf_is_one_line_break() {
    let tokens = tokenize("1\r\n+\r2").unwrap();
    let lines: Vec<_> = tokens.iter().map(|t| t.location.line).collect();
    assert_eq!(lines, [1, 2, 3, 3]);
}

#[test]
fn test_eof_always_last() {
    for source in ["", "   ", "1", "(1 + 2)", "\n\n"] {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.iter().filter(|t| t.kind.is_eof()).count(), 1);
        let last = tokens.last().unwrap();
        assert!(last.kind.is_eof());
        assert_eq!(last.span, Span::point(source.len() as u32));
    }
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn test_spans() {
    let tokens = tokenize("sqrt(16)").unwrap();
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        [
            Span::new(0, 4),
            Span::new(4, 5),
            Span::new(5, 7),
            Span::new(7, 8),
            Span::point(8)
        ]
    );
}

#[test]
fn test_custom_registry() {
    static FUNCS: &[BuiltinFunction] = &[BuiltinFunction {
        name: "half",
        params: &[Param::required("x")],
        call: |a| a[0] / 2.0,
    }];
    let builtins = Builtins::new(FUNCS, &[("K", 7.0)]).unwrap();
    let tokens = tokenize_with("half(K)", &builtins).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Function("half"));
    assert_eq!(
        tokens[2].kind,
        TokenKind::Constant {
            name: "K",
            value: 7.0
        }
    );
    assert!(tokenize_with("sin(1)", &builtins).is_err());
}

#[test]
fn test_whitespace_kinds_skipped() {
    assert_eq!(kinds(" \t1\r\n"), vec![TokenKind::Integer(1.0), TokenKind::Eof]);
}
