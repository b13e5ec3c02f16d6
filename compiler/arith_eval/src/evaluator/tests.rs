use super::*;
use crate::EvalErrorKind;
use arith_ir::{BinaryOp, Param, Span, UnaryOp};
use pretty_assertions::assert_eq;

fn eval_str(source: &str) -> Result<f64, EvalError> {
    let tokens = arith_lexer::tokenize(source).unwrap();
    let expr = arith_parse::parse(&tokens).unwrap();
    Evaluator::new().eval(&expr)
}

fn value(source: &str) -> f64 {
    eval_str(source).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn num(v: f64) -> Expr {
    Expr::number(v, Span::default())
}

#[test]
fn test_arithmetic() {
    assert_eq!(value("3 + 4 * 2"), 11.0);
    assert_eq!(value("(3 + 4) * 2"), 14.0);
    assert_eq!(value("10 - 4 - 3"), 3.0);
    assert_eq!(value("2 * 3 / 4"), 1.5);
    assert_eq!(value("7 % 4"), 3.0);
    assert_eq!(value("-7 % 4"), -3.0);
}

#[test]
fn test_exponentiation() {
    assert_eq!(value("2^3^2"), 512.0);
    assert_eq!(value("2 ** 3 ** 2"), 512.0);
    assert_eq!(value("-2^2"), 4.0);
    assert_eq!(value("2^-1"), 0.5);
    assert_eq!(value("4^0.5"), 2.0);
    assert!(value("(-8)^(1/3)").is_nan());
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    assert_eq!(value("1 / 0"), f64::INFINITY);
    assert_eq!(value("-1 / 0"), f64::NEG_INFINITY);
    assert!(value("0 / 0").is_nan());
    assert!(value("5 % 0").is_nan());
}

#[test]
fn test_builtin_calls() {
    assert!(approx(value("sin(PI / 2) + cos(0)"), 2.0));
    assert!(approx(value("log(100)"), 2.0));
    assert!(approx(value("log(8, 2)"), 3.0));
    assert!(approx(value("ln(exp(1))"), 1.0));
    assert!(approx(value("sqrt(16) + abs(-2)"), 6.0));
    assert!(approx(value("log2(8) * log10(1000)"), 9.0));
    assert!(approx(value("atan(1) * 4"), std::f64::consts::PI));
    assert!(approx(value("asin(1) + acos(1)"), std::f64::consts::FRAC_PI_2));
    assert!(approx(value("tan(0)"), 0.0));
}

#[test]
fn test_extra_arguments_are_ignored() {
    assert!(approx(value("sqrt(9, 100)"), 3.0));
    assert!(approx(value("log(8, 2, 99)"), 3.0));
}

#[test]
fn test_missing_argument_reads_nan() {
    assert!(value("sin()").is_nan());
    assert!(value("log()").is_nan());
    assert!(value("sqrt() + 1").is_nan());
}

#[test]
fn test_arguments_evaluated_before_lookup() {
    // The inner call fails first even though the outer one is also undefined.
    let inner = Expr::call("nope", vec![], Span::new(6, 12));
    let outer = Expr::call("outer", vec![inner], Span::new(0, 13));
    let e = Evaluator::new().eval(&outer).unwrap_err();
    assert_eq!(
        e.kind,
        EvalErrorKind::UndefinedFunction {
            name: "nope".into()
        }
    );
    assert_eq!(e.span, Span::new(6, 12));
}

#[test]
fn test_constant_uses_registry_value() {
    let stale = Expr::constant("PI", 3.0, Span::default());
    assert_eq!(Evaluator::new().eval(&stale).unwrap(), std::f64::consts::PI);
}

#[test]
fn test_constant_falls_back_to_captured_value() {
    let builtins = Builtins::empty();
    let expr = Expr::binary(
        BinaryOp::Mul,
        Expr::constant("K", 21.0, Span::default()),
        num(2.0),
    );
    assert_eq!(Evaluator::with_builtins(&builtins).eval(&expr).unwrap(), 42.0);
}

#[test]
fn test_custom_registry_defaults() {
    static FUNCS: &[BuiltinFunction] = &[BuiltinFunction {
        name: "scale",
        params: &[Param::required("x"), Param::optional("by", 3.0)],
        call: |a| a[0] * a[1],
    }];
    let builtins = Builtins::new(FUNCS, &[]).unwrap();
    let ev = Evaluator::with_builtins(&builtins);
    let one_arg = Expr::call("scale", vec![num(2.0)], Span::default());
    let two_args = Expr::call("scale", vec![num(2.0), num(5.0)], Span::default());
    assert_eq!(ev.eval(&one_arg).unwrap(), 6.0);
    assert_eq!(ev.eval(&two_args).unwrap(), 10.0);

    let sin = Expr::call("sin", vec![num(0.0)], Span::default());
    assert!(matches!(
        ev.eval(&sin).unwrap_err().kind,
        EvalErrorKind::UndefinedFunction { .. }
    ));
}

#[test]
fn test_unary_negation() {
    let expr = Expr::unary(UnaryOp::Neg, num(4.5), Span::default());
    assert_eq!(Evaluator::new().eval(&expr).unwrap(), -4.5);
}

#[test]
fn test_deep_tree() {
    let mut expr = num(0.0);
    for _ in 0..100_000 {
        expr = Expr::binary(BinaryOp::Add, expr, num(1.0));
    }
    assert_eq!(Evaluator::new().eval(&expr).unwrap(), 100_000.0);
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let tokens = arith_lexer::tokenize("sin(1.3) ^ 2 + cos(1.3) ^ 2 / 7 % 0.3").unwrap();
    let expr = arith_parse::parse(&tokens).unwrap();
    let ev = Evaluator::new();
    let first = ev.eval(&expr).unwrap();
    for _ in 0..10 {
        assert_eq!(ev.eval(&expr).unwrap().to_bits(), first.to_bits());
    }
}
