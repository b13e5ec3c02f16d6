use super::*;

#[test]
fn test_precedence_ordering() {
    assert!(BinaryOp::Pow.precedence() > BinaryOp::Mul.precedence());
    assert_eq!(BinaryOp::Mul.precedence(), BinaryOp::Div.precedence());
    assert_eq!(BinaryOp::Div.precedence(), BinaryOp::Rem.precedence());
    assert!(BinaryOp::Rem.precedence() > BinaryOp::Add.precedence());
    assert_eq!(BinaryOp::Add.precedence(), BinaryOp::Sub.precedence());
}

#[test]
fn test_only_pow_is_right_assoc() {
    for op in BinaryOp::ALL {
        assert_eq!(op.is_right_assoc(), op == BinaryOp::Pow, "{op}");
    }
}

#[test]
fn test_apply() {
    assert_eq!(BinaryOp::Add.apply(3.0, 4.0), 7.0);
    assert_eq!(BinaryOp::Sub.apply(3.0, 4.0), -1.0);
    assert_eq!(BinaryOp::Mul.apply(3.0, 4.0), 12.0);
    assert_eq!(BinaryOp::Div.apply(3.0, 4.0), 0.75);
    assert_eq!(BinaryOp::Pow.apply(2.0, 10.0), 1024.0);
    assert_eq!(UnaryOp::Neg.apply(2.5), -2.5);
}

#[test]
fn test_remainder_follows_dividend_sign() {
    assert_eq!(BinaryOp::Rem.apply(7.0, 3.0), 1.0);
    assert_eq!(BinaryOp::Rem.apply(-7.0, 3.0), -1.0);
    assert_eq!(BinaryOp::Rem.apply(7.0, -3.0), 1.0);
}

#[test]
fn test_division_by_zero_is_ieee() {
    assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
    assert_eq!(BinaryOp::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
    assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
    assert!(BinaryOp::Rem.apply(1.0, 0.0).is_nan());
}

#[test]
fn test_symbols() {
    let symbols: Vec<_> = BinaryOp::ALL.iter().map(|op| op.as_symbol()).collect();
    assert_eq!(symbols, ["+", "-", "*", "/", "%", "^"]);
    assert_eq!(UnaryOp::Neg.to_string(), "-");
}
