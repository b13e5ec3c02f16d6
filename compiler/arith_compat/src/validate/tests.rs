use super::*;
use crate::legacy_builtins;
use pretty_assertions::assert_eq;

fn check(expression: &str) -> Result<(), LegacyError> {
    validate(expression, legacy_builtins())
}

fn strip(expression: &str) -> String {
    strip_names(expression, legacy_builtins())
}

#[test]
fn test_balanced() {
    assert_eq!(check("(1 + (2 * 3))"), Ok(()));
    assert_eq!(check("sin(PI / 2) + cos(0)"), Ok(()));
}

#[test]
fn test_too_many_closing() {
    assert_eq!(check("3 + 5)"), Err(LegacyError::TooManyClosing));
    // Fails at the first negative balance even if the total is zero.
    assert_eq!(check(")1("), Err(LegacyError::TooManyClosing));
}

#[test]
fn test_too_many_opening() {
    assert_eq!(check("(3 + 5"), Err(LegacyError::TooManyOpening));
}

#[test]
fn test_balance_checked_before_characters() {
    assert_eq!(check("(X"), Err(LegacyError::TooManyOpening));
}

#[test]
fn test_invalid_characters() {
    let err = check("10 * X - 5").unwrap_err();
    assert_eq!(
        err,
        LegacyError::InvalidCharacters {
            sanitized: "10 * X - 5".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "Expression contains invalid characters or unsupported tokens '10 * X - 5'"
    );
    assert!(check("7 % 2").is_err());
    assert!(check("").is_err());
}

#[test]
fn test_strip_whole_words_only() {
    assert_eq!(strip("sin(PI)"), "()");
    assert_eq!(strip("sinx(1)"), "sinx(1)");
    assert_eq!(strip("xsin(1)"), "xsin(1)");
    assert_eq!(strip("logn(5) + log(2)"), "(5) + (2)");
    assert_eq!(strip("log_two(8)"), "(8)");
    assert_eq!(strip("2PI"), "2PI");
    assert_eq!(strip("PIE"), "PIE");
}

#[test]
fn test_names_with_digits_rejected() {
    // `log2` is not a legacy name and `log` does not end on a boundary there.
    let err = check("log2(8)").unwrap_err();
    assert_eq!(
        err,
        LegacyError::InvalidCharacters {
            sanitized: "log2(8)".into()
        }
    );
}
