//! Legacy path errors.

use thiserror::Error;

/// Why the legacy path rejected an expression.
///
/// Messages are part of the legacy contract and must not change.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LegacyError {
    #[error("Mismatched parentheses - too many closing parentheses.")]
    TooManyClosing,
    #[error("Mismatched parentheses - too many opening parentheses.")]
    TooManyOpening,
    /// Carries the expression with every known name removed.
    #[error("Expression contains invalid characters or unsupported tokens '{sanitized}'")]
    InvalidCharacters { sanitized: String },
    /// An operator arrived while a function still waited for its `(`.
    #[error("Function `{name}` must be followed by a parenthesized argument")]
    FunctionWithoutArgument { name: &'static str },
}

impl serde::Serialize for LegacyError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
