//! Error codes for all pipeline diagnostics.

use std::fmt;

/// Error codes for all pipeline diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Evaluation errors
/// - E9xxx: Internal faults
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character
    E0001,
    /// Unknown identifier
    E0002,

    // Parser Errors (E1xxx)
    /// Unexpected end of input
    E1001,
    /// Expected expression
    E1002,
    /// Operator in operand position
    E1003,
    /// Unclosed delimiter or missing expected token
    E1004,
    /// Trailing input after a complete expression
    E1005,

    // Evaluation Errors (E6xxx)
    /// Unknown function
    E6001,

    // Internal Errors (E9xxx)
    /// Fault escaped a pipeline stage
    E9001,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E6001,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line explanation, used by `arith explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "a character that starts no token",
            ErrorCode::E0002 => "a name that is neither a constant nor a function",
            ErrorCode::E1001 => "input ended where an operand was expected",
            ErrorCode::E1002 => "a token that cannot start an expression",
            ErrorCode::E1003 => "a binary operator with no left operand",
            ErrorCode::E1004 => "a required token, usually `(` or `)`, is missing",
            ErrorCode::E1005 => "input continues after a complete expression",
            ErrorCode::E6001 => "a call to a function the registry does not define",
            ErrorCode::E9001 => "a native function or stage panicked",
        }
    }

    /// Parse a code such as `E1004` (case-insensitive).
    pub fn from_str_opt(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
