//! Legacy function table.
//!
//! Differs from the standard registry: `log_two` and `log_ten` replace
//! `log2` and `log10`, and `logn` scales and rounds a logarithm.

use std::sync::OnceLock;

use arith_ir::builtins::{arg, STANDARD_CONSTANTS, STANDARD_FUNCTIONS};
use arith_ir::{BuiltinFunction, Builtins, Param};
use tracing::error;

const X: &[Param] = &[Param::required("x")];
const WITH_BASE: &[Param] = &[Param::required("x"), Param::optional("base", 10.0)];

/// Round half up, as `Math.round` does: `-2.5` rounds to `-2`.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Names the legacy path accepts, in the order validation tries them.
pub const LEGACY_FUNCTION_NAMES: &[&str] = &[
    "sin", "cos", "tan", "atan", "asin", "acos", "abs", "sqrt", "ln", "log_two", "log_ten", "log",
    "logn", "exp",
];

static LEGACY_ONLY: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "log_two",
        params: X,
        call: |a| arg(a, 0).log2(),
    },
    BuiltinFunction {
        name: "log_ten",
        params: X,
        call: |a| arg(a, 0).log10(),
    },
    BuiltinFunction {
        name: "logn",
        params: WITH_BASE,
        call: |a| round_half_up(arg(a, 0).ln() / arg(a, 1).ln() * 10.0),
    },
];

static LEGACY_BUILTINS: OnceLock<Builtins> = OnceLock::new();

/// The legacy registry: the standard functions minus `log2`/`log10`, plus
/// the legacy-only entries, in [`LEGACY_FUNCTION_NAMES`] order.
pub fn legacy_builtins() -> &'static Builtins {
    LEGACY_BUILTINS.get_or_init(|| {
        let functions: Vec<BuiltinFunction> = LEGACY_FUNCTION_NAMES
            .iter()
            .filter_map(|name| {
                STANDARD_FUNCTIONS
                    .iter()
                    .chain(LEGACY_ONLY)
                    .find(|f| f.name == *name)
                    .copied()
            })
            .collect();
        Builtins::new(&functions, STANDARD_CONSTANTS).unwrap_or_else(|err| {
            error!(%err, "legacy builtin tables are inconsistent");
            Builtins::empty()
        })
    })
}
