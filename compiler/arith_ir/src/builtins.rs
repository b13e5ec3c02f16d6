//! Builtin function and constant registry.
//!
//! The standard registry is built once per process and never mutated. Hosts
//! that need a different set construct their own [`Builtins`] from static
//! tables; nothing mutates a registry after construction.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tracing::error;

/// Native computation. Arguments are read positionally.
pub type NativeFn = fn(&[f64]) -> f64;

/// Declared parameter of a builtin function.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Param {
    pub name: &'static str,
    /// Value used when the argument is omitted. `None` means required.
    pub default: Option<f64>,
}

impl Param {
    pub const fn required(name: &'static str) -> Self {
        Param {
            name,
            default: None,
        }
    }

    pub const fn optional(name: &'static str, default: f64) -> Self {
        Param {
            name,
            default: Some(default),
        }
    }
}

/// A named native function with its declared parameters.
#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    pub name: &'static str,
    pub params: &'static [Param],
    pub call: NativeFn,
}

impl BuiltinFunction {
    /// Number of leading parameters without a default.
    pub fn required_arity(&self) -> usize {
        self.params.iter().take_while(|p| p.default.is_none()).count()
    }

    /// Total number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Invoke the native function.
    #[inline]
    pub fn invoke(&self, args: &[f64]) -> f64 {
        (self.call)(args)
    }

    /// Signature text, e.g. `log(x, base = 10)`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| match p.default {
                Some(d) => format!("{} = {d}", p.name),
                None => p.name.to_string(),
            })
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinFunction")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Registry construction error: a name is declared twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateName(pub &'static str);

impl fmt::Display for DuplicateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "builtin name `{}` is declared more than once", self.0)
    }
}

impl std::error::Error for DuplicateName {}

/// Read argument `i`, or NaN when the caller supplied fewer arguments.
#[inline]
pub fn arg(args: &[f64], i: usize) -> f64 {
    args.get(i).copied().unwrap_or(f64::NAN)
}

const X: &[Param] = &[Param::required("x")];
const LOG_PARAMS: &[Param] = &[Param::required("x"), Param::optional("base", 10.0)];

/// Functions of the standard registry, in listing order.
pub static STANDARD_FUNCTIONS: &[BuiltinFunction] = &[
    BuiltinFunction {
        name: "sin",
        params: X,
        call: |a| arg(a, 0).sin(),
    },
    BuiltinFunction {
        name: "cos",
        params: X,
        call: |a| arg(a, 0).cos(),
    },
    BuiltinFunction {
        name: "tan",
        params: X,
        call: |a| arg(a, 0).tan(),
    },
    BuiltinFunction {
        name: "atan",
        params: X,
        call: |a| arg(a, 0).atan(),
    },
    BuiltinFunction {
        name: "asin",
        params: X,
        call: |a| arg(a, 0).asin(),
    },
    BuiltinFunction {
        name: "acos",
        params: X,
        call: |a| arg(a, 0).acos(),
    },
    BuiltinFunction {
        name: "abs",
        params: X,
        call: |a| arg(a, 0).abs(),
    },
    BuiltinFunction {
        name: "sqrt",
        params: X,
        call: |a| arg(a, 0).sqrt(),
    },
    BuiltinFunction {
        name: "ln",
        params: X,
        call: |a| arg(a, 0).ln(),
    },
    BuiltinFunction {
        name: "log",
        params: LOG_PARAMS,
        call: |a| arg(a, 0).ln() / arg(a, 1).ln(),
    },
    BuiltinFunction {
        name: "log2",
        params: X,
        call: |a| arg(a, 0).log2(),
    },
    BuiltinFunction {
        name: "log10",
        params: X,
        call: |a| arg(a, 0).log10(),
    },
    BuiltinFunction {
        name: "exp",
        params: X,
        call: |a| arg(a, 0).exp(),
    },
];

/// Constants of the standard registry.
pub static STANDARD_CONSTANTS: &[(&str, f64)] =
    &[("PI", std::f64::consts::PI), ("E", std::f64::consts::E)];

/// Immutable name tables for functions and constants.
///
/// Names are case-sensitive. Function and constant names are disjoint.
#[derive(Debug)]
pub struct Builtins {
    functions: Vec<BuiltinFunction>,
    function_index: FxHashMap<&'static str, usize>,
    constants: Vec<(&'static str, f64)>,
    constant_index: FxHashMap<&'static str, usize>,
}

static GLOBAL_BUILTINS: OnceLock<Builtins> = OnceLock::new();

impl Builtins {
    /// Build a registry from function and constant tables.
    ///
    /// Fails if any name appears twice, across both tables.
    pub fn new(
        functions: &[BuiltinFunction],
        constants: &[(&'static str, f64)],
    ) -> Result<Self, DuplicateName> {
        let mut function_index = FxHashMap::default();
        for (i, f) in functions.iter().enumerate() {
            if function_index.insert(f.name, i).is_some() {
                return Err(DuplicateName(f.name));
            }
        }
        let mut constant_index = FxHashMap::default();
        for (i, &(name, _)) in constants.iter().enumerate() {
            if function_index.contains_key(name) || constant_index.insert(name, i).is_some() {
                return Err(DuplicateName(name));
            }
        }
        Ok(Builtins {
            functions: functions.to_vec(),
            function_index,
            constants: constants.to_vec(),
            constant_index,
        })
    }

    /// The standard registry, freshly built.
    ///
    /// A name clash in the static tables logs an error and yields an empty
    /// registry, so every identifier then lexes as unknown.
    pub fn standard() -> Self {
        Self::new(STANDARD_FUNCTIONS, STANDARD_CONSTANTS).unwrap_or_else(|err| {
            error!(%err, "standard builtin tables are inconsistent");
            Builtins::empty()
        })
    }

    /// Registry with no entries.
    pub fn empty() -> Self {
        Builtins {
            functions: Vec::new(),
            function_index: FxHashMap::default(),
            constants: Vec::new(),
            constant_index: FxHashMap::default(),
        }
    }

    /// The process-wide standard registry.
    pub fn global() -> &'static Builtins {
        GLOBAL_BUILTINS.get_or_init(Builtins::standard)
    }

    /// Look up a function by name.
    pub fn function(&self, name: &str) -> Option<&BuiltinFunction> {
        self.function_index.get(name).map(|&i| &self.functions[i])
    }

    /// Look up a constant, returning its canonical name and value.
    pub fn constant(&self, name: &str) -> Option<(&'static str, f64)> {
        self.constant_index.get(name).map(|&i| self.constants[i])
    }

    /// Functions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &BuiltinFunction> + '_ {
        self.functions.iter()
    }

    /// Constants in declaration order.
    pub fn constants(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.constants.iter().copied()
    }

    /// All names, functions first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions
            .iter()
            .map(|f| f.name)
            .chain(self.constants.iter().map(|&(name, _)| name))
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::standard()
    }
}
