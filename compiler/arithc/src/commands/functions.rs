use std::io::{self, Write};

use arith_ir::Builtins;
use serde::Serialize;

use super::{write_json, Options};

#[derive(Serialize)]
struct Listing<'a> {
    functions: Vec<FunctionEntry<'a>>,
    constants: Vec<ConstantEntry>,
}

#[derive(Serialize)]
struct FunctionEntry<'a> {
    name: &'a str,
    signature: String,
    arity: usize,
    required: usize,
}

#[derive(Serialize)]
struct ConstantEntry {
    name: &'static str,
    value: f64,
}

/// `arith functions`: the process-wide registry.
pub fn list_functions<O: Write>(options: &Options, out: &mut O) -> io::Result<bool> {
    let builtins = Builtins::global();

    if options.json {
        let listing = Listing {
            functions: builtins
                .functions()
                .map(|f| FunctionEntry {
                    name: f.name,
                    signature: f.signature(),
                    arity: f.arity(),
                    required: f.required_arity(),
                })
                .collect(),
            constants: builtins
                .constants()
                .map(|(name, value)| ConstantEntry { name, value })
                .collect(),
        };
        write_json(out, &listing)?;
        return Ok(true);
    }

    writeln!(out, "Functions:")?;
    for function in builtins.functions() {
        writeln!(out, "  {}", function.signature())?;
    }
    writeln!(out)?;
    writeln!(out, "Constants:")?;
    for (name, value) in builtins.constants() {
        writeln!(out, "  {name} = {value}")?;
    }
    Ok(true)
}
