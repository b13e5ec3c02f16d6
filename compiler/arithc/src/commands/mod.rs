//! Command handlers for the `arith` CLI.
//!
//! Argument parsing lives here rather than in `main.rs` so the handlers can
//! be driven from tests with in-memory writers. Each handler writes results
//! to `out`, diagnostics to `err`, and returns whether it succeeded.

mod debug;
mod eval;
mod explain;
mod functions;
mod legacy;

use std::io::{self, Write};

use arith_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use arith_diagnostic::Diagnostic;
use thiserror::Error;

pub use debug::{dump_ast, dump_tokens};
pub use eval::eval_expression;
pub use explain::explain_error;
pub use functions::list_functions;
pub use legacy::eval_legacy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Eval,
    Tokens,
    Ast,
    Legacy,
    Functions,
    Explain,
}

impl Command {
    fn from_name(name: &str) -> Option<Command> {
        match name {
            "eval" => Some(Command::Eval),
            "tokens" => Some(Command::Tokens),
            "ast" => Some(Command::Ast),
            "legacy" => Some(Command::Legacy),
            "functions" => Some(Command::Functions),
            "explain" => Some(Command::Explain),
            _ => None,
        }
    }

    fn takes_argument(self) -> bool {
        !matches!(self, Command::Functions)
    }
}

/// Output options shared by every command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Options {
    pub json: bool,
    pub color: ColorMode,
    /// Whether stderr is a terminal that accepts color.
    pub stderr_is_tty: bool,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    /// The expression (or error code for `explain`); empty for `functions`.
    pub argument: String,
    pub options: Options,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("missing expression")]
    MissingArgument,
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
    #[error("invalid color mode `{0}` (expected auto, always, or never)")]
    InvalidColor(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Parse the arguments after the program name.
///
/// The first argument selects a command; anything else starts an implicit
/// `eval`. Remaining non-option arguments are joined with spaces, so
/// `arith 1 + 2` works unquoted. Only `--` followed by a letter is an
/// option, so `-2^2` and `--4` belong to the expression. A bare `--` ends
/// option parsing.
pub fn parse_args(args: &[String], stderr_is_tty: bool) -> Result<Invocation, UsageError> {
    let (command, rest) = match args.split_first() {
        Some((first, rest)) => match Command::from_name(first) {
            Some(command) => (command, rest),
            None => (Command::Eval, args),
        },
        None => return Err(UsageError::MissingArgument),
    };

    let mut options = Options {
        stderr_is_tty,
        ..Options::default()
    };
    let mut words = Vec::new();
    let mut args = rest.iter();
    while let Some(arg) = args.next() {
        if arg == "--" {
            words.extend(args.by_ref().map(String::as_str));
        } else if arg == "--json" {
            options.json = true;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color =
                ColorMode::parse(mode).ok_or_else(|| UsageError::InvalidColor(mode.to_string()))?;
        } else if is_option(arg) {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else {
            words.push(arg.as_str());
        }
    }

    let argument = words.join(" ");
    if command.takes_argument() && argument.trim().is_empty() {
        return Err(UsageError::MissingArgument);
    }
    if !command.takes_argument() && !argument.is_empty() {
        return Err(UsageError::UnexpectedArgument("functions"));
    }

    Ok(Invocation {
        command,
        argument,
        options,
    })
}

fn is_option(arg: &str) -> bool {
    arg.strip_prefix("--")
        .and_then(|name| name.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Run a parsed invocation.
pub fn run<O: Write, E: Write>(
    invocation: &Invocation,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let Invocation {
        command,
        argument,
        options,
    } = invocation;
    match command {
        Command::Eval => eval_expression(argument, options, out, err),
        Command::Tokens => dump_tokens(argument, options, out, err),
        Command::Ast => dump_ast(argument, options, out, err),
        Command::Legacy => eval_legacy(argument, options, out, err),
        Command::Functions => list_functions(options, out),
        Command::Explain => explain_error(argument, out, err),
    }
}

/// Render `diagnostic` against `source` on `err`.
fn report<E: Write>(diagnostic: &Diagnostic, source: &str, options: &Options, err: &mut E) {
    let mut emitter = TerminalEmitter::with_color_mode(err, options.color, options.stderr_is_tty);
    emitter.emit(diagnostic, source);
    emitter.flush();
}

/// One line of JSON on `out`.
fn write_json<O: Write, T: serde::Serialize>(out: &mut O, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
