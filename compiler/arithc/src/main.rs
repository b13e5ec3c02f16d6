//! Arith CLI
//!
//! Evaluates arithmetic expressions from the command line.

use std::io::{self, IsTerminal};

use arithc::commands::{parse_args, run, UsageError};

fn main() {
    arithc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if matches!(
        args.first().map(String::as_str),
        None | Some("help" | "--help" | "-h")
    ) {
        print_usage();
        return;
    }
    if matches!(args.first().map(String::as_str), Some("--version" | "-V")) {
        println!("arith {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    // NO_COLOR only affects `--color=auto`.
    let stderr_is_tty = io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let invocation = match parse_args(&args, stderr_is_tty) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, UsageError::MissingArgument | UsageError::UnexpectedArgument(_)) {
                eprintln!();
                print_usage();
            }
            std::process::exit(2);
        }
    };

    let result = run(&invocation, &mut io::stdout().lock(), &mut io::stderr().lock());
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Arith expression evaluator");
    println!();
    println!("Usage: arith [command] <expression> [options]");
    println!();
    println!("Commands:");
    println!("  eval <expr>       Evaluate an expression (default)");
    println!("  tokens <expr>     Show the token stream");
    println!("  ast <expr>        Show the expression tree");
    println!("  legacy <expr>     Evaluate with the legacy shunting-yard path");
    println!("  functions         List builtin functions and constants");
    println!("  explain <code>    Describe a diagnostic code (e.g. E1004)");
    println!("  help              Show this message");
    println!();
    println!("Options:");
    println!("  --json                     Print the result as JSON");
    println!("  --color=auto|always|never  Color diagnostics (default: auto)");
    println!("  --                         Treat the remaining arguments as expression");
    println!();
    println!("Environment:");
    println!("  RUST_LOG        Tracing filter (e.g. RUST_LOG=arith_parse=trace)");
    println!("  RUST_BACKTRACE  Capture a stack trace for internal faults");
    println!("  NO_COLOR        Disable color in auto mode");
    println!();
    println!("Examples:");
    println!("  arith '3 + 4 * 2'");
    println!("  arith ast '2 ^ 3 ^ 2'");
    println!("  arith --json 'log(8, 2)'");
}
