//! Arith: an arithmetic expression evaluator.
//!
//! [`evaluate`] runs the whole pipeline (`arith_lexer` -> `arith_parse` ->
//! `arith_eval`) and reports the outcome as an [`Evaluation`] value. Panics
//! never cross it. The per-stage crates stay usable on their own and return
//! plain `Result`s.
//!
//! The `arith` binary is a thin host over [`commands`].

pub mod commands;
mod error;
mod evaluation;

use std::sync::Once;

pub use arith_ir::Builtins;
pub use error::{Error, Fault};
pub use evaluation::{evaluate, evaluate_with, Evaluation};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
