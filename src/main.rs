//! bigint-cow-testgen CLI
//!
//! Takes no arguments. Prints the copy-on-write test sections for every
//! configured operator to stdout, in configuration order:
//!
//!     bigint-cow-testgen > Tests/CoreTests/BigIntCOWTests+Generated.swift

use bigint_cow_testgen::*;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Diagnostics go to stderr so stdout carries only generated code.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(LevelFilter::WARN)
        .with_target(true)
        .init();
}

fn run() -> Result<()> {
    let config = GeneratorConfig::embedded()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for op in &config.operators {
        let block = render_operator(op, &config.collaborator)?;
        writeln!(out, "{}", block)?;
        tracing::debug!(operator = %op.name, "wrote operator section");
    }

    out.flush()?;
    Ok(())
}
