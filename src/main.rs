//! gridcalc - evaluate an RPN spreadsheet read from stdin, one value per
//! cell on stdout.
//!
//! Input: a `<cols> <rows>` header line, then one postfix expression per
//! cell in row-major order. Output: each cell's value with five decimal
//! places, or the single line `Error: Circular dependency!` if the
//! dependency graph has a cycle.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use gridcalc_core::{CIRCULAR_DEPENDENCY_MSG, GridcalcError, read_sheet, write_values};
use gridcalc_engine::EngineError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut sheet = read_sheet(stdin.lock()).context("reading sheet from stdin")?;

    match sheet.evaluate() {
        Ok(values) => {
            let stdout = io::stdout();
            write_values(stdout.lock(), &values).context("writing cell values")?;
        }
        // A cycle anywhere suppresses all per-cell output and is reported
        // as a single clean line on stdout, not a failure.
        Err(GridcalcError::Eval(EngineError::CircularDependency)) => {
            println!("{}", CIRCULAR_DEPENDENCY_MSG);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
