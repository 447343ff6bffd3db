//! Error types for gridcalc core.

use thiserror::Error;

use gridcalc_engine::EngineError;

/// Errors that can occur while reading or evaluating a sheet.
#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Evaluation error: {0}")]
    Eval(
        #[from]
        #[source]
        EngineError,
    ),
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
