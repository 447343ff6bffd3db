//! Error types for the gridcalc engine.

use thiserror::Error;

/// Errors that can occur while evaluating a sheet's dependency graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Circular dependency detected")]
    CircularDependency,

    #[error("operator '{op}' needs two operands")]
    StackUnderflow { op: &'static str },

    #[error("expression produced no value")]
    EmptyExpression,

    #[error("invalid token in expression: {0}")]
    InvalidToken(String),

    #[error("cell {0} is referenced but never defined")]
    UndefinedCell(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
