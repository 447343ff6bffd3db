//! gridcalc-engine - RPN expression evaluation over a cell dependency graph.

pub mod engine;
pub mod error;

pub use engine::{CellRef, EvalState, Graph, eval_rpn, extract_dependencies};
pub use error::{EngineError, Result};
