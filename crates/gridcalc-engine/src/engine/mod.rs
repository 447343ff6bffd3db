//! Sheet evaluation engine.
//!
//! This module provides the core computation pipeline:
//!
//! - [`CellRef`] - Cell id parsing (A1 notation ↔ row/col indices)
//! - [`extract_dependencies`] - Find the cells an expression references
//! - [`eval_rpn`] - Stack evaluation of postfix arithmetic
//! - [`Graph`] - Cell registry + cycle-aware depth-first evaluation

mod cell_ref;
mod deps;
mod graph;
mod rpn;

pub use cell_ref::CellRef;
pub use deps::extract_dependencies;
pub use graph::{EvalState, Graph};
pub use rpn::eval_rpn;
