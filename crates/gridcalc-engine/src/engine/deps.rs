//! Dependency extraction from expression text.
//!
//! Scans an expression's whitespace-separated tokens and collects the ones
//! that are cell ids. Everything else (numeric literals, operators) is left
//! for the RPN evaluator. First-occurrence order is preserved and duplicates
//! are kept, so substitution sees each occurrence.

use super::cell_ref::CellRef;

/// Extract all cell references from an expression, in token order.
pub fn extract_dependencies(expr: &str) -> Vec<CellRef> {
    expr.split_whitespace()
        .filter_map(CellRef::from_str)
        .collect()
}
