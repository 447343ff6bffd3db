//! Sheet model: grid dimensions plus the dependency graph of its cells.

use gridcalc_engine::Graph;

use crate::error::Result;

/// Upper bound on rows imposed by the single-letter row encoding.
pub const MAX_ROWS: usize = 26;

/// A parsed sheet.
#[derive(Debug)]
pub struct Sheet {
    rows: usize,
    cols: usize,
    graph: Graph,
}

impl Sheet {
    pub(crate) fn new(rows: usize, cols: usize, graph: Graph) -> Sheet {
        Sheet { rows, cols, graph }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Evaluate every cell, returning values in row-major definition order
    /// (the required output order). Safe to call repeatedly: results are
    /// memoized after the first run.
    pub fn evaluate(&mut self) -> Result<Vec<f64>> {
        Ok(self.graph.evaluate_all()?)
    }
}
