//! Cell registry and cycle-aware graph evaluation.
//!
//! The graph owns one node per distinct cell id. Nodes are created when
//! their defining expression is registered, or earlier as placeholders when
//! another cell's expression references them first (forward references).
//!
//! Evaluation is a depth-first walk with three-state coloring: `InProgress`
//! marks a node on the active path, so meeting one again means the graph has
//! a cycle. The walk runs on an explicit work stack rather than recursion,
//! so dependency chains of any depth cannot exhaust the call stack.

use std::collections::HashMap;

use crate::error::{EngineError, Result};

use super::cell_ref::CellRef;
use super::deps::extract_dependencies;
use super::rpn::eval_rpn;

/// Evaluation progress of a single node. States only move forward.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvalState {
    Unvisited,
    /// On the active depth-first path; re-entry signals a cycle.
    InProgress,
    /// Value computed and cached.
    Done,
}

/// A single cell in the dependency graph.
#[derive(Clone, Debug)]
struct Node {
    /// RPN source text; `None` until the defining line has been seen.
    expression: Option<String>,
    /// Cached result, meaningful only once `state` is `Done`.
    value: f64,
    /// Referenced cells in first-occurrence order, duplicates kept.
    depends_on: Vec<CellRef>,
    state: EvalState,
}

impl Node {
    fn placeholder() -> Node {
        Node {
            expression: None,
            value: 0.0,
            depends_on: Vec::new(),
            state: EvalState::Unvisited,
        }
    }
}

/// Dependency graph over all cells of a sheet.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: HashMap<CellRef, Node>,
    /// Definition (row-major) order; doubles as root order and output order.
    order: Vec<CellRef>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    /// Number of defined cells.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Register the defining expression for `id`.
    ///
    /// If `id` already exists as a placeholder created by a forward
    /// reference, the placeholder is filled in; otherwise a fresh node is
    /// inserted. Referenced cells without a node yet get placeholders of
    /// their own.
    pub fn define(&mut self, id: CellRef, expression: &str) {
        let depends_on = extract_dependencies(expression);
        for dep in &depends_on {
            self.nodes.entry(*dep).or_insert_with(Node::placeholder);
        }

        let node = self.nodes.entry(id).or_insert_with(Node::placeholder);
        node.expression = Some(expression.to_string());
        node.depends_on = depends_on;
        self.order.push(id);
    }

    /// Evaluate every cell, returning values in definition order.
    ///
    /// Roots are taken in definition order so repeated runs over the same
    /// sheet behave identically. Results are memoized per node, and any
    /// cycle aborts the whole run with no partial output.
    pub fn evaluate_all(&mut self) -> Result<Vec<f64>> {
        let roots = self.order.clone();
        for root in roots {
            if self.state(root) != EvalState::Done {
                self.evaluate_from(root)?;
            }
        }
        Ok(self.order.iter().map(|id| self.nodes[id].value).collect())
    }

    fn state(&self, id: CellRef) -> EvalState {
        self.nodes
            .get(&id)
            .map_or(EvalState::Unvisited, |node| node.state)
    }

    /// Depth-first walk from `root` on an explicit work stack.
    ///
    /// A node is expanded (marked `InProgress`, unresolved dependencies
    /// pushed above it) on its first visit, and resolved when the walk
    /// returns to it with everything above popped off. The `InProgress` set
    /// is therefore exactly the active dependency chain, which makes an
    /// `InProgress` dependency the cycle signal.
    fn evaluate_from(&mut self, root: CellRef) -> Result<()> {
        let mut stack = vec![root];

        while let Some(&id) = stack.last() {
            match self.state(id) {
                EvalState::Done => {
                    // Already resolved via an earlier parent.
                    stack.pop();
                }
                EvalState::Unvisited => {
                    let deps = {
                        let node = self
                            .nodes
                            .get_mut(&id)
                            .ok_or_else(|| EngineError::UndefinedCell(id.to_string()))?;
                        node.state = EvalState::InProgress;
                        node.depends_on.clone()
                    };

                    let mut blocked = false;
                    for dep in deps {
                        match self.state(dep) {
                            EvalState::InProgress => {
                                return Err(EngineError::CircularDependency);
                            }
                            EvalState::Unvisited => {
                                stack.push(dep);
                                blocked = true;
                            }
                            EvalState::Done => {}
                        }
                    }

                    if !blocked {
                        self.resolve(id)?;
                        stack.pop();
                    }
                }
                EvalState::InProgress => {
                    // Second visit: every dependency underneath has finished.
                    self.resolve(id)?;
                    stack.pop();
                }
            }
        }

        Ok(())
    }

    /// Substitute resolved dependency values into the expression, run the
    /// RPN evaluator, and cache the result.
    fn resolve(&mut self, id: CellRef) -> Result<()> {
        let expression = self
            .nodes
            .get(&id)
            .and_then(|node| node.expression.clone())
            .ok_or_else(|| EngineError::UndefinedCell(id.to_string()))?;

        let substituted = self.substitute(&expression);
        let value = eval_rpn(&substituted)?;

        let node = self
            .nodes
            .get_mut(&id)
            .ok_or_else(|| EngineError::UndefinedCell(id.to_string()))?;
        node.expression = Some(substituted);
        node.value = value;
        node.state = EvalState::Done;
        Ok(())
    }

    /// Token-level replacement: a whole token equal to a resolved cell id
    /// becomes the decimal text of that cell's value. Replacing tokens
    /// rather than substrings keeps ids that prefix one another ("A1"
    /// inside "A10") intact.
    fn substitute(&self, expression: &str) -> String {
        expression
            .split_whitespace()
            .map(|token| match CellRef::from_str(token) {
                Some(dep) => match self.nodes.get(&dep) {
                    Some(node) if node.state == EvalState::Done => node.value.to_string(),
                    _ => token.to_string(),
                },
                None => token.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
