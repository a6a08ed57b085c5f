//! Downstream solver boundary.
//!
//! The reformulator hands its output to an opaque MIP solving collaborator.
//! This module defines that seam plus a small exhaustive reference backend
//! used as a correctness oracle in tests.

mod exhaustive;

pub use exhaustive::ExhaustiveSolver;

use crate::error::ReformResult;
use crate::model::LinearizedModel;

/// Status reported by a solver backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Optimal solution found.
    Optimal,

    /// Model is infeasible.
    Infeasible,

    /// Model is unbounded.
    Unbounded,

    /// Time limit reached, best solution returned.
    TimeLimit,
}

impl SolveStatus {
    /// Returns true if a feasible assignment is available.
    pub fn has_solution(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::TimeLimit)
    }
}

/// Result of a backend solve.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Solve status.
    pub status: SolveStatus,

    /// Assignment over all variables, original then auxiliary (if found).
    pub x: Vec<f64>,

    /// Objective value at the assignment.
    pub obj_val: f64,
}

impl Solution {
    /// Create a solution indicating infeasibility.
    pub fn infeasible() -> Self {
        Self {
            status: SolveStatus::Infeasible,
            x: Vec::new(),
            obj_val: f64::INFINITY,
        }
    }
}

/// A MIP solving collaborator.
///
/// Implementations receive the linearized model and return an assignment to
/// every variable, auxiliaries included; callers typically project the
/// result back with [`LinearizedModel::extract_original`]. Backend failures
/// pass through unmodified as [`crate::ReformError::Backend`].
pub trait SolverBackend {
    /// Solve the model to optimality (or report why that is impossible).
    fn solve(&mut self, model: &LinearizedModel) -> ReformResult<Solution>;
}
