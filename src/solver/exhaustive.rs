//! Exhaustive reference backend.

use crate::error::{ReformError, ReformResult};
use crate::model::{LinearizedModel, Sense};
use crate::solver::{Solution, SolveStatus, SolverBackend};

/// A backend that enumerates every binary assignment.
///
/// Exponential in the variable count, so it refuses models above a
/// configurable size. Intended as a correctness oracle for small models,
/// not as a solver.
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver {
    /// Refuse models with more variables than this.
    pub max_vars: usize,

    /// Constraint feasibility tolerance.
    pub feas_tol: f64,
}

impl Default for ExhaustiveSolver {
    fn default() -> Self {
        Self {
            max_vars: 25,
            feas_tol: 1e-9,
        }
    }
}

impl ExhaustiveSolver {
    /// Create a backend with the default limits.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolverBackend for ExhaustiveSolver {
    fn solve(&mut self, model: &LinearizedModel) -> ReformResult<Solution> {
        let n = model.num_vars();
        if n > self.max_vars {
            return Err(ReformError::Backend(format!(
                "Model has {} variables, enumeration limit is {}",
                n, self.max_vars
            )));
        }

        let mut best: Option<(Vec<f64>, f64)> = None;
        for mask in 0u64..(1u64 << n) {
            let x: Vec<f64> = (0..n).map(|k| ((mask >> k) & 1) as f64).collect();
            if !model.is_feasible(&x, self.feas_tol) {
                continue;
            }
            let obj = model.objective_value(&x);
            let better = match (&best, model.sense()) {
                (None, _) => true,
                (Some((_, incumbent)), Sense::Minimize) => obj < *incumbent,
                (Some((_, incumbent)), Sense::Maximize) => obj > *incumbent,
            };
            if better {
                best = Some((x, obj));
            }
        }

        match best {
            Some((x, obj_val)) => Ok(Solution {
                status: SolveStatus::Optimal,
                x,
                obj_val,
            }),
            None => Ok(Solution::infeasible()),
        }
    }
}
