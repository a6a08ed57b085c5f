//! qubolin: linearization of binary quadratic programs.
//!
//! Takes a quadratic objective over binary variables,
//!
//! ```text
//! optimize    x^T Q x + c^T x
//! subject to  x ∈ {0,1}^n
//! ```
//!
//! with `Q` symmetric, and produces an equivalent linear binary program by
//! introducing one auxiliary binary variable per product term together with
//! three linking inequalities. The output is a plain in-memory model
//! (variables, linear constraints, linear objective with a sense flag) ready
//! for any MIP solving backend; the [`SolverBackend`] trait is the seam.
//!
//! The transformation is pure and stateless: it either fully succeeds or
//! fails with [`ReformError::InvalidInput`] and produces nothing.
//!
//! # Example
//!
//! ```
//! use qubolin::{linearize, LinearizeSettings, QuadraticProblem};
//!
//! // Objective contribution 2*x0*x1 from Q = [[0, 1], [1, 0]]
//! let prob = QuadraticProblem::from_dense(
//!     &[vec![0.0, 1.0], vec![1.0, 0.0]],
//!     vec![0.0, 0.0],
//! ).unwrap();
//!
//! let model = linearize(&prob, &LinearizeSettings::default()).unwrap();
//! assert_eq!(model.num_aux_vars(), 1);
//! assert_eq!(model.num_constraints(), 3);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod reform;
pub mod settings;
pub mod solver;

pub use error::{ReformError, ReformResult};
pub use model::{
    LinExpr, LinearConstraint, LinearizedModel, QuadraticProblem, Relation, Sense, VarKind,
};
pub use reform::linearize;
pub use settings::{DiagonalPolicy, LinearizeSettings};
pub use solver::{ExhaustiveSolver, Solution, SolveStatus, SolverBackend};
