//! Problem and model types for the reformulator.

mod linear;
mod quadratic;

pub use linear::{
    LinExpr, LinearConstraint, LinearizedModel, Relation, Sense, VarKind,
};
pub use quadratic::QuadraticProblem;
