//! Linearized model representation.
//!
//! The output side of the reformulation: binary variables (original and
//! auxiliary product variables), linear constraints, and a linear objective.
//! Models are assembled through explicit builder methods rather than
//! operator-overloaded expression objects.

use std::collections::HashMap;

use crate::error::{ReformError, ReformResult};

/// Kind of a binary variable in the linearized model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// An original decision variable `x[index]`.
    Original {
        /// Index in the source problem.
        index: usize,
    },

    /// An auxiliary variable representing the product `x[i] * x[j]` (`i <= j`).
    Product {
        /// First source variable.
        i: usize,
        /// Second source variable.
        j: usize,
    },
}

/// A linear expression: a sum of (variable, coefficient) terms plus a constant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinExpr {
    /// Terms as (variable id, coefficient) pairs.
    pub terms: Vec<(usize, f64)>,

    /// Constant offset.
    pub constant: f64,
}

impl LinExpr {
    /// Create an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term. Returns self for chaining.
    pub fn term(mut self, var: usize, coef: f64) -> Self {
        self.terms.push((var, coef));
        self
    }

    /// Append a term in place.
    pub fn add_term(&mut self, var: usize, coef: f64) {
        self.terms.push((var, coef));
    }

    /// Evaluate the expression at an assignment.
    pub fn value(&self, x: &[f64]) -> f64 {
        let sum: f64 = self.terms.iter().map(|&(var, coef)| coef * x[var]).sum();
        sum + self.constant
    }
}

/// Relation of a linear constraint to its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `expr <= rhs`
    Le,
    /// `expr >= rhs`
    Ge,
    /// `expr == rhs`
    Eq,
}

/// A linear constraint: `expr <relation> rhs`.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// Left-hand side expression.
    pub expr: LinExpr,

    /// Relation to the right-hand side.
    pub relation: Relation,

    /// Right-hand side.
    pub rhs: f64,

    /// Optional name for debugging.
    pub name: Option<String>,
}

impl LinearConstraint {
    /// Create a new constraint.
    pub fn new(expr: LinExpr, relation: Relation, rhs: f64) -> Self {
        Self {
            expr,
            relation,
            rhs,
            name: None,
        }
    }

    /// Attach a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Check whether an assignment satisfies the constraint within `tol`.
    pub fn is_satisfied(&self, x: &[f64], tol: f64) -> bool {
        let val = self.expr.value(x);
        match self.relation {
            Relation::Le => val <= self.rhs + tol,
            Relation::Ge => val >= self.rhs - tol,
            Relation::Eq => (val - self.rhs).abs() <= tol,
        }
    }
}

/// Objective sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sense {
    /// Minimize the objective.
    #[default]
    Minimize,
    /// Maximize the objective.
    Maximize,
}

/// A linear binary program produced by the reformulator.
///
/// Variable ids are assigned in insertion order. The reformulator registers
/// the `n` original variables first, so variable id equals original index
/// for ids below `num_original_vars()`.
#[derive(Debug, Clone, Default)]
pub struct LinearizedModel {
    /// All binary variables, indexed by id.
    vars: Vec<VarKind>,

    /// Product pair (i, j) with i <= j, to variable id.
    products: HashMap<(usize, usize), usize>,

    /// Number of original variables.
    num_original: usize,

    /// All constraints.
    constraints: Vec<LinearConstraint>,

    /// Objective expression.
    objective: LinExpr,

    /// Objective sense.
    sense: Sense,
}

impl LinearizedModel {
    /// Create an empty model (minimization, objective 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binary variable. Returns its id.
    ///
    /// Product pairs are normalized to `i <= j`; registering the same pair
    /// twice returns the existing id.
    pub fn add_variable(&mut self, kind: VarKind) -> usize {
        let kind = match kind {
            VarKind::Product { i, j } if i > j => VarKind::Product { i: j, j: i },
            other => other,
        };
        if let VarKind::Product { i, j } = kind {
            if let Some(&id) = self.products.get(&(i, j)) {
                return id;
            }
        }

        let id = self.vars.len();
        self.vars.push(kind);
        match kind {
            VarKind::Original { .. } => self.num_original += 1,
            VarKind::Product { i, j } => {
                self.products.insert((i, j), id);
            }
        }
        id
    }

    /// Add a linear constraint. Returns its index.
    pub fn add_linear_constraint(
        &mut self,
        expr: LinExpr,
        relation: Relation,
        rhs: f64,
    ) -> usize {
        let id = self.constraints.len();
        self.constraints.push(LinearConstraint::new(expr, relation, rhs));
        id
    }

    /// Add a pre-built constraint. Returns its index.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) -> usize {
        let id = self.constraints.len();
        self.constraints.push(constraint);
        id
    }

    /// Set the objective expression and sense.
    pub fn set_objective(&mut self, expr: LinExpr, sense: Sense) {
        self.objective = expr;
        self.sense = sense;
    }

    /// Total number of variables (original + auxiliary).
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Number of original variables.
    pub fn num_original_vars(&self) -> usize {
        self.num_original
    }

    /// Number of auxiliary product variables.
    pub fn num_aux_vars(&self) -> usize {
        self.vars.len() - self.num_original
    }

    /// Number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Kind of a variable by id.
    pub fn var_kind(&self, id: usize) -> VarKind {
        self.vars[id]
    }

    /// All constraints.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// The objective expression.
    pub fn objective(&self) -> &LinExpr {
        &self.objective
    }

    /// The objective sense.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Variable id of the product `x[i] * x[j]`, if it exists.
    pub fn product_index(&self, i: usize, j: usize) -> Option<usize> {
        let key = if i <= j { (i, j) } else { (j, i) };
        self.products.get(&key).copied()
    }

    /// Evaluate the objective at a full assignment.
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        self.objective.value(x)
    }

    /// Check whether a full assignment satisfies every constraint.
    pub fn is_feasible(&self, x: &[f64], tol: f64) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied(x, tol))
    }

    /// Lift an assignment of the original variables to the full variable
    /// vector, setting each product variable to `x[i] * x[j]`.
    pub fn extend_assignment(&self, x: &[f64]) -> ReformResult<Vec<f64>> {
        if x.len() != self.num_original {
            return Err(ReformError::InvalidInput(format!(
                "Assignment has length {}, expected {}",
                x.len(),
                self.num_original
            )));
        }
        let mut full = Vec::with_capacity(self.vars.len());
        for &kind in &self.vars {
            match kind {
                VarKind::Original { index } => full.push(x[index]),
                VarKind::Product { i, j } => full.push(x[i] * x[j]),
            }
        }
        Ok(full)
    }

    /// Project a full solver assignment back to the original variables,
    /// discarding the auxiliaries.
    pub fn extract_original(&self, full: &[f64]) -> ReformResult<Vec<f64>> {
        if full.len() != self.vars.len() {
            return Err(ReformError::InvalidInput(format!(
                "Assignment has length {}, expected {}",
                full.len(),
                self.vars.len()
            )));
        }
        Ok(full[..self.num_original].to_vec())
    }
}
