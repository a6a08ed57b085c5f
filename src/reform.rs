//! Quadratic-to-linear reformulation.
//!
//! Replaces each product `x[i] * x[j]` of binary variables in the objective
//! with an auxiliary binary variable `y[i][j]` tied to its sources by three
//! linking inequalities:
//!
//! ```text
//! y[i][j] <= x[i]
//! y[i][j] <= x[j]
//! y[i][j] >= x[i] + x[j] - 1
//! ```
//!
//! At any binary assignment these force `y[i][j] = x[i] AND x[j]`, so the
//! linearized objective agrees with `x^T Q x + c^T x` everywhere. Both
//! directions are emitted regardless of the coefficient sign; each is the
//! binding one for one sign, and correctness needs no branch on sign.
//!
//! The blow-up is O(n²) auxiliary variables and constraints. Only stored
//! coefficients whose accumulated magnitude exceeds the configured zero
//! threshold produce an auxiliary variable.

use std::collections::BTreeMap;

use crate::error::ReformResult;
use crate::model::{LinExpr, LinearizedModel, QuadraticProblem, Relation, VarKind};
use crate::settings::{DiagonalPolicy, LinearizeSettings};

/// Linearize a binary quadratic program.
///
/// Pure and deterministic: the same input always produces a model with
/// identical variable order, constraint order, and coefficients. Fails with
/// `InvalidInput` if `Q` is asymmetric beyond `settings.sym_tol`; on error no
/// model is produced.
///
/// Variable ids 0..n are the original variables in index order, followed by
/// the auxiliary variables in lexicographic pair order.
pub fn linearize(
    prob: &QuadraticProblem,
    settings: &LinearizeSettings,
) -> ReformResult<LinearizedModel> {
    prob.check_symmetric(settings.sym_tol)?;

    let n = prob.num_vars();

    // Accumulate stored entries into diagonal terms and unordered pairs.
    // Both (i, j) and (j, i) land in the same pair, so the pair coefficient
    // is Q[i][j] + Q[j][i] = 2 Q[i][j] as required by the x^T Q x expansion.
    let mut diag = vec![0.0; n];
    let mut pairs: BTreeMap<(usize, usize), f64> = BTreeMap::new();
    for (&val, (i, j)) in prob.quadratic().iter() {
        if i == j {
            diag[i] += val;
        } else {
            let key = if i < j { (i, j) } else { (j, i) };
            *pairs.entry(key).or_insert(0.0) += val;
        }
    }

    let mut lin = prob.linear().to_vec();
    match settings.diagonal_policy {
        // x[i]^2 = x[i] for binary x[i]
        DiagonalPolicy::FoldIntoLinear => {
            for i in 0..n {
                lin[i] += diag[i];
            }
        }
        DiagonalPolicy::AuxVariable => {
            for (i, &d) in diag.iter().enumerate() {
                if d != 0.0 {
                    pairs.insert((i, i), d);
                }
            }
        }
    }

    let mut model = LinearizedModel::new();
    for index in 0..n {
        model.add_variable(VarKind::Original { index });
    }

    let mut objective = LinExpr::new();
    for (i, &coef) in lin.iter().enumerate() {
        if coef != 0.0 {
            objective.add_term(i, coef);
        }
    }

    for (&(i, j), &coef) in &pairs {
        if coef.abs() <= settings.zero_tol {
            continue;
        }
        let y = model.add_variable(VarKind::Product { i, j });

        // y <= x[i]
        model.add_linear_constraint(
            LinExpr::new().term(y, 1.0).term(i, -1.0),
            Relation::Le,
            0.0,
        );
        // y <= x[j]
        model.add_linear_constraint(
            LinExpr::new().term(y, 1.0).term(j, -1.0),
            Relation::Le,
            0.0,
        );
        // y >= x[i] + x[j] - 1
        model.add_linear_constraint(
            LinExpr::new().term(y, 1.0).term(i, -1.0).term(j, -1.0),
            Relation::Ge,
            -1.0,
        );

        objective.add_term(y, coef);
    }

    model.set_objective(objective, prob.sense());

    if settings.verbose {
        log::info!(
            "Linearized {} binary vars: {} aux vars, {} constraints",
            n,
            model.num_aux_vars(),
            model.num_constraints()
        );
    }

    Ok(model)
}
