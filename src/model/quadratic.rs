//! Binary quadratic problem representation.

use sprs::{CsMat, TriMat};

use crate::error::{ReformError, ReformResult};
use crate::model::Sense;

/// A binary quadratic program.
///
/// The objective is
///
/// ```text
/// optimize    x^T Q x + c^T x
/// subject to  x ∈ {0,1}^n
/// ```
///
/// with `Q` symmetric. Note the convention: there is no 1/2 factor, and the
/// symmetric matrix double-counts each off-diagonal pair in the expansion of
/// `x^T Q x` (the pair `(i,j)` contributes `Q[i][j] + Q[j][i] = 2 Q[i][j]`).
#[derive(Debug, Clone)]
pub struct QuadraticProblem {
    /// Quadratic coefficient matrix (n × n, symmetric, CSC).
    q: CsMat<f64>,

    /// Linear coefficient vector (length n).
    c: Vec<f64>,

    /// Objective sense.
    sense: Sense,
}

impl QuadraticProblem {
    /// Create a problem from a sparse symmetric matrix and a linear vector.
    ///
    /// Checks that `q` is square and that `c` matches its dimension.
    /// Symmetry is checked later, at reformulation time, against the
    /// configured tolerance.
    pub fn new(q: CsMat<f64>, c: Vec<f64>) -> ReformResult<Self> {
        if q.rows() != q.cols() {
            return Err(ReformError::InvalidInput(format!(
                "Q has shape {}×{}, expected square",
                q.rows(),
                q.cols()
            )));
        }
        if c.len() != q.cols() {
            return Err(ReformError::InvalidInput(format!(
                "c has length {}, expected {}",
                c.len(),
                q.cols()
            )));
        }
        Ok(Self {
            q,
            c,
            sense: Sense::Minimize,
        })
    }

    /// Create a problem with no linear term (`c = 0`).
    pub fn without_linear(q: CsMat<f64>) -> ReformResult<Self> {
        let n = q.cols();
        Self::new(q, vec![0.0; n])
    }

    /// Create a problem from dense rows.
    ///
    /// Exact zeros are not stored, so they produce no auxiliary variables
    /// when the problem is linearized.
    pub fn from_dense(rows: &[Vec<f64>], c: Vec<f64>) -> ReformResult<Self> {
        let n = rows.len();
        let mut tri = TriMat::new((n, n));
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ReformError::InvalidInput(format!(
                    "Row {} has length {}, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            for (j, &val) in row.iter().enumerate() {
                if val != 0.0 {
                    tri.add_triplet(i, j, val);
                }
            }
        }
        Self::new(tri.to_csc(), c)
    }

    /// Set the objective sense (default: minimize).
    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.sense = sense;
        self
    }

    /// Number of decision variables (n).
    pub fn num_vars(&self) -> usize {
        self.c.len()
    }

    /// Number of stored quadratic coefficients.
    pub fn nnz(&self) -> usize {
        self.q.nnz()
    }

    /// The quadratic coefficient matrix.
    pub fn quadratic(&self) -> &CsMat<f64> {
        &self.q
    }

    /// The linear coefficient vector.
    pub fn linear(&self) -> &[f64] {
        &self.c
    }

    /// The objective sense.
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Check that `Q` is symmetric within `tol`.
    ///
    /// Every stored entry is compared against its transpose position; a
    /// missing transpose entry counts as zero.
    pub fn check_symmetric(&self, tol: f64) -> ReformResult<()> {
        for (&val, (i, j)) in self.q.iter() {
            let transpose = self.q.get(j, i).copied().unwrap_or(0.0);
            if (val - transpose).abs() > tol {
                return Err(ReformError::InvalidInput(format!(
                    "Q is not symmetric: Q[{}][{}] = {} but Q[{}][{}] = {}",
                    i, j, val, j, i, transpose
                )));
            }
        }
        Ok(())
    }

    /// Evaluate the objective `x^T Q x + c^T x` at an assignment.
    pub fn eval(&self, x: &[f64]) -> f64 {
        debug_assert_eq!(x.len(), self.num_vars());
        let quad: f64 = self
            .q
            .iter()
            .map(|(&val, (i, j))| val * x[i] * x[j])
            .sum();
        let lin: f64 = self.c.iter().zip(x.iter()).map(|(c, x)| c * x).sum();
        quad + lin
    }
}
