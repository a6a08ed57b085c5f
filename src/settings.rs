//! Configuration settings for the reformulator.

/// How diagonal (self-product) terms `Q[i][i] * x_i^2` are handled.
///
/// For a binary variable `x_i^2 = x_i`, so both options yield the same
/// optimum; they differ only in model size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagonalPolicy {
    /// Fold `Q[i][i]` into the linear coefficient of `x_i`.
    ///
    /// Produces no self-product variables; this is the algebraically
    /// simplified encoding.
    #[default]
    FoldIntoLinear,

    /// Emit an auxiliary variable `y[i][i]` with its full linking triple.
    ///
    /// Degenerate but valid; useful for checking the naive encoding against
    /// the folded one.
    AuxVariable,
}

/// Reformulator settings.
#[derive(Debug, Clone)]
pub struct LinearizeSettings {
    // === Validation ===
    /// Symmetry tolerance: `Q` is rejected if |Q[i][j] - Q[j][i]| exceeds this.
    pub sym_tol: f64,

    // === Model size ===
    /// Coefficients with magnitude at or below this threshold produce no
    /// auxiliary variable. The default keeps everything except exact zeros.
    pub zero_tol: f64,

    /// Handling of diagonal terms.
    pub diagonal_policy: DiagonalPolicy,

    // === Output ===
    /// Print a summary of the produced model.
    pub verbose: bool,
}

impl Default for LinearizeSettings {
    fn default() -> Self {
        Self {
            sym_tol: 1e-9,
            zero_tol: 0.0,
            diagonal_policy: DiagonalPolicy::default(),
            verbose: false,
        }
    }
}

impl LinearizeSettings {
    /// Create settings with verbose output enabled.
    pub fn verbose() -> Self {
        let mut s = Self::default();
        s.verbose = true;
        s
    }

    /// Set the symmetry tolerance.
    pub fn with_sym_tol(mut self, tol: f64) -> Self {
        self.sym_tol = tol;
        self
    }

    /// Set the coefficient drop threshold.
    pub fn with_zero_tol(mut self, tol: f64) -> Self {
        self.zero_tol = tol;
        self
    }

    /// Set the diagonal term policy.
    pub fn with_diagonal_policy(mut self, policy: DiagonalPolicy) -> Self {
        self.diagonal_policy = policy;
        self
    }
}
