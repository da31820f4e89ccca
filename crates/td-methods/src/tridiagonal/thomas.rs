//! General Thomas solver for tridiagonal systems with explicit bands.

use td_core::{
    ensure,
    errors::{Error, Result},
    Real, Size,
};
use td_math::{Array, Mesh};

use super::{Algorithm, TridiagonalSolver};

/// Pivots with `|b| <=` this value are treated as zero.
///
/// The smallest normal `f64`: anything below it has a reciprocal that
/// overflows to infinity.
pub const DEFAULT_PIVOT_TOLERANCE: Real = f64::MIN_POSITIVE;

/// Settings for [`ThomasSolver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThomasConfig {
    /// Absolute threshold below which a pivot counts as singular.
    pub pivot_tolerance: Real,
}

impl Default for ThomasConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl ThomasConfig {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pivot tolerance.
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: Real) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }
}

/// Progress of a [`ThomasSolver`].
///
/// Elimination overwrites `b` and `q`, so a failed solve cannot be rerun
/// on the same bands; the error is kept and returned again instead.
#[derive(Debug, Clone, PartialEq)]
enum SolveState {
    Pending,
    Solved,
    Failed(Error),
}

/// The Thomas algorithm for a tridiagonal system with explicit bands.
///
/// Owns the sub-diagonal `a`, diagonal `b`, and super-diagonal `c` (row `i`
/// reads `a[i−1]`, `b[i]`, `c[i]`) together with the mesh and right-hand
/// side.  [`solve`](TridiagonalSolver::solve) overwrites `b` and `q` in
/// place during forward elimination and fills `v` on the way back.
///
/// No pivoting is performed.  Every diagonal entry is checked before it is
/// used as a divisor and a zero pivot is reported as
/// [`Error::SingularPivot`]; every later `solve` returns the same error.
#[derive(Debug, Clone)]
pub struct ThomasSolver {
    a: Array,
    b: Array,
    c: Array,
    q: Array,
    x: Array,
    v: Array,
    config: ThomasConfig,
    state: SolveState,
}

impl ThomasSolver {
    /// Solver for the `(−1, 2, −1)` system on `mesh`.
    pub fn new(mesh: Mesh) -> Self {
        Self::with_coefficients(mesh, -1.0, 2.0, -1.0)
    }

    /// Solver for the Toeplitz system with constant bands `a`, `b`, `c`.
    pub fn with_coefficients(mesh: Mesh, a: Real, b: Real, c: Real) -> Self {
        let n = mesh.size();
        let (x, q) = mesh.into_parts();
        Self {
            a: Array::from_element(n, a),
            b: Array::from_element(n, b),
            c: Array::from_element(n, c),
            q,
            x,
            v: Array::zeros(n),
            config: ThomasConfig::default(),
            state: SolveState::Pending,
        }
    }

    /// Solver with explicit coefficient vectors, each of length `N`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if any band length differs from the mesh size.
    pub fn from_vectors(mesh: Mesh, a: Array, b: Array, c: Array) -> Result<Self> {
        let n = mesh.size();
        for band in [&a, &b, &c] {
            if band.size() != n {
                return Err(Error::DimensionMismatch {
                    expected: n,
                    found: band.size(),
                });
            }
        }
        let (x, q) = mesh.into_parts();
        Ok(Self {
            a,
            b,
            c,
            q,
            x,
            v: Array::zeros(n),
            config: ThomasConfig::default(),
            state: SolveState::Pending,
        })
    }

    /// Replace the solver settings.
    ///
    /// # Errors
    /// [`Error::Precondition`] if the pivot tolerance is negative or not finite.
    pub fn with_config(mut self, config: ThomasConfig) -> Result<Self> {
        ensure!(
            config.pivot_tolerance.is_finite() && config.pivot_tolerance >= 0.0,
            "pivot tolerance must be a non-negative finite number, got {}",
            config.pivot_tolerance
        );
        self.config = config;
        Ok(self)
    }

    /// Current settings.
    pub fn config(&self) -> &ThomasConfig {
        &self.config
    }

    /// Diagonal band; holds the eliminated pivots once solved.
    pub fn diagonal(&self) -> &Array {
        &self.b
    }

    /// Right-hand side; holds the forward-eliminated values once solved.
    pub fn rhs(&self) -> &Array {
        &self.q
    }

    /// Return `b[i]` if it is usable as a divisor.
    fn pivot(&self, i: Size) -> Result<Real> {
        let value = self.b[i];
        if !value.is_finite() || value.abs() <= self.config.pivot_tolerance {
            return Err(Error::SingularPivot { index: i, value });
        }
        Ok(value)
    }

    fn forward_substitution(&mut self) -> Result<()> {
        for i in 1..self.q.size() {
            let pivot = self.pivot(i - 1)?;
            self.b[i] -= self.a[i - 1] * self.c[i - 1] / pivot;
            self.q[i] -= self.a[i - 1] * self.q[i - 1] / pivot;
        }
        Ok(())
    }

    fn eliminate(&mut self) -> Result<()> {
        self.forward_substitution()?;
        self.backward_substitution()
    }

    fn backward_substitution(&mut self) -> Result<()> {
        let n = self.q.size();
        // Rows 0..n-1 were checked during elimination.
        let last = self.pivot(n - 1)?;
        self.v[n - 1] = self.q[n - 1] / last;
        for i in (0..n - 1).rev() {
            self.v[i] = (self.q[i] - self.c[i] * self.v[i + 1]) / self.b[i];
        }
        Ok(())
    }
}

impl TridiagonalSolver for ThomasSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::General
    }

    fn points(&self) -> &Array {
        &self.x
    }

    fn solution(&self) -> &Array {
        &self.v
    }

    fn is_solved(&self) -> bool {
        self.state == SolveState::Solved
    }

    fn solve(&mut self) -> Result<()> {
        match &self.state {
            SolveState::Solved => return Ok(()),
            SolveState::Failed(err) => return Err(err.clone()),
            SolveState::Pending => {}
        }
        match self.eliminate() {
            Ok(()) => {
                self.state = SolveState::Solved;
                Ok(())
            }
            Err(err) => {
                self.state = SolveState::Failed(err.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mesh(n: Size) -> Mesh {
        Mesh::new(n, &|x: Real| 100.0 * (-10.0 * x).exp()).unwrap()
    }

    #[test]
    fn single_point_divides_by_diagonal() {
        let m = mesh(1);
        let q0 = m.rhs()[0];
        let mut solver = ThomasSolver::new(m);
        solver.solve().unwrap();
        assert_eq!(solver.solution()[0], q0 / 2.0);
    }

    #[test]
    fn identity_returns_rhs() {
        let m = mesh(6);
        let q = m.rhs().clone();
        let mut solver = ThomasSolver::with_coefficients(m, 0.0, 1.0, 0.0);
        solver.solve().unwrap();
        assert_eq!(solver.solution(), &q);
    }

    #[test]
    fn known_three_by_three() {
        // A = [[2, -1, 0], [-1, 2, -1], [0, -1, 2]], v = [1, 2, 3], A·v = [0, 0, 4]
        let m = Mesh::new(3, &|x: Real| if x > 0.7 { 64.0 } else { 0.0 }).unwrap();
        let mut solver = ThomasSolver::new(m);
        solver.solve().unwrap();
        let v = solver.solution();
        assert_relative_eq!(v[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(v[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(v[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn eliminated_pivots_follow_closed_form() {
        // For (−1, 2, −1) the i-th pivot is (i+2)/(i+1).
        let mut solver = ThomasSolver::new(mesh(10));
        solver.solve().unwrap();
        for i in 0..10 {
            let expected = (i + 2) as Real / (i + 1) as Real;
            assert_relative_eq!(solver.diagonal()[i], expected, max_relative = 1e-14);
        }
    }

    #[test]
    fn zero_leading_pivot_is_reported() {
        let mut solver = ThomasSolver::with_coefficients(mesh(4), -1.0, 0.0, -1.0);
        let err = solver.solve().unwrap_err();
        assert_eq!(
            err,
            Error::SingularPivot {
                index: 0,
                value: 0.0
            }
        );
        assert!(!solver.is_solved());
        assert!(solver.solution().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn zero_pivot_for_single_point() {
        let mut solver = ThomasSolver::with_coefficients(mesh(1), -1.0, 0.0, -1.0);
        assert!(matches!(
            solver.solve(),
            Err(Error::SingularPivot { index: 0, .. })
        ));
    }

    #[test]
    fn zero_pivot_arising_during_elimination() {
        // b = [1, 1, ...] with a = c = -1 gives b_1 = 1 - 1 = 0.
        let mut solver = ThomasSolver::with_coefficients(mesh(5), -1.0, 1.0, -1.0);
        assert!(matches!(
            solver.solve(),
            Err(Error::SingularPivot { index: 1, .. })
        ));
    }

    #[test]
    fn retry_after_singular_pivot_still_fails() {
        let mut solver = ThomasSolver::with_coefficients(mesh(5), -1.0, 1.0, -1.0);
        let first = solver.solve().unwrap_err();
        assert_eq!(
            first,
            Error::SingularPivot {
                index: 1,
                value: 0.0
            }
        );
        for _ in 0..2 {
            assert_eq!(solver.solve(), Err(first.clone()));
            assert!(!solver.is_solved());
        }
        assert!(solver.solution().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_pivot_in_last_row() {
        // b_1 = 1 - (-1)(-1)/1 = 0 is only used as a divisor in back-substitution.
        let mut solver = ThomasSolver::from_vectors(
            mesh(2),
            Array::from_element(2, -1.0),
            Array::from_slice(&[1.0, 1.0]),
            Array::from_element(2, -1.0),
        )
        .unwrap();
        let err = solver.solve().unwrap_err();
        assert_eq!(
            err,
            Error::SingularPivot {
                index: 1,
                value: 0.0
            }
        );
        assert_eq!(solver.solve(), Err(err));
        assert!(!solver.is_solved());
        assert!(solver.solution().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn tolerance_flags_near_zero_pivot() {
        let mut solver = ThomasSolver::with_coefficients(mesh(3), 0.0, 1e-9, 0.0)
            .with_config(ThomasConfig::new().with_pivot_tolerance(1e-6))
            .unwrap();
        assert_eq!(solver.config().pivot_tolerance, 1e-6);
        assert!(matches!(
            solver.solve(),
            Err(Error::SingularPivot { index: 0, .. })
        ));
    }

    #[test]
    fn default_config_and_diagonal() {
        let solver = ThomasSolver::new(mesh(4));
        assert_eq!(solver.config(), &ThomasConfig::default());
        assert_eq!(solver.config().pivot_tolerance, DEFAULT_PIVOT_TOLERANCE);
        assert!(solver.diagonal().iter().all(|&b| b == 2.0));
    }

    #[test]
    fn negative_tolerance_rejected() {
        let result = ThomasSolver::new(mesh(3))
            .with_config(ThomasConfig::new().with_pivot_tolerance(-1.0));
        assert!(matches!(result, Err(Error::Precondition(_))));
    }

    #[test]
    fn explicit_vectors_length_checked() {
        let err = ThomasSolver::from_vectors(
            mesh(3),
            Array::zeros(3),
            Array::zeros(2),
            Array::zeros(3),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn explicit_vectors_non_toeplitz() {
        // diag(1, 2, 4) with zero off-diagonals.
        let m = Mesh::new(3, &|_x: Real| 16.0).unwrap();
        let mut solver = ThomasSolver::from_vectors(
            m,
            Array::zeros(3),
            Array::from_slice(&[1.0, 2.0, 4.0]),
            Array::zeros(3),
        )
        .unwrap();
        solver.solve().unwrap();
        assert_eq!(solver.solution().as_slice(), &[1.0, 0.5, 0.25]);
    }
}
