//! Tridiagonal matrix-vector product, used to check solver output.

use td_core::{
    errors::{Error, Result},
    Real, Size,
};
use td_math::Array;

/// A tridiagonal matrix stored by bands.
///
/// Row `i` of `A·x` is `a[i−1]·x[i−1] + b[i]·x[i] + c[i]·x[i+1]`, so
/// `lower[n−1]` and `upper[n−1]` are never read.  This is the indexing the
/// Thomas solvers use for their coefficient vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    lower: Array,
    diag: Array,
    upper: Array,
}

impl TridiagonalOperator {
    /// Constant-band (Toeplitz) operator of size `n`.
    pub fn toeplitz(n: Size, lower: Real, diag: Real, upper: Real) -> Self {
        Self {
            lower: Array::from_element(n, lower),
            diag: Array::from_element(n, diag),
            upper: Array::from_element(n, upper),
        }
    }

    /// The scaled negative second-difference operator `(−1, 2, −1)`.
    pub fn second_derivative(n: Size) -> Self {
        Self::toeplitz(n, -1.0, 2.0, -1.0)
    }

    /// Operator from explicit bands.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] unless all three bands have the same length.
    pub fn from_bands(lower: Array, diag: Array, upper: Array) -> Result<Self> {
        let n = diag.size();
        for band in [&lower, &upper] {
            if band.size() != n {
                return Err(Error::DimensionMismatch {
                    expected: n,
                    found: band.size(),
                });
            }
        }
        Ok(Self { lower, diag, upper })
    }

    /// Size (number of rows/columns).
    pub fn size(&self) -> Size {
        self.diag.size()
    }

    /// Sub-diagonal band.
    pub fn lower(&self) -> &Array {
        &self.lower
    }

    /// Main diagonal.
    pub fn diag(&self) -> &Array {
        &self.diag
    }

    /// Super-diagonal band.
    pub fn upper(&self) -> &Array {
        &self.upper
    }

    /// Apply the operator: `y = A · x`.
    pub fn apply(&self, x: &Array) -> Result<Array> {
        let n = self.size();
        if x.size() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                found: x.size(),
            });
        }
        let y = Array::from_fn(n, |i| {
            let mut yi = self.diag[i] * x[i];
            if i > 0 {
                yi += self.lower[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                yi += self.upper[i] * x[i + 1];
            }
            yi
        });
        Ok(y)
    }

    /// `‖A·x − rhs‖∞`, the largest absolute residual.
    pub fn residual(&self, x: &Array, rhs: &Array) -> Result<Real> {
        if rhs.size() != self.size() {
            return Err(Error::DimensionMismatch {
                expected: self.size(),
                found: rhs.size(),
            });
        }
        let ax = self.apply(x)?;
        Ok((&ax - rhs).norm_inf())
    }
}
