//! Interior mesh on the open unit interval.
//!
//! For a problem size `N` the step is `h = 1/(N+1)` and the mesh points are
//! `x_i = (i+1)·h`, `i = 0..N`.  The boundary points `0` and `1` carry the
//! homogeneous Dirichlet values and are not stored.  The right-hand side of
//! the discrete system is `q_i = h²·f(x_i)`.

use crate::array::Array;
use td_core::{
    errors::{Error, Result},
    Real, Size,
};

/// A source term `f(x)` sampled on the mesh.
///
/// Any `Fn(Real) -> Real` is a `SourceFunction`.  Implementors with a
/// cheaper whole-array evaluation can override [`eval_array`](Self::eval_array).
pub trait SourceFunction {
    /// Evaluate `f` at a single point.
    fn eval(&self, x: Real) -> Real;

    /// Evaluate `f` at every point of `x`.
    fn eval_array(&self, x: &Array) -> Array {
        x.map(|xi| self.eval(xi))
    }
}

impl<F> SourceFunction for F
where
    F: Fn(Real) -> Real,
{
    fn eval(&self, x: Real) -> Real {
        (self)(x)
    }
}

/// Interior mesh points and the scaled right-hand side `h²·f(x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    step: Real,
    points: Array,
    rhs: Array,
}

impl Mesh {
    /// Build the mesh for `n` interior points and sample `source` on it.
    ///
    /// # Errors
    /// [`Error::InvalidSize`] if `n == 0`; nothing is allocated in that case.
    pub fn new<S: SourceFunction + ?Sized>(n: Size, source: &S) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize(0));
        }
        let step = 1.0 / (n as Real + 1.0);
        let points = Array::from_fn(n, |i| (i + 1) as Real * step);
        let rhs = source.eval_array(&points).scale(step * step);
        Ok(Self { step, points, rhs })
    }

    /// Number of interior points `N`.
    pub fn size(&self) -> Size {
        self.points.size()
    }

    /// Step size `h = 1/(N+1)`.
    pub fn step(&self) -> Real {
        self.step
    }

    /// Mesh points `x`.
    pub fn points(&self) -> &Array {
        &self.points
    }

    /// Right-hand side `q = h²·f(x)`.
    pub fn rhs(&self) -> &Array {
        &self.rhs
    }

    /// Split into `(x, q)`.
    pub fn into_parts(self) -> (Array, Array) {
        (self.points, self.rhs)
    }
}
