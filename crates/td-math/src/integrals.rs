//! Numerical integration.
//!
//! Provides the composite trapezoidal rule on a fixed number of
//! subintervals.

use td_core::{
    errors::{Error, Result},
    fail,
    Real, Size,
};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

// ── Trapezoid ─────────────────────────────────────────────────────────────────

/// Composite trapezoidal rule on `n` equal subintervals.
///
/// `I ≈ h·(½f(a) + f(a+h) + … + f(b−h) + ½f(b))` with `h = (b−a)/n`.
/// The rule is exact for affine integrands and has an `O(h²)` error
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapezoidalRule {
    intervals: Size,
}

impl TrapezoidalRule {
    /// Create a rule with `intervals` subintervals.
    ///
    /// # Errors
    /// [`Error::InvalidSize`] if `intervals == 0`.
    pub fn new(intervals: Size) -> Result<Self> {
        if intervals == 0 {
            return Err(Error::InvalidSize(0));
        }
        Ok(Self { intervals })
    }

    /// Number of subintervals.
    pub fn intervals(&self) -> Size {
        self.intervals
    }
}

impl Integrator for TrapezoidalRule {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        if a == b {
            return Ok(0.0);
        }
        let n = self.intervals;
        let h = (b - a) / n as Real;

        let mut sum = 0.5 * (f(a) + f(b));
        for i in 1..n {
            sum += f(a + i as Real * h);
        }
        let value = sum * h;

        if !value.is_finite() {
            fail!("TrapezoidalRule: integral on [{a}, {b}] is not finite");
        }
        Ok(value)
    }
}
