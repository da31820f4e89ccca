//! The model problem `−u''(x) = 100·e^{−10x}` on (0, 1), `u(0) = u(1) = 0`.

use td_core::Real;

/// Source term `f(x) = 100·e^{−10x}`.
pub fn exponential_source(x: Real) -> Real {
    100.0 * (-10.0 * x).exp()
}

/// Closed-form solution `u(x) = 1 − (1 − e^{−10})·x − e^{−10x}`.
pub fn analytical_solution(x: Real) -> Real {
    1.0 - (1.0 - (-10.0_f64).exp()) * x - (-10.0 * x).exp()
}

/// Integrand of the `trapezoidal` program, `e^{−x}`.
pub fn decay(x: Real) -> Real {
    (-x).exp()
}
