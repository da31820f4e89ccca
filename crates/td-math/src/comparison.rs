//! Comparison utilities.

use td_core::Real;

/// Default relative tolerance when comparing two solver outputs.
pub const RELATIVE_TOLERANCE: Real = 1e-10;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `|a - b| <= tolerance * max(|a|, |b|)`.
///
/// Exact equality (including two zeros) always compares close.
#[inline]
pub fn close_relative(a: Real, b: Real, tolerance: Real) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= tolerance * a.abs().max(b.abs())
}
