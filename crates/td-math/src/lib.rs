//! # td-math
//!
//! Mathematical building blocks: the [`Array`] vector newtype (over
//! nalgebra), floating-point comparison helpers, the interior-point
//! [`Mesh`] with its scaled right-hand side, and the trapezoidal rule.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// One-dimensional real vector.
pub mod array;

/// Floating-point comparison utilities.
pub mod comparison;

/// Numerical integration.
pub mod integrals;

/// Interior mesh on (0, 1) and the discretised source term.
pub mod mesh;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use array::Array;
pub use comparison::{close, close_relative};
pub use integrals::{Integrator, TrapezoidalRule};
pub use mesh::{Mesh, SourceFunction};
