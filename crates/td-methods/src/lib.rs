//! # td-methods
//!
//! Direct solvers for the tridiagonal Toeplitz system `A·v = q` that arises
//! from the central-difference discretisation of `−u'' = f` on (0, 1) with
//! homogeneous Dirichlet boundaries.
//!
//! * [`tridiagonal::ThomasSolver`] — Thomas algorithm with explicit bands
//! * [`tridiagonal::SpecialThomasSolver`] — closed-form ratios for `(−1, 2, −1)`
//! * [`tridiagonal::TridiagonalOperator`] — banded matrix–vector product
//! * [`output`] — two-column `x v` text output

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Two-column result output.
pub mod output;

/// Tridiagonal operators and the Thomas-algorithm solvers.
pub mod tridiagonal;

pub use tridiagonal::{
    build_solver, Algorithm, SpecialThomasSolver, ThomasConfig, ThomasSolver,
    TridiagonalOperator, TridiagonalSolver,
};
