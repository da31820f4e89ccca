//! # tridiag
//!
//! Direct solvers for tridiagonal Toeplitz systems (the Thomas algorithm
//! and its closed-form specialisation) plus a composite trapezoidal rule.
//!
//! This crate is a **façade** that re-exports the workspace crates and
//! ships the `thomas` and `trapezoidal` command-line programs.
//!
//! ## Quick start
//!
//! ```rust
//! use tridiag::math::Mesh;
//! use tridiag::methods::{build_solver, Algorithm};
//! use tridiag::source::exponential_source;
//!
//! let mesh = Mesh::new(100, &exponential_source).unwrap();
//! let mut solver = build_solver(Algorithm::Special, mesh);
//! solver.solve().unwrap();
//! assert_eq!(solver.solution().size(), 100);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use td_core as core;

/// Arrays, mesh generation, and quadrature.
pub use td_math as math;

/// Tridiagonal solvers and result output.
pub use td_methods as methods;

/// Source terms and reference solutions used by the programs.
pub mod source;
