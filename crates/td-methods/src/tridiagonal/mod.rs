//! Tridiagonal Toeplitz systems and their direct solvers.
//!
//! Both solvers start from a [`Mesh`], turn its right-hand side into the
//! solution of `A·v = q` in `O(N)`, and share the [`TridiagonalSolver`]
//! interface so callers can pick one at run time through [`Algorithm`].

mod operator;
mod special;
mod thomas;

pub use operator::TridiagonalOperator;
pub use special::SpecialThomasSolver;
pub use thomas::{ThomasConfig, ThomasSolver, DEFAULT_PIVOT_TOLERANCE};

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use td_core::{
    ensure,
    errors::{Error, Result},
    Size,
};
use td_math::{Array, Mesh};

use crate::output;

// ── Algorithm selection ───────────────────────────────────────────────────────

/// Which Thomas-algorithm variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// General solver with explicit coefficient bands.
    General,
    /// Specialised solver for the `(−1, 2, −1)` pattern.
    Special,
}

impl Algorithm {
    /// The selector string accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::General => "general",
            Algorithm::Special => "special",
        }
    }

    /// Output file name for a run of size `n`: `<algorithm>_N_<n>.txt`.
    pub fn output_file_name(self, n: Size) -> String {
        format!("{}_N_{n}.txt", self.name())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "general" => Ok(Algorithm::General),
            "special" => Ok(Algorithm::Special),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

// ── Shared solver interface ───────────────────────────────────────────────────

/// Common interface of the tridiagonal solvers.
pub trait TridiagonalSolver {
    /// The variant this solver implements.
    fn algorithm(&self) -> Algorithm;

    /// Mesh points `x`.
    fn points(&self) -> &Array;

    /// Solution `v`; all zeros until [`solve`](Self::solve) succeeds.
    fn solution(&self) -> &Array;

    /// Whether [`solve`](Self::solve) has completed.
    fn is_solved(&self) -> bool;

    /// Run forward elimination and back-substitution.
    ///
    /// Calling `solve` again after success is a no-op.
    fn solve(&mut self) -> Result<()>;

    /// Number of interior points.
    fn size(&self) -> Size {
        self.points().size()
    }

    /// Write `x v` pairs to `dest`.
    fn write(&self, dest: &mut dyn Write) -> Result<()> {
        ensure!(self.is_solved(), "{} solver: write called before solve", self.algorithm());
        output::write_columns(dest, self.points(), self.solution())
    }

    /// Write `x v` pairs to the file at `path`.
    fn write_to_file(&self, path: &Path) -> Result<()> {
        ensure!(self.is_solved(), "{} solver: write called before solve", self.algorithm());
        output::write_to_file(path, self.points(), self.solution())
    }
}

/// Build the solver selected by `algorithm` over `mesh`.
///
/// The general solver gets the default `(−1, 2, −1)` bands so that both
/// choices solve the same system.
pub fn build_solver(algorithm: Algorithm, mesh: Mesh) -> Box<dyn TridiagonalSolver> {
    match algorithm {
        Algorithm::General => Box::new(ThomasSolver::new(mesh)),
        Algorithm::Special => Box::new(SpecialThomasSolver::new(mesh)),
    }
}
