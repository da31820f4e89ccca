//! Closed-form Thomas solver for the `(−1, 2, −1)` second-difference matrix.

use num_traits::AsPrimitive;
use td_core::{errors::Result, Real, Size};
use td_math::{Array, Mesh};

use super::{Algorithm, TridiagonalSolver};

/// `num / den` as a real number.
#[inline]
fn ratio(num: Size, den: Size) -> Real {
    let num: Real = num.as_();
    let den: Real = den.as_();
    num / den
}

/// The Thomas algorithm specialised to the `(−1, 2, −1)` Toeplitz matrix.
///
/// For this pattern the eliminated pivots are `(i+2)/(i+1)` in closed form,
/// so the elimination factor of row `i` is `i/(i+1)` and the back-substitution
/// divisor is replaced by a multiplication with `(i+1)/(i+2)`.  No
/// coefficient bands are stored and no pivot can vanish.
#[derive(Debug, Clone)]
pub struct SpecialThomasSolver {
    q: Array,
    x: Array,
    v: Array,
    solved: bool,
}

impl SpecialThomasSolver {
    /// Solver for the `(−1, 2, −1)` system on `mesh`.
    pub fn new(mesh: Mesh) -> Self {
        let n = mesh.size();
        let (x, q) = mesh.into_parts();
        Self {
            q,
            x,
            v: Array::zeros(n),
            solved: false,
        }
    }

    /// Right-hand side; holds the forward-eliminated values once solved.
    pub fn rhs(&self) -> &Array {
        &self.q
    }

    fn forward_substitution(&mut self) {
        for i in 1..self.q.size() {
            self.q[i] += ratio(i, i + 1) * self.q[i - 1];
        }
    }

    fn backward_substitution(&mut self) {
        let n = self.q.size();
        self.v[n - 1] = ratio(n, n + 1) * self.q[n - 1];
        for i in (0..n - 1).rev() {
            self.v[i] = ratio(i + 1, i + 2) * (self.q[i] + self.v[i + 1]);
        }
    }
}

impl TridiagonalSolver for SpecialThomasSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Special
    }

    fn points(&self) -> &Array {
        &self.x
    }

    fn solution(&self) -> &Array {
        &self.v
    }

    fn is_solved(&self) -> bool {
        self.solved
    }

    fn solve(&mut self) -> Result<()> {
        if !self.solved {
            self.forward_substitution();
            self.backward_substitution();
            self.solved = true;
        }
        Ok(())
    }
}
