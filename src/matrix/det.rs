//! Determinant of a square dense matrix.
//!
//! Orders zero through two are expanded directly. From order three upward
//! the determinant is the product of the pivots of a partially pivoted
//! Gaussian elimination run on a working copy, with the sign flipped once
//! per row swap. A pivot column whose largest entry falls below machine
//! epsilon ends the elimination early with an exact zero.
//!
//! # References
//! - Golub & Van Loan, "Matrix Computations", 4th ed., ch. 3.

use num_traits::Float;

use crate::error::MatError;
use crate::matrix::Matrix;

impl<T: Copy + Float> Matrix<T> {
    /// Computes the determinant.
    ///
    /// The `(0, 0)` matrix has determinant one. Fails with `NotSquare` for
    /// rectangular shapes.
    pub fn determinant(&self) -> Result<T, MatError> {
        self.require_square()?;
        let n = self.nrows();
        if n == 0 {
            return Ok(T::one());
        }
        if n == 1 {
            return Ok(self[(0, 0)]);
        }
        if n == 2 {
            return Ok(self[(0, 0)] * self[(1, 1)] - self[(1, 0)] * self[(0, 1)]);
        }

        let mut w = self.clone();
        let mut det = T::one();
        for r in 0..n {
            let mut pivot = r;
            for s in (r + 1)..n {
                if w[(s, r)].abs() > w[(pivot, r)].abs() {
                    pivot = s;
                }
            }
            if w[(pivot, r)].abs() < T::epsilon() {
                return Ok(T::zero());
            }
            if pivot != r {
                for c in 0..n {
                    let held = w[(pivot, c)];
                    w[(pivot, c)] = w[(r, c)];
                    w[(r, c)] = held;
                }
                det = -det;
            }
            det = det * w[(r, r)];
            for t in (r + 1)..n {
                let factor = w[(t, r)] / w[(r, r)];
                for u in r..n {
                    w[(t, u)] = w[(t, u)] - w[(r, u)] * factor;
                }
            }
        }
        Ok(det)
    }
}
