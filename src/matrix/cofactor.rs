//! Minors, cofactors, and the adjugate route to the inverse.

use num_traits::Float;

use crate::error::MatError;
use crate::matrix::Matrix;

impl<T: Copy + Float> Matrix<T> {
    /// The submatrix left after deleting `row` and `col`.
    ///
    /// Defined for square matrices only; the `(0, 0)` matrix has no rows to
    /// delete, so any index is out of bounds for it.
    pub fn minor_matrix(&self, row: usize, col: usize) -> Result<Self, MatError> {
        self.require_square()?;
        Self::check_index(row, self.nrows())?;
        Self::check_index(col, self.ncols())?;
        let mut out = Self::zeros(self.nrows() - 1, self.ncols() - 1);
        for r in 0..self.nrows() {
            if r == row {
                continue;
            }
            for c in 0..self.ncols() {
                if c == col {
                    continue;
                }
                let rr = if r > row { r - 1 } else { r };
                let cc = if c > col { c - 1 } else { c };
                out[(rr, cc)] = self[(r, c)];
            }
        }
        Ok(out)
    }

    /// Determinant of the minor matrix at `(row, col)`.
    pub fn minor(&self, row: usize, col: usize) -> Result<T, MatError> {
        self.minor_matrix(row, col)?.determinant()
    }

    /// Matrix of algebraic complements: each entry is the minor at its
    /// position with the checkerboard sign applied.
    ///
    /// The `(0, 0)` matrix has an empty complement matrix.
    pub fn cofactor_matrix(&self) -> Result<Self, MatError> {
        self.require_square()?;
        let mut out = Self::zeros(self.nrows(), self.ncols());
        for r in 0..self.nrows() {
            for c in 0..self.ncols() {
                let m = self.minor(r, c)?;
                out[(r, c)] = if (r + c) % 2 == 0 { m } else { -m };
            }
        }
        Ok(out)
    }

    /// The inverse, as the transposed complement matrix over the determinant.
    ///
    /// Fails with `NotSquare` for rectangular shapes and `SingularMatrix`
    /// when the determinant is within machine epsilon of zero.
    pub fn inverse(&self) -> Result<Self, MatError> {
        let det = self.determinant()?;
        if det.abs() < T::epsilon() {
            return Err(MatError::SingularMatrix);
        }
        let mut adj = self.transpose().cofactor_matrix()?;
        adj.scale(T::one() / det);
        Ok(adj)
    }
}
