//! Owned dense-matrix storage.
//!
//! This module provides the `Matrix<T>` type: a rectangular, row-major,
//! contiguous buffer with value semantics. Construction, element access,
//! resizing, and comparison live here; arithmetic and the determinant and
//! adjoint routines live in sibling modules.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use approx::AbsDiffEq;
use num_traits::Float;

use crate::error::MatError;

/// Dense rectangular matrix over a real element type.
///
/// Elements are stored row-major in a single contiguous allocation. A
/// `(0, 0)` matrix owns no buffer; a `(0, n)` or `(n, 0)` matrix is a
/// degenerate shape with a zero-length buffer. Cloning deep-copies the
/// buffer; [`Matrix::take`] transfers it and resets the source.
#[derive(Debug, Clone)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// The `(0, 0)` matrix with no storage.
    pub fn empty() -> Self {
        Matrix {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True only for the `(0, 0)` matrix.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    /// True when `rows == cols`, including `(0, 0)`.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when both dimensions match `other`'s.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Row-major view of the underlying buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major view of the underlying buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Moves the contents out, leaving `self` as the `(0, 0)` matrix.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub(crate) fn check_index(index: usize, extent: usize) -> Result<(), MatError> {
        if index >= extent {
            return Err(MatError::IndexOutOfBounds(index, extent));
        }
        Ok(())
    }

    pub(crate) fn checked_offset(&self, row: usize, col: usize) -> Result<usize, MatError> {
        Self::check_index(row, self.rows)?;
        Self::check_index(col, self.cols)?;
        Ok(self.offset(row, col))
    }

    pub(crate) fn require_square(&self) -> Result<(), MatError> {
        if self.rows != self.cols {
            return Err(MatError::NotSquare(self.rows, self.cols));
        }
        Ok(())
    }

    pub(crate) fn require_same_shape(&self, other: &Self) -> Result<(), MatError> {
        if !self.same_shape(other) {
            return Err(MatError::DimensionMismatch(
                self.rows, self.cols, other.rows, other.cols,
            ));
        }
        Ok(())
    }
}

impl<T: Copy + Float> Matrix<T> {
    /// A `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// A `rows x cols` matrix with every element set to `value`.
    pub fn from_elem(rows: usize, cols: usize, value: T) -> Self {
        Matrix {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Wraps a row-major buffer as a `rows x cols` matrix.
    ///
    /// Fails with `InvalidShape` when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatError> {
        if data.len() != rows * cols {
            return Err(MatError::InvalidShape(rows, cols, data.len()));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut mtx = Self::zeros(n, n);
        for i in 0..n {
            let k = mtx.offset(i, i);
            mtx.data[k] = T::one();
        }
        mtx
    }

    /// Bounds-checked element read.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatError> {
        let k = self.checked_offset(row, col)?;
        Ok(self.data[k])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatError> {
        let k = self.checked_offset(row, col)?;
        self.data[k] = value;
        Ok(())
    }

    /// Resizes to `rows` rows, keeping the overlapping block.
    pub fn set_nrows(&mut self, rows: usize) {
        self.set_shape(rows, self.cols);
    }

    /// Resizes to `cols` columns, keeping the overlapping block.
    pub fn set_ncols(&mut self, cols: usize) {
        self.set_shape(self.rows, cols);
    }

    /// Resizes to `rows x cols` in a single reallocation.
    ///
    /// Elements of the top-left block shared by the old and new shapes are
    /// kept in place; any grown region is zero-filled. Resizing to the
    /// current shape leaves the buffer untouched.
    pub fn set_shape(&mut self, rows: usize, cols: usize) {
        if rows == self.rows && cols == self.cols {
            return;
        }
        let mut next = Self::zeros(rows, cols);
        for r in 0..self.rows.min(rows) {
            for c in 0..self.cols.min(cols) {
                let k = next.offset(r, c);
                next.data[k] = self.data[self.offset(r, c)];
            }
        }
        *self = next;
    }
}

impl<T> Matrix<T>
where
    T: Copy + Float + AbsDiffEq<Epsilon = T>,
{
    /// Elementwise comparison within machine epsilon.
    ///
    /// Two matrices compare equal when their shapes match and every pair of
    /// elements differs by at most `T::epsilon()` in absolute value.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, T::epsilon())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.checked_offset(row, col) {
            Ok(k) => &self.data[k],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.checked_offset(row, col) {
            Ok(k) => &mut self.data[k],
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> PartialEq for Matrix<T>
where
    T: Copy + Float + AbsDiffEq<Epsilon = T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<T> AbsDiffEq for Matrix<T>
where
    T: Copy + Float + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        if !self.same_shape(other) {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (*a - *b).abs() <= epsilon)
    }
}

/// Renders as `Matrix{size: (R, C), matrix: M}` with six-decimal elements.
///
/// The `(0, 0)` matrix prints `[]`; degenerate shapes print `[...]`.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix{{size: ({}, {}), matrix: ", self.rows, self.cols)?;
        if self.rows == 0 && self.cols == 0 {
            write!(f, "[]")?;
        } else if self.rows == 0 || self.cols == 0 {
            write!(f, "[...]")?;
        } else {
            write!(f, "[")?;
            for r in 0..self.rows {
                if r > 0 {
                    write!(f, "; ")?;
                }
                write!(f, "[")?;
                for c in 0..self.cols {
                    if c > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:.6}", self.data[self.offset(r, c)])?;
                }
                write!(f, "]")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_storage() {
        let m = Matrix::<f64>::empty();
        assert_eq!(m.shape(), (0, 0));
        assert!(m.is_empty());
        assert!(m.is_square());
        assert!(m.as_slice().is_empty());
    }

    #[test]
    fn degenerate_is_not_empty() {
        let m = Matrix::<f64>::zeros(0, 4);
        assert_eq!(m.shape(), (0, 4));
        assert!(!m.is_empty());
        assert!(!m.is_square());
    }

    #[test]
    fn get_rejects_out_of_bounds() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(m.get(2, 0), Err(MatError::IndexOutOfBounds(2, 2)));
        assert_eq!(m.get(0, 3), Err(MatError::IndexOutOfBounds(3, 3)));
        assert_eq!(m.get(1, 2), Ok(0.0));
    }

    #[test]
    fn from_vec_checks_length() {
        let err = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]);
        assert_eq!(err, Err(MatError::InvalidShape(2, 2, 3)));
        let ok = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(ok[(1, 0)], 3.0);
    }

    #[test]
    fn take_resets_source() {
        let mut a = Matrix::from_elem(2, 2, 7.0);
        let b = a.take();
        assert!(a.is_empty());
        assert_eq!(b[(1, 1)], 7.0);
    }

    #[test]
    fn set_shape_keeps_overlap_and_zero_fills() {
        let mut m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        m.set_shape(3, 1);
        assert_eq!(m.as_slice(), &[1.0, 3.0, 0.0]);
        m.set_shape(2, 2);
        assert_eq!(m.as_slice(), &[1.0, 0.0, 3.0, 0.0]);
    }

    #[test]
    fn display_matches_fixed_width() {
        let m = Matrix::<f64>::zeros(2, 1);
        assert_eq!(
            m.to_string(),
            "Matrix{size: (2, 1), matrix: [[0.000000]; [0.000000]]}"
        );
        assert_eq!(
            Matrix::<f64>::empty().to_string(),
            "Matrix{size: (0, 0), matrix: []}"
        );
        assert_eq!(
            Matrix::<f64>::zeros(3, 0).to_string(),
            "Matrix{size: (3, 0), matrix: [...]}"
        );
    }

    #[test]
    fn approx_eq_uses_machine_epsilon() {
        let a = Matrix::from_elem(2, 2, 1.0f64);
        let mut b = a.clone();
        assert!(a.approx_eq(&b));
        b[(0, 0)] = 1.0 + f64::EPSILON;
        assert!(a.approx_eq(&b));
        b[(0, 0)] = 1.0 + 3.0 * f64::EPSILON;
        assert!(!a.approx_eq(&b));
        assert!(!a.approx_eq(&Matrix::zeros(2, 3)));
    }
}
