//! Arithmetic on dense matrices.
//!
//! The named methods (`add`, `sub`, `scale`, `matmul`, `transpose`) are the
//! primary surface and report shape problems through `MatError`. The
//! operator impls are thin bindings over them; since an operator cannot
//! return a `Result`, they panic with the same message the named method
//! would have returned.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::Float;

use crate::error::MatError;
use crate::matrix::Matrix;

impl<T: Copy + Float> Matrix<T> {
    /// Adds `other` elementwise in place.
    ///
    /// Fails with `DimensionMismatch` when the shapes differ.
    pub fn add(&mut self, other: &Self) -> Result<(), MatError> {
        self.require_same_shape(other)?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = *a + *b;
        }
        Ok(())
    }

    /// Subtracts `other` elementwise in place.
    ///
    /// Fails with `DimensionMismatch` when the shapes differ.
    pub fn sub(&mut self, other: &Self) -> Result<(), MatError> {
        self.require_same_shape(other)?;
        for (a, b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = *a - *b;
        }
        Ok(())
    }

    /// Multiplies every element by `factor`. Never fails.
    pub fn scale(&mut self, factor: T) {
        for a in self.as_mut_slice().iter_mut() {
            *a = *a * factor;
        }
    }

    /// Replaces `self` with the product `self * other`.
    ///
    /// Requires `self.ncols() == other.nrows()`; the result has shape
    /// `(self.nrows(), other.ncols())`. Accumulation walks rows of `self`,
    /// then the shared dimension, then columns of `other`.
    pub fn matmul(&mut self, other: &Self) -> Result<(), MatError> {
        if self.ncols() != other.nrows() {
            return Err(MatError::DimensionMismatch(
                self.nrows(),
                self.ncols(),
                other.nrows(),
                other.ncols(),
            ));
        }
        let mut out = Self::zeros(self.nrows(), other.ncols());
        for r in 0..self.nrows() {
            for k in 0..self.ncols() {
                let lhs = self[(r, k)];
                for c in 0..other.ncols() {
                    out[(r, c)] = out[(r, c)] + lhs * other[(k, c)];
                }
            }
        }
        *self = out;
        Ok(())
    }

    /// Returns the transpose, shaped `(self.ncols(), self.nrows())`.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.ncols(), self.nrows());
        for r in 0..self.nrows() {
            for c in 0..self.ncols() {
                out[(c, r)] = self[(r, c)];
            }
        }
        out
    }
}

impl<T: Copy + Float> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: Matrix<T>) -> Matrix<T> {
        Matrix::add(&mut self, &rhs).unwrap_or_else(|e| panic!("{e}"));
        self
    }
}

impl<T: Copy + Float> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        Matrix::add(&mut out, rhs).unwrap_or_else(|e| panic!("{e}"));
        out
    }
}

impl<T: Copy + Float> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

impl<T: Copy + Float> AddAssign<Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

impl<T: Copy + Float> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, rhs: Matrix<T>) -> Matrix<T> {
        Matrix::sub(&mut self, &rhs).unwrap_or_else(|e| panic!("{e}"));
        self
    }
}

impl<T: Copy + Float> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        Matrix::sub(&mut out, rhs).unwrap_or_else(|e| panic!("{e}"));
        out
    }
}

impl<T: Copy + Float> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

impl<T: Copy + Float> SubAssign<Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self -= &rhs;
    }
}

impl<T: Copy + Float> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, rhs: Matrix<T>) -> Matrix<T> {
        self.matmul(&rhs).unwrap_or_else(|e| panic!("{e}"));
        self
    }
}

impl<T: Copy + Float> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        let mut out = self.clone();
        out.matmul(rhs).unwrap_or_else(|e| panic!("{e}"));
        out
    }
}

impl<T: Copy + Float> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"));
    }
}

impl<T: Copy + Float> MulAssign<Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: Matrix<T>) {
        *self *= &rhs;
    }
}

impl<T: Copy + Float> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, rhs: T) -> Matrix<T> {
        self.scale(rhs);
        self
    }
}

impl<T: Copy + Float> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        let mut out = self.clone();
        out.scale(rhs);
        out
    }
}

impl<T: Copy + Float> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale(rhs);
    }
}

// Scalar-on-the-left multiplication. The orphan rule blocks a blanket
// `impl Mul<Matrix<T>> for T`, so the two element types are spelled out.
impl Mul<Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, mut rhs: Matrix<f64>) -> Matrix<f64> {
        rhs.scale(self);
        rhs
    }
}

impl Mul<&Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, rhs: &Matrix<f64>) -> Matrix<f64> {
        rhs * self
    }
}

impl Mul<Matrix<f32>> for f32 {
    type Output = Matrix<f32>;

    fn mul(self, mut rhs: Matrix<f32>) -> Matrix<f32> {
        rhs.scale(self);
        rhs
    }
}

impl Mul<&Matrix<f32>> for f32 {
    type Output = Matrix<f32>;

    fn mul(self, rhs: &Matrix<f32>) -> Matrix<f32> {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MatError;
    use crate::matrix::Matrix;

    fn seq(rows: usize, cols: usize) -> Matrix<f64> {
        let data = (0..rows * cols).map(|k| k as f64 + 1.0).collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    #[test]
    fn add_is_elementwise() {
        let mut a = seq(2, 3);
        let b = seq(2, 3);
        a.add(&b).unwrap();
        assert_eq!(a.as_slice(), &[2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn add_rejects_shape_mismatch() {
        let mut a = seq(2, 3);
        let b = seq(3, 2);
        assert_eq!(a.add(&b), Err(MatError::DimensionMismatch(2, 3, 3, 2)));
        // failed add leaves the target untouched
        assert_eq!(a, seq(2, 3));
    }

    #[test]
    fn sub_recovers_addend() {
        let mut a = seq(2, 2);
        let b = seq(2, 2);
        a.add(&b).unwrap();
        a.sub(&b).unwrap();
        assert_eq!(a, seq(2, 2));
    }

    #[test]
    fn scale_degenerate_is_noop() {
        let mut a = Matrix::<f64>::zeros(0, 5);
        a.scale(3.0);
        assert_eq!(a.shape(), (0, 5));
    }

    #[test]
    fn matmul_shapes_and_values() {
        // (2x3) * (3x1) -> (2x1)
        let mut a = seq(2, 3);
        let b = Matrix::from_vec(3, 1, vec![1.0, 0.0, -1.0]).unwrap();
        a.matmul(&b).unwrap();
        assert_eq!(a.shape(), (2, 1));
        assert_eq!(a.as_slice(), &[-2.0, -2.0]);
    }

    #[test]
    fn matmul_rejects_inner_mismatch() {
        let mut a = seq(2, 3);
        let b = seq(2, 3);
        assert_eq!(a.matmul(&b), Err(MatError::DimensionMismatch(2, 3, 2, 3)));
    }

    #[test]
    fn matmul_by_identity_is_identity_map() {
        let mut a = seq(3, 3);
        a.matmul(&Matrix::identity(3)).unwrap();
        assert_eq!(a, seq(3, 3));
    }

    #[test]
    fn transpose_swaps_shape() {
        let a = seq(2, 3);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(t[(c, r)], a[(r, c)]);
            }
        }
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn operator_sugar_delegates() {
        let a = seq(2, 2);
        let b = seq(2, 2);
        assert_eq!((&a + &b).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((&a - &b).as_slice(), &[0.0, 0.0, 0.0, 0.0]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((2.0 * &a).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        let p = &a * &b;
        assert_eq!(p.as_slice(), &[7.0, 10.0, 15.0, 22.0]);

        let mut c = a.clone();
        c += &b;
        c -= &b;
        c *= 1.0;
        c *= &Matrix::identity(2);
        assert_eq!(c, a);
    }

    #[test]
    #[should_panic(expected = "size mismatch: this (2, 2) != other (2, 3)")]
    fn operator_add_panics_on_mismatch() {
        let _ = seq(2, 2) + seq(2, 3);
    }

    #[test]
    #[should_panic(expected = "size mismatch: this (2, 3) != other (2, 3)")]
    fn operator_mul_panics_on_inner_mismatch() {
        let _ = seq(2, 3) * seq(2, 3);
    }
}
