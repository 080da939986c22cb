//! Dense row-major matrices.
//!
//! Shape violations (mismatched operands, non-square input where a square one
//! is required, out-of-range indices) are reported as [`DomainError`]s.
//! Element comparisons go through [`are_close`] with [`MATRIX_PRECISION`].
//! Determinant and inverse live in [`crate::lu`].

use crate::error::{DomainError, Result};
use crate::scalar::{are_close, random_number};
use crate::traits::Scalar;
use crate::vector::Vector;
use rand::Rng;
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// Tolerance used by [`Matrix::approx_eq`] and the structural predicates.
pub const MATRIX_PRECISION: f64 = 1e-9;

/// A `rows × cols` matrix stored row-major in one contiguous buffer.
///
/// The buffer always holds exactly `rows * cols` values, so a matrix with a
/// zero dimension owns no elements. `Clone` is a deep copy.
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or(DomainError::ShapeOverflow { rows, cols })
}

impl<T: Scalar> Matrix<T> {
    /// Creates a zero-filled matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use [`Matrix::try_new`] for
    /// shapes that come from untrusted input.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        let len = element_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![T::zero(); len],
        })
    }

    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`; see [`Matrix::try_identity`].
    pub fn identity(n: usize) -> Self {
        match Self::try_identity(n) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_identity(n: usize) -> Result<Self> {
        let mut matrix = Self::try_new(n, n)?;
        for i in 0..n {
            matrix.data[i * n + i] = T::one();
        }
        Ok(matrix)
    }

    /// Builds a matrix from row-major data; `data.len()` must be `rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(DomainError::LengthMismatch {
                operation: "matrix construction",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: data.to_vec(),
        })
    }

    /// Builds a matrix from nested rows, all of which must have equal length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(DomainError::RaggedRows {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(DomainError::RowOutOfBounds {
                row,
                rows: self.rows,
            });
        }
        if col >= self.cols {
            return Err(DomainError::ColumnOutOfBounds {
                col,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let offset = self.offset(row, col)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(DomainError::RowOutOfBounds {
                row,
                rows: self.rows,
            });
        }
        Ok(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x = value);
        self
    }

    /// Discards the contents and reallocates a zero-filled buffer.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; the matrix is left unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        *self = Self::new(rows, cols);
    }

    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, min: T, max: T) -> &mut Self {
        for x in self.data.iter_mut() {
            *x = random_number(rng, min, max);
        }
        self
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(DomainError::DimensionMismatch {
                operation,
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }
        Ok(())
    }

    pub(crate) fn require_square(&self, operation: &'static str) -> Result<usize> {
        if !self.is_square() {
            return Err(DomainError::NotSquare {
                operation,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.rows)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Matrix product; requires `self.cols() == other.rows()`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(DomainError::DimensionMismatch {
                operation: "multiply",
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }
        let mut result = Self::new(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i * self.cols + k];
                for j in 0..other.cols {
                    let entry = &mut result.data[i * other.cols + j];
                    *entry = *entry + a * other.data[k * other.cols + j];
                }
            }
        }
        Ok(result)
    }

    /// Matrix-vector product; requires `self.cols() == vector.len()`.
    pub fn mul_vector(&self, vector: &Vector<T>) -> Result<Vector<T>> {
        if self.cols != vector.len() {
            return Err(DomainError::LengthMismatch {
                operation: "matrix-vector product",
                expected: self.cols,
                actual: vector.len(),
            });
        }
        let values = vector.as_slice();
        let result = (0..self.rows)
            .map(|i| {
                self.data[i * self.cols..(i + 1) * self.cols]
                    .iter()
                    .zip(values)
                    .fold(T::zero(), |acc, (&a, &x)| acc + a * x)
            })
            .collect();
        Ok(Vector::from_vec(result))
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// False for non-square matrices.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let tolerance = T::lit(MATRIX_PRECISION);
        let n = self.rows;
        (0..n).all(|i| {
            (0..i).all(|j| are_close(self.data[i * n + j], self.data[j * n + i], tolerance))
        })
    }

    /// False for non-square matrices. The diagonal must vanish.
    pub fn is_skew_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let tolerance = T::lit(MATRIX_PRECISION);
        let n = self.rows;
        (0..n).all(|i| {
            (0..=i).all(|j| are_close(self.data[i * n + j], -self.data[j * n + i], tolerance))
        })
    }

    pub fn trace(&self) -> Result<T> {
        let n = self.require_square("trace")?;
        Ok((0..n).fold(T::zero(), |acc, i| acc + self.data[i * n + i]))
    }

    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        result
    }

    /// `(A + Aᵀ) / 2`.
    pub fn symmetric(&self) -> Result<Self> {
        let n = self.require_square("symmetric part")?;
        Ok(self.mirror_with(n, |a, b| a + b))
    }

    /// `(A - Aᵀ) / 2`.
    pub fn skew_symmetric(&self) -> Result<Self> {
        let n = self.require_square("skew-symmetric part")?;
        Ok(self.mirror_with(n, |a, b| a - b))
    }

    fn mirror_with(&self, n: usize, f: impl Fn(T, T) -> T) -> Self {
        let two = T::lit(2.0);
        let mut result = Self::new(n, n);
        for i in 0..n {
            for j in 0..n {
                result.data[i * n + j] = f(self.data[i * n + j], self.data[j * n + i]) / two;
            }
        }
        result
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, T::lit(MATRIX_PRECISION))
    }

    /// Same shape and every element pair within `tolerance`.
    pub fn approx_eq_with(&self, other: &Self, tolerance: T) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| are_close(a, b, tolerance))
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.offset(row, col) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{err}"),
        }
    }
}

/// Tolerance-based, see [`Matrix::approx_eq`].
impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| x * scalar).collect(),
        }
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, scalar: T) -> Matrix<T> {
        self *= scalar;
        self
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.data.iter_mut().for_each(|x| *x = *x * scalar);
    }
}

macro_rules! impl_left_scalar_mul {
    ($($t:ty),*) => {$(
        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, matrix: Matrix<$t>) -> Matrix<$t> {
                matrix * self
            }
        }

        impl Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            fn mul(self, matrix: &Matrix<$t>) -> Matrix<$t> {
                matrix * self
            }
        }
    )*};
}

impl_left_scalar_mul!(f32, f64);

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "       ")?;
        for j in 0..self.cols {
            write!(f, "[{j:>3}]      ")?;
        }
        writeln!(f)?;
        for i in 0..self.rows {
            write!(f, "[{i:>3}]: ")?;
            for j in 0..self.cols {
                write!(f, "{:<10} ", self.data[i * self.cols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
