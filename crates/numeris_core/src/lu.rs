//! LU factorization, determinants and inverses.
//!
//! The factorization is Doolittle's (unit lower-triangular `L`) computed in
//! place by Gaussian elimination. With [`Pivoting::None`] the current diagonal
//! entry is always the pivot, which is only valid when every leading principal
//! minor is nonzero: a zero pivot is not reported as an error, it turns the
//! affected results into NaN or infinity. [`Pivoting::Partial`] swaps in the
//! largest-magnitude entry of each pivot column first.

use crate::error::{DomainError, Result};
use crate::matrix::Matrix;
use crate::traits::Scalar;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Pivot selection during elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pivoting {
    /// Always use the diagonal entry.
    #[default]
    None,
    /// Swap rows so the pivot is the largest entry (by magnitude) in its column.
    Partial,
}

/// `P·A = L·U` for a square `A`.
///
/// `L` (unit diagonal, not stored) and `U` share one `n × n` buffer: the
/// multipliers sit below the diagonal, `U` on and above it.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Scalar> {
    n: usize,
    factors: Vec<T>,
    permutation: Vec<usize>,
    swaps: usize,
}

impl<T: Scalar> LuDecomposition<T> {
    fn new(matrix: &Matrix<T>, pivoting: Pivoting, operation: &'static str) -> Result<Self> {
        let n = matrix.require_square(operation)?;
        let mut a = matrix.as_slice().to_vec();
        let mut permutation: Vec<usize> = (0..n).collect();
        let mut swaps = 0usize;

        for k in 0..n.saturating_sub(1) {
            if pivoting == Pivoting::Partial {
                let best = (k + 1..n).fold(k, |best, i| {
                    if a[i * n + k].abs() > a[best * n + k].abs() {
                        i
                    } else {
                        best
                    }
                });
                if best != k {
                    for j in 0..n {
                        a.swap(k * n + j, best * n + j);
                    }
                    permutation.swap(k, best);
                    swaps += 1;
                }
            }

            let pivot = a[k * n + k];
            if pivot == T::zero() {
                log::trace!("zero pivot in column {k} of a {n}x{n} elimination");
                if pivoting == Pivoting::Partial {
                    // the whole column below the diagonal is zero already
                    continue;
                }
            }

            for i in k + 1..n {
                let m = a[i * n + k] / pivot;
                a[i * n + k] = m;
                for j in k + 1..n {
                    a[i * n + j] = a[i * n + j] - m * a[k * n + j];
                }
            }
        }

        Ok(Self {
            n,
            factors: a,
            permutation,
            swaps,
        })
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Row `i` of `P·A` is row `permutation()[i]` of `A`.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Unit lower-triangular factor.
    pub fn lower(&self) -> Matrix<T> {
        let n = self.n;
        let mut lower = Matrix::identity(n);
        for i in 0..n {
            for j in 0..i {
                lower[(i, j)] = self.factors[i * n + j];
            }
        }
        lower
    }

    /// Upper-triangular factor.
    pub fn upper(&self) -> Matrix<T> {
        let n = self.n;
        let mut upper = Matrix::new(n, n);
        for i in 0..n {
            for j in i..n {
                upper[(i, j)] = self.factors[i * n + j];
            }
        }
        upper
    }

    /// Product of the pivots, sign-corrected for row exchanges.
    pub fn determinant(&self) -> T {
        let n = self.n;
        let det = (0..n).fold(T::one(), |acc, k| acc * self.factors[k * n + k]);
        if self.swaps % 2 == 1 {
            -det
        } else {
            det
        }
    }

    /// Solves `A·x = b`.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>> {
        if b.len() != self.n {
            return Err(DomainError::LengthMismatch {
                operation: "LU solve",
                expected: self.n,
                actual: b.len(),
            });
        }
        let rhs = b.as_slice();
        let mut x: Vec<T> = self.permutation.iter().map(|&p| rhs[p]).collect();
        self.substitute(&mut x);
        Ok(Vector::from_vec(x))
    }

    /// Forward substitution with `L`, then back substitution with `U`.
    fn substitute(&self, x: &mut [T]) {
        let n = self.n;
        let lu = &self.factors;
        for i in 0..n {
            for j in 0..i {
                x[i] = x[i] - lu[i * n + j] * x[j];
            }
        }
        for i in (0..n).rev() {
            for j in i + 1..n {
                x[i] = x[i] - lu[i * n + j] * x[j];
            }
            x[i] = x[i] / lu[i * n + i];
        }
    }

    /// Solves against every standard basis vector; solution `i` becomes
    /// column `i` of the inverse.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.n;
        let mut inverse = Matrix::new(n, n);
        let mut column = vec![T::zero(); n];
        for i in 0..n {
            for (row, entry) in column.iter_mut().enumerate() {
                *entry = if self.permutation[row] == i {
                    T::one()
                } else {
                    T::zero()
                };
            }
            self.substitute(&mut column);
            for (row, &value) in column.iter().enumerate() {
                inverse[(row, i)] = value;
            }
        }
        inverse
    }
}

impl<T: Scalar> Matrix<T> {
    pub fn lu(&self, pivoting: Pivoting) -> Result<LuDecomposition<T>> {
        LuDecomposition::new(self, pivoting, "LU decomposition")
    }

    /// Determinant by forward elimination without pivoting.
    pub fn determinant(&self) -> Result<T> {
        self.determinant_with(Pivoting::None)
    }

    pub fn determinant_with(&self, pivoting: Pivoting) -> Result<T> {
        Ok(LuDecomposition::new(self, pivoting, "determinant")?.determinant())
    }

    /// Inverse through an unpivoted LU decomposition.
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(Pivoting::None)
    }

    pub fn inverse_with(&self, pivoting: Pivoting) -> Result<Self> {
        Ok(LuDecomposition::new(self, pivoting, "inverse")?.inverse())
    }
}
