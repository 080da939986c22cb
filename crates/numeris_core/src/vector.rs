//! Dense numeric vectors.

use crate::error::{DomainError, Result};
use crate::scalar::{are_close, maximum, minimum, random_number, square_root};
use crate::traits::Scalar;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

/// Tolerance used by [`Vector::approx_eq`] and [`Vector::is_orthogonal`].
pub const VECTOR_PRECISION: f64 = 1e-8;

#[derive(Debug, Clone, Default)]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Creates a zero-filled vector.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(DomainError::IndexOutOfBounds { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(DomainError::IndexOutOfBounds { index, len })
    }

    /// Discards the contents and reallocates a zero-filled buffer.
    pub fn resize(&mut self, len: usize) {
        self.data = vec![T::zero(); len];
    }

    pub fn fill(&mut self, value: T) -> &mut Self {
        self.data.iter_mut().for_each(|x| *x = value);
        self
    }

    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, min: T, max: T) -> &mut Self {
        for x in self.data.iter_mut() {
            *x = random_number(rng, min, max);
        }
        self
    }

    fn check_len(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(DomainError::LengthMismatch {
                operation,
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }

    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_len(other, "dot product")?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product; both operands must have length 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for v in [self, other] {
            if v.len() != 3 {
                return Err(DomainError::LengthMismatch {
                    operation: "cross product",
                    expected: 3,
                    actual: v.len(),
                });
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Euclidean norm, computed with the kernel's own square root.
    pub fn norm(&self) -> T {
        square_root(self.data.iter().fold(T::zero(), |acc, &x| acc + x * x))
    }

    /// Largest element, folding from zero: an all-negative vector yields 0.
    pub fn max(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| maximum(acc, x))
    }

    /// Smallest element, or `+inf` for an empty vector.
    pub fn min(&self) -> T {
        self.data.iter().fold(T::infinity(), |acc, &x| minimum(acc, x))
    }

    pub fn max_abs(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| maximum(x.abs(), acc))
    }

    /// Arithmetic mean; NaN for an empty vector.
    pub fn mean(&self) -> T {
        let sum = self.data.iter().fold(T::zero(), |acc, &x| acc + x);
        sum / T::count(self.len() as u64)
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.check_len(other, "vector sum")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.check_len(other, "vector subtraction")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self::from_vec(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        )
    }

    /// Largest absolute elementwise difference.
    pub fn max_diff(&self, other: &Self) -> Result<T> {
        self.check_len(other, "vector comparison")?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(T::zero(), |acc, (&a, &b)| maximum((a - b).abs(), acc)))
    }

    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, T::lit(VECTOR_PRECISION))
    }

    pub fn approx_eq_with(&self, other: &Self, tolerance: T) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| are_close(a, b, tolerance))
    }

    /// False for vectors of different lengths.
    pub fn is_orthogonal(&self, other: &Self) -> bool {
        match self.dot(other) {
            Ok(dot) => are_close(dot, T::zero(), T::lit(VECTOR_PRECISION)),
            Err(_) => false,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.data.windows(2).all(|w| w[0] <= w[1])
    }

    /// Sorts ascending; NaN values end up last.
    pub fn sort(&mut self) {
        self.data
            .sort_by(|a, b| a.partial_cmp(b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan())));
    }

    /// Index of an exact match, or of the closest element when there is none.
    /// Returns 0 for an empty vector.
    pub fn search(&self, value: T) -> usize {
        let mut closest = 0;
        for (i, &x) in self.data.iter().enumerate() {
            if x == value {
                return i;
            }
            if (x - value).abs() < (self.data[closest] - value).abs() {
                closest = i;
            }
        }
        closest
    }

    /// Binary search over a sorted vector. Returns the index of a match, or
    /// the last midpoint probed when the value is absent. An empty vector
    /// yields 0.
    pub fn binary_search(&self, value: T) -> usize {
        if self.data.is_empty() {
            return 0;
        }
        let mut low = 0usize;
        let mut high = self.data.len();
        let mut middle = 0usize;
        while low < high {
            middle = low + (high - low) / 2;
            match self.data[middle].partial_cmp(&value) {
                Some(Ordering::Greater) => high = middle,
                Some(Ordering::Less) => low = middle + 1,
                _ => break,
            }
        }
        middle
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", DomainError::IndexOutOfBounds { index, len }),
        }
    }
}

/// Tolerance-based, see [`Vector::approx_eq`].
impl<T: Scalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, scalar: T) -> Vector<T> {
        Vector::from_vec(self.data.iter().map(|&x| x * scalar).collect())
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, scalar: T) -> Vector<T> {
        self *= scalar;
        self
    }
}

impl<T: Scalar> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.data.iter_mut().for_each(|x| *x = *x * scalar);
    }
}

macro_rules! impl_left_scalar_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, vector: Vector<$t>) -> Vector<$t> {
                vector * self
            }
        }

        impl Mul<&Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, vector: &Vector<$t>) -> Vector<$t> {
                vector * self
            }
        }
    )*};
}

impl_left_scalar_mul!(f32, f64);

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            writeln!(f, "[{i}]: {x}")?;
        }
        Ok(())
    }
}
