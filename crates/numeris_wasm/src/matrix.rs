//! `WasmMatrix`: a JS handle around `numeris_core::Matrix<f64>`.

use anyhow::{Context, Result};
use js_sys::Float64Array;
use numeris_core::{Matrix, Pivoting, Vector};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::to_js_error;

#[wasm_bindgen]
pub struct WasmMatrix {
    inner: Matrix<f64>,
}

/// Structural overview of a matrix; square-only quantities are `None` for
/// rectangular input.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    pub trace: Option<f64>,
    pub determinant: Option<f64>,
    pub is_symmetric: bool,
    pub is_skew_symmetric: bool,
}

fn pivoting(partial: bool) -> Pivoting {
    if partial {
        Pivoting::Partial
    } else {
        Pivoting::None
    }
}

pub(crate) fn build_matrix(rows: usize, cols: usize, data: &[f64]) -> Result<Matrix<f64>> {
    Matrix::from_row_slice(rows, cols, data).context("Invalid matrix data")
}

pub(crate) fn identity_matrix(n: usize) -> Result<Matrix<f64>> {
    Matrix::try_identity(n).context("Invalid matrix size")
}

pub(crate) fn summarize(matrix: &Matrix<f64>) -> MatrixSummary {
    MatrixSummary {
        rows: matrix.rows(),
        cols: matrix.cols(),
        trace: matrix.trace().ok(),
        determinant: matrix.determinant().ok(),
        is_symmetric: matrix.is_symmetric(),
        is_skew_symmetric: matrix.is_skew_symmetric(),
    }
}

pub(crate) fn invert(matrix: &Matrix<f64>, partial: bool) -> Result<Matrix<f64>> {
    matrix
        .inverse_with(pivoting(partial))
        .context("Matrix inversion failed")
}

pub(crate) fn multiply(left: &Matrix<f64>, right: &Matrix<f64>) -> Result<Matrix<f64>> {
    left.checked_mul(right).context("Matrix product failed")
}

pub(crate) fn multiply_vector(matrix: &Matrix<f64>, values: Vec<f64>) -> Result<Vec<f64>> {
    let product = matrix
        .mul_vector(&Vector::from_vec(values))
        .context("Matrix-vector product failed")?;
    Ok(product.into_vec())
}

#[wasm_bindgen]
impl WasmMatrix {
    /// `data` is row-major and must hold `rows * cols` values.
    #[wasm_bindgen(constructor)]
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<WasmMatrix, JsValue> {
        console_error_panic_hook::set_once();
        let inner = build_matrix(rows, cols, &data).map_err(to_js_error)?;
        Ok(WasmMatrix { inner })
    }

    pub fn identity(n: usize) -> Result<WasmMatrix, JsValue> {
        let inner = identity_matrix(n).map_err(to_js_error)?;
        Ok(WasmMatrix { inner })
    }

    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn data(&self) -> Float64Array {
        Float64Array::from(self.inner.as_slice())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64, JsValue> {
        self.inner
            .get(row, col)
            .copied()
            .map_err(to_js_error)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), JsValue> {
        let entry = self
            .inner
            .get_mut(row, col)
            .map_err(to_js_error)?;
        *entry = value;
        Ok(())
    }

    pub fn trace(&self) -> Result<f64, JsValue> {
        self.inner.trace().map_err(to_js_error)
    }

    pub fn determinant(&self, partial_pivoting: bool) -> Result<f64, JsValue> {
        self.inner
            .determinant_with(pivoting(partial_pivoting))
            .map_err(to_js_error)
    }

    pub fn inverse(&self, partial_pivoting: bool) -> Result<WasmMatrix, JsValue> {
        let inner = invert(&self.inner, partial_pivoting).map_err(to_js_error)?;
        Ok(WasmMatrix { inner })
    }

    pub fn transpose(&self) -> WasmMatrix {
        WasmMatrix {
            inner: self.inner.transpose(),
        }
    }

    pub fn multiply(&self, other: &WasmMatrix) -> Result<WasmMatrix, JsValue> {
        let inner = multiply(&self.inner, &other.inner).map_err(to_js_error)?;
        Ok(WasmMatrix { inner })
    }

    pub fn multiply_vector(&self, values: Vec<f64>) -> Result<Float64Array, JsValue> {
        let product = multiply_vector(&self.inner, values).map_err(to_js_error)?;
        Ok(Float64Array::from(product.as_slice()))
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn render(&self) -> String {
        self.inner.to_string()
    }

    pub fn summary(&self) -> Result<JsValue, JsValue> {
        to_value(&summarize(&self.inner))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_err_contains<T: std::fmt::Debug>(result: Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err:#}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    fn sample() -> Matrix<f64> {
        build_matrix(3, 3, &[2.0, 3.0, -1.0, 4.0, 4.0, -3.0, 2.0, -3.0, 1.0]).expect("matrix")
    }

    #[test]
    fn build_matrix_reports_length_mismatch_with_context() {
        assert_err_contains(
            build_matrix(2, 2, &[1.0, 2.0, 3.0]),
            "Invalid matrix data: matrix construction requires length 4, got 3",
        );
    }

    #[test]
    fn oversized_shapes_report_overflow_with_context() {
        assert_err_contains(
            build_matrix(usize::MAX / 2 + 1, 2, &[]),
            "Invalid matrix data: a",
        );
        assert_err_contains(identity_matrix(usize::MAX), "Invalid matrix size");
        let eye = identity_matrix(2).expect("identity");
        assert_eq!(eye, Matrix::identity(2));
    }

    #[test]
    fn summary_of_sample_matrix() {
        let summary = summarize(&sample());
        assert_eq!((summary.rows, summary.cols), (3, 3));
        assert_eq!(summary.trace, Some(7.0));
        let det = summary.determinant.expect("square");
        assert!((det + 20.0).abs() < 1e-10);
        assert!(!summary.is_symmetric);
    }

    #[test]
    fn summary_of_rectangular_matrix_omits_square_quantities() {
        let summary = summarize(&Matrix::new(2, 3));
        assert!(summary.trace.is_none());
        assert!(summary.determinant.is_none());
        assert!(!summary.is_symmetric);
    }

    #[test]
    fn invert_and_multiply_round_trip() {
        let a = sample();
        let inv = invert(&a, false).expect("inverse");
        let product = multiply(&a, &inv).expect("product");
        assert_eq!(product, Matrix::identity(3));
        assert_err_contains(invert(&Matrix::new(2, 3), true), "Matrix inversion failed");
        assert_err_contains(multiply(&a, &Matrix::new(2, 2)), "Matrix product failed");
    }

    #[test]
    fn multiply_vector_checks_length() {
        let product = multiply_vector(&sample(), vec![1.0, 0.0, 0.0]).expect("product");
        assert_eq!(product, vec![2.0, 4.0, 2.0]);
        assert_err_contains(
            multiply_vector(&sample(), vec![1.0]),
            "Matrix-vector product failed",
        );
    }

    #[test]
    fn handle_methods_without_js_values() {
        let m = WasmMatrix {
            inner: sample(),
        };
        assert_eq!((m.rows(), m.cols()), (3, 3));
        assert_eq!(m.transpose().inner, sample().transpose());
        assert!(m.render().starts_with("       [  0]"));
        assert_eq!(
            WasmMatrix::identity(2).expect("identity").inner,
            Matrix::identity(2)
        );
    }
}
