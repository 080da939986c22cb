//! Scalar kernel and complex helpers exposed as free functions.

use num_complex::Complex;
use numeris_core::complex::ComplexExt;
use numeris_core::scalar;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn square_root(x: f64) -> f64 {
    scalar::square_root(x)
}

#[wasm_bindgen]
pub fn root(x: f64, n: u32) -> f64 {
    scalar::root(x, u64::from(n))
}

#[wasm_bindgen]
pub fn power(base: f64, exponent: u32) -> f64 {
    scalar::power(base, u64::from(exponent))
}

#[wasm_bindgen]
pub fn exponential(x: f64) -> f64 {
    scalar::exponential(x)
}

#[wasm_bindgen]
pub fn sine(x: f64) -> f64 {
    scalar::sine(x)
}

#[wasm_bindgen]
pub fn cosine(x: f64) -> f64 {
    scalar::cosine(x)
}

#[wasm_bindgen]
pub fn tangent(x: f64) -> f64 {
    scalar::tangent(x)
}

#[wasm_bindgen]
pub fn arctangent(x: f64) -> f64 {
    scalar::arctangent(x)
}

#[wasm_bindgen]
pub fn atan2(y: f64, x: f64) -> f64 {
    scalar::atan2(y, x)
}

#[wasm_bindgen]
pub fn are_close(a: f64, b: f64, tolerance: f64) -> bool {
    scalar::are_close(a, b, tolerance)
}

/// Returns `[re, im]`.
#[wasm_bindgen]
pub fn complex_from_polar(modulus: f64, phase: f64) -> Vec<f64> {
    let z = Complex::<f64>::from_polar_kernel(modulus, phase);
    vec![z.re, z.im]
}

#[wasm_bindgen]
pub fn complex_modulus(re: f64, im: f64) -> f64 {
    Complex::new(re, im).modulus()
}

#[wasm_bindgen]
pub fn complex_argument(re: f64, im: f64) -> f64 {
    Complex::new(re, im).argument()
}

#[wasm_bindgen]
pub fn complex_to_string(re: f64, im: f64) -> String {
    Complex::new(re, im).describe()
}
