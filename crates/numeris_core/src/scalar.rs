//! Elementary functions evaluated without the platform math library.
//!
//! Roots come from Newton-Raphson iteration, the transcendental functions
//! from Maclaurin series summed term by term. Every iterative routine stops
//! once its last correction (or series term) drops below a tolerance, or when
//! the iteration cap is reached. Inputs outside a function's real domain
//! produce NaN; nothing here returns an error.

use crate::traits::Scalar;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default cap on Newton steps and series terms.
pub const SCALAR_ITERATIONS: usize = 10_000;
/// Default absolute tolerance for convergence and closeness checks.
pub const SCALAR_PRECISION: f64 = 1e-10;
pub const PI: f64 = std::f64::consts::PI;
pub const EULER: f64 = std::f64::consts::E;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSettings {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            max_iterations: SCALAR_ITERATIONS,
            tolerance: SCALAR_PRECISION,
        }
    }
}

/// Tolerance-based equality: `|a - b| < tolerance`.
///
/// This is the only equality primitive used across the crate; NaN is never
/// close to anything.
#[inline]
pub fn are_close<T: Scalar>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() < tolerance
}

/// `1` for positive values, `-1` otherwise (zero included).
#[inline]
pub fn sign<T: Scalar>(value: T) -> T {
    if value > T::zero() {
        T::one()
    } else {
        -T::one()
    }
}

/// Rounds half away from zero.
pub fn round<T: Scalar>(value: T) -> T {
    let half = T::lit(0.5);
    if value >= T::zero() {
        (value + half).floor()
    } else {
        (value - half).ceil()
    }
}

#[inline]
pub fn maximum<T: Scalar>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

#[inline]
pub fn minimum<T: Scalar>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// `n!`, wrapping on overflow past `20!`.
pub fn factorial(mut value: u64) -> u64 {
    let mut result: u64 = 1;
    while value > 1 {
        result = result.wrapping_mul(value);
        value -= 1;
    }
    result
}

/// Draws a value uniformly from `[min, max)` using the caller's generator.
///
/// Returns `min` when the range is empty. Draws that round up to `max` in `T`
/// are discarded.
pub fn random_number<T: Scalar, R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> T {
    if min.partial_cmp(&max) != Some(Ordering::Less) {
        return min;
    }
    loop {
        let unit = T::lit(rng.gen::<f64>());
        let value = unit * max + (T::one() - unit) * min;
        if value < max {
            return value;
        }
    }
}

/// `base^exponent` by repeated multiplication. Only non-negative integer
/// exponents are supported.
pub fn power<T: Scalar>(base: T, exponent: u64) -> T {
    let mut result = T::one();
    for _ in 0..exponent {
        result = result * base;
    }
    result
}

pub fn square_root<T: Scalar>(value: T) -> T {
    square_root_with(value, SeriesSettings::default())
}

/// Newton-Raphson on `f(t) = t² - value`, seeded at `t = value`.
pub fn square_root_with<T: Scalar>(value: T, settings: SeriesSettings) -> T {
    let tolerance = T::lit(settings.tolerance);
    if value.is_nan() || value == T::infinity() {
        return value;
    }
    if are_close(value.abs(), T::zero(), tolerance) {
        return T::zero();
    }
    if value < T::zero() {
        return T::nan();
    }

    let half = T::lit(0.5);
    let mut x = value;
    for _ in 0..settings.max_iterations {
        let delta = (value / x - x) * half;
        x = x + delta;
        if delta.abs() < tolerance {
            return x;
        }
    }
    log::debug!(
        "square_root({:?}) stopped at the {}-iteration cap",
        value,
        settings.max_iterations
    );
    x
}

pub fn root<T: Scalar>(value: T, n: u64) -> T {
    root_with(value, n, SeriesSettings::default())
}

/// n-th root by Newton-Raphson on `f(t) = tⁿ - value`, seeded at `t = value`.
///
/// Even roots of negative values and the zeroth root of zero are NaN.
pub fn root_with<T: Scalar>(value: T, n: u64, settings: SeriesSettings) -> T {
    let tolerance = T::lit(settings.tolerance);
    if n == 1 {
        return value;
    }
    if n == 0 {
        return if are_close(value, T::zero(), tolerance) {
            T::nan()
        } else {
            T::one()
        };
    }
    if value.is_nan() {
        return value;
    }
    if are_close(value, T::zero(), tolerance) {
        return T::zero();
    }
    if n % 2 == 0 && value < T::zero() {
        return T::nan();
    }

    let order = T::count(n);
    let mut x = value;
    for _ in 0..settings.max_iterations {
        let delta = (value / power(x, n - 1) - x) / order;
        x = x + delta;
        if delta.abs() < tolerance {
            return x;
        }
    }
    log::debug!(
        "root({:?}, {}) stopped at the {}-iteration cap",
        value,
        n,
        settings.max_iterations
    );
    x
}

pub fn exponential<T: Scalar>(value: T) -> T {
    exponential_with(value, SeriesSettings::default())
}

/// `Σ xᵏ/k!`, accumulated as `term *= x/k`.
pub fn exponential_with<T: Scalar>(value: T, settings: SeriesSettings) -> T {
    let tolerance = T::lit(settings.tolerance);
    let mut term = T::one();
    let mut result = term;
    for i in 1..settings.max_iterations {
        term = term * (value / T::count(i as u64));
        result = result + term;
        if term.abs() < tolerance {
            return result;
        }
    }
    log::debug!(
        "exponential({:?}) stopped at the {}-iteration cap",
        value,
        settings.max_iterations
    );
    result
}

/// Maps an angle into `[0, 2π)`.
fn reduce_angle<T: Scalar>(value: T) -> T {
    let two_pi = T::lit(2.0 * PI);
    value - two_pi * (value / two_pi).floor()
}

pub fn sine<T: Scalar>(value: T) -> T {
    sine_with(value, SeriesSettings::default())
}

pub fn sine_with<T: Scalar>(value: T, settings: SeriesSettings) -> T {
    let tolerance = T::lit(settings.tolerance);
    let x = reduce_angle(value);
    let mut term = x;
    let mut result = term;
    for i in 1..settings.max_iterations as u64 {
        term = term * (-x * x / T::count((2 * i + 1) * (2 * i)));
        result = result + term;
        if term.abs() < tolerance {
            return result;
        }
    }
    log::debug!(
        "sine({:?}) stopped at the {}-iteration cap",
        value,
        settings.max_iterations
    );
    result
}

pub fn cosine<T: Scalar>(value: T) -> T {
    cosine_with(value, SeriesSettings::default())
}

pub fn cosine_with<T: Scalar>(value: T, settings: SeriesSettings) -> T {
    let tolerance = T::lit(settings.tolerance);
    let x = reduce_angle(value);
    let mut term = T::one();
    let mut result = term;
    for i in 1..settings.max_iterations as u64 {
        term = term * (-x * x / T::count((2 * i) * (2 * i - 1)));
        result = result + term;
        if term.abs() < tolerance {
            return result;
        }
    }
    log::debug!(
        "cosine({:?}) stopped at the {}-iteration cap",
        value,
        settings.max_iterations
    );
    result
}

/// `sine / cosine`; not guarded against a vanishing cosine.
pub fn tangent<T: Scalar>(value: T) -> T {
    sine(value) / cosine(value)
}

pub fn arctangent<T: Scalar>(value: T) -> T {
    arctangent_with(value, SeriesSettings::default())
}

/// Arctangent over three regions.
///
/// `|x| ≈ 1` is answered exactly with `±π/4`. Inside the unit interval the
/// Maclaurin series `x - x³/3 + x⁵/5 - ...` is summed directly; outside it the
/// expansion about infinity `±π/2 - 1/x + 1/(3x³) - ...` is used instead,
/// since the direct series diverges there.
pub fn arctangent_with<T: Scalar>(value: T, settings: SeriesSettings) -> T {
    let tolerance = T::lit(settings.tolerance);
    if value.is_nan() {
        return value;
    }
    if are_close(value.abs(), T::one(), tolerance) {
        return sign(value) * T::lit(PI / 4.0);
    }

    let square = value * value;
    if value.abs() < T::one() {
        // numerator holds (-1)^i x^(2i+1)
        let mut numerator = value;
        let mut result = value;
        for i in 1..settings.max_iterations as u64 {
            numerator = -numerator * square;
            let term = numerator / T::count(2 * i + 1);
            result = result + term;
            if term.abs() < tolerance {
                return result;
            }
        }
        log::debug!(
            "arctangent({:?}) stopped at the {}-iteration cap",
            value,
            settings.max_iterations
        );
        return result;
    }

    let half_pi = T::lit(PI / 2.0);
    let mut result = if value > T::one() { half_pi } else { -half_pi };
    // numerator holds (-1)^i / x^(2i-1)
    let mut numerator = -T::one() / value;
    for i in 1..settings.max_iterations as u64 {
        let term = numerator / T::count(2 * i - 1);
        result = result + term;
        if term.abs() < tolerance {
            return result;
        }
        numerator = -numerator / square;
    }
    log::debug!(
        "arctangent({:?}) stopped at the {}-iteration cap",
        value,
        settings.max_iterations
    );
    result
}

/// Quadrant-aware arctangent of `y / x`.
pub fn atan2<T: Scalar>(y: T, x: T) -> T {
    let tolerance = T::lit(SCALAR_PRECISION);
    let x_is_zero = are_close(x, T::zero(), tolerance);
    let y_is_zero = are_close(y, T::zero(), tolerance);
    let pi = T::lit(PI);

    if x_is_zero && y_is_zero {
        T::zero()
    } else if x_is_zero {
        sign(y) * T::lit(PI / 2.0)
    } else if x > T::zero() {
        arctangent(y / x)
    } else if y >= T::zero() {
        arctangent(y / x) + pi
    } else {
        arctangent(y / x) - pi
    }
}
