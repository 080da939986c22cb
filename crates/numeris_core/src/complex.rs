//! Polar form and tolerance comparisons for `num_complex::Complex`, routed
//! through the crate's own scalar kernel instead of the platform math library.

use crate::scalar::{are_close, atan2, cosine, sine, square_root};
use crate::traits::Scalar;
use num_complex::Complex;

/// Tolerance for [`ComplexExt::approx_eq`] and for hiding negligible parts in
/// [`ComplexExt::describe`].
pub const COMPLEX_PRECISION: f64 = 1e-6;

pub trait ComplexExt<T: Scalar>: Sized {
    fn from_polar_kernel(modulus: T, phase: T) -> Self;
    fn modulus(&self) -> T;
    /// Phase angle in `(-π, π]`.
    fn argument(&self) -> T;
    /// `1/z`; non-finite for `z = 0`.
    fn reciprocal(&self) -> Self;
    fn approx_eq(&self, other: &Self) -> bool;
    fn approx_eq_real(&self, value: T) -> bool;
    /// Renders `a + b*i`, `a - b*i`, `a`, `b*i` or `0.0`, dropping parts
    /// within tolerance of zero.
    fn describe(&self) -> String;
}

impl<T: Scalar> ComplexExt<T> for Complex<T> {
    fn from_polar_kernel(modulus: T, phase: T) -> Self {
        Complex::new(modulus * cosine(phase), modulus * sine(phase))
    }

    fn modulus(&self) -> T {
        square_root(self.re * self.re + self.im * self.im)
    }

    fn argument(&self) -> T {
        atan2(self.im, self.re)
    }

    fn reciprocal(&self) -> Self {
        let squared = self.re * self.re + self.im * self.im;
        Complex::new(self.re / squared, -self.im / squared)
    }

    fn approx_eq(&self, other: &Self) -> bool {
        let tolerance = T::lit(COMPLEX_PRECISION);
        are_close(self.re, other.re, tolerance) && are_close(self.im, other.im, tolerance)
    }

    fn approx_eq_real(&self, value: T) -> bool {
        self.approx_eq(&Complex::new(value, T::zero()))
    }

    fn describe(&self) -> String {
        let tolerance = T::lit(COMPLEX_PRECISION);
        let show_re = !are_close(self.re, T::zero(), tolerance);
        let show_im = !are_close(self.im, T::zero(), tolerance);
        match (show_re, show_im) {
            (true, true) => {
                let op = if self.im > T::zero() { "+" } else { "-" };
                format!("{} {} {}*i", self.re, op, self.im.abs())
            }
            (true, false) => format!("{}", self.re),
            (false, true) => format!("{}*i", self.im),
            (false, false) => "0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::PI;

    #[test]
    fn polar_round_trip_through_kernel() {
        let z = Complex::<f64>::from_polar_kernel(2.0, PI / 3.0);
        assert!((z.re - 1.0).abs() < 1e-9);
        assert!((z.im - 3.0f64.sqrt()).abs() < 1e-9);
        assert!((z.modulus() - 2.0).abs() < 1e-9);
        assert!((z.argument() - PI / 3.0).abs() < 1e-9);
    }

    #[test]
    fn argument_covers_left_half_plane() {
        let z = Complex::<f64>::new(-1.0, -1.0);
        assert!((z.argument() + 3.0 * PI / 4.0).abs() < 1e-9);
        assert_eq!(Complex::<f64>::new(0.0, 0.0).argument(), 0.0);
    }

    #[test]
    fn reciprocal_multiplies_to_one() {
        let z = Complex::<f64>::new(3.0, -4.0);
        let product = z * z.reciprocal();
        assert!(product.approx_eq_real(1.0));
        let inf = Complex::<f64>::new(0.0, 0.0).reciprocal();
        assert!(!inf.re.is_finite());
    }

    #[test]
    fn approx_eq_uses_complex_precision() {
        let a = Complex::<f64>::new(1.0, 2.0);
        assert!(a.approx_eq(&Complex::<f64>::new(1.0 + 5e-7, 2.0 - 5e-7)));
        assert!(!a.approx_eq(&Complex::<f64>::new(1.0, 2.001)));
        assert!(!a.approx_eq_real(1.0));
    }

    #[test]
    fn describe_drops_negligible_parts() {
        assert_eq!(Complex::<f64>::new(1.5, 2.0).describe(), "1.5 + 2*i");
        assert_eq!(Complex::<f64>::new(1.5, -2.0).describe(), "1.5 - 2*i");
        assert_eq!(Complex::<f64>::new(-3.0, 1e-9).describe(), "-3");
        assert_eq!(Complex::<f64>::new(0.0, -0.5).describe(), "-0.5*i");
        assert_eq!(Complex::<f64>::new(1e-8, -1e-8).describe(), "0.0");
    }
}
