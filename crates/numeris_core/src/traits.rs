use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// A trait for types that can be used as scalars by the kernels.
/// Must support basic arithmetic, debug/display printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + Display + 'static {
    /// Converts an `f64` literal into `Self`.
    ///
    /// Every IEEE float type can represent (or round) any `f64`, so the
    /// conversion only yields NaN for types that cannot.
    fn lit(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }

    /// Converts an iteration counter into `Self`.
    fn count(value: u64) -> Self {
        Self::from_u64(value).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + FromPrimitive + Debug + Display + 'static> Scalar for T {}
