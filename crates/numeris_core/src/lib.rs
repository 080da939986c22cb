pub mod complex;
pub mod error;
pub mod lu;
pub mod matrix;
pub mod scalar;
/// The `numeris_core` crate provides the numeric kernels behind numeris.
/// Everything is generic over the floating type (`f32` or `f64`) through the
/// `Scalar` trait.
///
/// Key components:
/// - **Scalar**: square root, n-th root, power, exponential and trigonometric
///   functions from Newton-Raphson iteration and Maclaurin series.
/// - **Matrix**: dense row-major matrices with arithmetic and structural queries.
/// - **LU**: Doolittle factorization backing `determinant` and `inverse`, with
///   optional partial pivoting.
/// - **Vector**: dense vectors, used by matrix-vector products.
/// - **Complex**: polar form for `num_complex::Complex` via the scalar kernel.
pub mod traits;
pub mod vector;

pub use error::{DomainError, Result};
pub use lu::{LuDecomposition, Pivoting};
pub use matrix::Matrix;
pub use traits::Scalar;
pub use vector::Vector;
