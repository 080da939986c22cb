use numeris_core::scalar::{atan2, cosine, power, root, sine, square_root, PI};
use numeris_core::Matrix;
use proptest::prelude::*;

/// Square matrices with a dominant diagonal, so unpivoted elimination never
/// meets a zero pivot.
fn dominant_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..=5).prop_flat_map(|n| {
        prop::collection::vec(-1.0f64..1.0, n * n).prop_map(move |mut data| {
            for i in 0..n {
                data[i * n + i] += n as f64 + 1.0;
            }
            Matrix::<f64>::from_row_slice(n, n, &data).expect("square data")
        })
    })
}

fn any_square_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..=5).prop_flat_map(|n| {
        prop::collection::vec(-100.0f64..100.0, n * n)
            .prop_map(move |data| Matrix::<f64>::from_row_slice(n, n, &data).expect("square data"))
    })
}

fn any_matrix() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-100.0f64..100.0, rows * cols)
            .prop_map(move |data| Matrix::<f64>::from_row_slice(rows, cols, &data).expect("data"))
    })
}

proptest! {
    #[test]
    fn square_root_squares_back(x in 0.0f64..1e6) {
        let s = square_root(x);
        prop_assert!((s * s - x).abs() < 1e-6, "sqrt({}) = {}", x, s);
    }

    #[test]
    fn odd_roots_power_back(x in -1e3f64..1e3, k in 0u64..4) {
        let n = 2 * k + 1;
        let r = root(x, n);
        prop_assert!((power(r, n) - x).abs() < 1e-6, "root({}, {}) = {}", x, n, r);
    }

    #[test]
    fn even_roots_of_negatives_are_nan(x in -1e3f64..-1e-6, k in 1u64..5) {
        prop_assert!(root(x, 2 * k).is_nan());
    }

    #[test]
    fn pythagorean_identity(x in -1e4f64..1e4) {
        let s = sine(x);
        let c = cosine(x);
        prop_assert!((s * s + c * c - 1.0).abs() < 1e-6, "x = {}", x);
    }

    #[test]
    fn atan2_stays_in_principal_range(y in -1e3f64..1e3, x in -1e3f64..1e3) {
        let angle = atan2(y, x);
        prop_assert!(angle > -PI - 1e-9 && angle <= PI + 1e-9);
    }

    #[test]
    fn inverse_multiplies_to_identity(a in dominant_matrix()) {
        let inv = a.inverse().expect("square");
        let product = a.checked_mul(&inv).expect("shapes agree");
        prop_assert!(product.approx_eq(&Matrix::identity(a.rows())));
    }

    #[test]
    fn determinant_is_transpose_invariant(a in dominant_matrix()) {
        let det = a.determinant().expect("square");
        let det_t = a.transpose().determinant().expect("square");
        prop_assert!((det - det_t).abs() < 1e-9 * det.abs().max(1.0));
    }

    #[test]
    fn symmetric_and_skew_parts_recompose(a in any_square_matrix()) {
        let sym = a.symmetric().expect("square");
        let skew = a.skew_symmetric().expect("square");
        prop_assert!(sym.is_symmetric());
        prop_assert!(skew.is_skew_symmetric());
        prop_assert!(sym.checked_add(&skew).expect("same shape").approx_eq(&a));
    }

    #[test]
    fn transpose_is_involutive(a in any_matrix()) {
        prop_assert!(a.transpose().transpose().approx_eq(&a));
    }
}

#[test]
fn atan2_reference_points() {
    assert_eq!(atan2(0.0, 0.0), 0.0);
    assert!((atan2(1.0, 0.0) - PI / 2.0).abs() < 1e-12);
    assert!((atan2(-1.0, 0.0) + PI / 2.0).abs() < 1e-12);
    assert!((atan2(1.0, 1.0) - PI / 4.0).abs() < 1e-12);
}
