//! Cross-checks the kernels against nalgebra and the standard library.

use approx::assert_relative_eq;
use nalgebra::DMatrix;
use numeris_core::scalar::{arctangent, exponential, square_root, SeriesSettings};
use numeris_core::{Matrix, Pivoting, Vector};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn to_nalgebra(m: &Matrix<f64>) -> DMatrix<f64> {
    DMatrix::from_row_slice(m.rows(), m.cols(), m.as_slice())
}

fn random_dominant(rng: &mut StdRng, n: usize) -> Matrix<f64> {
    let mut m = Matrix::new(n, n);
    m.fill_random(rng, -1.0, 1.0);
    for i in 0..n {
        m[(i, i)] += n as f64;
    }
    m
}

#[test]
fn determinant_matches_nalgebra() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 1..=6 {
        let m = random_dominant(&mut rng, n);
        let expected = to_nalgebra(&m).determinant();
        for pivoting in [Pivoting::None, Pivoting::Partial] {
            let det = m.determinant_with(pivoting).expect("square");
            assert_relative_eq!(det, expected, max_relative = 1e-10);
        }
    }
}

#[test]
fn inverse_matches_nalgebra() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 1..=6 {
        let m = random_dominant(&mut rng, n);
        let expected = to_nalgebra(&m).try_inverse().expect("invertible");
        let inv = m.inverse().expect("square");
        for i in 0..n {
            for j in 0..n {
                assert_relative_eq!(inv[(i, j)], expected[(i, j)], epsilon = 1e-10);
            }
        }
    }
}

#[test]
fn partial_pivoting_matches_nalgebra_on_permuted_input() {
    // leading pivot is zero; the unpivoted path cannot factor this
    let m = Matrix::<f64>::from_rows(vec![
        vec![0.0, 2.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![3.0, 0.0, 1.0],
    ])
    .expect("3x3");
    assert!(!m.determinant().expect("square").is_finite());

    let det = m.determinant_with(Pivoting::Partial).expect("square");
    assert_relative_eq!(det, to_nalgebra(&m).determinant(), epsilon = 1e-12);

    let inv = m.inverse_with(Pivoting::Partial).expect("square");
    let product = m.checked_mul(&inv).expect("shapes agree");
    assert_eq!(product, Matrix::identity(3));
}

#[test]
fn lu_solve_matches_nalgebra() {
    let mut rng = StdRng::seed_from_u64(99);
    let m = random_dominant(&mut rng, 5);
    let mut b = Vector::new(5);
    b.fill_random(&mut rng, -10.0, 10.0);

    let expected = to_nalgebra(&m)
        .lu()
        .solve(&nalgebra::DVector::from_column_slice(b.as_slice()))
        .expect("solvable");
    let x = m.lu(Pivoting::Partial).expect("square").solve(&b).expect("length");
    for i in 0..5 {
        assert_relative_eq!(x[i], expected[i], epsilon = 1e-10);
    }
}

#[test]
fn kernel_agrees_with_std_over_a_grid() {
    for i in 1..200 {
        let x = i as f64 * 0.37;
        assert_relative_eq!(square_root(x), x.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(exponential(x / 10.0), (x / 10.0).exp(), max_relative = 1e-9);
        if (x - 1.0).abs() > 0.05 {
            assert_relative_eq!(arctangent(x), x.atan(), epsilon = 1e-8);
        }
    }
}

#[test]
fn f32_kernels_reach_single_precision() {
    let coarse = SeriesSettings {
        max_iterations: 200,
        tolerance: 1e-7,
    };
    let s = numeris_core::scalar::square_root_with(2.0f32, coarse);
    assert_relative_eq!(s, 2.0f32.sqrt(), max_relative = 1e-6);
    let e = numeris_core::scalar::exponential_with(1.0f32, coarse);
    assert_relative_eq!(e, std::f32::consts::E, max_relative = 1e-6);
}
