use approx::assert_relative_eq;
use mm_matrix::{multiply, Matrix, MatrixError};
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_i64(n: usize, rng: &mut StdRng) -> Matrix<i64> {
    Matrix::from_fn(n, |_, _| rng.gen_range(-1000..=1000))
}

/// Cell (i, j) of A @ B straight from the definition, in unbounded precision.
fn definition(a: &Matrix<i64>, b: &Matrix<i64>, i: usize, j: usize) -> BigInt {
    (0..a.side())
        .map(|k| BigInt::from(a[(i, k)]) * BigInt::from(b[(k, j)]))
        .sum()
}

#[test]
fn test_matches_definition_exhaustively_for_small_n() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 0..=5 {
        for _ in 0..20 {
            let a = random_i64(n, &mut rng);
            let b = random_i64(n, &mut rng);
            let c = multiply(&a, &b).unwrap();
            assert_eq!(c.side(), n);
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(BigInt::from(c[(i, j)]), definition(&a, &b, i, j));
                }
            }
        }
    }
}

#[test]
fn test_matches_definition_at_sampled_cells_for_larger_n() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in [16, 37, 64] {
        let a = random_i64(n, &mut rng);
        let b = random_i64(n, &mut rng);
        let c = multiply(&a, &b).unwrap();
        for _ in 0..50 {
            let i = rng.gen_range(0..n);
            let j = rng.gen_range(0..n);
            assert_eq!(BigInt::from(c[(i, j)]), definition(&a, &b, i, j));
        }
    }
}

#[test]
fn test_identity_on_either_side() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in [0, 1, 2, 5, 12] {
        let a = random_i64(n, &mut rng);
        let id = Matrix::identity(n);
        assert_eq!(multiply(&a, &id).unwrap(), a);
        assert_eq!(multiply(&id, &a).unwrap(), a);
    }
}

#[test]
fn test_zero_annihilates() {
    let mut rng = StdRng::seed_from_u64(5);
    for n in [0, 1, 3, 8] {
        let a = random_i64(n, &mut rng);
        let z = Matrix::zeros(n);
        assert_eq!(multiply(&a, &z).unwrap(), z);
        assert_eq!(multiply(&z, &a).unwrap(), z);
    }
}

#[test]
fn test_associative_for_integers() {
    let mut rng = StdRng::seed_from_u64(13);
    for n in 1..=6 {
        let a = random_i64(n, &mut rng);
        let b = random_i64(n, &mut rng);
        let c = random_i64(n, &mut rng);
        let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
        assert_eq!(left, right);
    }
}

#[test]
fn test_associative_for_floats_within_tolerance() {
    let mut rng = StdRng::seed_from_u64(17);
    for n in 1..=6 {
        let mut sample = |_: usize, _: usize| rng.gen_range(-1.0..1.0);
        let a: Matrix<f64> = Matrix::from_fn(n, &mut sample);
        let b: Matrix<f64> = Matrix::from_fn(n, &mut sample);
        let c: Matrix<f64> = Matrix::from_fn(n, &mut sample);
        let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
        for (l, r) in left.as_slice().iter().zip(right.as_slice()) {
            assert_relative_eq!(*l, *r, epsilon = 1e-12, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_widening_to_bigint_avoids_overflow() {
    let a = Matrix::new(2, vec![i64::MAX, i64::MAX, i64::MAX, i64::MAX]).unwrap();
    let err = multiply(&a, &a).unwrap_err();
    assert_eq!(err, MatrixError::NumericOverflow { row: 0, col: 0 });

    let wide = a.map(|&x| BigInt::from(x));
    let c = multiply(&wide, &wide).unwrap();
    let expected = BigInt::from(i64::MAX) * BigInt::from(i64::MAX) * BigInt::from(2);
    assert!(c.as_slice().iter().all(|x| *x == expected));
}

#[test]
fn test_two_by_two_times_three_by_three_is_rejected() {
    let a = Matrix::new(2, vec![1, 2, 3, 4]).unwrap();
    let b = Matrix::new(3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let err = multiply(&a, &b).unwrap_err();
    assert_eq!(err, MatrixError::DimensionMismatch { left: 2, right: 3 });
}

#[test]
fn test_inputs_are_left_untouched() {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    let (a0, b0) = (a.clone(), b.clone());
    let c = multiply(&a, &b).unwrap();
    assert_eq!(c.into_rows(), vec![vec![19, 22], vec![43, 50]]);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}
