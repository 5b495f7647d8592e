//! Determinant via LU decomposition with partial pivoting

use tracing::trace;

use crate::error::{CramerError, Result};
use crate::matrix::Matrix;
use crate::scalar::Scalar;

/// Compute the determinant of a square matrix.
///
/// Factors a copy of `a` as `P * A = L * U` with row pivoting on the largest
/// `|re| + |im|` in each column. The determinant is the product of the diagonal of
/// `U`, negated when `P` is an odd permutation.
///
/// No tolerance is applied: the result is exactly zero only when some pivot
/// column is exactly zero. Near-singular matrices yield small non-zero values.
///
/// # Errors
/// Returns `NotSquare` for a rectangular matrix and `EmptySystem` for a 0x0
/// matrix.
pub fn determinant<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    if !a.is_square() {
        return Err(CramerError::NotSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    let n = a.nrows();
    if n == 0 {
        return Err(CramerError::EmptySystem);
    }

    let mut lu = a.clone();
    let mut transpositions = 0usize;

    for k in 0..n {
        let mut max_idx = k;
        let mut max_val = lu[[k, k]].abs1();
        for i in (k + 1)..n {
            let val = lu[[i, k]].abs1();
            if val > max_val {
                max_val = val;
                max_idx = i;
            }
        }

        let pivot = lu[[max_idx, k]];
        if pivot.is_zero() {
            trace!(column = k, "zero pivot column, determinant is zero");
            return Ok(T::zero());
        }

        if max_idx != k {
            lu.swap_rows(k, max_idx);
            transpositions += 1;
        }

        for i in (k + 1)..n {
            let factor = lu[[i, k]].scaled_div(pivot);
            if factor.is_zero() {
                continue;
            }
            for j in (k + 1)..n {
                lu[[i, j]] = lu[[i, j]] - factor * lu[[k, j]];
            }
        }
    }

    let det = (0..n).fold(T::one(), |acc, i| acc * lu[[i, i]]);
    if transpositions % 2 == 0 {
        Ok(det)
    } else {
        Ok(-det)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Cofactor expansion along the first row, used as a reference.
    fn laplace<T: Scalar>(a: &Matrix<T>) -> T {
        let n = a.nrows();
        if n == 1 {
            return a[[0, 0]];
        }
        let mut det = T::zero();
        for j in 0..n {
            let rows: Vec<Vec<T>> = (1..n)
                .map(|i| (0..n).filter(|&c| c != j).map(|c| a[[i, c]]).collect())
                .collect();
            let minor = Matrix::from_vec2d(rows).unwrap();
            let term = a[[0, j]] * laplace(&minor);
            det = if j % 2 == 0 { det + term } else { det - term };
        }
        det
    }

    fn test_identity_generic<T: Scalar>() {
        for n in 1..5 {
            let det = determinant(&Matrix::<T>::eye(n)).unwrap();
            assert_eq!(det, T::one());
        }
    }

    #[test]
    fn test_identity_f64() {
        test_identity_generic::<f64>();
    }

    #[test]
    fn test_identity_c64() {
        test_identity_generic::<Complex64>();
    }

    #[test]
    fn test_one_by_one() {
        let m = Matrix::from_vec2d(vec![vec![Complex64::new(2.0, -3.0)]]).unwrap();
        assert_eq!(determinant(&m).unwrap(), Complex64::new(2.0, -3.0));
    }

    #[test]
    fn test_triangular_is_diagonal_product() {
        let m = Matrix::from_vec2d(vec![
            vec![2.0, 7.0, -1.0],
            vec![0.0, 3.0, 5.0],
            vec![0.0, 0.0, 4.0],
        ])
        .unwrap();
        assert_relative_eq!(determinant(&m).unwrap(), 24.0, epsilon = 1e-12);
    }

    #[test]
    fn test_row_swap_flips_sign() {
        let m = Matrix::from_vec2d(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut swapped = m.clone();
        swapped.swap_rows(0, 1);

        assert_relative_eq!(determinant(&m).unwrap(), -2.0, epsilon = 1e-12);
        assert_relative_eq!(determinant(&swapped).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_permutation_matrix() {
        let p = Matrix::from_vec2d(vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
        .unwrap();
        assert_eq!(determinant(&p).unwrap(), -1.0);
    }

    #[test]
    fn test_singular_is_exact_zero() {
        let m = Matrix::from_vec2d(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(determinant(&m).unwrap(), 0.0);

        let z = Matrix::<Complex64>::zeros(3, 3);
        assert_eq!(determinant(&z).unwrap(), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_complex_two_by_two() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(2.0, 0.0);
        let c = Complex64::new(3.0, 0.0);
        let d = Complex64::new(4.0, 4.0);
        let m = Matrix::from_vec2d(vec![vec![a, b], vec![c, d]]).unwrap();

        let det = determinant(&m).unwrap();
        let expected = a * d - b * c;
        assert_relative_eq!(det.re, expected.re, epsilon = 1e-12);
        assert_relative_eq!(det.im, expected.im, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_cofactor_expansion() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for n in 1..=5 {
            let rows: Vec<Vec<Complex64>> = (0..n)
                .map(|_| {
                    (0..n)
                        .map(|_| {
                            Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
                        })
                        .collect()
                })
                .collect();
            let m = Matrix::from_vec2d(rows).unwrap();

            let det = determinant(&m).unwrap();
            let reference = laplace(&m);
            assert!(
                (det - reference).norm() <= 1e-10 * (1.0 + reference.norm()),
                "n = {n}: {det} vs {reference}"
            );
        }
    }

    #[test]
    fn test_tiny_pivot_is_not_zero() {
        // |1e-170|^2 underflows, so the pivot must be ranked by |re| + |im|.
        let m = Matrix::from_vec2d(vec![vec![0.0, 1.0], vec![1e-170, 0.0]]).unwrap();
        assert_eq!(determinant(&m).unwrap(), -1e-170);
        assert_eq!(
            determinant(&m.to_complex()).unwrap(),
            Complex64::new(-1e-170, 0.0)
        );
    }

    #[test]
    fn test_huge_pivot_candidates_are_ranked() {
        let m = Matrix::from_vec2d(vec![vec![1e155, 1.0], vec![2e155, 3.0]]).unwrap();
        assert_relative_eq!(determinant(&m).unwrap(), 1e155, max_relative = 1e-15);

        let det = determinant(&m.to_complex()).unwrap();
        assert_relative_eq!(det.re, 1e155, max_relative = 1e-15);
        assert_eq!(det.im, 0.0);
    }

    #[test]
    fn test_tiny_complex_elimination() {
        // Eliminating below a 1e-170 pivot divides by it.
        let m = Matrix::from_vec2d(vec![
            vec![Complex64::new(0.0, 1e-170), Complex64::new(1.0, 0.0)],
            vec![Complex64::new(0.0, 5e-171), Complex64::new(2.0, 0.0)],
        ])
        .unwrap();
        // det = (1e-170 i)(2) - (1)(5e-171 i) = 1.5e-170 i
        let det = determinant(&m).unwrap();
        assert_eq!(det.re, 0.0);
        assert_relative_eq!(det.im, 1.5e-170, max_relative = 1e-15);
    }

    #[test]
    fn test_shape_errors() {
        let rect = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            determinant(&rect).unwrap_err(),
            CramerError::NotSquare { nrows: 2, ncols: 3 }
        );

        let empty = Matrix::<f64>::zeros(0, 0);
        assert_eq!(determinant(&empty).unwrap_err(), CramerError::EmptySystem);
    }

    #[test]
    fn test_input_not_modified() {
        let m = Matrix::from_vec2d(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let before = m.clone();
        let _ = determinant(&m).unwrap();
        assert_eq!(m, before);
    }
}
