//! Dense linear solve for assembled MNA systems.

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::error::{NodalError, Result};

/// Solve a linear system Ax = b using LU decomposition with partial pivoting.
///
/// Each row of A and b is first divided by that row's largest magnitude,
/// so conductances and the unit coupling entries of voltage sources are
/// compared on the same scale. A pivot of the equilibrated matrix whose
/// magnitude is at most `pivot_tolerance` is treated as zero and reported
/// as [`NodalError::SingularMatrix`], as is an all-zero row. A 0×0 system
/// has the empty solution.
pub fn solve_dense(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    pivot_tolerance: f64,
) -> Result<DVector<f64>> {
    if a.nrows() != a.ncols() {
        return Err(NodalError::DimensionMismatch {
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    if a.nrows() != b.len() {
        return Err(NodalError::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    if a.is_empty() {
        return Ok(DVector::zeros(0));
    }

    let (scaled_a, scaled_b) = equilibrate_rows(a, b)?;
    let threshold = pivot_tolerance;
    let lu = scaled_a.lu();

    let smallest_pivot = lu
        .u()
        .diagonal()
        .iter()
        .fold(f64::INFINITY, |acc, p| acc.min(p.abs()));
    debug!(
        "LU of {}x{} system: smallest pivot {:.3e}, threshold {:.3e}",
        a.nrows(),
        a.ncols(),
        smallest_pivot,
        threshold
    );
    if smallest_pivot <= threshold {
        return Err(NodalError::SingularMatrix);
    }

    let x = lu.solve(&scaled_b).ok_or(NodalError::SingularMatrix)?;
    if x.iter().any(|v| !v.is_finite()) {
        return Err(NodalError::SingularMatrix);
    }
    Ok(x)
}

/// Divide every row of A and b by the row's largest |a_ij|.
/// The solution of the system is unchanged.
fn equilibrate_rows(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Result<(DMatrix<f64>, DVector<f64>)> {
    let mut a = a.clone();
    let mut b = b.clone();
    for i in 0..a.nrows() {
        let scale = a.row(i).amax();
        if scale == 0.0 {
            return Err(NodalError::SingularMatrix);
        }
        a.row_mut(i).unscale_mut(scale);
        b[i] /= scale;
    }
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DEFAULT_PIVOT_TOLERANCE;
    use approx::assert_relative_eq;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn test_solve_simple() {
        // 2x + y = 5
        // x + 3y = 6
        // Solution: x = 1.8, y = 1.4
        let a = dmatrix![2.0, 1.0; 1.0, 3.0];
        let b = dvector![5.0, 6.0];

        let x = solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE).unwrap();

        assert_relative_eq!(x, dvector![1.8, 1.4], epsilon = 1e-10);
    }

    #[test]
    fn test_singular_matrix() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0]; // Singular (row 2 = 2 * row 1)
        let b = dvector![1.0, 2.0];

        let result = solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE);
        assert!(matches!(result, Err(NodalError::SingularMatrix)));
    }

    #[test]
    fn test_nearly_dependent_rows_are_singular() {
        let a = dmatrix![1.0, 1.0; 1.0, 1.0 + 1e-14];
        let b = dvector![1.0, 2.0];

        let result = solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE);
        assert!(matches!(result, Err(NodalError::SingularMatrix)));

        // A looser caller-chosen tolerance accepts it.
        assert!(solve_dense(&a, &b, 0.0).is_ok());
    }

    #[test]
    fn test_row_scaling_does_not_mask_well_posed_systems() {
        // 1 V across two 2 TΩ resistors: conductances of 5e-13 next to the
        // unit coupling entries of the source.
        let g = 5e-13;
        let a = dmatrix![
            g, -g, 1.0;
            -g, 2.0 * g, 0.0;
            1.0, 0.0, 0.0
        ];
        let b = dvector![0.0, 0.0, 1.0];
        let x = solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(x[2], -g * 0.5, max_relative = 1e-9);

        // Same divider with 1 µΩ resistors.
        let g = 1e6;
        let a = dmatrix![
            g, -g, 1.0;
            -g, 2.0 * g, 0.0;
            1.0, 0.0, 0.0
        ];
        let x = solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(x[2], -5e5, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_row_is_singular() {
        let a = dmatrix![1.0, 0.0; 0.0, 0.0];
        let b = dvector![1.0, 0.0];
        assert!(matches!(
            solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE),
            Err(NodalError::SingularMatrix)
        ));
    }

    #[test]
    fn test_zero_matrix() {
        let a = DMatrix::zeros(2, 2);
        let b = dvector![0.0, 0.0];
        assert!(matches!(
            solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE),
            Err(NodalError::SingularMatrix)
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = dmatrix![1.0, 2.0; 3.0, 4.0];
        let b = dvector![1.0, 2.0, 3.0];

        let result = solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE);
        assert!(matches!(result, Err(NodalError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_empty_system() {
        let a = DMatrix::zeros(0, 0);
        let b = DVector::zeros(0);
        let x = solve_dense(&a, &b, DEFAULT_PIVOT_TOLERANCE).unwrap();
        assert!(x.is_empty());
    }
}
