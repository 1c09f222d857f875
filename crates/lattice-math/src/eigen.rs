// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Eigen
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dominant eigen-pair via power iteration.
//!
//! ```text
//! v₀ = (1, 1, ..., 1)ᵗ
//! repeat:
//!   y = A·v / ||A·v||            (Frobenius norm of the column)
//!   if Σᵢ |yᵢ − vᵢ| < tol: converged
//!   v = y
//! ```
//!
//! The iteration either converges within `max_iter` steps or fails
//! with [`LatticeError::ConvergenceFailure`] carrying the last
//! residual. The dominant eigenvalue is the Rayleigh quotient
//! `(vᵗAv)/(vᵗv)` evaluated at the converged eigenvector.

use lattice_types::error::{LatticeError, LatticeResult};
use num_complex::Complex64;

use crate::dense::Matrix;

/// Budget and tolerance for the power iteration.
#[derive(Debug, Clone)]
pub struct PowerIterationConfig {
    /// Maximum number of multiply-normalize steps (default: 1000).
    pub max_iter: usize,
    /// Convergence threshold on the summed component-wise magnitude
    /// difference between successive iterates (default: 1e-10).
    pub tol: f64,
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        PowerIterationConfig {
            max_iter: 1000,
            tol: 1e-10,
        }
    }
}

impl Matrix {
    /// Dominant eigenvector as an `n × 1` column, normalized to unit
    /// Frobenius norm.
    pub fn dominant_eigenvector(&self, config: &PowerIterationConfig) -> LatticeResult<Matrix> {
        if !self.is_square() {
            return Err(LatticeError::InvalidArgument(format!(
                "power iteration requires a square matrix, got {}x{}",
                self.rows(),
                self.cols()
            )));
        }
        let n = self.rows();
        let mut v = Matrix::with_shape(n, 1);
        for i in 0..n {
            v.set(i, 0, Complex64::new(1.0, 0.0));
        }

        let mut residual = f64::INFINITY;
        for _ in 0..config.max_iter {
            let y = self.dot(&v);
            let norm = y.frobenius_norm();
            if norm == 0.0 {
                // A annihilated the iterate; the residual cannot shrink
                break;
            }
            let y = y.scaled(1.0 / norm);

            residual = (0..n).map(|i| (y.get(i, 0) - v.get(i, 0)).norm()).sum();
            v = y;
            if residual < config.tol {
                return Ok(v);
            }
        }

        Err(LatticeError::ConvergenceFailure {
            iterations: config.max_iter,
            residual,
        })
    }

    /// Dominant eigenvalue: Rayleigh quotient at the dominant
    /// eigenvector.
    pub fn dominant_eigenvalue(&self, config: &PowerIterationConfig) -> LatticeResult<Complex64> {
        let v = self.dominant_eigenvector(config)?;
        let vt = v.transpose();
        let numerator = vt.dot(&self.dot(&v)).get(0, 0);
        let denominator = vt.dot(&v).get(0, 0);
        Ok(numerator / denominator)
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_iteration_golden_ratio_matrix() {
        let a = Matrix::from_real(&[vec![1.0, 1.0], vec![1.0, 0.0]]);
        let v = a
            .dominant_eigenvector(&PowerIterationConfig::default())
            .unwrap();
        assert_eq!(v.shape(), (2, 1));
        assert!(
            (v.get(0, 0).re - 0.8507).abs() < 1e-4,
            "v[0] = {}",
            v.get(0, 0)
        );
        assert!(
            (v.get(1, 0).re - 0.5257).abs() < 1e-4,
            "v[1] = {}",
            v.get(1, 0)
        );
    }

    #[test]
    fn test_rayleigh_quotient_golden_ratio() {
        let a = Matrix::from_real(&[vec![1.0, 1.0], vec![1.0, 0.0]]);
        let lambda = a
            .dominant_eigenvalue(&PowerIterationConfig::default())
            .unwrap();
        let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
        assert!((lambda.re - phi).abs() < 1e-3, "lambda = {lambda}");
        assert!(lambda.im.abs() < 1e-8);
    }

    #[test]
    fn test_diagonal_matrix_dominant_direction() {
        let a = Matrix::from_real(&[vec![5.0, 0.0], vec![0.0, 1.0]]);
        let v = a
            .dominant_eigenvector(&PowerIterationConfig::default())
            .unwrap();
        // Dominant axis is e1
        assert!(v.get(0, 0).norm() > 0.999, "v[0] = {}", v.get(0, 0));
        assert!(v.get(1, 0).norm() < 1e-3, "v[1] = {}", v.get(1, 0));
    }

    #[test]
    fn test_exhausted_budget_is_convergence_failure() {
        // Rotation by 90°: iterates cycle and never settle
        let a = Matrix::from_real(&[vec![0.0, -1.0], vec![1.0, 0.0]]);
        let config = PowerIterationConfig {
            max_iter: 25,
            tol: 1e-12,
        };
        match a.dominant_eigenvector(&config) {
            Err(LatticeError::ConvergenceFailure {
                iterations,
                residual,
            }) => {
                assert_eq!(iterations, 25);
                assert!(residual > 0.0);
            }
            other => panic!("Expected ConvergenceFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_rectangular_rejected() {
        let a = Matrix::with_shape(2, 3);
        assert!(matches!(
            a.dominant_eigenvector(&PowerIterationConfig::default()),
            Err(LatticeError::InvalidArgument(_))
        ));
    }
}
