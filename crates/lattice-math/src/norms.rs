// ─────────────────────────────────────────────────────────────────────
// SCPN Lattice Core — Norms
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Matrix norms: Frobenius, L1 (max absolute column sum) and spectral.

use lattice_types::error::LatticeResult;

use crate::dense::Matrix;
use crate::eigen::PowerIterationConfig;

impl Matrix {
    /// Frobenius norm: `sqrt(Σ |a_ij|²)`.
    pub fn frobenius_norm(&self) -> f64 {
        self.array().iter().map(|v| v.norm_sqr()).sum::<f64>().sqrt()
    }

    /// L1 operator norm: maximum absolute column sum, computed as the
    /// maximum row sum of the transpose.
    pub fn l1_norm(&self) -> f64 {
        let t = self.transpose();
        (0..t.rows())
            .map(|i| (0..t.cols()).map(|j| t.get(i, j).norm()).sum::<f64>())
            .fold(0.0, f64::max)
    }

    /// Spectral norm: square root of the magnitude of the dominant
    /// eigenvalue of `AᵗA`, found by power iteration.
    pub fn spectral_norm(&self, config: &PowerIterationConfig) -> LatticeResult<f64> {
        let gram = self.transpose().dot(self);
        let lambda = gram.dominant_eigenvalue(config)?;
        Ok(lambda.norm().sqrt())
    }
}

// ═══════════════════════════════ tests ═══════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_frobenius_norm() {
        let a = Matrix::from_real(&[vec![3.0, 0.0], vec![0.0, 4.0]]);
        assert!((a.frobenius_norm() - 5.0).abs() < 1e-12);

        // |3+4i| = 5
        let z = Matrix::from_complex(&[vec![Complex64::new(3.0, 4.0)]]);
        assert!((z.frobenius_norm() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_l1_norm_is_max_column_sum() {
        let a = Matrix::from_real(&[vec![1.0, -7.0], vec![2.0, 3.0]]);
        // Column sums: |1|+|2| = 3, |-7|+|3| = 10
        assert!((a.l1_norm() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_spectral_norm_diagonal() {
        let a = Matrix::from_real(&[vec![3.0, 0.0], vec![0.0, -2.0]]);
        let s = a.spectral_norm(&PowerIterationConfig::default()).unwrap();
        assert!((s - 3.0).abs() < 1e-6, "spectral norm = {s}");
    }

    #[test]
    fn test_spectral_norm_bounded_by_frobenius() {
        let a = Matrix::from_real(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let s = a.spectral_norm(&PowerIterationConfig::default()).unwrap();
        assert!(s <= a.frobenius_norm() + 1e-9);
        assert!(s > 0.0);
    }
}
